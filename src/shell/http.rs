use std::path::Path;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::modules::banners::use_cases::get_banner::inbound::http as get_http;
use crate::modules::banners::use_cases::list_banners::inbound::http as list_http;
use crate::modules::banners::use_cases::remove_banner::inbound::http as remove_http;
use crate::modules::banners::use_cases::save_banner::inbound::http as save_http;
use crate::shell::state::AppState;

pub fn router(state: AppState, image_dir: &Path) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);
    Router::new()
        .route("/banners.getAll", get(list_http::handle))
        .route("/banners.getById", get(get_http::handle))
        .route("/banners.save", post(save_http::handle))
        .route(
            "/banners.removeById",
            post(remove_http::handle).get(remove_http::handle),
        )
        .nest_service("/web/banners", ServeDir::new(image_dir))
        .layer(body_limit)
        .with_state(state)
}
