use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::banners::adapters::inbound::id_param::IdParams;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> impl IntoResponse {
    let id = match params.id() {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(error = %err, "rejected banner removal");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match state.remove_handler.handle(id).await {
        Ok(removed) => Json(removed).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "banner removal failed");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
