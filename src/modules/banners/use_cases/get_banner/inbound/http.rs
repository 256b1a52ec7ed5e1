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
            tracing::warn!(error = %err, "rejected banner lookup");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match state.store.get(id).await {
        Ok(banner) => Json(banner).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "banner lookup failed");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
