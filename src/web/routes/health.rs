use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::web::{AppState, dto::MessageResponse};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", get(home_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    description = "Liveness check, never touches the database",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse),
    ),
    tag = "health"
)]
async fn home_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(MessageResponse::new("lingua api is running")))
}
