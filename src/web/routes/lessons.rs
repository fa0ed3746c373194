use axum::routing::post;
use axum::Json;
use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum::http::StatusCode;

use crate::model::entity::{Lesson, LessonProgress, LessonProgressCreate};
use crate::model::{Repository, ResourceTyped};
use crate::web::dto::MessageResponse;
use crate::web::dto::lessons::{CompleteLessonRequest, LessonsResponse};
use crate::web::{required, AppState, ErrorResponse, JsonBody, PathParams, WebError, WebResult};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/lessons/{language}/{level}", get(lessons_list_handler))
        .route("/complete_lesson", post(lessons_complete_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/lessons/{language}/{level}",
    description = "Lists lessons for a language and level",
    params(
        ("language" = String, Path, description = "Language of the lessons, e.g. `spanish`"),
        ("level" = String, Path, description = "Proficiency level, e.g. `beginner`")
    ),
    responses(
        (status = 200, description = "Matching lessons, possibly none", body = LessonsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "lessons"
)]
async fn lessons_list_handler(
    State(state): State<AppState>,
    PathParams((language, level)): PathParams<(String, String)>,
) -> WebResult<impl IntoResponse> {
    let lessons = Lesson::find_by_language_and_level(state.mm(), &language, &level)
        .await
        .map(LessonsResponse::from_entities)
        .map_err(|e| WebError::resource_fetch_error(Lesson::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(lessons)))
}

#[utoipa::path(
    post,
    path = "/complete_lesson",
    description = "Records a lesson completion. Neither the lesson nor earlier completions are checked",
    request_body = CompleteLessonRequest,
    responses(
        (status = 200, description = "Lesson marked", body = MessageResponse),
        (status = 400, description = "Required field is missing", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "lessons"
)]
async fn lessons_complete_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CompleteLessonRequest>,
) -> WebResult<impl IntoResponse> {
    let user_id = required(payload.user_id, "user_id")?;
    let lesson_id = required(payload.lesson_id, "lesson_id")?;

    LessonProgress::create(state.mm(), LessonProgressCreate::new(user_id, lesson_id))
        .await
        .map_err(|e| WebError::resource_fetch_error(LessonProgress::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(MessageResponse::new("Lesson marked as completed"))))
}
