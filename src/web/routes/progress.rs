use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use uuid::Uuid;

use crate::{
    model::{
        DatabaseResult, ResourceType, ResourceTyped,
        entity::{LessonProgress, QuizAttempt},
    },
    web::{
        AppState, ErrorResponse, PathParams, WebError, WebResult,
        dto::progress::UserProgressResponse,
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/user_progress/{user_id}", get(progress_get_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/user_progress/{user_id}",
    description = "Get progress counters of a user. Unknown users simply have zero activity",
    params(
        ("user_id" = Uuid, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Progress found", body = UserProgressResponse),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress"
)]
async fn progress_get_handler(
    State(state): State<AppState>,
    PathParams(user_id): PathParams<Uuid>,
) -> WebResult<impl IntoResponse> {
    let mm = state.mm();

    let (lessons_completed, quizzes_attempted, correct_answers) = tokio::try_join!(
        count(
            LessonProgress::get_resource_type(),
            LessonProgress::count_completed(mm, user_id)
        ),
        count(
            QuizAttempt::get_resource_type(),
            QuizAttempt::count_for_user(mm, user_id)
        ),
        count(
            QuizAttempt::get_resource_type(),
            QuizAttempt::count_correct_for_user(mm, user_id)
        ),
    )?;

    let res = UserProgressResponse::new(
        user_id,
        lessons_completed,
        quizzes_attempted,
        correct_answers,
    );

    Ok((StatusCode::OK, Json(res)))
}

/// Tags a failed counter with the table it reads from.
async fn count<F>(resource_type: ResourceType, query: F) -> WebResult<i64>
where
    F: Future<Output = DatabaseResult<i64>>,
{
    query
        .await
        .map_err(|e| WebError::resource_fetch_error(resource_type, e))
}
