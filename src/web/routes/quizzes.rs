use crate::{
    model::{
        Repository, ResourceTyped,
        entity::{Quiz, QuizAttempt, QuizAttemptCreate},
    },
    web::{
        AppState, ErrorResponse, JsonBody, PathParams, WebError, WebResult,
        dto::quizzes::{QuizzesResponse, SubmitQuizRequest, SubmitQuizResponse},
        required,
    },
};
use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/quizzes/{lesson_id}", get(quizzes_list_handler))
        .route("/submit_quiz", post(quizzes_submit_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/quizzes/{lesson_id}",
    description = "Lists the quiz questions of a lesson with options keyed A to D",
    params(
        ("lesson_id" = Uuid, Path, description = "ID of the lesson")
    ),
    responses(
        (status = 200, description = "Quizzes of the lesson, possibly none", body = QuizzesResponse),
        (status = 400, description = "Malformed lesson id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "quizzes"
)]
async fn quizzes_list_handler(
    State(state): State<AppState>,
    PathParams(lesson_id): PathParams<Uuid>,
) -> WebResult<impl IntoResponse> {
    let quizzes = Quiz::find_by_lesson(state.mm(), lesson_id)
        .await
        .map(QuizzesResponse::from_entities)
        .map_err(|e| WebError::resource_fetch_error(Quiz::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(quizzes)))
}

#[utoipa::path(
    post,
    path = "/submit_quiz",
    description = "Checks an answer and records the attempt",
    request_body = SubmitQuizRequest,
    responses(
        (status = 200, description = "Answer checked", body = SubmitQuizResponse),
        (status = 400, description = "Required field is missing", body = ErrorResponse),
        (status = 404, description = "Quiz not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    ),
    tag = "quizzes"
)]
async fn quizzes_submit_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SubmitQuizRequest>,
) -> WebResult<impl IntoResponse> {
    let user_id = required(req.user_id, "user_id")?;
    let quiz_id = required(req.quiz_id, "quiz_id")?;
    let selected_answer = required(req.selected_answer, "selected_answer")?;

    let quiz = Quiz::find_by_id(state.mm(), quiz_id)
        .await
        .map_err(|e| WebError::resource_fetch_error(Quiz::get_resource_type(), e))?
        .ok_or_else(|| WebError::resource_not_found(Quiz::get_resource_type()))?;

    let correct = quiz.is_correct_answer(&selected_answer);

    QuizAttempt::create(
        state.mm(),
        QuizAttemptCreate::new(user_id, quiz.id(), selected_answer, correct),
    )
    .await
    .map_err(|e| WebError::resource_fetch_error(QuizAttempt::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(SubmitQuizResponse { correct })))
}
