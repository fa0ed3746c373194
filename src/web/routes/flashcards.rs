use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};

use crate::{
    model::{ResourceTyped, entity::Flashcard},
    web::{
        AppState, ErrorResponse, PathParams, WebError, WebResult,
        dto::flashcards::FlashcardsResponse,
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/flashcards/{language}", get(flashcards_by_language_handler))
        .route("/flashcards/{language}/{level}", get(flashcards_by_level_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/flashcards/{language}",
    description = "Lists every flashcard of a language",
    params(
        ("language" = String, Path, description = "Language of the flashcards")
    ),
    responses(
        (status = 200, description = "Matching flashcards, possibly none", body = FlashcardsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "flashcards"
)]
async fn flashcards_by_language_handler(
    State(state): State<AppState>,
    PathParams(language): PathParams<String>,
) -> WebResult<impl IntoResponse> {
    let cards = Flashcard::find_by_language(state.mm(), &language)
        .await
        .map(FlashcardsResponse::from_entities)
        .map_err(|e| WebError::resource_fetch_error(Flashcard::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(cards)))
}

#[utoipa::path(
    get,
    path = "/flashcards/{language}/{level}",
    description = "Lists flashcards of a language narrowed to one level",
    params(
        ("language" = String, Path, description = "Language of the flashcards"),
        ("level" = String, Path, description = "Proficiency level")
    ),
    responses(
        (status = 200, description = "Matching flashcards, possibly none", body = FlashcardsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "flashcards"
)]
async fn flashcards_by_level_handler(
    State(state): State<AppState>,
    PathParams((language, level)): PathParams<(String, String)>,
) -> WebResult<impl IntoResponse> {
    let cards = Flashcard::find_by_language_and_level(state.mm(), &language, &level)
        .await
        .map(FlashcardsResponse::from_entities)
        .map_err(|e| WebError::resource_fetch_error(Flashcard::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(cards)))
}
