use crate::{web::{doc::ApiDoc, AppState}, Config};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod flashcards;
pub mod health;
pub mod lessons;
pub mod progress;
pub mod quizzes;
pub mod user;

pub fn build_app<S: Send + Sync + Clone + 'static>(state: AppState, config: &Config) -> Router<S> {
    let mut router = Router::new()
        .merge(health::routes(state.clone()))
        .merge(user::routes(state.clone()))
        .merge(lessons::routes(state.clone()))
        .merge(quizzes::routes(state.clone()))
        .merge(flashcards::routes(state.clone()))
        .merge(progress::routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive());

    if config.app().docs() {
        let openapi = ApiDoc::openapi();

        router = router.merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", openapi));
    }

    router
}
