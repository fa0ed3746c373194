use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "lingua", description = "Language-learning backend"),
    paths(
        crate::web::routes::health::home_handler,
        crate::web::routes::user::user_register_handler,
        crate::web::routes::user::user_login_handler,
        crate::web::routes::lessons::lessons_list_handler,
        crate::web::routes::lessons::lessons_complete_handler,
        crate::web::routes::quizzes::quizzes_list_handler,
        crate::web::routes::quizzes::quizzes_submit_handler,
        crate::web::routes::flashcards::flashcards_by_language_handler,
        crate::web::routes::flashcards::flashcards_by_level_handler,
        crate::web::routes::progress::progress_get_handler,
    ),
    components(schemas(crate::web::ErrorResponse)),
)]
pub struct ApiDoc;
