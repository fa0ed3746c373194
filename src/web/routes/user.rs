use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};

use crate::{
    auth::{hash_password, verify_password},
    model::{
        Repository, ResourceTyped,
        entity::{UserEntity, UserEntityCreate},
    },
    web::{
        AppState, ErrorResponse, JsonBody, WebError, WebResult,
        dto::user::{
            DEFAULT_LEARNING_GOAL, DEFAULT_PROFICIENCY_LEVEL, LoginRequest, LoginResponse,
            RegisterRequest, RegisterResponse,
        },
        required,
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/register", post(user_register_handler))
        .route("/login", post(user_login_handler))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    description = "Creates new user in database",
    responses(
        (status = 201, description = "User created successfully", body = RegisterResponse),
        (status = 400, description = "Required field is missing", body = ErrorResponse),
        (status = 409, description = "User already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "account"
)]
async fn user_register_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> WebResult<impl IntoResponse> {
    let username = required(payload.username, "username")?;
    let password = required(payload.password, "password")?;
    let email = required(payload.email, "email")?;

    let password_hash = hash_password(&password).map_err(WebError::server_crypt_error)?;
    let data = UserEntityCreate {
        username,
        password_hash,
        email,
        proficiency_level: payload
            .proficiency_level
            .unwrap_or_else(|| DEFAULT_PROFICIENCY_LEVEL.to_string()),
        learning_goal: payload
            .learning_goal
            .unwrap_or_else(|| DEFAULT_LEARNING_GOAL.to_string()),
    };

    let created = UserEntity::create(state.mm(), data)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                WebError::registration_conflict()
            } else {
                WebError::resource_fetch_error(UserEntity::get_resource_type(), e)
            }
        })?;

    tracing::info!(user_id = %created.id(), "user registered");
    Ok((StatusCode::CREATED, Json(RegisterResponse::new(created.id()))))
}

#[utoipa::path(
    post,
    path = "/login",
    description = "Checks user credentials",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "User signed in", body = LoginResponse),
        (status = 400, description = "Required field is missing", body = ErrorResponse),
        (status = 401, description = "Credentials invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "account",
)]
async fn user_login_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> WebResult<impl IntoResponse> {
    let username = required(payload.username, "username")?;
    let password = required(payload.password, "password")?;

    let found = UserEntity::find_by_username(state.mm(), &username)
        .await
        .map_err(|e| WebError::resource_fetch_error(UserEntity::get_resource_type(), e))?;

    let Some(found) = found else {
        return Err(WebError::auth_invalid_credentials());
    };

    let is_verified =
        verify_password(found.hash(), &password).map_err(WebError::server_crypt_error)?;

    if !is_verified {
        return Err(WebError::auth_invalid_credentials());
    }

    Ok((StatusCode::OK, Json(LoginResponse::new(found.id()))))
}
