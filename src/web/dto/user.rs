use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_PROFICIENCY_LEVEL: &str = "beginner";
pub const DEFAULT_LEARNING_GOAL: &str = "general";

/// Every field is optional at the decoding level so a missing one can be reported by name.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    /// Defaults to `beginner`
    pub proficiency_level: Option<String>,
    /// Defaults to `general`
    pub learning_goal: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: Uuid,
}

impl RegisterResponse {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            message: String::from("User registered successfully"),
            user_id,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: Uuid,
}

impl LoginResponse {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            message: String::from("Login successful"),
            user_id,
        }
    }
}
