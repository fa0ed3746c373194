use serde::Serialize;

pub mod flashcards;
pub mod lessons;
pub mod progress;
pub mod quizzes;
pub mod user;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    message: String,
}

impl MessageResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}
