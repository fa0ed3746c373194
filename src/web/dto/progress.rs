use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserProgressResponse {
    pub user_id: Uuid,
    pub lessons_completed: i64,
    pub quizzes_attempted: i64,
    pub correct_answers: i64,
}

impl UserProgressResponse {
    pub fn new(
        user_id: Uuid,
        lessons_completed: i64,
        quizzes_attempted: i64,
        correct_answers: i64,
    ) -> Self {
        Self {
            user_id,
            lessons_completed,
            quizzes_attempted,
            correct_answers,
        }
    }
}
