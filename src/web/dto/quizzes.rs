use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::Quiz;

/// Answer options keyed by their letter. The correct one is not part of the response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct QuizOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct QuizResponse {
    pub id: Uuid,
    pub question: String,
    pub options: QuizOptions,
}

impl From<Quiz> for QuizResponse {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id(),
            question: quiz.question().to_string(),
            options: QuizOptions {
                a: quiz.option_a().to_string(),
                b: quiz.option_b().to_string(),
                c: quiz.option_c().to_string(),
                d: quiz.option_d().to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct QuizzesResponse {
    pub quizzes: Vec<QuizResponse>,
}

impl QuizzesResponse {
    pub fn from_entities(quizzes: Vec<Quiz>) -> Self {
        Self {
            quizzes: quizzes.into_iter().map(QuizResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SubmitQuizRequest {
    pub user_id: Option<Uuid>,
    pub quiz_id: Option<Uuid>,
    pub selected_answer: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SubmitQuizResponse {
    pub correct: bool,
}
