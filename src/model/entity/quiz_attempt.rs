use crate::model::repo::{ResourceType, ResourceTyped};
use crate::model::{ModelManager, error::DatabaseResult, repo::Repository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct QuizAttempt {
    id: Uuid,
    user_id: Uuid,
    quiz_id: Uuid,
    selected_answer: String,
    is_correct: bool,
    attempted_at: DateTime<Utc>,
}

impl ResourceTyped for QuizAttempt {
    fn get_resource_type() -> ResourceType {
        ResourceType::QuizAttempt
    }
}

impl QuizAttempt {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn quiz_id(&self) -> Uuid {
        self.quiz_id
    }

    pub fn selected_answer(&self) -> &str {
        &self.selected_answer
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn attempted_at(&self) -> DateTime<Utc> {
        self.attempted_at
    }
}

pub struct QuizAttemptCreate {
    pub user_id: Uuid,
    pub quiz_id: Uuid,
    pub selected_answer: String,
    pub is_correct: bool,
}

impl QuizAttemptCreate {
    pub fn new(user_id: Uuid, quiz_id: Uuid, selected_answer: String, is_correct: bool) -> Self {
        Self {
            user_id,
            quiz_id,
            selected_answer,
            is_correct,
        }
    }
}

#[async_trait]
impl Repository<QuizAttempt, QuizAttemptCreate, Uuid> for QuizAttempt {
    async fn create(mm: &ModelManager, data: QuizAttemptCreate) -> DatabaseResult<Self> {
        let row = sqlx::query_as(
            r#"
            INSERT INTO quiz_attempts (id, user_id, quiz_id, selected_answer, is_correct)
            VALUES ($1,$2,$3,$4,$5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.user_id)
        .bind(data.quiz_id)
        .bind(&data.selected_answer)
        .bind(data.is_correct)
        .fetch_one(mm.executor())
        .await?;

        Ok(row)
    }

    async fn find_by_id(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM quiz_attempts WHERE id = $1")
            .bind(id)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }
}

impl QuizAttempt {
    pub async fn count_for_user(mm: &ModelManager, user_id: Uuid) -> DatabaseResult<i64> {
        let result: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM quiz_attempts WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(mm.executor())
                .await?;
        Ok(result)
    }

    pub async fn count_correct_for_user(mm: &ModelManager, user_id: Uuid) -> DatabaseResult<i64> {
        let result: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM quiz_attempts WHERE user_id = $1 AND is_correct = TRUE",
        )
        .bind(user_id)
        .fetch_one(mm.executor())
        .await?;
        Ok(result)
    }
}
