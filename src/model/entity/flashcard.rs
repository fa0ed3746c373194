use crate::model::repo::{ResourceType, ResourceTyped};
use crate::model::{ModelManager, error::DatabaseResult, repo::Repository};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Flashcard {
    id: Uuid,
    word: String,
    translation: String,
    language: String,
    level: String,
}

impl ResourceTyped for Flashcard {
    fn get_resource_type() -> ResourceType {
        ResourceType::Flashcard
    }
}

impl Flashcard {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn level(&self) -> &str {
        &self.level
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct FlashcardCreate {
    pub word: String,
    pub translation: String,
    pub language: String,
    pub level: String,
}

#[async_trait]
impl Repository<Flashcard, FlashcardCreate, Uuid> for Flashcard {
    async fn create(mm: &ModelManager, data: FlashcardCreate) -> DatabaseResult<Self> {
        let card = sqlx::query_as(
            r#"
            INSERT INTO flashcards (id, word, translation, language, level)
            VALUES ($1,$2,$3,$4,$5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.word)
        .bind(&data.translation)
        .bind(&data.language)
        .bind(&data.level)
        .fetch_one(mm.executor())
        .await?;

        Ok(card)
    }

    async fn find_by_id(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM flashcards WHERE id = $1")
            .bind(id)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }
}

impl Flashcard {
    /// Language and level compare case-insensitively.
    pub async fn find_by_language(mm: &ModelManager, language: &str) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            "SELECT * FROM flashcards WHERE lower(language) = lower($1) ORDER BY word, id",
        )
        .bind(language)
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }

    pub async fn find_by_language_and_level(
        mm: &ModelManager,
        language: &str,
        level: &str,
    ) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            r#"
            SELECT * FROM flashcards
            WHERE lower(language) = lower($1) AND lower(level) = lower($2)
            ORDER BY word, id
            "#,
        )
        .bind(language)
        .bind(level)
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }
}
