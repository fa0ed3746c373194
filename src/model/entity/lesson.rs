use crate::model::repo::{ResourceType, ResourceTyped};
use crate::model::{ModelManager, error::DatabaseResult, repo::Repository};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Lesson {
    id: Uuid,
    title: String,
    content: String,
    language: String,
    level: String,
}

impl ResourceTyped for Lesson {
    fn get_resource_type() -> ResourceType {
        ResourceType::Lesson
    }
}

impl Lesson {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn level(&self) -> &str {
        &self.level
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LessonCreate {
    pub title: String,
    pub content: String,
    pub language: String,
    pub level: String,
}

#[async_trait]
impl Repository<Lesson, LessonCreate, Uuid> for Lesson {
    async fn create(mm: &ModelManager, data: LessonCreate) -> DatabaseResult<Self> {
        let lesson = sqlx::query_as(
            r#"
            INSERT INTO lessons (id, title, content, language, level)
            VALUES ($1,$2,$3,$4,$5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.language)
        .bind(&data.level)
        .fetch_one(mm.executor())
        .await?;

        Ok(lesson)
    }

    async fn find_by_id(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM lessons WHERE id = $1")
            .bind(id)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }
}

impl Lesson {
    /// Empty when nothing matches, never an error. Matching ignores case.
    pub async fn find_by_language_and_level(
        mm: &ModelManager,
        language: &str,
        level: &str,
    ) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            r#"
            SELECT * FROM lessons
            WHERE lower(language) = lower($1) AND lower(level) = lower($2)
            ORDER BY title, id
            "#,
        )
        .bind(language)
        .bind(level)
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }

    pub async fn find_by_title(mm: &ModelManager, title: &str) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM lessons WHERE title = $1 LIMIT 1")
            .bind(title)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }
}
