use crate::model::repo::{ResourceType, ResourceTyped};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::model::{ModelManager, error::DatabaseResult, repo::Repository};

#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct UserEntity {
    id: Uuid,
    username: String,
    #[serde(skip)]
    password_hash: String,
    email: String,
    proficiency_level: String,
    learning_goal: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UserEntityCreate {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub proficiency_level: String,
    pub learning_goal: String,
}

impl ResourceTyped for UserEntity {
    fn get_resource_type() -> ResourceType {
        ResourceType::User
    }
}

impl UserEntity {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn hash(&self) -> &str {
        &self.password_hash
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn proficiency_level(&self) -> &str {
        &self.proficiency_level
    }

    pub fn learning_goal(&self) -> &str {
        &self.learning_goal
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[async_trait::async_trait]
impl Repository<UserEntity, UserEntityCreate, Uuid> for UserEntity {
    async fn create(mm: &ModelManager, data: UserEntityCreate) -> DatabaseResult<Self> {
        let user = sqlx::query_as(
            r#"
            INSERT INTO users (id, username, password_hash, email, proficiency_level, learning_goal)
            VALUES ($1,$2,$3,$4,$5,$6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(&data.email)
        .bind(&data.proficiency_level)
        .bind(&data.learning_goal)
        .fetch_one(mm.executor())
        .await?;

        Ok(user)
    }

    async fn find_by_id(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let user = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(mm.executor())
            .await?;
        Ok(user)
    }
}

impl UserEntity {
    pub async fn find_by_username(
        mm: &ModelManager,
        username: &str,
    ) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }
}
