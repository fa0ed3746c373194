use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::Lesson;

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LessonResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub language: String,
    pub level: String,
}

impl From<Lesson> for LessonResponse {
    fn from(lesson: Lesson) -> Self {
        Self {
            id: lesson.id(),
            title: lesson.title().to_string(),
            content: lesson.content().to_string(),
            language: lesson.language().to_string(),
            level: lesson.level().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LessonsResponse {
    pub lessons: Vec<LessonResponse>,
}

impl LessonsResponse {
    pub fn from_entities(lessons: Vec<Lesson>) -> Self {
        Self {
            lessons: lessons.into_iter().map(LessonResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CompleteLessonRequest {
    pub user_id: Option<Uuid>,
    pub lesson_id: Option<Uuid>,
}
