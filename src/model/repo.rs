use crate::model::{ModelManager, error::DatabaseResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    User,
    Lesson,
    Quiz,
    Flashcard,
    LessonProgress,
    QuizAttempt,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "User"),
            Self::Lesson => write!(f, "Lesson"),
            Self::Quiz => write!(f, "Quiz"),
            Self::Flashcard => write!(f, "Flashcard"),
            Self::LessonProgress => write!(f, "Lesson progress"),
            Self::QuizAttempt => write!(f, "Quiz attempt"),
        }
    }
}

pub trait ResourceTyped {
    fn get_resource_type() -> ResourceType;
}

/// Rows are only ever inserted and read back; nothing here updates or deletes them.
#[async_trait::async_trait]
pub trait Repository<T, Create, V>
where
    T: ResourceTyped,
    V: Clone + Copy,
{
    async fn create(mm: &ModelManager, data: Create) -> DatabaseResult<T>;

    async fn find_by_id(mm: &ModelManager, id: V) -> DatabaseResult<Option<T>>;
}
