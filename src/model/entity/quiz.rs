use crate::model::repo::{ResourceType, ResourceTyped};
use crate::model::{ModelManager, error::DatabaseResult, repo::Repository};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// A multiple choice question with four options labelled `A` to `D`.
#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Quiz {
    id: Uuid,
    lesson_id: Uuid,
    question: String,
    option_a: String,
    option_b: String,
    option_c: String,
    option_d: String,
    correct_option: String,
}

impl ResourceTyped for Quiz {
    fn get_resource_type() -> ResourceType {
        ResourceType::Quiz
    }
}

impl Quiz {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn lesson_id(&self) -> Uuid {
        self.lesson_id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn option_a(&self) -> &str {
        &self.option_a
    }

    pub fn option_b(&self) -> &str {
        &self.option_b
    }

    pub fn option_c(&self) -> &str {
        &self.option_c
    }

    pub fn option_d(&self) -> &str {
        &self.option_d
    }

    pub fn correct_option(&self) -> &str {
        &self.correct_option
    }

    /// Case-insensitive, surrounding whitespace ignored.
    pub fn is_correct_answer(&self, selected: &str) -> bool {
        selected
            .trim()
            .eq_ignore_ascii_case(self.correct_option.trim())
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct QuizCreate {
    pub lesson_id: Uuid,
    pub question: String,
    pub options: [String; 4],
    pub correct_option: String,
}

#[async_trait]
impl Repository<Quiz, QuizCreate, Uuid> for Quiz {
    async fn create(mm: &ModelManager, data: QuizCreate) -> DatabaseResult<Self> {
        let [a, b, c, d] = data.options;
        let quiz = sqlx::query_as(
            r#"
            INSERT INTO quizzes
                (id, lesson_id, question, option_a, option_b, option_c, option_d, correct_option)
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.lesson_id)
        .bind(&data.question)
        .bind(&a)
        .bind(&b)
        .bind(&c)
        .bind(&d)
        .bind(data.correct_option.trim().to_ascii_uppercase())
        .fetch_one(mm.executor())
        .await?;

        Ok(quiz)
    }

    async fn find_by_id(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM quizzes WHERE id = $1")
            .bind(id)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }
}

impl Quiz {
    pub async fn find_by_lesson(mm: &ModelManager, lesson_id: Uuid) -> DatabaseResult<Vec<Self>> {
        let rows: Vec<Self> = sqlx::query_as(
            r#"
            SELECT *
            FROM quizzes q
            WHERE q.lesson_id = $1
            ORDER BY q.question, q.id
            "#,
        )
        .bind(lesson_id)
        .fetch_all(mm.executor())
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn quiz(correct: &str) -> Quiz {
        Quiz {
            id: Uuid::new_v4(),
            lesson_id: Uuid::new_v4(),
            question: String::from("How do you say 'cat'?"),
            option_a: String::from("gato"),
            option_b: String::from("perro"),
            option_c: String::from("casa"),
            option_d: String::from("mesa"),
            correct_option: String::from(correct),
        }
    }

    #[test]
    fn answer_check_ignores_case() {
        let quiz = quiz("A");
        assert!(quiz.is_correct_answer("A"));
        assert!(quiz.is_correct_answer("a"));
        assert!(quiz.is_correct_answer(" a\n"));
    }

    #[test]
    fn wrong_answers_are_rejected() {
        let quiz = quiz("C");
        assert!(!quiz.is_correct_answer("A"));
        assert!(!quiz.is_correct_answer(""));
        assert!(!quiz.is_correct_answer("casa"));
    }
}
