use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::Flashcard;

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FlashcardResponse {
    pub id: Uuid,
    pub word: String,
    pub translation: String,
    pub language: String,
    pub level: String,
}

impl From<Flashcard> for FlashcardResponse {
    fn from(card: Flashcard) -> Self {
        Self {
            id: card.id(),
            word: card.word().to_string(),
            translation: card.translation().to_string(),
            language: card.language().to_string(),
            level: card.level().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<FlashcardResponse>,
}

impl FlashcardsResponse {
    pub fn from_entities(cards: Vec<Flashcard>) -> Self {
        Self {
            flashcards: cards.into_iter().map(FlashcardResponse::from).collect(),
        }
    }
}
