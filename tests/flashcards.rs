mod common;
use lingua::model::{
    Repository,
    entity::{Flashcard, FlashcardCreate},
};
use serde_json::json;
use uuid::Uuid;

use crate::common::{Action, Flow, setup_server, setup_test_db};

fn card(word: &str, translation: &str, language: &str, level: &str) -> FlashcardCreate {
    FlashcardCreate {
        word: word.to_string(),
        translation: translation.to_string(),
        language: language.to_string(),
        level: level.to_string(),
    }
}

#[tokio::test]
async fn route_flashcards_test() {
    let pool = setup_test_db().await;
    let server = setup_server(&pool).await;
    let mm = pool.model_manager();

    let perro = Flashcard::create(&mm, card("perro", "dog", "spanish", "beginner"))
        .await
        .unwrap();
    Flashcard::create(&mm, card("aunque", "although", "spanish", "intermediate"))
        .await
        .unwrap();
    Flashcard::create(&mm, card("chien", "dog", "french", "beginner"))
        .await
        .unwrap();

    let stored = Flashcard::find_by_id(&mm, perro.id())
        .await
        .unwrap()
        .expect("flashcard was not stored");
    assert_eq!(stored.word(), "perro");
    assert_eq!(stored.translation(), "dog");
    assert!(Flashcard::find_by_id(&mm, Uuid::new_v4()).await.unwrap().is_none());

    Flow::new()
        .step(
            Action::new("spanish", "GET", "/flashcards/spanish").assert_body(|body| {
                let cards = body["flashcards"].as_array().unwrap();
                assert_eq!(cards.len(), 2);
                assert!(cards.iter().all(|c| c["language"] == "spanish"));
            }),
        )
        .step(
            Action::new("spanish_beginner", "GET", "/flashcards/spanish/beginner").assert_body(
                |body| {
                    let cards = body["flashcards"].as_array().unwrap();
                    assert_eq!(cards.len(), 1);
                    assert_eq!(cards[0]["word"], "perro");
                    assert_eq!(cards[0]["translation"], "dog");
                    assert_eq!(cards[0]["level"], "beginner");
                    assert!(cards[0]["id"].is_string());
                },
            ),
        )
        .step(
            Action::new("unknown_language", "GET", "/flashcards/klingon").assert_body(|body| {
                assert_eq!(body, &json!({ "flashcards": [] }));
            }),
        )
        .step(
            Action::new("unknown_level", "GET", "/flashcards/french/advanced").assert_body(
                |body| assert_eq!(body, &json!({ "flashcards": [] })),
            ),
        )
        // language and level ignore case
        .step(
            Action::new("mixed_case", "GET", "/flashcards/SPANISH").assert_body(|body| {
                assert_eq!(body["flashcards"].as_array().unwrap().len(), 2);
            }),
        )
        .step(
            Action::new("mixed_case_level", "GET", "/flashcards/Spanish/Beginner").assert_body(
                |body| {
                    let cards = body["flashcards"].as_array().unwrap();
                    assert_eq!(cards.len(), 1);
                    assert_eq!(cards[0]["word"], "perro");
                },
            ),
        )
        .run(&server)
        .await;
}
