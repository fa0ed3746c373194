mod common;
use lingua::model::{
    Repository,
    entity::{LessonProgress, LessonProgressCreate, QuizAttempt, QuizAttemptCreate},
};
use uuid::Uuid;

use crate::common::{Action, Flow, register_action, setup_server, setup_test_db};

#[tokio::test]
async fn route_progress_new_user_test() {
    let pool = setup_test_db().await;
    let server = setup_server(&pool).await;

    Flow::new()
        .step(register_action("newbie", "newbie").with_save_as("user"))
        .step(
            Action::new("progress", "GET", "")
                .with_dyn_path(|ctx| {
                    format!(
                        "/user_progress/{}",
                        ctx.get("user")["user_id"].as_str().unwrap()
                    )
                })
                .assert_body_with(|ctx, body| {
                    assert_eq!(body["user_id"], ctx.get("user")["user_id"]);
                    assert_eq!(body["lessons_completed"], 0);
                    assert_eq!(body["quizzes_attempted"], 0);
                    assert_eq!(body["correct_answers"], 0);
                }),
        )
        .run(&server)
        .await;
}

#[tokio::test]
async fn route_progress_counts_test() {
    let pool = setup_test_db().await;
    let server = setup_server(&pool).await;
    let mm = pool.model_manager();

    let user_id = Uuid::new_v4();
    let other_user = Uuid::new_v4();

    let lesson_id = Uuid::new_v4();
    let first = LessonProgress::create(&mm, LessonProgressCreate::new(user_id, lesson_id))
        .await
        .unwrap();
    for _ in 0..2 {
        LessonProgress::create(&mm, LessonProgressCreate::new(user_id, Uuid::new_v4()))
            .await
            .unwrap();
    }

    let stored = LessonProgress::find_by_id(&mm, first.id())
        .await
        .unwrap()
        .expect("completion was not stored");
    assert_eq!(stored.user_id(), user_id);
    assert_eq!(stored.lesson_id(), lesson_id);
    assert!(stored.completed());
    assert_eq!(stored.completed_at(), first.completed_at());
    assert!(LessonProgress::find_by_id(&mm, Uuid::new_v4()).await.unwrap().is_none());
    LessonProgress::create(&mm, LessonProgressCreate::new(other_user, Uuid::new_v4()))
        .await
        .unwrap();

    let quiz_id = Uuid::new_v4();
    for (answer, correct) in [("A", false), ("C", true), ("c", true), ("D", false)] {
        QuizAttempt::create(
            &mm,
            QuizAttemptCreate::new(user_id, quiz_id, answer.to_string(), correct),
        )
        .await
        .unwrap();
    }

    assert_eq!(LessonProgress::count_completed(&mm, user_id).await.unwrap(), 3);
    assert_eq!(QuizAttempt::count_for_user(&mm, other_user).await.unwrap(), 0);

    Flow::new()
        .step(
            Action::new("progress", "GET", format!("/user_progress/{user_id}")).assert_body(
                move |body| {
                    assert_eq!(body["user_id"], user_id.to_string().as_str());
                    assert_eq!(body["lessons_completed"], 3);
                    assert_eq!(body["quizzes_attempted"], 4);
                    assert_eq!(body["correct_answers"], 2);
                },
            ),
        )
        .step(
            Action::new("progress_other", "GET", format!("/user_progress/{other_user}"))
                .assert_body(|body| {
                    assert_eq!(body["lessons_completed"], 1);
                    assert_eq!(body["quizzes_attempted"], 0);
                }),
        )
        .run(&server)
        .await;
}
