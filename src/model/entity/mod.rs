mod user;
pub use user::{UserEntity, UserEntityCreate};

mod lesson;
pub use lesson::{Lesson, LessonCreate};

mod quiz;
pub use quiz::{Quiz, QuizCreate};

mod flashcard;
pub use flashcard::{Flashcard, FlashcardCreate};

mod lesson_progress;
pub use lesson_progress::{LessonProgress, LessonProgressCreate};

mod quiz_attempt;
pub use quiz_attempt::{QuizAttempt, QuizAttemptCreate};
