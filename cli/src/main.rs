use clap::{Args, Parser, Subcommand};
use lingua::error::{AppError, AppResult};
use lingua::model::entity::{
    Flashcard, FlashcardCreate, Lesson, LessonCreate, Quiz, QuizCreate, UserEntity,
    UserEntityCreate,
};
use lingua::model::{DatabaseError, DbConnection, ModelManager, Repository};
use lingua::web::dto::user::{DEFAULT_LEARNING_GOAL, DEFAULT_PROFICIENCY_LEVEL};
use lingua::Config;
use serde::Serialize;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(about = "CLI tool for filling the lingua DB", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Manage lessons
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },

    /// Manage quizzes
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },

    /// Manage flashcards
    Flashcard {
        #[command(subcommand)]
        action: FlashcardCommands,
    },
}

/// User management
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = DEFAULT_PROFICIENCY_LEVEL)]
        proficiency_level: String,
        #[arg(long, default_value = DEFAULT_LEARNING_GOAL)]
        learning_goal: String,
    },
}

/// Lesson management
#[derive(Subcommand, Debug)]
pub enum LessonCommands {
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        language: String,
        #[arg(long)]
        level: String,
        /// Path to a Markdown file with lesson content
        #[arg(long)]
        file: String,
    },
}

/// Lesson a quiz belongs to, by id or by title
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct LessonRef {
    #[arg(long)]
    lesson_id: Option<Uuid>,
    #[arg(long)]
    lesson_title: Option<String>,
}

/// Quiz management
#[derive(Subcommand, Debug)]
pub enum QuizCommands {
    Add {
        #[command(flatten)]
        lesson: LessonRef,
        #[arg(long)]
        question: String,
        #[arg(long)]
        option_a: String,
        #[arg(long)]
        option_b: String,
        #[arg(long)]
        option_c: String,
        #[arg(long)]
        option_d: String,
        /// Letter of the correct option
        #[arg(long, value_parser = ["A", "B", "C", "D", "a", "b", "c", "d"])]
        correct: String,
    },
}

/// Flashcard management
#[derive(Subcommand, Debug)]
pub enum FlashcardCommands {
    Add {
        #[arg(long)]
        word: String,
        #[arg(long)]
        translation: String,
        #[arg(long)]
        language: String,
        #[arg(long)]
        level: String,
    },
}

fn print_created<T: Serialize>(kind: &str, entity: &T) {
    match serde_json::to_string_pretty(entity) {
        Ok(json) => println!("{kind} created:\n{json}"),
        Err(e) => eprintln!("{kind} created, but could not be printed: {e}"),
    }
}

async fn resolve_lesson(mm: &ModelManager, lesson: LessonRef) -> AppResult<Uuid> {
    let found = match (lesson.lesson_id, lesson.lesson_title) {
        (Some(id), _) => Lesson::find_by_id(mm, id).await?,
        (None, Some(title)) => Lesson::find_by_title(mm, &title).await?,
        (None, None) => None,
    };

    match found {
        Some(lesson) => Ok(lesson.id()),
        None => {
            eprintln!("No such lesson");
            Err(AppError::DatabaseError(DatabaseError::SqlxError(
                sqlx::Error::RowNotFound,
            )))
        }
    }
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let config = Config::load(true)?;
    let db_con = DbConnection::connect(config.database());
    let mm = ModelManager::new(db_con);

    match args.command {
        Commands::User { action } => match action {
            UserCommands::Add {
                username,
                password,
                email,
                proficiency_level,
                learning_goal,
            } => {
                let user = UserEntity::create(
                    &mm,
                    UserEntityCreate {
                        username,
                        password_hash: lingua::auth::hash_password(&password)?,
                        email,
                        proficiency_level,
                        learning_goal,
                    },
                )
                .await?;
                print_created("User", &user);
            }
        },

        Commands::Lesson { action } => match action {
            LessonCommands::Add {
                title,
                language,
                level,
                file,
            } => {
                let content = std::fs::read_to_string(file)?;
                let lesson = Lesson::create(
                    &mm,
                    LessonCreate {
                        title,
                        content,
                        language,
                        level,
                    },
                )
                .await?;
                print_created("Lesson", &lesson);
            }
        },

        Commands::Quiz { action } => match action {
            QuizCommands::Add {
                lesson,
                question,
                option_a,
                option_b,
                option_c,
                option_d,
                correct,
            } => {
                let lesson_id = resolve_lesson(&mm, lesson).await?;
                let quiz = Quiz::create(
                    &mm,
                    QuizCreate {
                        lesson_id,
                        question,
                        options: [option_a, option_b, option_c, option_d],
                        correct_option: correct,
                    },
                )
                .await?;
                print_created("Quiz", &quiz);
            }
        },

        Commands::Flashcard { action } => match action {
            FlashcardCommands::Add {
                word,
                translation,
                language,
                level,
            } => {
                let card = Flashcard::create(
                    &mm,
                    FlashcardCreate {
                        word,
                        translation,
                        language,
                        level,
                    },
                )
                .await?;
                print_created("Flashcard", &card);
            }
        },
    }

    Ok(())
}
