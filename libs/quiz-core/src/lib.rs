//! Core quiz library shared by the backend and any other front end.
//!
//! Provides:
//! - Markdown parser for practice-exam documents
//! - Document stores (directory on disk, in memory)
//! - Quiz listing with question counts and time estimates
//! - Study session state and scoring
//! - Shared types (Question, QuestionOption, QuizMetadata)

pub mod error;
pub mod loader;
pub mod parser;
pub mod session;
pub mod store;
pub mod types;

pub use error::{LoadError, ParseError, Result, StoreError};
pub use loader::{estimate_time, list_quizzes, load_quiz};
pub use parser::{count_questions, parse};
pub use session::{Action, Session, SessionStats};
pub use store::{DirectoryStore, DocumentStore, MemoryStore};
pub use types::{Question, QuestionOption, Quiz, QuizMetadata, QuizProgress};
