//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from quiz-core
pub use quiz_core::types::{Question, QuestionOption, QuizMetadata, QuizProgress};

/// GET /api/quizzes response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizListResponse {
    pub quizzes: Vec<QuizMetadata>,
}

/// GET /api/quizzes/:id response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}
