//! Core types for quiz documents.

use serde::{Deserialize, Serialize};

/// One selectable choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub letter: char,
    pub text: String,
}

/// A single flashcard parsed from a quiz document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 1-based position in the document, not taken from the source numbering.
    pub id: u32,
    pub question: String,
    pub options: Vec<QuestionOption>,
    /// Canonical answer list, e.g. `"B"` or `"A, C"`.
    pub answer: String,
    pub multiple_answers: bool,
}

impl Question {
    /// Letters of the correct answer in document order.
    pub fn answer_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.answer
            .split(',')
            .filter_map(|part| part.trim().chars().next())
    }

    /// Number of letters a learner must pick before the card counts as answered.
    pub fn required_selections(&self) -> usize {
        if self.multiple_answers {
            2
        } else {
            1
        }
    }

    pub fn has_option(&self, letter: char) -> bool {
        self.options.iter().any(|option| option.letter == letter)
    }
}

/// Best-effort progress for a quiz. Nothing persists it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizProgress {
    pub completed: u32,
    pub score: u32,
}

/// Summary shown on the quiz listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizMetadata {
    pub id: String,
    pub title: String,
    pub question_count: usize,
    pub estimated_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<QuizProgress>,
}

/// A parsed quiz together with its listing metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub metadata: QuizMetadata,
    pub questions: Vec<Question>,
}
