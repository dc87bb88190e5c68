//! Error types for quiz-core.

use std::io;

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a quiz document.
///
/// Every variant carries the 1-based index of the question block that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("could not parse question {index}")]
    MalformedQuestionHeader { index: usize },

    #[error("no answer found for question {index}")]
    MissingAnswer { index: usize },

    #[error("no options found for question {index}")]
    MissingOptions { index: usize },

    #[error("duplicate option {letter} in question {index}")]
    DuplicateOption { index: usize, letter: char },

    #[error("answer {letter} in question {index} does not match any option")]
    UnknownAnswerLetter { index: usize, letter: char },
}

impl ParseError {
    /// 1-based index of the offending question.
    pub fn index(&self) -> usize {
        match self {
            Self::MalformedQuestionHeader { index }
            | Self::MissingAnswer { index }
            | Self::MissingOptions { index }
            | Self::DuplicateOption { index, .. }
            | Self::UnknownAnswerLetter { index, .. } => *index,
        }
    }

    /// Short machine-readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MalformedQuestionHeader { .. } => "malformed_question_header",
            Self::MissingAnswer { .. } => "missing_answer",
            Self::MissingOptions { .. } => "missing_options",
            Self::DuplicateOption { .. } => "duplicate_option",
            Self::UnknownAnswerLetter { .. } => "unknown_answer_letter",
        }
    }
}

/// Errors raised by a document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store unavailable at {location}: {source}")]
    StoreUnavailable {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("document not found: {0}")]
    DocumentNotFound(String),
}

/// Errors raised when opening a single quiz.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("quiz {id} is malformed: {source}")]
    InvalidQuiz {
        id: String,
        #[source]
        source: ParseError,
    },
}
