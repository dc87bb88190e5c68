//! Quiz listing and loading over a document store.

use std::cmp::Ordering;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{LoadError, StoreError};
use crate::parser;
use crate::store::DocumentStore;
use crate::types::{Quiz, QuizMetadata, QuizProgress};

/// File extensions recognized as quiz documents.
pub const QUIZ_EXTENSIONS: &[&str] = &["md", "markdown"];

const MINUTES_PER_QUESTION: f64 = 1.5;

/// List every quiz in the store, ordered for display.
///
/// Fails if the store cannot be enumerated or any quiz document cannot be read.
pub fn list_quizzes(store: &dyn DocumentStore) -> Result<Vec<QuizMetadata>, StoreError> {
    let mut quizzes = Vec::new();

    for name in store.list_documents()? {
        let Some(stem) = quiz_stem(&name) else {
            tracing::trace!(%name, "skipping non-quiz document");
            continue;
        };
        let content = store.read_document(&name)?;
        quizzes.push(metadata(stem, &content));
    }

    quizzes.sort_by(|a, b| compare_ids(&a.id, &b.id));
    tracing::debug!(count = quizzes.len(), "listed quizzes");
    Ok(quizzes)
}

/// Find the document name backing a quiz identifier.
pub fn find_document(store: &dyn DocumentStore, id: &str) -> Result<String, StoreError> {
    store
        .list_documents()?
        .into_iter()
        .find(|name| quiz_stem(name).is_some_and(|stem| quiz_id(stem) == id))
        .ok_or_else(|| StoreError::DocumentNotFound(id.to_string()))
}

/// Read and parse the quiz with the given identifier.
pub fn load_quiz(store: &dyn DocumentStore, id: &str) -> Result<Quiz, LoadError> {
    let name = find_document(store, id)?;
    let content = store.read_document(&name)?;

    let questions = parser::parse(&content).map_err(|source| {
        tracing::warn!(%id, %name, error = %source, "quiz document failed to parse");
        LoadError::InvalidQuiz {
            id: id.to_string(),
            source,
        }
    })?;

    let stem = quiz_stem(&name).unwrap_or(id);
    Ok(Quiz {
        metadata: metadata(stem, &content),
        questions,
    })
}

/// Metadata for a single document.
pub fn metadata(stem: &str, content: &str) -> QuizMetadata {
    let id = quiz_id(stem);
    let question_count = parser::count_questions(content);
    let title = front_matter_title(content).unwrap_or_else(|| format!("Practice Exam {}", id));

    QuizMetadata {
        id,
        title,
        question_count,
        estimated_time: estimate_time(question_count),
        progress: Some(QuizProgress::default()),
    }
}

/// Display string for the expected time to work through `question_count` questions.
pub fn estimate_time(question_count: usize) -> String {
    let total_minutes = question_count as f64 * MINUTES_PER_QUESTION;
    let hours = (total_minutes / 60.0).floor() as u64;
    let minutes = (total_minutes % 60.0).round() as u64;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{} minutes", minutes)
    }
}

/// Identifier for a document stem: `N` for exactly `practice-exam-N`, else the stem itself.
pub fn quiz_id(stem: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^practice-exam-([0-9]+)$").expect("quiz id regex")
    });

    re.captures(stem)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| stem.to_string())
}

/// Numeric identifiers first in numeric order, then the rest lexicographically.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (numeric_id(a), numeric_id(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn numeric_id(id: &str) -> Option<u128> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

/// File stem of a document with a recognized quiz extension.
fn quiz_stem(name: &str) -> Option<&str> {
    let path = Path::new(name);
    let extension = path.extension()?.to_str()?;
    if !QUIZ_EXTENSIONS.contains(&extension) {
        return None;
    }
    path.file_stem()?.to_str()
}

#[derive(Deserialize)]
struct FrontMatter {
    title: Option<String>,
}

fn front_matter_title(content: &str) -> Option<String> {
    let raw = parser::front_matter(content)?;
    match serde_yaml_ng::from_str::<FrontMatter>(&raw) {
        Ok(front_matter) => front_matter
            .title
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty()),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unreadable front-matter");
            None
        }
    }
}
