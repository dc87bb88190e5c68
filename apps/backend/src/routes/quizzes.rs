//! Quiz endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use quiz_core::loader;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/quizzes
pub async fn list(State(state): State<AppState>) -> Result<Json<QuizListResponse>> {
    let store = state.store.clone();
    let quizzes = tokio::task::spawn_blocking(move || loader::list_quizzes(store.as_ref())).await??;

    Ok(Json(QuizListResponse { quizzes }))
}

/// GET /api/quizzes/:id
pub async fn get(
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
) -> Result<Json<QuizResponse>> {
    let store = state.store.clone();
    let quiz =
        tokio::task::spawn_blocking(move || loader::load_quiz(store.as_ref(), &quiz_id)).await??;

    tracing::debug!(id = %quiz.metadata.id, questions = quiz.questions.len(), "loaded quiz");

    Ok(Json(QuizResponse {
        id: quiz.metadata.id,
        title: quiz.metadata.title,
        questions: quiz.questions,
    }))
}
