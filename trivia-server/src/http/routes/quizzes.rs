//! Quiz endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use trivia_core::{select_question, Question, QuizRequest, QuizScope};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// POST /quizzes response
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// Null once every question in scope has been asked
    pub question: Option<Question>,
}

/// POST /quizzes - a random question not in `previous_questions`
async fn play_quiz(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(req) =
        body.map_err(|e| ApiError::from_body_rejection(e, |d| ApiError::unprocessable(d)))?;

    let candidates = match req.scope() {
        QuizScope::All => state.store.questions().await,
        QuizScope::Category(id) => state.store.questions_in_category(id).await,
    }
    .map_err(|e| ApiError::on_write("play_quiz", e))?;

    let previous = req.previous();
    let question = select_question(candidates, &previous, &mut rand::thread_rng());

    tracing::debug!(
        scope = ?req.scope(),
        previous = previous.len(),
        exhausted = question.is_none(),
        "quiz question selected"
    );
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(play_quiz))
}
