//! Question endpoints: listing, creation, deletion and search

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use trivia_core::{paginate, NewQuestion, Question, SearchRequest};

use crate::http::error::ApiError;
use crate::http::extractors::{Page, PathId};
use crate::http::server::AppState;

use super::categories::{category_map, CategoryMap};
use super::id_method_not_allowed;

/// GET /questions response
#[derive(Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    /// Always null for the unfiltered listing
    pub current_category: Option<i32>,
}

/// DELETE /questions/{id} response
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

/// POST /questions response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
}

/// POST /questions/search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// GET /questions - one page of all questions plus the category map
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let questions = state
        .store
        .questions()
        .await
        .map_err(|e| ApiError::on_read("list_questions", e))?;

    let categories = state
        .store
        .categories()
        .await
        .map_err(|e| ApiError::on_read("list_questions", e))?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
        categories: category_map(categories),
        current_category: None,
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> Result<Json<DeletedResponse>, ApiError> {
    state
        .store
        .delete_question(id)
        .await
        .map_err(|e| ApiError::on_delete("delete_question", e))?;

    tracing::info!(id, "question deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

/// POST /questions - insert and return the new id
async fn create_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let Json(new) =
        body.map_err(|e| ApiError::from_body_rejection(e, |d| ApiError::unprocessable(d)))?;

    let id = state
        .store
        .insert_question(new)
        .await
        .map_err(|e| ApiError::on_write("create_question", e))?;

    tracing::info!(id, "question created");
    Ok(Json(CreatedResponse {
        success: true,
        created: id,
    }))
}

/// POST /questions/search - case-insensitive match on question text
async fn search_questions(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(req) =
        body.map_err(|e| ApiError::from_body_rejection(e, |d| ApiError::not_found(d)))?;

    let questions = state
        .store
        .search_questions(req.term())
        .await
        .map_err(|e| ApiError::on_read("search_questions", e))?;

    tracing::debug!(term = req.term(), page, total = questions.len(), "search");
    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route(
            "/questions/{id}",
            delete(delete_question).fallback(id_method_not_allowed),
        )
}
