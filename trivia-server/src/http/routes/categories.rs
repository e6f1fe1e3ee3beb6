//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use trivia_core::{paginate, Category, Question};

use crate::http::error::ApiError;
use crate::http::extractors::{Page, PathId};
use crate::http::server::AppState;

use super::id_method_not_allowed;

/// Categories keyed by id; serialises as `{"1": "Science", ...}`
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.name)).collect()
}

/// GET /categories response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// GET /categories/{id}/questions response
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i32,
}

/// GET /categories - every category with a count
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .store
        .categories()
        .await
        .map_err(|e| ApiError::on_read("list_categories", e))?;

    let total_categories = categories.len();
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
        total_categories,
    }))
}

/// GET /categories/{id}/questions - one page of a category's questions
async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    PathId(category_id): PathId,
    Page(page): Page,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let questions = state
        .store
        .questions_in_category(category_id)
        .await
        .map_err(|e| ApiError::on_read("questions_by_category", e))?;

    tracing::debug!(category_id, page, total = questions.len(), "category questions");
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
        current_category: category_id,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{id}/questions",
            get(questions_by_category).fallback(id_method_not_allowed),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_map_keys_serialize_as_strings() {
        let map = category_map(vec![
            Category { id: 2, name: "Art".into() },
            Category { id: 1, name: "Science".into() },
        ]);
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            json!({"1": "Science", "2": "Art"})
        );
    }
}
