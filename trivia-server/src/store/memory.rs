//! In-memory store
//!
//! Mirrors the relational schema's constraints (NOT NULL columns, category
//! foreign key) so routes behave the same against either store. Ids are
//! assigned from a counter and never reused, like a SERIAL column.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::search;
use trivia_core::{Category, NewQuestion, Question};

use super::{StoreError, StoreResult, TriviaStore};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    next_category_id: i32,
    next_question_id: i32,
}

/// Store backed by ordered maps behind an async lock
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store loaded with the starter categories and questions.
    pub async fn seeded() -> StoreResult<Self> {
        let store = Self::new();
        crate::db::seed::run(&store).await?;
        Ok(store)
    }

    fn filtered<F>(tables: &Tables, keep: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        tables.questions.values().filter(|&q| keep(q)).cloned().collect()
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(Self::filtered(&tables, |_| true))
    }

    async fn questions_in_category(&self, category_id: i32) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(Self::filtered(&tables, |q| q.category == category_id))
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(Self::filtered(&tables, |q| search::matches(&q.question, term)))
    }

    async fn delete_question(&self, id: i32) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .questions
            .remove(&id)
            .map(drop)
            .ok_or_else(|| StoreError::not_found("question", id))
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<i32> {
        let draft = new
            .validate()
            .map_err(|missing| StoreError::Rejected(missing.to_string()))?;

        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&draft.category) {
            return Err(StoreError::Rejected(format!(
                "category {} does not exist",
                draft.category
            )));
        }

        tables.next_question_id += 1;
        let id = tables.next_question_id;
        tables.questions.insert(id, draft.with_id(id));
        Ok(id)
    }

    async fn insert_category(&self, name: &str) -> StoreResult<i32> {
        let mut tables = self.tables.write().await;
        tables.next_category_id += 1;
        let id = tables.next_category_id;
        tables.categories.insert(
            id,
            Category {
                id,
                name: name.to_owned(),
            },
        );
        Ok(id)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
