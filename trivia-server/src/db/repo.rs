//! PostgreSQL store
//!
//! - Listings: one query each, ordered by id
//! - Delete: lookup and delete in one transaction
//! - Insert: column constraints decide what is accepted

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use trivia_core::search::like_pattern;
use trivia_core::{Category, NewQuestion, Question};

use crate::store::{StoreError, StoreResult, TriviaStore};

/// Question record from database
#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    id: i32,
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(r: QuestionRow) -> Self {
        Self {
            id: r.id,
            question: r.question,
            answer: r.answer,
            category: r.category,
            difficulty: r.difficulty,
        }
    }
}

/// Category record from database
#[derive(Debug, Clone, FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
}

/// Store backed by a sqlx connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT id, name FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|r| Category { id: r.id, name: r.name })
            .collect())
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn questions_in_category(&self, category_id: i32) -> StoreResult<Vec<Question>> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn delete_question(&self, id: i32) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        let found: Option<(i32,)> =
            sqlx::query_as("SELECT id FROM questions WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if found.is_none() {
            return Err(StoreError::not_found("question", id));
        }

        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<i32> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn insert_category(&self, name: &str) -> StoreResult<i32> {
        let (id,): (i32,) = sqlx::query_as("INSERT INTO categories (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Run with: DATABASE_URL=postgres://... cargo test -p trivia-server -- --ignored

    async fn store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        PgStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_delete() {
        let store = store().await;
        let category = store.insert_category("Test").await.unwrap();
        let id = store
            .insert_question(NewQuestion {
                question: Some("What is 100% of 1?".into()),
                answer: Some("1".into()),
                category: Some(category),
                difficulty: Some(1),
            })
            .await
            .unwrap();

        let hits = store.search_questions("100%").await.unwrap();
        assert!(hits.iter().any(|q| q.id == id));

        store.delete_question(id).await.unwrap();
        let hits = store.search_questions("100%").await.unwrap();
        assert!(hits.iter().all(|q| q.id != id));

        let err = store.delete_question(id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_missing_fields_rejected() {
        let store = store().await;
        let err = store.insert_question(NewQuestion::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));
    }
}
