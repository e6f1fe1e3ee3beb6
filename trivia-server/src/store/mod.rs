//! Storage seam for the API
//!
//! Handlers only see [`TriviaStore`]. Failures come back as [`StoreError`]
//! so each route can decide which status code a failure becomes while the
//! log still records what actually went wrong.

pub mod memory;

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use trivia_core::{Category, NewQuestion, Question};

pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store failure, classified by cause
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// The store refused a write (constraint violation, missing field)
    #[error("rejected: {0}")]
    Rejected(String),

    /// The store could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl StoreError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Rejected(_) => "rejected",
            Self::Unavailable(_) => "unavailable",
            Self::Query(_) => "query",
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource: "row",
                id: String::new(),
            },
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::NotNullViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::CheckViolation
                | ErrorKind::UniqueViolation => Self::Rejected(db.message().to_owned()),
                _ => Self::Query(sqlx::Error::Database(db)),
            },
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => Self::Unavailable(e),
            other => Self::Query(other),
        }
    }
}

/// Question and category persistence
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, ordered by id.
    async fn categories(&self) -> StoreResult<Vec<Category>>;

    /// All questions, ordered by id.
    async fn questions(&self) -> StoreResult<Vec<Question>>;

    /// Questions whose category equals `category_id`, ordered by id.
    async fn questions_in_category(&self, category_id: i32) -> StoreResult<Vec<Question>>;

    /// Questions whose text contains `term` (case-insensitive), ordered by id.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Delete question `id`; `NotFound` when there is no such question.
    async fn delete_question(&self, id: i32) -> StoreResult<()>;

    /// Insert a question and return its store-assigned id.
    async fn insert_question(&self, new: NewQuestion) -> StoreResult<i32>;

    /// Insert a category and return its store-assigned id.
    async fn insert_category(&self, name: &str) -> StoreResult<i32>;

    /// Cheap liveness probe.
    async fn ping(&self) -> StoreResult<()>;
}
