//! trivia-server: HTTP API over a trivia question store
//!
//! Serves paginated question listings, search, creation, deletion and
//! random quiz selection as JSON. Storage sits behind [`TriviaStore`], with
//! a PostgreSQL implementation for deployments and an in-memory one for
//! tests and demos.

pub mod db;
pub mod http;
pub mod store;

pub use http::{
    build_router, cors_layer, run_server, ApiError, AppState, ServerConfig, ServerError,
};
pub use store::{MemoryStore, StoreError, StoreResult, TriviaStore};
