//! Database layer - connection pool, schema, seed data and the PostgreSQL store
//!
//! Listing queries return whole ordered result sets; pagination happens in
//! the handler so `total_questions` is the pre-pagination count.

pub mod migrations;
pub mod pool;
pub mod repo;
pub mod seed;

pub use pool::{create_pool, create_pool_with_options};
pub use repo::PgStore;
