//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS by default, allow-list on request
//! - Request tracing
//! - Graceful shutdown
//! - JSON envelopes for success and error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{
    build_router, cors_layer, run_server, AppState, ServerConfig, ServerError,
};
