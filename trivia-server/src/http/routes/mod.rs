//! Route handlers organized by resource

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use super::error::ApiError;
use super::extractors::PathId;

/// Unknown path
pub async fn not_found() -> ApiError {
    ApiError::not_found("no such route")
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Method fallback for `{id}` routes.
///
/// The id is validated first: a non-integer segment is an unknown route
/// (404) whatever the method; a valid one is a 405.
pub async fn id_method_not_allowed(PathId(_): PathId) -> ApiError {
    ApiError::MethodNotAllowed
}
