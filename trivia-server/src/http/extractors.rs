//! Custom Axum extractors

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use trivia_core::PageParams;

use super::error::ApiError;

/// Integer id from the path.
///
/// Only plain digit strings match. Anything else (`science`, `+5`, `-5`)
/// means the route does not exist, so it rejects with 404 rather than 400.
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::not_found(e.body_text()))?;

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ApiError::not_found(format!("no route for id '{}'", raw)));
        }

        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| ApiError::not_found(format!("no route for id '{}'", raw)))
    }
}

/// Requested page number from `?page=`; never rejects.
pub struct Page(pub i64);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map(|Query(p)| p)
            .unwrap_or_default();

        Ok(Self(params.page()))
    }
}
