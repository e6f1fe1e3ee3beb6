//! API error type with IntoResponse
//!
//! Every error renders the same envelope:
//! `{"success": false, "error": <status>, "message": <reason phrase>}`.
//! The detail string is only logged, never returned to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::StoreError;

/// API error type with fixed HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request (400)
    BadRequest { detail: String },

    /// Missing resource, or a failed read (404)
    NotFound { detail: String },

    /// Known path, unsupported method (405)
    MethodNotAllowed,

    /// Failed write or mutation (422)
    Unprocessable { detail: String },

    /// Catch-all (500)
    Internal { detail: String },
}

/// Error envelope body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::Unprocessable {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed client-facing message for the status.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Bad Request",
            Self::NotFound { .. } => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::Unprocessable { .. } => "Unprocessable Entity",
            Self::Internal { .. } => "Internal Server Error",
        }
    }

    /// Store failure on a read path: always 404.
    pub fn on_read(operation: &'static str, err: StoreError) -> Self {
        log_store_error(operation, &err);
        Self::not_found(err.to_string())
    }

    /// Store failure on a write path: always 422.
    pub fn on_write(operation: &'static str, err: StoreError) -> Self {
        log_store_error(operation, &err);
        Self::unprocessable(err.to_string())
    }

    /// Store failure on delete: 404 for a missing record, 422 otherwise.
    pub fn on_delete(operation: &'static str, err: StoreError) -> Self {
        log_store_error(operation, &err);
        match err {
            StoreError::NotFound { .. } => Self::not_found(err.to_string()),
            _ => Self::unprocessable(err.to_string()),
        }
    }

    /// Body that failed to decode.
    ///
    /// Invalid JSON or a missing content type is a 400; well-formed JSON of
    /// the wrong shape takes the route's own status via `on_shape`.
    pub fn from_body_rejection(rejection: JsonRejection, on_shape: fn(String) -> Self) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => on_shape(e.body_text()),
            other => Self::bad_request(other.body_text()),
        }
    }
}

fn log_store_error(operation: &'static str, err: &StoreError) {
    match err {
        StoreError::NotFound { .. } | StoreError::Rejected(_) => {
            tracing::warn!(operation, kind = err.kind(), "{}", err)
        }
        StoreError::Unavailable(_) | StoreError::Query(_) => {
            tracing::error!(operation, kind = err.kind(), "{}", err)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal { detail } => tracing::error!("Internal error: {}", detail),
            Self::BadRequest { detail }
            | Self::NotFound { detail }
            | Self::Unprocessable { detail } => {
                tracing::debug!(status = status.as_u16(), "{}", detail)
            }
            Self::MethodNotAllowed => {}
        }

        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_envelope() {
        let response = ApiError::not_found("question '7'").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": 404, "message": "Not Found"})
        );
    }

    #[tokio::test]
    async fn every_status_has_envelope() {
        let cases = [
            (ApiError::bad_request("x"), 400, "Bad Request"),
            (ApiError::MethodNotAllowed, 405, "Method Not Allowed"),
            (ApiError::unprocessable("x"), 422, "Unprocessable Entity"),
            (ApiError::internal("x"), 500, "Internal Server Error"),
        ];
        for (err, code, message) in cases {
            let response = err.into_response();
            assert_eq!(response.status().as_u16(), code);
            let body = body_json(response).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["error"], code);
            assert_eq!(body["message"], message);
        }
    }

    #[test]
    fn delete_distinguishes_missing_from_failure() {
        let err = ApiError::on_delete("delete_question", StoreError::not_found("question", 3));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::on_delete(
            "delete_question",
            StoreError::Unavailable(sqlx::Error::PoolTimedOut),
        );
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn read_failures_are_404() {
        let err = ApiError::on_read("list_categories", StoreError::Query(sqlx::Error::PoolClosed));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
