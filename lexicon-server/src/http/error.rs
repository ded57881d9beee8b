//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Every body carries `success: false`, a machine `error` code and a
//! human `message`. Store details never reach the client.

use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::RepoError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Body could not be parsed as JSON (400)
    InvalidBody { message: String },

    /// Word already stored (409)
    Conflict { word: String },

    /// Word not found (404)
    NotFound,

    /// Verb not supported on this path (405)
    MethodNotAllowed { method: Method, allow: &'static str },

    /// Store failure (500); `message` is the per-operation client text
    Store { message: &'static str },
}

impl ApiError {
    /// Convert a repository error, using `store_message` for store failures.
    pub fn from_repo(err: RepoError, store_message: &'static str) -> Self {
        match err {
            RepoError::Validation(e) => Self::Validation(e),
            RepoError::Conflict { word } => Self::Conflict { word },
            RepoError::NotFound { .. } => Self::NotFound,
            RepoError::StoreUnavailable { .. } => Self::Store {
                message: store_message,
            },
        }
    }

    /// Adapter for `map_err`.
    pub fn repo(store_message: &'static str) -> impl FnOnce(RepoError) -> Self {
        move |err| Self::from_repo(err, store_message)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            Self::Validation(e) => ("validation_error", e.to_string()),
            Self::InvalidBody { message } => ("invalid_body", message.clone()),
            Self::Conflict { word } => {
                tracing::debug!(word = %word, "Rejected duplicate word");
                ("conflict", "Word already exists.".to_string())
            }
            Self::NotFound => ("not_found", "Word not found".to_string()),
            Self::MethodNotAllowed { method, .. } => (
                "method_not_allowed",
                format!("Method {} not allowed", method),
            ),
            Self::Store { message } => ("internal_error", message.to_string()),
        };

        let body = Json(json!({
            "success": false,
            "error": code,
            "message": message,
        }));

        match self {
            Self::MethodNotAllowed { allow, .. } => {
                (status, [(header::ALLOW, allow)], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::StoreError;
    use axum::body::to_bytes;
    use uuid::Uuid;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "word" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "word is required");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from_repo(RepoError::NotFound { id: Uuid::nil() }, "unused");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn conflict_is_409() {
        let err = ApiError::Conflict { word: "run".into() };
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn store_error_hides_details() {
        let err = ApiError::from_repo(
            RepoError::StoreUnavailable {
                operation: "list",
                source: StoreError::Backend(sqlx::Error::PoolTimedOut),
            },
            "Failed to fetch words",
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "Failed to fetch words");
    }

    #[tokio::test]
    async fn method_not_allowed_sets_allow() {
        let err = ApiError::MethodNotAllowed {
            method: Method::PATCH,
            allow: "POST, GET",
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "POST, GET");

        let body = body_json(response).await;
        assert_eq!(body["message"], "Method PATCH not allowed");
    }
}
