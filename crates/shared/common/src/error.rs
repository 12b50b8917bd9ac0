//! Unified error handling for HTTP.
//!
//! Provides a single error type that converts into Axum HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    // Resource errors
    /// Rendered as a 404 with an empty body
    #[error("Resource not found")]
    NotFound,

    /// Rendered as a 404 with the message as a plain-text body
    #[error("{0}")]
    NotFoundMessage(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound | AppError::NotFoundMessage(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::NotFoundMessage(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get user-facing message
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }

    /// Attach a plain-text body to a bare `NotFound`; other errors pass through.
    pub fn with_not_found_message(self, message: impl Into<String>) -> Self {
        match self {
            AppError::NotFound => AppError::NotFoundMessage(message.into()),
            other => other,
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::NotFound => status.into_response(),
            AppError::NotFoundMessage(message) => (status, message).into_response(),
            other => {
                let body = ErrorResponse {
                    error: ErrorBody {
                        code: other.code().to_string(),
                        message: other.user_message(),
                    },
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(id) => {
                tracing::debug!("User {} not found", id);
                AppError::NotFound
            }
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn bare_not_found_has_empty_body() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "");
    }

    #[tokio::test]
    async fn not_found_message_is_plain_text() {
        let response = AppError::NotFound
            .with_not_found_message("User not found")
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "User not found");
    }

    #[tokio::test]
    async fn validation_uses_json_envelope() {
        let response = AppError::validation("missing field `name`").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "missing field `name`");
    }

    #[test]
    fn not_found_message_leaves_other_errors_alone() {
        let err = AppError::bad_request("id").with_not_found_message("User not found");
        assert_eq!(err, AppError::BadRequest("id".to_string()));
    }

    #[tokio::test]
    async fn bad_request_message_is_not_prefixed() {
        let response = AppError::bad_request("Cannot parse `abc` to a `i64`").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(body["error"]["message"], "Cannot parse `abc` to a `i64`");
    }

    #[test]
    fn ok_or_not_found_maps_none() {
        assert_eq!(Some(3).ok_or_not_found(), Ok(3));
        assert_eq!(None::<i32>.ok_or_not_found(), Err(AppError::NotFound));
    }

    #[test]
    fn domain_validation_maps_to_validation() {
        assert_eq!(
            AppError::from(DomainError::validation("bad hours")),
            AppError::Validation("bad hours".to_string())
        );
    }

    #[test]
    fn domain_not_found_maps_to_bare_not_found() {
        assert_eq!(AppError::from(DomainError::not_found(7)), AppError::NotFound);
    }
}
