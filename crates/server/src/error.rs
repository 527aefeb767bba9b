//! Unified error handling.
//!
//! Provides a unified `AppError` type rendered as a JSON body
//! `{"error": message}` with the matching status code. All route handlers
//! return `Result<T, AppError>`; nothing escapes to the client as a raw
//! trace.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::AuthError;
use crate::store::StoreError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed required field.
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid admin credential on a gated route.
    #[error("Admin auth required")]
    Unauthorized,

    /// Login failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Unknown record id.
    #[error("Not found")]
    NotFound,

    /// Storage operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Unexpected failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Auth(err) => match err {
                AuthError::InvalidPassword => StatusCode::UNAUTHORIZED,
                AuthError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound | Self::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request error");
        }

        // Remote backing errors surface their message (they carry setup
        // hints); local I/O details stay out of responses.
        let message = match self {
            Self::Store(StoreError::NotFound) => "Not found".to_string(),
            Self::Store(StoreError::Remote(msg)) => msg,
            Self::Store(_) | Self::Internal(_) | Self::Auth(AuthError::Token(_)) => {
                "Server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::validation("Missing name or price");
        assert_eq!(err.to_string(), "Missing name or price");

        assert_eq!(AppError::NotFound.to_string(), "Not found");
        assert_eq!(AppError::Unauthorized.to_string(), "Admin auth required");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::validation("bad")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(get_status(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidPassword)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(get_status(AppError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            get_status(AppError::Store(StoreError::NotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Store(StoreError::Remote("boom".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Internal("test".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
