//! HTTP-facing error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use notepad_crypto::CryptoError;

use crate::views;

/// Errors a handler can return. Anything that is not a 4xx renders as a
/// generic 500 page; the detail only goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Database(notepad_core::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<notepad_core::Error> for ApiError {
    fn from(err: notepad_core::Error) -> Self {
        if err.is_not_found() {
            return ApiError::NotFound(err.to_string());
        }
        match err {
            notepad_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Database(other),
        }
    }
}

impl From<CryptoError> for ApiError {
    fn from(err: CryptoError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("blocking task failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, heading, message) = match &self {
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                "Not found",
                "The page you requested does not exist.",
            ),
            ApiError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                "Bad request",
                "The request could not be processed.",
            ),
            ApiError::Database(_) | ApiError::Internal(_) => {
                error!(
                    subsystem = "api",
                    component = "error",
                    error = %self,
                    "Request failed"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong",
                    "Please try again later.",
                )
            }
        };

        views::render_status(status, views::error_page(heading, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants_map_to_404() {
        for err in [
            notepad_core::Error::NotepadNotFound(1),
            notepad_core::Error::UserNotFound(1),
            notepad_core::Error::NotFound("x".into()),
        ] {
            let api: ApiError = err.into();
            assert_eq!(api.into_response().status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let api: ApiError = notepad_core::Error::InvalidInput("bad".into()).into();
        assert!(matches!(api, ApiError::BadRequest(ref m) if m == "bad"));
        assert_eq!(api.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_core_failure_maps_to_500() {
        let api: ApiError = notepad_core::Error::Internal("boom".into()).into();
        assert!(matches!(api, ApiError::Database(_)));
        assert_eq!(
            api.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_crypto_error_maps_to_500() {
        let api: ApiError = CryptoError::MalformedToken.into();
        assert!(matches!(api, ApiError::Internal(_)));
        assert_eq!(
            api.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let api = ApiError::NotFound("Notepad not found: 3".into());
        assert_eq!(api.to_string(), "Not found: Notepad not found: 3");
    }
}
