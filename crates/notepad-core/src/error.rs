//! Error types for notepad.

use thiserror::Error;

/// Result type alias using notepad's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for notepad operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Notepad not found (or not owned by the requesting user)
    #[error("Notepad not found: {0}")]
    NotepadNotFound(i64),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(i64),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unique constraint or state conflict
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Authentication failed
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Password hashing or token handling failed
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for every variant that should surface as HTTP 404.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_) | Error::NotepadNotFound(_) | Error::UserNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("test resource".to_string());
        assert_eq!(err.to_string(), "Not found: test resource");
    }

    #[test]
    fn test_error_display_notepad_not_found() {
        let err = Error::NotepadNotFound(42);
        assert_eq!(err.to_string(), "Notepad not found: 42");
    }

    #[test]
    fn test_error_display_user_not_found() {
        let err = Error::UserNotFound(7);
        assert_eq!(err.to_string(), "User not found: 7");
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("title is empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: title is empty");
    }

    #[test]
    fn test_error_display_conflict() {
        let err = Error::Conflict("email taken".to_string());
        assert_eq!(err.to_string(), "Conflict: email taken");
    }

    #[test]
    fn test_error_display_crypto() {
        let err = Error::Crypto("bad salt".to_string());
        assert_eq!(err.to_string(), "Crypto error: bad salt");
    }

    #[test]
    fn test_error_display_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.to_string().contains("I/O error:"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::NotepadNotFound(1).is_not_found());
        assert!(Error::UserNotFound(1).is_not_found());
        assert!(Error::NotFound("x".into()).is_not_found());
        assert!(!Error::Conflict("x".into()).is_not_found());
        assert!(!Error::Internal("x".into()).is_not_found());
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, Error::Database(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
