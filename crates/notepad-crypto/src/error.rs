//! Error types for cryptographic operations.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Argon2 parameters were rejected.
    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    /// Hashing or verification failed for a reason other than a wrong password.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Stored hash is not a parseable PHC string.
    #[error("Invalid password hash: {0}")]
    InvalidHash(String),

    /// Session token has the wrong length or alphabet.
    #[error("Malformed session token")]
    MalformedToken,
}

/// Result type for cryptographic operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

impl From<CryptoError> for notepad_core::Error {
    fn from(err: CryptoError) -> Self {
        notepad_core::Error::Crypto(err.to_string())
    }
}
