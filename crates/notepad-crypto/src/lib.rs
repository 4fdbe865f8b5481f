//! # notepad-crypto
//!
//! Credential primitives for notepad.
//!
//! - **Password hashing**: Argon2id, stored as PHC strings
//! - **Session tokens**: 256 random bits, URL-safe base64 in the cookie,
//!   SHA-256 digest in the store
//!
//! ## Examples
//!
//! ```rust
//! use notepad_crypto::{Argon2Hasher, PasswordParams, SessionToken};
//!
//! let hasher = Argon2Hasher::new(&PasswordParams::low_cost()).unwrap();
//! let hash = hasher.hash("correct horse").unwrap();
//! assert!(hasher.verify("correct horse", &hash).unwrap());
//!
//! let token = SessionToken::generate();
//! assert_eq!(token.digest().len(), 64);
//! ```

pub mod error;
pub mod password;
pub mod token;

pub use error::{CryptoError, CryptoResult};
pub use password::{Argon2Hasher, PasswordParams};
pub use token::{hash_token, SessionToken, TOKEN_LENGTH};
