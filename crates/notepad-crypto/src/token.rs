//! Opaque session tokens.
//!
//! The raw token only ever lives in the client's cookie; the store keeps its
//! SHA-256 digest.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use notepad_core::defaults::SESSION_TOKEN_BYTES;

use crate::error::{CryptoError, CryptoResult};

/// Encoded length of a token: unpadded base64 of `SESSION_TOKEN_BYTES`.
pub const TOKEN_LENGTH: usize = (SESSION_TOKEN_BYTES * 4 + 2) / 3;

/// Random session token, wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SessionToken(String);

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

impl SessionToken {
    /// Generate a fresh token from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; SESSION_TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        let token = URL_SAFE_NO_PAD.encode(bytes);
        bytes.zeroize();
        Self(token)
    }

    /// Accept a token read back from a cookie.
    pub fn parse(value: &str) -> CryptoResult<Self> {
        let well_formed = value.len() == TOKEN_LENGTH
            && value
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if !well_formed {
            return Err(CryptoError::MalformedToken);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex SHA-256 digest used as the storage key.
    pub fn digest(&self) -> String {
        hash_token(&self.0)
    }
}

/// Hash a token using SHA256.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
