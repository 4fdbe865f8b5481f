//! Core data models for notepad.
//!
//! These types are shared across all notepad crates and represent
//! the core domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// USER TYPES
// =============================================================================

/// An account that can own notepads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub created_at_utc: DateTime<Utc>,
}

/// User row including the stored password hash.
///
/// Only the login path needs this; everything else works with [`User`].
#[derive(Clone)]
pub struct UserCredentials {
    pub user: User,
    /// Argon2id PHC string.
    pub password_hash: String,
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("user", &self.user)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// NOTEPAD TYPES
// =============================================================================

/// A user-owned text record with a title and a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notepad {
    /// Assigned by the store, never reused.
    pub id: i64,
    /// Owner; immutable after creation.
    pub user_id: i64,
    pub title: String,
    pub body: String,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

// =============================================================================
// SESSION TYPES
// =============================================================================

/// Server-side login session. The raw cookie token is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Hex SHA-256 of the cookie token.
    pub token_hash: String,
    pub user_id: i64,
    pub created_at_utc: DateTime<Utc>,
    pub expires_at_utc: DateTime<Utc>,
}

impl Session {
    /// Whether the session is past its expiry at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at_utc <= now
    }
}
