//! Centralized default constants for notepad.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum notepad title length, in characters.
pub const MAX_TITLE_LENGTH: usize = 256;

/// Minimum password length accepted at signup, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// SESSIONS
// =============================================================================

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "notepad_session";

/// Default session lifetime in hours (one week).
pub const SESSION_TTL_HOURS: i64 = 168;

/// Longest accepted session lifetime in hours (ten years).
pub const MAX_SESSION_TTL_HOURS: i64 = 10 * 365 * 24;

/// Number of random bytes in a session token before encoding.
pub const SESSION_TOKEN_BYTES: usize = 32;

// =============================================================================
// SERVER
// =============================================================================

/// Default database location (created on first start).
pub const DATABASE_URL: &str = "sqlite://notepad.db?mode=rwc";

/// Default bind address.
pub const HOST: &str = "0.0.0.0";

/// Default listen port.
pub const PORT: u16 = 3000;

/// Default maximum number of pooled database connections.
pub const DB_MAX_CONNECTIONS: u32 = 5;

/// Maximum accepted request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;
