//! Core traits for notepad abstractions.
//!
//! These traits define the interfaces that concrete storage backends
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::*;

// =============================================================================
// NOTEPAD REPOSITORY
// =============================================================================

/// Request for creating a new notepad.
#[derive(Debug, Clone)]
pub struct CreateNotepadRequest {
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// Request for replacing a notepad's title and body.
#[derive(Debug, Clone)]
pub struct UpdateNotepadRequest {
    pub title: String,
    pub body: String,
}

/// Repository for notepad CRUD operations.
///
/// Every single-notepad operation is keyed by `(id, user_id)`; a notepad owned
/// by someone else is reported exactly like a missing one.
#[async_trait]
pub trait NotepadRepository: Send + Sync {
    /// Insert a new notepad and return its store-assigned id.
    async fn insert(&self, req: CreateNotepadRequest) -> Result<i64>;

    /// Fetch one notepad owned by `user_id`.
    async fn fetch(&self, id: i64, user_id: i64) -> Result<Notepad>;

    /// List all notepads owned by `user_id`, oldest first.
    async fn list(&self, user_id: i64) -> Result<Vec<Notepad>>;

    /// Replace title and body of a notepad owned by `user_id`.
    async fn update(&self, id: i64, user_id: i64, req: UpdateNotepadRequest) -> Result<()>;

    /// Permanently delete a notepad owned by `user_id`.
    async fn delete(&self, id: i64, user_id: i64) -> Result<()>;

    /// Check if a notepad exists and is owned by `user_id`.
    async fn exists(&self, id: i64, user_id: i64) -> Result<bool>;
}

// =============================================================================
// USER REPOSITORY
// =============================================================================

/// Request for registering a user.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    /// Already normalized (see [`crate::validation::normalize_email`]).
    pub email: String,
    pub password_hash: String,
}

/// Repository for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user. Fails with `Error::Conflict` when the email is taken.
    async fn insert(&self, req: CreateUserRequest) -> Result<i64>;

    /// Fetch a user by ID.
    async fn fetch(&self, id: i64) -> Result<User>;

    /// Look up the stored credentials for an email address.
    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>>;

    /// Check if an email address is registered.
    async fn exists_by_email(&self, email: &str) -> Result<bool>;
}

// =============================================================================
// SESSION REPOSITORY
// =============================================================================

/// Request for opening a session.
#[derive(Debug, Clone)]
pub struct CreateSessionRequest {
    pub token_hash: String,
    pub user_id: i64,
    pub expires_at_utc: DateTime<Utc>,
}

/// Repository for server-side login sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a new session.
    async fn create(&self, req: CreateSessionRequest) -> Result<Session>;

    /// Resolve a token hash to its user.
    ///
    /// Returns `None` for unknown or expired sessions; an expired session is
    /// removed as a side effect.
    async fn resolve(&self, token_hash: &str, now: DateTime<Utc>) -> Result<Option<User>>;

    /// Remove a session. Returns whether a session was removed.
    async fn revoke(&self, token_hash: &str) -> Result<bool>;

    /// Remove every session that expired before `now`.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64>;
}
