//! Account registration, authentication, and session issuance.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};

use notepad_core::{
    CreateSessionRequest, CreateUserRequest, Error, SessionRepository, SignupInput, User,
    UserRepository, ValidSignup,
};
use notepad_crypto::SessionToken;

use crate::config::SeedUser;
use crate::error::ApiError;
use crate::AppState;

/// Outcome of a signup attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Created(i64),
    EmailTaken,
}

/// Hash a password on the blocking pool.
pub async fn hash_password(state: &AppState, password: String) -> Result<String, ApiError> {
    let hasher = state.hasher.clone();
    let hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;
    Ok(hash)
}

/// Create an account for already validated input.
pub async fn register(state: &AppState, signup: ValidSignup) -> Result<Registration, ApiError> {
    if state.db.users.exists_by_email(&signup.email).await? {
        return Ok(Registration::EmailTaken);
    }

    let password_hash = hash_password(state, signup.password).await?;
    match state
        .db
        .users
        .insert(CreateUserRequest {
            email: signup.email,
            password_hash,
        })
        .await
    {
        Ok(id) => {
            info!(
                subsystem = "api",
                component = "accounts",
                op = "register",
                user_id = id,
                "User registered"
            );
            Ok(Registration::Created(id))
        }
        // Lost a race with a concurrent signup for the same address.
        Err(Error::Conflict(_)) => Ok(Registration::EmailTaken),
        Err(e) => Err(e.into()),
    }
}

/// Check an email/password pair.
///
/// Unknown emails still pay for one hash verification.
pub async fn authenticate(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<Option<User>, ApiError> {
    let start = Instant::now();
    let credentials = state.db.users.find_credentials(email).await?;

    let hasher = state.hasher.clone();
    let password = password.to_string();
    let (user, verified) = match credentials {
        Some(creds) => {
            let hash = creds.password_hash.clone();
            let verified =
                tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await?;
            // A stored hash that does not parse locks the account out rather
            // than failing the request.
            (Some(creds.user), verified.unwrap_or(false))
        }
        None => {
            tokio::task::spawn_blocking(move || hasher.verify_dummy(&password)).await?;
            (None, false)
        }
    };

    debug!(
        subsystem = "api",
        component = "accounts",
        op = "authenticate",
        success = verified,
        duration_ms = start.elapsed().as_millis() as u64,
        "Credentials checked"
    );
    Ok(user.filter(|_| verified))
}

/// Start a session for `user_id` and return the token for the cookie.
pub async fn open_session(state: &AppState, user_id: i64) -> Result<SessionToken, ApiError> {
    let expires_at_utc = Utc::now()
        .checked_add_signed(state.config.session_ttl)
        .ok_or_else(|| ApiError::Internal("Session lifetime overflows the clock".into()))?;
    let token = SessionToken::generate();
    state
        .db
        .sessions
        .create(CreateSessionRequest {
            token_hash: token.digest(),
            user_id,
            expires_at_utc,
        })
        .await?;
    Ok(token)
}

/// Revoke the session with this digest. Missing sessions are fine.
pub async fn close_session(state: &AppState, token_hash: &str) -> Result<(), ApiError> {
    let removed = state.db.sessions.revoke(token_hash).await?;
    debug!(
        subsystem = "api",
        component = "accounts",
        op = "close_session",
        success = removed,
        "Session closed"
    );
    Ok(())
}

/// Create the configured seed account unless the email is already taken.
///
/// Returns whether an account was created.
pub async fn ensure_seed_user(state: &AppState, seed: &SeedUser) -> Result<bool, ApiError> {
    let signup = SignupInput {
        email: Some(seed.email.clone()),
        password: Some(seed.password.clone()),
    }
    .validate()
    .map_err(|errors| {
        let detail = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        ApiError::BadRequest(format!("Invalid seed user: {}", detail))
    })?;

    Ok(matches!(
        register(state, signup).await?,
        Registration::Created(_)
    ))
}
