//! Cookie-backed login sessions.
//!
//! The cookie carries a random [`SessionToken`]; the database only knows its
//! digest. [`CurrentUser`] gates every notepad route.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use chrono::{Duration, Utc};
use tracing::debug;

use notepad_core::defaults::SESSION_COOKIE_NAME;
use notepad_core::{SessionRepository, User};
use notepad_crypto::SessionToken;

use crate::error::ApiError;
use crate::handlers::redirect_found;
use crate::AppState;

/// The authenticated user behind a request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    /// Digest of the presented session token.
    pub token_hash: String,
}

impl CurrentUser {
    pub fn id(&self) -> i64 {
        self.user.id
    }
}

/// Rejects with a 302 to `/login` when there is no valid session.
#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match current_user(&parts.headers, state).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => {
                debug!(
                    subsystem = "api",
                    component = "session",
                    path = %parts.uri.path(),
                    "No session, redirecting to login"
                );
                Err(redirect_found("/login"))
            }
            Err(e) => Err(e.into_response()),
        }
    }
}

/// Resolve the session cookie on a request, if any.
pub async fn current_user(
    headers: &HeaderMap,
    state: &AppState,
) -> Result<Option<CurrentUser>, ApiError> {
    let Some(token) = session_token(headers) else {
        return Ok(None);
    };
    let token_hash = token.digest();
    let user = state.db.sessions.resolve(&token_hash, Utc::now()).await?;
    Ok(user.map(|user| CurrentUser { user, token_hash }))
}

/// Extract a well-formed session token from the `Cookie` headers.
///
/// Malformed values are ignored as if absent.
pub fn session_token(headers: &HeaderMap) -> Option<SessionToken> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .and_then(|(_, value)| SessionToken::parse(value.trim()).ok())
}

/// `Set-Cookie` value that installs a session token.
pub fn session_cookie(token: &SessionToken, ttl: Duration, secure: bool) -> String {
    build_cookie(token.as_str(), ttl.num_seconds(), secure)
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie(secure: bool) -> String {
    build_cookie("", 0, secure)
}

fn build_cookie(value: &str, max_age: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE_NAME, value, max_age
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
