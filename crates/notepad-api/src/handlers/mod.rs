//! Route handlers.

pub mod auth;
pub mod health;
pub mod notepad;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// 302 Found to `location`.
///
/// `axum::response::Redirect::to` answers 303; form posts here are expected
/// to come back with 302.
pub fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// 302 Found to `location` that also sets a cookie.
pub fn redirect_with_cookie(location: &str, cookie: String) -> Response {
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, location.to_string()),
            (header::SET_COOKIE, cookie),
        ],
    )
        .into_response()
}
