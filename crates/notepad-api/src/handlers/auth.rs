//! Login, logout, and signup.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;
use tracing::{debug, info};

use notepad_core::{FieldErrors, SignupInput};

use crate::error::ApiError;
use crate::handlers::{redirect_found, redirect_with_cookie};
use crate::services::accounts::{self, Registration};
use crate::session::{self, clear_session_cookie, current_user, session_cookie};
use crate::views;
use crate::AppState;

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password.";
pub const EMAIL_TAKEN_MESSAGE: &str = "Email address already in use.";

#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// `GET /`
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    match current_user(&headers, &state).await? {
        Some(_) => Ok(redirect_found("/notepad")),
        None => Ok(redirect_found("/login")),
    }
}

/// `GET /login`
pub async fn login_form(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    if current_user(&headers, &state).await?.is_some() {
        return Ok(redirect_found("/notepad"));
    }
    Ok(views::render(views::login_page("", None)))
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, ApiError> {
    let email = form.email.unwrap_or_default();
    let password = form.password.unwrap_or_default();

    let user = if email.trim().is_empty() || password.is_empty() {
        None
    } else {
        accounts::authenticate(&state, &email, &password).await?
    };

    let Some(user) = user else {
        debug!(
            subsystem = "api",
            component = "auth",
            op = "login",
            success = false,
            "Login rejected"
        );
        return Ok(views::render(views::login_page(
            &email,
            Some(LOGIN_FAILED_MESSAGE),
        )));
    };

    let token = accounts::open_session(&state, user.id).await?;
    info!(
        subsystem = "api",
        component = "auth",
        op = "login",
        user_id = user.id,
        success = true,
        "User logged in"
    );
    Ok(redirect_with_cookie(
        "/notepad",
        session_cookie(&token, state.config.session_ttl, state.config.cookie_secure),
    ))
}

/// `GET /logout`
///
/// Works with or without a session; the cookie is always cleared.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    if let Some(token) = session::session_token(&headers) {
        accounts::close_session(&state, &token.digest()).await?;
    }
    Ok(redirect_with_cookie(
        "/login",
        clear_session_cookie(state.config.cookie_secure),
    ))
}

/// `GET /signup`
pub async fn signup_form(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    if current_user(&headers, &state).await?.is_some() {
        return Ok(redirect_found("/notepad"));
    }
    Ok(views::render(views::signup_page(
        "",
        &FieldErrors::default(),
        None,
    )))
}

/// `POST /signup`
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, ApiError> {
    let email = form.email.clone().unwrap_or_default();
    let input = SignupInput {
        email: form.email,
        password: form.password,
    };

    let signup = match input.validate() {
        Ok(signup) => signup,
        Err(errors) => {
            return Ok(views::render(views::signup_page(&email, &errors, None)));
        }
    };

    match accounts::register(&state, signup).await? {
        Registration::Created(user_id) => {
            let token = accounts::open_session(&state, user_id).await?;
            Ok(redirect_with_cookie(
                "/notepad",
                session_cookie(&token, state.config.session_ttl, state.config.cookie_secure),
            ))
        }
        Registration::EmailTaken => Ok(views::render(views::signup_page(
            &email,
            &FieldErrors::default(),
            Some(EMAIL_TAKEN_MESSAGE),
        ))),
    }
}
