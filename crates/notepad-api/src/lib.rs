//! # notepad-api
//!
//! HTTP server for notepad: server-rendered pages for per-user notepad CRUD
//! behind cookie sessions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod services;
pub mod session;
pub mod views;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use notepad_core::defaults::MAX_BODY_BYTES;
use notepad_crypto::{Argon2Hasher, CryptoResult, PasswordParams};
use notepad_db::Database;

pub use config::AppConfig;
pub use error::ApiError;

use handlers::{auth, health, notepad};
use middleware::MakeRequestUuidV7;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub hasher: Arc<Argon2Hasher>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: Database, config: AppConfig, params: &PasswordParams) -> CryptoResult<Self> {
        Ok(Self {
            db,
            hasher: Arc::new(Argon2Hasher::new(params)?),
            config: Arc::new(config),
        })
    }
}

/// Build the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(auth::index))
        .route("/health", get(health::health_check))
        // Session gate
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/signup", get(auth::signup_form).post(auth::signup))
        // Notepads
        .route("/notepad", get(notepad::list_notepads))
        .route(
            "/notepad/create",
            get(notepad::create_form).post(notepad::create_notepad),
        )
        .route(
            "/notepad/edit/:id",
            get(notepad::edit_form).post(notepad::edit_notepad),
        )
        .route("/notepad/delete/:id", post(notepad::delete_notepad))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}
