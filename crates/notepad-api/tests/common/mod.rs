//! In-process test harness: drives the router with `oneshot` against a
//! private in-memory database.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use notepad_api::{router, AppConfig, AppState};
use notepad_core::defaults::SESSION_COOKIE_NAME;
use notepad_core::UserRepository;
use notepad_crypto::PasswordParams;
use notepad_db::Database;

pub const PASSWORD: &str = "test1234";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let db = Database::connect_in_memory()
            .await
            .expect("Failed to open in-memory database");
        db.migrate().await.expect("Failed to run migrations");
        let state = AppState::new(db, config, &PasswordParams::low_cost())
            .expect("Failed to build app state");
        Self {
            router: router(state.clone()),
            state,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, path: &str, body: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Register an account and return its session cookie.
    pub async fn signup(&self, email: &str) -> String {
        let resp = self
            .post_form(
                "/signup",
                &format!("email={}&password={}", email, PASSWORD),
                None,
            )
            .await;
        assert_redirect(&resp, "/notepad");
        session_cookie(&resp).expect("signup should set a session cookie")
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.post_form(
            "/login",
            &format!("email={}&password={}", email, password),
            None,
        )
        .await
    }

    /// Create a notepad through the form endpoint.
    pub async fn create_notepad(&self, cookie: &str, title: &str, body: &str) {
        let resp = self
            .post_form(
                "/notepad/create",
                &format!("title={}&body={}", title, body),
                Some(cookie),
            )
            .await;
        assert_redirect(&resp, "/notepad");
    }

    pub async fn user_id(&self, email: &str) -> i64 {
        self.state
            .db
            .users
            .find_credentials(email)
            .await
            .unwrap()
            .expect("user should exist")
            .user
            .id
    }

    pub async fn notepad_count(&self, email: &str) -> i64 {
        let user_id = self.user_id(email).await;
        self.state.db.notepads.count(user_id).await.unwrap()
    }

    pub async fn list_body(&self, cookie: &str) -> String {
        let resp = self.get("/notepad", Some(cookie)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        body_string(resp).await
    }
}

/// The `name=value` pair of the session cookie set by a response, if any.
pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter(|v| v.starts_with(&format!("{}=", SESSION_COOKIE_NAME)))
        .filter_map(|v| v.split(';').next())
        .map(str::to_string)
        .find(|pair| pair.len() > SESSION_COOKIE_NAME.len() + 1)
}

pub fn assert_redirect(resp: &Response, location: &str) {
    assert_eq!(resp.status(), StatusCode::FOUND, "expected 302 Found");
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some(location)
    );
}

pub async fn body_string(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is not UTF-8")
}
