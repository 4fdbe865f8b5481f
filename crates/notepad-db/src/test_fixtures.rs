//! Test fixtures for database integration tests.
//!
//! Every [`TestDatabase`] is a private, migrated in-memory SQLite database,
//! so tests never share state and need no external server.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use notepad_db::test_fixtures::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let test_db = TestDatabase::new().await;
//!     let data = TestDataBuilder::new(&test_db.db)
//!         .with_user("user@example.com")
//!         .with_notepad("Title", "Body")
//!         .build()
//!         .await;
//!
//!     // Run your tests...
//! }
//! ```

use crate::{
    CreateNotepadRequest, CreateUserRequest, Database, NotepadRepository, UserRepository,
};

/// Placeholder stored as the password hash of fixture users.
///
/// Not a valid PHC string; fixture users cannot log in unless a test
/// stores a real hash.
pub const FIXTURE_PASSWORD_HASH: &str = "fixture-password-hash";

/// Migrated in-memory database for a single test.
pub struct TestDatabase {
    pub db: Database,
}

impl TestDatabase {
    /// Create and migrate a fresh database.
    pub async fn new() -> Self {
        let db = Database::connect_in_memory()
            .await
            .expect("Failed to open in-memory database");
        db.migrate().await.expect("Failed to run migrations");
        Self { db }
    }

    /// Register a user with a placeholder password hash.
    pub async fn create_user(&self, email: &str) -> i64 {
        self.db
            .users
            .insert(CreateUserRequest {
                email: email.to_string(),
                password_hash: FIXTURE_PASSWORD_HASH.to_string(),
            })
            .await
            .expect("Failed to create test user")
    }

    /// Create a notepad owned by `user_id`.
    pub async fn create_notepad(&self, user_id: i64, title: &str, body: &str) -> i64 {
        self.db
            .notepads
            .insert(CreateNotepadRequest {
                user_id,
                title: title.to_string(),
                body: body.to_string(),
            })
            .await
            .expect("Failed to create test notepad")
    }
}

/// Data created by [`TestDataBuilder::build`].
#[derive(Debug, Default)]
pub struct TestData {
    pub user_ids: Vec<i64>,
    pub notepad_ids: Vec<i64>,
}

/// Builder for populating a test database.
///
/// Notepads are owned by the most recently added user.
pub struct TestDataBuilder<'a> {
    db: &'a Database,
    steps: Vec<Step>,
}

enum Step {
    User(String),
    Notepad(String, String),
}

impl<'a> TestDataBuilder<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self {
            db,
            steps: Vec::new(),
        }
    }

    pub fn with_user(mut self, email: &str) -> Self {
        self.steps.push(Step::User(email.to_string()));
        self
    }

    pub fn with_notepad(mut self, title: &str, body: &str) -> Self {
        self.steps
            .push(Step::Notepad(title.to_string(), body.to_string()));
        self
    }

    /// Insert everything in order.
    ///
    /// Panics if a notepad is added before any user.
    pub async fn build(self) -> TestData {
        let mut data = TestData::default();
        for step in self.steps {
            match step {
                Step::User(email) => {
                    let id = self
                        .db
                        .users
                        .insert(CreateUserRequest {
                            email,
                            password_hash: FIXTURE_PASSWORD_HASH.to_string(),
                        })
                        .await
                        .expect("Failed to create test user");
                    data.user_ids.push(id);
                }
                Step::Notepad(title, body) => {
                    let user_id = *data
                        .user_ids
                        .last()
                        .expect("with_notepad requires a preceding with_user");
                    let id = self
                        .db
                        .notepads
                        .insert(CreateNotepadRequest {
                            user_id,
                            title,
                            body,
                        })
                        .await
                        .expect("Failed to create test notepad");
                    data.notepad_ids.push(id);
                }
            }
        }
        data
    }
}
