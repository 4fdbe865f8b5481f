//! User repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite};
use tracing::debug;

use notepad_core::validation::normalize_email;
use notepad_core::{CreateUserRequest, Error, Result, User, UserCredentials, UserRepository};

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    created_at_utc: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            created_at_utc: self.created_at_utc,
        }
    }

    fn into_credentials(self) -> UserCredentials {
        let password_hash = self.password_hash.clone();
        UserCredentials {
            user: self.into_user(),
            password_hash,
        }
    }
}

/// SQLite implementation of UserRepository.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Pool<Sqlite>,
}

impl SqliteUserRepository {
    /// Create a new SqliteUserRepository with the given connection pool.
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    async fn fetch_row_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        sqlx::query_as(
            "SELECT id, email, password_hash, created_at_utc FROM app_user WHERE email = ?",
        )
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, req: CreateUserRequest) -> Result<i64> {
        let email = normalize_email(&req.email);
        let result = sqlx::query(
            "INSERT INTO app_user (email, password_hash, created_at_utc) VALUES (?, ?, ?)",
        )
        .bind(&email)
        .bind(&req.password_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return Error::Conflict(format!("Email {} is already registered", email));
                }
            }
            Error::Database(e)
        })?;

        let id = result.last_insert_rowid();
        debug!(
            subsystem = "database",
            component = "users",
            op = "insert",
            user_id = id,
            "User inserted"
        );
        Ok(id)
    }

    async fn fetch(&self, id: i64) -> Result<User> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, email, password_hash, created_at_utc FROM app_user WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        row.map(UserRow::into_user).ok_or(Error::UserNotFound(id))
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>> {
        Ok(self
            .fetch_row_by_email(email)
            .await?
            .map(UserRow::into_credentials))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM app_user WHERE email = ?)")
            .bind(normalize_email(email))
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(exists != 0)
    }
}
