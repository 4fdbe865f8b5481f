//! Login session repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite};
use tracing::debug;

use notepad_core::{CreateSessionRequest, Error, Result, Session, SessionRepository, User};

#[derive(Debug, sqlx::FromRow)]
struct SessionUserRow {
    expires_at_utc: DateTime<Utc>,
    user_id: i64,
    email: String,
    user_created_at_utc: DateTime<Utc>,
}

/// SQLite implementation of SessionRepository.
#[derive(Clone)]
pub struct SqliteSessionRepository {
    pool: Pool<Sqlite>,
}

impl SqliteSessionRepository {
    /// Create a new SqliteSessionRepository with the given connection pool.
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn create(&self, req: CreateSessionRequest) -> Result<Session> {
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO session (token_hash, user_id, created_at_utc, expires_at_utc) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&req.token_hash)
        .bind(req.user_id)
        .bind(now)
        .bind(req.expires_at_utc)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "sessions",
            op = "create",
            user_id = req.user_id,
            "Session created"
        );
        Ok(Session {
            token_hash: req.token_hash,
            user_id: req.user_id,
            created_at_utc: now,
            expires_at_utc: req.expires_at_utc,
        })
    }

    async fn resolve(&self, token_hash: &str, now: DateTime<Utc>) -> Result<Option<User>> {
        let row: Option<SessionUserRow> = sqlx::query_as(
            "SELECT s.expires_at_utc, u.id AS user_id, u.email, \
                    u.created_at_utc AS user_created_at_utc \
             FROM session s JOIN app_user u ON u.id = s.user_id \
             WHERE s.token_hash = ?",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        let Some(row) = row else {
            return Ok(None);
        };

        if row.expires_at_utc <= now {
            debug!(
                subsystem = "database",
                component = "sessions",
                op = "expire",
                user_id = row.user_id,
                "Expired session removed"
            );
            self.revoke(token_hash).await?;
            return Ok(None);
        }

        Ok(Some(User {
            id: row.user_id,
            email: row.email,
            created_at_utc: row.user_created_at_utc,
        }))
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM session WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(result.rows_affected() > 0)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query("DELETE FROM session WHERE expires_at_utc <= ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        let purged = result.rows_affected();
        debug!(
            subsystem = "database",
            component = "sessions",
            op = "purge_expired",
            result_count = purged,
            "Expired sessions purged"
        );
        Ok(purged)
    }
}
