//! Notepad repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite};
use tracing::debug;

use notepad_core::{
    CreateNotepadRequest, Error, Notepad, NotepadRepository, Result, UpdateNotepadRequest,
};

const NOTEPAD_COLUMNS: &str = "id, user_id, title, body, created_at_utc, updated_at_utc";

#[derive(Debug, sqlx::FromRow)]
struct NotepadRow {
    id: i64,
    user_id: i64,
    title: String,
    body: String,
    created_at_utc: DateTime<Utc>,
    updated_at_utc: DateTime<Utc>,
}

impl From<NotepadRow> for Notepad {
    fn from(row: NotepadRow) -> Self {
        Notepad {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            body: row.body,
            created_at_utc: row.created_at_utc,
            updated_at_utc: row.updated_at_utc,
        }
    }
}

/// SQLite implementation of NotepadRepository.
#[derive(Clone)]
pub struct SqliteNotepadRepository {
    pool: Pool<Sqlite>,
}

impl SqliteNotepadRepository {
    /// Create a new SqliteNotepadRepository with the given connection pool.
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Number of notepads owned by `user_id`.
    pub async fn count(&self, user_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notepad WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(count)
    }
}

#[async_trait]
impl NotepadRepository for SqliteNotepadRepository {
    async fn insert(&self, req: CreateNotepadRequest) -> Result<i64> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO notepad (user_id, title, body, created_at_utc, updated_at_utc) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(req.user_id)
        .bind(&req.title)
        .bind(&req.body)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        let id = result.last_insert_rowid();
        debug!(
            subsystem = "database",
            component = "notepads",
            op = "insert",
            user_id = req.user_id,
            notepad_id = id,
            "Notepad inserted"
        );
        Ok(id)
    }

    async fn fetch(&self, id: i64, user_id: i64) -> Result<Notepad> {
        let sql = format!(
            "SELECT {} FROM notepad WHERE id = ? AND user_id = ?",
            NOTEPAD_COLUMNS
        );
        let row: Option<NotepadRow> = sqlx::query_as(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        row.map(Notepad::from).ok_or(Error::NotepadNotFound(id))
    }

    async fn list(&self, user_id: i64) -> Result<Vec<Notepad>> {
        let sql = format!(
            "SELECT {} FROM notepad WHERE user_id = ? ORDER BY id ASC",
            NOTEPAD_COLUMNS
        );
        let rows: Vec<NotepadRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "notepads",
            op = "list",
            user_id,
            result_count = rows.len(),
            "Notepads listed"
        );
        Ok(rows.into_iter().map(Notepad::from).collect())
    }

    async fn update(&self, id: i64, user_id: i64, req: UpdateNotepadRequest) -> Result<()> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE notepad SET title = ?, body = ?, updated_at_utc = ? \
             WHERE id = ? AND user_id = ?",
        )
        .bind(&req.title)
        .bind(&req.body)
        .bind(now)
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotepadNotFound(id));
        }
        debug!(
            subsystem = "database",
            component = "notepads",
            op = "update",
            user_id,
            notepad_id = id,
            "Notepad updated"
        );
        Ok(())
    }

    async fn delete(&self, id: i64, user_id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM notepad WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotepadNotFound(id));
        }
        debug!(
            subsystem = "database",
            component = "notepads",
            op = "delete",
            user_id,
            notepad_id = id,
            "Notepad deleted"
        );
        Ok(())
    }

    async fn exists(&self, id: i64, user_id: i64) -> Result<bool> {
        let exists: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM notepad WHERE id = ? AND user_id = ?)",
        )
        .bind(id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(exists != 0)
    }
}
