//! # notepad-db
//!
//! SQLite database layer for notepad.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for notepads, users, and login sessions
//! - Embedded schema migrations
//!
//! ## Example
//!
//! ```rust,ignore
//! use notepad_db::{Database, NotepadRepository, CreateNotepadRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("sqlite://notepad.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     let id = db.notepads.insert(CreateNotepadRequest {
//!         user_id: 1,
//!         title: "Groceries".to_string(),
//!         body: "Milk, eggs".to_string(),
//!     }).await?;
//!
//!     println!("Created notepad: {}", id);
//!     Ok(())
//! }
//! ```
pub mod notepads;
pub mod pool;
pub mod sessions;
pub mod users;

// Always compiled so integration tests (in tests/) can use it
pub mod test_fixtures;

// Re-export core types
pub use notepad_core::*;

pub use notepads::SqliteNotepadRepository;
pub use pool::{
    create_in_memory_pool, create_pool, create_pool_with_config, log_pool_metrics, PoolConfig,
};
pub use sessions::SqliteSessionRepository;
pub use users::SqliteUserRepository;

/// Combined database context with all repositories.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::SqlitePool,
    pub notepads: SqliteNotepadRepository,
    pub users: SqliteUserRepository,
    /// Server-side login sessions.
    pub sessions: SqliteSessionRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self {
            notepads: SqliteNotepadRepository::new(pool.clone()),
            users: SqliteUserRepository::new(pool.clone()),
            sessions: SqliteSessionRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Private in-memory database. Not migrated.
    pub async fn connect_in_memory() -> Result<Self> {
        let pool = create_in_memory_pool().await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.pool
    }

    /// Round-trip a trivial query. Used by the health endpoint.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(())
    }
}
