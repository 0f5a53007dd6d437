//! Connection pool and schema bootstrap.

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{Sqlite, SqlitePool, SqlitePoolOptions};

use crate::error::StoreResult;

/// Handle to the backing SQLite database.
///
/// Cloning is cheap; all clones share one pool. Connections are checked out
/// per request via [`Store::acquire`] and returned by the pool guard when the
/// request ends, whichever path it takes.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open a pool against the given SQLite URL (e.g. `sqlite://blogapi.db?mode=rwc`).
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new().connect(url).await?;
        Ok(Self { pool })
    }

    /// Wrap an already-built pool. Used by tests that want an in-memory database.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create both tables if they do not exist yet.
    ///
    /// Idempotent; run once at process start. This is create-if-absent only,
    /// existing tables are never migrated.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS blogs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        tracing::debug!("schema ensured");
        Ok(())
    }

    /// Check one connection out of the pool for the duration of a request.
    pub async fn acquire(&self) -> StoreResult<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }
}
