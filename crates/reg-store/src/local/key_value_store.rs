//! On-device persistent key-value slots, backed by SQLite.

use crate::LocalResult;

use std::path::Path;

use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Whole-value string slots keyed by name. Each slot is read and
/// written in one piece; there is no partial update.
#[derive(Debug, Clone)]
pub struct KeyValueStore {
    pool: SqlitePool,
}

impl KeyValueStore {
    /// Open (or create) the slot database at the given path.
    pub async fn open(path: &Path) -> LocalResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Self::init(&pool).await?;
        Ok(Self { pool })
    }

    /// In-memory store for tests and ephemeral sessions.
    pub async fn open_in_memory() -> LocalResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);

        // In-memory needs a single connection or each one sees its own db
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Self::init(&pool).await?;
        Ok(Self { pool })
    }

    async fn init(pool: &SqlitePool) -> LocalResult<()> {
        sqlx::query(
            r#"
                CREATE TABLE IF NOT EXISTS kv_slots (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn get(&self, key: &str) -> LocalResult<Option<String>> {
        let row = sqlx::query("SELECT value FROM kv_slots WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.try_get::<String, _>("value"))
            .transpose()
            .map_err(Into::into)
    }

    pub async fn set(&self, key: &str, value: &str) -> LocalResult<()> {
        sqlx::query(
            r#"
                INSERT INTO kv_slots (key, value) VALUES (?, ?)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn remove(&self, key: &str) -> LocalResult<()> {
        sqlx::query("DELETE FROM kv_slots WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
