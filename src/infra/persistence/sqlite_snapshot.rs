use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::domain::ports::SnapshotStore;
use crate::error::AppError;

/// Durable snapshots: one row per logical store, rewritten wholesale.
pub struct SqliteSnapshotStore {
    pool: SqlitePool,
}

impl SqliteSnapshotStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnapshotStore for SqliteSnapshotStore {
    async fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT data FROM snapshots WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.map(|r| r.get::<String, _>("data")))
    }

    async fn save(&self, key: &str, data: &str) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO snapshots (key, data, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(data)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(())
    }
}
