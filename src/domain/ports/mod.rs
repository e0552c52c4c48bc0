use crate::error::AppError;
use async_trait::async_trait;

/// Wholesale persistence for one logical record per store. Stores serialize
/// their entire state and hand it off here; readers load it once at startup.
/// There are no incremental updates and no per-entity rows behind this port.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn save(&self, key: &str, data: &str) -> Result<(), AppError>;
}
