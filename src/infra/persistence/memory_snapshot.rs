use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::SnapshotStore;
use crate::error::AppError;

/// The in-memory server store: snapshots live for the process lifetime only.
#[derive(Default)]
pub struct MemorySnapshotStore {
    records: RwLock<HashMap<String, String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .records
            .read()
            .expect("snapshot lock poisoned")
            .get(key)
            .cloned())
    }

    async fn save(&self, key: &str, data: &str) -> Result<(), AppError> {
        self.records
            .write()
            .expect("snapshot lock poisoned")
            .insert(key.to_string(), data.to_string());
        Ok(())
    }
}
