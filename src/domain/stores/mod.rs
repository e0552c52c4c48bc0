pub mod booking_store;
pub mod event_store;
pub mod expense_store;
pub mod planner_store;
pub mod vendor_store;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::domain::ports::SnapshotStore;

/// Shared persistence plumbing for the in-memory stores. Mutations complete
/// synchronously in memory; the wholesale snapshot write happens on a spawned
/// task the caller never waits on. A failed write marks the store dirty so
/// the divergence between memory and storage is visible instead of silent.
pub(crate) struct Persister {
    key: &'static str,
    snapshot: Arc<dyn SnapshotStore>,
    dirty: Arc<AtomicBool>,
}

impl Persister {
    pub(crate) fn new(key: &'static str, snapshot: Arc<dyn SnapshotStore>) -> Self {
        Self {
            key,
            snapshot,
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn write(&self, json: String) {
        let key = self.key;
        let snapshot = self.snapshot.clone();
        let dirty = self.dirty.clone();
        tokio::spawn(async move {
            match snapshot.save(key, &json).await {
                Ok(()) => dirty.store(false, Ordering::Relaxed),
                Err(e) => {
                    error!("failed to persist {} snapshot: {}", key, e);
                    dirty.store(true, Ordering::Relaxed);
                }
            }
        });
    }

    pub(crate) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Relaxed);
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Relaxed)
    }
}

/// Loads a store's record at bootstrap. A missing record, a load error or a
/// corrupt payload all fall back to the default so the process always comes
/// up; the problem is logged, not fatal.
pub(crate) async fn load_state<T: DeserializeOwned + Default>(
    snapshot: &Arc<dyn SnapshotStore>,
    key: &str,
) -> T {
    match snapshot.load(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                warn!("corrupt {} snapshot, starting empty: {}", key, e);
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            warn!("failed to load {} snapshot, starting empty: {}", key, e);
            T::default()
        }
    }
}
