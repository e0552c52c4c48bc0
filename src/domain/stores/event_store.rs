use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::error;

use crate::domain::models::event::VenueEvent;
use crate::domain::ports::SnapshotStore;
use crate::domain::stores::{load_state, Persister};

const SNAPSHOT_KEY: &str = "events";

pub struct EventStore {
    state: RwLock<HashMap<String, VenueEvent>>,
    persister: Persister,
}

impl EventStore {
    pub async fn bootstrap(snapshot: Arc<dyn SnapshotStore>) -> Self {
        let state = load_state(&snapshot, SNAPSHOT_KEY).await;
        Self {
            state: RwLock::new(state),
            persister: Persister::new(SNAPSHOT_KEY, snapshot),
        }
    }

    pub fn get(&self, id: &str) -> Option<VenueEvent> {
        self.state.read().expect("events lock poisoned").get(id).cloned()
    }

    /// All events, ascending by date.
    pub fn all_sorted(&self) -> Vec<VenueEvent> {
        let mut events: Vec<VenueEvent> = self
            .state
            .read()
            .expect("events lock poisoned")
            .values()
            .cloned()
            .collect();
        events.sort_by(|a, b| a.date.cmp(&b.date));
        events
    }

    pub fn add(&self, event: VenueEvent) -> String {
        let id = event.id.clone();
        {
            let mut state = self.state.write().expect("events lock poisoned");
            state.insert(id.clone(), event);
        }
        self.persist();
        id
    }

    /// Replaces an event wholesale (the handler has already merged the
    /// partial update and refreshed `updated_at`). A missing id is logged and
    /// ignored; last write wins.
    pub fn replace(&self, event: VenueEvent) -> Option<VenueEvent> {
        let replaced = {
            let mut state = self.state.write().expect("events lock poisoned");
            if !state.contains_key(&event.id) {
                error!("event not found: {}", event.id);
                None
            } else {
                state.insert(event.id.clone(), event.clone());
                Some(event)
            }
        };
        if replaced.is_some() {
            self.persist();
        }
        replaced
    }

    /// Removes an event, returning it so the caller can release its date.
    /// A missing id is logged and ignored.
    pub fn delete(&self, id: &str) -> Option<VenueEvent> {
        let removed = {
            let mut state = self.state.write().expect("events lock poisoned");
            let removed = state.remove(id);
            if removed.is_none() {
                error!("event not found: {}", id);
            }
            removed
        };
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    pub fn is_dirty(&self) -> bool {
        self.persister.is_dirty()
    }

    fn persist(&self) {
        let json = {
            let state = self.state.read().expect("events lock poisoned");
            match serde_json::to_string(&*state) {
                Ok(json) => json,
                Err(e) => {
                    error!("failed to serialize events snapshot: {}", e);
                    self.persister.mark_dirty();
                    return;
                }
            }
        };
        self.persister.write(json);
    }
}
