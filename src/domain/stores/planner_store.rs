use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::error;
use uuid::Uuid;

use crate::domain::models::planner::Planner;
use crate::domain::ports::SnapshotStore;
use crate::domain::stores::{load_state, Persister};

const SNAPSHOT_KEY: &str = "planners";

pub struct PlannerStore {
    state: RwLock<HashMap<String, Planner>>,
    persister: Persister,
}

pub struct NewPlanner {
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub telephone: String,
    pub website: Option<String>,
}

impl PlannerStore {
    pub async fn bootstrap(snapshot: Arc<dyn SnapshotStore>) -> Self {
        let state = load_state(&snapshot, SNAPSHOT_KEY).await;
        Self {
            state: RwLock::new(state),
            persister: Persister::new(SNAPSHOT_KEY, snapshot),
        }
    }

    pub fn get(&self, id: &str) -> Option<Planner> {
        self.state.read().expect("planners lock poisoned").get(id).cloned()
    }

    /// All planners, newest first.
    pub fn all_sorted(&self) -> Vec<Planner> {
        let mut planners: Vec<Planner> = self
            .state
            .read()
            .expect("planners lock poisoned")
            .values()
            .cloned()
            .collect();
        planners.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        planners
    }

    pub fn add(&self, new: NewPlanner, now_ms: i64) -> Planner {
        let planner = Planner {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            company_name: new.company_name,
            email: new.email,
            telephone: new.telephone,
            website: new.website,
            created_at: now_ms,
            updated_at: now_ms,
        };
        {
            let mut state = self.state.write().expect("planners lock poisoned");
            state.insert(planner.id.clone(), planner.clone());
        }
        self.persist();
        planner
    }

    /// Merges a partial update and refreshes `updated_at`. A missing id is
    /// logged and ignored.
    pub fn update(
        &self,
        id: &str,
        name: Option<String>,
        company_name: Option<String>,
        email: Option<String>,
        telephone: Option<String>,
        website: Option<String>,
        now_ms: i64,
    ) -> Option<Planner> {
        let updated = {
            let mut state = self.state.write().expect("planners lock poisoned");
            match state.get_mut(id) {
                None => {
                    error!("planner not found: {}", id);
                    None
                }
                Some(planner) => {
                    if let Some(val) = name {
                        planner.name = val;
                    }
                    if let Some(val) = company_name {
                        planner.company_name = val;
                    }
                    if let Some(val) = email {
                        planner.email = val;
                    }
                    if let Some(val) = telephone {
                        planner.telephone = val;
                    }
                    if let Some(val) = website {
                        planner.website = Some(val);
                    }
                    planner.updated_at = now_ms;
                    Some(planner.clone())
                }
            }
        };
        if updated.is_some() {
            self.persist();
        }
        updated
    }

    /// A missing id is logged and ignored. Events referencing the planner are
    /// left untouched; there is no cascading cleanup.
    pub fn delete(&self, id: &str) {
        let removed = {
            let mut state = self.state.write().expect("planners lock poisoned");
            let removed = state.remove(id);
            if removed.is_none() {
                error!("planner not found: {}", id);
            }
            removed.is_some()
        };
        if removed {
            self.persist();
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.persister.is_dirty()
    }

    fn persist(&self) {
        let json = {
            let state = self.state.read().expect("planners lock poisoned");
            match serde_json::to_string(&*state) {
                Ok(json) => json,
                Err(e) => {
                    error!("failed to serialize planners snapshot: {}", e);
                    self.persister.mark_dirty();
                    return;
                }
            }
        };
        self.persister.write(json);
    }
}
