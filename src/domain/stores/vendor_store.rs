use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::error;
use uuid::Uuid;

use crate::domain::models::vendor::Vendor;
use crate::domain::ports::SnapshotStore;
use crate::domain::stores::{load_state, Persister};

const SNAPSHOT_KEY: &str = "vendors";

pub struct VendorStore {
    state: RwLock<HashMap<String, Vendor>>,
    persister: Persister,
}

pub struct NewVendor {
    pub name: String,
    pub telephone: String,
    pub email: String,
    pub website: Option<String>,
    pub instagram: Option<String>,
}

impl VendorStore {
    pub async fn bootstrap(snapshot: Arc<dyn SnapshotStore>) -> Self {
        let state = load_state(&snapshot, SNAPSHOT_KEY).await;
        Self {
            state: RwLock::new(state),
            persister: Persister::new(SNAPSHOT_KEY, snapshot),
        }
    }

    pub fn get(&self, id: &str) -> Option<Vendor> {
        self.state.read().expect("vendors lock poisoned").get(id).cloned()
    }

    /// All vendors, newest first.
    pub fn all_sorted(&self) -> Vec<Vendor> {
        let mut vendors: Vec<Vendor> = self
            .state
            .read()
            .expect("vendors lock poisoned")
            .values()
            .cloned()
            .collect();
        vendors.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        vendors
    }

    pub fn add(&self, new: NewVendor, now_ms: i64) -> Vendor {
        let vendor = Vendor {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            telephone: new.telephone,
            email: new.email,
            website: new.website,
            instagram: new.instagram,
            created_at: now_ms,
        };
        {
            let mut state = self.state.write().expect("vendors lock poisoned");
            state.insert(vendor.id.clone(), vendor.clone());
        }
        self.persist();
        vendor
    }

    /// Merges a partial update. A missing id is logged and ignored.
    pub fn update(
        &self,
        id: &str,
        name: Option<String>,
        telephone: Option<String>,
        email: Option<String>,
        website: Option<String>,
        instagram: Option<String>,
    ) -> Option<Vendor> {
        let updated = {
            let mut state = self.state.write().expect("vendors lock poisoned");
            match state.get_mut(id) {
                None => {
                    error!("vendor not found: {}", id);
                    None
                }
                Some(vendor) => {
                    if let Some(val) = name {
                        vendor.name = val;
                    }
                    if let Some(val) = telephone {
                        vendor.telephone = val;
                    }
                    if let Some(val) = email {
                        vendor.email = val;
                    }
                    if let Some(val) = website {
                        vendor.website = Some(val);
                    }
                    if let Some(val) = instagram {
                        vendor.instagram = Some(val);
                    }
                    Some(vendor.clone())
                }
            }
        };
        if updated.is_some() {
            self.persist();
        }
        updated
    }

    /// A missing id is logged and ignored. Events referencing the vendor keep
    /// their dangling ids; there is no cascading cleanup.
    pub fn delete(&self, id: &str) {
        let removed = {
            let mut state = self.state.write().expect("vendors lock poisoned");
            let removed = state.remove(id);
            if removed.is_none() {
                error!("vendor not found: {}", id);
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
            let state = self.state.read().expect("vendors lock poisoned");
            match serde_json::to_string(&*state) {
                Ok(json) => json,
                Err(e) => {
                    error!("failed to serialize vendors snapshot: {}", e);
                    self.persister.mark_dirty();
                    return;
                }
            }
        };
        self.persister.write(json);
    }
}
