use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::domain::models::expense::{default_categories, CategoryItem, VenueExpense};
use crate::domain::ports::SnapshotStore;
use crate::domain::stores::{load_state, Persister};
use crate::error::AppError;

const SNAPSHOT_KEY: &str = "expenses";

/// Expenses and the category list share one persisted record.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseState {
    expenses: HashMap<String, VenueExpense>,
    categories: Vec<CategoryItem>,
}

pub struct ExpenseStore {
    state: RwLock<ExpenseState>,
    persister: Persister,
}

impl ExpenseStore {
    pub async fn bootstrap(snapshot: Arc<dyn SnapshotStore>) -> Self {
        let mut state: ExpenseState = load_state(&snapshot, SNAPSHOT_KEY).await;
        if state.categories.is_empty() {
            state.categories = default_categories();
        }
        Self {
            state: RwLock::new(state),
            persister: Persister::new(SNAPSHOT_KEY, snapshot),
        }
    }

    pub fn get(&self, id: &str) -> Option<VenueExpense> {
        self.state
            .read()
            .expect("expenses lock poisoned")
            .expenses
            .get(id)
            .cloned()
    }

    /// All expenses, most recent date first.
    pub fn all_sorted(&self) -> Vec<VenueExpense> {
        let mut expenses: Vec<VenueExpense> = self
            .state
            .read()
            .expect("expenses lock poisoned")
            .expenses
            .values()
            .cloned()
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses
    }

    pub fn add(&self, date: String, category: String, amount: f64, description: String, now_ms: i64) -> VenueExpense {
        let expense = VenueExpense {
            id: Uuid::new_v4().to_string(),
            date,
            category,
            amount,
            description,
            created_at: now_ms,
            updated_at: now_ms,
        };
        {
            let mut state = self.state.write().expect("expenses lock poisoned");
            state.expenses.insert(expense.id.clone(), expense.clone());
        }
        self.persist();
        expense
    }

    /// Merges a partial update and refreshes `updated_at`. A missing id is
    /// logged and ignored.
    pub fn update(
        &self,
        id: &str,
        date: Option<String>,
        category: Option<String>,
        amount: Option<f64>,
        description: Option<String>,
        now_ms: i64,
    ) -> Option<VenueExpense> {
        let updated = {
            let mut state = self.state.write().expect("expenses lock poisoned");
            match state.expenses.get_mut(id) {
                None => {
                    error!("expense not found: {}", id);
                    None
                }
                Some(expense) => {
                    if let Some(val) = date {
                        expense.date = val;
                    }
                    if let Some(val) = category {
                        expense.category = val;
                    }
                    if let Some(val) = amount {
                        expense.amount = val;
                    }
                    if let Some(val) = description {
                        expense.description = val;
                    }
                    expense.updated_at = now_ms;
                    Some(expense.clone())
                }
            }
        };
        if updated.is_some() {
            self.persist();
        }
        updated
    }

    /// A missing id is logged and ignored.
    pub fn delete(&self, id: &str) {
        let removed = {
            let mut state = self.state.write().expect("expenses lock poisoned");
            let removed = state.expenses.remove(id);
            if removed.is_none() {
                error!("expense not found: {}", id);
            }
            removed.is_some()
        };
        if removed {
            self.persist();
        }
    }

    pub fn categories(&self) -> Vec<CategoryItem> {
        self.state.read().expect("expenses lock poisoned").categories.clone()
    }

    pub fn add_category(&self, label: String) -> CategoryItem {
        let category = CategoryItem {
            id: Uuid::new_v4().to_string(),
            label,
            is_default: false,
        };
        {
            let mut state = self.state.write().expect("expenses lock poisoned");
            state.categories.push(category.clone());
        }
        self.persist();
        category
    }

    /// Unlike the other mutations, category edits fail loudly: callers need
    /// to distinguish a protected default from an unknown id.
    pub fn rename_category(&self, id: &str, label: String) -> Result<CategoryItem, AppError> {
        let renamed = {
            let mut state = self.state.write().expect("expenses lock poisoned");
            let category = state
                .categories
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;
            if category.is_default {
                return Err(AppError::Forbidden(
                    "Default categories cannot be relabeled".to_string(),
                ));
            }
            category.label = label;
            category.clone()
        };
        self.persist();
        Ok(renamed)
    }

    pub fn delete_category(&self, id: &str) -> Result<(), AppError> {
        {
            let mut state = self.state.write().expect("expenses lock poisoned");
            let category = state
                .categories
                .iter()
                .find(|c| c.id == id)
                .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;
            if category.is_default {
                return Err(AppError::Forbidden(
                    "Default categories cannot be deleted".to_string(),
                ));
            }
            state.categories.retain(|c| c.id != id);
        }
        self.persist();
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.persister.is_dirty()
    }

    fn persist(&self) {
        let json = {
            let state = self.state.read().expect("expenses lock poisoned");
            match serde_json::to_string(&*state) {
                Ok(json) => json,
                Err(e) => {
                    error!("failed to serialize expenses snapshot: {}", e);
                    self.persister.mark_dirty();
                    return;
                }
            }
        };
        self.persister.write(json);
    }
}
