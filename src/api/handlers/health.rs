use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::state::AppState;

fn sync_label(dirty: bool) -> &'static str {
    if dirty { "dirty" } else { "synced" }
}

/// Liveness plus per-store sync state: a store goes `dirty` when its last
/// snapshot write failed and memory has diverged from storage.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "stores": {
            "bookings": sync_label(state.bookings.is_dirty()),
            "events": sync_label(state.events.is_dirty()),
            "expenses": sync_label(state.expenses.is_dirty()),
            "planners": sync_label(state.planners.is_dirty()),
            "vendors": sync_label(state.vendors.is_dirty()),
        }
    }))
}
