use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::extractors::auth::AuthUser;
use crate::domain::services::finance::{pending_payments, summarize, visible_events};
use crate::error::AppError;
use crate::state::AppState;

/// The overview figures. The event set is role-filtered before any sum runs;
/// venue expenses only enter the picture (and the response) for admins.
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let events = state.events.all_sorted();
    let visible = visible_events(&user, &events);

    let expenses = if user.is_admin() {
        Some(state.expenses.all_sorted())
    } else {
        None
    };

    let summary = summarize(&visible, expenses.as_deref());
    Ok(Json(summary))
}

pub async fn get_pending_payments(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let events = state.events.all_sorted();
    let visible = visible_events(&user, &events);
    Ok(Json(pending_payments(&visible)))
}
