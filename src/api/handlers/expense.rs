use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CategoryLabelRequest, CreateExpenseRequest, UpdateExpenseRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::user::User;
use crate::domain::services::finance::expense_summary;
use crate::error::AppError;
use crate::state::AppState;

/// Venue expenses are the operator's own books; planner sessions never see
/// them, not even zeroed out.
fn require_admin(user: &User) -> Result<(), AppError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Admin only".into()))
    }
}

pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&user)?;
    Ok(Json(state.expenses.all_sorted()))
}

pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&user)?;
    NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))?;

    let now_ms = Utc::now().timestamp_millis();
    let expense = state.expenses.add(
        payload.date,
        payload.category,
        payload.amount,
        payload.description,
        now_ms,
    );

    info!("Expense added: {}", expense.id);
    Ok(Json(expense))
}

pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateExpenseRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&user)?;

    let now_ms = Utc::now().timestamp_millis();
    let updated = state.expenses.update(
        &id,
        payload.date,
        payload.category,
        payload.amount,
        payload.description,
        now_ms,
    );

    Ok(Json(json!({ "success": true, "expense": updated })))
}

pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&user)?;
    state.expenses.delete(&id);
    Ok(Json(json!({ "success": true })))
}

pub async fn get_expense_summary(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&user)?;
    let summary = expense_summary(&state.expenses.all_sorted(), &state.expenses.categories());
    Ok(Json(summary))
}

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&user)?;
    Ok(Json(state.expenses.categories()))
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CategoryLabelRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&user)?;
    let label = payload.label.trim().to_string();
    if label.is_empty() {
        return Err(AppError::Validation("Category label must not be empty".into()));
    }

    let category = state.expenses.add_category(label);
    info!("Expense category added: {}", category.id);
    Ok(Json(category))
}

pub async fn update_category(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<CategoryLabelRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&user)?;
    let label = payload.label.trim().to_string();
    if label.is_empty() {
        return Err(AppError::Validation("Category label must not be empty".into()));
    }

    let category = state.expenses.rename_category(&id, label)?;
    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&user)?;
    state.expenses.delete_category(&id)?;
    info!("Expense category deleted: {}", id);
    Ok(Json(json!({ "success": true })))
}
