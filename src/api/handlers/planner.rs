use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreatePlannerRequest, UpdatePlannerRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::services::finance::planner_stats;
use crate::domain::stores::planner_store::NewPlanner;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_planners(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }
    Ok(Json(state.planners.all_sorted()))
}

pub async fn create_planner(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreatePlannerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }

    let now_ms = Utc::now().timestamp_millis();
    let planner = state.planners.add(
        NewPlanner {
            name: payload.name,
            company_name: payload.company_name,
            email: payload.email,
            telephone: payload.telephone,
            website: payload.website,
        },
        now_ms,
    );

    info!("Planner added: {}", planner.id);
    Ok(Json(planner))
}

pub async fn update_planner(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePlannerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }

    let now_ms = Utc::now().timestamp_millis();
    let updated = state.planners.update(
        &id,
        payload.name,
        payload.company_name,
        payload.email,
        payload.telephone,
        payload.website,
        now_ms,
    );

    Ok(Json(json!({ "success": true, "planner": updated })))
}

pub async fn delete_planner(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }
    state.planners.delete(&id);
    Ok(Json(json!({ "success": true })))
}

/// A planner's headline figures. Admins may ask about any planner; a planner
/// session only about itself.
pub async fn get_planner_stats(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() && user.planner_scope() != Some(id.as_str()) {
        return Err(AppError::Forbidden("Not your stats".into()));
    }

    state
        .planners
        .get(&id)
        .ok_or_else(|| AppError::NotFound("Planner not found".to_string()))?;

    let now_ms = Utc::now().timestamp_millis();
    let stats = planner_stats(
        &id,
        &state.events.all_sorted(),
        &state.bookings.all(),
        state.bookings.hold_duration_ms(),
        now_ms,
    );

    Ok(Json(stats))
}
