use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateVendorRequest, UpdateVendorRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::stores::vendor_store::NewVendor;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_vendors(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }
    Ok(Json(state.vendors.all_sorted()))
}

pub async fn create_vendor(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateVendorRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }

    let now_ms = Utc::now().timestamp_millis();
    let vendor = state.vendors.add(
        NewVendor {
            name: payload.name,
            telephone: payload.telephone,
            email: payload.email,
            website: payload.website,
            instagram: payload.instagram,
        },
        now_ms,
    );

    info!("Vendor added: {}", vendor.id);
    Ok(Json(vendor))
}

pub async fn update_vendor(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateVendorRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }

    let updated = state.vendors.update(
        &id,
        payload.name,
        payload.telephone,
        payload.email,
        payload.website,
        payload.instagram,
    );

    Ok(Json(json!({ "success": true, "vendor": updated })))
}

pub async fn delete_vendor(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }
    state.vendors.delete(&id);
    Ok(Json(json!({ "success": true })))
}
