use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{Duration, NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{DateRangeQuery, SetBookingRequest, UpdateHoldDurationRequest};
use crate::api::dtos::responses::{BookingsResponse, HoldDurationResponse, SetBookingResponse};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::booking::DateStatus;
use crate::domain::services::status::{calendar_stats, day_status, hold_lapsed};
use crate::error::AppError;
use crate::state::AppState;

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))
}

/// The active booking set plus the global hold duration. Admin only: the raw
/// booking layer is never exposed to planner sessions.
pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }

    let now_ms = Utc::now().timestamp_millis();
    Ok(Json(BookingsResponse {
        bookings: state.bookings.active(now_ms),
        hold_duration: state.bookings.hold_duration_ms(),
    }))
}

pub async fn set_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<SetBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    parse_date(&payload.date)?;
    let now_ms = Utc::now().timestamp_millis();

    let planner_id = if user.is_admin() {
        payload.planner_id
    } else {
        // Planners may only place or release their own holds, never commit a
        // date outright.
        if payload.status == DateStatus::Booked {
            return Err(AppError::Forbidden("Planners may not set a date to booked".into()));
        }
        // A lapsed hold no longer guards its date, swept or not.
        if let Some(existing) = state.bookings.get(&payload.date)
            && existing.planner_id.as_deref() != user.planner_scope()
            && !hold_lapsed(&existing, state.bookings.hold_duration_ms(), now_ms)
        {
            return Err(AppError::Forbidden("Date is held by someone else".into()));
        }
        user.planner_scope().map(str::to_string)
    };

    let booking = state.bookings.set_status(
        &payload.date,
        payload.status,
        payload.note,
        planner_id,
        payload.custom_hold_days,
        now_ms,
    );

    info!("Booking set: {} -> {:?}", payload.date, payload.status);

    Ok(Json(SetBookingResponse {
        success: true,
        booking,
    }))
}

pub async fn update_hold_duration(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<UpdateHoldDurationRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }
    if !(1..=90).contains(&payload.days) {
        return Err(AppError::Validation("Hold duration must be 1 to 90 days".into()));
    }

    state.bookings.set_hold_duration_days(payload.days);
    info!("Hold duration updated: {} days", payload.days);

    Ok(Json(HoldDurationResponse {
        success: true,
        hold_duration: state.bookings.hold_duration_ms(),
    }))
}

/// Derived statuses for a date range, one entry per day. All views read
/// through this single derivation, role rules included.
pub async fn get_date_range(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let from = parse_date(&range.from)?;
    let to = parse_date(&range.to)?;
    if to < from {
        return Err(AppError::Validation("'to' must not precede 'from'".into()));
    }

    let now_ms = Utc::now().timestamp_millis();
    let bookings = state.bookings.all();
    let events = state.events.all_sorted();
    let hold_duration = state.bookings.hold_duration_ms();

    let mut days = Vec::new();
    let mut current = from;
    while current <= to {
        let date = current.format("%Y-%m-%d").to_string();
        days.push(day_status(&user, &date, &bookings, &events, hold_duration, now_ms));
        current += Duration::days(1);
    }

    Ok(Json(days))
}

pub async fn get_date(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    parse_date(&date)?;

    let now_ms = Utc::now().timestamp_millis();
    let day = day_status(
        &user,
        &date,
        &state.bookings.all(),
        &state.events.all_sorted(),
        state.bookings.hold_duration_ms(),
        now_ms,
    );

    Ok(Json(day))
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let now_ms = Utc::now().timestamp_millis();
    let stats = calendar_stats(
        &user,
        &state.bookings.all(),
        &state.events.all_sorted(),
        state.bookings.hold_duration_ms(),
        now_ms,
    );

    Ok(Json(stats))
}
