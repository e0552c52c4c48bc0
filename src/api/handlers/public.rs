use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse, Json};
use chrono::Utc;

use crate::api::dtos::responses::PublicCalendarResponse;
use crate::domain::models::booking::DateStatus;
use crate::domain::services::status::effective_status;
use crate::state::AppState;

/// Read-only calendar for third-party embedding. No authentication; the
/// payload carries derived statuses only, never notes or planner ids, and is
/// cacheable for a minute.
pub async fn embed_calendar(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let now_ms = Utc::now().timestamp_millis();
    let bookings = state.bookings.all();
    let events = state.events.all_sorted();
    let hold_duration = state.bookings.hold_duration_ms();

    let candidates: BTreeSet<String> = bookings
        .keys()
        .cloned()
        .chain(events.iter().map(|e| e.date.clone()))
        .collect();

    let mut dates = BTreeMap::new();
    for date in candidates {
        let status = effective_status(&date, &bookings, &events, hold_duration, now_ms);
        if status != DateStatus::Available {
            dates.insert(date, status);
        }
    }

    let body = PublicCalendarResponse {
        dates,
        hold_period: state.bookings.hold_duration_days(),
        readonly: true,
    };

    (
        [
            (header::CACHE_CONTROL, "public, max-age=60"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET"),
        ],
        Json(body),
    )
}
