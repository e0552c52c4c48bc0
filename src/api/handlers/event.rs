use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::dtos::requests::{CreateEventRequest, EventFilterQuery, UpdateEventRequest};
use crate::api::dtos::responses::EventMutationResponse;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::booking::DateStatus;
use crate::domain::models::event::{EventKind, VenueEvent};
use crate::domain::services::finance::visible_events;
use crate::error::AppError;
use crate::state::AppState;

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Query(filter): Query<EventFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.events.all_sorted();
    let visible: Vec<VenueEvent> = visible_events(&user, &events)
        .into_iter()
        .filter(|e| filter.date.as_deref().is_none_or(|d| e.date == d))
        .filter(|e| {
            filter
                .event_type
                .is_none_or(|t| e.kind.event_type() == t)
        })
        .cloned()
        .collect();

    Ok(Json(visible))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .events
        .get(&id)
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    if !user.is_admin()
        && event.financials.planner_id.as_deref() != user.planner_scope()
    {
        // Hide other planners' events entirely rather than acknowledging them.
        return Err(AppError::NotFound("Event not found".into()));
    }

    Ok(Json(event))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }
    parse_date(&payload.date)?;

    let kind = EventKind::assemble(
        payload.event_type,
        payload.wedding_category,
        payload.timeline,
        payload.meeting_details,
    )
    .map_err(AppError::Validation)?;

    let now_ms = Utc::now().timestamp_millis();
    let event = VenueEvent {
        id: VenueEvent::make_id(&payload.date, now_ms),
        name: payload.name,
        date: payload.date,
        kind,
        financials: payload.financials,
        notes: payload.notes,
        vendor_ids: payload.vendor_ids,
        created_at: now_ms,
        updated_at: now_ms,
    };

    state.events.add(event.clone());
    // A committed event claims its date on the calendar.
    state
        .bookings
        .set_status(&event.date, DateStatus::Booked, None, None, None, now_ms);

    info!("Event created: {} on {}", event.id, event.date);

    Ok(Json(EventMutationResponse {
        success: true,
        event: Some(event),
    }))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }

    let Some(existing) = state.events.get(&id) else {
        error!("event not found: {}", id);
        return Ok(Json(EventMutationResponse {
            success: true,
            event: None,
        }));
    };

    if let Some(ref date) = payload.date {
        parse_date(date)?;
    }

    // A type change rebuilds the kind from the request alone so stale
    // kind-gated fields cannot survive; without one, provided fields merge
    // into the current kind and are validated against it.
    let kind = match payload.event_type {
        Some(event_type) => EventKind::assemble(
            event_type,
            payload.wedding_category,
            payload.timeline,
            payload.meeting_details,
        )
        .map_err(AppError::Validation)?,
        None => {
            let current = existing.kind.clone();
            let event_type = current.event_type();
            let wedding_category = match (&current, payload.wedding_category) {
                (EventKind::Wedding { wedding_category, .. }, None) => *wedding_category,
                (_, provided) => provided,
            };
            let meeting_details = match (&current, payload.meeting_details) {
                (EventKind::Meetings { meeting_details }, None) => Some(meeting_details.clone()),
                (_, provided) => provided,
            };
            let timeline = payload
                .timeline
                .or_else(|| current.timeline().cloned());
            EventKind::assemble(event_type, wedding_category, timeline, meeting_details)
                .map_err(AppError::Validation)?
        }
    };

    let now_ms = Utc::now().timestamp_millis();
    let updated = VenueEvent {
        id: existing.id.clone(),
        name: payload.name.unwrap_or(existing.name.clone()),
        date: payload.date.unwrap_or(existing.date.clone()),
        kind,
        financials: payload.financials.unwrap_or(existing.financials.clone()),
        notes: payload.notes.or(existing.notes.clone()),
        vendor_ids: payload.vendor_ids.or(existing.vendor_ids.clone()),
        created_at: existing.created_at,
        updated_at: now_ms,
    };

    let Some(saved) = state.events.replace(updated) else {
        return Ok(Json(EventMutationResponse {
            success: true,
            event: None,
        }));
    };

    // Release-then-claim is two separate store writes; a crash in between
    // leaves the old date free and the new one unclaimed until the event is
    // saved again.
    if saved.date != existing.date {
        state
            .bookings
            .set_status(&existing.date, DateStatus::Available, None, None, None, now_ms);
    }
    state
        .bookings
        .set_status(&saved.date, DateStatus::Booked, None, None, None, now_ms);

    info!("Event updated: {}", saved.id);

    Ok(Json(EventMutationResponse {
        success: true,
        event: Some(saved),
    }))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin only".into()));
    }

    if let Some(removed) = state.events.delete(&id) {
        // Explicitly reset the date rather than relying on the event's absence.
        let now_ms = Utc::now().timestamp_millis();
        state
            .bookings
            .set_status(&removed.date, DateStatus::Available, None, None, None, now_ms);
        info!("Event deleted: {} ({} released)", id, removed.date);
    }

    Ok(Json(EventMutationResponse {
        success: true,
        event: None,
    }))
}
