use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::domain::models::booking::{DateBooking, DateStatus};
use crate::domain::models::event::VenueEvent;
use crate::domain::models::user::{Role, User};

pub const DAY_MS: i64 = 86_400_000;

/// The instant an on-hold booking lapses. A per-booking override, when
/// present, replaces the global duration even if it is zero or negative
/// (which makes the hold already expired).
pub fn hold_expires_at(booking: &DateBooking, hold_duration_ms: i64) -> i64 {
    let duration = match booking.custom_hold_days {
        Some(days) => days * DAY_MS,
        None => hold_duration_ms,
    };
    booking.set_at + duration
}

pub fn hold_lapsed(booking: &DateBooking, hold_duration_ms: i64, now_ms: i64) -> bool {
    booking.status == DateStatus::OnHold && now_ms > hold_expires_at(booking, hold_duration_ms)
}

/// The single source of truth for a date's status.
///
/// Precedence: an event on the date always means `booked`, regardless of any
/// booking record. Otherwise the booking record decides: `booked` bookings
/// never expire, `on-hold` bookings lapse to `available` strictly after
/// `set_at` plus the hold duration. Every read site goes through here; the
/// background sweep only prunes storage and is never needed for correctness.
pub fn effective_status(
    date: &str,
    bookings: &HashMap<String, DateBooking>,
    events: &[VenueEvent],
    hold_duration_ms: i64,
    now_ms: i64,
) -> DateStatus {
    if events.iter().any(|e| e.date == date) {
        return DateStatus::Booked;
    }
    match bookings.get(date) {
        None => DateStatus::Available,
        Some(booking) => match booking.status {
            DateStatus::Booked => DateStatus::Booked,
            DateStatus::OnHold => {
                if now_ms > hold_expires_at(booking, hold_duration_ms) {
                    DateStatus::Available
                } else {
                    DateStatus::OnHold
                }
            }
            // Available records are never persisted; treat one as absent.
            DateStatus::Available => DateStatus::Available,
        },
    }
}

/// Whole days left on an active hold, for the calendar badge. `None` when the
/// booking is not on hold or the hold has already lapsed; exactly 0 at the
/// expiry instant.
pub fn remaining_days(booking: &DateBooking, hold_duration_ms: i64, now_ms: i64) -> Option<i64> {
    if booking.status != DateStatus::OnHold {
        return None;
    }
    let expires_at = hold_expires_at(booking, hold_duration_ms);
    if now_ms > expires_at {
        return None;
    }
    Some((expires_at - now_ms + DAY_MS - 1) / DAY_MS)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatus {
    pub date: String,
    pub status: DateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_days: Option<i64>,
}

/// Role-aware view of a single date. Planners never see the booking layer:
/// only their own events surface (as `booked`); every other date reads
/// `available` to them, in-progress holds of other planners included.
pub fn day_status(
    viewer: &User,
    date: &str,
    bookings: &HashMap<String, DateBooking>,
    events: &[VenueEvent],
    hold_duration_ms: i64,
    now_ms: i64,
) -> DayStatus {
    match viewer.role {
        Role::Admin => {
            let status = effective_status(date, bookings, events, hold_duration_ms, now_ms);
            let remaining = if status == DateStatus::OnHold {
                bookings
                    .get(date)
                    .and_then(|b| remaining_days(b, hold_duration_ms, now_ms))
            } else {
                None
            };
            DayStatus {
                date: date.to_string(),
                status,
                remaining_days: remaining,
            }
        }
        Role::Planner => {
            let owned = events
                .iter()
                .any(|e| e.date == date && is_own_event(viewer, e));
            DayStatus {
                date: date.to_string(),
                status: if owned { DateStatus::Booked } else { DateStatus::Available },
                remaining_days: None,
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarStats {
    pub booked_count: usize,
    pub on_hold_count: usize,
    pub total: usize,
}

/// Aggregate counts for the calendar header. Admins count effective statuses
/// over every date that has a booking or an event; planners count their own
/// events and their own active holds.
pub fn calendar_stats(
    viewer: &User,
    bookings: &HashMap<String, DateBooking>,
    events: &[VenueEvent],
    hold_duration_ms: i64,
    now_ms: i64,
) -> CalendarStats {
    let (booked, on_hold) = match viewer.role {
        Role::Admin => {
            let dates: BTreeSet<&str> = bookings
                .keys()
                .map(String::as_str)
                .chain(events.iter().map(|e| e.date.as_str()))
                .collect();
            let mut booked = 0;
            let mut on_hold = 0;
            for date in dates {
                match effective_status(date, bookings, events, hold_duration_ms, now_ms) {
                    DateStatus::Booked => booked += 1,
                    DateStatus::OnHold => on_hold += 1,
                    DateStatus::Available => {}
                }
            }
            (booked, on_hold)
        }
        Role::Planner => {
            let booked = events.iter().filter(|e| is_own_event(viewer, e)).count();
            let on_hold = bookings
                .values()
                .filter(|b| {
                    b.status == DateStatus::OnHold
                        && b.planner_id.as_deref() == viewer.planner_scope()
                        && viewer.planner_scope().is_some()
                        && now_ms <= hold_expires_at(b, hold_duration_ms)
                })
                .count();
            (booked, on_hold)
        }
    };
    CalendarStats {
        booked_count: booked,
        on_hold_count: on_hold,
        total: booked + on_hold,
    }
}

fn is_own_event(viewer: &User, event: &VenueEvent) -> bool {
    match viewer.planner_scope() {
        Some(pid) => event.financials.planner_id.as_deref() == Some(pid),
        None => false,
    }
}
