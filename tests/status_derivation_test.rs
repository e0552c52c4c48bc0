use std::collections::HashMap;

use venue_backend::domain::models::booking::{DateBooking, DateStatus};
use venue_backend::domain::models::event::{
    EventFinancials, EventKind, PaymentInfo, PaymentStatus, VenueEvent,
};
use venue_backend::domain::services::status::{
    effective_status, hold_expires_at, remaining_days, DAY_MS,
};

fn on_hold(date: &str, set_at: i64, custom_hold_days: Option<i64>) -> DateBooking {
    DateBooking {
        date: date.to_string(),
        status: DateStatus::OnHold,
        set_at,
        note: None,
        planner_id: None,
        custom_hold_days,
    }
}

fn booked(date: &str, set_at: i64) -> DateBooking {
    DateBooking {
        date: date.to_string(),
        status: DateStatus::Booked,
        set_at,
        note: None,
        planner_id: None,
        custom_hold_days: None,
    }
}

fn event_on(date: &str) -> VenueEvent {
    VenueEvent {
        id: format!("{}-1000", date),
        name: "Test event".to_string(),
        date: date.to_string(),
        kind: EventKind::Other { timeline: None },
        financials: EventFinancials {
            venue_rental_fee: 0.0,
            income_from_extras: 0.0,
            costs: 0.0,
            planner_commission: None,
            planner_commission_percentage: None,
            planner_id: None,
            payment: PaymentInfo {
                status: PaymentStatus::Pending,
                date_received: None,
                method: None,
            },
            commission_payment: None,
        },
        notes: None,
        vendor_ids: None,
        created_at: 1000,
        updated_at: 1000,
    }
}

fn bookings_of(list: Vec<DateBooking>) -> HashMap<String, DateBooking> {
    list.into_iter().map(|b| (b.date.clone(), b)).collect()
}

const HOLD_7D: i64 = 7 * DAY_MS;

#[test]
fn no_booking_no_event_is_available() {
    let bookings = HashMap::new();
    let status = effective_status("2025-03-10", &bookings, &[], HOLD_7D, 0);
    assert_eq!(status, DateStatus::Available);
}

#[test]
fn hold_expires_exactly_at_boundary() {
    let t = 1_000_000;
    let bookings = bookings_of(vec![on_hold("2025-03-10", t, None)]);

    // Still on hold at the expiry instant itself.
    let at_expiry = t + HOLD_7D;
    assert_eq!(
        effective_status("2025-03-10", &bookings, &[], HOLD_7D, at_expiry),
        DateStatus::OnHold
    );

    // One millisecond later the hold has lapsed.
    assert_eq!(
        effective_status("2025-03-10", &bookings, &[], HOLD_7D, at_expiry + 1),
        DateStatus::Available
    );

    // And never before.
    assert_eq!(
        effective_status("2025-03-10", &bookings, &[], HOLD_7D, t),
        DateStatus::OnHold
    );
}

#[test]
fn custom_hold_days_override_global_duration() {
    let t = 5_000;
    let bookings = bookings_of(vec![on_hold("2025-03-10", t, Some(3))]);
    let expires_at = t + 3 * DAY_MS;

    assert_eq!(
        effective_status("2025-03-10", &bookings, &[], HOLD_7D, expires_at),
        DateStatus::OnHold
    );
    assert_eq!(
        effective_status("2025-03-10", &bookings, &[], HOLD_7D, expires_at + 1),
        DateStatus::Available
    );
}

#[test]
fn zero_or_negative_custom_hold_is_already_expired() {
    let t = 10_000;
    let zero = bookings_of(vec![on_hold("2025-03-10", t, Some(0))]);
    let negative = bookings_of(vec![on_hold("2025-03-11", t, Some(-2))]);

    assert_eq!(
        effective_status("2025-03-10", &zero, &[], HOLD_7D, t + 1),
        DateStatus::Available
    );
    assert_eq!(
        effective_status("2025-03-11", &negative, &[], HOLD_7D, t),
        DateStatus::Available
    );
}

#[test]
fn booked_bookings_never_expire() {
    let bookings = bookings_of(vec![booked("2025-03-10", 0)]);
    let far_future = 1000 * DAY_MS;
    assert_eq!(
        effective_status("2025-03-10", &bookings, &[], HOLD_7D, far_future),
        DateStatus::Booked
    );
}

#[test]
fn event_wins_over_conflicting_booking() {
    let t = 0;
    let events = vec![event_on("2025-05-01")];

    // Conflicting on-hold record, even a lapsed one: the event still wins.
    let bookings = bookings_of(vec![on_hold("2025-05-01", t, Some(1))]);
    assert_eq!(
        effective_status("2025-05-01", &bookings, &events, HOLD_7D, t),
        DateStatus::Booked
    );
    assert_eq!(
        effective_status("2025-05-01", &bookings, &events, HOLD_7D, t + 100 * DAY_MS),
        DateStatus::Booked
    );

    // No booking record at all: event presence alone means booked.
    assert_eq!(
        effective_status("2025-05-01", &HashMap::new(), &events, HOLD_7D, t),
        DateStatus::Booked
    );
}

#[test]
fn remaining_days_counts_down_and_disappears_after_lapse() {
    let t = 0;
    let booking = on_hold("2025-03-10", t, Some(3));

    assert_eq!(remaining_days(&booking, HOLD_7D, t), Some(3));
    assert_eq!(remaining_days(&booking, HOLD_7D, t + 2 * DAY_MS), Some(1));
    assert_eq!(remaining_days(&booking, HOLD_7D, t + 2 * DAY_MS + 1), Some(1));
    // Exactly 0 at the expiry instant, then no badge at all.
    assert_eq!(remaining_days(&booking, HOLD_7D, t + 3 * DAY_MS), Some(0));
    assert_eq!(remaining_days(&booking, HOLD_7D, t + 3 * DAY_MS + 1), None);
}

#[test]
fn remaining_days_is_monotonically_non_increasing() {
    let booking = on_hold("2025-03-10", 0, None);
    let mut last = i64::MAX;
    for step in 0..=(7 * 24) {
        let now = step * DAY_MS / 24;
        if let Some(days) = remaining_days(&booking, HOLD_7D, now) {
            assert!(days <= last, "remaining days increased at t={}", now);
            last = days;
        }
    }
    assert_eq!(last, 0);
}

#[test]
fn remaining_days_absent_for_booked_dates() {
    let booking = booked("2025-03-10", 0);
    assert_eq!(remaining_days(&booking, HOLD_7D, 0), None);
}

#[test]
fn three_day_hold_runs_its_full_lifecycle() {
    let t = 1_700_000_000_000;
    let booking = on_hold("2025-03-10", t, Some(3));
    let bookings = bookings_of(vec![booking.clone()]);

    // At T + 2 days: on hold with one day left.
    let now = t + 2 * DAY_MS;
    assert_eq!(
        effective_status("2025-03-10", &bookings, &[], HOLD_7D, now),
        DateStatus::OnHold
    );
    assert_eq!(remaining_days(&booking, HOLD_7D, now), Some(1));

    // At T + 3 days + 1ms: lapsed.
    let now = t + 3 * DAY_MS + 1;
    assert_eq!(
        effective_status("2025-03-10", &bookings, &[], HOLD_7D, now),
        DateStatus::Available
    );
    assert_eq!(remaining_days(&booking, HOLD_7D, now), None);
}

#[test]
fn expires_at_uses_override_only_when_present() {
    let with_override = on_hold("2025-03-10", 100, Some(2));
    let without = on_hold("2025-03-10", 100, None);
    assert_eq!(hold_expires_at(&with_override, HOLD_7D), 100 + 2 * DAY_MS);
    assert_eq!(hold_expires_at(&without, HOLD_7D), 100 + HOLD_7D);
}
