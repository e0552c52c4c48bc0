use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::models::booking::{DateBooking, DateStatus};
use crate::domain::ports::SnapshotStore;
use crate::domain::services::status::{hold_expires_at, DAY_MS};
use crate::domain::stores::{load_state, Persister};

const SNAPSHOT_KEY: &str = "bookings";

/// Bookings and the global hold duration share one persisted record.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingState {
    bookings: HashMap<String, DateBooking>,
    hold_duration: i64,
}

pub struct BookingStore {
    state: RwLock<BookingState>,
    persister: Persister,
}

impl BookingStore {
    pub async fn bootstrap(snapshot: Arc<dyn SnapshotStore>, default_hold_ms: i64) -> Self {
        let mut state: BookingState = load_state(&snapshot, SNAPSHOT_KEY).await;
        if state.hold_duration <= 0 {
            state.hold_duration = default_hold_ms;
        }
        Self {
            state: RwLock::new(state),
            persister: Persister::new(SNAPSHOT_KEY, snapshot),
        }
    }

    pub fn hold_duration_ms(&self) -> i64 {
        self.state.read().expect("bookings lock poisoned").hold_duration
    }

    pub fn hold_duration_days(&self) -> i64 {
        let ms = self.hold_duration_ms() as f64;
        (ms / DAY_MS as f64).round() as i64
    }

    pub fn set_hold_duration_days(&self, days: i64) {
        {
            let mut state = self.state.write().expect("bookings lock poisoned");
            state.hold_duration = days * DAY_MS;
        }
        self.persist();
    }

    pub fn get(&self, date: &str) -> Option<DateBooking> {
        self.state
            .read()
            .expect("bookings lock poisoned")
            .bookings
            .get(date)
            .cloned()
    }

    /// Every stored booking, stale holds included. Readers derive effective
    /// statuses from this via `services::status`.
    pub fn all(&self) -> HashMap<String, DateBooking> {
        self.state.read().expect("bookings lock poisoned").bookings.clone()
    }

    /// The active set: booked dates plus unexpired holds, exactly what the
    /// calendar fetch and the public embed serve.
    pub fn active(&self, now_ms: i64) -> HashMap<String, DateBooking> {
        let state = self.state.read().expect("bookings lock poisoned");
        state
            .bookings
            .iter()
            .filter(|(_, b)| match b.status {
                DateStatus::Booked => true,
                DateStatus::OnHold => now_ms <= hold_expires_at(b, state.hold_duration),
                DateStatus::Available => false,
            })
            .map(|(date, b)| (date.clone(), b.clone()))
            .collect()
    }

    /// Applies an explicit status decision to a date. `available` deletes the
    /// record (idempotently); a hold override is only kept for on-hold dates.
    pub fn set_status(
        &self,
        date: &str,
        status: DateStatus,
        note: Option<String>,
        planner_id: Option<String>,
        custom_hold_days: Option<i64>,
        now_ms: i64,
    ) -> Option<DateBooking> {
        let booking = {
            let mut state = self.state.write().expect("bookings lock poisoned");
            if status == DateStatus::Available {
                state.bookings.remove(date);
                None
            } else {
                let booking = DateBooking {
                    date: date.to_string(),
                    status,
                    set_at: now_ms,
                    note,
                    planner_id,
                    custom_hold_days: if status == DateStatus::OnHold {
                        custom_hold_days
                    } else {
                        None
                    },
                };
                state.bookings.insert(date.to_string(), booking.clone());
                Some(booking)
            }
        };
        self.persist();
        booking
    }

    /// Removes lapsed holds so storage does not accumulate stale records.
    /// Purely a cleanup: reads are already expiry-checked.
    pub fn sweep_expired(&self, now_ms: i64) -> usize {
        let removed = {
            let mut state = self.state.write().expect("bookings lock poisoned");
            let hold_duration = state.hold_duration;
            let before = state.bookings.len();
            state.bookings.retain(|_, b| match b.status {
                DateStatus::OnHold => now_ms <= hold_expires_at(b, hold_duration),
                _ => true,
            });
            before - state.bookings.len()
        };
        if removed > 0 {
            self.persist();
        }
        removed
    }

    pub fn is_dirty(&self) -> bool {
        self.persister.is_dirty()
    }

    fn persist(&self) {
        let json = {
            let state = self.state.read().expect("bookings lock poisoned");
            match serde_json::to_string(&*state) {
                Ok(json) => json,
                Err(e) => {
                    error!("failed to serialize bookings snapshot: {}", e);
                    self.persister.mark_dirty();
                    return;
                }
            }
        };
        self.persister.write(json);
    }
}
