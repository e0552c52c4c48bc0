use serde::{Deserialize, Serialize};

/// Raw status as stored in the booking collection. A date with no record is
/// `available`; the stored status of an on-hold record may differ from the
/// effective status once the hold lapses (see `services::status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateStatus {
    Available,
    OnHold,
    Booked,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateBooking {
    pub date: String,
    pub status: DateStatus,
    pub set_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_hold_days: Option<i64>,
}
