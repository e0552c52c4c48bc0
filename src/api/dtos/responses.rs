use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::domain::models::booking::{DateBooking, DateStatus};
use crate::domain::models::event::VenueEvent;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub bookings: HashMap<String, DateBooking>,
    pub hold_duration: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBookingResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<DateBooking>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldDurationResponse {
    pub success: bool,
    pub hold_duration: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMutationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<VenueEvent>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicCalendarResponse {
    pub dates: BTreeMap<String, DateStatus>,
    pub hold_period: i64,
    pub readonly: bool,
}
