use serde::Deserialize;

use crate::domain::models::booking::DateStatus;
use crate::domain::models::event::{
    EventFinancials, EventTimeline, EventType, MeetingDetails, WeddingCategory,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub secret: String,
    #[serde(default)]
    pub planner_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBookingRequest {
    pub date: String,
    pub status: DateStatus,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub planner_id: Option<String>,
    #[serde(default)]
    pub custom_hold_days: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdateHoldDurationRequest {
    pub days: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub from: String,
    pub to: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilterQuery {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub event_type: Option<EventType>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub date: String,
    pub event_type: EventType,
    #[serde(default)]
    pub wedding_category: Option<WeddingCategory>,
    #[serde(default)]
    pub timeline: Option<EventTimeline>,
    #[serde(default)]
    pub meeting_details: Option<MeetingDetails>,
    pub financials: EventFinancials,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub vendor_ids: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub event_type: Option<EventType>,
    #[serde(default)]
    pub wedding_category: Option<WeddingCategory>,
    #[serde(default)]
    pub timeline: Option<EventTimeline>,
    #[serde(default)]
    pub meeting_details: Option<MeetingDetails>,
    #[serde(default)]
    pub financials: Option<EventFinancials>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub vendor_ids: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct CategoryLabelRequest {
    pub label: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlannerRequest {
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub telephone: String,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlannerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendorRequest {
    pub name: String,
    pub telephone: String,
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVendorRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}
