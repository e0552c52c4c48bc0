use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Wedding,
    Baptism,
    KidsParty,
    CorporateDinner,
    Meetings,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeddingCategory {
    Reception,
    CeremonyReception,
    PrepReception,
    PrepCeremonyReception,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTimeline {
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetails {
    pub meeting_time: String,
}

/// Kind-specific event payload. Each variant carries only the fields that are
/// valid for that event type: meetings have a meeting time and no timeline,
/// weddings may carry a category, everything else at most a timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "eventType", rename_all = "kebab-case")]
pub enum EventKind {
    Wedding {
        #[serde(rename = "weddingCategory", default, skip_serializing_if = "Option::is_none")]
        wedding_category: Option<WeddingCategory>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeline: Option<EventTimeline>,
    },
    Baptism {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeline: Option<EventTimeline>,
    },
    KidsParty {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeline: Option<EventTimeline>,
    },
    CorporateDinner {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeline: Option<EventTimeline>,
    },
    Meetings {
        #[serde(rename = "meetingDetails")]
        meeting_details: MeetingDetails,
    },
    Other {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeline: Option<EventTimeline>,
    },
}

impl EventKind {
    /// Builds a kind from the flat optional fields used on the wire,
    /// rejecting combinations that are invalid for the event type.
    pub fn assemble(
        event_type: EventType,
        wedding_category: Option<WeddingCategory>,
        timeline: Option<EventTimeline>,
        meeting_details: Option<MeetingDetails>,
    ) -> Result<Self, String> {
        if meeting_details.is_some() && event_type != EventType::Meetings {
            return Err("meetingDetails only apply to meetings".to_string());
        }
        if wedding_category.is_some() && event_type != EventType::Wedding {
            return Err("weddingCategory only applies to weddings".to_string());
        }
        match event_type {
            EventType::Wedding => Ok(EventKind::Wedding { wedding_category, timeline }),
            EventType::Baptism => Ok(EventKind::Baptism { timeline }),
            EventType::KidsParty => Ok(EventKind::KidsParty { timeline }),
            EventType::CorporateDinner => Ok(EventKind::CorporateDinner { timeline }),
            EventType::Meetings => {
                if timeline.is_some() {
                    return Err("meetings do not carry a timeline".to_string());
                }
                let meeting_details =
                    meeting_details.ok_or_else(|| "meetings require meetingDetails".to_string())?;
                Ok(EventKind::Meetings { meeting_details })
            }
            EventType::Other => Ok(EventKind::Other { timeline }),
        }
    }

    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Wedding { .. } => EventType::Wedding,
            EventKind::Baptism { .. } => EventType::Baptism,
            EventKind::KidsParty { .. } => EventType::KidsParty,
            EventKind::CorporateDinner { .. } => EventType::CorporateDinner,
            EventKind::Meetings { .. } => EventType::Meetings,
            EventKind::Other { .. } => EventType::Other,
        }
    }

    pub fn timeline(&self) -> Option<&EventTimeline> {
        match self {
            EventKind::Wedding { timeline, .. }
            | EventKind::Baptism { timeline }
            | EventKind::KidsParty { timeline }
            | EventKind::CorporateDinner { timeline }
            | EventKind::Other { timeline } => timeline.as_ref(),
            EventKind::Meetings { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Received,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionPaymentStatus {
    Pending,
    Paid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Bank,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_received: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionPaymentInfo {
    pub status: CommissionPaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_paid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFinancials {
    pub venue_rental_fee: f64,
    pub income_from_extras: f64,
    pub costs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner_commission: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner_commission_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner_id: Option<String>,
    pub payment: PaymentInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_payment: Option<CommissionPaymentInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueEvent {
    pub id: String,
    pub name: String,
    pub date: String,
    #[serde(flatten)]
    pub kind: EventKind,
    pub financials: EventFinancials,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_ids: Option<Vec<String>>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl VenueEvent {
    /// Event ids embed the date and the creation instant.
    pub fn make_id(date: &str, created_at: i64) -> String {
        format!("{}-{}", date, created_at)
    }
}
