use std::sync::Arc;

use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::domain::stores::{
    booking_store::BookingStore, event_store::EventStore, expense_store::ExpenseStore,
    planner_store::PlannerStore, vendor_store::VendorStore,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub bookings: Arc<BookingStore>,
    pub events: Arc<EventStore>,
    pub expenses: Arc<ExpenseStore>,
    pub planners: Arc<PlannerStore>,
    pub vendors: Arc<VendorStore>,
    pub auth_service: Arc<AuthService>,
}
