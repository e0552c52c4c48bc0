use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{
    auth, calendar, dashboard, event, expense, health, planner, public, vendor,
};
use crate::state::AppState;
use tower_cookies::CookieManagerLayer;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Calendar bookings & hold duration
        .route("/api/v1/calendar/bookings", get(calendar::get_bookings).put(calendar::set_booking))
        .route("/api/v1/calendar/hold-duration", put(calendar::update_hold_duration))

        // Derived calendar views
        .route("/api/v1/calendar/dates", get(calendar::get_date_range))
        .route("/api/v1/calendar/dates/{date}", get(calendar::get_date))
        .route("/api/v1/calendar/stats", get(calendar::get_stats))

        // Events
        .route("/api/v1/events", get(event::list_events).post(event::create_event))
        .route("/api/v1/events/{id}", get(event::get_event).put(event::update_event).delete(event::delete_event))

        // Expenses & categories
        .route("/api/v1/expenses", get(expense::list_expenses).post(expense::create_expense))
        .route("/api/v1/expenses/summary", get(expense::get_expense_summary))
        .route("/api/v1/expenses/{id}", put(expense::update_expense).delete(expense::delete_expense))
        .route("/api/v1/expense-categories", get(expense::list_categories).post(expense::create_category))
        .route("/api/v1/expense-categories/{id}", put(expense::update_category).delete(expense::delete_category))

        // Contacts
        .route("/api/v1/planners", get(planner::list_planners).post(planner::create_planner))
        .route("/api/v1/planners/{id}", put(planner::update_planner).delete(planner::delete_planner))
        .route("/api/v1/planners/{id}/stats", get(planner::get_planner_stats))
        .route("/api/v1/vendors", get(vendor::list_vendors).post(vendor::create_vendor))
        .route("/api/v1/vendors/{id}", put(vendor::update_vendor).delete(vendor::delete_vendor))

        // Dashboard
        .route("/api/v1/dashboard/summary", get(dashboard::get_summary))
        .route("/api/v1/dashboard/pending-payments", get(dashboard::get_pending_payments))

        // Public embed
        .route("/api/v1/public/calendar", get(public::embed_calendar))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
