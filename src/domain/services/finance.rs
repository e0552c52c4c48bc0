use std::collections::HashMap;

use serde::Serialize;

use crate::domain::models::booking::{DateBooking, DateStatus};
use crate::domain::models::event::{PaymentStatus, VenueEvent};
use crate::domain::models::expense::{CategoryItem, VenueExpense};
use crate::domain::models::user::{Role, User};
use crate::domain::services::status::hold_expires_at;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: f64,
    pub received_income: f64,
    pub pending_income: f64,
    pub total_event_costs: f64,
    pub total_commissions: f64,
    /// Admin only. Omitted entirely (not zeroed) from planner views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_expenses: Option<f64>,
    pub net_profit: f64,
}

/// Applies the role visibility filter that precedes every aggregate: planners
/// only ever sum over events assigned to them.
pub fn visible_events<'a>(viewer: &User, events: &'a [VenueEvent]) -> Vec<&'a VenueEvent> {
    match viewer.role {
        Role::Admin => events.iter().collect(),
        Role::Planner => events
            .iter()
            .filter(|e| {
                viewer.planner_scope().is_some()
                    && e.financials.planner_id.as_deref() == viewer.planner_scope()
            })
            .collect(),
    }
}

/// Sums the visible event set, and the venue expenses when the caller may see
/// them. The empty set yields all zeros.
pub fn summarize(events: &[&VenueEvent], expenses: Option<&[VenueExpense]>) -> FinancialSummary {
    let mut total_income = 0.0;
    let mut received_income = 0.0;
    let mut pending_income = 0.0;
    let mut total_event_costs = 0.0;
    let mut total_commissions = 0.0;

    for event in events {
        let income = event.financials.venue_rental_fee + event.financials.income_from_extras;
        total_income += income;
        match event.financials.payment.status {
            PaymentStatus::Received => received_income += income,
            PaymentStatus::Pending => pending_income += income,
        }
        total_event_costs += event.financials.costs;
        total_commissions += event.financials.planner_commission.unwrap_or(0.0);
    }

    let total_expenses = expenses.map(|list| list.iter().map(|e| e.amount).sum::<f64>());
    let net_profit =
        total_income - (total_event_costs + total_commissions + total_expenses.unwrap_or(0.0));

    FinancialSummary {
        total_income,
        received_income,
        pending_income,
        total_event_costs,
        total_commissions,
        total_expenses,
        net_profit,
    }
}

/// Display-only helper used by the event form: derives a percentage from the
/// absolute commission. Stored events keep both fields independently; nothing
/// is ever recomputed retroactively.
pub fn commission_percentage(rental_fee: f64, commission: f64) -> Option<f64> {
    if rental_fee > 0.0 && commission > 0.0 {
        Some(commission / rental_fee * 100.0)
    } else {
        None
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub total_expenses: f64,
    pub by_category: HashMap<String, f64>,
}

/// Totals per category. Every known category id is present (zero-filled);
/// amounts under ids no longer in the category list still accumulate.
pub fn expense_summary(expenses: &[VenueExpense], categories: &[CategoryItem]) -> ExpenseSummary {
    let mut by_category: HashMap<String, f64> = categories
        .iter()
        .map(|c| (c.id.clone(), 0.0))
        .collect();
    let mut total_expenses = 0.0;
    for expense in expenses {
        total_expenses += expense.amount;
        *by_category.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    ExpenseSummary {
        total_expenses,
        by_category,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerStats {
    pub planner_id: String,
    pub total_events: usize,
    pub total_venue_rental_fees: f64,
    pub total_commissions: f64,
    pub on_hold_dates: usize,
}

/// Per-planner figures for the contacts screen: their events, the rental fees
/// those brought in, their commissions, and their currently active holds.
pub fn planner_stats(
    planner_id: &str,
    events: &[VenueEvent],
    bookings: &HashMap<String, DateBooking>,
    hold_duration_ms: i64,
    now_ms: i64,
) -> PlannerStats {
    let mut total_events = 0;
    let mut total_venue_rental_fees = 0.0;
    let mut total_commissions = 0.0;
    for event in events {
        if event.financials.planner_id.as_deref() == Some(planner_id) {
            total_events += 1;
            total_venue_rental_fees += event.financials.venue_rental_fee;
            total_commissions += event.financials.planner_commission.unwrap_or(0.0);
        }
    }
    let on_hold_dates = bookings
        .values()
        .filter(|b| {
            b.status == DateStatus::OnHold
                && b.planner_id.as_deref() == Some(planner_id)
                && now_ms <= hold_expires_at(b, hold_duration_ms)
        })
        .count();

    PlannerStats {
        planner_id: planner_id.to_string(),
        total_events,
        total_venue_rental_fees,
        total_commissions,
        on_hold_dates,
    }
}

/// Events awaiting payment, soonest first, over the visible set.
pub fn pending_payments(events: &[&VenueEvent]) -> Vec<VenueEvent> {
    let mut pending: Vec<VenueEvent> = events
        .iter()
        .filter(|e| e.financials.payment.status == PaymentStatus::Pending)
        .map(|e| (*e).clone())
        .collect();
    pending.sort_by(|a, b| a.date.cmp(&b.date));
    pending
}
