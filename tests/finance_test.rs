use std::collections::HashMap;

use venue_backend::domain::models::booking::{DateBooking, DateStatus};
use venue_backend::domain::models::event::{
    EventFinancials, EventKind, PaymentInfo, PaymentStatus, VenueEvent,
};
use venue_backend::domain::models::expense::{default_categories, VenueExpense};
use venue_backend::domain::models::user::{Role, User};
use venue_backend::domain::services::finance::{
    commission_percentage, expense_summary, planner_stats, summarize, visible_events,
};
use venue_backend::domain::services::status::DAY_MS;

fn event(
    date: &str,
    rental: f64,
    extras: f64,
    costs: f64,
    commission: Option<f64>,
    planner_id: Option<&str>,
    payment: PaymentStatus,
) -> VenueEvent {
    VenueEvent {
        id: format!("{}-1", date),
        name: "Event".to_string(),
        date: date.to_string(),
        kind: EventKind::Other { timeline: None },
        financials: EventFinancials {
            venue_rental_fee: rental,
            income_from_extras: extras,
            costs,
            planner_commission: commission,
            planner_commission_percentage: None,
            planner_id: planner_id.map(str::to_string),
            payment: PaymentInfo {
                status: payment,
                date_received: None,
                method: None,
            },
            commission_payment: None,
        },
        notes: None,
        vendor_ids: None,
        created_at: 0,
        updated_at: 0,
    }
}

fn expense(date: &str, category: &str, amount: f64) -> VenueExpense {
    VenueExpense {
        id: format!("exp-{}-{}", date, category),
        date: date.to_string(),
        category: category.to_string(),
        amount,
        description: String::new(),
        created_at: 0,
        updated_at: 0,
    }
}

fn admin() -> User {
    User {
        id: "admin-1".to_string(),
        role: Role::Admin,
        planner_id: None,
    }
}

fn planner(id: &str) -> User {
    User {
        id: format!("planner-{}", id),
        role: Role::Planner,
        planner_id: Some(id.to_string()),
    }
}

#[test]
fn empty_set_sums_to_zero() {
    let summary = summarize(&[], Some(&[]));
    assert_eq!(summary.total_income, 0.0);
    assert_eq!(summary.received_income, 0.0);
    assert_eq!(summary.pending_income, 0.0);
    assert_eq!(summary.total_event_costs, 0.0);
    assert_eq!(summary.total_commissions, 0.0);
    assert_eq!(summary.total_expenses, Some(0.0));
    assert_eq!(summary.net_profit, 0.0);
}

#[test]
fn net_profit_subtracts_costs_commissions_and_expenses() {
    let events = vec![
        event("2025-01-10", 1000.0, 200.0, 150.0, Some(100.0), None, PaymentStatus::Received),
        event("2025-02-11", 2000.0, 0.0, 300.0, None, None, PaymentStatus::Pending),
    ];
    let refs: Vec<&VenueEvent> = events.iter().collect();
    let expenses = vec![expense("2025-01-05", "water", 50.0), expense("2025-01-06", "gas", 25.0)];

    let summary = summarize(&refs, Some(&expenses));
    assert_eq!(summary.total_income, 3200.0);
    assert_eq!(summary.received_income, 1200.0);
    assert_eq!(summary.pending_income, 2000.0);
    assert_eq!(summary.total_event_costs, 450.0);
    assert_eq!(summary.total_commissions, 100.0);
    assert_eq!(summary.total_expenses, Some(75.0));
    assert_eq!(summary.net_profit, 3200.0 - 450.0 - 100.0 - 75.0);
}

#[test]
fn planner_summary_excludes_expenses_entirely() {
    let events = vec![event(
        "2025-01-10",
        1000.0,
        0.0,
        100.0,
        Some(50.0),
        Some("p1"),
        PaymentStatus::Pending,
    )];
    let refs: Vec<&VenueEvent> = events.iter().collect();

    let summary = summarize(&refs, None);
    assert_eq!(summary.total_expenses, None);
    assert_eq!(summary.net_profit, 1000.0 - 100.0 - 50.0);

    // The serialized planner view must omit the field, not carry null or 0.
    let json = serde_json::to_value(&summary).unwrap();
    assert!(json.get("totalExpenses").is_none());
}

#[test]
fn visibility_filter_scopes_planners_to_their_own_events() {
    let events = vec![
        event("2025-01-10", 100.0, 0.0, 0.0, None, Some("p1"), PaymentStatus::Pending),
        event("2025-01-11", 200.0, 0.0, 0.0, None, Some("p2"), PaymentStatus::Pending),
        event("2025-01-12", 300.0, 0.0, 0.0, None, None, PaymentStatus::Pending),
    ];

    let admin_view = visible_events(&admin(), &events);
    assert_eq!(admin_view.len(), 3);

    let planner_view = visible_events(&planner("p1"), &events);
    assert_eq!(planner_view.len(), 1);
    assert!(planner_view
        .iter()
        .all(|e| e.financials.planner_id.as_deref() == Some("p1")));

    // A planner session without a scope sees nothing rather than everything.
    let unscoped = User {
        id: "planner-x".to_string(),
        role: Role::Planner,
        planner_id: None,
    };
    assert!(visible_events(&unscoped, &events).is_empty());
}

#[test]
fn commission_percentage_needs_both_amounts() {
    assert_eq!(commission_percentage(1000.0, 250.0), Some(25.0));
    assert_eq!(commission_percentage(0.0, 100.0), None);
    assert_eq!(commission_percentage(1000.0, 0.0), None);
    assert_eq!(commission_percentage(-5.0, 100.0), None);
}

#[test]
fn expense_summary_zero_fills_known_categories() {
    let categories = default_categories();
    let expenses = vec![
        expense("2025-01-01", "water", 40.0),
        expense("2025-01-02", "water", 10.0),
        expense("2025-01-03", "long-gone-category", 5.0),
    ];

    let summary = expense_summary(&expenses, &categories);
    assert_eq!(summary.total_expenses, 55.0);
    assert_eq!(summary.by_category["water"], 50.0);
    assert_eq!(summary.by_category["electricity"], 0.0);
    // Amounts under removed categories still count.
    assert_eq!(summary.by_category["long-gone-category"], 5.0);
}

#[test]
fn planner_stats_count_events_and_active_holds() {
    let t = 1_700_000_000_000;
    let events = vec![
        event("2025-01-10", 1000.0, 0.0, 0.0, Some(100.0), Some("p1"), PaymentStatus::Pending),
        event("2025-01-11", 500.0, 0.0, 0.0, None, Some("p1"), PaymentStatus::Received),
        event("2025-01-12", 900.0, 0.0, 0.0, Some(90.0), Some("p2"), PaymentStatus::Pending),
    ];

    let mut bookings: HashMap<String, DateBooking> = HashMap::new();
    for (date, set_at, planner_id) in [
        ("2025-02-01", t, Some("p1")),
        ("2025-02-02", t - 30 * DAY_MS, Some("p1")), // long lapsed
        ("2025-02-03", t, Some("p2")),
    ] {
        bookings.insert(
            date.to_string(),
            DateBooking {
                date: date.to_string(),
                status: DateStatus::OnHold,
                set_at,
                note: None,
                planner_id: planner_id.map(str::to_string),
                custom_hold_days: None,
            },
        );
    }

    let stats = planner_stats("p1", &events, &bookings, 7 * DAY_MS, t + DAY_MS);
    assert_eq!(stats.total_events, 2);
    assert_eq!(stats.total_venue_rental_fees, 1500.0);
    assert_eq!(stats.total_commissions, 100.0);
    assert_eq!(stats.on_hold_dates, 1);
}
