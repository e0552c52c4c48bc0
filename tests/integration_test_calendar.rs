mod common;

use axum::http::{Method, StatusCode};
use chrono::Utc;
use common::{parse_body, TestApp};
use serde_json::json;
use venue_backend::domain::models::booking::DateStatus;
use venue_backend::domain::services::status::DAY_MS;

#[tokio::test]
async fn set_and_fetch_booking() {
    let app = TestApp::new().await;
    let auth = app.login_admin().await;

    let res = app
        .request(
            Method::PUT,
            "/api/v1/calendar/bookings",
            Some(&auth),
            Some(json!({ "date": "2025-03-10", "status": "on-hold", "note": "Maria & Kostas" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["booking"]["status"], "on-hold");

    let res = app
        .request(Method::GET, "/api/v1/calendar/bookings", Some(&auth), None)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["bookings"]["2025-03-10"]["note"], "Maria & Kostas");
    assert_eq!(body["holdDuration"], 7 * DAY_MS);
}

#[tokio::test]
async fn setting_available_twice_is_idempotent() {
    let app = TestApp::new().await;
    let auth = app.login_admin().await;

    app.request(
        Method::PUT,
        "/api/v1/calendar/bookings",
        Some(&auth),
        Some(json!({ "date": "2025-03-10", "status": "booked" })),
    )
    .await;

    for _ in 0..2 {
        let res = app
            .request(
                Method::PUT,
                "/api/v1/calendar/bookings",
                Some(&auth),
                Some(json!({ "date": "2025-03-10", "status": "available" })),
            )
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = parse_body(res).await;
        assert_eq!(body["success"], true);
        assert!(body.get("booking").is_none());
    }

    assert!(app.state.bookings.get("2025-03-10").is_none());
}

#[tokio::test]
async fn invalid_date_is_rejected() {
    let app = TestApp::new().await;
    let auth = app.login_admin().await;

    let res = app
        .request(
            Method::PUT,
            "/api/v1/calendar/bookings",
            Some(&auth),
            Some(json!({ "date": "10/03/2025", "status": "booked" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn hold_duration_is_bounded() {
    let app = TestApp::new().await;
    let auth = app.login_admin().await;

    for days in [0, 91, -3] {
        let res = app
            .request(
                Method::PUT,
                "/api/v1/calendar/hold-duration",
                Some(&auth),
                Some(json!({ "days": days })),
            )
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "days = {}", days);
    }

    let res = app
        .request(
            Method::PUT,
            "/api/v1/calendar/hold-duration",
            Some(&auth),
            Some(json!({ "days": 14 })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["holdDuration"], 14 * DAY_MS);
}

#[tokio::test]
async fn expired_hold_reads_available_before_any_sweep() {
    let app = TestApp::new().await;
    let auth = app.login_admin().await;

    let now = Utc::now().timestamp_millis();
    // A three-day hold placed just over three days ago.
    app.state.bookings.set_status(
        "2025-03-10",
        DateStatus::OnHold,
        None,
        None,
        Some(3),
        now - 3 * DAY_MS - 1,
    );

    let res = app
        .request(Method::GET, "/api/v1/calendar/dates/2025-03-10", Some(&auth), None)
        .await;
    let body = parse_body(res).await;
    assert_eq!(body["status"], "available");
    assert!(body.get("remainingDays").is_none());

    // The stored record is still there until a sweep prunes it.
    assert!(app.state.bookings.get("2025-03-10").is_some());
    let removed = app.state.bookings.sweep_expired(now);
    assert_eq!(removed, 1);
    assert!(app.state.bookings.get("2025-03-10").is_none());
}

#[tokio::test]
async fn active_hold_shows_remaining_days() {
    let app = TestApp::new().await;
    let auth = app.login_admin().await;

    let now = Utc::now().timestamp_millis();
    app.state.bookings.set_status(
        "2025-03-10",
        DateStatus::OnHold,
        None,
        None,
        Some(3),
        now - 2 * DAY_MS,
    );

    let res = app
        .request(Method::GET, "/api/v1/calendar/dates/2025-03-10", Some(&auth), None)
        .await;
    let body = parse_body(res).await;
    assert_eq!(body["status"], "on-hold");
    assert_eq!(body["remainingDays"], 1);
}

#[tokio::test]
async fn zero_custom_hold_is_immediately_available() {
    let app = TestApp::new().await;
    let auth = app.login_admin().await;

    app.request(
        Method::PUT,
        "/api/v1/calendar/bookings",
        Some(&auth),
        Some(json!({ "date": "2025-03-10", "status": "on-hold", "customHoldDays": 0 })),
    )
    .await;

    let res = app
        .request(Method::GET, "/api/v1/calendar/dates/2025-03-10", Some(&auth), None)
        .await;
    let body = parse_body(res).await;
    assert_eq!(body["status"], "available");

    // And the active set served to the calendar excludes it.
    let res = app
        .request(Method::GET, "/api/v1/calendar/bookings", Some(&auth), None)
        .await;
    let body = parse_body(res).await;
    assert!(body["bookings"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn sweep_keeps_active_holds_and_booked_dates() {
    let app = TestApp::new().await;

    let now = Utc::now().timestamp_millis();
    app.state
        .bookings
        .set_status("2025-04-01", DateStatus::Booked, None, None, None, now - 400 * DAY_MS);
    app.state
        .bookings
        .set_status("2025-04-02", DateStatus::OnHold, None, None, None, now);
    app.state
        .bookings
        .set_status("2025-04-03", DateStatus::OnHold, None, None, Some(1), now - 2 * DAY_MS);

    let removed = app.state.bookings.sweep_expired(now);
    assert_eq!(removed, 1);
    assert!(app.state.bookings.get("2025-04-01").is_some());
    assert!(app.state.bookings.get("2025-04-02").is_some());
    assert!(app.state.bookings.get("2025-04-03").is_none());
}

#[tokio::test]
async fn date_range_derives_each_day() {
    let app = TestApp::new().await;
    let auth = app.login_admin().await;

    app.request(
        Method::PUT,
        "/api/v1/calendar/bookings",
        Some(&auth),
        Some(json!({ "date": "2025-06-02", "status": "on-hold" })),
    )
    .await;
    app.request(
        Method::PUT,
        "/api/v1/calendar/bookings",
        Some(&auth),
        Some(json!({ "date": "2025-06-03", "status": "booked" })),
    )
    .await;

    let res = app
        .request(
            Method::GET,
            "/api/v1/calendar/dates?from=2025-06-01&to=2025-06-03",
            Some(&auth),
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let days = body.as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[0]["status"], "available");
    assert_eq!(days[1]["status"], "on-hold");
    assert_eq!(days[1]["remainingDays"], 7);
    assert_eq!(days[2]["status"], "booked");

    let res = app
        .request(
            Method::GET,
            "/api/v1/calendar/dates?from=2025-06-03&to=2025-06-01",
            Some(&auth),
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stats_count_effective_statuses() {
    let app = TestApp::new().await;
    let auth = app.login_admin().await;

    let now = Utc::now().timestamp_millis();
    app.state
        .bookings
        .set_status("2025-07-01", DateStatus::Booked, None, None, None, now);
    app.state
        .bookings
        .set_status("2025-07-02", DateStatus::OnHold, None, None, None, now);
    // Lapsed hold: not counted anywhere.
    app.state
        .bookings
        .set_status("2025-07-03", DateStatus::OnHold, None, None, Some(1), now - 2 * DAY_MS);

    let res = app
        .request(Method::GET, "/api/v1/calendar/stats", Some(&auth), None)
        .await;
    let body = parse_body(res).await;
    assert_eq!(body["bookedCount"], 1);
    assert_eq!(body["onHoldCount"], 1);
    assert_eq!(body["total"], 2);
}
