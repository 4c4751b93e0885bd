//! Cost ingestion integration tests.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Datelike, Utc};
use common::TestHarness;
use serde_json::{json, Value};

use cost_manager_core::{CategoryBreakdown, MonthPeriod, UserId};
use cost_manager_store::Store;

#[tokio::test]
async fn add_cost_returns_created_record() {
    let harness = TestHarness::new();
    harness.seed_user(123);

    let response = harness.add_cost(TestHarness::lunch(123, 50.0)).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["description"], "lunch");
    assert_eq!(body["category"], "food");
    assert_eq!(body["userid"], 123);
    assert_eq!(body["sum"], 50.0);
    assert!(body["id"].as_str().is_some_and(|id| id.len() == 26));
    assert!(body["date"].as_str().is_some());
}

#[tokio::test]
async fn add_cost_updates_user_total() {
    let harness = TestHarness::new();
    harness.seed_user(1);

    harness.add_cost(TestHarness::lunch(1, 20.0)).await;
    harness.add_cost(TestHarness::lunch(1, 2.5)).await;

    let response = harness.server.get("/api/users/1").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total"], 22.5);
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let harness = TestHarness::new();
    harness.seed_user(1);

    for field in ["description", "category", "userid", "sum"] {
        let mut body = TestHarness::lunch(1, 10.0);
        body.as_object_mut().unwrap().remove(field);

        let response = harness.add_cost(body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error: Value = response.json();
        assert_eq!(error["code"], "bad_request", "missing {field}");
    }
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/add")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_category_is_echoed() {
    let harness = TestHarness::new();
    harness.seed_user(1);

    let response = harness
        .add_cost(json!({
            "description": "flight",
            "category": "travel",
            "userid": 1,
            "sum": 300,
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "invalid_category");
    assert_eq!(body["details"]["category"], "travel");
    assert!(body["error"].as_str().unwrap().contains("travel"));
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let harness = TestHarness::new();

    let response = harness.add_cost(TestHarness::lunch(999, 5.0)).await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "User does not exist");
    assert!(harness.store.get_user(UserId::new(999)).unwrap().is_none());
}

#[tokio::test]
async fn date_outside_window_is_rejected() {
    let harness = TestHarness::new();
    harness.seed_user(1);

    for date in ["2000-01-01", "2999-12-31T00:00:00Z"] {
        let mut body = TestHarness::lunch(1, 10.0);
        body["date"] = json!(date);

        let response = harness.add_cost(body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error: Value = response.json();
        assert_eq!(error["code"], "date_out_of_range", "{date}");
        assert_eq!(error["error"], "date outside allowable range");
    }
}

#[tokio::test]
async fn explicit_date_in_current_month_is_kept() {
    let harness = TestHarness::new();
    harness.seed_user(1);
    let period = MonthPeriod::containing(Utc::now()).unwrap();
    let first_day = period.start().format("%Y-%m-%d").to_string();

    let mut body = TestHarness::lunch(1, 10.0);
    body["date"] = json!(first_day);
    let response = harness.add_cost(body).await;

    response.assert_status(StatusCode::CREATED);
    let record: Value = response.json();
    let date: DateTime<Utc> = record["date"].as_str().unwrap().parse().unwrap();
    assert_eq!(date, period.start());
    assert_eq!(date.day(), 1);
}

#[tokio::test]
async fn non_positive_sum_is_rejected() {
    let harness = TestHarness::new();
    harness.seed_user(1);

    for sum in [0.0, -4.0] {
        let response = harness.add_cost(TestHarness::lunch(1, sum)).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn frozen_snapshot_is_not_extended_by_ingestion() {
    let harness = TestHarness::new();
    let user = harness.seed_user(8);
    let date = Utc::now();
    let period = MonthPeriod::containing(date).unwrap();
    harness
        .store
        .freeze_month(user, &period, &CategoryBreakdown::empty())
        .unwrap();
    let snapshot = harness.store.get_report_entry(user).unwrap();

    let mut body = TestHarness::lunch(8, 12.0);
    body["date"] = json!(date.to_rfc3339());
    harness
        .add_cost(body)
        .await
        .assert_status(StatusCode::CREATED);

    assert_eq!(harness.store.get_report_entry(user).unwrap(), snapshot);
    assert_eq!(harness.store.get_user(user).unwrap().unwrap().total, 12.0);
}
