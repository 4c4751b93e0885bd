//! Client tests against a mock cost-manager server.

use cost_manager_client::{
    AddCostRequest, ClientError, CostManagerClient, CreateUserRequest, TeamMember,
};
use cost_manager_core::{Category, UserId};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, CostManagerClient) {
    let server = MockServer::start().await;
    let client = CostManagerClient::new(server.uri()).unwrap();
    (server, client)
}

#[tokio::test]
async fn add_cost_posts_item_and_decodes_record() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/add"))
        .and(body_json(json!({
            "description": "lunch",
            "category": "food",
            "userid": 123,
            "sum": 50.0,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "01J0000000000000000000000A",
            "description": "lunch",
            "category": "food",
            "userid": 123,
            "sum": 50.0,
            "date": "2025-03-15T12:00:00Z",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = client
        .add_cost(&AddCostRequest::new(UserId::new(123), Category::Food, "lunch", 50.0))
        .await
        .unwrap();

    assert_eq!(record.user_id, UserId::new(123));
    assert_eq!(record.category, Category::Food);
    assert_eq!(record.day(), 15);
}

#[tokio::test]
async fn monthly_report_sends_query_and_decodes_categories() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/report"))
        .and(query_param("id", "123"))
        .and(query_param("year", "2025"))
        .and(query_param("month", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userid": 123,
            "year": 2025,
            "month": 3,
            "costs": {
                "food": [{ "sum": 50.0, "description": "lunch", "day": 15 }],
                "education": [],
                "health": [],
                "sport": [],
                "housing": [],
            },
        })))
        .mount(&server)
        .await;

    let report = client
        .monthly_report(UserId::new(123), 2025, 3)
        .await
        .unwrap();

    assert_eq!(report.month, 3);
    assert_eq!(report.costs.get(Category::Food)[0].sum, 50.0);
    assert!(report.costs.get(Category::Housing).is_empty());
}

#[tokio::test]
async fn unknown_user_maps_to_typed_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/users/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "User does not exist",
            "code": "not_found",
        })))
        .mount(&server)
        .await;

    let err = client.get_user(UserId::new(999)).await.unwrap_err();
    assert!(matches!(err, ClientError::UserNotFound));
}

#[tokio::test]
async fn invalid_category_maps_to_typed_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/add"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Invalid category: travel",
            "code": "invalid_category",
            "details": { "category": "travel" },
        })))
        .mount(&server)
        .await;

    let err = client
        .add_cost(&AddCostRequest::new(UserId::new(1), Category::Sport, "x", 1.0))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidCategory { category } if category == "travel"));
}

#[tokio::test]
async fn duplicate_user_maps_to_conflict() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "user already exists: 7",
            "code": "conflict",
        })))
        .mount(&server)
        .await;

    let err = client
        .create_user(&CreateUserRequest {
            id: UserId::new(7),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::UserAlreadyExists(_)));
}

#[tokio::test]
async fn non_json_error_keeps_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 503, .. }));
}

#[tokio::test]
async fn about_lists_team() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/about"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "first_name": "Ada", "last_name": "Lovelace" },
        ])))
        .mount(&server)
        .await;

    let team = client.about().await.unwrap();
    assert_eq!(
        team,
        vec![TeamMember {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        }]
    );
}
