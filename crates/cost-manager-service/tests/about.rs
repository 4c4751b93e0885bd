//! About endpoint integration tests.

mod common;

use common::TestHarness;
use serde_json::json;

#[tokio::test]
async fn lists_configured_team() {
    let harness = TestHarness::new();

    let response = harness.server.get("/api/about").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        { "first_name": "Ada", "last_name": "Lovelace" },
        { "first_name": "Grace", "last_name": "Hopper" },
    ]));
}
