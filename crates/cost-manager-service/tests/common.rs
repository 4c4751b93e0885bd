//! Common test utilities for cost-manager integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use cost_manager_core::{User, UserId};
use cost_manager_service::{create_router, AppState, ServiceConfig, TeamMember};
use cost_manager_store::{RocksStore, Store};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Direct handle on the store backing the server.
    pub store: Arc<RocksStore>,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a fresh database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = Arc::new(RocksStore::open(temp_dir.path()).expect("Failed to open store"));

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            data_dir: temp_dir.path().to_string_lossy().to_string(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 16 * 1024,
            request_timeout_seconds: 30,
            team: vec![
                TeamMember::new("Ada", "Lovelace"),
                TeamMember::new("Grace", "Hopper"),
            ],
        };

        let state = AppState::new(Arc::clone(&store), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            store,
            _temp_dir: temp_dir,
        }
    }

    /// Register a user directly in the store.
    pub fn seed_user(&self, id: i64) -> UserId {
        let user_id = UserId::new(id);
        self.store
            .create_user(&User::new(user_id, "Test", "User"))
            .expect("Failed to seed user");
        user_id
    }

    /// Post a cost item and return the response body.
    pub async fn add_cost(&self, body: Value) -> axum_test::TestResponse {
        self.server.post("/api/add").json(&body).await
    }

    /// A minimal valid cost item for `userid`.
    pub fn lunch(userid: i64, sum: f64) -> Value {
        json!({
            "description": "lunch",
            "category": "food",
            "userid": userid,
            "sum": sum,
        })
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
