//! Common test utilities for API testing with a mock source.
//!
//! This module provides a test fixture that creates an in-process router
//! backed by a `MockTicketSource`, so the board API can be exercised
//! without a remote endpoint.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ticketboard_core::{load_config_from_str, testing::MockTicketSource, Config, TicketFeed};

/// Re-export fixtures for test convenience
pub use ticketboard_core::testing::fixtures;

const TEST_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 8080

[source]
kind = "http"
url = "http://tickets.test/v1/assignment?token=secret"
"#;

/// Test fixture with a controllable ticket source.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_board() {
///     let fixture = TestFixture::new().await;
///     let response = fixture.get("/api/v1/board?group_by=status").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock source - configure payloads and failures
    pub source: Arc<MockTicketSource>,
    /// Feed shared with the router
    pub feed: Arc<TicketFeed>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Fixture loaded with the sample payload.
    pub async fn new() -> Self {
        let fixture = Self::unloaded();
        fixture
            .feed
            .refresh()
            .await
            .expect("Initial refresh failed");
        fixture
    }

    /// Fixture whose feed has not been refreshed yet.
    pub fn unloaded() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: Config) -> Self {
        let source = Arc::new(MockTicketSource::with_payload(fixtures::sample_payload()));
        let feed = Arc::new(TicketFeed::new(
            Arc::clone(&source) as Arc<dyn ticketboard_core::TicketSource>
        ));
        let state = Arc::new(ticketboard_server::state::AppState::new(
            config,
            Arc::clone(&feed),
        ));
        let router = ticketboard_server::api::create_router(state);

        Self {
            router,
            source,
            feed,
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path).await
    }

    pub async fn post(&self, path: &str) -> TestResponse {
        self.request("POST", path).await
    }

    async fn request(&self, method: &str, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}

pub fn test_config() -> Config {
    load_config_from_str(TEST_CONFIG).expect("Invalid test config")
}

/// Ticket ids of a column, in order.
pub fn column_ids(column: &Value) -> Vec<String> {
    column["tickets"]
        .as_array()
        .expect("column without tickets")
        .iter()
        .map(|t| t["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Column keys of a board response, `None` for the ungrouped column.
pub fn column_keys(body: &Value) -> Vec<Option<String>> {
    body["columns"]
        .as_array()
        .expect("board without columns")
        .iter()
        .map(|c| c["key"].as_str().map(String::from))
        .collect()
}
