//! Shared test utilities for dashboard-feeds tests

use wiremock::MockServer;

/// Key used by every TAAPI test
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}
