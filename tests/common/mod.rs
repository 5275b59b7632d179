//! Shared helpers for integration tests

use elorest::{Client, ClientOptions};
use wiremock::MockServer;

pub const TEST_SITE: &str = "TestSite";
pub const TEST_LOGIN: &str = "Test.User";
pub const TEST_PASSWORD: &str = "hunter2";

/// The Authorization value the transport is expected to send for the test
/// credentials: `Basic base64("site\login:password")`.
pub fn expected_basic_auth() -> String {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    format!(
        "Basic {}",
        STANDARD.encode(format!("{TEST_SITE}\\{TEST_LOGIN}:{TEST_PASSWORD}"))
    )
}

/// Client pointing at the mock server, unauthenticated.
pub fn client_for(server: &MockServer) -> Client {
    Client::with_options(ClientOptions::builder().base_url(server.uri()).build())
}

/// Client pointing at the mock server with test credentials applied.
pub fn authed_client_for(server: &MockServer) -> Client {
    let client = client_for(server);
    client
        .authenticate(TEST_SITE, TEST_LOGIN, TEST_PASSWORD)
        .expect("authenticate with non-empty credentials");
    client
}
