/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for cexio-adapter tests

use std::collections::HashMap;

use cexio_adapter::{CexioClient, ClientConfig, Credentials};
use wiremock::{MockServer, Request};

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Fixed credentials for testing
pub fn test_credentials() -> Credentials {
    Credentials::new("testuser", "test_api_key", "test_api_secret")
}

/// Client pointed at the mock server, `/api/` and `/api/ghash.io/` bases
#[allow(dead_code)]
pub fn mock_client(server: &MockServer, credentials: Option<Credentials>) -> CexioClient {
    let mut client = CexioClient::with_config_and_base_urls(
        ClientConfig::default(),
        &format!("{}/api/", server.uri()),
        &format!("{}/api/ghash.io/", server.uri()),
    )
    .expect("client init");
    if let Some(credentials) = credentials {
        client.set_credentials(credentials);
    }
    client
}

/// Decode a recorded urlencoded request body
#[allow(dead_code)]
pub fn form_fields(request: &Request) -> HashMap<String, String> {
    url::form_urlencoded::parse(&request.body)
        .into_owned()
        .collect()
}
