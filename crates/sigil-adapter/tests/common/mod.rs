/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for sigil-adapter tests

use std::sync::Arc;

use wiremock::MockServer;

use sigil_adapter::{ReqwestTransport, SigilClient};

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn test_client(server: &MockServer) -> SigilClient {
    SigilClient::with_transport(&server.uri(), Arc::new(ReqwestTransport::new().unwrap()))
        .expect("client init")
}

/// Client pointed at the mock server with a token already stored
#[allow(dead_code)]
pub async fn authenticated_client(server: &MockServer, token: &str) -> SigilClient {
    let client = test_client(server);
    client.token_store().set(token.to_string()).await;
    client
}

/// Deterministic Ed25519 signing seed for testing
#[allow(dead_code)]
pub fn test_seed() -> [u8; 32] {
    [42u8; 32]
}
