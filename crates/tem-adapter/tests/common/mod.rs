/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for tem-adapter tests

use serde_json::{Value, json};
use tem_adapter::{SignedMs, TemClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> TemClient {
    TemClient::with_base_url(server.uri()).expect("client init")
}

/// Order payload in the PascalCase shape the live API returns
pub fn order_json(id: u64, status: &str) -> Value {
    json!({
        "Id": id,
        "Type": "Public",
        "Market": "Open",
        "Origin": "TOriginAddress",
        "Target": "TTargetAddress",
        "Price": 65,
        "Amount": 32000,
        "Freeze": 0,
        "Frozen": 0,
        "Resource": 0,
        "Locked": false,
        "Duration": 3600,
        "Payment": 2166667,
        "Partfill": true,
        "Extend": false,
        "Maxlock": -1,
        "Status": status,
        "Archive": false,
        "CreatedAt": "2024-05-01T12:30:00Z",
        "UpdatedAt": "2024-05-01T12:31:00Z"
    })
}

#[allow(dead_code)]
pub fn mock_signed_ms() -> SignedMs {
    SignedMs::new("te_test_1700000000", "0xmocksignature").expect("signed message")
}
