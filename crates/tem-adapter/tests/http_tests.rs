/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use std::collections::HashSet;

use common::{client_for, mock_signed_ms, order_json, setup_mock_server};
use serde_json::json;
use tem_adapter::{
    ClientConfig, MarketType, NewOrder, OrderStatus, Resource, TemClient, TemError, sun_to_trx,
};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(TemClient::new());
    assert_eq!(client.base_url().as_str(), "https://api.tronenergy.market/");
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        base_url: "http://localhost:8080/tem".to_string(),
        timeout: Some(std::time::Duration::from_secs(5)),
        connect_timeout: None,
    };
    let client = assert_ok!(TemClient::with_config(config));
    assert_eq!(client.base_url().as_str(), "http://localhost:8080/tem/");
}

#[test]
fn test_error_kinds() {
    let api = TemError::Api {
        code: 502,
        message: "bad gateway".to_string(),
    };
    assert!(api.is_transport());
    assert!(!api.is_schema());

    let validation = TemError::Validation("Invalid signature".to_string());
    assert!(validation.is_schema());
    assert!(!validation.is_transport());
}

#[tokio::test]
async fn test_status_then_balance() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/credit"))
        .and(query_param("address", "TAccount"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": "1500000" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.check_status().await);

    let balance = assert_ok!(client.get_balance("TAccount").await);
    assert_eq!(balance, 1_500_000);
    assert_eq!(sun_to_trx(balance).to_string(), "1.5");
}

#[tokio::test]
async fn test_client_base_path_prefix() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/order/info"))
        .and(query_param("id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json(5, "Completed")))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(TemClient::with_base_url(format!("{}/v1", server.uri())));
    let order = assert_ok!(client.get_order(5).await);
    assert_eq!(order.status, OrderStatus::Completed);
}

#[tokio::test]
async fn test_get_all_orders_three_pages() {
    let server = setup_mock_server().await;
    for (skip, ids) in [(0u64, 0..1000u64), (1000, 1000..2000), (2000, 2000..2400)] {
        let orders: Vec<_> = ids.map(|id| order_json(id, "Pending")).collect();
        Mock::given(method("GET"))
            .and(path("/order/list"))
            .and(query_param("skip", skip.to_string()))
            .and(query_param("limit", "1000"))
            .and(query_param("status", "Pending"))
            .and(query_param("address", "TAccount"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "items": orders, "total": 2400 })),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let orders = assert_ok!(
        client
            .get_all_orders(Some(OrderStatus::Pending), Some("TAccount"))
            .await
    );

    assert_eq!(orders.len(), 2400);
    let ids: HashSet<u64> = orders.iter().map(|order| order.id).collect();
    assert_eq!(ids.len(), 2400);
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_get_all_orders_empty_first_page() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/order/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orders": [], "total": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let orders = assert_ok!(client.get_all_orders(None, None).await);
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_get_all_orders_propagates_page_failure() {
    let server = setup_mock_server().await;
    let first: Vec<_> = (0..1000).map(|id| order_json(id, "Pending")).collect();
    Mock::given(method("GET"))
        .and(path("/order/list"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "list": first, "total": 2000 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/order/list"))
        .and(query_param("skip", "1000"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = assert_err!(client.get_all_orders(None, None).await);
    assert!(matches!(err, TemError::Api { code: 502, .. }));
}

#[tokio::test]
async fn test_create_bulk_order_with_signatures() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/order/new"))
        .and(body_json(json!({
            "market": "Fast",
            "address": "TBuyer",
            "target": ["TOne", "TTwo"],
            "payment": 1000,
            "resource": 1,
            "duration": 0,
            "price": 10,
            "partfill": false,
            "bulk": true,
            "signed_tx": "0xpayment",
            "signed_ms": { "message": "te_test_1700000000", "signature": "0xmocksignature" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "OrderId": 99 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let order = NewOrder::new(
        MarketType::Fast,
        "TBuyer",
        vec!["TOne", "TTwo"],
        Resource::Bandwidth,
        100,
        0,
        10,
    )
    .with_partfill(false)
    .with_signatures("0xpayment", mock_signed_ms());

    let id = assert_ok!(client.create_order(order).await);
    assert_eq!(id, 99);
}

#[tokio::test]
async fn test_create_order_lone_signature_is_rejected() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/order/new"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut order = NewOrder::new(
        MarketType::Open,
        "TBuyer",
        "TReceiver",
        Resource::Energy,
        32_000,
        86_400,
        65,
    );
    order.signed_tx = Some("0xpayment".to_string());

    let err = assert_err!(client.create_order(order).await);
    assert!(err.is_schema());
}

#[tokio::test]
async fn test_malformed_body_is_schema_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = assert_err!(client.get_market_info().await);
    assert!(err.is_schema());
    assert!(matches!(err, TemError::Serialization(_)));
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/credit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Value": 7 })))
        .expect(8)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let calls = (0..8).map(|i| {
        let client = client.clone();
        tokio::spawn(async move { client.get_balance(&format!("TAccount{i}")).await })
    });

    for handle in calls.collect::<Vec<_>>() {
        let balance = assert_ok!(assert_ok!(handle.await));
        assert_eq!(balance, 7);
    }
}
