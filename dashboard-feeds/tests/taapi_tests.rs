//! Integration tests for the TAAPI client against a mock server

mod common;

use common::{setup_mock_server, TEST_API_KEY};
use dashboard_core::DashboardError;
use dashboard_feeds::TaapiClient;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_rsi_sends_fixed_pair_and_interval() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/rsi"))
        .and(query_param("secret", TEST_API_KEY))
        .and(query_param("exchange", "binance"))
        .and(query_param("symbol", "BTC/USDT"))
        .and(query_param("interval", "5m"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 55.3,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TaapiClient::with_base_url(TEST_API_KEY, server.uri());
    let rsi = assert_ok!(client.rsi("BTC").await);
    assert_eq!(rsi, Some(55.3));
}

#[tokio::test]
async fn test_rsi_symbol_is_not_normalized() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/rsi"))
        .and(query_param("symbol", "eth/USDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 12.0,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TaapiClient::with_base_url(TEST_API_KEY, server.uri());
    assert_eq!(assert_ok!(client.rsi("eth").await), Some(12.0));
}

#[tokio::test]
async fn test_rsi_missing_value_is_none() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/rsi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = TaapiClient::with_base_url(TEST_API_KEY, server.uri());
    assert_eq!(assert_ok!(client.rsi("BTC").await), None);
}

#[tokio::test]
async fn test_rsi_non_success_status_is_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/rsi"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid secret"))
        .mount(&server)
        .await;

    let client = TaapiClient::with_base_url(TEST_API_KEY, server.uri());
    let err = client.rsi("BTC").await.unwrap_err();
    assert_eq!(err, DashboardError::api(401, "invalid secret"));
}

#[tokio::test]
async fn test_rsi_malformed_body_is_parse_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/rsi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = TaapiClient::with_base_url(TEST_API_KEY, server.uri());
    let err = client.rsi("BTC").await.unwrap_err();
    assert!(matches!(err, DashboardError::Parse(_)));
}

#[tokio::test]
async fn test_rsi_unreachable_host_is_network_error() {
    // Grab a free port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TaapiClient::with_base_url(TEST_API_KEY, format!("http://{}", addr));
    let err = client.rsi("BTC").await.unwrap_err();
    assert!(matches!(err, DashboardError::Network(_)));
    assert!(!err.to_string().contains(TEST_API_KEY));
    assert!(!format!("{:?}", err).contains(TEST_API_KEY));
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = TaapiClient::with_base_url(TEST_API_KEY, "http://localhost:9000/");
    assert_eq!(client.base_url(), "http://localhost:9000");
}
