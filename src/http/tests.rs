//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> HttpClient {
    HttpClient::with_config(HttpClientConfig::default()).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("restpager/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(5))
        .header("Accept", "application/json")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("Accept"),
        Some(&"application/json".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .header("X-Request-Id", "abc123")
        .json(serde_json::json!({"key": "value"}));

    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert!(config.body.is_some());
}

#[tokio::test]
async fn test_http_client_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/monsters"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"name": "Blob"}])),
        )
        .mount(&mock_server)
        .await;

    let response = client()
        .get(&format!("{}/monsters", mock_server.uri()))
        .await
        .unwrap();
    let data: serde_json::Value = response.json().await.unwrap();

    assert_eq!(data[0]["name"], "Blob");
}

#[tokio::test]
async fn test_http_client_post_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/monsters"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"name": "Blob"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = RequestConfig::new().json(serde_json::json!({"name": "Blob"}));
    let response = client()
        .post_with_config(&format!("{}/monsters", mock_server.uri()), config)
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_http_client_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .header("Accept", "application/json")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert!(client.get(&mock_server.uri()).await.is_ok());
}

#[tokio::test]
async fn test_request_header_overrides_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("accept", "text/plain"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .header("Accept", "application/json")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let request = RequestConfig::new().header("accept", "text/plain");

    assert!(client
        .post_with_config(&mock_server.uri(), request)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_http_client_status_error_keeps_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let err = client()
        .get(&format!("{}/missing", mock_server.uri()))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not Found");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_server_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client().get(&mock_server.uri()).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client.get(&mock_server.uri()).await.unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}
