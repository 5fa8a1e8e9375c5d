//! Tests for the HTTP transport module

use super::*;
use crate::error::Error;
use serde_json::Value;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn no_query() -> Vec<(String, String)> {
    Vec::new()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("pulsewatch-rs/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.pulsewatch.example")
        .timeout(Duration::from_secs(60))
        .api_key("secret123")
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.base_url,
        Some("https://api.pulsewatch.example".to_string())
    );
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Api-Key"),
        Some(&"secret123".to_string())
    );
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_get_decodes_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config);
    let response: ApiResponse<Value> = client.get("/status.json", &no_query()).await.unwrap();

    assert_eq!(response.body["value"], 42);
}

#[tokio::test]
async fn test_get_returns_response_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", "<https://api.example.com/items?page=2>; rel=\"next\"")
                .set_body_json(serde_json::json!({"items": []})),
        )
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config);
    let response: ApiResponse<Value> = client.get("/items.json", &no_query()).await.unwrap();

    let link = response.headers.get("link").unwrap().to_str().unwrap();
    assert!(link.contains("rel=\"next\""));
}

#[tokio::test]
async fn test_get_sends_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("filter[name]", "checkout"))
        .and(query_param("filter[ids]", "1,2,3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config);
    let query = vec![
        ("filter[name]".to_string(), "checkout".to_string()),
        ("filter[ids]".to_string(), "1,2,3".to_string()),
    ];
    let response: ApiResponse<Value> = client.get("/search.json", &query).await.unwrap();

    assert!(response.body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_sends_api_key_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secure.json"))
        .and(header("X-Api-Key", "secret123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .api_key("secret123")
        .build();

    let client = HttpClient::with_config(config);
    let result: crate::Result<ApiResponse<Value>> = client.get("/secure.json", &no_query()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_get_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing.json"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config);
    let result: crate::Result<ApiResponse<Value>> = client.get("/missing.json", &no_query()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_decode_error_on_shape_mismatch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/odd.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config);
    let result: crate::Result<ApiResponse<Value>> = client.get("/odd.json", &no_query()).await;

    assert!(matches!(result.unwrap_err(), Error::Decode { .. }));
}

#[tokio::test]
async fn test_get_absolute_url_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/absolute.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    // Base URL points somewhere that would fail; the absolute URL must win.
    let config = HttpClientConfig::builder()
        .base_url("https://unreachable.invalid")
        .build();

    let client = HttpClient::with_config(config);
    let url = format!("{}/absolute.json", mock_server.uri());
    let response: ApiResponse<Value> = client.get(&url, &no_query()).await.unwrap();

    assert_eq!(response.body["ok"], true);
}

#[tokio::test]
async fn test_get_relative_path_without_base_url() {
    let client = HttpClient::new();
    let result: crate::Result<ApiResponse<Value>> =
        client.get("/key_transactions.json", &no_query()).await;

    assert!(matches!(result.unwrap_err(), Error::InvalidUrl(_)));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("config"));
}
