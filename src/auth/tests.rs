//! Tests for the token manager

use super::*;
use crate::config::{ClientConfig, RetryPolicy};
use crate::error::Error;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .base_url(server.uri())
        .client_id("my-client")
        .client_secret("my-secret")
        .token_retry(RetryPolicy {
            max_retries: 3,
            backoff: Duration::from_millis(10),
        })
        .build()
}

fn manager(server: &MockServer) -> TokenManager {
    TokenManager::new(test_config(server), reqwest::Client::new())
}

#[tokio::test]
async fn test_exchange_sends_client_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/oauth/token"))
        .and(body_partial_json(json!({
            "client_id": "my-client",
            "client_secret": "my-secret",
            "grant_type": "client_credentials",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "token-123",
            "expires_in": 600,
            "token_type": "Bearer"
        })))
        .mount(&mock_server)
        .await;

    let manager = manager(&mock_server);
    let token = manager.ensure_valid().await.unwrap();
    assert_eq!(token, "token-123");
}

#[tokio::test]
async fn test_valid_token_skips_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "cached-token",
            "expires_in": 3600
        })))
        .expect(1) // Only the first call may hit the endpoint
        .mount(&mock_server)
        .await;

    let manager = manager(&mock_server);
    assert_eq!(manager.ensure_valid().await.unwrap(), "cached-token");
    assert_eq!(manager.ensure_valid().await.unwrap(), "cached-token");
    assert_eq!(manager.ensure_valid().await.unwrap(), "cached-token");
}

#[tokio::test]
async fn test_retry_budget_then_token_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/oauth/token"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(4) // First attempt plus three retries
        .mount(&mock_server)
        .await;

    let manager = manager(&mock_server);
    let err = manager.ensure_valid().await.unwrap_err();

    assert!(err.is_token_error());
    assert_eq!(err.to_string(), "Access token is missing");
    // The final error carries no payload
    match err {
        Error::Token { payload, .. } => assert!(payload.is_none()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_access_token_field_fails() {
    let mock_server = MockServer::start().await;

    // HTTP 200 but no access_token field
    Mock::given(method("POST"))
        .and(path("/api/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 600
        })))
        .expect(4)
        .mount(&mock_server)
        .await;

    let manager = manager(&mock_server);
    let err = manager.ensure_valid().await.unwrap_err();
    assert!(err.is_token_error());
    assert_eq!(err.to_string(), "Access token is missing");
}

#[tokio::test]
async fn test_transient_failure_masked_by_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/oauth/token"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "recovered-token",
            "expires_in": 600
        })))
        .mount(&mock_server)
        .await;

    let manager = manager(&mock_server);
    // The caller never sees the two failed attempts
    assert_eq!(manager.ensure_valid().await.unwrap(), "recovered-token");
}

#[tokio::test]
async fn test_invalidate_forces_exchange() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "token",
            "expires_in": 3600
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let manager = manager(&mock_server);
    manager.ensure_valid().await.unwrap();
    manager.invalidate().await;
    manager.ensure_valid().await.unwrap();
}

#[tokio::test]
async fn test_short_lived_token_refreshes() {
    let mock_server = MockServer::start().await;

    // expires_in of 5s is inside the 10s grace buffer, so the token is
    // stale immediately and every call exchanges again.
    Mock::given(method("POST"))
        .and(path("/api/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "short-token",
            "expires_in": 5
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let manager = manager(&mock_server);
    assert_eq!(manager.ensure_valid().await.unwrap(), "short-token");
    assert_eq!(manager.ensure_valid().await.unwrap(), "short-token");
}
