//! Token manager implementation
//!
//! Performs the client-credentials exchange and retries transient
//! failures with a bounded attempt counter and fixed backoff, so callers
//! only ever see a token error after the retry budget is spent.

use super::types::CachedToken;
use crate::config::ClientConfig;
use crate::decode::JsonDecoder;
use crate::error::{Error, Result};
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

/// Token endpoint path, relative to the base URL
const TOKEN_PATH: &str = "api/oauth/token";

/// Manages the single access token owned by a client instance
pub struct TokenManager {
    config: ClientConfig,
    cached: Arc<RwLock<Option<CachedToken>>>,
    http: Client,
    decoder: JsonDecoder,
}

impl TokenManager {
    /// Create a token manager sharing the client's HTTP transport
    pub fn new(config: ClientConfig, http: Client) -> Self {
        Self {
            config,
            cached: Arc::new(RwLock::new(None)),
            http,
            decoder: JsonDecoder::new(),
        }
    }

    /// Guarantee a token with more than the grace buffer of lifetime left.
    ///
    /// Performs no network call while the cached token is still valid.
    /// On exchange failure, retries up to `RetryPolicy::max_retries`
    /// additional attempts with a fixed backoff sleep in between; each
    /// attempt re-runs the full validity decision. Once the budget is
    /// spent the caller gets a token error with no payload.
    pub async fn ensure_valid(&self) -> Result<String> {
        let retry = self.config.token_retry;
        let mut attempt: u32 = 0;

        loop {
            match self.current_or_exchange().await {
                Ok(token) => return Ok(token),
                Err(err) => {
                    if attempt >= retry.max_retries {
                        error!(error = %err, "missing access token");
                        return Err(Error::token("Access token is missing"));
                    }
                    attempt += 1;
                    info!(attempt, error = %err, "reload access token");
                    tokio::time::sleep(retry.backoff).await;
                }
            }
        }
    }

    /// Drop the cached token, forcing an exchange on the next call
    pub async fn invalidate(&self) {
        let mut cached = self.cached.write().await;
        *cached = None;
    }

    /// Return the cached token or run one exchange attempt
    async fn current_or_exchange(&self) -> Result<String> {
        {
            let cached = self.cached.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        let mut cached = self.cached.write().await;

        // Re-check after acquiring the write lock
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
        }

        let fresh = self.exchange().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);

        Ok(token)
    }

    /// One client-credentials exchange against the token endpoint
    async fn exchange(&self) -> Result<CachedToken> {
        let token_url = self.config.endpoint(TOKEN_PATH)?;
        let body = json!({
            "client_id": self.config.client_id,
            "client_secret": self.config.client_secret,
            "grant_type": "client_credentials",
        });

        let response = self.http.post(token_url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), text));
        }

        // The access_token check runs on the raw payload regardless of
        // HTTP status, so a 200 without the field still fails.
        let payload = self.decoder.decode(&text);
        let Some(token) = payload.get("access_token").and_then(Value::as_str) else {
            return Err(Error::token_with_payload("Access token is missing", payload));
        };

        // A missing lifetime leaves the token already stale, forcing a
        // fresh exchange on the next call.
        let expires_in = payload.get("expires_in").and_then(Value::as_i64).unwrap_or(0);

        Ok(CachedToken::expires_in(token.to_string(), expires_in))
    }
}
