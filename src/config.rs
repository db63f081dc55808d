//! Client configuration
//!
//! Credentials are fixed for the lifetime of a client instance; the token
//! retry policy is a named value so tests can shrink the backoff.

use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Retry policy for the token exchange.
///
/// The first attempt is always made; `max_retries` counts the additional
/// attempts after a failure, each preceded by a fixed `backoff` sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure
    pub max_retries: u32,
    /// Fixed delay between attempts
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Configuration for a Shopware client instance
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Shopware instance
    pub base_url: String,
    /// OAuth2 client id
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// Retry policy for the token exchange
    pub token_retry: RetryPolicy,
    /// Request timeout handed to the transport
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with default retry policy and timeout
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_retry: RetryPolicy::default(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Check that the credential fields are present
    pub(crate) fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        if self.client_id.is_empty() {
            return Err(Error::missing_field("client_id"));
        }
        if self.client_secret.is_empty() {
            return Err(Error::missing_field("client_secret"));
        }
        Ok(())
    }

    /// Resolve a request path against the base URL
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        // Url::join drops the last base path segment unless the base ends
        // with a slash, so normalize both sides first.
        let mut base = self.base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base = Url::parse(&base)?;
        Ok(base.join(path.trim_start_matches('/'))?)
    }
}

/// Builder for client config
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: String,
    client_id: String,
    client_secret: String,
    token_retry: RetryPolicy,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Set the base URL of the Shopware instance
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the OAuth2 client id
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = id.into();
        self
    }

    /// Set the OAuth2 client secret
    pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = secret.into();
        self
    }

    /// Set the token exchange retry policy
    pub fn token_retry(mut self, policy: RetryPolicy) -> Self {
        self.token_retry = policy;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url,
            client_id: self.client_id,
            client_secret: self.client_secret,
            token_retry: self.token_retry,
            timeout: self.timeout.unwrap_or(Duration::from_secs(30)),
        }
    }
}
