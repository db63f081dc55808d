//! Error types for the Shopware client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Token failures are fatal to the in-flight call and carry the raw
//! endpoint payload when one was available; transport failures are
//! re-raised unchanged after being logged with request context.

use serde_json::Value;
use thiserror::Error;

/// The main error type for the Shopware client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    /// Access token missing after exhausting retries, or the token
    /// endpoint answered without an `access_token` field.
    #[error("{message}")]
    Token {
        message: String,
        /// Raw token endpoint payload, kept for diagnostics
        payload: Option<Value>,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Unsupported HTTP method: {method}")]
    UnsupportedMethod { method: String },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a token error without a payload
    pub fn token(message: impl Into<String>) -> Self {
        Self::Token {
            message: message.into(),
            payload: None,
        }
    }

    /// Create a token error carrying the raw endpoint payload
    pub fn token_with_payload(message: impl Into<String>, payload: Value) -> Self {
        Self::Token {
            message: message.into(),
            payload: Some(payload),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an unsupported method error
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// Whether this is a fatal token error
    pub fn is_token_error(&self) -> bool {
        matches!(self, Error::Token { .. })
    }
}

/// Result type alias for the Shopware client
pub type Result<T> = std::result::Result<T, Error>;
