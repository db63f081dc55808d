//! Common types shared across the client
//!
//! This module contains the closed HTTP verb set, the indexing hint
//! attached to authenticated requests, and the result shape of a
//! synchronous call.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

// ============================================================================
// HTTP Method
// ============================================================================

/// HTTP method supported by the Admin API.
///
/// The set is closed on purpose: verb dispatch is exhaustive and unknown
/// verb strings are rejected at the boundary, before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PATCH,
    PUT,
    DELETE,
}

impl Method {
    /// Canonical uppercase name of the verb
    pub fn as_str(self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PATCH => "PATCH",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PATCH => reqwest::Method::PATCH,
            Method::PUT => reqwest::Method::PUT,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PATCH" => Ok(Method::PATCH),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            other => Err(Error::unsupported_method(other)),
        }
    }
}

// ============================================================================
// Indexing Behavior
// ============================================================================

/// Server-side hint controlling whether a write triggers synchronous,
/// queued, or disabled search-index updates.
///
/// Attached as the `indexing-behavior` header on every authenticated
/// request; [`IndexingBehavior::Sync`] omits the header entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexingBehavior {
    /// Index synchronously; no header is sent
    Sync,
    /// Queue index updates (the server default the client assumes)
    #[default]
    Queue,
    /// Skip index updates entirely
    Disable,
}

impl IndexingBehavior {
    /// Header value for this behavior, `None` when the header is omitted
    pub fn header_value(self) -> Option<&'static str> {
        match self {
            IndexingBehavior::Sync => None,
            IndexingBehavior::Queue => Some("use-queue-indexing"),
            IndexingBehavior::Disable => Some("disable-indexing"),
        }
    }
}

// ============================================================================
// API Response
// ============================================================================

/// Result of a synchronous API call.
///
/// Endpoints that answer with an empty body (deletes, most writes) yield
/// [`ApiResponse::NoContent`]; no JSON decode is attempted for them.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The endpoint returned no content; the call itself succeeded
    NoContent,
    /// Decoded JSON body
    Json(Value),
}

impl ApiResponse {
    /// Whether the endpoint answered with an empty body
    pub fn is_no_content(&self) -> bool {
        matches!(self, ApiResponse::NoContent)
    }

    /// Borrow the decoded body, if there was one
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ApiResponse::NoContent => None,
            ApiResponse::Json(value) => Some(value),
        }
    }

    /// Consume the response into a JSON value.
    ///
    /// An empty body becomes `true`, the bare success marker.
    pub fn into_value(self) -> Value {
        match self {
            ApiResponse::NoContent => Value::Bool(true),
            ApiResponse::Json(value) => value,
        }
    }

    /// Deserialize the body into a concrete type
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match self {
            ApiResponse::NoContent => {
                Err(Error::Other("cannot decode an empty response body".into()))
            }
            ApiResponse::Json(value) => Ok(serde_json::from_value(value.clone())?),
        }
    }
}
