//! JSON decoder implementation

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::error;

/// Decodes raw response bodies into JSON values.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }

    /// Lenient decode: malformed input is logged with the raw body
    /// attached and yields an empty mapping. Never fails.
    pub fn decode(&self, body: &str) -> Value {
        match serde_json::from_str(body) {
            Ok(value) => value,
            Err(err) => {
                error!(error = %err, body, "invalid json in response body");
                Value::Object(Map::new())
            }
        }
    }

    /// Strict decode: malformed input is an error
    pub fn decode_strict(&self, body: &str) -> Result<Value> {
        serde_json::from_str(body).map_err(Error::JsonParse)
    }

    /// Strict decode into a concrete type
    pub fn decode_as<T: DeserializeOwned>(&self, body: &str) -> Result<T> {
        serde_json::from_str(body).map_err(Error::JsonParse)
    }
}
