//! Tests for the decode module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[test]
fn test_decode_object() {
    let decoder = JsonDecoder::new();
    let value = decoder.decode(r#"{"foo":"bar"}"#);
    assert_eq!(value, json!({"foo": "bar"}));
}

#[test]
fn test_decode_array() {
    let decoder = JsonDecoder::new();
    let value = decoder.decode(r#"[{"id":1},{"id":2}]"#);
    assert_eq!(value, json!([{"id": 1}, {"id": 2}]));
}

#[test]
fn test_decode_malformed_yields_empty_mapping() {
    let decoder = JsonDecoder::new();
    let value = decoder.decode("{bad");
    assert_eq!(value, Value::Object(serde_json::Map::new()));
}

#[test]
fn test_decode_empty_yields_empty_mapping() {
    let decoder = JsonDecoder::new();
    let value = decoder.decode("");
    assert_eq!(value, Value::Object(serde_json::Map::new()));
}

#[test]
fn test_decode_strict_ok() {
    let decoder = JsonDecoder::new();
    let value = decoder.decode_strict(r#"{"a":1}"#).unwrap();
    assert_eq!(value, json!({"a": 1}));
}

#[test]
fn test_decode_strict_malformed_fails() {
    let decoder = JsonDecoder::new();
    let err = decoder.decode_strict("{bad").unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));

    // An empty body is also a strict failure
    assert!(decoder.decode_strict("").is_err());
}

#[test]
fn test_decode_as_typed() {
    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Product {
        id: u32,
        name: String,
    }

    let decoder = JsonDecoder::new();
    let product: Product = decoder
        .decode_as(r#"{"id":7,"name":"widget"}"#)
        .unwrap();
    assert_eq!(
        product,
        Product {
            id: 7,
            name: "widget".to_string()
        }
    );
}
