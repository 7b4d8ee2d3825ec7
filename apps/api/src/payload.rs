//! Lenient readers for loosely typed JSON request bodies.
//!
//! Bot webhooks and browser forms send numbers as strings, omit fields, or post
//! an empty body. These helpers turn such input into typed values without ever
//! rejecting the request at the extractor level.

use axum::extract::rejection::BytesRejection;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Unwraps a buffered body. A body axum could not buffer (for example one over
/// the default size limit) is logged and replaced with an empty one.
pub fn body_or_empty(body: Result<Bytes, BytesRejection>) -> Bytes {
    body.unwrap_or_else(|rejection| {
        warn!("Request body could not be read: {rejection}");
        Bytes::new()
    })
}

/// Parses a request body into `T`. Anything other than a JSON object
/// (empty body, malformed JSON, arrays, scalars) yields `T::default()`.
pub fn lenient_json<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_else(|e| {
            debug!("Request body did not match expected shape: {e}");
            T::default()
        }),
        _ => {
            debug!("Request body is not a JSON object; treating as empty");
            T::default()
        }
    }
}

/// Integer from a number or numeric string. Floats truncate toward zero;
/// absent, null and non-numeric values become 0.
pub fn coerce_int(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

/// Record id from a number or numeric string. Zero, empty and non-numeric
/// values count as absent.
pub fn coerce_id(value: Option<&Value>) -> Option<i64> {
    let id = match value? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        })?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    (id != 0).then_some(id)
}

/// A non-empty string field.
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Free-text field. Numbers are kept in their JSON rendering; other types are dropped.
pub fn loose_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Sample {
        name: Option<Value>,
    }

    #[test]
    fn test_lenient_json_object() {
        let sample: Sample = lenient_json(br#"{"name": "A"}"#);
        assert_eq!(sample.name, Some(json!("A")));
    }

    #[test]
    fn test_lenient_json_empty_and_garbage() {
        let empty: Sample = lenient_json(b"");
        assert!(empty.name.is_none());
        let garbage: Sample = lenient_json(b"not json");
        assert!(garbage.name.is_none());
        let array: Sample = lenient_json(b"[\"A\"]");
        assert!(array.name.is_none());
    }

    #[test]
    fn test_coerce_int_variants() {
        assert_eq!(coerce_int(Some(&json!(3))), 3);
        assert_eq!(coerce_int(Some(&json!("4"))), 4);
        assert_eq!(coerce_int(Some(&json!(" 5 "))), 5);
        assert_eq!(coerce_int(Some(&json!(2.9))), 2);
        assert_eq!(coerce_int(Some(&json!("two"))), 0);
        assert_eq!(coerce_int(Some(&Value::Null)), 0);
        assert_eq!(coerce_int(None), 0);
    }

    #[test]
    fn test_coerce_id() {
        assert_eq!(coerce_id(Some(&json!(1))), Some(1));
        assert_eq!(coerce_id(Some(&json!("12"))), Some(12));
        assert_eq!(coerce_id(Some(&json!(3.0))), Some(3));
        assert_eq!(coerce_id(Some(&json!(0))), None);
        assert_eq!(coerce_id(Some(&json!(""))), None);
        assert_eq!(coerce_id(Some(&json!("abc"))), None);
        assert_eq!(coerce_id(Some(&json!(true))), None);
        assert_eq!(coerce_id(None), None);
    }

    #[test]
    fn test_non_empty_str() {
        assert_eq!(non_empty_str(Some(&json!("a@x.com"))), Some("a@x.com"));
        assert_eq!(non_empty_str(Some(&json!(""))), None);
    }

    #[test]
    fn test_non_empty_str_rejects_non_text() {
        assert_eq!(non_empty_str(Some(&json!(5))), None);
        assert_eq!(non_empty_str(Some(&json!(true))), None);
    }

    #[test]
    fn test_body_or_empty_keeps_buffered_body() {
        let body = body_or_empty(Ok(Bytes::from_static(b"{}")));
        assert_eq!(&body[..], b"{}");
    }

    #[test]
    fn test_loose_text() {
        assert_eq!(loose_text(Some(&json!("555-0100"))), Some("555-0100".to_string()));
        assert_eq!(loose_text(Some(&json!(5550100))), Some("5550100".to_string()));
        assert_eq!(loose_text(Some(&json!(["x"]))), None);
    }
}
