//! Parameter encoding strategies.
//!
//! Parameters are a JSON object. How they reach the server depends on the
//! [`Encoding`]: appended to the URL, or sent as a JSON or form body.
//! Query and form encodings flatten nested values with bracket notation:
//!
//! ```
//! use courier_core::{Parameters, to_query_pairs};
//! use serde_json::json;
//!
//! let params: Parameters = json!({"page": 1, "filter": {"team": "core"}, "ids": [1, 2]})
//!     .as_object()
//!     .cloned()
//!     .unwrap_or_default();
//!
//! assert_eq!(
//!     to_query_pairs(&params),
//!     vec![
//!         ("filter[team]".to_string(), "core".to_string()),
//!         ("ids[]".to_string(), "1".to_string()),
//!         ("ids[]".to_string(), "2".to_string()),
//!         ("page".to_string(), "1".to_string()),
//!     ]
//! );
//! ```

use bytes::Bytes;
use derive_more::Display;
use serde_json::Value;

use crate::{Parameters, Result};

/// Where and how request parameters are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Encoding {
    /// Parameters are appended to the URL query string.
    #[display("query")]
    Query,
    /// Parameters are sent as a JSON object body.
    #[display("json")]
    Json,
    /// Parameters are sent as an `application/x-www-form-urlencoded` body.
    #[display("form")]
    Form,
}

impl Encoding {
    /// The `Content-Type` header value for body encodings.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Query => None,
            Self::Json => Some("application/json"),
            Self::Form => Some("application/x-www-form-urlencoded"),
        }
    }
}

/// Flatten parameters into ordered key/value pairs.
///
/// Nested objects become `key[child]`, arrays become repeated `key[]`
/// entries, and `null` values are omitted.
#[must_use]
pub fn to_query_pairs(params: &Parameters) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        flatten(key.clone(), value, &mut pairs);
    }
    pairs
}

fn flatten(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((key, flag.to_string())),
        Value::Number(number) => pairs.push((key, number.to_string())),
        Value::String(text) => pairs.push((key, text.clone())),
        Value::Array(items) => {
            let nested = format!("{key}[]");
            for item in items {
                flatten(nested.clone(), item, pairs);
            }
        }
        Value::Object(map) => {
            for (child, item) in map {
                flatten(format!("{key}[{child}]"), item, pairs);
            }
        }
    }
}

/// Serialize parameters to a form URL-encoded body.
#[must_use]
pub fn to_form(params: &Parameters) -> Bytes {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(to_query_pairs(params))
        .finish();
    Bytes::from(body.into_bytes())
}

/// Serialize parameters to a JSON object body.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_json(params: &Parameters) -> Result<Bytes> {
    serde_json::to_vec(params)
        .map(Bytes::from)
        .map_err(Into::into)
}
