//! Response envelope: unwrapping JSON payloads into models.
//!
//! Servers behind this pipeline do not agree on a payload shape. Some wrap
//! the data in a `"response"` member, some return it at the top level. The
//! envelope rule handles both:
//!
//! | payload                          | single decode        | sequence decode               |
//! |----------------------------------|----------------------|-------------------------------|
//! | `{"response": {..}}`             | the inner object     | the inner object, as one item |
//! | `{"response": [{..}, {..}]}`     | the whole payload    | each element, in order        |
//! | any other object                 | the whole payload    | no data                       |
//! | top-level array                  | no data              | each element, all must decode |
//!
//! Elements of a `"response"` array that do not decode are skipped.
//!
//! # Example
//!
//! ```
//! use courier_core::Decodable;
//! use serde::Deserialize;
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq, Deserialize)]
//! struct Team { name: String }
//!
//! impl Decodable for Team {}
//!
//! let wrapped = json!({"response": {"name": "A"}});
//! let bare = json!({"name": "A"});
//! assert_eq!(Team::decode_single(&wrapped).unwrap(), Team { name: "A".into() });
//! assert_eq!(Team::decode_single(&bare).unwrap(), Team { name: "A".into() });
//! ```

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{Error, Result, from_value};

/// Key under which servers wrap the payload data.
pub const RESPONSE_KEY: &str = "response";

/// Decode a single model from a payload.
///
/// # Errors
///
/// Returns a decode error if the payload is not a JSON object or the
/// selected value does not match `T`.
pub fn decode_single<T: DeserializeOwned>(payload: &Value) -> Result<T> {
    let Value::Object(fields) = payload else {
        return Err(Error::decode(".", "expected a JSON object"));
    };
    match fields.get(RESPONSE_KEY) {
        Some(inner @ Value::Object(_)) => from_value(inner),
        _ => from_value(payload),
    }
}

/// Decode a sequence of models from a payload.
///
/// # Errors
///
/// Returns a decode error if the selected value does not match `T` (or
/// `Vec<T>` for the top-level fallback).
pub fn decode_many<T: DeserializeOwned>(payload: &Value) -> Result<Vec<T>> {
    match payload.get(RESPONSE_KEY) {
        Some(inner @ Value::Object(_)) => from_value(inner).map(|item| vec![item]),
        Some(Value::Array(items)) => Ok(items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                from_value(item)
                    .inspect_err(|err| debug!(index, error = %err, "skipping undecodable element"))
                    .ok()
            })
            .collect()),
        _ => from_value(payload),
    }
}

/// A model that can be decoded from a response payload.
///
/// Any `serde` model gets the [envelope rule](self) with an empty impl.
/// Override either method when a model needs a different unwrapping.
pub trait Decodable: DeserializeOwned {
    /// Decode one model from a payload.
    ///
    /// # Errors
    ///
    /// Returns a decode error when the payload does not hold a `Self`.
    fn decode_single(payload: &Value) -> Result<Self> {
        decode_single(payload)
    }

    /// Decode an ordered sequence of models from a payload.
    ///
    /// # Errors
    ///
    /// Returns a decode error when the payload does not hold `Self` values.
    fn decode_many(payload: &Value) -> Result<Vec<Self>> {
        decode_many(payload)
    }
}

/// An untyped JSON object, unwrapped by the envelope rule.
///
/// Use it for endpoints whose payload has no dedicated model.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct RawObject(Map<String, Value>);

impl RawObject {
    /// Consume into the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Deref for RawObject {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Decodable for RawObject {}
