//! Path-aware JSON decoding.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;

/// Deserialize JSON bytes with path-aware error messages.
///
/// # Errors
///
/// Returns [`Error::Decode`](crate::Error::Decode) with the path of the
/// offending field (empty for syntax errors).
///
/// # Example
///
/// ```
/// use courier_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Team { name: String }
///
/// let team: Team = from_json(br#"{"name":"Core"}"#).expect("deserialize");
/// assert_eq!(team, Team { name: "Core".to_string() });
/// ```
pub fn from_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::decode(e.path().to_string(), e.inner().to_string()))
}

/// Deserialize an already-parsed JSON value with path-aware error messages.
///
/// # Errors
///
/// Returns [`Error::Decode`](crate::Error::Decode) with the path of the
/// offending field.
pub fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T> {
    serde_path_to_error::deserialize(value)
        .map_err(|e| crate::Error::decode(e.path().to_string(), e.inner().to_string()))
}
