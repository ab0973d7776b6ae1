//! Request parameters and their merge rules.

use serde_json::{Map, Value};

use crate::{Error, Result};

/// Request parameters: a JSON object keyed by parameter name.
pub type Parameters = Map<String, Value>;

/// Remove entries whose value is `null`.
///
/// Parameters are never sent as a literal `null`.
#[must_use]
pub fn without_nulls(params: Parameters) -> Parameters {
    params
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .collect()
}

/// Merge `incoming` into `target`, dropping `null` entries first.
///
/// Keys already present in `target` are overwritten by `incoming`.
pub fn merge(target: &mut Option<Parameters>, incoming: Parameters) {
    let incoming = without_nulls(incoming);
    match target {
        Some(existing) => existing.extend(incoming),
        None => *target = Some(incoming),
    }
}

/// Serialize a record into parameters.
///
/// # Errors
///
/// Returns [`Error::InvalidParameters`] if the record does not serialize to
/// a JSON object, or a serialization error if serde fails.
pub fn from_record<R: serde::Serialize + ?Sized>(record: &R) -> Result<Parameters> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::invalid_parameters(format!(
            "expected an object, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> Parameters {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn merge_into_empty() {
        let mut target = None;
        merge(&mut target, params(json!({"a": 1})));
        assert_eq!(target, Some(params(json!({"a": 1}))));
    }

    #[test]
    fn merge_last_writer_wins() {
        let mut target = Some(params(json!({"a": 1, "b": 2})));
        merge(&mut target, params(json!({"b": 3, "c": 4})));
        merge(&mut target, params(json!({"c": 5})));
        assert_eq!(target, Some(params(json!({"a": 1, "b": 3, "c": 5}))));
    }

    #[test]
    fn merge_drops_nulls() {
        let mut target = Some(params(json!({"a": 1})));
        merge(&mut target, params(json!({"a": null, "b": null, "c": 2})));
        // a null never erases an existing value
        assert_eq!(target, Some(params(json!({"a": 1, "c": 2}))));
    }

    #[test]
    fn from_record_object() {
        #[derive(serde::Serialize)]
        struct DateRange {
            from: String,
            to: String,
        }

        let record = DateRange {
            from: "2019-01-01".to_string(),
            to: "2019-01-31".to_string(),
        };
        let params = from_record(&record).expect("object");
        assert_eq!(params.get("from"), Some(&json!("2019-01-01")));
        assert_eq!(params.get("to"), Some(&json!("2019-01-31")));
    }

    #[test]
    fn from_record_rejects_non_object() {
        let err = from_record(&vec![1, 2]).expect_err("array is not an object");
        assert!(matches!(err, Error::InvalidParameters(_)));
        assert!(err.to_string().contains("an array"));
    }
}
