use std::collections::BTreeMap;
use std::iter::FromIterator;

use serde::Serialize;
use serde_json::{Map, Value};
use votechart_core::errors::{ChartError, ErrorInfo};

fn serde_error(code: &str, err: impl ToString) -> ChartError {
    ChartError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into JSON bytes with object keys in sorted order.
///
/// Non-finite coordinates are written as `null`.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, ChartError> {
    let value =
        serde_json::to_value(value).map_err(|err| serde_error("votechart.json_serialize", err))?;
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonicalize(value))
        .map_err(|err| serde_error("votechart.json_write", err))?;
    Ok(bytes)
}
