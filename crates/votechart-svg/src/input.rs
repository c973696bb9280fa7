use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use votechart_core::errors::{ChartError, ErrorInfo};
use votechart_core::SimilarityDatum;

/// Render request as handed over by a calling view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub vote_similarity_list: Vec<SimilarityDatum>,
    /// Width to lay the chart out in, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_width: Option<f64>,
}

const LIST_FIELD: &str = "vote_similarity_list";

fn input_error(code: &str, err: impl ToString) -> ChartError {
    ChartError::Input(ErrorInfo::new(code, err.to_string()))
}

fn shape_error(message: &str) -> ChartError {
    ChartError::Input(
        ErrorInfo::new("votechart.input_shape", message)
            .with_hint("wrap the records as {\"vote_similarity_list\": [...]}"),
    )
}

/// Reads one record without failing: a numeric or numeric-string
/// `similarity` is kept, anything else becomes `NaN`.
fn datum_from_value(record: &Value) -> SimilarityDatum {
    let similarity = match record.get("similarity") {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    };
    SimilarityDatum::new(similarity)
}

fn records(items: &[Value]) -> Vec<SimilarityDatum> {
    items.iter().map(datum_from_value).collect()
}

/// Decodes either a bare similarity array or a [`ChartRequest`] object.
///
/// Only the top-level shape is checked. Records that are not objects, or
/// whose `similarity` is missing or not numeric, decode to `NaN` and are
/// drawn as undefined bars.
pub fn request_from_json(data: &[u8]) -> Result<ChartRequest, ChartError> {
    let value: Value =
        serde_json::from_slice(data).map_err(|err| input_error("votechart.input_decode", err))?;
    match value {
        Value::Array(items) => Ok(ChartRequest {
            vote_similarity_list: records(&items),
            container_width: None,
        }),
        Value::Object(map) => {
            let items = match map.get(LIST_FIELD) {
                Some(Value::Array(items)) => items,
                Some(_) => return Err(shape_error("vote_similarity_list must be an array")),
                None => return Err(shape_error("request object has no vote_similarity_list")),
            };
            Ok(ChartRequest {
                vote_similarity_list: records(items),
                container_width: map.get("container_width").and_then(Value::as_f64),
            })
        }
        _ => Err(shape_error("expected an array of similarity records or a request object")),
    }
}

/// Decodes only the similarity records, dropping any layout hints.
pub fn similarity_list_from_json(data: &[u8]) -> Result<Vec<SimilarityDatum>, ChartError> {
    request_from_json(data).map(|request| request.vote_similarity_list)
}

/// Reads a request from `path`, or from stdin when `path` is `-`.
pub fn read_request(path: &Path) -> Result<ChartRequest, ChartError> {
    let read = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map(|_| buf)
    } else {
        fs::read(path)
    };
    let data = read.map_err(|err| ChartError::io("votechart.input_read", path, &err))?;
    request_from_json(&data).map_err(|err| err.at_path(path))
}
