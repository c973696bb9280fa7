use std::io;
use std::path::Path;

use votechart_core::errors::{ChartError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("path", "chart.yaml")
        .with_context("field", "margins")
}

#[test]
fn config_error_surface() {
    let err = ChartError::Config(sample_info("votechart.config_margins", "negative margin"));
    assert_eq!(err.info().code, "votechart.config_margins");
    assert!(err.info().context.contains_key("field"));
}

#[test]
fn input_error_surface() {
    let err = ChartError::Input(sample_info("votechart.input_shape", "not an array"));
    assert_eq!(err.info().code, "votechart.input_shape");
    assert!(err.info().context.contains_key("path"));
}

#[test]
fn serde_error_surface() {
    let err = ChartError::Serde(sample_info("votechart.json_write", "buffer full"));
    assert_eq!(err.info().code, "votechart.json_write");
}

#[test]
fn io_error_surface() {
    let err = ChartError::Io(sample_info("votechart.write", "permission denied"));
    assert_eq!(err.info().code, "votechart.write");
}

#[test]
fn display_includes_context_and_hint() {
    let err = ChartError::Config(
        ErrorInfo::new("votechart.config_padding", "padding out of range")
            .with_context("band_padding", "1.5")
            .with_hint("use a value in [0, 1)"),
    );
    assert_eq!(
        err.to_string(),
        "config error: padding out of range (code: votechart.config_padding) \
         | context: [band_padding=1.5] | hint: use a value in [0, 1)"
    );
}

#[test]
fn errors_round_trip_json() {
    let err = ChartError::Input(sample_info("votechart.input_decode", "eof"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Input\""));
    let decoded: ChartError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn path_context_keeps_family() {
    let path = Path::new("data/similarity.json");
    let err = ChartError::Input(ErrorInfo::new("votechart.input_shape", "not an array"))
        .at_path(path);
    assert!(matches!(err, ChartError::Input(_)));
    assert_eq!(
        err.info().context.get("path").map(String::as_str),
        Some("data/similarity.json")
    );

    let missing = io::Error::new(io::ErrorKind::NotFound, "no such file");
    let err = ChartError::io("votechart.input_read", path, &missing);
    assert_eq!(err.info().code, "votechart.input_read");
    assert_eq!(err.info().message, "no such file");
    assert!(err.info().context.contains_key("path"));
}
