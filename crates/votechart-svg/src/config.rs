use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use votechart_core::errors::{ChartError, ErrorInfo};
use votechart_core::Margins;

/// Presentation settings for the vote similarity chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Total surface height, margins included.
    pub total_height: f64,
    pub margins: Margins,
    /// Fraction of each band step left empty between bars.
    pub band_padding: f64,
    /// Requested number of y axis ticks.
    pub tick_count: usize,
    pub axis_label: String,
    pub bar_class: String,
    /// Remove earlier charts from the container before drawing.
    pub clear_existing: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            total_height: 300.0,
            margins: Margins::default(),
            band_padding: 0.1,
            tick_count: 10,
            axis_label: "Similaritate".into(),
            bar_class: "bar".into(),
            clear_existing: false,
        }
    }
}

fn config_error(code: &str, message: impl Into<String>) -> ChartError {
    ChartError::Config(ErrorInfo::new(code, message))
}

pub fn validate_config(config: &ChartConfig) -> Result<(), ChartError> {
    let margins = [
        ("top", config.margins.top),
        ("right", config.margins.right),
        ("bottom", config.margins.bottom),
        ("left", config.margins.left),
    ];
    for (side, value) in margins {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::Config(
                ErrorInfo::new("votechart.config_margins", "margins must be finite and non-negative")
                    .with_context("side", side)
                    .with_context("value", value.to_string()),
            ));
        }
    }
    if !config.total_height.is_finite() || config.total_height <= config.margins.vertical() {
        return Err(ChartError::Config(
            ErrorInfo::new(
                "votechart.config_height",
                "total height must exceed the vertical margins",
            )
            .with_context("total_height", config.total_height.to_string())
            .with_context("vertical_margins", config.margins.vertical().to_string()),
        ));
    }
    if !(0.0..1.0).contains(&config.band_padding) {
        return Err(ChartError::Config(
            ErrorInfo::new("votechart.config_padding", "band padding out of range")
                .with_context("band_padding", config.band_padding.to_string())
                .with_hint("use a value in [0, 1)"),
        ));
    }
    if config.tick_count == 0 {
        return Err(config_error(
            "votechart.config_ticks",
            "tick count must be positive",
        ));
    }
    if config.bar_class.trim().is_empty() {
        return Err(config_error(
            "votechart.config_bar_class",
            "bar class cannot be empty",
        ));
    }
    Ok(())
}

/// Loads and validates a configuration file. `.json` files are read as JSON,
/// everything else as YAML.
pub fn load_config(path: &Path) -> Result<ChartConfig, ChartError> {
    let bytes =
        fs::read(path).map_err(|err| ChartError::io("votechart.config_read", path, &err))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        serde_json::from_slice(&bytes).map_err(|err| err.to_string())
    } else {
        serde_yaml::from_slice(&bytes).map_err(|err| err.to_string())
    };
    let config: ChartConfig = parsed.map_err(|message| {
        ChartError::Config(ErrorInfo::new("votechart.config_parse", message).with_path(path))
    })?;
    validate_config(&config)?;
    Ok(config)
}
