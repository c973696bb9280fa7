//! Vote similarity bar chart: layout, rendering and SVG output.

pub mod config;
pub mod input;
pub mod layout;
pub mod recording;
pub mod render;
pub mod serde;
pub mod svg;

pub use config::{load_config, validate_config, ChartConfig};
pub use input::{read_request, request_from_json, similarity_list_from_json, ChartRequest};
pub use layout::ChartLayout;
pub use recording::{DrawCall, RecordingContainer, RecordingSurface};
pub use render::{render, render_with};
pub use svg::{SvgContainer, SvgSurface};
