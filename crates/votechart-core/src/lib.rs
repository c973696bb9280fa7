#![deny(missing_docs)]
#![doc = "Core scales, scene primitives and drawing traits for votechart."]

pub mod errors;
pub mod scale;
pub mod scene;
pub mod ticks;
mod types;

pub use errors::{ChartError, ErrorInfo};
pub use scale::{BandScale, LinearScale, Scale};
pub use scene::{
    AxisNode, AxisTick, Container, DrawSurface, GroupId, RectNode, SurfaceSpec, TextAnchor,
    TextNode,
};
pub use types::{LayoutRegion, Margins, SimilarityDatum};
