use serde::{Deserialize, Serialize};
use votechart_core::{
    BandScale, LayoutRegion, LinearScale, RectNode, Scale, SimilarityDatum, SurfaceSpec,
};

use crate::config::ChartConfig;

/// Geometry of one chart: region, scales and the surface that hosts them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub region: LayoutRegion,
    /// Horizontal scale from datum index to band.
    pub x: BandScale,
    /// Vertical scale from similarity to pixel offset, baseline at the bottom.
    pub y: LinearScale,
}

impl ChartLayout {
    /// Computes the layout for `len` bars in a container `width` pixels wide.
    pub fn compute(width: f64, len: usize, config: &ChartConfig) -> Self {
        let region = LayoutRegion::new(width, config.total_height, config.margins);
        let x = BandScale::rounded(len, (0.0, region.inner_width()), config.band_padding);
        let y = LinearScale::new((0.0, 1.0), (region.inner_height(), 0.0));
        Self { region, x, y }
    }

    pub fn inner_width(&self) -> f64 {
        self.region.inner_width()
    }

    pub fn inner_height(&self) -> f64 {
        self.region.inner_height()
    }

    /// Outer surface size with the plot origin moved past the top-left
    /// margins.
    pub fn surface_spec(&self) -> SurfaceSpec {
        let margins = self.region.margins;
        SurfaceSpec {
            width: self.inner_width() + margins.horizontal(),
            height: self.inner_height() + margins.vertical(),
            origin: (margins.left, margins.top),
        }
    }

    /// Rectangle for the datum at `index`.
    pub fn bar(&self, index: usize, datum: &SimilarityDatum, class: &str) -> RectNode {
        let top = self.y.scale(datum.similarity);
        RectNode {
            class: class.to_string(),
            x: self.x.scale(index),
            y: top,
            width: self.x.bandwidth(),
            height: self.inner_height() - top,
        }
    }

    /// One rectangle per datum, in input order.
    pub fn bars(&self, data: &[SimilarityDatum], class: &str) -> Vec<RectNode> {
        data.iter()
            .enumerate()
            .map(|(index, datum)| self.bar(index, datum, class))
            .collect()
    }
}
