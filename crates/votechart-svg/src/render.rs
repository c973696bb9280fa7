use tracing::{debug, warn};
use votechart_core::{AxisNode, Container, DrawSurface, SimilarityDatum, TextAnchor, TextNode};

use crate::config::ChartConfig;
use crate::layout::ChartLayout;

/// Draws the vote similarity chart into `container` with the default
/// configuration.
///
/// A new surface is appended on every call; earlier charts in the same
/// container are left in place.
pub fn render<C: Container>(container: &mut C, similarity_list: &[SimilarityDatum]) {
    render_with(container, similarity_list, &ChartConfig::default());
}

/// Draws the chart using `config`, which is expected to have passed
/// [`validate_config`](crate::config::validate_config).
///
/// Never fails: empty data yields an axis without bars, and narrow
/// containers or out-of-range similarities produce degenerate geometry
/// instead of an error.
pub fn render_with<C: Container>(
    container: &mut C,
    similarity_list: &[SimilarityDatum],
    config: &ChartConfig,
) {
    if config.clear_existing {
        container.clear();
    }
    let layout = ChartLayout::compute(container.measure_width(), similarity_list.len(), config);
    if layout.region.is_degenerate() {
        warn!(
            width = layout.region.width,
            inner_width = layout.inner_width(),
            "container narrower than horizontal margins; bars will be degenerate"
        );
    }
    let outliers = Outliers::count(similarity_list);
    if outliers.undefined > 0 {
        warn!(
            count = outliers.undefined,
            "undefined similarity values leave bars without a position"
        );
    }
    if outliers.outside > 0 {
        warn!(
            count = outliers.outside,
            "similarity values outside [0, 1] are drawn unclamped"
        );
    }
    debug!(
        inner_width = layout.inner_width(),
        inner_height = layout.inner_height(),
        step = layout.x.step(),
        bandwidth = layout.x.bandwidth(),
        bars = similarity_list.len(),
        "vote similarity layout"
    );

    let surface = container.append_surface(layout.surface_spec());
    let axis = AxisNode::percent("y axis", &layout.y, config.tick_count);
    let group = surface.append_axis(axis);
    surface.append_text(
        Some(group),
        TextNode::new(config.axis_label.as_str())
            .rotated(-90.0)
            .at_y(6.0)
            .with_dy(".71em")
            .anchored(TextAnchor::End),
    );
    for bar in layout.bars(similarity_list, &config.bar_class) {
        surface.append_rect(bar);
    }
}

/// Data points that will not draw as a regular bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Outliers {
    /// `NaN` values, usually a missing field in the input.
    undefined: usize,
    /// Numeric values outside `[0, 1]`, infinities included.
    outside: usize,
}

impl Outliers {
    fn count(similarity_list: &[SimilarityDatum]) -> Self {
        similarity_list
            .iter()
            .fold(Self::default(), |mut acc, datum| {
                if datum.similarity.is_nan() {
                    acc.undefined += 1;
                } else if !datum.in_unit_range() {
                    acc.outside += 1;
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCall, RecordingContainer};

    #[test]
    fn axis_precedes_bars() {
        let mut container = RecordingContainer::new(600.0);
        render(&mut container, &[SimilarityDatum::new(0.4)]);
        let calls = &container.surfaces[0].calls;
        assert_eq!(calls.len(), 3);
        assert!(matches!(calls[0], DrawCall::Axis { .. }));
        assert!(matches!(calls[1], DrawCall::Text { parent: Some(_), .. }));
        assert!(matches!(calls[2], DrawCall::Rect(_)));
    }

    #[test]
    fn clearing_is_opt_in() {
        let mut container = RecordingContainer::new(600.0);
        let config = ChartConfig {
            clear_existing: true,
            ..ChartConfig::default()
        };
        render(&mut container, &[]);
        render_with(&mut container, &[], &config);
        assert_eq!(container.surfaces.len(), 1);
        assert_eq!(container.clears, 1);
    }

    #[test]
    fn undefined_values_are_counted_apart_from_out_of_range() {
        let data: Vec<SimilarityDatum> = [0.5, f64::NAN, 1.2, -0.1, f64::INFINITY, f64::NAN, 1.0]
            .into_iter()
            .map(SimilarityDatum::new)
            .collect();
        assert_eq!(
            Outliers::count(&data),
            Outliers {
                undefined: 2,
                outside: 3
            }
        );
        assert_eq!(Outliers::count(&[]), Outliers::default());
    }
}
