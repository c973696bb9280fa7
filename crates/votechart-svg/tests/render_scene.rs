use votechart_core::{SimilarityDatum, TextAnchor};
use votechart_svg::recording::DrawCall;
use votechart_svg::{render, render_with, ChartConfig, RecordingContainer};

fn data(values: &[f64]) -> Vec<SimilarityDatum> {
    values.iter().copied().map(SimilarityDatum::new).collect()
}

#[test]
fn three_bar_scenario() {
    let mut container = RecordingContainer::new(600.0);
    render(&mut container, &data(&[0.5, 1.0, 0.0]));
    assert_eq!(container.surfaces.len(), 1);
    let surface = &container.surfaces[0];
    assert_eq!(surface.spec.width, 600.0);
    assert_eq!(surface.spec.height, 300.0);
    assert_eq!(surface.spec.origin, (60.0, 20.0));

    let rects = surface.rects();
    assert_eq!(rects.len(), 3);
    assert_eq!(rects[0].height, 125.0);
    assert_eq!(rects[1].height, 250.0);
    assert_eq!(rects[1].y, 0.0);
    assert_eq!(rects[2].height, 0.0);
    assert_eq!(rects[2].y, 250.0);
    assert!(rects.iter().all(|rect| rect.class == "bar"));
    assert!(rects.windows(2).all(|pair| pair[0].x < pair[1].x));
}

#[test]
fn empty_dataset_draws_axis_only() {
    let mut container = RecordingContainer::new(600.0);
    render(&mut container, &[]);
    let surface = &container.surfaces[0];
    assert!(surface.rects().is_empty());
    let axes = surface.axes();
    assert_eq!(axes.len(), 1);
    assert_eq!(axes[0].class, "y axis");
    assert_eq!(axes[0].label_offset(), -9.0);
    assert_eq!(axes[0].ticks.len(), 11);
}

#[test]
fn axis_label_is_attached_to_axis_group() {
    let mut container = RecordingContainer::new(600.0);
    render(&mut container, &data(&[0.2]));
    let surface = &container.surfaces[0];
    let group = match &surface.calls[0] {
        DrawCall::Axis { group, .. } => *group,
        other => panic!("expected axis first, got {other:?}"),
    };
    let texts = surface.texts();
    assert_eq!(texts.len(), 1);
    let (parent, label) = texts[0];
    assert_eq!(parent, Some(group));
    assert_eq!(label.text, "Similaritate");
    assert_eq!(label.rotate, Some(-90.0));
    assert_eq!(label.y, Some(6.0));
    assert_eq!(label.dy.as_deref(), Some(".71em"));
    assert_eq!(label.anchor, TextAnchor::End);
}

#[test]
fn one_rect_per_datum_in_input_order() {
    let values: Vec<f64> = (0..25).map(|idx| f64::from(idx) / 24.0).collect();
    let mut container = RecordingContainer::new(900.0);
    render(&mut container, &data(&values));
    let rects = container.surfaces[0].rects();
    assert_eq!(rects.len(), values.len());
    for (rect, value) in rects.iter().zip(&values) {
        assert!((rect.height - 250.0 * value).abs() < 1e-9);
    }
    assert!(rects.windows(2).all(|pair| pair[0].x < pair[1].x));
}

#[test]
fn repeated_renders_accumulate() {
    let mut container = RecordingContainer::new(600.0);
    render(&mut container, &data(&[0.3]));
    render(&mut container, &data(&[0.6, 0.9]));
    assert_eq!(container.surfaces.len(), 2);
    assert_eq!(container.clears, 0);
    assert_eq!(container.surfaces[0].rects().len(), 1);
    assert_eq!(container.surfaces[1].rects().len(), 2);
}

#[test]
fn degenerate_container_still_renders() {
    for width in [0.0, 40.0, 80.0, -10.0] {
        let mut container = RecordingContainer::new(width);
        render(&mut container, &data(&[0.5, 0.7]));
        let surface = &container.surfaces[0];
        assert_eq!(surface.rects().len(), 2);
        assert_eq!(surface.axes().len(), 1);
    }
}

#[test]
fn nan_similarity_yields_undefined_bar() {
    let mut container = RecordingContainer::new(600.0);
    render(&mut container, &data(&[f64::NAN, 0.5]));
    let rects = container.surfaces[0].rects();
    assert!(rects[0].y.is_nan());
    assert!(rects[0].height.is_nan());
    assert_eq!(rects[1].height, 125.0);
}

#[test]
fn custom_config_changes_geometry() {
    let config = ChartConfig {
        total_height: 200.0,
        band_padding: 0.0,
        tick_count: 5,
        axis_label: "Similarity".into(),
        ..ChartConfig::default()
    };
    let mut container = RecordingContainer::new(380.0);
    render_with(&mut container, &data(&[1.0, 1.0, 1.0]), &config);
    let surface = &container.surfaces[0];
    assert_eq!(surface.spec.height, 200.0);
    let rects = surface.rects();
    assert_eq!(rects[0].height, 150.0);
    assert_eq!(rects[0].width, 100.0);
    assert_eq!(rects[0].x, 0.0);
    assert_eq!(surface.axes()[0].ticks.len(), 6);
    assert_eq!(surface.texts()[0].1.text, "Similarity");
}
