//! Scene primitives and the drawing capabilities a chart is rendered through.

use serde::{Deserialize, Serialize};

use crate::scale::{LinearScale, Scale};
use crate::ticks::{format_percent, percent_precision, tick_step};

/// Axis-aligned rectangle in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectNode {
    /// CSS class attached to the element.
    pub class: String,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// Horizontal alignment of a text node relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centred on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

impl TextAnchor {
    /// SVG `text-anchor` keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Single labelled tick of an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Domain value the tick marks.
    pub value: f64,
    /// Pixel offset along the axis.
    pub offset: f64,
    /// Formatted label.
    pub label: String,
}

/// Fully resolved left axis: ticks are already placed and labelled, and
/// tick marks and labels extend towards negative x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisNode {
    /// CSS class attached to the axis group.
    pub class: String,
    /// Pixel extent covered by the axis line, ordered `(min, max)`.
    pub extent: (f64, f64),
    /// Length of the tick marks.
    pub inner_tick_size: f64,
    /// Length of the caps at both ends of the axis line.
    pub outer_tick_size: f64,
    /// Gap between a tick mark and its label.
    pub tick_padding: f64,
    /// Ticks in ascending domain order.
    pub ticks: Vec<AxisTick>,
}

impl AxisNode {
    /// Builds a percent-labelled axis for a linear scale with roughly
    /// `count` ticks.
    pub fn percent(class: impl Into<String>, scale: &LinearScale, count: usize) -> Self {
        let (d0, d1) = scale.domain();
        let precision = tick_step(d0, d1, count).map_or(0, percent_precision);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|value| AxisTick {
                value,
                offset: scale.scale(value),
                label: format_percent(value, precision),
            })
            .collect();
        Self {
            class: class.into(),
            extent: scale.range_extent(),
            inner_tick_size: 6.0,
            outer_tick_size: 6.0,
            tick_padding: 3.0,
            ticks,
        }
    }

    /// Signed x coordinate of the end of each tick mark.
    pub fn tick_end(&self) -> f64 {
        -self.inner_tick_size
    }

    /// Signed x coordinate of the anchor of each tick label.
    pub fn label_offset(&self) -> f64 {
        -(self.inner_tick_size.max(0.0) + self.tick_padding)
    }
}

/// Free-standing or axis-attached text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    /// Text content.
    pub text: String,
    /// Rotation in degrees applied before positioning.
    #[serde(default)]
    pub rotate: Option<f64>,
    /// Anchor y coordinate.
    #[serde(default)]
    pub y: Option<f64>,
    /// Baseline shift, as an SVG length such as `.71em`.
    #[serde(default)]
    pub dy: Option<String>,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
}

impl TextNode {
    /// Creates start-anchored text at the origin.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rotate: None,
            y: None,
            dy: None,
            anchor: TextAnchor::Start,
        }
    }

    /// Rotates the text by `degrees`.
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    /// Sets the anchor y coordinate.
    pub fn at_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    /// Sets the baseline shift.
    pub fn with_dy(mut self, dy: impl Into<String>) -> Self {
        self.dy = Some(dy.into());
        self
    }

    /// Sets the horizontal alignment.
    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// Handle to a group previously appended to a [`DrawSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(usize);

impl GroupId {
    /// Creates a handle from its raw index.
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw index of the handle.
    pub fn as_raw(&self) -> usize {
        self.0
    }
}

/// Outer size and plot origin of a newly created surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    /// Outer width, margins included.
    pub width: f64,
    /// Outer height, margins included.
    pub height: f64,
    /// Translation applied to every node drawn on the surface.
    pub origin: (f64, f64),
}

/// Append-only drawing target. Coordinates are relative to the surface
/// origin.
pub trait DrawSurface {
    /// Appends a rectangle.
    fn append_rect(&mut self, rect: RectNode);

    /// Appends an axis group and returns a handle for attaching children.
    fn append_axis(&mut self, axis: AxisNode) -> GroupId;

    /// Appends text, either inside `parent` or directly on the surface.
    fn append_text(&mut self, parent: Option<GroupId>, text: TextNode);
}

/// Display region able to host drawing surfaces.
pub trait Container {
    /// Surface type created by [`Container::append_surface`].
    type Surface: DrawSurface;

    /// Current rendered width of the region.
    fn measure_width(&self) -> f64;

    /// Appends a new surface after any existing content.
    fn append_surface(&mut self, spec: SurfaceSpec) -> &mut Self::Surface;

    /// Removes every surface hosted so far.
    fn clear(&mut self);
}
