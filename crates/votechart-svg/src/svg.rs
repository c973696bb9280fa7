//! SVG-backed container and drawing surface.

use votechart_core::{
    AxisNode, Container, DrawSurface, GroupId, RectNode, SurfaceSpec, TextNode,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Writes a coordinate the way a browser serialises a number: shortest
/// round-trip digits, whole numbers without a fraction, exponent notation
/// below `1e-6` and from `1e21` up, non-finite values as `NaN`/`Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".into()
    } else if value == f64::INFINITY {
        "Infinity".into()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".into()
    } else if value == 0.0 {
        "0".into()
    } else if value.abs() < 1e-6 || value.abs() >= 1e21 {
        let exp = format!("{value:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        format!("{value}")
    }
}

/// Escapes text content and attribute values.
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
enum SvgNode {
    Rect(RectNode),
    Axis {
        axis: AxisNode,
        children: Vec<TextNode>,
    },
    Text(TextNode),
}

/// One `<svg>` element with a translated plot group.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgSurface {
    spec: SurfaceSpec,
    nodes: Vec<SvgNode>,
}

impl SvgSurface {
    pub fn new(spec: SurfaceSpec) -> Self {
        Self {
            spec,
            nodes: Vec::new(),
        }
    }

    /// Number of `<rect>` elements drawn directly on the plot group.
    pub fn rect_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, SvgNode::Rect(_)))
            .count()
    }

    /// Number of axis groups.
    pub fn axis_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, SvgNode::Axis { .. }))
            .count()
    }

    /// Markup of the element as embedded in an HTML page.
    pub fn to_markup(&self) -> String {
        self.write(false)
    }

    /// Standalone SVG document with the namespace declared.
    pub fn to_svg(&self) -> String {
        self.write(true)
    }

    fn write(&self, standalone: bool) -> String {
        let mut parts = Vec::with_capacity(self.nodes.len() + 4);
        let ns = if standalone {
            format!(" xmlns=\"{SVG_NS}\"")
        } else {
            String::new()
        };
        parts.push(format!(
            "<svg{ns} width=\"{w}\" height=\"{h}\">",
            w = format_number(self.spec.width),
            h = format_number(self.spec.height),
        ));
        parts.push(format!(
            "<g transform=\"translate({x},{y})\">",
            x = format_number(self.spec.origin.0),
            y = format_number(self.spec.origin.1),
        ));
        for node in &self.nodes {
            match node {
                SvgNode::Rect(rect) => parts.push(write_rect(rect)),
                SvgNode::Axis { axis, children } => parts.push(write_axis(axis, children)),
                SvgNode::Text(text) => parts.push(write_text(text)),
            }
        }
        parts.push("</g></svg>".into());
        parts.join("")
    }
}

fn write_rect(rect: &RectNode) -> String {
    format!(
        "<rect class=\"{class}\" x=\"{x}\" width=\"{w}\" y=\"{y}\" height=\"{h}\"></rect>",
        class = escape_xml(&rect.class),
        x = format_number(rect.x),
        w = format_number(rect.width),
        y = format_number(rect.y),
        h = format_number(rect.height),
    )
}

fn write_axis(axis: &AxisNode, children: &[TextNode]) -> String {
    let mut out = format!("<g class=\"{}\">", escape_xml(&axis.class));
    for tick in &axis.ticks {
        out.push_str(&format!(
            "<g class=\"tick\" transform=\"translate(0,{offset})\">\
             <line x2=\"{x2}\" y2=\"0\"></line>\
             <text dy=\".32em\" x=\"{x}\" y=\"0\" style=\"text-anchor: end;\">{label}</text></g>",
            offset = format_number(tick.offset),
            x2 = format_number(axis.tick_end()),
            x = format_number(axis.label_offset()),
            label = escape_xml(&tick.label),
        ));
    }
    let cap = format_number(-axis.outer_tick_size);
    out.push_str(&format!(
        "<path class=\"domain\" d=\"M{cap},{lo}H0V{hi}H{cap}\"></path>",
        lo = format_number(axis.extent.0),
        hi = format_number(axis.extent.1),
    ));
    for child in children {
        out.push_str(&write_text(child));
    }
    out.push_str("</g>");
    out
}

fn write_text(text: &TextNode) -> String {
    let mut attrs = String::new();
    if let Some(degrees) = text.rotate {
        attrs.push_str(&format!(" transform=\"rotate({})\"", format_number(degrees)));
    }
    if let Some(y) = text.y {
        attrs.push_str(&format!(" y=\"{}\"", format_number(y)));
    }
    if let Some(dy) = &text.dy {
        attrs.push_str(&format!(" dy=\"{}\"", escape_xml(dy)));
    }
    format!(
        "<text{attrs} style=\"text-anchor: {anchor};\">{content}</text>",
        anchor = text.anchor.as_str(),
        content = escape_xml(&text.text),
    )
}

impl DrawSurface for SvgSurface {
    fn append_rect(&mut self, rect: RectNode) {
        self.nodes.push(SvgNode::Rect(rect));
    }

    fn append_axis(&mut self, axis: AxisNode) -> GroupId {
        self.nodes.push(SvgNode::Axis {
            axis,
            children: Vec::new(),
        });
        GroupId::from_raw(self.nodes.len() - 1)
    }

    fn append_text(&mut self, parent: Option<GroupId>, text: TextNode) {
        if let Some(id) = parent {
            if let Some(SvgNode::Axis { children, .. }) = self.nodes.get_mut(id.as_raw()) {
                children.push(text);
                return;
            }
        }
        self.nodes.push(SvgNode::Text(text));
    }
}

/// Block element hosting every chart appended to it, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgContainer {
    width: f64,
    surfaces: Vec<SvgSurface>,
}

impl SvgContainer {
    /// Creates an empty container that measures as `width` pixels.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            surfaces: Vec::new(),
        }
    }

    pub fn surfaces(&self) -> &[SvgSurface] {
        &self.surfaces
    }

    /// HTML fragment holding every appended surface.
    pub fn to_html(&self) -> String {
        let body: String = self.surfaces.iter().map(SvgSurface::to_markup).collect();
        format!("<div class=\"vote-similarity-chart\">{body}</div>")
    }
}

impl Container for SvgContainer {
    type Surface = SvgSurface;

    fn measure_width(&self) -> f64 {
        self.width
    }

    fn append_surface(&mut self, spec: SurfaceSpec) -> &mut SvgSurface {
        self.surfaces.push(SvgSurface::new(spec));
        let last = self.surfaces.len() - 1;
        &mut self.surfaces[last]
    }

    fn clear(&mut self) {
        self.surfaces.clear();
    }
}
