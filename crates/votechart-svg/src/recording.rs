//! Drawing backend that records calls instead of producing markup.

use serde::{Deserialize, Serialize};
use votechart_core::{
    AxisNode, Container, DrawSurface, GroupId, RectNode, SurfaceSpec, TextNode,
};

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    Rect(RectNode),
    Axis {
        group: GroupId,
        axis: AxisNode,
    },
    Text {
        parent: Option<GroupId>,
        text: TextNode,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingSurface {
    pub spec: SurfaceSpec,
    pub calls: Vec<DrawCall>,
    #[serde(skip)]
    next_group: usize,
}

impl RecordingSurface {
    pub fn new(spec: SurfaceSpec) -> Self {
        Self {
            spec,
            calls: Vec::new(),
            next_group: 0,
        }
    }

    pub fn rects(&self) -> Vec<&RectNode> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Rect(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    pub fn axes(&self) -> Vec<&AxisNode> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Axis { axis, .. } => Some(axis),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(Option<GroupId>, &TextNode)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { parent, text } => Some((*parent, text)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn append_rect(&mut self, rect: RectNode) {
        self.calls.push(DrawCall::Rect(rect));
    }

    fn append_axis(&mut self, axis: AxisNode) -> GroupId {
        let group = GroupId::from_raw(self.next_group);
        self.next_group += 1;
        self.calls.push(DrawCall::Axis { group, axis });
        group
    }

    fn append_text(&mut self, parent: Option<GroupId>, text: TextNode) {
        self.calls.push(DrawCall::Text { parent, text });
    }
}

/// Container with a fixed measured width that keeps every surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingContainer {
    pub width: f64,
    pub surfaces: Vec<RecordingSurface>,
    /// Number of times the container was cleared.
    pub clears: usize,
}

impl RecordingContainer {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            surfaces: Vec::new(),
            clears: 0,
        }
    }
}

impl Container for RecordingContainer {
    type Surface = RecordingSurface;

    fn measure_width(&self) -> f64 {
        self.width
    }

    fn append_surface(&mut self, spec: SurfaceSpec) -> &mut RecordingSurface {
        self.surfaces.push(RecordingSurface::new(spec));
        let last = self.surfaces.len() - 1;
        &mut self.surfaces[last]
    }

    fn clear(&mut self) {
        self.surfaces.clear();
        self.clears += 1;
    }
}
