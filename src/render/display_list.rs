//! A recording [`DrawSurface`] that captures draw calls instead of
//! rasterizing them.

use crate::render::backend::{DrawSurface, Rgba8, TextAnchor};
use kurbo::Point;

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        origin: Point,
        width: f64,
        height: f64,
        color: Rgba8,
    },
    StrokeRect {
        origin: Point,
        width: f64,
        height: f64,
        stroke_px: f64,
        color: Rgba8,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba8,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        stroke_px: f64,
        color: Rgba8,
    },
    StrokeLine {
        from: Point,
        to: Point,
        stroke_px: f64,
        color: Rgba8,
    },
    Text {
        text: String,
        pos: Point,
        size_px: f64,
        anchor: TextAnchor,
        color: Rgba8,
    },
}

/// An insertion-ordered list of recorded draw calls.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl DrawSurface for DisplayList {
    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Rgba8) {
        self.ops.push(DrawOp::FillRect {
            origin,
            width,
            height,
            color,
        });
    }

    fn stroke_rect(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        stroke_px: f64,
        color: Rgba8,
    ) {
        self.ops.push(DrawOp::StrokeRect {
            origin,
            width,
            height,
            stroke_px,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke_px: f64, color: Rgba8) {
        self.ops.push(DrawOp::StrokeCircle {
            center,
            radius,
            stroke_px,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke_px: f64, color: Rgba8) {
        self.ops.push(DrawOp::StrokeLine {
            from,
            to,
            stroke_px,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Point, size_px: f64, anchor: TextAnchor, color: Rgba8) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            pos,
            size_px,
            anchor,
            color,
        });
    }
}
