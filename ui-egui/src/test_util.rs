// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test helpers: a surface that records every draw call instead of
//! painting, so tests can assert on what a render pass produced.

use crate::surface::{Align, Color, Point, Rect, Stroke, Surface, TextStyle};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        rect: Rect,
        color: Color,
    },
    RoundedRect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Polygon {
        points: Vec<Point>,
        fill: Color,
        stroke: Stroke,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Text {
        pos: Point,
        align: Align,
        text: String,
        style: TextStyle,
        color: Color,
    },
    Image {
        name: String,
        rect: Rect,
    },
}

/// Surface that appends every call to a log.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded polygon calls (unit glyphs and score badges).
    pub fn polygons(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Polygon { .. }))
            .collect()
    }

    /// Recorded text contents, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Recorded image blits as (name, rect).
    pub fn images(&self) -> Vec<(&str, Rect)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Image { name, rect } => Some((name.as_str(), *rect)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn rounded_rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) {
        self.calls.push(DrawCall::RoundedRect { rect, fill, stroke });
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Color, stroke: Stroke) {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            fill,
            stroke,
        });
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.calls.push(DrawCall::Line { from, to, stroke });
    }

    fn circle(&mut self, center: Point, radius: f32, fill: Option<Color>, stroke: Option<Stroke>) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    fn text(&mut self, pos: Point, align: Align, text: &str, style: TextStyle, color: Color) {
        self.calls.push(DrawCall::Text {
            pos,
            align,
            text: text.to_string(),
            style,
            color,
        });
    }

    fn image(&mut self, name: &str, rect: Rect) {
        self.calls.push(DrawCall::Image {
            name: name.to_string(),
            rect,
        });
    }
}
