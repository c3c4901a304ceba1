// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drawing-surface abstraction.
//!
//! The scene renderer is written against [`Surface`] so it runs unchanged
//! over a real `egui` painter and over the recording surface used in tests.
//! Every primitive takes its style explicitly; callers never rely on style
//! state carrying over from one call to the next.

/// A point in board space (logical pixels, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in board space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment: the right and bottom edges are excluded.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_rgb3(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

/// Stroke style for outlined primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Horizontal anchoring for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Text sizing; `bold` is advisory for backends without a bold face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub px: f32,
    pub bold: bool,
}

impl TextStyle {
    pub const fn plain(px: f32) -> Self {
        Self { px, bold: false }
    }

    pub const fn bold(px: f32) -> Self {
        Self { px, bold: true }
    }
}

/// The vector+raster drawing capability the renderer draws against.
///
/// Image blits are keyed by asset name; whether the image is actually
/// available is the art cache's concern, not the surface's.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn rounded_rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>);
    fn fill_polygon(&mut self, points: &[Point], fill: Color, stroke: Stroke);
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);
    fn circle(&mut self, center: Point, radius: f32, fill: Option<Color>, stroke: Option<Stroke>);
    fn text(&mut self, pos: Point, align: Align, text: &str, style: TextStyle, color: Color);
    fn image(&mut self, name: &str, rect: Rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_containment_is_half_open() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(109.9, 69.9));
        assert!(!r.contains(110.0, 30.0));
        assert!(!r.contains(50.0, 70.0));
        assert!(!r.contains(9.9, 30.0));
    }

    #[test]
    fn rect_center() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(r.center(), Point::new(5.0, 10.0));
    }
}
