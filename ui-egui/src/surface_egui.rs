// SPDX-License-Identifier: MIT OR Apache-2.0

//! `egui` implementation of the drawing surface: maps board-space
//! coordinates onto a scaled screen rectangle and resolves image blits
//! through a texture store fed by the art cache.

use std::collections::HashMap;

use eframe::egui;

use crate::art::ArtCache;
use crate::surface::{Align, Color, Point, Rect, Stroke, Surface, TextStyle};

/// GPU textures for every decoded image, keyed by asset name.
#[derive(Default)]
pub struct TextureStore {
    textures: HashMap<String, egui::TextureHandle>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload any newly decoded image from the art cache.
    pub fn sync(&mut self, ctx: &egui::Context, art: &ArtCache) {
        for (name, image) in art.ready_images() {
            if self.textures.contains_key(name) {
                continue;
            }
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [image.width as usize, image.height as usize],
                &image.rgba,
            );
            let handle = ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR);
            self.textures.insert(name.to_string(), handle);
        }
    }

    pub fn get(&self, name: &str) -> Option<&egui::TextureHandle> {
        self.textures.get(name)
    }
}

/// One frame's drawing target: an `egui` painter plus the board-to-screen
/// transform.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    scale: f32,
    textures: &'a TextureStore,
}

impl<'a> EguiSurface<'a> {
    pub fn new(
        painter: &'a egui::Painter,
        origin: egui::Pos2,
        scale: f32,
        textures: &'a TextureStore,
    ) -> Self {
        Self {
            painter,
            origin,
            scale,
            textures,
        }
    }

    fn pos(&self, p: Point) -> egui::Pos2 {
        egui::Pos2::new(self.origin.x + p.x * self.scale, self.origin.y + p.y * self.scale)
    }

    fn rect(&self, r: Rect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.pos(Point::new(r.x, r.y)),
            egui::Vec2::new(r.w * self.scale, r.h * self.scale),
        )
    }

    fn color(c: Color) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }

    fn stroke(&self, s: Stroke) -> egui::Stroke {
        egui::Stroke::new(s.width * self.scale, Self::color(s.color))
    }

    fn font(&self, style: TextStyle) -> egui::FontId {
        // The default font atlas carries no bold face; size alone has to do.
        egui::FontId::proportional(style.px * self.scale)
    }
}

impl Surface for EguiSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.painter.rect_filled(self.rect(rect), 0.0, Self::color(color));
    }

    fn rounded_rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) {
        let radius = (rect.w + rect.h) / 10.0 * self.scale;
        self.painter.rect(
            self.rect(rect),
            egui::Rounding::same(radius),
            fill.map(Self::color).unwrap_or(egui::Color32::TRANSPARENT),
            stroke.map(|s| self.stroke(s)).unwrap_or(egui::Stroke::NONE),
        );
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Color, stroke: Stroke) {
        let points = points.iter().map(|&p| self.pos(p)).collect();
        self.painter.add(egui::Shape::convex_polygon(
            points,
            Self::color(fill),
            self.stroke(stroke),
        ));
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.painter
            .line_segment([self.pos(from), self.pos(to)], self.stroke(stroke));
    }

    fn circle(&mut self, center: Point, radius: f32, fill: Option<Color>, stroke: Option<Stroke>) {
        self.painter.circle(
            self.pos(center),
            radius * self.scale,
            fill.map(Self::color).unwrap_or(egui::Color32::TRANSPARENT),
            stroke.map(|s| self.stroke(s)).unwrap_or(egui::Stroke::NONE),
        );
    }

    fn text(&mut self, pos: Point, align: Align, text: &str, style: TextStyle, color: Color) {
        let anchor = match align {
            Align::Left => egui::Align2::LEFT_BOTTOM,
            Align::Center => egui::Align2::CENTER_BOTTOM,
        };
        self.painter.text(
            self.pos(pos),
            anchor,
            text,
            self.font(style),
            Self::color(color),
        );
    }

    fn image(&mut self, name: &str, rect: Rect) {
        if let Some(texture) = self.textures.get(name) {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            self.painter
                .image(texture.id(), self.rect(rect), uv, egui::Color32::WHITE);
        }
    }
}
