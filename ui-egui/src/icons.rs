// SPDX-License-Identifier: MIT OR Apache-2.0

//! Icon primitives: small semantic glyphs for resource units, gold and
//! score, plus the two composite row renderers over a resource vector.
//!
//! All functions are stateless; they draw at the given board-space
//! coordinates and pass every style explicitly.

use harborlords_core::{ResourceVector, UnitKind};

use crate::palette;
use crate::surface::{Align, Color, Point, Rect, Stroke, Surface, TextStyle};

/// Hexagon edge length of a unit glyph.
const UNIT_EDGE: f32 = 13.0;
/// Side length of the gold glyph's rounded square.
const GOLD_EDGE: f32 = 22.0;
/// Horizontal advance of one count+glyph group in a compact row.
const GROUP_ADVANCE: f32 = 53.0;
/// Horizontal advance of one slot in the full row.
const FULL_ADVANCE: f32 = 63.0;

const COUNT_TEXT: TextStyle = TextStyle::plain(20.0);

/// Draw a hexagonal unit marker centered at `(x, y)`.
///
/// The outline flips to white for the black unit so it stays visible on
/// dark card art.
pub fn unit_glyph(surface: &mut dyn Surface, x: f32, y: f32, kind: UnitKind) {
    let fill = Color::from_rgb3(kind.rgb());
    let outline = if kind == UnitKind::Navigator {
        palette::PAPER
    } else {
        palette::INK
    };
    let e = UNIT_EDGE;
    let sin60 = (std::f32::consts::PI / 3.0).sin();
    let points = [
        Point::new(x, y + e),
        Point::new(x + e * sin60, y + 0.5 * e),
        Point::new(x + e * sin60, y - 0.5 * e),
        Point::new(x, y - e),
        Point::new(x - e * sin60, y - 0.5 * e),
        Point::new(x - e * sin60, y + 0.5 * e),
    ];
    let stroke = Stroke::new(1.0, outline);
    surface.fill_polygon(&points, fill, stroke);
    // Facet lines from the center to the two upper corners.
    let center = Point::new(x, y);
    surface.line(center, Point::new(x + e * sin60, y - 0.5 * e), stroke);
    surface.line(center, Point::new(x - e * sin60, y - 0.5 * e), stroke);
}

/// Draw the gold (currency) marker centered at `(x, y)`.
pub fn gold_glyph(surface: &mut dyn Surface, x: f32, y: f32) {
    let e = GOLD_EDGE;
    let outline = Stroke::new(1.0, palette::INK);
    surface.rounded_rect(
        Rect::new(x - e / 2.0, y - e / 2.0, e, e),
        None,
        Some(outline),
    );
    surface.circle(Point::new(x, y), e / 6.0, Some(palette::GOLD), Some(outline));
}

/// Draw a score badge centered at `(x, y)` with `value` inside it.
pub fn score_badge(surface: &mut dyn Surface, x: f32, y: f32, value: u32) {
    let spike = UNIT_EDGE * 0.5;
    let points = [
        Point::new(x + 10.0, y + 10.0),
        Point::new(x + 10.0 + spike, y),
        Point::new(x + 10.0, y - 10.0),
        Point::new(x - 10.0, y - 10.0),
        Point::new(x - 10.0 - spike, y),
        Point::new(x - 10.0, y + 10.0),
    ];
    surface.fill_polygon(&points, palette::BADGE, Stroke::new(1.0, palette::INK));
    surface.text(
        Point::new(x, y + 6.0),
        Align::Center,
        &value.to_string(),
        TextStyle::bold(18.0),
        palette::PAPER,
    );
}

/// Full composite row: all six slots at fixed spacing, zeros included.
///
/// Used on player boards where columns must line up between players.
/// The score slot is rendered as a badge.
pub fn icon_row(
    surface: &mut dyn Surface,
    vector: &ResourceVector,
    x: f32,
    y: f32,
    count_color: Color,
) {
    for kind in UnitKind::ALL {
        let k = kind.slot() as f32;
        surface.text(
            Point::new(x - 118.0 + FULL_ADVANCE * k, y + 7.0),
            Align::Center,
            &format!("{}x", vector.unit(kind)),
            COUNT_TEXT,
            count_color,
        );
        unit_glyph(surface, x - 93.0 + FULL_ADVANCE * k, y, kind);
    }
    surface.text(
        Point::new(x - 118.0 + FULL_ADVANCE * 4.0, y + 7.0),
        Align::Center,
        &format!("{}x", vector.gold()),
        COUNT_TEXT,
        count_color,
    );
    gold_glyph(surface, x - 90.0 + FULL_ADVANCE * 4.0, y);
    score_badge(surface, x - 90.0 + 59.0 * 5.0, y, vector.score());
}

/// Compact composite row: advances a cursor left-to-right, skipping any
/// slot whose count is zero, so zero slots leave no visual gap. The score
/// slot becomes a badge and is omitted entirely when zero.
pub fn compact_icon_row(
    surface: &mut dyn Surface,
    vector: &ResourceVector,
    x: f32,
    y: f32,
    count_color: Color,
) {
    let mut cursor = x;
    for kind in UnitKind::ALL {
        let count = vector.unit(kind);
        if count == 0 {
            continue;
        }
        surface.text(
            Point::new(cursor, y + 7.0),
            Align::Center,
            &format!("{count}x"),
            COUNT_TEXT,
            count_color,
        );
        unit_glyph(surface, cursor + 25.0, y, kind);
        cursor += GROUP_ADVANCE;
    }
    if vector.gold() != 0 {
        surface.text(
            Point::new(cursor, y + 7.0),
            Align::Center,
            &format!("{}x", vector.gold()),
            COUNT_TEXT,
            count_color,
        );
        gold_glyph(surface, cursor + 25.0, y);
        cursor += GROUP_ADVANCE;
    }
    if vector.score() != 0 {
        score_badge(surface, cursor + 10.0, y, vector.score());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{DrawCall, RecordingSurface};

    #[test]
    fn compact_row_skips_zero_slots_without_gaps() {
        let mut surface = RecordingSurface::new();
        let vector = ResourceVector::from([0, 2, 0, 1, 3, 5]);
        compact_icon_row(&mut surface, &vector, 100.0, 50.0, palette::INK);

        // Three count+glyph groups plus the badge value.
        assert_eq!(surface.texts(), vec!["2x", "1x", "3x", "5"]);

        // Groups advance contiguously: no gap where the zero slots were.
        let count_xs: Vec<f32> = surface
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { pos, text, .. } if text.ends_with('x') => Some(pos.x),
                _ => None,
            })
            .collect();
        assert_eq!(count_xs, vec![100.0, 153.0, 206.0]);

        // Two hexagons (units B and D) plus one badge polygon.
        assert_eq!(surface.polygons().len(), 3);
    }

    #[test]
    fn compact_row_omits_badge_when_score_is_zero() {
        let mut surface = RecordingSurface::new();
        let vector = ResourceVector::from([1, 0, 0, 0, 0, 0]);
        compact_icon_row(&mut surface, &vector, 0.0, 0.0, palette::INK);
        assert_eq!(surface.polygons().len(), 1);
        assert_eq!(surface.texts(), vec!["1x"]);
    }

    #[test]
    fn full_row_always_draws_six_slots() {
        let mut surface = RecordingSurface::new();
        let vector = ResourceVector::default();
        icon_row(&mut surface, &vector, 250.0, 1450.0, palette::INK);

        // Five "0x" counts (four units + gold) and the badge "0".
        assert_eq!(surface.texts(), vec!["0x", "0x", "0x", "0x", "0x", "0"]);
        // Four hexagons plus the badge polygon.
        assert_eq!(surface.polygons().len(), 5);
    }

    #[test]
    fn navigator_glyph_uses_white_outline() {
        let mut surface = RecordingSurface::new();
        unit_glyph(&mut surface, 0.0, 0.0, UnitKind::Navigator);
        match &surface.calls[0] {
            DrawCall::Polygon { stroke, .. } => assert_eq!(stroke.color, palette::PAPER),
            other => panic!("expected polygon, got {other:?}"),
        }
    }
}
