// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed board layout: one table of rectangles in board space, consumed by
//! the zone renderers. All coordinates are logical pixels on a 2000x3000
//! board; the surface implementation scales to the window.

use crate::surface::Rect;

pub const BOARD_W: f32 = 2000.0;
pub const BOARD_H: f32 = 3000.0;
pub const BOARD: Rect = Rect::new(0.0, 0.0, BOARD_W, BOARD_H);

/// Face-down quest deck next to the open offers.
pub const QUEST_DECK: Rect = Rect::new(50.0, 50.0, 300.0, 150.0);

/// Open quest offer card `i` (0..4), along the top edge.
pub fn quest_card(i: usize) -> Rect {
    Rect::new(400.0 + i as f32 * 350.0, 50.0, 300.0, 150.0)
}

/// Building plot `i` (0..10): five down the left edge, five down the right.
pub fn plot(i: usize) -> Rect {
    let col = (i / 5) as f32;
    Rect::new(
        50.0 + 1550.0 * col,
        250.0 + i as f32 * 200.0 - 1000.0 * col,
        150.0,
        150.0,
    )
}

/// Agent marker offset within plot `i`.
pub fn plot_agent(i: usize) -> Rect {
    let r = plot(i);
    Rect::new(r.x, r.y + 80.0, 60.0, 60.0)
}

/// One of the three large prebuilt halls (city buildings 0..3).
pub fn hall(k: usize) -> Rect {
    Rect::new(475.0 + k as f32 * 300.0, 300.0, 250.0, 150.0)
}

pub fn hall_parchment(k: usize) -> Rect {
    let r = hall(k);
    Rect::new(r.x, r.y + 75.0, 70.0, 70.0)
}

pub fn hall_agent(k: usize) -> Rect {
    let r = hall(k);
    Rect::new(r.x + 5.0, r.y + 80.0, 60.0, 60.0)
}

/// City-building index shown in column `col`, row `row` of the six small
/// column buildings: the right column holds 3..6 top-down, the left column
/// 9..6 top-down.
pub fn column_city_index(col: usize, row: usize) -> usize {
    if col == 1 {
        row + 3
    } else {
        9 - row
    }
}

/// Small column building at column `col` (0 left, 1 right), row `row` (0..3).
pub fn column_building(col: usize, row: usize) -> Rect {
    Rect::new(
        400.0 + col as f32 * 750.0,
        480.0 + row as f32 * 180.0,
        250.0,
        150.0,
    )
}

pub fn column_parchment(col: usize, row: usize) -> Rect {
    let r = column_building(col, row);
    Rect::new(r.x, r.y + 75.0, 70.0, 70.0)
}

pub fn column_agent(col: usize, row: usize) -> Rect {
    let r = column_building(col, row);
    Rect::new(r.x + 5.0, r.y + 80.0, 60.0, 60.0)
}

/// The builders' hall (city building 6).
pub const BUILDERS_HALL: Rect = Rect::new(700.0, 900.0, 400.0, 150.0);
/// Its clickable area is inset from the art.
pub const BUILDERS_HALL_REGION: Rect = Rect::new(700.0, 920.0, 400.0, 100.0);
pub const BUILDERS_HALL_PARCHMENT: Rect = Rect::new(700.0, 975.0, 70.0, 70.0);
pub const BUILDERS_HALL_AGENT: Rect = Rect::new(705.0, 980.0, 60.0, 60.0);
/// City-building index of the builders' hall.
pub const BUILDERS_HALL_INDEX: usize = 6;

/// Market card `i` (0..3).
pub fn market_card(i: usize) -> Rect {
    Rect::new(625.0 + i as f32 * 200.0, 1100.0, 150.0, 150.0)
}

/// "Buy nothing" button shown during the buying stage.
pub const MARKET_DECLINE: Rect = Rect::new(625.0, 1300.0, 300.0, 75.0);

/// Full board area of player `i` (0..2).
pub fn player_board(i: usize) -> Rect {
    Rect::new(50.0 + i as f32 * 800.0, 1400.0, 750.0, 1600.0)
}

/// White header strip holding the player's resource row.
pub fn player_header(i: usize) -> Rect {
    Rect::new(100.0 + i as f32 * 800.0, 1400.0, 650.0, 100.0)
}

/// "End turn" button shown during the quest-completion stage.
pub fn end_turn_button(i: usize) -> Rect {
    Rect::new(275.0 + i as f32 * 800.0, 1300.0, 300.0, 75.0)
}

/// Held quest card `j` on player `i`'s board.
pub fn player_quest_card(i: usize, j: usize) -> Rect {
    Rect::new(
        100.0 + i as f32 * 800.0,
        1550.0 + j as f32 * 200.0,
        300.0,
        150.0,
    )
}

/// Face-down intrigue card `j` on player `i`'s board.
pub fn intrigue_card(i: usize, j: usize) -> Rect {
    Rect::new(
        450.0 + i as f32 * 800.0,
        1550.0 + j as f32 * 350.0,
        150.0,
        300.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plots_split_five_per_edge() {
        assert_eq!(plot(0), Rect::new(50.0, 250.0, 150.0, 150.0));
        assert_eq!(plot(4), Rect::new(50.0, 1050.0, 150.0, 150.0));
        assert_eq!(plot(5), Rect::new(1600.0, 250.0, 150.0, 150.0));
        assert_eq!(plot(9), Rect::new(1600.0, 1050.0, 150.0, 150.0));
    }

    #[test]
    fn column_indices_cover_three_through_nine() {
        let mut indices: Vec<usize> = (0..2)
            .flat_map(|col| (0..3).map(move |row| column_city_index(col, row)))
            .collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![3, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn zone_rectangles_stay_on_the_board() {
        let mut rects = vec![QUEST_DECK, BUILDERS_HALL, MARKET_DECLINE];
        rects.extend((0..4).map(quest_card));
        rects.extend((0..10).map(plot));
        rects.extend((0..3).map(hall));
        rects.extend((0..3).map(market_card));
        rects.extend((0..2).map(player_board));
        for r in rects {
            assert!(r.x >= 0.0 && r.y >= 0.0, "{r:?}");
            assert!(r.x + r.w <= BOARD_W, "{r:?}");
            assert!(r.y + r.h <= BOARD_H, "{r:?}");
        }
    }
}
