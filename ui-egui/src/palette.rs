// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed colors used across the board rendering.

use crate::surface::Color;

/// Card and label text.
pub const INK: Color = Color::rgb(0, 0, 0);
/// Text on dark backgrounds.
pub const PAPER: Color = Color::rgb(255, 255, 255);
/// Quest and building card faces.
pub const CARD_FACE: Color = Color::rgb(255, 255, 255);
/// Parchment squares on city buildings.
pub const PARCHMENT: Color = Color::rgb(235, 217, 184);
/// Action buttons (end turn, decline purchase).
pub const BUTTON: Color = Color::rgb(255, 110, 74);
/// Gold coin fill.
pub const GOLD: Color = Color::rgb(255, 223, 0);
/// Score badge fill.
pub const BADGE: Color = Color::rgb(200, 30, 30);
/// Fallback fill behind zones whose art has not loaded.
pub const BOARD_BG: Color = Color::rgb(46, 38, 30);
