// SPDX-License-Identifier: MIT OR Apache-2.0

//! Harborlords Core - Shared Game-State Model
//!
//! This crate provides the data model shared between the authoritative
//! engine and the presentation layer:
//! - Immutable state snapshots and the board-zone entities inside them
//! - Resource vectors used for requirements, rewards and holdings
//! - The move enum submitted back to the engine
//! - Structural validation of incoming snapshots

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod resources;
pub mod snapshot;

pub use resources::{ResourceVector, UnitKind};
pub use snapshot::{
    Building, BuildingPlot, ControlState, GameData, MarketBuilding, Player, PlotBuilding,
    QuestOffer, SnapshotError, StateSnapshot, BUILDING_PLOTS, CITY_BUILDINGS, MARKET_SLOTS,
    QUEST_OFFERS,
};

use serde::{Deserialize, Serialize};

/// Meeple color assigned to a player for the whole game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Yellow,
    Blue,
    Red,
    Green,
    Black,
}

impl PlayerColor {
    /// RGB projection used for agent meeples and player boards
    pub fn rgb(self) -> [u8; 3] {
        match self {
            PlayerColor::Yellow => [240, 200, 40],
            PlayerColor::Blue => [40, 90, 200],
            PlayerColor::Red => [200, 40, 40],
            PlayerColor::Green => [40, 160, 70],
            PlayerColor::Black => [25, 25, 25],
        }
    }

    /// Stable lowercase name, used to key per-color assets
    /// (e.g. `yellow_agent.png`).
    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Yellow => "yellow",
            PlayerColor::Blue => "blue",
            PlayerColor::Red => "red",
            PlayerColor::Green => "green",
            PlayerColor::Black => "black",
        }
    }
}

/// Turn stage a player can be parked in by the engine.
///
/// Only the stages the presentation layer gates on are modelled; a player
/// with no active stage is simply absent from the stage map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Player may buy one building from the market, or decline
    BuyBuilding,
    /// Player may complete one held quest, or end the turn
    CompleteQuest,
}

/// Which board zone a placed agent targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotZone {
    /// One of the player-built building plots
    PlayerPlot,
    /// One of the fixed city buildings
    CityBuilding,
}

/// A move submitted to the authoritative engine.
///
/// The client performs no legality checking; the engine validates every
/// move and answers with its next snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Take one of the open quest offers
    ChooseQuest { slot: usize },
    /// Place an agent on a vacant building slot
    PlaceAgent { zone: PlotZone, slot: usize },
    /// Buy the market building at `slot`, or decline (`None`)
    BuyBuilding { slot: Option<usize> },
    /// Complete the held quest at `quest`, or end the turn (`None`)
    CompleteQuest { quest: Option<usize> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_roundtrip_through_serde() {
        let moves = [
            Move::ChooseQuest { slot: 2 },
            Move::PlaceAgent {
                zone: PlotZone::PlayerPlot,
                slot: 7,
            },
            Move::BuyBuilding { slot: None },
            Move::CompleteQuest { quest: Some(1) },
        ];
        for mv in moves {
            let json = serde_json::to_string(&mv).unwrap();
            let back: Move = serde_json::from_str(&json).unwrap();
            assert_eq!(mv, back);
        }
    }

    #[test]
    fn color_names_are_distinct() {
        let colors = [
            PlayerColor::Yellow,
            PlayerColor::Blue,
            PlayerColor::Red,
            PlayerColor::Green,
            PlayerColor::Black,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
