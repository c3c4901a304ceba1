// SPDX-License-Identifier: MIT OR Apache-2.0

//! State snapshots pushed whole by the authoritative engine.
//!
//! The client never mutates a snapshot; each render pass reads exactly one
//! snapshot to completion before consuming the next. `validate` checks the
//! structural invariants the presentation layer relies on (index ranges and
//! fixed collection lengths) without judging game legality, which stays the
//! engine's business.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resources::ResourceVector;
use crate::{PlayerColor, Stage};

/// Number of open quest offers on the board.
pub const QUEST_OFFERS: usize = 4;
/// Number of player-built building plots.
pub const BUILDING_PLOTS: usize = 10;
/// Number of fixed city buildings (three halls, six column buildings,
/// the builders' hall at index 6).
pub const CITY_BUILDINGS: usize = 10;
/// Number of market slots for purchasable buildings.
pub const MARKET_SLOTS: usize = 3;

/// An open quest card: what it asks for and what it pays out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestOffer {
    pub name: String,
    pub requirements: ResourceVector,
    pub rewards: ResourceVector,
}

impl QuestOffer {
    pub fn new(
        name: impl Into<String>,
        requirements: ResourceVector,
        rewards: ResourceVector,
    ) -> Self {
        Self {
            name: name.into(),
            requirements,
            rewards,
        }
    }
}

/// A building erected on a plot by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotBuilding {
    /// Reward paid to the player who places an agent here
    pub player_reward: ResourceVector,
    /// Kickback paid to the building's owner
    pub owner_reward: ResourceVector,
    /// Index of the owning player
    pub owner: usize,
}

/// One of the ten plots players can build on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingPlot {
    /// Index of the player whose agent occupies the plot, if any
    pub occupied_by: Option<usize>,
    /// The building standing on the plot, if one has been bought
    pub building: Option<PlotBuilding>,
}

/// One of the fixed city buildings printed on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    /// Reward paid for placing an agent here
    pub reward: ResourceVector,
    pub occupied_by: Option<usize>,
}

impl Building {
    pub fn new(name: impl Into<String>, reward: ResourceVector) -> Self {
        Self {
            name: name.into(),
            reward,
            occupied_by: None,
        }
    }
}

/// A building sitting in the market, waiting to be bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketBuilding {
    pub name: String,
    /// Purchase price in gold
    pub cost: u32,
    pub player_reward: ResourceVector,
    pub owner_reward: ResourceVector,
    /// Score awarded to the buyer on purchase
    pub score_value: u32,
}

/// One player's public state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub color: PlayerColor,
    pub resources: ResourceVector,
    /// Held quest cards, in the order they were taken
    pub quests: Vec<QuestOffer>,
    /// Number of intrigue cards in hand (contents are hidden)
    pub intrigue_count: u32,
}

impl Player {
    pub fn new(color: PlayerColor) -> Self {
        Self {
            color,
            resources: ResourceVector::default(),
            quests: Vec::new(),
            intrigue_count: 0,
        }
    }
}

/// The game-data section of a snapshot: every board-zone collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    pub quest_offers: Vec<QuestOffer>,
    pub building_plots: Vec<BuildingPlot>,
    pub city_buildings: Vec<Building>,
    /// Market slots; `None` means the slot is sold out
    pub market: Vec<Option<MarketBuilding>>,
    pub players: Vec<Player>,
}

/// The control section of a snapshot: whose turn it is and what they may do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub current_player: usize,
    /// Per-player active stage, indexed like `players`
    pub active_stages: Vec<Option<Stage>>,
    pub game_over: bool,
}

/// One immutable push of the full shared game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub game: GameData,
    pub control: ControlState,
}

/// Structural defects in an incoming snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("{collection} has {actual} entries, expected {expected}")]
    WrongLength {
        collection: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{field} references player {index} but only {players} players exist")]
    PlayerIndexOutOfRange {
        field: &'static str,
        index: usize,
        players: usize,
    },
    #[error("active_stages has {actual} entries for {players} players")]
    StageMapMismatch { actual: usize, players: usize },
}

impl StateSnapshot {
    /// Check the structural invariants the renderer relies on.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let players = self.game.players.len();
        let expect_len = |collection, expected, actual| {
            if actual != expected {
                Err(SnapshotError::WrongLength {
                    collection,
                    expected,
                    actual,
                })
            } else {
                Ok(())
            }
        };
        expect_len("quest_offers", QUEST_OFFERS, self.game.quest_offers.len())?;
        expect_len(
            "building_plots",
            BUILDING_PLOTS,
            self.game.building_plots.len(),
        )?;
        expect_len(
            "city_buildings",
            CITY_BUILDINGS,
            self.game.city_buildings.len(),
        )?;
        expect_len("market", MARKET_SLOTS, self.game.market.len())?;

        let check_player = |field, index: Option<usize>| match index {
            Some(i) if i >= players => Err(SnapshotError::PlayerIndexOutOfRange {
                field,
                index: i,
                players,
            }),
            _ => Ok(()),
        };
        for plot in &self.game.building_plots {
            check_player("building_plots.occupied_by", plot.occupied_by)?;
            if let Some(building) = &plot.building {
                check_player("building_plots.building.owner", Some(building.owner))?;
            }
        }
        for building in &self.game.city_buildings {
            check_player("city_buildings.occupied_by", building.occupied_by)?;
        }
        check_player("control.current_player", Some(self.control.current_player))?;

        if self.control.active_stages.len() != players {
            return Err(SnapshotError::StageMapMismatch {
                actual: self.control.active_stages.len(),
                players,
            });
        }
        Ok(())
    }

    /// Active stage of the given player, if any.
    pub fn stage_of(&self, player: usize) -> Option<Stage> {
        self.control.active_stages.get(player).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerColor;

    fn snapshot(players: usize) -> StateSnapshot {
        let colors = [
            PlayerColor::Yellow,
            PlayerColor::Blue,
            PlayerColor::Red,
            PlayerColor::Green,
            PlayerColor::Black,
        ];
        StateSnapshot {
            game: GameData {
                quest_offers: (0..QUEST_OFFERS)
                    .map(|i| {
                        QuestOffer::new(
                            format!("Quest {i}"),
                            ResourceVector::default(),
                            ResourceVector::default(),
                        )
                    })
                    .collect(),
                building_plots: vec![BuildingPlot::default(); BUILDING_PLOTS],
                city_buildings: (0..CITY_BUILDINGS)
                    .map(|i| Building::new(format!("Hall {i}"), ResourceVector::default()))
                    .collect(),
                market: vec![None; MARKET_SLOTS],
                players: colors[..players].iter().map(|&c| Player::new(c)).collect(),
            },
            control: ControlState {
                current_player: 0,
                active_stages: vec![None; players],
                game_over: false,
            },
        }
    }

    #[test]
    fn valid_snapshot_passes() {
        assert_eq!(snapshot(2).validate(), Ok(()));
    }

    #[test]
    fn occupancy_must_reference_a_player() {
        let mut snap = snapshot(2);
        snap.game.building_plots[3].occupied_by = Some(4);
        assert_eq!(
            snap.validate(),
            Err(SnapshotError::PlayerIndexOutOfRange {
                field: "building_plots.occupied_by",
                index: 4,
                players: 2,
            })
        );
    }

    #[test]
    fn collection_lengths_are_fixed() {
        let mut snap = snapshot(2);
        snap.game.quest_offers.pop();
        assert_eq!(
            snap.validate(),
            Err(SnapshotError::WrongLength {
                collection: "quest_offers",
                expected: QUEST_OFFERS,
                actual: QUEST_OFFERS - 1,
            })
        );
    }

    #[test]
    fn stage_map_must_cover_every_player() {
        let mut snap = snapshot(3);
        snap.control.active_stages.pop();
        assert!(matches!(
            snap.validate(),
            Err(SnapshotError::StageMapMismatch { .. })
        ));
    }

    #[test]
    fn stage_of_flattens_missing_entries() {
        let mut snap = snapshot(2);
        snap.control.active_stages[1] = Some(Stage::BuyBuilding);
        assert_eq!(snap.stage_of(0), None);
        assert_eq!(snap.stage_of(1), Some(Stage::BuyBuilding));
        assert_eq!(snap.stage_of(9), None);
    }
}
