// SPDX-License-Identifier: MIT OR Apache-2.0

//! A self-contained sample snapshot so the client renders something
//! standalone. The real engine proxy pushes snapshots over the same
//! channel; this fixture also anchors the integration tests.

use harborlords_core::{
    Building, BuildingPlot, ControlState, GameData, MarketBuilding, Player, PlayerColor,
    PlotBuilding, QuestOffer, ResourceVector, Stage, StateSnapshot,
};

fn quest(name: &str, requirements: [u32; 6], rewards: [u32; 6]) -> QuestOffer {
    QuestOffer::new(name, requirements.into(), rewards.into())
}

/// A mid-game two-player position touching every board zone.
pub fn sample_snapshot() -> StateSnapshot {
    let mut plots = vec![BuildingPlot::default(); 10];
    plots[2].occupied_by = Some(1);
    plots[5] = BuildingPlot {
        occupied_by: Some(0),
        building: Some(PlotBuilding {
            player_reward: ResourceVector::new([0, 1, 0, 0], 0, 0),
            owner_reward: ResourceVector::new([0, 0, 0, 0], 2, 0),
            owner: 1,
        }),
    };

    let mut city: Vec<Building> = [
        ("Harbormaster's Office", [1, 1, 0, 0, 0, 0]),
        ("The Grey Gull", [0, 0, 2, 0, 0, 0]),
        ("Castle Ward", [0, 0, 0, 1, 0, 0]),
        ("Fish Market", [2, 0, 0, 0, 0, 0]),
        ("Smugglers' Dock", [0, 0, 1, 0, 2, 0]),
        ("Customs House", [0, 0, 0, 0, 4, 0]),
        ("Builders' Hall", [0, 0, 0, 0, 0, 0]),
        ("Rope Walk", [0, 2, 0, 0, 0, 0]),
        ("The Tidepool", [1, 0, 0, 1, 0, 0]),
        ("Lighthouse Point", [0, 0, 0, 0, 0, 1]),
    ]
    .into_iter()
    .map(|(name, reward)| Building::new(name, reward.into()))
    .collect();
    city[1].occupied_by = Some(0);

    let market = vec![
        Some(MarketBuilding {
            name: "Dockside Tavern".into(),
            cost: 4,
            player_reward: ResourceVector::new([0, 1, 0, 0], 0, 0),
            owner_reward: ResourceVector::new([0, 0, 0, 0], 1, 0),
            score_value: 1,
        }),
        Some(MarketBuilding {
            name: "Chandlery".into(),
            cost: 6,
            player_reward: ResourceVector::new([0, 0, 1, 1], 0, 0),
            owner_reward: ResourceVector::new([1, 0, 0, 0], 0, 0),
            score_value: 2,
        }),
        None,
    ];

    let mut first = Player::new(PlayerColor::Yellow);
    first.resources = ResourceVector::new([2, 1, 0, 1], 5, 3);
    first.quests = vec![
        quest(
            "Chart the Northern Straits",
            [0, 2, 0, 1, 0, 0],
            [0, 0, 0, 0, 4, 6],
        ),
        quest("Raise the Sunken Bell", [3, 0, 0, 0, 2, 0], [0, 0, 2, 0, 0, 8]),
    ];
    first.intrigue_count = 2;

    let mut second = Player::new(PlayerColor::Blue);
    second.resources = ResourceVector::new([0, 0, 2, 2], 3, 5);
    second.quests = vec![quest(
        "Break the Smuggling Ring",
        [1, 0, 2, 0, 0, 0],
        [0, 1, 0, 0, 3, 5],
    )];
    second.intrigue_count = 1;

    StateSnapshot {
        game: GameData {
            quest_offers: vec![
                quest("Escort the Spice Convoy", [0, 2, 0, 1, 3, 0], [0, 0, 0, 0, 6, 5]),
                quest("Map the Old Sewers", [2, 0, 1, 0, 0, 0], [0, 1, 0, 0, 2, 4]),
                quest("Recover the Tide Charts", [0, 0, 0, 2, 1, 0], [1, 0, 0, 0, 0, 7]),
                quest("Guard the Night Market", [1, 1, 0, 0, 2, 0], [0, 0, 1, 0, 3, 3]),
            ],
            building_plots: plots,
            city_buildings: city,
            market,
            players: vec![first, second],
        },
        control: ControlState {
            current_player: 0,
            active_stages: vec![Some(Stage::CompleteQuest), None],
            game_over: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_snapshot_is_structurally_valid() {
        assert!(sample_snapshot().validate().is_ok());
    }
}
