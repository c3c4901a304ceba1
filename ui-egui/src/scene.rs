// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scene renderer: projects one state snapshot into a complete frame and a
//! complete, consistent click-region set.
//!
//! Rendering is a fixed sequence of zone renderers, each idempotent and
//! each following the same shape: fixed layout rectangle, background art,
//! content via the icon primitives, then a click region for every action
//! the snapshot's control section currently permits. Zones are isolated:
//! a defect in one zone is logged and skipped without blanking the rest of
//! the board, and the failing zone contributes no regions for the pass.
//!
//! When the snapshot says the game is over the registry is reset and the
//! whole board renders frozen, with no region registered anywhere.

use harborlords_core::{
    snapshot, Building, Move, PlotZone, QuestOffer, Stage, StateSnapshot,
};
use thiserror::Error;

use crate::art::{ArtCache, ArtStatus};
use crate::dispatch::MoveDispatcher;
use crate::icons;
use crate::layout;
use crate::palette;
use crate::regions::{ClickRegion, ClickRegionRegistry};
use crate::surface::{Align, Color, Point, Rect, Stroke, Surface, TextStyle};

/// Defects a zone renderer can hit on a malformed snapshot.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("missing {collection} entry {index}")]
    MissingEntry {
        collection: &'static str,
        index: usize,
    },
}

fn entry<'t, T>(
    slice: &'t [T],
    collection: &'static str,
    index: usize,
) -> Result<&'t T, SceneError> {
    slice
        .get(index)
        .ok_or(SceneError::MissingEntry { collection, index })
}

/// Per-pass context threaded through the zone renderers.
struct RenderPass<'a> {
    surface: &'a mut dyn Surface,
    art: &'a mut ArtCache,
    dispatcher: &'a MoveDispatcher,
    snapshot: &'a StateSnapshot,
    /// Game over: draw everything, register nothing.
    frozen: bool,
    /// Regions staged by the zone currently running; merged into the
    /// registry only if the zone finishes cleanly.
    staged: Vec<ClickRegion>,
}

impl RenderPass<'_> {
    /// Blit a background image if it is available; enqueue a load
    /// otherwise. Missing art never blocks the rest of the zone.
    fn image(&mut self, name: &str, rect: Rect) {
        if self.art.request(name) == ArtStatus::Ready {
            self.surface.image(name, rect);
        }
    }

    /// Stage a click region that submits `mv` when hit. No-op while the
    /// board is frozen.
    fn register_move(&mut self, rect: Rect, mv: Move) {
        if self.frozen {
            return;
        }
        let dispatcher = self.dispatcher.clone();
        self.staged
            .push(ClickRegion::new(rect, move || dispatcher.submit(mv)));
    }

    fn text(&mut self, x: f32, y: f32, text: &str, style: TextStyle, color: Color) {
        self.surface
            .text(Point::new(x, y), Align::Center, text, style, color);
    }
}

type ZoneFn = fn(&mut RenderPass<'_>) -> Result<(), SceneError>;

/// Zone renderers in draw order; later zones sit visually on top and their
/// regions win on overlapping dispatch.
const ZONES: &[(&str, ZoneFn)] = &[
    ("quest_board", quest_board),
    ("building_plots", building_plots),
    ("prebuilt_halls", prebuilt_halls),
    ("column_buildings", column_buildings),
    ("builders_hall", builders_hall),
    ("market", market),
    ("player_boards", player_boards),
];

/// The orchestrator. Owns nothing but the pass sequence number; surface,
/// registry and art cache are passed in per pass so tests can render
/// headless.
#[derive(Debug, Default)]
pub struct SceneRenderer {
    pass: u64,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one full render pass over `snapshot`. The registry is cleared
    /// first and fully repopulated before this returns; regions always
    /// reflect this pass's legality decisions, never a previous frame's.
    /// Returns the pass sequence number.
    pub fn render(
        &mut self,
        snapshot: &StateSnapshot,
        surface: &mut dyn Surface,
        registry: &mut ClickRegionRegistry,
        dispatcher: &MoveDispatcher,
        art: &mut ArtCache,
    ) -> u64 {
        self.pass += 1;
        registry.reset();
        art.begin_pass(self.pass);

        let frozen = snapshot.control.game_over;
        if frozen {
            // Freeze the board: regions stay cleared for the whole pass.
            registry.reset();
            tracing::info!(pass = self.pass, "game over; rendering frozen board");
        }

        let mut pass = RenderPass {
            surface,
            art,
            dispatcher,
            snapshot,
            frozen,
            staged: Vec::new(),
        };
        pass.surface.fill_rect(layout::BOARD, palette::BOARD_BG);
        pass.image("board.png", layout::BOARD);

        for (name, zone) in ZONES {
            match zone(&mut pass) {
                Ok(()) => {
                    for region in pass.staged.drain(..) {
                        registry.push(region);
                    }
                }
                Err(e) => {
                    pass.staged.clear();
                    tracing::warn!(zone = name, error = %e, "zone renderer failed; skipped for this pass");
                }
            }
        }
        self.pass
    }
}

/// Quest card face shared by the offer board and the player boards.
fn draw_quest_card(pass: &mut RenderPass<'_>, rect: Rect, quest: &QuestOffer) {
    pass.image("quest.png", rect);
    let (x, y) = (rect.x, rect.y);
    pass.text(x + 150.0, y + 30.0, &quest.name, TextStyle::bold(20.0), palette::INK);
    pass.text(
        x + 70.0,
        y + 53.0,
        "Requirements",
        TextStyle::plain(14.0),
        palette::INK,
    );
    icons::compact_icon_row(pass.surface, &quest.requirements, x + 40.0, y + 70.0, palette::INK);
    pass.surface.line(
        Point::new(x + 25.0, y + 90.0),
        Point::new(x + 275.0, y + 90.0),
        Stroke::new(1.0, palette::INK),
    );
    pass.text(
        x + 54.0,
        y + 106.0,
        "Rewards",
        TextStyle::plain(14.0),
        palette::INK,
    );
    icons::compact_icon_row(pass.surface, &quest.rewards, x + 40.0, y + 123.0, palette::INK);
}

/// A vacant city-building face: art, name, reward row, parchment square.
fn draw_city_building(pass: &mut RenderPass<'_>, rect: Rect, parchment: Rect, building: &Building) {
    pass.image("hall.png", rect);
    pass.text(
        rect.x + 125.0,
        rect.y + 30.0,
        &building.name,
        TextStyle::bold(20.0),
        palette::INK,
    );
    icons::compact_icon_row(
        pass.surface,
        &building.reward,
        rect.x + 125.0,
        rect.y + 120.0,
        palette::INK,
    );
    pass.surface.rounded_rect(
        parchment,
        Some(palette::PARCHMENT),
        Some(Stroke::new(1.0, palette::INK)),
    );
}

/// Agent meeple of the occupying player, by that player's color.
fn draw_agent(pass: &mut RenderPass<'_>, occupant: usize, rect: Rect) -> Result<(), SceneError> {
    let player = entry(&pass.snapshot.game.players, "players", occupant)?;
    pass.image(&format!("{}_agent.png", player.color.name()), rect);
    Ok(())
}

fn quest_board(pass: &mut RenderPass<'_>) -> Result<(), SceneError> {
    for i in 0..snapshot::QUEST_OFFERS {
        let quest = entry(&pass.snapshot.game.quest_offers, "quest_offers", i)?;
        let rect = layout::quest_card(i);
        draw_quest_card(pass, rect, quest);
        pass.register_move(rect, Move::ChooseQuest { slot: i });
    }
    pass.image("quest_back.png", layout::QUEST_DECK);
    Ok(())
}

fn building_plots(pass: &mut RenderPass<'_>) -> Result<(), SceneError> {
    for i in 0..snapshot::BUILDING_PLOTS {
        let plot = entry(&pass.snapshot.game.building_plots, "building_plots", i)?;
        let rect = layout::plot(i);
        pass.image("building_plot.png", rect);

        match plot.occupied_by {
            None => pass.register_move(
                rect,
                Move::PlaceAgent {
                    zone: PlotZone::PlayerPlot,
                    slot: i,
                },
            ),
            Some(occupant) => draw_agent(pass, occupant, layout::plot_agent(i))?,
        }

        if let Some(building) = &plot.building {
            let owner = entry(&pass.snapshot.game.players, "players", building.owner)?;
            let owner_color = Color::from_rgb3(owner.color.rgb());
            let (x, y) = (rect.x, rect.y);
            pass.text(x + 55.0, y + 30.0, "Rewards:", TextStyle::plain(16.0), palette::PAPER);
            icons::compact_icon_row(
                pass.surface,
                &building.player_reward,
                x + 8.0,
                y + 50.0,
                palette::PAPER,
            );
            pass.text(x + 80.0, y + 75.0, "Owner", TextStyle::plain(16.0), palette::PAPER);
            pass.text(x + 82.0, y + 89.0, "Rewards", TextStyle::plain(16.0), palette::PAPER);
            icons::compact_icon_row(
                pass.surface,
                &building.owner_reward,
                x + 55.0,
                y + 105.0,
                palette::PAPER,
            );
            pass.surface.circle(
                Point::new(x + 140.0, y + 140.0),
                20.0,
                Some(owner_color),
                None,
            );
        }
    }
    Ok(())
}

fn prebuilt_halls(pass: &mut RenderPass<'_>) -> Result<(), SceneError> {
    for k in 0..3 {
        let building = entry(&pass.snapshot.game.city_buildings, "city_buildings", k)?;
        let rect = layout::hall(k);
        draw_city_building(pass, rect, layout::hall_parchment(k), building);
        match building.occupied_by {
            None => pass.register_move(
                rect,
                Move::PlaceAgent {
                    zone: PlotZone::CityBuilding,
                    slot: k,
                },
            ),
            Some(occupant) => draw_agent(pass, occupant, layout::hall_agent(k))?,
        }
    }
    Ok(())
}

fn column_buildings(pass: &mut RenderPass<'_>) -> Result<(), SceneError> {
    for col in 0..2 {
        for row in 0..3 {
            let index = layout::column_city_index(col, row);
            let building =
                entry(&pass.snapshot.game.city_buildings, "city_buildings", index)?;
            let rect = layout::column_building(col, row);
            draw_city_building(pass, rect, layout::column_parchment(col, row), building);
            match building.occupied_by {
                None => pass.register_move(
                    rect,
                    Move::PlaceAgent {
                        zone: PlotZone::CityBuilding,
                        slot: index,
                    },
                ),
                Some(occupant) => draw_agent(pass, occupant, layout::column_agent(col, row))?,
            }
        }
    }
    Ok(())
}

fn builders_hall(pass: &mut RenderPass<'_>) -> Result<(), SceneError> {
    let building = entry(
        &pass.snapshot.game.city_buildings,
        "city_buildings",
        layout::BUILDERS_HALL_INDEX,
    )?;
    pass.image("hall.png", layout::BUILDERS_HALL);
    pass.text(900.0, 930.0, &building.name, TextStyle::bold(20.0), palette::INK);
    pass.surface.rounded_rect(
        layout::BUILDERS_HALL_PARCHMENT,
        Some(palette::PARCHMENT),
        Some(Stroke::new(1.0, palette::INK)),
    );
    pass.text(900.0, 1000.0, "Buy a building", TextStyle::bold(17.0), palette::INK);
    match building.occupied_by {
        None => pass.register_move(
            layout::BUILDERS_HALL_REGION,
            Move::PlaceAgent {
                zone: PlotZone::CityBuilding,
                slot: layout::BUILDERS_HALL_INDEX,
            },
        ),
        Some(occupant) => draw_agent(pass, occupant, layout::BUILDERS_HALL_AGENT)?,
    }
    Ok(())
}

fn market(pass: &mut RenderPass<'_>) -> Result<(), SceneError> {
    let current = pass.snapshot.control.current_player;
    let buying = !pass.frozen && pass.snapshot.stage_of(current) == Some(Stage::BuyBuilding);

    for i in 0..snapshot::MARKET_SLOTS {
        let slot = entry(&pass.snapshot.game.market, "market", i)?;
        let rect = layout::market_card(i);
        pass.image("building_card.png", rect);

        if let Some(building) = slot {
            let (x, y) = (rect.x, rect.y);
            pass.text(
                x + 135.0,
                y + 20.0,
                &building.cost.to_string(),
                TextStyle::bold(20.0),
                palette::PAPER,
            );
            icons::score_badge(pass.surface, x + 107.0, y + 14.0, building.score_value);
            pass.text(x + 50.0, y + 30.0, "Rewards", TextStyle::plain(16.0), palette::PAPER);
            icons::compact_icon_row(
                pass.surface,
                &building.player_reward,
                x + 8.0,
                y + 50.0,
                palette::PAPER,
            );
            pass.text(x + 80.0, y + 75.0, "Owner", TextStyle::plain(16.0), palette::PAPER);
            pass.text(x + 82.0, y + 89.0, "Rewards", TextStyle::plain(16.0), palette::PAPER);
            icons::compact_icon_row(
                pass.surface,
                &building.owner_reward,
                x + 55.0,
                y + 105.0,
                palette::PAPER,
            );
        }

        if buying {
            // The engine rejects purchases of sold-out slots; the region is
            // offered whenever the stage allows buying.
            pass.register_move(rect, Move::BuyBuilding { slot: Some(i) });
        }
    }

    if buying {
        let button = layout::MARKET_DECLINE;
        pass.surface.fill_rect(button, palette::BUTTON);
        let center = button.center();
        pass.text(
            center.x,
            button.y + 50.0,
            "Buy no building",
            TextStyle::plain(16.0),
            palette::INK,
        );
        pass.register_move(button, Move::BuyBuilding { slot: None });
    }
    Ok(())
}

fn player_boards(pass: &mut RenderPass<'_>) -> Result<(), SceneError> {
    for i in 0..2 {
        let player = entry(&pass.snapshot.game.players, "players", i)?;
        let board = layout::player_board(i);
        pass.surface
            .fill_rect(board, Color::from_rgb3(player.color.rgb()));
        pass.surface
            .fill_rect(layout::player_header(i), palette::CARD_FACE);
        icons::icon_row(
            pass.surface,
            &player.resources,
            250.0 + i as f32 * 800.0,
            1450.0,
            palette::INK,
        );

        let completing =
            !pass.frozen && pass.snapshot.stage_of(i) == Some(Stage::CompleteQuest);
        let is_current = i == pass.snapshot.control.current_player;

        if completing {
            let button = layout::end_turn_button(i);
            pass.surface.fill_rect(button, palette::BUTTON);
            pass.text(
                button.center().x,
                button.y + 50.0,
                "End turn",
                TextStyle::plain(16.0),
                palette::INK,
            );
            if is_current {
                pass.register_move(button, Move::CompleteQuest { quest: None });
            }
        }

        for (j, quest) in player.quests.iter().enumerate() {
            let rect = layout::player_quest_card(i, j);
            draw_quest_card(pass, rect, quest);
            if completing && is_current {
                pass.register_move(rect, Move::CompleteQuest { quest: Some(j) });
            }
        }

        for j in 0..player.intrigue_count as usize {
            pass.surface
                .fill_rect(layout::intrigue_card(i, j), palette::CARD_FACE);
        }
    }
    Ok(())
}
