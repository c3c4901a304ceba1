// SPDX-License-Identifier: MIT OR Apache-2.0

//! Headless render-pass tests: a full scene render into a recording
//! surface, with clicks driven through the registry and moves read back
//! off the dispatch channel.

use crossbeam_channel::{unbounded, Receiver};
use harborlords_core::{Move, PlotZone, Stage, StateSnapshot};
use harborlords_ui_egui::art::{ArtCache, ArtRequest, ImageData};
use harborlords_ui_egui::demo;
use harborlords_ui_egui::dispatch::MoveDispatcher;
use harborlords_ui_egui::layout;
use harborlords_ui_egui::msg::UiToEngine;
use harborlords_ui_egui::regions::ClickRegionRegistry;
use harborlords_ui_egui::scene::SceneRenderer;
use harborlords_ui_egui::test_util::RecordingSurface;

struct Harness {
    renderer: SceneRenderer,
    registry: ClickRegionRegistry,
    dispatcher: MoveDispatcher,
    move_rx: Receiver<UiToEngine>,
    art: ArtCache,
    art_req_rx: Receiver<ArtRequest>,
}

impl Harness {
    fn new() -> Self {
        let (move_tx, move_rx) = unbounded();
        let (req_tx, art_req_rx) = unbounded();
        Self {
            renderer: SceneRenderer::new(),
            registry: ClickRegionRegistry::new(),
            dispatcher: MoveDispatcher::new(move_tx),
            move_rx,
            art: ArtCache::new(req_tx),
            art_req_rx,
        }
    }

    fn render(&mut self, snapshot: &StateSnapshot) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        self.renderer.render(
            snapshot,
            &mut surface,
            &mut self.registry,
            &self.dispatcher,
            &mut self.art,
        );
        surface
    }

    /// Dispatch a click at logical board coordinates and return the move
    /// it submitted, if any.
    fn click(&mut self, x: f32, y: f32) -> Option<Move> {
        if !self.registry.dispatch(x, y) {
            return None;
        }
        match self.move_rx.try_recv() {
            Ok(UiToEngine::Submit(mv)) => Some(mv),
            Err(_) => None,
        }
    }
}

#[test]
fn same_snapshot_renders_identical_region_sets() {
    let snapshot = demo::sample_snapshot();
    let mut h = Harness::new();

    h.render(&snapshot);
    let first = h.registry.rects();
    h.render(&snapshot);
    let second = h.registry.rects();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn vacant_plot_click_places_an_agent() {
    let mut h = Harness::new();
    h.render(&demo::sample_snapshot());

    assert_eq!(
        h.click(100.0, 300.0),
        Some(Move::PlaceAgent {
            zone: PlotZone::PlayerPlot,
            slot: 0,
        })
    );
}

#[test]
fn occupied_plot_has_no_region() {
    let mut h = Harness::new();
    // Plot 2 is occupied in the sample snapshot.
    h.render(&demo::sample_snapshot());

    assert_eq!(h.click(100.0, 700.0), None);
}

#[test]
fn quest_offer_click_chooses_that_quest() {
    let mut h = Harness::new();
    h.render(&demo::sample_snapshot());

    assert_eq!(h.click(450.0, 100.0), Some(Move::ChooseQuest { slot: 0 }));
}

#[test]
fn builders_hall_places_on_its_city_slot() {
    let mut h = Harness::new();
    h.render(&demo::sample_snapshot());

    assert_eq!(
        h.click(900.0, 950.0),
        Some(Move::PlaceAgent {
            zone: PlotZone::CityBuilding,
            slot: layout::BUILDERS_HALL_INDEX,
        })
    );
}

#[test]
fn occupied_hall_has_no_region() {
    let mut h = Harness::new();
    // City building 1 (hall k=1) is occupied in the sample snapshot.
    h.render(&demo::sample_snapshot());

    assert_eq!(h.click(800.0, 350.0), None);
}

#[test]
fn market_regions_require_the_buying_stage() {
    let mut h = Harness::new();
    // Sample snapshot: current player's stage is CompleteQuest.
    h.render(&demo::sample_snapshot());
    assert_eq!(h.click(700.0, 1175.0), None);

    let mut snapshot = demo::sample_snapshot();
    snapshot.control.active_stages = vec![Some(Stage::BuyBuilding), None];
    h.render(&snapshot);

    // Sold-out slot 2 still gets a region while buying; the engine is the
    // one that rejects the purchase.
    assert_eq!(
        h.click(1100.0, 1150.0),
        Some(Move::BuyBuilding { slot: Some(2) })
    );
    assert_eq!(
        h.click(700.0, 1340.0),
        Some(Move::BuyBuilding { slot: None })
    );
}

#[test]
fn quest_completion_regions_for_the_current_player() {
    let mut h = Harness::new();
    h.render(&demo::sample_snapshot());

    // End-turn button.
    assert_eq!(
        h.click(300.0, 1350.0),
        Some(Move::CompleteQuest { quest: None })
    );
    // Second held quest card.
    assert_eq!(
        h.click(200.0, 1800.0),
        Some(Move::CompleteQuest { quest: Some(1) })
    );
}

#[test]
fn completion_stage_on_a_non_current_player_registers_nothing() {
    let mut h = Harness::new();
    let mut snapshot = demo::sample_snapshot();
    snapshot.control.active_stages = vec![None, Some(Stage::CompleteQuest)];
    h.render(&snapshot);

    // Player 1's held quest card.
    assert_eq!(h.click(950.0, 1600.0), None);
}

#[test]
fn game_over_freezes_the_board() {
    let mut h = Harness::new();
    let mut snapshot = demo::sample_snapshot();
    snapshot.control.game_over = true;

    let surface = h.render(&snapshot);
    assert!(h.registry.is_empty());
    // The board still draws in full.
    assert!(surface.texts().contains(&"Escort the Spice Convoy"));

    h.render(&snapshot);
    assert!(h.registry.is_empty());
}

#[test]
fn a_failing_zone_is_skipped_without_blanking_the_rest() {
    let mut h = Harness::new();
    let mut snapshot = demo::sample_snapshot();
    snapshot.game.quest_offers.truncate(3);

    let surface = h.render(&snapshot);

    // The quest board contributed no regions for this pass.
    assert_eq!(h.click(450.0, 100.0), None);
    // Every other zone is intact.
    assert_eq!(
        h.click(100.0, 300.0),
        Some(Move::PlaceAgent {
            zone: PlotZone::PlayerPlot,
            slot: 0,
        })
    );
    assert!(surface.texts().contains(&"Buy a building"));
}

#[test]
fn missing_art_never_blocks_regions() {
    let mut h = Harness::new();
    let surface = h.render(&demo::sample_snapshot());

    // Nothing is loaded yet, so no image is blitted, but every load was
    // requested and the region set is complete.
    assert!(surface.images().is_empty());
    assert!(!h.registry.is_empty());
    assert!(h.art_req_rx.try_iter().count() > 0);
}

#[test]
fn committed_art_is_blitted_on_the_next_pass() {
    let mut h = Harness::new();
    h.render(&demo::sample_snapshot());

    // Answer the loader request for the occupying player's agent art.
    let req = h
        .art_req_rx
        .try_iter()
        .find(|r| r.name == "blue_agent.png")
        .expect("pass requested the agent image");
    h.art.commit(harborlords_ui_egui::art::ArtResult {
        pass: req.pass,
        name: req.name,
        image: Ok(ImageData {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 255],
        }),
    });

    let surface = h.render(&demo::sample_snapshot());
    assert!(surface
        .images()
        .contains(&("blue_agent.png", layout::plot_agent(2))));
}
