// SPDX-License-Identifier: MIT OR Apache-2.0

//! Harborlords desktop client.
//!
//! Runs the egui board against a stand-in local engine: a demo snapshot is
//! pushed on startup and submitted moves are logged. Swapping the stand-in
//! for a real engine means replacing the two channel endpoints, nothing in
//! the rendering path changes.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use harborlords_ui_egui::app::HarborApp;
use harborlords_ui_egui::art::{spawn_loader, ArtCache, FsAssetLoader};
use harborlords_ui_egui::demo;
use harborlords_ui_egui::dispatch::MoveDispatcher;
use harborlords_ui_egui::msg::{EngineToUi, UiToEngine};
use harborlords_ui_egui::subscriber::StateSubscriber;

#[derive(Parser, Debug)]
#[command(name = "harborlords", about = "Harborlords board client")]
struct Args {
    /// Directory the board and card art is loaded from.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let (engine_tx, engine_rx) = crossbeam_channel::unbounded::<EngineToUi>();
    let (move_tx, move_rx) = crossbeam_channel::unbounded::<UiToEngine>();
    let (req_tx, req_rx) = crossbeam_channel::unbounded();
    let (res_tx, res_rx) = crossbeam_channel::unbounded();

    let _loader = spawn_loader(FsAssetLoader::new(args.assets), req_rx, res_tx);

    // Stand-in engine: one demo snapshot, moves go to the log.
    engine_tx
        .send(EngineToUi::Snapshot(None))
        .map_err(|_| anyhow::anyhow!("ui channel closed at startup"))?;
    engine_tx
        .send(EngineToUi::Snapshot(Some(demo::sample_snapshot())))
        .map_err(|_| anyhow::anyhow!("ui channel closed at startup"))?;
    std::thread::spawn(move || {
        // Keep the sender alive so the subscriber side stays connected.
        let _engine_tx = engine_tx;
        for msg in move_rx.iter() {
            let UiToEngine::Submit(mv) = msg;
            tracing::info!(?mv, "move submitted");
        }
    });

    let app = HarborApp::new(
        StateSubscriber::new(engine_rx),
        MoveDispatcher::new(move_tx),
        ArtCache::new(req_tx),
        res_rx,
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([700.0, 1000.0])
            .with_title("Harborlords"),
        ..Default::default()
    };
    eframe::run_native("Harborlords", options, Box::new(|_cc| Box::new(app)))
        .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
