// SPDX-License-Identifier: MIT OR Apache-2.0

//! The eframe application shell: wires the subscriber, scene renderer,
//! click-region registry and art pipeline onto the egui event loop.
//!
//! Everything here runs on the single UI thread; render passes and click
//! dispatch are serialized by construction, and the only other thread (the
//! art loader) talks exclusively over channels.

use std::time::Duration;

use crossbeam_channel::Receiver;
use eframe::egui;
use harborlords_core::StateSnapshot;

use crate::art::{ArtCache, ArtResult};
use crate::dispatch::MoveDispatcher;
use crate::layout;
use crate::regions::ClickRegionRegistry;
use crate::scene::SceneRenderer;
use crate::subscriber::StateSubscriber;
use crate::surface_egui::{EguiSurface, TextureStore};

pub struct HarborApp {
    subscriber: StateSubscriber,
    dispatcher: MoveDispatcher,
    renderer: SceneRenderer,
    registry: ClickRegionRegistry,
    art: ArtCache,
    art_rx: Receiver<ArtResult>,
    textures: TextureStore,
    snapshot: Option<StateSnapshot>,
}

impl HarborApp {
    pub fn new(
        subscriber: StateSubscriber,
        dispatcher: MoveDispatcher,
        art: ArtCache,
        art_rx: Receiver<ArtResult>,
    ) -> Self {
        Self {
            subscriber,
            dispatcher,
            renderer: SceneRenderer::new(),
            registry: ClickRegionRegistry::new(),
            art,
            art_rx,
            textures: TextureStore::new(),
            snapshot: None,
        }
    }
}

impl eframe::App for HarborApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Finished art loads first: commits are checked against the pass
        // that last declared interest, so superseded loads are dropped.
        let results: Vec<ArtResult> = self.art_rx.try_iter().collect();
        for result in results {
            self.art.commit(result);
        }

        if let Some(snapshot) = self.subscriber.poll() {
            match snapshot.validate() {
                Ok(()) => self.snapshot = Some(snapshot),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding structurally invalid snapshot");
                }
            }
        }

        self.textures.sync(ctx, &self.art);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::from_gray(12)))
            .show(ctx, |ui| {
                let avail = ui.available_size();
                let scale = (avail.x / layout::BOARD_W)
                    .min(avail.y / layout::BOARD_H)
                    .max(0.05);
                let size = egui::Vec2::new(layout::BOARD_W * scale, layout::BOARD_H * scale);
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
                let origin = response.rect.min;

                if let Some(snapshot) = &self.snapshot {
                    let mut surface = EguiSurface::new(&painter, origin, scale, &self.textures);
                    self.renderer.render(
                        snapshot,
                        &mut surface,
                        &mut self.registry,
                        &self.dispatcher,
                        &mut self.art,
                    );
                } else {
                    painter.text(
                        response.rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Waiting for game state...",
                        egui::FontId::proportional(20.0),
                        egui::Color32::GRAY,
                    );
                }

                // Clicks are matched against the pass that just completed.
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let x = (pos.x - origin.x) / scale;
                        let y = (pos.y - origin.y) / scale;
                        self.registry.dispatch(x, y);
                    }
                }
            });

        // Wake up for in-flight art and for engine pushes.
        let wait = if self.art.has_pending() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(200)
        };
        ctx.request_repaint_after(wait);
    }
}
