// SPDX-License-Identifier: MIT OR Apache-2.0

//! Frame-scoped click regions and their registry.
//!
//! Regions live for exactly one render pass: the registry is cleared at the
//! start of every pass and fully repopulated before the pass returns, so
//! hit-testing is always consistent with what is currently drawn and
//! currently legal. Single-threaded cooperative use only: dispatch never
//! runs concurrently with a pass.

use crate::surface::Rect;

/// A rectangle bound to a zero-argument action for one render pass.
pub struct ClickRegion {
    rect: Rect,
    on_hit: Box<dyn Fn()>,
}

impl ClickRegion {
    pub fn new(rect: Rect, on_hit: impl Fn() + 'static) -> Self {
        Self {
            rect,
            on_hit: Box::new(on_hit),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// The frame-scoped collection of active click regions.
#[derive(Default)]
pub struct ClickRegionRegistry {
    regions: Vec<ClickRegion>,
}

impl ClickRegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions. Called once at the start of every render pass,
    /// and again when the game-over flag is observed (board freeze).
    pub fn reset(&mut self) {
        self.regions.clear();
    }

    /// Append a region. Regions are not deduplicated; overlapping regions
    /// registered later sit visually on top and win on dispatch.
    pub fn register(&mut self, rect: Rect, on_hit: impl Fn() + 'static) {
        self.regions.push(ClickRegion::new(rect, on_hit));
    }

    /// Append an already-built region (used by the render pass to merge a
    /// zone's staged regions).
    pub fn push(&mut self, region: ClickRegion) {
        self.regions.push(region);
    }

    /// Invoke the callback of the topmost (most recently registered) region
    /// containing the point. Returns whether any region was hit.
    pub fn dispatch(&self, x: f32, y: f32) -> bool {
        for region in self.regions.iter().rev() {
            if region.rect.contains(x, y) {
                tracing::debug!(x, y, rect = ?region.rect, "click region hit");
                (region.on_hit)();
                return true;
            }
        }
        tracing::debug!(x, y, "click missed all regions");
        false
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Rectangles of all active regions, in registration order.
    pub fn rects(&self) -> Vec<Rect> {
        self.regions.iter().map(|r| r.rect).collect()
    }
}
