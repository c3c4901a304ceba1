// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move dispatch: the narrow call surface click-region callbacks use to
//! submit a named move to the engine. Fire-and-forget; no local legality
//! check, no result inspection. The engine's next snapshot is the only
//! observable outcome.

use crossbeam_channel::Sender;
use harborlords_core::Move;

use crate::msg::UiToEngine;

/// Cloneable handle on the engine channel's sending half.
#[derive(Debug, Clone)]
pub struct MoveDispatcher {
    tx: Sender<UiToEngine>,
}

impl MoveDispatcher {
    pub fn new(tx: Sender<UiToEngine>) -> Self {
        Self { tx }
    }

    /// Submit a move. A send failure means the engine proxy is gone; it is
    /// logged and swallowed, since there is nothing the board can do about
    /// it.
    pub fn submit(&self, mv: Move) {
        tracing::debug!(?mv, "submitting move");
        if self.tx.send(UiToEngine::Submit(mv)).is_err() {
            tracing::warn!(?mv, "engine channel closed; move dropped");
        }
    }
}
