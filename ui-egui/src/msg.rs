// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message types exchanged with the authoritative engine's client proxy.

use harborlords_core::{Move, StateSnapshot};

/// Messages sent from the UI to the engine proxy.
#[derive(Debug, Clone)]
pub enum UiToEngine {
    /// Submit a move; the engine validates it and answers with a snapshot.
    Submit(Move),
}

/// Messages pushed from the engine proxy to the UI.
#[derive(Debug, Clone)]
pub enum EngineToUi {
    /// A full state snapshot; `None` means "no state yet" and is ignored.
    Snapshot(Option<StateSnapshot>),
}
