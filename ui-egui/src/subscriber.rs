// SPDX-License-Identifier: MIT OR Apache-2.0

//! Snapshot subscription: receives push notifications of new state
//! snapshots from the engine proxy. The sentinel "no state yet" value is
//! discarded; when several snapshots have queued up, only the most recent
//! one is surfaced, since every render pass starts from a full registry
//! reset and overwrites the previous pass's output anyway.

use crossbeam_channel::Receiver;
use harborlords_core::StateSnapshot;

use crate::msg::EngineToUi;

pub struct StateSubscriber {
    rx: Receiver<EngineToUi>,
}

impl StateSubscriber {
    pub fn new(rx: Receiver<EngineToUi>) -> Self {
        Self { rx }
    }

    /// Drain every queued notification and return the newest real
    /// snapshot, if any arrived since the last poll.
    pub fn poll(&self) -> Option<StateSnapshot> {
        let mut latest = None;
        for msg in self.rx.try_iter() {
            match msg {
                EngineToUi::Snapshot(Some(snapshot)) => latest = Some(snapshot),
                EngineToUi::Snapshot(None) => {
                    tracing::trace!("ignoring empty snapshot");
                }
            }
        }
        latest
    }
}
