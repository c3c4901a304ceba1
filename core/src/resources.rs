// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource vectors: the uniform 6-slot count tuple used for quest
//! requirements, rewards and player holdings.

use serde::{Deserialize, Serialize};

/// The four recruitable unit kinds, in resource-vector slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Slot 0, drawn white
    Deckhand,
    /// Slot 1, drawn orange
    Stevedore,
    /// Slot 2, drawn black
    Navigator,
    /// Slot 3, drawn purple
    Quartermaster,
}

impl UnitKind {
    /// All unit kinds in slot order.
    pub const ALL: [UnitKind; 4] = [
        UnitKind::Deckhand,
        UnitKind::Stevedore,
        UnitKind::Navigator,
        UnitKind::Quartermaster,
    ];

    /// Resource-vector slot index of this kind.
    pub fn slot(self) -> usize {
        match self {
            UnitKind::Deckhand => 0,
            UnitKind::Stevedore => 1,
            UnitKind::Navigator => 2,
            UnitKind::Quartermaster => 3,
        }
    }

    /// Marker color for this kind's glyph.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            UnitKind::Deckhand => [245, 245, 245],
            UnitKind::Stevedore => [235, 140, 20],
            UnitKind::Navigator => [20, 20, 20],
            UnitKind::Quartermaster => [130, 50, 160],
        }
    }
}

/// An ordered 6-tuple of non-negative counts:
/// `[deckhands, stevedores, navigators, quartermasters, gold, score]`.
///
/// The length is always exactly 6; compact rendering omits zero slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceVector(pub [u32; 6]);

impl ResourceVector {
    /// Number of slots in every vector.
    pub const SLOTS: usize = 6;
    /// Slot index of the gold (currency) count.
    pub const GOLD: usize = 4;
    /// Slot index of the score count.
    pub const SCORE: usize = 5;

    pub fn new(units: [u32; 4], gold: u32, score: u32) -> Self {
        Self([units[0], units[1], units[2], units[3], gold, score])
    }

    /// Count of the given unit kind.
    pub fn unit(&self, kind: UnitKind) -> u32 {
        self.0[kind.slot()]
    }

    pub fn gold(&self) -> u32 {
        self.0[Self::GOLD]
    }

    pub fn score(&self) -> u32 {
        self.0[Self::SCORE]
    }

    /// True when every slot is zero.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}

impl From<[u32; 6]> for ResourceVector {
    fn from(slots: [u32; 6]) -> Self {
        Self(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_accessors_match_layout() {
        let v = ResourceVector::from([1, 2, 3, 4, 5, 6]);
        assert_eq!(v.unit(UnitKind::Deckhand), 1);
        assert_eq!(v.unit(UnitKind::Stevedore), 2);
        assert_eq!(v.unit(UnitKind::Navigator), 3);
        assert_eq!(v.unit(UnitKind::Quartermaster), 4);
        assert_eq!(v.gold(), 5);
        assert_eq!(v.score(), 6);
    }

    #[test]
    fn unit_slots_cover_the_first_four() {
        let slots: Vec<usize> = UnitKind::ALL.iter().map(|k| k.slot()).collect();
        assert_eq!(slots, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_detection() {
        assert!(ResourceVector::default().is_empty());
        assert!(!ResourceVector::new([0, 0, 0, 0], 1, 0).is_empty());
    }
}
