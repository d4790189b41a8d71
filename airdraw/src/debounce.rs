//! Edge-triggered debouncing of discrete gestures.
//!
//! Holding a middle pinch for a second spans dozens of frames but must cycle
//! the tool exactly once. Each hand slot remembers the label it reported last
//! frame; an edge fires only when the label changes into a discrete gesture.
//! Index pinches are level-triggered and never produce an edge here.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use crate::gesture::GestureLabel;
use crate::hand::Handedness;

/// Last-seen gesture for one hand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureState {
    pub last: GestureLabel,
}

/// Per-handedness edge detector. At most two hands are tracked.
///
/// Callers feed one observation per handedness per frame; two hands sharing
/// a label would overwrite each other's slot.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    slots: [GestureState; 2],
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `current` for `hand` and return the discrete gesture that just
    /// started, if any.
    ///
    /// The slot is overwritten unconditionally, so releasing and re-entering
    /// the same pinch fires again.
    pub fn observe(&mut self, hand: Handedness, current: GestureLabel) -> Option<GestureLabel> {
        let slot = &mut self.slots[hand.slot()];
        let previous = slot.last;
        slot.last = current;
        (previous != current && current.is_discrete()).then_some(current)
    }

    /// Revert the slots of hands not present this frame to `None`.
    pub fn release_absent(&mut self, present: &[Handedness]) {
        for hand in [Handedness::Left, Handedness::Right] {
            if !present.contains(&hand) {
                self.slots[hand.slot()] = GestureState::default();
            }
        }
    }

    /// Clear every slot.
    pub fn reset(&mut self) {
        self.slots = [GestureState::default(); 2];
    }

    #[must_use]
    pub fn state(&self, hand: Handedness) -> GestureState {
        self.slots[hand.slot()]
    }
}
