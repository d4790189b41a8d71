//! Hand observations as produced by the external gesture recognizer.
//!
//! One [`HandObservation`] per detected hand per frame: its handedness, the
//! 21 landmarks in the recognizer's fixed order, and the recognizer's score.
//! Observations are immutable and dropped once the frame has been processed.

#[cfg(test)]
#[path = "hand_test.rs"]
mod hand_test;

use serde::{Deserialize, Serialize};

use crate::scaling::Point;

/// Number of landmarks reported per hand.
pub const LANDMARK_COUNT: usize = 21;

/// Which hand an observation belongs to, as labelled by the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Stable slot index for per-hand state.
    #[must_use]
    pub fn slot(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Named landmark positions in recognizer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl Landmark {
    /// Position of this landmark in the 21-entry landmark array.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One hand's landmark snapshot for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    pub handedness: Handedness,
    /// Normalized positions relative to the source frame, in [`Landmark`] order.
    pub landmarks: [Point; LANDMARK_COUNT],
    /// Recognizer confidence. Already thresholded upstream; carried for diagnostics.
    #[serde(default)]
    pub score: f64,
}

impl HandObservation {
    #[must_use]
    pub fn new(handedness: Handedness, landmarks: [Point; LANDMARK_COUNT]) -> Self {
        Self { handedness, landmarks, score: 1.0 }
    }

    #[must_use]
    pub fn landmark(&self, landmark: Landmark) -> Point {
        self.landmarks[landmark.index()]
    }
}
