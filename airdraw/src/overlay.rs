//! Overlay marker positions for visual hand feedback.
//!
//! Markers go through the same [`ClientMapping`] as synthesized pointer
//! events, so a drawn marker sits exactly where a pinch would draw.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use serde::Serialize;

use crate::hand::{HandObservation, Handedness};
use crate::scaling::{ClientMapping, Point};

/// Client-space landmark markers for one hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandMarkers {
    pub handedness: Handedness,
    pub points: Vec<Point>,
}

impl HandMarkers {
    /// CSS fill colour for this hand's markers.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self.handedness {
            Handedness::Left => "black",
            Handedness::Right => "blue",
        }
    }
}

/// Map every landmark of every hand into client space.
#[must_use]
pub fn markers(hands: &[HandObservation], mapping: &ClientMapping) -> Vec<HandMarkers> {
    hands
        .iter()
        .map(|hand| HandMarkers {
            handedness: hand.handedness,
            points: hand.landmarks.iter().map(|&p| mapping.to_client(p)).collect(),
        })
        .collect()
}
