//! Gesture classification from raw landmarks.
//!
//! A pinch is a thumb tip within the pinch threshold of another fingertip.
//! Index, middle and ring pinches are checked in that priority order and the
//! first match wins; its anchor is the midpoint of the two fingertips.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use serde::Serialize;

use crate::hand::{HandObservation, Landmark};
use crate::scaling::Point;

/// Discrete gesture label, without the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureLabel {
    #[default]
    None,
    IndexPinch,
    MiddlePinch,
    RingPinch,
}

impl GestureLabel {
    /// Whether this label drives a discrete, edge-triggered action.
    #[must_use]
    pub fn is_discrete(self) -> bool {
        matches!(self, Self::MiddlePinch | Self::RingPinch)
    }
}

/// Classification of one hand for one frame.
///
/// Every pinch carries its normalized anchor point; `None` has no anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    None,
    IndexPinch(Point),
    MiddlePinch(Point),
    RingPinch(Point),
}

impl Gesture {
    #[must_use]
    pub fn label(self) -> GestureLabel {
        match self {
            Self::None => GestureLabel::None,
            Self::IndexPinch(_) => GestureLabel::IndexPinch,
            Self::MiddlePinch(_) => GestureLabel::MiddlePinch,
            Self::RingPinch(_) => GestureLabel::RingPinch,
        }
    }

    #[must_use]
    pub fn anchor(self) -> Option<Point> {
        match self {
            Self::None => None,
            Self::IndexPinch(p) | Self::MiddlePinch(p) | Self::RingPinch(p) => Some(p),
        }
    }
}

/// Fingertips paired with the thumb, highest priority first.
const PINCH_PAIRS: [(Landmark, fn(Point) -> Gesture); 3] = [
    (Landmark::IndexTip, Gesture::IndexPinch),
    (Landmark::MiddleTip, Gesture::MiddlePinch),
    (Landmark::RingTip, Gesture::RingPinch),
];

/// Classify a single hand. Pure; hands never influence each other.
#[must_use]
pub fn classify(hand: &HandObservation, pinch_threshold: f64) -> Gesture {
    let thumb = hand.landmark(Landmark::ThumbTip);
    PINCH_PAIRS
        .iter()
        .find_map(|&(tip, make)| {
            let finger = hand.landmark(tip);
            (thumb.distance(finger) < pinch_threshold).then(|| make(thumb.midpoint(finger)))
        })
        .unwrap_or(Gesture::None)
}
