//! In-progress stroke for one pinch episode.
//!
//! Landmark tracking jitters by a few thousandths of the frame even when the
//! hand is still. Points closer than the minimum movement to the previous
//! accepted point are dropped so the stroke does not fill with micro-segments.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use crate::scaling::Point;

/// Ordered normalized points of the active stroke.
#[derive(Debug, Clone)]
pub struct Stroke {
    points: Vec<Point>,
    min_distance: f64,
}

impl Stroke {
    #[must_use]
    pub fn new(min_distance: f64) -> Self {
        Self { points: Vec::new(), min_distance }
    }

    /// Offer the next anchor point. Returns `true` when it was appended.
    ///
    /// The first point of a stroke is always accepted.
    pub fn push(&mut self, point: Point) -> bool {
        if let Some(last) = self.last() {
            if last.distance(point) < self.min_distance {
                return false;
            }
        }
        self.points.push(point);
        true
    }

    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// End the episode, returning the collected points and leaving the stroke empty.
    pub fn finish(&mut self) -> Vec<Point> {
        std::mem::take(&mut self.points)
    }
}
