//! Pointer model and the pinch-driven pointer lifecycle.
//!
//! `Button` and `Modifiers` describe a synthesized event the same way a
//! browser pointer event would. [`PointerSynthesizer`] owns the active
//! [`Stroke`] and turns a held index pinch into one `down`, a `move` per
//! accepted point, and one `up` on release.
//!
//! ```text
//!            first pinch frame            pinch continues, moved enough
//!   Idle ───────────────────────▶ Drawing ◀──────────────┐
//!    ▲        (down)                 │     (move)          │
//!    │                               └─────────────────────┘
//!    └──────────── pinch ends / hand lost (up) ──────────┘
//! ```

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use serde::Serialize;

use crate::consts::POINTER_ID;
use crate::scaling::{ClientMapping, Point};
use crate::stroke::Stroke;
use crate::surface::DrawSurface;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button; the only one a pinch ever presses.
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// DOM `button` code.
    #[must_use]
    pub fn code(self) -> i16 {
        match self {
            Self::Primary => 0,
            Self::Middle => 1,
            Self::Secondary => 2,
        }
    }
}

/// Pointer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

impl PointerPhase {
    /// Event name understood by the drawing surface.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Down => "pointer_down",
            Self::Move => "pointer_move",
            Self::Up => "pointer_up",
        }
    }
}

/// A synthesized pointer event, built fresh for each dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    /// Client-space position.
    pub position: Point,
    pub pointer_id: i32,
    pub button: Button,
    pub modifiers: Modifiers,
}

/// Drives the down/move/up lifecycle from index-pinch anchors.
///
/// The synthesizer is `Drawing` exactly when its stroke holds at least one point.
#[derive(Debug, Clone)]
pub struct PointerSynthesizer {
    stroke: Stroke,
}

impl PointerSynthesizer {
    #[must_use]
    pub fn new(min_distance: f64) -> Self {
        Self { stroke: Stroke::new(min_distance) }
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        !self.stroke.is_empty()
    }

    #[must_use]
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// Feed one frame's index-pinch anchor. Returns the phase dispatched, if any.
    ///
    /// Starting a stroke while the surface already reports the primary button
    /// pressed records the point but skips the `down`.
    pub fn track(&mut self, anchor: Point, mapping: &ClientMapping, surface: &mut dyn DrawSurface) -> Option<PointerPhase> {
        if self.stroke.is_empty() {
            self.stroke.push(anchor);
            if surface.is_pressed(Button::Primary) {
                tracing::debug!("stroke started with primary already pressed; down skipped");
                return None;
            }
            tracing::debug!(x = anchor.x, y = anchor.y, "stroke started");
            dispatch(surface, PointerPhase::Down, mapping.to_client(anchor));
            return Some(PointerPhase::Down);
        }

        if !self.stroke.push(anchor) {
            return None;
        }
        dispatch(surface, PointerPhase::Move, mapping.to_client(anchor));
        Some(PointerPhase::Move)
    }

    /// Close the stroke at its last recorded point. No-op while idle.
    pub fn release(&mut self, mapping: &ClientMapping, surface: &mut dyn DrawSurface) -> Option<PointerPhase> {
        let last = self.stroke.last()?;
        dispatch(surface, PointerPhase::Up, mapping.to_client(last));
        let points = self.stroke.finish();
        tracing::debug!(points = points.len(), "stroke finished");
        Some(PointerPhase::Up)
    }
}

fn dispatch(surface: &mut dyn DrawSurface, phase: PointerPhase, position: Point) {
    let event = PointerEvent {
        phase,
        position,
        pointer_id: POINTER_ID,
        button: Button::Primary,
        modifiers: surface.modifiers(),
    };
    surface.dispatch_pointer(&event);
}
