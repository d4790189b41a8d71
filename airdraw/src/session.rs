//! Per-session gesture pipeline.
//!
//! [`SessionCore`] holds every piece of mutable state the pipeline needs (hand
//! slots, the active stroke, the frame gate) and threads it explicitly through
//! each frame pass. Nothing is global, so independent sessions and tests can
//! run side by side. The surface and geometry are passed in per call.
//!
//! One pass, once per display refresh:
//!
//! 1. [`SessionCore::begin_frame`] drops the pass if the video time has not
//!    moved, before the host spends a recognizer call on a stale frame.
//! 2. [`SessionCore::process_hands`] classifies each hand, fires debounced
//!    tool/stop edges, feeds index pinches to the pointer synthesizer, closes
//!    the stroke when nobody is pinching, and returns overlay markers.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Serialize;

use crate::capture::FrameGate;
use crate::config::{ConfigError, PipelineConfig};
use crate::debounce::Debouncer;
use crate::gesture::{Gesture, GestureLabel, classify};
use crate::hand::{HandObservation, Handedness};
use crate::overlay::{self, HandMarkers};
use crate::pointer::PointerSynthesizer;
use crate::scaling::{ClientMapping, FrameGeometry};
use crate::surface::DrawSurface;
use crate::tools::ToolCycle;

/// What one frame pass did, for the host to act on.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrameReport {
    /// Overlay markers, one entry per observed hand.
    pub markers: Vec<HandMarkers>,
    /// Tool activated on the surface this frame.
    pub tool_activated: Option<String>,
    /// Pointer events dispatched this frame.
    pub dispatched: usize,
    /// A ring pinch asked the host to stop the camera.
    pub stop_requested: bool,
    /// Geometry was unavailable and the unscaled fallback was used.
    pub degraded_geometry: bool,
}

/// Pipeline state for one drawing session.
pub struct SessionCore {
    pub config: PipelineConfig,
    tools: ToolCycle,
    debouncer: Debouncer,
    pointer: PointerSynthesizer,
    gate: FrameGate,
    degraded: bool,
}

impl Default for SessionCore {
    fn default() -> Self {
        let config = PipelineConfig::default();
        Self {
            pointer: PointerSynthesizer::new(config.min_stroke_distance),
            config,
            tools: ToolCycle::default(),
            debouncer: Debouncer::new(),
            gate: FrameGate::new(),
            degraded: false,
        }
    }
}

impl SessionCore {
    /// Build a session from a validated config.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid.
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        let tools = config.tool_cycle()?;
        Ok(Self {
            pointer: PointerSynthesizer::new(config.min_stroke_distance),
            tools,
            config,
            debouncer: Debouncer::new(),
            gate: FrameGate::new(),
            degraded: false,
        })
    }

    // --- Frame pass ---

    /// Whether the frame at `video_time` is new and should be processed.
    pub fn begin_frame(&mut self, video_time: f64) -> bool {
        self.gate.advance(video_time)
    }

    /// Run one frame's hands through the pipeline.
    ///
    /// An empty `hands` slice is a valid frame: it closes any open stroke.
    /// Only the first observation of each handedness drives tool and stop
    /// edges; later ones still draw and get markers.
    pub fn process_hands(
        &mut self,
        geometry: &FrameGeometry,
        hands: &[HandObservation],
        surface: &mut dyn DrawSurface,
    ) -> FrameReport {
        let mapping = geometry.mapping();
        self.note_mapping(&mapping);

        let mut report = FrameReport { degraded_geometry: mapping.is_degraded(), ..FrameReport::default() };
        let mut pinching = false;
        let mut debounced = [false; 2];

        for hand in hands {
            let gesture = classify(hand, self.config.pinch_threshold);

            // Slots are keyed by handedness; a second hand with the same label
            // would flip the slot every frame and re-fire its edge.
            let slot = hand.handedness.slot();
            let edge = if debounced[slot] {
                tracing::debug!(hand = ?hand.handedness, "duplicate handedness; debounce skipped");
                None
            } else {
                debounced[slot] = true;
                self.debouncer.observe(hand.handedness, gesture.label())
            };

            match edge {
                Some(GestureLabel::MiddlePinch) => {
                    report.tool_activated = Some(self.tools.advance(surface));
                }
                Some(GestureLabel::RingPinch) if self.config.ring_pinch_stops_capture => {
                    tracing::debug!(hand = ?hand.handedness, "ring pinch; capture stop requested");
                    report.stop_requested = true;
                }
                _ => {}
            }

            if let Gesture::IndexPinch(anchor) = gesture {
                pinching = true;
                if self.pointer.track(anchor, &mapping, surface).is_some() {
                    report.dispatched += 1;
                }
            }
        }

        if !pinching && self.pointer.release(&mapping, surface).is_some() {
            report.dispatched += 1;
        }

        let present: Vec<Handedness> = hands.iter().map(|h| h.handedness).collect();
        self.debouncer.release_absent(&present);

        report.markers = overlay::markers(hands, &mapping);
        report
    }

    /// Close any open stroke and forget per-hand and per-frame state.
    ///
    /// Called when streaming stops so the next session starts clean.
    pub fn reset(&mut self, geometry: &FrameGeometry, surface: &mut dyn DrawSurface) {
        self.pointer.release(&geometry.mapping(), surface);
        self.debouncer.reset();
        self.gate.reset();
    }

    /// Activate the configured initial tool on a freshly bound surface.
    pub fn bind(&self, surface: &mut dyn DrawSurface) {
        if let Some(tool) = &self.config.initial_tool {
            surface.set_tool(tool);
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.pointer.is_drawing()
    }

    #[must_use]
    pub fn pointer(&self) -> &PointerSynthesizer {
        &self.pointer
    }

    #[must_use]
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    #[must_use]
    pub fn tools(&self) -> &ToolCycle {
        &self.tools
    }

    fn note_mapping(&mut self, mapping: &ClientMapping) {
        let degraded = mapping.is_degraded();
        if degraded != self.degraded {
            if degraded {
                tracing::warn!("display geometry unavailable; using unscaled mapping");
            } else {
                tracing::debug!("display geometry available; cover mapping restored");
            }
            self.degraded = degraded;
        }
    }
}
