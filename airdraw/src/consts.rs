//! Shared numeric constants for the airdraw crate.

// ── Gestures ────────────────────────────────────────────────────

/// Normalized fingertip distance below which two fingers count as pinched.
pub const PINCH_THRESHOLD: f64 = 0.05;

/// Minimum normalized distance between consecutive stroke points.
pub const MIN_STROKE_POINT_DISTANCE: f64 = 0.005;

// ── Pointer ─────────────────────────────────────────────────────

/// Pointer id carried by every synthesized event.
pub const POINTER_ID: i32 = 0;

// ── Overlay ─────────────────────────────────────────────────────

/// Radius of a landmark marker on the overlay, in canvas pixels.
pub const MARKER_RADIUS_PX: f64 = 4.0;
