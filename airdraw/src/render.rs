//! Rendering: draws overlay hand markers to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives marker positions already in client space and produces pixels;
//! it does not mutate any pipeline state.
//!
//! The overlay canvas is mirrored by CSS, the same way the video is, so the
//! client-space mirror is undone here before drawing.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::MARKER_RADIUS_PX;
use crate::overlay::HandMarkers;
use crate::scaling::{Point, Size};

/// Clear the overlay and draw one dot per landmark.
///
/// `viewport` is the overlay's CSS size; `canvas` is its backing-store size.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_markers(
    ctx: &CanvasRenderingContext2d,
    markers: &[HandMarkers],
    viewport: Size,
    canvas: Size,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, canvas.width, canvas.height);
    if !viewport.is_usable() {
        return Ok(());
    }

    for hand in markers {
        ctx.set_fill_style_str(hand.color());
        for &p in &hand.points {
            let at = client_to_canvas(p, viewport, canvas);
            ctx.begin_path();
            ctx.arc(at.x, at.y, MARKER_RADIUS_PX, 0.0, 2.0 * PI)?;
            ctx.fill();
        }
    }
    Ok(())
}

/// Clear the overlay without drawing anything.
pub fn clear(ctx: &CanvasRenderingContext2d, canvas: Size) {
    ctx.clear_rect(0.0, 0.0, canvas.width, canvas.height);
}

fn client_to_canvas(p: Point, viewport: Size, canvas: Size) -> Point {
    Point {
        x: (viewport.width - p.x) * canvas.width / viewport.width,
        y: p.y * canvas.height / viewport.height,
    }
}
