//! Camera-to-client coordinate mapping.
//!
//! Hand landmarks arrive normalized to the source camera frame. The frame is
//! shown on the viewport with "cover" fitting (uniform scale, overflow cropped
//! symmetrically) and mirrored horizontally, so a landmark has to go through
//! the same crop and mirror before it lines up with what the user sees.
//!
//! The overlay markers and the synthesized pointer events both go through
//! [`ClientMapping::to_client`], which keeps the two aligned.

#[cfg(test)]
#[path = "scaling_test.rs"]
mod scaling_test;

use serde::{Deserialize, Serialize};

/// A point in either normalized camera space or client space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point { x: (self.x + other.x) * 0.5, y: (self.y + other.y) * 0.5 }
    }
}

/// Width and height of a rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and strictly positive.
    ///
    /// Elements that are not mounted yet report zero-sized rects.
    #[must_use]
    pub fn is_usable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn aspect(self) -> f64 {
        self.width / self.height
    }
}

/// Uniform "cover" scaling of a camera frame onto a viewport.
///
/// `scale_x` and `scale_y` are always equal; they are kept as separate fields
/// because callers reason about the axes independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    /// Pixels cropped from the left edge of the scaled frame.
    pub offset_x: f64,
    /// Pixels cropped from the top edge of the scaled frame.
    pub offset_y: f64,
    frame: Size,
    viewport: Size,
}

impl ScalingTransform {
    /// Compute the cover transform for `frame` shown on `viewport`.
    ///
    /// Returns `None` when either size is not usable.
    #[must_use]
    pub fn cover(frame: Size, viewport: Size) -> Option<Self> {
        if !frame.is_usable() || !viewport.is_usable() {
            return None;
        }

        let (scale, offset_x, offset_y) = if viewport.aspect() > frame.aspect() {
            // Fill the width; excess height is cropped top and bottom.
            let scale = viewport.width / frame.width;
            (scale, 0.0, (frame.height * scale - viewport.height) / 2.0)
        } else {
            // Fill the height; excess width is cropped left and right.
            let scale = viewport.height / frame.height;
            (scale, (frame.width * scale - viewport.width) / 2.0, 0.0)
        };

        Some(Self { scale_x: scale, scale_y: scale, offset_x, offset_y, frame, viewport })
    }

    /// Map a normalized camera point to mirrored client coordinates.
    #[must_use]
    pub fn to_client(&self, normalized: Point) -> Point {
        let px = normalized.x * self.frame.width * self.scale_x - self.offset_x;
        let py = normalized.y * self.frame.height * self.scale_y - self.offset_y;
        Point { x: self.viewport.width - px, y: py }
    }
}

/// Geometry inputs for one frame.
///
/// `frame` and `viewport` are `None` until the video source and its display
/// element are sized. `window` is the full client area, used by the unscaled
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    pub frame: Option<Size>,
    pub viewport: Option<Size>,
    pub window: Size,
}

impl FrameGeometry {
    #[must_use]
    pub fn new(frame: Option<Size>, viewport: Option<Size>, window: Size) -> Self {
        Self { frame, viewport, window }
    }

    /// Geometry where the viewport fills the whole window.
    #[must_use]
    pub fn covering(frame: Size, viewport: Size) -> Self {
        Self { frame: Some(frame), viewport: Some(viewport), window: viewport }
    }

    /// Build the mapping for this frame. Never cached across frames.
    #[must_use]
    pub fn mapping(&self) -> ClientMapping {
        match (self.frame, self.viewport) {
            (Some(frame), Some(viewport)) => {
                ScalingTransform::cover(frame, viewport).map_or(ClientMapping::Unscaled(self.window), ClientMapping::Cover)
            }
            _ => ClientMapping::Unscaled(self.window),
        }
    }
}

/// How normalized points reach client space for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClientMapping {
    /// Full cover crop and mirror.
    Cover(ScalingTransform),
    /// Degraded mirror-only mapping onto the window; no crop correction.
    Unscaled(Size),
}

impl ClientMapping {
    #[must_use]
    pub fn to_client(&self, normalized: Point) -> Point {
        match self {
            Self::Cover(transform) => transform.to_client(normalized),
            Self::Unscaled(window) => Point {
                x: window.width - normalized.x * window.width,
                y: normalized.y * window.height,
            },
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Unscaled(_))
    }
}
