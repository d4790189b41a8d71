//! Camera capture: the video-source capability, frame gating and session teardown.
//!
//! Acquisition itself (permission prompts, device selection) belongs to the
//! host. This module only models what the pipeline needs from a live source
//! and guarantees that stopping a session releases the device exactly once.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use crate::scaling::Size;

/// Error surfaced once when a capture session cannot start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// The user or the platform refused camera access.
    #[error("camera permission denied: {0}")]
    PermissionDenied(String),
    /// No usable camera, or the stream ended before producing frames.
    #[error("camera unavailable: {0}")]
    DeviceUnavailable(String),
}

/// A live frame source.
pub trait VideoSource {
    /// Native frame size, or `None` before metadata has loaded.
    fn frame_size(&self) -> Option<Size>;

    /// Presentation time of the current frame, in seconds.
    fn current_time(&self) -> f64;
}

/// A video source backed by a camera device that must be released.
pub trait CameraDevice: VideoSource {
    /// Stop every underlying track. Called once per acquired device.
    fn stop_tracks(&mut self);
}

/// Skips passes whose video frame has not advanced since the last one.
#[derive(Debug, Clone, Default)]
pub struct FrameGate {
    last_time: Option<f64>,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` and records `time` when it differs from the last seen time.
    pub fn advance(&mut self, time: f64) -> bool {
        if self.last_time == Some(time) {
            return false;
        }
        self.last_time = Some(time);
        true
    }

    /// Forget the last seen time, so the next frame always passes.
    pub fn reset(&mut self) {
        self.last_time = None;
    }
}

/// Owns the acquired camera device for as long as streaming lasts.
#[derive(Debug)]
pub struct CaptureSession<D: CameraDevice> {
    device: Option<D>,
}

impl<D: CameraDevice> Default for CaptureSession<D> {
    fn default() -> Self {
        Self { device: None }
    }
}

impl<D: CameraDevice> CaptureSession<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start streaming with a device from `acquire`.
    ///
    /// Any device from an earlier start is released first. On failure the
    /// session stays stopped; retrying is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns the [`CaptureError`] produced by `acquire`.
    pub fn start<F>(&mut self, acquire: F) -> Result<(), CaptureError>
    where
        F: FnOnce() -> Result<D, CaptureError>,
    {
        self.stop();
        match acquire() {
            Ok(device) => {
                tracing::info!(size = ?device.frame_size(), "camera capture started");
                self.device = Some(device);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "camera acquisition failed; streaming disabled");
                Err(e)
            }
        }
    }

    /// Release the device. Safe to call when already stopped or never started.
    pub fn stop(&mut self) {
        if let Some(mut device) = self.device.take() {
            device.stop_tracks();
            tracing::info!("camera capture stopped");
        }
    }

    #[must_use]
    pub fn is_streaming(&self) -> bool {
        self.device.is_some()
    }

    #[must_use]
    pub fn device(&self) -> Option<&D> {
        self.device.as_ref()
    }
}

impl<D: CameraDevice> Drop for CaptureSession<D> {
    fn drop(&mut self) {
        self.stop();
    }
}
