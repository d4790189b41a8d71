//! Pipeline tuning and its validation.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{MIN_STROKE_POINT_DISTANCE, PINCH_THRESHOLD};
use crate::tools::{DEFAULT_TOOLS, ToolCycle};

/// Error returned by [`PipelineConfig::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("pinch threshold must be a positive finite number, got {0}")]
    InvalidPinchThreshold(f64),
    #[error("minimum stroke distance must be a non-negative finite number, got {0}")]
    InvalidMinDistance(f64),
    #[error("tool list must not be empty")]
    EmptyToolList,
    #[error("initial tool `{0}` is not in the tool list")]
    UnknownInitialTool(String),
}

/// Tunables for one gesture session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Normalized fingertip distance that counts as a pinch.
    pub pinch_threshold: f64,
    /// Normalized distance a pinch must travel before a new stroke point is taken.
    pub min_stroke_distance: f64,
    /// Cyclable tool identifiers, in cycle order.
    pub tools: Vec<String>,
    /// Tool activated when a session binds to a surface, if any.
    pub initial_tool: Option<String>,
    /// Treat a ring pinch as a request to stop the camera.
    pub ring_pinch_stops_capture: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: PINCH_THRESHOLD,
            min_stroke_distance: MIN_STROKE_POINT_DISTANCE,
            tools: DEFAULT_TOOLS.iter().map(ToString::to_string).collect(),
            initial_tool: Some("draw".to_string()),
            ring_pinch_stops_capture: false,
        }
    }
}

impl PipelineConfig {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pinch_threshold.is_finite() || self.pinch_threshold <= 0.0 {
            return Err(ConfigError::InvalidPinchThreshold(self.pinch_threshold));
        }
        if !self.min_stroke_distance.is_finite() || self.min_stroke_distance < 0.0 {
            return Err(ConfigError::InvalidMinDistance(self.min_stroke_distance));
        }
        if self.tools.is_empty() {
            return Err(ConfigError::EmptyToolList);
        }
        if let Some(initial) = &self.initial_tool {
            if !self.tools.contains(initial) {
                return Err(ConfigError::UnknownInitialTool(initial.clone()));
            }
        }
        Ok(())
    }

    /// Validate and build the tool cycle in one step.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when validation fails.
    pub fn tool_cycle(&self) -> Result<ToolCycle, ConfigError> {
        self.validate()?;
        ToolCycle::new(self.tools.clone()).ok_or(ConfigError::EmptyToolList)
    }
}
