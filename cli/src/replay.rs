//! Offline replay of recorded landmark frames through a gesture session.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use airdraw::config::{ConfigError, PipelineConfig};
use airdraw::hand::HandObservation;
use airdraw::pointer::PointerPhase;
use airdraw::scaling::{FrameGeometry, Size};
use airdraw::session::SessionCore;
use airdraw::surface::{RecordingSurface, SurfaceCommand};
use serde::{Deserialize, Serialize};

/// One recorded frame, as written by the capture host.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameRecord {
    /// Video presentation time in seconds.
    pub ts: f64,
    #[serde(default)]
    pub frame: Option<Size>,
    #[serde(default)]
    pub viewport: Option<Size>,
    #[serde(default)]
    pub hands: Vec<HandObservation>,
}

/// A surface command tagged with the frame that produced it.
#[derive(Debug, Serialize)]
pub struct EventLine {
    pub frame: usize,
    pub ts: f64,
    #[serde(flatten)]
    pub command: SurfaceCommand,
}

/// Totals for a whole replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub frames: usize,
    pub skipped: usize,
    pub degraded: usize,
    pub downs: usize,
    pub moves: usize,
    pub ups: usize,
    pub tool_changes: usize,
    pub final_tool: Option<String>,
    /// Frame index at which a ring pinch stopped capture.
    pub stopped_at: Option<usize>,
}

/// Drives a session over recorded frames against an in-memory surface.
pub struct Replay {
    session: SessionCore,
    surface: RecordingSurface,
    window: Size,
    /// Geometry of the last processed frame; the closing `up` reuses it.
    geometry: Option<FrameGeometry>,
    summary: Summary,
}

impl Replay {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `config` is invalid.
    pub fn new(config: PipelineConfig, window: Size) -> Result<Self, ConfigError> {
        let session = SessionCore::new(config)?;
        let mut surface = RecordingSurface::new();
        session.bind(&mut surface);
        Ok(Self { session, surface, window, geometry: None, summary: Summary::default() })
    }

    /// Commands issued while binding, before any frame.
    pub fn take_pending(&mut self) -> Vec<SurfaceCommand> {
        let commands = self.surface.take_commands();
        self.tally(&commands);
        commands
    }

    /// Feed one record. Returns the commands it produced.
    pub fn step(&mut self, record: &FrameRecord) -> Vec<SurfaceCommand> {
        let index = self.summary.frames;
        self.summary.frames += 1;

        if self.summary.stopped_at.is_some() || !self.session.begin_frame(record.ts) {
            self.summary.skipped += 1;
            return Vec::new();
        }

        let geometry = FrameGeometry::new(record.frame, record.viewport, record.viewport.unwrap_or(self.window));
        self.geometry = Some(geometry);
        let report = self.session.process_hands(&geometry, &record.hands, &mut self.surface);
        if report.degraded_geometry {
            self.summary.degraded += 1;
        }
        if report.stop_requested {
            tracing::info!(frame = index, "ring pinch stopped capture");
            self.session.reset(&geometry, &mut self.surface);
            self.summary.stopped_at = Some(index);
        }

        let commands = self.surface.take_commands();
        self.tally(&commands);
        commands
    }

    /// Records fed so far, including skipped ones.
    #[must_use]
    pub fn frames_seen(&self) -> usize {
        self.summary.frames
    }

    /// Close any open stroke and return the totals plus the closing commands.
    pub fn finish(mut self) -> (Summary, Vec<SurfaceCommand>) {
        let geometry = self.geometry.unwrap_or_else(|| FrameGeometry::new(None, None, self.window));
        self.session.reset(&geometry, &mut self.surface);
        let commands = self.surface.take_commands();
        self.tally(&commands);
        self.summary.final_tool = self.surface.tool.clone();
        (self.summary, commands)
    }

    fn tally(&mut self, commands: &[SurfaceCommand]) {
        for command in commands {
            match command {
                SurfaceCommand::Pointer(event) => match event.phase {
                    PointerPhase::Down => self.summary.downs += 1,
                    PointerPhase::Move => self.summary.moves += 1,
                    PointerPhase::Up => self.summary.ups += 1,
                },
                SurfaceCommand::SetTool { .. } => self.summary.tool_changes += 1,
            }
        }
    }
}

/// Parse one JSON Lines record. Blank lines yield `None`.
///
/// # Errors
///
/// Returns the decode error for malformed lines.
pub fn parse_record(line: &str) -> Result<Option<FrameRecord>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}
