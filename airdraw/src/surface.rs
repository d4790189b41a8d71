//! The drawing-surface capability.
//!
//! The pipeline never reaches for a global editor. Whatever receives the
//! synthesized input is handed in as a [`DrawSurface`]: it accepts pointer
//! events and tool changes, and answers queries about its current tool,
//! pressed buttons and modifier keys. The pipeline reads that state but
//! never owns it.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use serde::Serialize;

use crate::pointer::{Button, Modifiers, PointerEvent, PointerPhase};

/// Commands and queries the pipeline needs from a drawing surface.
pub trait DrawSurface {
    /// Deliver a synthesized pointer event.
    fn dispatch_pointer(&mut self, event: &PointerEvent);

    /// Activate the tool with the given identifier.
    fn set_tool(&mut self, tool: &str);

    /// Identifier of the active tool, if the surface can report one.
    fn current_tool(&self) -> Option<String>;

    /// Whether `button` is currently held on the surface.
    fn is_pressed(&self, button: Button) -> bool;

    /// Modifier keys currently held; copied onto every synthesized event.
    fn modifiers(&self) -> Modifiers;
}

/// One command received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceCommand {
    Pointer(PointerEvent),
    SetTool { tool: String },
}

/// In-memory surface that records every command it receives.
///
/// Tracks the primary button the way an editor would: pressed after a `down`,
/// released after an `up`.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<SurfaceCommand>,
    pub tool: Option<String>,
    pub modifiers: Modifiers,
    pub primary_pressed: bool,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tool(tool: &str) -> Self {
        Self { tool: Some(tool.to_string()), ..Self::default() }
    }

    /// Recorded pointer events in dispatch order.
    pub fn pointer_events(&self) -> impl Iterator<Item = &PointerEvent> {
        self.commands.iter().filter_map(|cmd| match cmd {
            SurfaceCommand::Pointer(event) => Some(event),
            SurfaceCommand::SetTool { .. } => None,
        })
    }

    /// Number of recorded pointer events with the given phase.
    #[must_use]
    pub fn count(&self, phase: PointerPhase) -> usize {
        self.pointer_events().filter(|e| e.phase == phase).count()
    }

    /// Tool identifiers in the order they were set.
    #[must_use]
    pub fn tools_set(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                SurfaceCommand::SetTool { tool } => Some(tool.as_str()),
                SurfaceCommand::Pointer(_) => None,
            })
            .collect()
    }

    /// Drain recorded commands, keeping surface state.
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn dispatch_pointer(&mut self, event: &PointerEvent) {
        if event.button == Button::Primary {
            match event.phase {
                PointerPhase::Down => self.primary_pressed = true,
                PointerPhase::Up => self.primary_pressed = false,
                PointerPhase::Move => {}
            }
        }
        self.commands.push(SurfaceCommand::Pointer(*event));
    }

    fn set_tool(&mut self, tool: &str) {
        self.tool = Some(tool.to_string());
        self.commands.push(SurfaceCommand::SetTool { tool: tool.to_string() });
    }

    fn current_tool(&self) -> Option<String> {
        self.tool.clone()
    }

    fn is_pressed(&self, button: Button) -> bool {
        button == Button::Primary && self.primary_pressed
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}
