//! Tool cycling on a debounced middle pinch.
//!
//! The surface owns the active tool. The cycle only knows the ordered list of
//! cyclable identifiers and, on each edge, asks the surface where it is and
//! tells it where to go next.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use crate::surface::DrawSurface;

/// Tools cycled through by default, in order.
pub const DEFAULT_TOOLS: [&str; 5] = ["select", "hand", "draw", "eraser", "geo"];

/// Ordered list of cyclable tool identifiers. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCycle {
    tools: Vec<String>,
}

impl Default for ToolCycle {
    fn default() -> Self {
        Self { tools: DEFAULT_TOOLS.iter().map(ToString::to_string).collect() }
    }
}

impl ToolCycle {
    /// Build a cycle from `tools`. Returns `None` for an empty list.
    #[must_use]
    pub fn new(tools: Vec<String>) -> Option<Self> {
        (!tools.is_empty()).then_some(Self { tools })
    }

    #[must_use]
    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    #[must_use]
    pub fn position(&self, tool: &str) -> Option<usize> {
        self.tools.iter().position(|t| t == tool)
    }

    /// Tool following `current`. Unknown or missing tools restart at the first entry.
    #[must_use]
    pub fn next_after(&self, current: Option<&str>) -> &str {
        let next = current
            .and_then(|tool| self.position(tool))
            .map_or(0, |i| (i + 1) % self.tools.len());
        &self.tools[next]
    }

    /// Advance the surface's active tool and return the newly activated identifier.
    pub fn advance(&self, surface: &mut dyn DrawSurface) -> String {
        let current = surface.current_tool();
        let next = self.next_after(current.as_deref()).to_string();
        tracing::debug!(from = current.as_deref().unwrap_or("<none>"), to = %next, "tool cycled");
        surface.set_tool(&next);
        next
    }
}
