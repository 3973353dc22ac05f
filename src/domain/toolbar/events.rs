//! Journal of observable toolbar changes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SelectorField, ToolId};

/// Something observable that happened to a toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolbarEvent {
    /// A tool's active flag actually flipped.
    ActiveChanged { tool: ToolId, active: bool },
    /// A gesture selector now names the tool that won its class.
    SelectorMirrored { field: SelectorField, tool: ToolId },
    /// A gesture selector referenced a missing tool and was cleared.
    SelectorReset { field: SelectorField, missing: ToolId },
    /// `active_inspect` referenced a missing inspector and was cleared.
    InspectSelectorReset { missing: ToolId },
    /// `active_inspect` lost references to missing inspectors.
    InspectSelectorNarrowed { kept: Vec<ToolId> },
}

impl ToolbarEvent {
    /// Returns the event type name.
    pub fn event_type(&self) -> &'static str {
        match self {
            ToolbarEvent::ActiveChanged { .. } => "toolbar.active_changed",
            ToolbarEvent::SelectorMirrored { .. } => "toolbar.selector_mirrored",
            ToolbarEvent::SelectorReset { .. } => "toolbar.selector_reset",
            ToolbarEvent::InspectSelectorReset { .. } => "toolbar.inspect_selector_reset",
            ToolbarEvent::InspectSelectorNarrowed { .. } => "toolbar.inspect_selector_narrowed",
        }
    }

    /// Returns true if this is a flag flip of `tool`.
    pub fn is_toggle_of(&self, tool: ToolId) -> bool {
        matches!(self, ToolbarEvent::ActiveChanged { tool: t, .. } if *t == tool)
    }
}
