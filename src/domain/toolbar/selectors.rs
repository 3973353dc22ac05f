//! Declarative selectors naming which tool should be active.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SelectorField, ToolId};

/// Selector for the drag, scroll and tap classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureSelector {
    /// Pick a sensible default. Only honoured for tap and pan.
    #[default]
    Auto,
    /// No tool is requested.
    Unset,
    /// A specific tool.
    Tool(ToolId),
}

impl GestureSelector {
    /// Returns the referenced tool, if any.
    pub fn tool(&self) -> Option<ToolId> {
        match self {
            GestureSelector::Tool(id) => Some(*id),
            GestureSelector::Auto | GestureSelector::Unset => None,
        }
    }
}

impl From<Option<ToolId>> for GestureSelector {
    fn from(value: Option<ToolId>) -> Self {
        value.map_or(GestureSelector::Unset, GestureSelector::Tool)
    }
}

/// Selector for the inspector tools.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectSelector {
    /// All inspectors stay as they are (enabled by convention).
    #[default]
    Auto,
    /// Every inspector is disabled.
    Unset,
    /// Only this inspector may stay enabled.
    Tool(ToolId),
    /// Only these inspectors may stay enabled, in this order.
    Tools(Vec<ToolId>),
}

/// The five selector fields of a toolbar.
///
/// # Preconditions
///
/// A gesture selector must only reference a tool of the class it selects
/// for, and `active_inspect` must only reference inspector tools. Neither is
/// checked during reconciliation; [`crate::config::ToolbarConfig::validate`]
/// enforces it for configured toolbars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSelectors {
    pub active_drag: GestureSelector,
    pub active_scroll: GestureSelector,
    pub active_tap: GestureSelector,
    pub active_multi: Option<ToolId>,
    pub active_inspect: InspectSelector,
}

impl Default for ActiveSelectors {
    fn default() -> Self {
        Self {
            active_drag: GestureSelector::Auto,
            active_scroll: GestureSelector::Auto,
            active_tap: GestureSelector::Auto,
            active_multi: None,
            active_inspect: InspectSelector::Auto,
        }
    }
}

impl ActiveSelectors {
    /// Reads a gesture selector field. `active_multi` never reads as `Auto`.
    pub fn get(&self, field: SelectorField) -> GestureSelector {
        match field {
            SelectorField::Drag => self.active_drag,
            SelectorField::Scroll => self.active_scroll,
            SelectorField::Tap => self.active_tap,
            SelectorField::Multi => self.active_multi.into(),
        }
    }

    /// Clears a gesture selector field.
    pub fn reset(&mut self, field: SelectorField) {
        self.write(field, None);
    }

    /// Points a gesture selector field at the tool that won its class.
    pub fn mirror(&mut self, field: SelectorField, tool: ToolId) {
        self.write(field, Some(tool));
    }

    fn write(&mut self, field: SelectorField, tool: Option<ToolId>) {
        match field {
            SelectorField::Drag => self.active_drag = tool.into(),
            SelectorField::Scroll => self.active_scroll = tool.into(),
            SelectorField::Tap => self.active_tap = tool.into(),
            SelectorField::Multi => self.active_multi = tool,
        }
    }
}
