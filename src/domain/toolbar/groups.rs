//! Classification of the tool table into gesture groups, inspectors and actions.

use std::collections::HashMap;

use crate::domain::foundation::{GestureType, ToolId};

/// Tools registered for one gesture class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureGroup {
    /// Tools in priority order once reconciled.
    pub tools: Vec<ToolId>,
    /// The tool currently handling this class, if any.
    pub active: Option<ToolId>,
}

/// Result of classifying a tool table.
///
/// Every gesture class always has a group, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolGroups {
    gestures: HashMap<GestureType, GestureGroup>,
    inspectors: Vec<ToolId>,
    actions: Vec<ToolId>,
}

impl Default for ToolGroups {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolGroups {
    /// Creates groups with an empty entry for every gesture class.
    pub fn new() -> Self {
        Self {
            gestures: GestureType::all()
                .iter()
                .map(|g| (*g, GestureGroup::default()))
                .collect(),
            inspectors: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn gesture(&self, gesture: GestureType) -> &GestureGroup {
        // Every class is seeded in `new`, so the entry always exists.
        &self.gestures[&gesture]
    }

    pub fn gesture_mut(&mut self, gesture: GestureType) -> &mut GestureGroup {
        self.gestures.entry(gesture).or_default()
    }

    pub fn inspectors(&self) -> &[ToolId] {
        &self.inspectors
    }

    pub fn actions(&self) -> &[ToolId] {
        &self.actions
    }

    pub fn push_gesture_tool(&mut self, gesture: GestureType, tool: ToolId) {
        self.gesture_mut(gesture).tools.push(tool);
    }

    pub fn push_inspector(&mut self, tool: ToolId) {
        self.inspectors.push(tool);
    }

    pub fn push_action(&mut self, tool: ToolId) {
        self.actions.push(tool);
    }

    /// Returns every gesture tool, class by class in canonical order.
    pub fn gesture_tools(&self) -> Vec<ToolId> {
        GestureType::all()
            .iter()
            .flat_map(|g| self.gesture(*g).tools.iter().copied())
            .collect()
    }
}
