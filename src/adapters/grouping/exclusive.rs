//! Exclusive grouping - one active tool per gesture class.

use tracing::debug;

use crate::domain::foundation::ToolId;
use crate::domain::toolbar::{Tool, ToolGroups, ToolKind, ToolTable, Toolbar, ToolbarError};
use crate::ports::ToolGrouping;

/// Default [`ToolGrouping`] implementation.
///
/// Groups tools by kind in insertion order. Activating a gesture tool
/// switches off every other active tool of its class and mirrors the winner
/// into the class's selector field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExclusiveGrouping;

impl ExclusiveGrouping {
    pub fn new() -> Self {
        Self
    }
}

impl ToolGrouping for ExclusiveGrouping {
    /// Flags are left untouched. The first active tool of a class, if any,
    /// is recorded as the group's active tool until an activation settles it.
    fn classify(&self, tools: &ToolTable) -> ToolGroups {
        let mut groups = ToolGroups::new();

        for tool in tools.iter() {
            match tool.kind() {
                ToolKind::Gesture(gesture) => {
                    groups.push_gesture_tool(gesture, tool.id());
                    let group = groups.gesture_mut(gesture);
                    if tool.is_active() && group.active.is_none() {
                        group.active = Some(tool.id());
                    }
                }
                ToolKind::Inspect => groups.push_inspector(tool.id()),
                ToolKind::Action => groups.push_action(tool.id()),
            }
        }

        groups
    }

    fn active_changed(&self, toolbar: &mut Toolbar, tool: ToolId) -> Result<(), ToolbarError> {
        let Some(gesture) = toolbar.tool(tool).and_then(Tool::gesture_type) else {
            return Ok(());
        };

        if !toolbar.tools().is_active(tool) {
            if toolbar.active_tool(gesture) == Some(tool) {
                toolbar.mark_gesture_active(gesture, None);
            }
            return Ok(());
        }

        toolbar.mark_gesture_active(gesture, Some(tool));

        let siblings: Vec<ToolId> = toolbar
            .active_tools(gesture)
            .into_iter()
            .filter(|id| *id != tool)
            .collect();
        for sibling in siblings {
            debug!(tool = %sibling, winner = %tool, "switching off sibling");
            toolbar.set_tool_active(sibling, false)?;
        }

        if let Some(field) = gesture.selector_field() {
            toolbar.mirror_selector(field, tool);
        }
        Ok(())
    }
}
