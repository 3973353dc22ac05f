//! Owned tool collection addressed by handle.

use crate::domain::foundation::ToolId;

use super::{Tool, ToolbarError};

/// The toolbar's tool collection, in insertion order.
///
/// The table is the single owner of tool values; everything else refers to
/// tools through [`ToolId`] handles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolTable {
    tools: Vec<Tool>,
}

impl ToolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Builds a table from tools, rejecting duplicate ids.
    pub fn from_tools(tools: Vec<Tool>) -> Result<Self, ToolbarError> {
        let mut table = Self::new();
        for tool in tools {
            table.insert(tool)?;
        }
        Ok(table)
    }

    /// Appends a tool.
    ///
    /// # Errors
    ///
    /// - `DuplicateTool` if a tool with the same id is present
    pub fn insert(&mut self, tool: Tool) -> Result<ToolId, ToolbarError> {
        let id = tool.id();
        if self.contains(id) {
            return Err(ToolbarError::DuplicateTool(id));
        }
        self.tools.push(tool);
        Ok(id)
    }

    /// Removes a tool, returning it.
    pub fn remove(&mut self, id: ToolId) -> Option<Tool> {
        let position = self.tools.iter().position(|t| t.id() == id)?;
        Some(self.tools.remove(position))
    }

    pub fn get(&self, id: ToolId) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: ToolId) -> Option<&mut Tool> {
        self.tools.iter_mut().find(|t| t.id() == id)
    }

    pub fn contains(&self, id: ToolId) -> bool {
        self.tools.iter().any(|t| t.id() == id)
    }

    /// Finds a tool by name.
    pub fn find_by_name(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Returns true if the tool exists and is active.
    pub fn is_active(&self, id: ToolId) -> bool {
        self.get(id).is_some_and(Tool::is_active)
    }

    /// Flips a flag without notification. Returns true if it changed.
    pub(crate) fn set_active_silently(&mut self, id: ToolId, active: bool) -> bool {
        self.get_mut(id).is_some_and(|t| t.set_active(active))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    pub fn ids(&self) -> Vec<ToolId> {
        self.tools.iter().map(Tool::id).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::GestureType;

    #[test]
    fn insert_preserves_order() {
        let a = Tool::gesture("a", GestureType::Pan);
        let b = Tool::inspector("b");
        let (a_id, b_id) = (a.id(), b.id());
        let table = ToolTable::from_tools(vec![a, b]).unwrap();

        assert_eq!(table.ids(), vec![a_id, b_id]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let tool = Tool::inspector("hover");
        let copy = tool.clone();
        let mut table = ToolTable::new();
        table.insert(tool).unwrap();

        let err = table.insert(copy.clone()).unwrap_err();
        assert_eq!(err, ToolbarError::DuplicateTool(copy.id()));
    }

    #[test]
    fn remove_returns_tool() {
        let tool = Tool::action("save");
        let id = tool.id();
        let mut table = ToolTable::from_tools(vec![tool]).unwrap();

        assert_eq!(table.remove(id).map(|t| t.id()), Some(id));
        assert!(table.is_empty());
        assert!(table.remove(id).is_none());
    }

    #[test]
    fn set_active_silently_ignores_unknown_ids() {
        let mut table = ToolTable::new();
        assert!(!table.set_active_silently(ToolId::new(), true));
    }

    #[test]
    fn find_by_name_returns_first_match() {
        let table = ToolTable::from_tools(vec![Tool::inspector("hover")]).unwrap();
        assert!(table.find_by_name("hover").is_some());
        assert!(table.find_by_name("crosshair").is_none());
    }
}
