//! Toolbar aggregate.
//!
//! The toolbar owns its tool table, the gesture groups derived from it, the
//! five selector fields, and the set of tools whose active-flag changes are
//! forwarded to the grouping collaborator.
//!
//! # Signal path
//!
//! Flipping a wired tool's flag synchronously calls
//! [`ToolGrouping::active_changed`], which may flip further flags. The
//! collaborator is cloned out of its `Arc` before each call so it can mutate
//! the toolbar reentrantly.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::foundation::{GestureType, SelectorField, ToolId};
use crate::ports::ToolGrouping;

use super::{
    ActiveSelectors, GestureSelector, InspectSelector, Tool, ToolGroups, ToolSelectionResolver,
    ToolTable, ToolbarError, ToolbarEvent,
};

/// Behaviour switches for a toolbar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarSettings {
    /// Re-run reconciliation whenever a selector field is assigned.
    ///
    /// Off by default: the embedding application decides when to call
    /// [`Toolbar::reconcile`].
    #[serde(default)]
    pub reconcile_on_selector_change: bool,
}

/// A toolbar resolving which tool handles each gesture class.
///
/// # Invariants
///
/// - After reconciliation no gesture selector references a missing tool
/// - At most one tool per gesture class is active at steady state
/// - The toolbar never creates or destroys tools on its own
pub struct Toolbar {
    tools: ToolTable,
    groups: ToolGroups,
    selectors: ActiveSelectors,
    listeners: HashSet<ToolId>,
    settings: ToolbarSettings,
    grouping: Arc<dyn ToolGrouping>,
    events: Vec<ToolbarEvent>,
}

impl Toolbar {
    /// Creates an empty toolbar with default selectors.
    pub fn new(grouping: Arc<dyn ToolGrouping>) -> Self {
        Self::assemble(
            grouping,
            ToolTable::new(),
            ActiveSelectors::default(),
            ToolbarSettings::default(),
        )
    }

    /// Creates a toolbar from tools and selectors, then reconciles.
    ///
    /// # Errors
    ///
    /// - `DuplicateTool` if two tools share an id
    pub fn with_tools(
        grouping: Arc<dyn ToolGrouping>,
        tools: Vec<Tool>,
        selectors: ActiveSelectors,
    ) -> Result<Self, ToolbarError> {
        Self::with_settings(grouping, tools, selectors, ToolbarSettings::default())
    }

    /// Like [`Toolbar::with_tools`] with explicit settings.
    pub fn with_settings(
        grouping: Arc<dyn ToolGrouping>,
        tools: Vec<Tool>,
        selectors: ActiveSelectors,
        settings: ToolbarSettings,
    ) -> Result<Self, ToolbarError> {
        let tools = ToolTable::from_tools(tools)?;
        Ok(Self::assemble(grouping, tools, selectors, settings))
    }

    fn assemble(
        grouping: Arc<dyn ToolGrouping>,
        tools: ToolTable,
        selectors: ActiveSelectors,
        settings: ToolbarSettings,
    ) -> Self {
        let mut toolbar = Self {
            tools,
            groups: ToolGroups::new(),
            selectors,
            listeners: HashSet::new(),
            settings,
            grouping,
            events: Vec::new(),
        };
        toolbar.tools_changed();
        toolbar
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tool collection
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a tool and reconciles.
    ///
    /// # Errors
    ///
    /// - `DuplicateTool` if the tool is already present
    pub fn add_tool(&mut self, tool: Tool) -> Result<ToolId, ToolbarError> {
        let id = self.tools.insert(tool)?;
        self.tools_changed();
        Ok(id)
    }

    /// Removes a tool and reconciles.
    ///
    /// # Errors
    ///
    /// - `ToolNotFound` if the tool is not present
    pub fn remove_tool(&mut self, id: ToolId) -> Result<Tool, ToolbarError> {
        let tool = self.tools.remove(id).ok_or(ToolbarError::ToolNotFound(id))?;
        self.tools_changed();
        Ok(tool)
    }

    /// Replaces the whole tool collection and reconciles.
    ///
    /// # Errors
    ///
    /// - `DuplicateTool` if two tools share an id; the toolbar is unchanged
    pub fn replace_tools(&mut self, tools: Vec<Tool>) -> Result<(), ToolbarError> {
        self.tools = ToolTable::from_tools(tools)?;
        self.tools_changed();
        Ok(())
    }

    /// Re-classifies the tool table and runs the full selection pass.
    pub fn reconcile(&mut self) {
        self.tools_changed();
    }

    fn tools_changed(&mut self) {
        let grouping = Arc::clone(&self.grouping);
        self.groups = grouping.classify(&self.tools);

        let tools = &self.tools;
        self.listeners.retain(|id| tools.contains(*id));

        ToolSelectionResolver::new().reconcile(self);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selectors
    // ─────────────────────────────────────────────────────────────────────────

    /// Assigns `active_drag`. See [`ActiveSelectors`] for preconditions.
    pub fn set_active_drag(&mut self, selector: GestureSelector) {
        self.selectors.active_drag = selector;
        self.selector_assigned();
    }

    /// Assigns `active_scroll`. `Auto` never activates a scroll or pinch tool.
    pub fn set_active_scroll(&mut self, selector: GestureSelector) {
        self.selectors.active_scroll = selector;
        self.selector_assigned();
    }

    /// Assigns `active_tap`.
    pub fn set_active_tap(&mut self, selector: GestureSelector) {
        self.selectors.active_tap = selector;
        self.selector_assigned();
    }

    /// Assigns `active_multi`.
    pub fn set_active_multi(&mut self, tool: Option<ToolId>) {
        self.selectors.active_multi = tool;
        self.selector_assigned();
    }

    /// Assigns `active_inspect`.
    pub fn set_active_inspect(&mut self, selector: InspectSelector) {
        self.selectors.active_inspect = selector;
        self.selector_assigned();
    }

    /// Assigns all five selectors at once.
    pub fn set_selectors(&mut self, selectors: ActiveSelectors) {
        self.selectors = selectors;
        self.selector_assigned();
    }

    fn selector_assigned(&mut self) {
        if self.settings.reconcile_on_selector_change {
            self.reconcile();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Active flags
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets a tool's active flag through the signal path.
    ///
    /// Setting the flag to its current value is a no-op. A change is
    /// journaled and, for wired tools, forwarded to the collaborator.
    ///
    /// # Errors
    ///
    /// - `ToolNotFound` if the tool is not present
    pub fn set_tool_active(&mut self, id: ToolId, active: bool) -> Result<(), ToolbarError> {
        if !self.tools.contains(id) {
            return Err(ToolbarError::ToolNotFound(id));
        }
        self.set_flag(id, active);
        Ok(())
    }

    /// Makes sure a tool ends up active with its bookkeeping done.
    ///
    /// A tool already flagged active (for example by a proxy toggling several
    /// tools together) is not toggled again; the collaborator's callback runs
    /// directly instead. Calling this twice has the same effect as once.
    ///
    /// # Errors
    ///
    /// - `ToolNotFound` if the tool is not present
    pub fn ensure_activated(&mut self, id: ToolId) -> Result<(), ToolbarError> {
        if !self.tools.contains(id) {
            return Err(ToolbarError::ToolNotFound(id));
        }
        self.activate(id);
        Ok(())
    }

    pub(super) fn activate(&mut self, id: ToolId) {
        if self.tools.is_active(id) {
            debug!(tool = %id, "tool already active, finishing activation");
            self.notify_active_change(id);
        } else {
            self.set_flag(id, true);
        }
    }

    pub(super) fn set_flag(&mut self, id: ToolId, active: bool) {
        if !self.tools.set_active_silently(id, active) {
            return;
        }
        self.events.push(ToolbarEvent::ActiveChanged { tool: id, active });
        if self.listeners.contains(&id) {
            self.notify_active_change(id);
        }
    }

    fn notify_active_change(&mut self, id: ToolId) {
        let grouping = Arc::clone(&self.grouping);
        if let Err(err) = grouping.active_changed(self, id) {
            warn!(tool = %id, error = %err, "active change bookkeeping failed");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Collaborator hooks
    // ─────────────────────────────────────────────────────────────────────────

    /// Records which tool currently handles a gesture class.
    pub fn mark_gesture_active(&mut self, gesture: GestureType, tool: Option<ToolId>) {
        self.groups.gesture_mut(gesture).active = tool;
    }

    /// Points a selector field at the tool that won its class.
    pub fn mirror_selector(&mut self, field: SelectorField, tool: ToolId) {
        if self.selectors.get(field) == GestureSelector::Tool(tool) {
            return;
        }
        self.selectors.mirror(field, tool);
        self.events.push(ToolbarEvent::SelectorMirrored { field, tool });
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resolver hooks
    // ─────────────────────────────────────────────────────────────────────────

    pub(super) fn wire(&mut self, id: ToolId) {
        self.listeners.insert(id);
    }

    pub(super) fn set_gesture_order(&mut self, gesture: GestureType, tools: Vec<ToolId>) {
        self.groups.gesture_mut(gesture).tools = tools;
    }

    pub(super) fn reset_selector(&mut self, field: SelectorField, missing: ToolId) {
        debug!(field = %field, tool = %missing, "selected tool is gone, clearing selector");
        self.selectors.reset(field);
        self.events.push(ToolbarEvent::SelectorReset { field, missing });
    }

    pub(super) fn reset_inspect_selector(&mut self, missing: ToolId) {
        debug!(tool = %missing, "selected inspector is gone, clearing active_inspect");
        self.selectors.active_inspect = InspectSelector::Unset;
        self.events.push(ToolbarEvent::InspectSelectorReset { missing });
    }

    pub(super) fn narrow_inspect_selector(&mut self, kept: Vec<ToolId>) {
        debug!(kept = kept.len(), "dropping missing inspectors from active_inspect");
        self.selectors.active_inspect = InspectSelector::Tools(kept.clone());
        self.events.push(ToolbarEvent::InspectSelectorNarrowed { kept });
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn tool(&self, id: ToolId) -> Option<&Tool> {
        self.tools.get(id)
    }

    pub fn tools(&self) -> &ToolTable {
        &self.tools
    }

    pub fn groups(&self) -> &ToolGroups {
        &self.groups
    }

    /// Returns a gesture class's tools, in priority order after reconciliation.
    pub fn gesture_tools(&self, gesture: GestureType) -> &[ToolId] {
        &self.groups.gesture(gesture).tools
    }

    /// Returns the tool the collaborator recorded as handling a class.
    pub fn active_tool(&self, gesture: GestureType) -> Option<ToolId> {
        self.groups.gesture(gesture).active
    }

    /// Returns every tool of a class whose flag is set.
    pub fn active_tools(&self, gesture: GestureType) -> Vec<ToolId> {
        self.gesture_tools(gesture)
            .iter()
            .copied()
            .filter(|id| self.tools.is_active(*id))
            .collect()
    }

    pub fn inspectors(&self) -> &[ToolId] {
        self.groups.inspectors()
    }

    pub fn actions(&self) -> &[ToolId] {
        self.groups.actions()
    }

    pub fn selectors(&self) -> &ActiveSelectors {
        &self.selectors
    }

    pub fn settings(&self) -> &ToolbarSettings {
        &self.settings
    }

    /// Returns true if the tool's flag changes reach the collaborator.
    pub fn is_wired(&self, id: ToolId) -> bool {
        self.listeners.contains(&id)
    }

    /// Returns the journal of observable changes.
    pub fn events(&self) -> &[ToolbarEvent] {
        &self.events
    }

    /// Drains the journal.
    pub fn take_events(&mut self) -> Vec<ToolbarEvent> {
        std::mem::take(&mut self.events)
    }
}

impl fmt::Debug for Toolbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolbar")
            .field("tools", &self.tools)
            .field("groups", &self.groups)
            .field("selectors", &self.selectors)
            .field("listeners", &self.listeners.len())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ExclusiveGrouping;

    fn toolbar_with(tools: Vec<Tool>, selectors: ActiveSelectors) -> Toolbar {
        Toolbar::with_tools(Arc::new(ExclusiveGrouping::new()), tools, selectors).unwrap()
    }

    #[test]
    fn empty_toolbar_has_default_selectors() {
        let toolbar = Toolbar::new(Arc::new(ExclusiveGrouping::new()));
        assert_eq!(toolbar.selectors(), &ActiveSelectors::default());
        assert!(toolbar.tools().is_empty());
        assert!(toolbar.events().is_empty());
    }

    #[test]
    fn with_tools_rejects_duplicate_ids() {
        let tool = Tool::inspector("hover");
        let result = Toolbar::with_tools(
            Arc::new(ExclusiveGrouping::new()),
            vec![tool.clone(), tool.clone()],
            ActiveSelectors::default(),
        );
        assert_eq!(result.unwrap_err(), ToolbarError::DuplicateTool(tool.id()));
    }

    #[test]
    fn set_tool_active_rejects_unknown_tool() {
        let mut toolbar = toolbar_with(vec![], ActiveSelectors::default());
        let id = ToolId::new();
        assert_eq!(
            toolbar.set_tool_active(id, true),
            Err(ToolbarError::ToolNotFound(id))
        );
        assert_eq!(toolbar.ensure_activated(id), Err(ToolbarError::ToolNotFound(id)));
    }

    #[test]
    fn setting_same_flag_is_not_journaled() {
        let hover = Tool::inspector("hover");
        let id = hover.id();
        let mut toolbar = toolbar_with(vec![hover], ActiveSelectors::default());

        toolbar.set_tool_active(id, false).unwrap();
        assert!(toolbar.events().is_empty());

        toolbar.set_tool_active(id, true).unwrap();
        assert_eq!(
            toolbar.events(),
            &[ToolbarEvent::ActiveChanged { tool: id, active: true }]
        );
    }

    #[test]
    fn user_toggle_swaps_the_active_tool_of_a_class() {
        let box_zoom = Tool::gesture("box_zoom", GestureType::Pan).with_default_order(2);
        let pan = Tool::gesture("pan", GestureType::Pan).with_default_order(1);
        let (box_zoom_id, pan_id) = (box_zoom.id(), pan.id());
        let mut toolbar = toolbar_with(vec![box_zoom, pan], ActiveSelectors::default());
        assert_eq!(toolbar.active_tool(GestureType::Pan), Some(pan_id));

        toolbar.set_tool_active(box_zoom_id, true).unwrap();

        assert_eq!(toolbar.active_tools(GestureType::Pan), vec![box_zoom_id]);
        assert_eq!(toolbar.active_tool(GestureType::Pan), Some(box_zoom_id));
        assert_eq!(
            toolbar.selectors().active_drag,
            GestureSelector::Tool(box_zoom_id)
        );
    }

    #[test]
    fn deactivating_the_active_tool_clears_the_group_marker() {
        let tap = Tool::gesture("tap", GestureType::Tap);
        let id = tap.id();
        let mut toolbar = toolbar_with(vec![tap], ActiveSelectors::default());
        assert_eq!(toolbar.active_tool(GestureType::Tap), Some(id));

        toolbar.set_tool_active(id, false).unwrap();

        assert_eq!(toolbar.active_tool(GestureType::Tap), None);
    }

    #[test]
    fn selector_assignment_does_not_reconcile_by_default() {
        let tap = Tool::gesture("tap", GestureType::Tap);
        let id = tap.id();
        let selectors = ActiveSelectors {
            active_tap: GestureSelector::Unset,
            ..ActiveSelectors::default()
        };
        let mut toolbar = toolbar_with(vec![tap], selectors);

        toolbar.set_active_tap(GestureSelector::Tool(id));
        assert!(!toolbar.tools().is_active(id));

        toolbar.reconcile();
        assert!(toolbar.tools().is_active(id));
    }

    #[test]
    fn selector_assignment_reconciles_when_enabled() {
        let tap = Tool::gesture("tap", GestureType::Tap);
        let id = tap.id();
        let selectors = ActiveSelectors {
            active_tap: GestureSelector::Unset,
            ..ActiveSelectors::default()
        };
        let settings = ToolbarSettings {
            reconcile_on_selector_change: true,
        };
        let mut toolbar = Toolbar::with_settings(
            Arc::new(ExclusiveGrouping::new()),
            vec![tap],
            selectors,
            settings,
        )
        .unwrap();

        toolbar.set_active_tap(GestureSelector::Tool(id));
        assert!(toolbar.tools().is_active(id));
    }

    #[test]
    fn remove_tool_drops_its_listener() {
        let pan = Tool::gesture("pan", GestureType::Pan);
        let id = pan.id();
        let mut toolbar = toolbar_with(vec![pan], ActiveSelectors::default());
        assert!(toolbar.is_wired(id));

        let removed = toolbar.remove_tool(id).unwrap();
        assert_eq!(removed.id(), id);
        assert!(!toolbar.is_wired(id));
        assert_eq!(toolbar.remove_tool(id).unwrap_err(), ToolbarError::ToolNotFound(id));
    }

    #[test]
    fn take_events_drains_journal() {
        let pan = Tool::gesture("pan", GestureType::Pan);
        let mut toolbar = toolbar_with(vec![pan], ActiveSelectors::default());

        assert!(!toolbar.take_events().is_empty());
        assert!(toolbar.events().is_empty());
    }
}
