//! Selection reconciliation.
//!
//! Runs after every tool-collection change, once the grouping collaborator
//! has re-classified the tool table:
//!
//! 1. Inspector reconciliation against `active_inspect`
//! 2. Priority sort and listener wiring for every gesture tool
//! 3. Application of the gesture selectors
//! 4. Settling classes a selector left with several active tools
//!
//! Wiring finishes for every class before any selector is applied, since an
//! activation synchronously reaches the collaborator and its broadcast
//! expects every sibling to be wired.

use tracing::debug;

use crate::domain::foundation::{GestureType, ToolId};

use super::{GestureSelector, InspectSelector, Tool, Toolbar};

/// Reconciles a toolbar's selectors with its tools' active flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolSelectionResolver;

impl ToolSelectionResolver {
    pub fn new() -> Self {
        Self
    }

    /// Runs the full pass. Never fails; dangling selectors are corrected.
    pub fn reconcile(&self, toolbar: &mut Toolbar) {
        debug!(tools = toolbar.tools().len(), "reconciling toolbar selection");
        self.reconcile_inspectors(toolbar);
        self.wire_gesture_tools(toolbar);
        self.apply_gesture_selectors(toolbar);
        self.settle_gesture_classes(toolbar);
    }

    /// Brings inspector flags in line with `active_inspect`.
    ///
    /// A single selected inspector that is no longer live only clears the
    /// selector; unlike a plain "disable every non-match" sweep, no flag moves.
    pub fn reconcile_inspectors(&self, toolbar: &mut Toolbar) {
        let inspectors = toolbar.inspectors().to_vec();

        match toolbar.selectors().active_inspect.clone() {
            // Inspectors are enabled by convention; nothing is forced off.
            InspectSelector::Auto => {}
            InspectSelector::Tool(selected) => {
                if !inspectors.contains(&selected) {
                    toolbar.reset_inspect_selector(selected);
                    return;
                }
                // The selected inspector keeps whatever flag it has.
                for id in inspectors.iter().filter(|id| **id != selected) {
                    toolbar.set_flag(*id, false);
                }
            }
            InspectSelector::Tools(selected) => {
                let kept: Vec<ToolId> = selected
                    .iter()
                    .copied()
                    .filter(|id| inspectors.contains(id))
                    .collect();
                if kept.len() != selected.len() {
                    toolbar.narrow_inspect_selector(kept.clone());
                }
                for id in inspectors.iter().filter(|id| !kept.contains(id)) {
                    toolbar.set_flag(*id, false);
                }
            }
            InspectSelector::Unset => {
                for id in &inspectors {
                    toolbar.set_flag(*id, false);
                }
            }
        }
    }

    /// Sorts every gesture class by `default_order` and wires its tools.
    ///
    /// The sort is stable, so equal orders keep their classification order.
    pub fn wire_gesture_tools(&self, toolbar: &mut Toolbar) {
        for gesture in GestureType::all() {
            let mut ordered = toolbar.gesture_tools(*gesture).to_vec();
            ordered.sort_by_key(|id| toolbar.tool(*id).map_or(i32::MAX, Tool::default_order));

            for id in &ordered {
                toolbar.wire(*id);
            }
            toolbar.set_gesture_order(*gesture, ordered);
        }
    }

    /// Activates the tool each gesture selector asks for.
    ///
    /// `Auto` only activates for classes that support it; a selector naming
    /// a tool that left the toolbar is cleared.
    pub fn apply_gesture_selectors(&self, toolbar: &mut Toolbar) {
        for gesture in GestureType::all() {
            let Some(field) = gesture.selector_field() else {
                continue;
            };

            match toolbar.selectors().get(field) {
                GestureSelector::Auto => {
                    if !gesture.supports_auto() {
                        continue;
                    }
                    if let Some(first) = toolbar.gesture_tools(*gesture).first().copied() {
                        debug!(gesture = %gesture, tool = %first, "auto-activating default tool");
                        toolbar.activate(first);
                    }
                }
                GestureSelector::Tool(id) => {
                    if toolbar.tools().contains(id) {
                        toolbar.activate(id);
                    } else {
                        toolbar.reset_selector(field, id);
                    }
                }
                GestureSelector::Unset => {}
            }
        }
    }

    /// Finishes activation for classes that still hold several active tools,
    /// e.g. tools flagged by a proxy in a class whose selector is unset.
    ///
    /// The group's recorded winner is kept when it is among them, otherwise
    /// the highest-priority active tool. Its siblings are switched off by the
    /// collaborator through the signal path.
    pub fn settle_gesture_classes(&self, toolbar: &mut Toolbar) {
        for gesture in GestureType::all() {
            let active = toolbar.active_tools(*gesture);
            if active.len() < 2 {
                continue;
            }
            let winner = toolbar
                .active_tool(*gesture)
                .filter(|id| active.contains(id))
                .unwrap_or(active[0]);
            debug!(gesture = %gesture, tool = %winner, "settling class with several active tools");
            toolbar.activate(winner);
        }
    }
}
