//! ToolGrouping port - Interface of the gesture/inspector bookkeeping collaborator.
//!
//! The toolbar does not decide how tools are grouped or how mutual exclusion
//! inside a gesture class is carried out. It delegates both to an
//! implementation of this port and only applies its selectors on top.

use crate::domain::foundation::ToolId;
use crate::domain::toolbar::{ToolGroups, ToolTable, Toolbar, ToolbarError};

/// Port for grouping tools and finishing activation bookkeeping.
///
/// Implementations must ensure:
/// - `classify` returns a group for every gesture class, listing each
///   gesture tool exactly once
/// - `active_changed` keeps at most one tool per gesture class active and
///   mirrors the winner into the class's selector field
/// - `active_changed` is idempotent for a tool that is already the winner
///
/// # Example
///
/// ```ignore
/// let toolbar = Toolbar::with_tools(
///     Arc::new(ExclusiveGrouping::new()),
///     tools,
///     ActiveSelectors::default(),
/// )?;
/// ```
pub trait ToolGrouping: Send + Sync {
    /// Sorts the live tool collection into gesture groups, inspectors and
    /// actions. Active flags are not changed here.
    fn classify(&self, tools: &ToolTable) -> ToolGroups;

    /// Bookkeeping after a tool's active flag changed, or after
    /// [`Toolbar::ensure_activated`] found it already active.
    ///
    /// May flip other tools' flags through [`Toolbar::set_tool_active`];
    /// those calls re-enter this method synchronously.
    fn active_changed(&self, toolbar: &mut Toolbar, tool: ToolId) -> Result<(), ToolbarError>;
}
