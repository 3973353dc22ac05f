//! Toolbar module - Tools, selectors and the selection resolver.
//!
//! A toolbar owns a table of tools and five selector fields declaring which
//! tool should handle each gesture class and which inspectors stay enabled.
//! [`ToolSelectionResolver`] keeps the tools' active flags consistent with
//! those selectors whenever the tool collection changes.

mod aggregate;
mod errors;
mod events;
mod groups;
mod resolver;
mod selectors;
mod tool;
mod tool_table;

pub use aggregate::{Toolbar, ToolbarSettings};
pub use errors::ToolbarError;
pub use events::ToolbarEvent;
pub use groups::{GestureGroup, ToolGroups};
pub use resolver::ToolSelectionResolver;
pub use selectors::{ActiveSelectors, GestureSelector, InspectSelector};
pub use tool::{Tool, ToolKind, DEFAULT_ORDER};
pub use tool_table::ToolTable;
