//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the toolbar domain and the code embedding it. Adapters implement these
//! ports.
//!
//! - `ToolGrouping` - Classifies tools and enforces one active tool per
//!   gesture class

mod tool_grouping;

pub use tool_grouping::ToolGrouping;
