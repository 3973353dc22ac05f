//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the gesture vocabulary, and error types
//! shared by the toolbar domain.

mod errors;
mod gesture_type;
mod ids;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use gesture_type::{GestureType, SelectorField};
pub use ids::ToolId;
