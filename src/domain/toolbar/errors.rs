//! Toolbar-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ToolId};

/// Errors from toolbar operations. Reconciliation itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolbarError {
    #[error("Tool {0} is not part of this toolbar")]
    ToolNotFound(ToolId),

    #[error("Tool {0} is already part of this toolbar")]
    DuplicateTool(ToolId),
}

impl ToolbarError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ToolbarError::ToolNotFound(_) => ErrorCode::ToolNotFound,
            ToolbarError::DuplicateTool(_) => ErrorCode::DuplicateTool,
        }
    }
}

impl From<ToolbarError> for DomainError {
    fn from(err: ToolbarError) -> Self {
        let tool = match &err {
            ToolbarError::ToolNotFound(id) | ToolbarError::DuplicateTool(id) => *id,
        };
        DomainError::new(err.code(), err.to_string()).with_detail("tool", tool.to_string())
    }
}
