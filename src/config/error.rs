//! Configuration error types

use thiserror::Error;

use crate::domain::toolbar::ToolbarError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration parsing failed: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Toolbar construction failed: {0}")]
    Toolbar(#[from] ToolbarError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Tool name cannot be empty")]
    EmptyToolName,

    #[error("Tool name '{0}' is used more than once")]
    DuplicateToolName(String),

    #[error("'auto' is reserved and cannot name a tool")]
    ReservedToolName,

    #[error("Tool '{tool}' has an invalid kind: {reason}")]
    InvalidToolKind { tool: String, reason: String },

    #[error("{field} references unknown tool '{name}'")]
    UnknownTool { field: &'static str, name: String },

    #[error("{field} references tool '{name}' of the wrong kind")]
    WrongToolKind { field: &'static str, name: String },

    #[error("{0} accepts a single tool, not a list")]
    ListNotAllowed(&'static str),

    #[error("Invalid log filter '{0}'")]
    InvalidLogFilter(String),
}
