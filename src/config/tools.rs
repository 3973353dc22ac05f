//! Tool declarations

use serde::Deserialize;

use crate::domain::toolbar::{Tool, ToolKind, DEFAULT_ORDER};

use super::error::ValidationError;
use super::selectors::AUTO;

/// One tool of a configured toolbar
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ToolConfig {
    /// Unique name, referenced by selectors
    pub name: String,

    /// `inspect`, `action`, or a gesture name such as `pan` or `tap`
    pub kind: String,

    /// Priority within the gesture class; lower sorts first
    #[serde(default = "default_order")]
    pub default_order: i32,

    /// Whether the tool starts out active
    #[serde(default)]
    pub active: bool,
}

impl ToolConfig {
    /// Parses the declared kind.
    pub fn tool_kind(&self) -> Result<ToolKind, ValidationError> {
        self.kind
            .parse()
            .map_err(|err: crate::domain::foundation::ValidationError| {
                ValidationError::InvalidToolKind {
                    tool: self.name.clone(),
                    reason: err.to_string(),
                }
            })
    }

    /// Validate the declaration on its own
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyToolName);
        }
        if self.name == AUTO {
            return Err(ValidationError::ReservedToolName);
        }
        self.tool_kind().map(|_| ())
    }

    /// Creates the tool with a fresh id.
    pub fn to_tool(&self) -> Result<Tool, ValidationError> {
        Ok(Tool::new(self.name.clone(), self.tool_kind()?)
            .with_default_order(self.default_order)
            .with_active(self.active))
    }
}

fn default_order() -> i32 {
    DEFAULT_ORDER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::GestureType;

    fn tool(name: &str, kind: &str) -> ToolConfig {
        ToolConfig {
            name: name.to_string(),
            kind: kind.to_string(),
            default_order: DEFAULT_ORDER,
            active: false,
        }
    }

    #[test]
    fn test_tool_defaults() {
        let json = r#"{ "name": "pan", "kind": "pan" }"#;
        let config: ToolConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_order, DEFAULT_ORDER);
        assert!(!config.active);
    }

    #[test]
    fn test_to_tool_carries_settings() {
        let mut config = tool("wheel_zoom", "scroll");
        config.default_order = 3;
        config.active = true;

        let built = config.to_tool().unwrap();
        assert_eq!(built.name(), "wheel_zoom");
        assert_eq!(built.gesture_type(), Some(GestureType::Scroll));
        assert_eq!(built.default_order(), 3);
        assert!(built.is_active());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(tool("  ", "tap").validate(), Err(ValidationError::EmptyToolName));
    }

    #[test]
    fn test_auto_name_rejected() {
        assert_eq!(
            tool("auto", "tap").validate(),
            Err(ValidationError::ReservedToolName)
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(matches!(
            tool("lasso", "lasso").validate(),
            Err(ValidationError::InvalidToolKind { .. })
        ));
    }
}
