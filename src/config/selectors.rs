//! Selector declarations
//!
//! Selectors name tools rather than ids. Each field accepts `auto`, `null`
//! or a tool name; `active_inspect` also accepts a list of names.

use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

use crate::domain::foundation::{SelectorField, ToolId};
use crate::domain::toolbar::{ActiveSelectors, GestureSelector, InspectSelector, Tool, ToolKind};

use super::error::ValidationError;

/// Sentinel selecting a sensible default tool.
pub const AUTO: &str = "auto";

/// A configured selector value
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SelectorValue {
    One(String),
    Many(Vec<String>),
}

impl SelectorValue {
    fn is_auto(&self) -> bool {
        matches!(self, SelectorValue::One(name) if name == AUTO)
    }
}

/// The five toolbar selectors
///
/// A missing field takes the toolbar default; an explicit `null` clears it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SelectorsConfig {
    #[serde(default = "default_auto")]
    pub active_drag: Option<SelectorValue>,

    #[serde(default = "default_auto")]
    pub active_scroll: Option<SelectorValue>,

    #[serde(default = "default_auto")]
    pub active_tap: Option<SelectorValue>,

    /// `auto` is accepted but never activates anything
    #[serde(default)]
    pub active_multi: Option<SelectorValue>,

    #[serde(default = "default_auto")]
    pub active_inspect: Option<SelectorValue>,
}

impl Default for SelectorsConfig {
    fn default() -> Self {
        Self {
            active_drag: default_auto(),
            active_scroll: default_auto(),
            active_tap: default_auto(),
            active_multi: None,
            active_inspect: default_auto(),
        }
    }
}

fn default_auto() -> Option<SelectorValue> {
    Some(SelectorValue::One(AUTO.to_string()))
}

impl SelectorsConfig {
    /// Checks every referenced tool exists and fits the field.
    pub fn validate(&self, tools: &HashMap<&str, ToolKind>) -> Result<(), ValidationError> {
        for (field, value) in self.gesture_fields() {
            let Some(value) = value else { continue };
            if value.is_auto() {
                continue;
            }
            let name = single(field, value)?;
            let kind = lookup(tools, field, name)?;
            let fits = kind
                .gesture()
                .and_then(|g| g.selector_field())
                .is_some_and(|f| f.attribute() == field);
            if !fits {
                return Err(ValidationError::WrongToolKind {
                    field,
                    name: name.to_string(),
                });
            }
        }

        let names: Vec<&String> = match &self.active_inspect {
            None => Vec::new(),
            Some(value) if value.is_auto() => Vec::new(),
            Some(SelectorValue::One(name)) => vec![name],
            Some(SelectorValue::Many(names)) => names.iter().collect(),
        };
        for name in names {
            if lookup(tools, "active_inspect", name)? != ToolKind::Inspect {
                return Err(ValidationError::WrongToolKind {
                    field: "active_inspect",
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Resolves names against built tools.
    ///
    /// Expects [`SelectorsConfig::validate`] to have passed; a name that
    /// doesn't resolve still produces an error rather than a panic.
    pub fn resolve(&self, tools: &[Tool]) -> Result<ActiveSelectors, ValidationError> {
        let ids: HashMap<&str, ToolId> = tools.iter().map(|t| (t.name(), t.id())).collect();
        let id_of = |field: &'static str, name: &str| {
            ids.get(name).copied().ok_or_else(|| ValidationError::UnknownTool {
                field,
                name: name.to_string(),
            })
        };
        let gesture = |field: SelectorField,
                       value: &Option<SelectorValue>|
         -> Result<GestureSelector, ValidationError> {
            match value {
                None => Ok(GestureSelector::Unset),
                Some(value) if value.is_auto() => Ok(GestureSelector::Auto),
                Some(value) => {
                    let name = single(field.attribute(), value)?;
                    id_of(field.attribute(), name).map(GestureSelector::Tool)
                }
            }
        };

        let active_multi = match &self.active_multi {
            None => None,
            Some(value) if value.is_auto() => {
                warn!("active_multi does not support 'auto', leaving it unset");
                None
            }
            Some(value) => Some(id_of("active_multi", single("active_multi", value)?)?),
        };

        let active_inspect = match &self.active_inspect {
            None => InspectSelector::Unset,
            Some(value) if value.is_auto() => InspectSelector::Auto,
            Some(SelectorValue::One(name)) => InspectSelector::Tool(id_of("active_inspect", name)?),
            Some(SelectorValue::Many(names)) => InspectSelector::Tools(
                names
                    .iter()
                    .map(|name| id_of("active_inspect", name))
                    .collect::<Result<_, _>>()?,
            ),
        };

        Ok(ActiveSelectors {
            active_drag: gesture(SelectorField::Drag, &self.active_drag)?,
            active_scroll: gesture(SelectorField::Scroll, &self.active_scroll)?,
            active_tap: gesture(SelectorField::Tap, &self.active_tap)?,
            active_multi,
            active_inspect,
        })
    }

    fn gesture_fields(&self) -> [(&'static str, &Option<SelectorValue>); 4] {
        [
            ("active_drag", &self.active_drag),
            ("active_scroll", &self.active_scroll),
            ("active_tap", &self.active_tap),
            ("active_multi", &self.active_multi),
        ]
    }
}

fn single<'a>(field: &'static str, value: &'a SelectorValue) -> Result<&'a str, ValidationError> {
    match value {
        SelectorValue::One(name) => Ok(name),
        SelectorValue::Many(_) => Err(ValidationError::ListNotAllowed(field)),
    }
}

fn lookup(
    tools: &HashMap<&str, ToolKind>,
    field: &'static str,
    name: &str,
) -> Result<ToolKind, ValidationError> {
    tools.get(name).copied().ok_or_else(|| ValidationError::UnknownTool {
        field,
        name: name.to_string(),
    })
}
