//! Tool entity and its capability kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{GestureType, ToolId, ValidationError};

/// Default priority for tools that don't declare one.
pub const DEFAULT_ORDER: i32 = 10;

/// What a tool is able to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Handles exactly one gesture class.
    Gesture(GestureType),
    /// Passive inspector; any number may be enabled at once.
    Inspect,
    /// One-shot button. Classified but never selected.
    Action,
}

impl ToolKind {
    /// Returns the gesture class for gesture tools.
    pub fn gesture(&self) -> Option<GestureType> {
        match self {
            ToolKind::Gesture(gesture) => Some(*gesture),
            ToolKind::Inspect | ToolKind::Action => None,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolKind::Gesture(gesture) => write!(f, "{}", gesture),
            ToolKind::Inspect => write!(f, "inspect"),
            ToolKind::Action => write!(f, "action"),
        }
    }
}

impl FromStr for ToolKind {
    type Err = ValidationError;

    /// Parses `inspect`, `action`, or any gesture name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inspect" => Ok(ToolKind::Inspect),
            "action" => Ok(ToolKind::Action),
            other => other.parse::<GestureType>().map(ToolKind::Gesture).map_err(|_| {
                ValidationError::invalid_format("kind", format!("unknown tool kind '{}'", other))
            }),
        }
    }
}

/// A toolbar tool.
///
/// # Invariants
///
/// - `id` is unique within a toolbar's tool table
/// - `kind` never changes after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    id: ToolId,
    name: String,
    kind: ToolKind,
    active: bool,
    default_order: i32,
}

impl Tool {
    /// Creates an inactive tool with a fresh id and the default order.
    pub fn new(name: impl Into<String>, kind: ToolKind) -> Self {
        Self {
            id: ToolId::new(),
            name: name.into(),
            kind,
            active: false,
            default_order: DEFAULT_ORDER,
        }
    }

    /// Creates a gesture tool.
    pub fn gesture(name: impl Into<String>, gesture: GestureType) -> Self {
        Self::new(name, ToolKind::Gesture(gesture))
    }

    /// Creates an inspector tool.
    pub fn inspector(name: impl Into<String>) -> Self {
        Self::new(name, ToolKind::Inspect)
    }

    /// Creates an action tool.
    pub fn action(name: impl Into<String>) -> Self {
        Self::new(name, ToolKind::Action)
    }

    /// Sets the priority. Lower values sort first.
    pub fn with_default_order(mut self, default_order: i32) -> Self {
        self.default_order = default_order;
        self
    }

    /// Sets the initial active flag, e.g. for a tool a proxy already switched on.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Replaces the generated id.
    pub fn with_id(mut self, id: ToolId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> ToolId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    /// Returns the gesture class for gesture tools.
    pub fn gesture_type(&self) -> Option<GestureType> {
        self.kind.gesture()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn default_order(&self) -> i32 {
        self.default_order
    }

    /// Sets the flag without any notification. Returns true if it changed.
    pub(crate) fn set_active(&mut self, active: bool) -> bool {
        let changed = self.active != active;
        self.active = active;
        changed
    }
}
