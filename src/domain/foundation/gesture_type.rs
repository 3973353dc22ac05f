//! GestureType enum and the selector fields gesture classes map onto.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A class of continuous input that at most one tool handles at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureType {
    Pan,
    Scroll,
    Pinch,
    Tap,
    DoubleTap,
    Press,
    Rotate,
    Move,
    Multi,
}

impl GestureType {
    /// Returns all gesture types in canonical order.
    ///
    /// Selector application walks classes in this order.
    pub fn all() -> &'static [GestureType] {
        &[
            GestureType::Pan,
            GestureType::Scroll,
            GestureType::Pinch,
            GestureType::Tap,
            GestureType::DoubleTap,
            GestureType::Press,
            GestureType::Rotate,
            GestureType::Move,
            GestureType::Multi,
        ]
    }

    /// Returns the selector field driving this class, if any.
    pub fn selector_field(&self) -> Option<SelectorField> {
        match self {
            GestureType::Tap => Some(SelectorField::Tap),
            GestureType::Pan => Some(SelectorField::Drag),
            GestureType::Pinch | GestureType::Scroll => Some(SelectorField::Scroll),
            GestureType::Multi => Some(SelectorField::Multi),
            GestureType::DoubleTap
            | GestureType::Press
            | GestureType::Rotate
            | GestureType::Move => None,
        }
    }

    /// Returns true if an `auto` selector may activate a default tool.
    ///
    /// Only tap and pan have a conventional always-on default.
    pub fn supports_auto(&self) -> bool {
        matches!(self, GestureType::Tap | GestureType::Pan)
    }

    /// Returns the wire name of this gesture type.
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureType::Pan => "pan",
            GestureType::Scroll => "scroll",
            GestureType::Pinch => "pinch",
            GestureType::Tap => "tap",
            GestureType::DoubleTap => "doubletap",
            GestureType::Press => "press",
            GestureType::Rotate => "rotate",
            GestureType::Move => "move",
            GestureType::Multi => "multi",
        }
    }
}

impl fmt::Display for GestureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GestureType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GestureType::all()
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("gesture", format!("unknown gesture '{}'", s))
            })
    }
}

/// Toolbar selector fields that gesture classes map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorField {
    Drag,
    Scroll,
    Tap,
    Multi,
}

impl SelectorField {
    /// Returns the toolbar attribute name.
    pub fn attribute(&self) -> &'static str {
        match self {
            SelectorField::Drag => "active_drag",
            SelectorField::Scroll => "active_scroll",
            SelectorField::Tap => "active_tap",
            SelectorField::Multi => "active_multi",
        }
    }
}

impl fmt::Display for SelectorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.attribute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_9_gestures_in_order() {
        let all = GestureType::all();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], GestureType::Pan);
        assert_eq!(all[3], GestureType::Tap);
        assert_eq!(all[8], GestureType::Multi);
    }

    #[test]
    fn pinch_and_scroll_share_a_selector() {
        assert_eq!(GestureType::Pinch.selector_field(), Some(SelectorField::Scroll));
        assert_eq!(GestureType::Scroll.selector_field(), Some(SelectorField::Scroll));
    }

    #[test]
    fn selectorless_classes_map_to_none() {
        for gesture in [
            GestureType::DoubleTap,
            GestureType::Press,
            GestureType::Rotate,
            GestureType::Move,
        ] {
            assert_eq!(gesture.selector_field(), None);
        }
    }

    #[test]
    fn only_tap_and_pan_support_auto() {
        let supported: Vec<_> = GestureType::all()
            .iter()
            .filter(|g| g.supports_auto())
            .copied()
            .collect();
        assert_eq!(supported, vec![GestureType::Pan, GestureType::Tap]);
    }

    #[test]
    fn from_str_round_trips_wire_names() {
        for gesture in GestureType::all() {
            assert_eq!(gesture.as_str().parse::<GestureType>().unwrap(), *gesture);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("swipe".parse::<GestureType>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let parsed: GestureType = serde_json::from_str("\"doubletap\"").unwrap();
        assert_eq!(parsed, GestureType::DoubleTap);
    }

    #[test]
    fn selector_field_displays_attribute() {
        assert_eq!(SelectorField::Drag.to_string(), "active_drag");
    }
}
