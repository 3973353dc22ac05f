//! Integration tests for building toolbars from configuration files.
//!
//! These tests verify the end-to-end flow:
//! 1. A YAML file is loaded with environment overrides
//! 2. Tool names in selectors resolve to the built tools
//! 3. The assembled toolbar is reconciled before it is returned

use std::io::Write;
use std::sync::Arc;

use toolbar_selection::adapters::ExclusiveGrouping;
use toolbar_selection::config::{ConfigError, ToolbarConfig, ValidationError};
use toolbar_selection::domain::foundation::GestureType;
use toolbar_selection::domain::toolbar::{GestureSelector, InspectSelector};

// =============================================================================
// Test Infrastructure
// =============================================================================

const TOOLBAR_YAML: &str = r#"
tools:
  - name: pan
    kind: pan
    default_order: 2
  - name: box_zoom
    kind: pan
    default_order: 1
  - name: wheel_zoom
    kind: scroll
  - name: pinch
    kind: pinch
  - name: tap
    kind: tap
  - name: hover
    kind: inspect
    active: true
  - name: crosshair
    kind: inspect
    active: true
  - name: reset
    kind: action
selectors:
  active_scroll: pinch
  active_inspect: [crosshair]
behavior:
  reconcile_on_selector_change: true
logging:
  level: warn
"#;

fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =============================================================================
// Loading and building
// =============================================================================

#[test]
fn configured_toolbar_is_reconciled() {
    let file = write_yaml(TOOLBAR_YAML);
    let config = ToolbarConfig::load(Some(file.path())).unwrap();
    let toolbar = config.build(Arc::new(ExclusiveGrouping::new())).unwrap();

    let tools = toolbar.tools();
    let box_zoom = tools.find_by_name("box_zoom").unwrap();
    let pan = tools.find_by_name("pan").unwrap();
    let pinch = tools.find_by_name("pinch").unwrap();
    let wheel = tools.find_by_name("wheel_zoom").unwrap();
    let hover = tools.find_by_name("hover").unwrap();
    let crosshair = tools.find_by_name("crosshair").unwrap();

    // auto drag picks the lowest default order
    assert!(box_zoom.is_active());
    assert!(!pan.is_active());
    assert_eq!(toolbar.gesture_tools(GestureType::Pan), &[box_zoom.id(), pan.id()]);

    assert!(pinch.is_active());
    assert!(!wheel.is_active());
    assert_eq!(toolbar.selectors().active_scroll, GestureSelector::Tool(pinch.id()));

    assert!(crosshair.is_active());
    assert!(!hover.is_active());
    assert_eq!(
        toolbar.selectors().active_inspect,
        InspectSelector::Tools(vec![crosshair.id()])
    );

    assert!(toolbar.settings().reconcile_on_selector_change);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn selector_change_reconciles_when_enabled() {
    let config = ToolbarConfig::from_yaml_str(TOOLBAR_YAML).unwrap();
    let mut toolbar = config.build(Arc::new(ExclusiveGrouping::new())).unwrap();
    let pan = toolbar.tools().find_by_name("pan").unwrap().id();
    let box_zoom = toolbar.tools().find_by_name("box_zoom").unwrap().id();

    toolbar.set_active_drag(GestureSelector::Tool(pan));

    assert!(toolbar.tools().is_active(pan));
    assert!(!toolbar.tools().is_active(box_zoom));
    assert_eq!(toolbar.active_tool(GestureType::Pan), Some(pan));
}

#[test]
fn inspector_in_gesture_selector_is_rejected() {
    let config = ToolbarConfig::from_yaml_str(
        "tools:\n  - {name: hover, kind: inspect}\nselectors:\n  active_tap: hover\n",
    )
    .unwrap();

    let result = config.build(Arc::new(ExclusiveGrouping::new()));

    assert!(matches!(
        result,
        Err(ConfigError::ValidationFailed(ValidationError::WrongToolKind {
            field: "active_tap",
            ..
        }))
    ));
}

#[test]
fn unknown_tool_kind_is_rejected() {
    let config =
        ToolbarConfig::from_yaml_str("tools:\n  - {name: lasso, kind: lasso}\n").unwrap();

    assert!(matches!(
        config.validate(),
        Err(ValidationError::InvalidToolKind { .. })
    ));
}
