//! Toolbar configuration module
//!
//! This module provides type-safe loading of a declarative toolbar
//! description: its tools, its selectors (by tool name), behaviour settings
//! and logging. Configuration is read from an optional file plus environment
//! variables with the `TOOLBAR` prefix; nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use toolbar_selection::adapters::ExclusiveGrouping;
//! use toolbar_selection::config::ToolbarConfig;
//!
//! let config = ToolbarConfig::load(Some(Path::new("toolbar.yaml")))
//!     .expect("Failed to load configuration");
//! let toolbar = config
//!     .build(Arc::new(ExclusiveGrouping::new()))
//!     .expect("Invalid configuration");
//!
//! println!("{} tools", toolbar.tools().len());
//! ```

mod error;
mod logging;
mod selectors;
mod tools;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use selectors::{SelectorValue, SelectorsConfig, AUTO};
pub use tools::ToolConfig;

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::domain::toolbar::{Tool, ToolKind, Toolbar, ToolbarSettings};
use crate::ports::ToolGrouping;

/// Root toolbar configuration
///
/// Load using [`ToolbarConfig::load()`] or parse with
/// [`ToolbarConfig::from_yaml_str()`], then [`ToolbarConfig::build()`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ToolbarConfig {
    /// Tools in toolbar order
    #[serde(default)]
    pub tools: Vec<ToolConfig>,

    /// Which tools start out selected
    #[serde(default)]
    pub selectors: SelectorsConfig,

    /// Toolbar behaviour switches
    #[serde(default)]
    pub behavior: ToolbarSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ToolbarConfig {
    /// Load configuration from a file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `path` if given; the format follows the file extension
    /// 3. Overlays environment variables with the `TOOLBAR` prefix, using
    ///    `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `TOOLBAR__BEHAVIOR__RECONCILE_ON_SELECTOR_CHANGE=true`
    /// - `TOOLBAR__LOGGING__LEVEL=debug`
    /// - `TOOLBAR__SELECTORS__ACTIVE_TAP=tap`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or values cannot be
    /// parsed into the expected types.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("TOOLBAR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Validate all configuration values
    ///
    /// - Tool names are non-empty, unique and not `auto`
    /// - Tool kinds parse
    /// - Selectors reference declared tools of the matching class
    /// - The log filter parses
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        let mut kinds: HashMap<&str, ToolKind> = HashMap::new();
        for tool in &self.tools {
            tool.validate()?;
            if !seen.insert(tool.name.as_str()) {
                return Err(ValidationError::DuplicateToolName(tool.name.clone()));
            }
            kinds.insert(tool.name.as_str(), tool.tool_kind()?);
        }

        self.selectors.validate(&kinds)?;
        self.logging.validate()?;
        Ok(())
    }

    /// Validate, create the tools and assemble a reconciled toolbar
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` for any problem `validate`
    /// reports.
    pub fn build(&self, grouping: Arc<dyn ToolGrouping>) -> Result<Toolbar, ConfigError> {
        self.validate()?;

        let tools: Vec<Tool> = self
            .tools
            .iter()
            .map(ToolConfig::to_tool)
            .collect::<Result<_, _>>()?;
        let selectors = self.selectors.resolve(&tools)?;
        debug!(tools = tools.len(), "building configured toolbar");

        Ok(Toolbar::with_settings(
            grouping,
            tools,
            selectors,
            self.behavior.clone(),
        )?)
    }
}
