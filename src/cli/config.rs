//! CLI configuration file
//!
//! ```json
//! { "chunk_size": 8192, "indent": null, "verbose": false }
//! ```
//!
//! Every field is optional. Command-line flags override file values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::container::ContainerOptions;
use crate::observability::{log_event_with_fields, Event};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Container read/write options
    #[serde(flatten)]
    pub options: ContainerOptions,

    /// Indent width for written JSON (compact if absent)
    #[serde(default)]
    pub indent: Option<usize>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&content)?;

        let display = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", display.as_str())]);

        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.options.validate().map_err(CliError::config_error)
    }
}
