//! mincover configuration
//!
//! Handles loading of the optional `mincover.yaml` file. Every field has a
//! default, so an empty file (or no file at all) gives the stock behaviour:
//!
//! ```yaml
//! version: 1
//! input_format: text
//! output_format: text
//! parsers:
//!   text:
//!     attribute_separator: ","
//!     fd_separator: ";"
//!     left_right_separator: "-->"
//! ```

use crate::error::{Error, Result};
use crate::parse::{ParseFormat, ParserSettings};
use crate::render::OutputFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the config file looked up in a directory
pub const CONFIG_FILE_NAME: &str = "mincover.yaml";

/// Tool configuration (`mincover.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Format assumed for input when none is given on the command line
    #[serde(default)]
    pub input_format: ParseFormat,

    /// Format used for output when none is given on the command line
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Parser settings
    #[serde(default)]
    pub parsers: ParserSettings,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            input_format: ParseFormat::default(),
            output_format: OutputFormat::default(),
            parsers: ParserSettings::default(),
        }
    }
}

impl Config {
    /// Parse and validate a config document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_norway::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml(&content)
    }

    /// Load `mincover.yaml` from a directory, if present
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_file = dir.join(CONFIG_FILE_NAME);
        if !config_file.exists() {
            return Ok(None);
        }
        Self::load_from_file(&config_file).map(Some)
    }

    /// Explicit file if given, else `mincover.yaml` in `dir`, else defaults
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::load_from_dir(dir)?.unwrap_or_default()),
        }
    }

    /// Check version and parser settings
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(Error::Config(format!(
                "Unsupported {} version: {}",
                CONFIG_FILE_NAME, self.version
            )));
        }
        self.parsers.text.validate()
    }
}
