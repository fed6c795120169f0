//! Delimited text format
//!
//! ```text
//! A,C-->B,D;E-->H
//! ```
//!
//! FDs are separated by the FD separator, the two sides by the left/right
//! separator and attributes by the attribute separator. Whitespace around
//! attribute names is ignored; empty FD chunks (e.g. a trailing `;`) are
//! skipped.

use super::ParseFormat;
use crate::attribute::{AttributeSet, DEFAULT_ATTRIBUTE_SEPARATOR};
use crate::error::{Error, Result};
use crate::fd::{FdSet, FunctionalDependency};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const EMPTY_LHS_OR_RHS_MESSAGE: &str = "LHS and RHS must not be empty";
pub const INVALID_SEPARATORS_MESSAGE: &str = "All separators must be non-empty strings";

/// Separators used by the text format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextParserSettings {
    /// Between two attributes
    #[serde(default = "default_attribute_separator")]
    pub attribute_separator: String,

    /// Between two functional dependencies
    #[serde(default = "default_fd_separator")]
    pub fd_separator: String,

    /// Between the left and right side of a functional dependency
    #[serde(default = "default_left_right_separator")]
    pub left_right_separator: String,
}

fn default_attribute_separator() -> String {
    DEFAULT_ATTRIBUTE_SEPARATOR.to_string()
}

fn default_fd_separator() -> String {
    ";".to_string()
}

fn default_left_right_separator() -> String {
    "-->".to_string()
}

impl Default for TextParserSettings {
    fn default() -> Self {
        Self {
            attribute_separator: default_attribute_separator(),
            fd_separator: default_fd_separator(),
            left_right_separator: default_left_right_separator(),
        }
    }
}

impl TextParserSettings {
    /// All separators must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.attribute_separator.is_empty()
            || self.fd_separator.is_empty()
            || self.left_right_separator.is_empty()
        {
            return Err(Error::Config(INVALID_SEPARATORS_MESSAGE.to_string()));
        }
        Ok(())
    }
}

/// Parser for the delimited text format
#[derive(Debug, Clone)]
pub struct TextParser {
    settings: TextParserSettings,
}

impl TextParser {
    /// Fails with [`Error::Config`] if any separator is empty
    pub fn new(settings: TextParserSettings) -> Result<Self> {
        settings.validate()?;
        Ok(TextParser { settings })
    }

    pub fn settings(&self) -> &TextParserSettings {
        &self.settings
    }

    /// Parse `value` into a set of FDs
    pub fn parse(&self, value: &str) -> Result<FdSet> {
        let mut fds = FdSet::new();
        for chunk in value.split(self.settings.fd_separator.as_str()) {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }
            fds.insert(self.parse_fd(chunk)?);
        }
        Ok(fds)
    }

    fn parse_fd(&self, fd: &str) -> Result<FunctionalDependency> {
        let separator = self.settings.left_right_separator.as_str();
        let sides: Vec<&str> = fd.split(separator).collect();
        if sides.len() != 2 {
            return Err(invalid_fd(
                &format!("LHS and RHS must be separated by \"{}\"", separator),
                fd,
            ));
        }

        let (left, right) = (sides[0], sides[1]);
        if left.trim().is_empty() || right.trim().is_empty() {
            return Err(invalid_fd(EMPTY_LHS_OR_RHS_MESSAGE, fd));
        }

        let attribute_separator = self.settings.attribute_separator.as_str();
        let left = AttributeSet::parse(left, attribute_separator)
            .map_err(|e| invalid_fd(&e.to_string(), fd))?;
        let right = AttributeSet::parse(right, attribute_separator)
            .map_err(|e| invalid_fd(&e.to_string(), fd))?;
        Ok(FunctionalDependency::new(left, right))
    }
}

fn invalid_fd(message: &str, fd: &str) -> Error {
    Error::parse(
        ParseFormat::Text,
        format!("{}. Invalid functional dependency \"{}\"", message, fd),
    )
}
