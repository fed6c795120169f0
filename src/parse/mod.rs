//! Input formats for functional dependencies
//!
//! Turns text into an [`FdSet`]. Three formats are supported:
//!
//! - **text**: `A,B-->C;C-->D` with configurable separators
//! - **json**: `[{"left": ["A", "B"], "right": ["C"]}]`
//! - **yaml**: a list of mappings with `left` and `right` lists
//!
//! A [`Parser`] is chosen per format with [`Parser::for_format`].

mod json;
mod text;
mod yaml;

pub use json::{parse_json, schema as json_schema};
pub use text::{TextParser, TextParserSettings, EMPTY_LHS_OR_RHS_MESSAGE, INVALID_SEPARATORS_MESSAGE};
pub use yaml::parse_yaml;

use crate::error::{Error, Result};
use crate::fd::{FdRecord, FdSet, FunctionalDependency};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParseFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl ParseFormat {
    /// Every supported format
    pub const ALL: [ParseFormat; 3] = [ParseFormat::Text, ParseFormat::Json, ParseFormat::Yaml];

    pub fn name(self) -> &'static str {
        match self {
            ParseFormat::Text => "text",
            ParseFormat::Json => "json",
            ParseFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ParseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParseFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ParseFormat::Text),
            "json" => Ok(ParseFormat::Json),
            "yaml" | "yml" => Ok(ParseFormat::Yaml),
            other => Err(Error::Other(format!(
                "Format \"{}\" is not one of the valid formats ({})",
                other,
                ParseFormat::ALL.map(ParseFormat::name).join(", ")
            ))),
        }
    }
}

/// Settings for every parser, as found in the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParserSettings {
    /// Separators for the text format
    #[serde(default)]
    pub text: TextParserSettings,
}

/// A parser for one input format
#[derive(Debug, Clone)]
pub enum Parser {
    Text(TextParser),
    Json,
    Yaml,
}

impl Parser {
    /// Build the parser for `format`
    ///
    /// Fails if the text separators in `settings` are invalid, even when
    /// another format is requested, so a broken config never goes unnoticed.
    pub fn for_format(format: ParseFormat, settings: &ParserSettings) -> Result<Self> {
        let text = TextParser::new(settings.text.clone())?;
        Ok(match format {
            ParseFormat::Text => Parser::Text(text),
            ParseFormat::Json => Parser::Json,
            ParseFormat::Yaml => Parser::Yaml,
        })
    }

    /// Format handled by this parser
    pub fn format(&self) -> ParseFormat {
        match self {
            Parser::Text(_) => ParseFormat::Text,
            Parser::Json => ParseFormat::Json,
            Parser::Yaml => ParseFormat::Yaml,
        }
    }

    /// Parse `value` into a set of FDs
    pub fn parse(&self, value: &str) -> Result<FdSet> {
        match self {
            Parser::Text(parser) => parser.parse(value),
            Parser::Json => parse_json(value),
            Parser::Yaml => parse_yaml(value),
        }
    }
}

/// Parse `value` in `format` with default settings
pub fn parse(format: ParseFormat, value: &str) -> Result<FdSet> {
    Parser::for_format(format, &ParserSettings::default())?.parse(value)
}

/// Convert decoded records, naming the 1-based position of a bad one
fn records_to_set(format: ParseFormat, records: Vec<FdRecord>) -> Result<FdSet> {
    let mut fds = FdSet::new();
    for (i, record) in records.into_iter().enumerate() {
        let fd = FunctionalDependency::try_from(record).map_err(|e| {
            Error::parse(
                format,
                format!("{}. Please check functional dependency {}", e, i + 1),
            )
        })?;
        fds.insert(fd);
    }
    Ok(fds)
}
