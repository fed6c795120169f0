//! Rendering of reduction results
//!
//! Text output is meant for people; JSON and YAML output use the same shape
//! as the input formats, so a rendered cover can be fed back in.

use crate::attribute::AttributeSet;
use crate::cover::CoverSteps;
use crate::error::{Error, Result};
use crate::fd::FdSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(Error::Other(format!("Unknown output format: {}", other))),
        }
    }
}

/// Render a minimal cover
pub fn render_cover(cover: &FdSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text_block("Minimal Cover", cover)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(cover)?),
        OutputFormat::Yaml => Ok(serde_norway::to_string(cover)?),
    }
}

/// Render every phase of a reduction
pub fn render_steps(steps: &CoverSteps, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let blocks = [
                text_block("Input", &steps.input),
                text_block("Single RHS attribute", &steps.single_rhs),
                text_block("No extraneous LHS attributes", &steps.reduced_lhs),
                text_block("Minimal Cover", &steps.minimal),
            ];
            Ok(blocks.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(steps)?),
        OutputFormat::Yaml => Ok(serde_norway::to_string(steps)?),
    }
}

/// Render the closure of `attributes`
pub fn render_closure(
    attributes: &AttributeSet,
    closure: &AttributeSet,
    format: OutputFormat,
) -> Result<String> {
    #[derive(Serialize)]
    struct ClosureOutput<'a> {
        attributes: &'a AttributeSet,
        closure: &'a AttributeSet,
    }

    let output = ClosureOutput {
        attributes,
        closure,
    };
    match format {
        OutputFormat::Text => Ok(format!("{{{}}}+ = {{{}}}", attributes, closure)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&output)?),
        OutputFormat::Yaml => Ok(serde_norway::to_string(&output)?),
    }
}

/// Titled list, one FD per line, sorted for stable output
fn text_block(title: &str, fds: &FdSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", title, fds.len());
    for fd in fds.sorted() {
        let _ = writeln!(out, "{}", fd);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::find_minimal_cover_steps;
    use crate::fd::FunctionalDependency;
    use crate::parse::parse_json;

    fn cover() -> FdSet {
        vec![
            FunctionalDependency::parse("C", "A", ",").unwrap(),
            FunctionalDependency::parse("A", "D", ",").unwrap(),
        ]
        .into()
    }

    #[test]
    fn test_text_cover_is_sorted() {
        let text = render_cover(&cover(), OutputFormat::Text).unwrap();
        assert_eq!(text, "Minimal Cover (2)\nA --> D\nC --> A\n");
    }

    #[test]
    fn test_json_output_parses_back() {
        let json = render_cover(&cover(), OutputFormat::Json).unwrap();
        assert_eq!(parse_json(&json).unwrap(), cover());
    }

    #[test]
    fn test_yaml_output_parses_back() {
        let yaml = render_cover(&cover(), OutputFormat::Yaml).unwrap();
        assert_eq!(crate::parse::parse_yaml(&yaml).unwrap(), cover());
    }

    #[test]
    fn test_steps_text_has_every_phase() {
        let steps = find_minimal_cover_steps(&cover()).unwrap();
        let text = render_steps(&steps, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Input (2)"));
        assert!(text.contains("Single RHS attribute (2)"));
        assert!(text.contains("No extraneous LHS attributes (2)"));
        assert!(text.contains("Minimal Cover (2)"));
    }

    #[test]
    fn test_closure_text() {
        let a = AttributeSet::single("A").unwrap();
        let closure = AttributeSet::new(["A", "D"]).unwrap();
        assert_eq!(
            render_closure(&a, &closure, OutputFormat::Text).unwrap(),
            "{A}+ = {A, D}"
        );
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("html".parse::<OutputFormat>().is_err());
    }
}
