//! YAML format
//!
//! ```yaml
//! - left: [A, B]
//!   right: [C]
//! - left:
//!     - C
//!   right:
//!     - D
//! ```

use super::{records_to_set, ParseFormat};
use crate::error::{Error, Result};
use crate::fd::{FdRecord, FdSet};

const SHAPE_MESSAGE: &str =
    "A functional dependency must be a mapping with list properties left and right.";

/// Parse a YAML list of FD mappings. Blank input is an empty set.
pub fn parse_yaml(value: &str) -> Result<FdSet> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(FdSet::new());
    }
    let records: Vec<FdRecord> = serde_norway::from_str(value)
        .map_err(|e| Error::parse(ParseFormat::Yaml, format!("{} {}", SHAPE_MESSAGE, e)))?;
    records_to_set(ParseFormat::Yaml, records)
}
