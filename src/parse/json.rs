//! JSON format
//!
//! ```json
//! [
//!   { "left": ["A", "B"], "right": ["C"] },
//!   { "left": ["C"], "right": ["D", "E"] }
//! ]
//! ```

use super::{records_to_set, ParseFormat};
use crate::error::{Error, Result};
use crate::fd::{FdRecord, FdSet};

/// Parse a JSON array of FD objects. Blank input is an empty set.
pub fn parse_json(value: &str) -> Result<FdSet> {
    if value.trim().is_empty() {
        return Ok(FdSet::new());
    }
    let records: Vec<FdRecord> = serde_json::from_str(value).map_err(|e| {
        Error::parse(
            ParseFormat::Json,
            format!("Fail to validate JSON string. {}", e),
        )
    })?;
    records_to_set(ParseFormat::Json, records)
}

/// JSON Schema of the accepted document
pub fn schema() -> Result<String> {
    let schema = schemars::schema_for!(Vec<FdRecord>);
    Ok(serde_json::to_string_pretty(&schema)?)
}
