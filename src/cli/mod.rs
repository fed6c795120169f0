//! CLI command implementations
//!
//! This module contains all CLI command handlers, organized by category:
//! - `cover`: Reduction commands (cover, closure)
//! - `config`: Configuration, format and schema commands
//! - `util`: Shared utility functions

pub mod config;
pub mod cover;
pub mod util;

// Re-export all command functions for convenient access
pub use config::{cmd_config, cmd_formats, cmd_schema};
pub use cover::{cmd_closure, cmd_cover};
