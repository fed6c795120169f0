// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # mincover: minimal cover of functional dependencies
//!
//! Given functional dependencies (FDs) `L --> R` over named attributes,
//! mincover computes an equivalent **minimal (canonical) cover**: every FD
//! has a single right-hand attribute, no left-hand attribute is extraneous
//! and no FD is redundant.
//!
//! ## Quick Start
//!
//! ```rust
//! use mincover::{find_minimal_cover, parse, ParseFormat};
//!
//! let fds = parse(ParseFormat::Text, "A-->D; B,C-->A,D; C-->B; E-->A; E-->D")?;
//! let cover = find_minimal_cover(&fds)?;
//!
//! for fd in cover.sorted() {
//!     // A --> D, C --> A, C --> B, E --> A
//!     let _ = fd.to_string();
//! }
//! assert_eq!(cover.len(), 4);
//! # Ok::<(), mincover::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  TEXT | JSON | YAML                                         │
//! │       │                                                     │
//! │       └──► Parser::parse ──► FdSet                          │
//! │                                                             │
//! │  FdSet                                                      │
//! │       │                                                     │
//! │       ├──► decompose_rhs                  (phase 1)         │
//! │       ├──► remove_extraneous_lhs_attributes (phase 2)       │
//! │       └──► remove_extraneous_fds          (phase 3)         │
//! │                 │                                           │
//! │                 └── compute_closure (fixed point)           │
//! │                                                             │
//! │  FdSet ──► render_cover(format) ──► String                  │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is a set of pure, synchronous functions over immutable
//! values. It is safe to call from several threads on independent inputs.

// Core value types
pub mod attribute;
pub mod error;
pub mod fd;

// Algorithms
pub mod closure;
pub mod cover;

// Adapters
pub mod config;
pub mod parse;
pub mod render;

// Re-exports
pub use attribute::AttributeSet;
pub use closure::{compute_closure, compute_closure_of, ensure_single_rhs};
pub use config::Config;
pub use cover::{
    decompose_rhs, find_minimal_cover, find_minimal_cover_steps, remove_extraneous_fds,
    remove_extraneous_lhs_attributes, CoverSteps, DefaultMinimalCover, MinimalCover,
};
pub use error::{Error, Result};
pub use fd::{FdRecord, FdSet, FunctionalDependency};
pub use parse::{parse, ParseFormat, Parser, ParserSettings, TextParser, TextParserSettings};
pub use render::{render_closure, render_cover, render_steps, OutputFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
