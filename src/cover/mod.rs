//! # Minimal cover
//!
//! Reduces a set of functional dependencies to an equivalent minimal
//! (canonical) cover: every FD has a single right-hand attribute, no
//! determinant attribute is extraneous and no FD is redundant.
//!
//! The reduction runs three phases in a fixed order. Each phase establishes
//! what the next one needs: phase 1 makes every FD single-RHS, which the
//! closure computations of phases 2 and 3 require.
//!
//! ## Example
//!
//! ```
//! use mincover::{find_minimal_cover, FdSet, FunctionalDependency};
//!
//! let fds: FdSet = vec![
//!     FunctionalDependency::parse("A", "B,C", ",").unwrap(),
//!     FunctionalDependency::parse("B", "C", ",").unwrap(),
//!     FunctionalDependency::parse("A,B", "C", ",").unwrap(),
//! ]
//! .into();
//!
//! let cover = find_minimal_cover(&fds).unwrap();
//! // A --> C follows from A --> B and B --> C
//! assert_eq!(cover.len(), 2);
//! ```

pub mod reduce;

pub use reduce::{decompose_rhs, remove_extraneous_fds, remove_extraneous_lhs_attributes};

use crate::error::Result;
use crate::fd::FdSet;
use serde::Serialize;

/// The phases of a minimal cover reduction
///
/// Implementors provide the three phases; [`MinimalCover::find_minimal_cover`]
/// always composes them in the same order.
pub trait MinimalCover {
    /// Phase 1: single right-hand attribute per FD
    fn decompose_rhs(&self, fds: &FdSet) -> FdSet;

    /// Phase 2: drop extraneous determinant attributes
    fn remove_extraneous_lhs_attributes(&self, fds: &FdSet) -> FdSet;

    /// Phase 3: drop FDs derivable from the others
    fn remove_extraneous_fds(&self, fds: &FdSet) -> Result<FdSet>;

    /// Run all three phases
    fn find_minimal_cover(&self, fds: &FdSet) -> Result<FdSet> {
        let single_rhs = self.decompose_rhs(fds);
        let reduced_lhs = self.remove_extraneous_lhs_attributes(&single_rhs);
        self.remove_extraneous_fds(&reduced_lhs)
    }

    /// Run all three phases and keep the intermediate results
    fn find_minimal_cover_steps(&self, fds: &FdSet) -> Result<CoverSteps> {
        let single_rhs = self.decompose_rhs(fds);
        let reduced_lhs = self.remove_extraneous_lhs_attributes(&single_rhs);
        let minimal = self.remove_extraneous_fds(&reduced_lhs)?;
        Ok(CoverSteps {
            input: fds.clone(),
            single_rhs,
            reduced_lhs,
            minimal,
        })
    }
}

/// Standard reduction
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMinimalCover;

impl MinimalCover for DefaultMinimalCover {
    fn decompose_rhs(&self, fds: &FdSet) -> FdSet {
        reduce::decompose_rhs(fds)
    }

    fn remove_extraneous_lhs_attributes(&self, fds: &FdSet) -> FdSet {
        reduce::remove_extraneous_lhs_attributes(fds)
    }

    fn remove_extraneous_fds(&self, fds: &FdSet) -> Result<FdSet> {
        reduce::remove_extraneous_fds(fds)
    }
}

/// Input and output of every phase of one reduction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverSteps {
    /// FDs as given
    pub input: FdSet,
    /// After phase 1
    pub single_rhs: FdSet,
    /// After phase 2
    pub reduced_lhs: FdSet,
    /// After phase 3: the minimal cover
    pub minimal: FdSet,
}

/// Find the minimal cover of `fds` with [`DefaultMinimalCover`]
pub fn find_minimal_cover(fds: &FdSet) -> Result<FdSet> {
    DefaultMinimalCover.find_minimal_cover(fds)
}

/// Like [`find_minimal_cover`], also returning each phase's result
pub fn find_minimal_cover_steps(fds: &FdSet) -> Result<CoverSteps> {
    DefaultMinimalCover.find_minimal_cover_steps(fds)
}
