//! The three reduction phases
//!
//! 1. **Decompose**: split every FD into single-RHS FDs
//! 2. **Trim LHS**: drop determinant attributes derivable from another one
//! 3. **Drop FDs**: remove FDs derivable from the remaining ones
//!
//! Each phase returns a new [`FdSet`]; inputs are never modified.

use crate::attribute::AttributeSet;
use crate::closure::{closure_unchecked, ensure_single_rhs};
use crate::error::Result;
use crate::fd::{FdSet, FunctionalDependency};
use std::collections::BTreeSet;

/// Replace each `L --> R` with `|R|` FDs `L --> r`
///
/// Output keeps input order; split FDs appear in attribute order.
pub fn decompose_rhs(fds: &FdSet) -> FdSet {
    let mut result = FdSet::new();
    for fd in fds {
        if fd.is_single_rhs() {
            result.insert(fd.clone());
            continue;
        }
        for attribute in fd.right().iter() {
            result.insert(FunctionalDependency::new(
                fd.left().clone(),
                AttributeSet::singleton(attribute),
            ));
        }
    }
    result
}

/// Remove extraneous determinant attributes
///
/// For an FD with a composite left side `L`, an attribute `b ∈ L` is dropped
/// when another attribute `a ∈ L` still kept derives it on its own. Closures
/// are always taken over the unmodified input, never over FDs trimmed in this
/// same call. A trimmed FD takes the position of the one it replaces.
pub fn remove_extraneous_lhs_attributes(fds: &FdSet) -> FdSet {
    let mut result = fds.clone();

    for fd in fds.iter().filter(|fd| fd.left().len() > 1) {
        let mut kept: BTreeSet<String> = fd.left().as_set().clone();

        for attribute in fd.left().iter() {
            // Already dropped through another attribute; using it again
            // could empty the left side of mutually-determining pairs
            if !kept.contains(attribute) {
                continue;
            }
            let closure = closure_unchecked(&AttributeSet::singleton(attribute), fds.iter());
            kept.retain(|other| other == attribute || !closure.contains(other));
        }

        if kept.len() != fd.left().len() {
            let trimmed = FunctionalDependency::new(
                AttributeSet::from_validated(kept),
                fd.right().clone(),
            );
            result.replace(fd, trimmed);
        }
    }

    result
}

/// Remove FDs implied by the others
///
/// FDs are checked from last to first in insertion order, against the
/// current list, so FDs removed earlier in the pass no longer count. Among
/// mutually redundant FDs the one inserted first survives.
///
/// Fails with [`crate::Error::PreconditionViolation`] if any FD has more
/// than one right-hand attribute.
pub fn remove_extraneous_fds(fds: &FdSet) -> Result<FdSet> {
    ensure_single_rhs(fds)?;

    let mut working: Vec<FunctionalDependency> = fds.iter().cloned().collect();

    for index in (0..working.len()).rev() {
        let redundant = {
            let fd = &working[index];
            let others = working
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .map(|(_, other)| other);
            let closure = closure_unchecked(fd.left(), others);
            fd.rhs_attribute().is_some_and(|rhs| closure.contains(rhs))
        };

        if redundant {
            working.remove(index);
        }
    }

    Ok(working.into())
}
