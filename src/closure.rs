//! Attribute closure
//!
//! The closure of a set of attributes `X` under FDs `F` is every attribute
//! derivable from `X` by repeatedly applying FDs whose left side is already
//! derived. The computation is a fixed point: FDs whose left side is not yet
//! satisfied are set aside and only rescanned after the closure grows.

use crate::attribute::AttributeSet;
use crate::error::{Error, Result};
use crate::fd::{FdSet, FunctionalDependency};
use std::collections::BTreeSet;

/// Fail with [`Error::PreconditionViolation`] unless every FD has exactly
/// one attribute on the right
pub fn ensure_single_rhs(fds: &FdSet) -> Result<()> {
    match fds.iter().find(|fd| !fd.is_single_rhs()) {
        Some(fd) => Err(Error::PreconditionViolation(format!(
            "every FD must have a single right-hand attribute (found `{}`)",
            fd
        ))),
        None => Ok(()),
    }
}

/// Compute the closure of `attributes` under `fds`
///
/// Every FD must be single-RHS; otherwise nothing is computed and
/// [`Error::PreconditionViolation`] is returned.
///
/// ```
/// use mincover::{compute_closure, AttributeSet, FdSet, FunctionalDependency};
/// let fds: FdSet = vec![
///     FunctionalDependency::parse("A", "B", ",").unwrap(),
///     FunctionalDependency::parse("B", "C", ",").unwrap(),
/// ]
/// .into();
/// let closure = compute_closure(&AttributeSet::single("A").unwrap(), &fds).unwrap();
/// assert_eq!(closure.to_string(), "A, B, C");
/// ```
pub fn compute_closure(attributes: &AttributeSet, fds: &FdSet) -> Result<AttributeSet> {
    ensure_single_rhs(fds)?;
    Ok(closure_unchecked(attributes, fds.iter()))
}

/// Closure of a single attribute
pub fn compute_closure_of(attribute: &str, fds: &FdSet) -> Result<AttributeSet> {
    compute_closure(&AttributeSet::single(attribute)?, fds)
}

/// Fixed-point closure over any FDs, without the single-RHS check
///
/// Multi-RHS FDs are handled correctly here (their whole right side is
/// added); the reduction phases call this after validating their input.
pub(crate) fn closure_unchecked<'a, I>(attributes: &AttributeSet, fds: I) -> AttributeSet
where
    I: IntoIterator<Item = &'a FunctionalDependency>,
{
    let mut closure: BTreeSet<String> = attributes.as_set().clone();
    let mut active: Vec<&FunctionalDependency> = fds.into_iter().collect();
    let mut deferred: Vec<&FunctionalDependency> = Vec::with_capacity(active.len());

    loop {
        let mut grew = false;

        while let Some(fd) = active.pop() {
            if fd.left().iter().all(|a| closure.contains(a)) {
                for attribute in fd.right() {
                    if !closure.contains(attribute) {
                        closure.insert(attribute.clone());
                    }
                }
                grew = true;
            } else {
                // Left side not derived yet; retry once the closure grows
                deferred.push(fd);
            }
        }

        if !grew || deferred.is_empty() {
            break;
        }
        active.append(&mut deferred);
    }

    AttributeSet::from_validated(closure)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fds(pairs: &[(&str, &str)]) -> FdSet {
        pairs
            .iter()
            .map(|(l, r)| FunctionalDependency::parse(l, r, ",").unwrap())
            .collect()
    }

    fn set(text: &str) -> AttributeSet {
        AttributeSet::parse(text, ",").unwrap()
    }

    #[test]
    fn test_closure_transitive_chain() {
        let fds = fds(&[("C", "D"), ("B", "C"), ("A", "B")]);
        let closure = compute_closure_of("A", &fds).unwrap();
        assert_eq!(closure, set("A,B,C,D"));
    }

    #[test]
    fn test_closure_needs_whole_left_side() {
        let fds = fds(&[("A,B", "C"), ("C", "D")]);
        assert_eq!(compute_closure_of("A", &fds).unwrap(), set("A"));
        assert_eq!(compute_closure(&set("A,B"), &fds).unwrap(), set("A,B,C,D"));
    }

    #[test]
    fn test_closure_revisits_deferred_fds() {
        // B,C --> D is only applicable after A --> B and A --> C fire
        let fds = fds(&[("B,C", "D"), ("A", "B"), ("D", "E"), ("A", "C")]);
        assert_eq!(compute_closure_of("A", &fds).unwrap(), set("A,B,C,D,E"));
    }

    #[test]
    fn test_closure_empty_fds() {
        let closure = compute_closure(&set("X,Y"), &FdSet::new()).unwrap();
        assert_eq!(closure, set("X,Y"));
    }

    #[test]
    fn test_closure_rejects_multi_rhs() {
        let fds = fds(&[("A", "B"), ("B", "C,D")]);
        let err = compute_closure_of("A", &fds).unwrap_err();
        assert!(matches!(err, Error::PreconditionViolation(_)));
        assert!(err.to_string().contains("single right-hand attribute"));
    }

    #[test]
    fn test_closure_unchecked_handles_multi_rhs() {
        let fds = fds(&[("A", "B,C")]);
        assert_eq!(closure_unchecked(&set("A"), &fds), set("A,B,C"));
    }
}
