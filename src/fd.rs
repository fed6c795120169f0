//! Functional dependencies and ordered FD sets
//!
//! A [`FunctionalDependency`] `L --> R` says that the attributes in `L`
//! (the determinant) uniquely determine the attributes in `R`. Both sides
//! are non-empty [`AttributeSet`]s, so an FD is valid as soon as it exists.
//!
//! An [`FdSet`] is a value-deduplicated collection of FDs that remembers
//! insertion order. Equality ignores that order; the reduction phases use it
//! to pick a reproducible survivor when several FDs are mutually redundant.

use crate::attribute::AttributeSet;
use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Arrow used between the two sides when an FD is displayed
pub const FD_ARROW: &str = "-->";

/// A functional dependency `left --> right`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "FdRecord", into = "FdRecord")]
pub struct FunctionalDependency {
    left: AttributeSet,
    right: AttributeSet,
}

impl FunctionalDependency {
    /// Create an FD. `left == right` is accepted; the reduction removes it.
    pub fn new(left: AttributeSet, right: AttributeSet) -> Self {
        FunctionalDependency { left, right }
    }

    /// Build an FD from two delimited attribute lists
    ///
    /// ```
    /// use mincover::FunctionalDependency;
    /// let fd = FunctionalDependency::parse("A,B", "C", ",").unwrap();
    /// assert_eq!(fd.to_string(), "A, B --> C");
    /// ```
    pub fn parse(left: &str, right: &str, separator: &str) -> Result<Self> {
        Ok(FunctionalDependency {
            left: AttributeSet::parse(left, separator)?,
            right: AttributeSet::parse(right, separator)?,
        })
    }

    /// Determinant
    pub fn left(&self) -> &AttributeSet {
        &self.left
    }

    /// Dependent attributes
    pub fn right(&self) -> &AttributeSet {
        &self.right
    }

    /// Exactly one attribute on the right
    pub fn is_single_rhs(&self) -> bool {
        self.right.len() == 1
    }

    /// The right-hand attribute of a single-RHS FD
    pub fn rhs_attribute(&self) -> Option<&str> {
        if self.is_single_rhs() {
            self.right.first()
        } else {
            None
        }
    }

    /// `right` is contained in `left` (holds in every relation)
    pub fn is_trivial(&self) -> bool {
        self.right.is_subset(&self.left)
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, FD_ARROW, self.right)
    }
}

/// Wire shape of an FD in JSON and YAML documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
#[schemars(
    title = "Functional dependency",
    description = "The attributes in `left` functionally determine the attributes in `right`"
)]
pub struct FdRecord {
    /// Determinant attributes (non-empty)
    pub left: Vec<String>,

    /// Dependent attributes (non-empty)
    pub right: Vec<String>,
}

impl TryFrom<FdRecord> for FunctionalDependency {
    type Error = Error;

    fn try_from(record: FdRecord) -> Result<Self> {
        let left = AttributeSet::new(record.left)
            .map_err(|e| Error::InvalidValue(format!("left side: {}", e)))?;
        let right = AttributeSet::new(record.right)
            .map_err(|e| Error::InvalidValue(format!("right side: {}", e)))?;
        Ok(FunctionalDependency::new(left, right))
    }
}

impl From<FunctionalDependency> for FdRecord {
    fn from(fd: FunctionalDependency) -> Self {
        FdRecord {
            left: fd.left.into(),
            right: fd.right.into(),
        }
    }
}

/// Insertion-ordered set of functional dependencies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<FunctionalDependency>", into = "Vec<FunctionalDependency>")]
pub struct FdSet {
    fds: Vec<FunctionalDependency>,
}

impl FdSet {
    /// Create an empty set
    pub fn new() -> Self {
        FdSet { fds: Vec::new() }
    }

    /// Number of FDs
    pub fn len(&self) -> usize {
        self.fds.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.fds.is_empty()
    }

    /// Value membership
    pub fn contains(&self, fd: &FunctionalDependency) -> bool {
        self.fds.contains(fd)
    }

    /// Add an FD at the end. Returns false (and changes nothing) if an
    /// equal FD is already present.
    pub fn insert(&mut self, fd: FunctionalDependency) -> bool {
        if self.contains(&fd) {
            return false;
        }
        self.fds.push(fd);
        true
    }

    /// Add every FD from `other`, keeping its order
    pub fn extend_from(&mut self, other: FdSet) {
        for fd in other {
            self.insert(fd);
        }
    }

    /// Remove an FD by value. Returns whether it was present.
    pub fn remove(&mut self, fd: &FunctionalDependency) -> bool {
        match self.position(fd) {
            Some(index) => {
                self.fds.remove(index);
                true
            }
            None => false,
        }
    }

    /// Put `new` where `old` was. If `new` is already elsewhere in the set,
    /// `old` is simply dropped. Returns false if `old` is not present.
    pub fn replace(&mut self, old: &FunctionalDependency, new: FunctionalDependency) -> bool {
        let Some(index) = self.position(old) else {
            return false;
        };
        if old == &new {
            return true;
        }
        if self.contains(&new) {
            self.fds.remove(index);
        } else {
            self.fds[index] = new;
        }
        true
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, FunctionalDependency> {
        self.fds.iter()
    }

    /// FDs in insertion order
    pub fn as_slice(&self) -> &[FunctionalDependency] {
        &self.fds
    }

    /// FDs sorted by value, for stable presentation
    pub fn sorted(&self) -> Vec<&FunctionalDependency> {
        let mut fds: Vec<&FunctionalDependency> = self.fds.iter().collect();
        fds.sort();
        fds
    }

    /// Every FD has a single right-hand attribute
    pub fn is_single_rhs(&self) -> bool {
        self.fds.iter().all(FunctionalDependency::is_single_rhs)
    }

    fn position(&self, fd: &FunctionalDependency) -> Option<usize> {
        self.fds.iter().position(|candidate| candidate == fd)
    }
}

impl PartialEq for FdSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.fds.iter().all(|fd| other.contains(fd))
    }
}

impl Eq for FdSet {}

impl FromIterator<FunctionalDependency> for FdSet {
    fn from_iter<T: IntoIterator<Item = FunctionalDependency>>(iter: T) -> Self {
        let mut set = FdSet::new();
        for fd in iter {
            set.insert(fd);
        }
        set
    }
}

impl IntoIterator for FdSet {
    type Item = FunctionalDependency;
    type IntoIter = std::vec::IntoIter<FunctionalDependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.fds.into_iter()
    }
}

impl<'a> IntoIterator for &'a FdSet {
    type Item = &'a FunctionalDependency;
    type IntoIter = std::slice::Iter<'a, FunctionalDependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.fds.iter()
    }
}

impl From<Vec<FunctionalDependency>> for FdSet {
    fn from(fds: Vec<FunctionalDependency>) -> Self {
        fds.into_iter().collect()
    }
}

impl From<FdSet> for Vec<FunctionalDependency> {
    fn from(set: FdSet) -> Self {
        set.fds
    }
}

impl fmt::Display for FdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fd) in self.fds.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", fd)?;
        }
        Ok(())
    }
}
