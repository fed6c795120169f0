//! Attribute sets
//!
//! An [`AttributeSet`] is an immutable, non-empty set of attribute names.
//! Two sets are equal when they hold the same names, whatever order they
//! were built in. Operations that "modify" a set return a new one.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Attribute separator of the text input format unless configured otherwise
pub const DEFAULT_ATTRIBUTE_SEPARATOR: &str = ",";

/// Immutable set of attribute names
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AttributeSet {
    attributes: BTreeSet<String>,
}

impl AttributeSet {
    /// Build a set from attribute names
    ///
    /// Fails with [`Error::InvalidValue`] when no names are given or when
    /// any name is empty or whitespace-only. Duplicates collapse.
    pub fn new<I, S>(attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for attribute in attributes {
            let attribute = attribute.into();
            if attribute.trim().is_empty() {
                return Err(Error::InvalidValue(
                    "attribute names must not be empty or blank".to_string(),
                ));
            }
            set.insert(attribute);
        }

        if set.is_empty() {
            return Err(Error::InvalidValue(
                "attribute set must not be empty".to_string(),
            ));
        }

        Ok(AttributeSet { attributes: set })
    }

    /// Build a set holding a single attribute
    pub fn single(attribute: impl Into<String>) -> Result<Self> {
        Self::new([attribute.into()])
    }

    /// Split `text` on `separator` and build a set from the trimmed tokens
    ///
    /// ```
    /// use mincover::AttributeSet;
    /// let set = AttributeSet::parse("A, B,C", ",").unwrap();
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains("B"));
    /// ```
    pub fn parse(text: &str, separator: &str) -> Result<Self> {
        if separator.is_empty() {
            return Err(Error::InvalidValue(
                "attribute separator must not be empty".to_string(),
            ));
        }
        Self::new(text.split(separator).map(str::trim))
    }

    /// Wrap a set the caller already knows is valid (non-empty, no blank names)
    pub(crate) fn from_validated(attributes: BTreeSet<String>) -> Self {
        debug_assert!(!attributes.is_empty());
        AttributeSet { attributes }
    }

    /// Singleton built from a name taken out of another valid set
    pub(crate) fn singleton(attribute: &str) -> Self {
        AttributeSet {
            attributes: BTreeSet::from([attribute.to_string()]),
        }
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Always false; kept for API symmetry with std collections
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Check membership of a single attribute
    pub fn contains(&self, attribute: &str) -> bool {
        self.attributes.contains(attribute)
    }

    /// Every attribute of `self` is in `other`
    pub fn is_subset(&self, other: &AttributeSet) -> bool {
        self.attributes.is_subset(&other.attributes)
    }

    /// Every attribute of `other` is in `self`
    pub fn is_superset(&self, other: &AttributeSet) -> bool {
        self.attributes.is_superset(&other.attributes)
    }

    /// Iterate attribute names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    /// Smallest attribute name
    pub fn first(&self) -> Option<&str> {
        self.attributes.first().map(String::as_str)
    }

    /// New set holding the attributes of both sets
    pub fn union(&self, other: &AttributeSet) -> AttributeSet {
        AttributeSet {
            attributes: self.attributes.union(&other.attributes).cloned().collect(),
        }
    }

    /// New set without `attribute`, or `None` if that would leave it empty
    pub fn without(&self, attribute: &str) -> Option<AttributeSet> {
        let attributes: BTreeSet<String> = self
            .attributes
            .iter()
            .filter(|a| a.as_str() != attribute)
            .cloned()
            .collect();
        if attributes.is_empty() {
            None
        } else {
            Some(AttributeSet { attributes })
        }
    }

    /// Borrow the underlying ordered set
    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.attributes
    }
}

impl TryFrom<Vec<String>> for AttributeSet {
    type Error = Error;

    fn try_from(attributes: Vec<String>) -> Result<Self> {
        AttributeSet::new(attributes)
    }
}

impl From<AttributeSet> for Vec<String> {
    fn from(set: AttributeSet) -> Self {
        set.attributes.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().collect();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(set: &AttributeSet) -> u64 {
        let mut hasher = DefaultHasher::new();
        set.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = AttributeSet::new(["A", "B", "C"]).unwrap();
        let b = AttributeSet::new(["C", "A", "B"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = AttributeSet::new(["A", "A", "B"]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_set_rejected() {
        let err = AttributeSet::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(AttributeSet::new(["A", "  "]).is_err());
        assert!(AttributeSet::new([""]).is_err());
        assert!(AttributeSet::single("\t").is_err());
    }

    #[test]
    fn test_parse_trims_tokens() {
        let set = AttributeSet::parse(" A ,B,  C", ",").unwrap();
        assert_eq!(set, AttributeSet::new(["A", "B", "C"]).unwrap());
    }

    #[test]
    fn test_parse_rejects_empty_token() {
        assert!(AttributeSet::parse("A,,B", ",").is_err());
        assert!(AttributeSet::parse("A,B", "").is_err());
    }

    #[test]
    fn test_subset_and_superset() {
        let small = AttributeSet::new(["A"]).unwrap();
        let big = AttributeSet::new(["A", "B"]).unwrap();
        assert!(small.is_subset(&big));
        assert!(big.is_superset(&small));
        assert!(!big.is_subset(&small));
    }

    #[test]
    fn test_union_and_without_return_new_sets() {
        let ab = AttributeSet::new(["A", "B"]).unwrap();
        let c = AttributeSet::single("C").unwrap();
        let abc = ab.union(&c);
        assert_eq!(abc.len(), 3);
        assert_eq!(ab.len(), 2);

        assert_eq!(ab.without("A"), Some(AttributeSet::single("B").unwrap()));
        assert_eq!(c.without("C"), None);
    }

    #[test]
    fn test_display_is_sorted() {
        let set = AttributeSet::new(["C", "A", "B"]).unwrap();
        assert_eq!(set.to_string(), "A, B, C");
    }

    #[test]
    fn test_deserialize_validates() {
        let set: AttributeSet = serde_json::from_str(r#"["B", "A"]"#).unwrap();
        assert_eq!(set.first(), Some("A"));
        assert!(serde_json::from_str::<AttributeSet>("[]").is_err());
        assert!(serde_json::from_str::<AttributeSet>(r#"["A", " "]"#).is_err());
    }
}
