//! Flat key/value property sets and the operations that carve them up.
//!
//! Every extraction is destructive: an entry that lands in the matched set is
//! gone from the remaining one. The free functions consume the source and hand
//! back both halves as an [`Extraction`]; the `extract_*` methods on
//! [`PropertySet`] do the same in place, leaving the remainder behind.

mod error;
mod filter;
mod flatten;
mod indexed;

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::PropertiesError;
pub use filter::filter_by_prefix;
pub use flatten::flatten;
pub use indexed::extract_indexed;

/// A set of string properties keyed by unique string keys.
///
/// Iteration is always in lexicographic key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertySet {
    entries: BTreeMap<String, String>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copies every entry of `other` into this set, overriding existing keys.
    pub fn merge(&mut self, other: PropertySet) {
        self.entries.extend(other.entries);
    }

    /// Moves every entry whose key starts with `prefix` out of this set.
    pub fn extract_prefixed(&mut self, prefix: &Prefix) -> PropertySet {
        self.extract_with(|source| filter_by_prefix(prefix, source))
    }

    /// Moves the contiguous run `prefix.1`, `prefix.2`, … out of this set.
    pub fn extract_indexed(&mut self, prefix: &Prefix) -> PropertySet {
        self.extract_with(|source| extract_indexed(prefix, source))
    }

    /// Moves the entries under `prefix` out of this set, keyed by their last
    /// path segment.
    pub fn extract_flattened(&mut self, prefix: &Prefix) -> PropertySet {
        self.extract_with(|source| flatten(prefix, source))
    }

    fn extract_with(&mut self, op: impl FnOnce(PropertySet) -> Extraction) -> PropertySet {
        let Extraction { matched, remaining } = op(std::mem::take(self));
        *self = remaining;
        matched
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for PropertySet {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A non-empty key prefix, matched literally and case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Validates `prefix`, rejecting the empty string.
    pub fn new(prefix: impl Into<String>) -> Result<Self, PropertiesError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(PropertiesError::InvalidPrefix);
        }
        Ok(Self(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the key of the `index`-th numbered entry, `prefix.index`.
    pub fn indexed_key(&self, index: usize) -> String {
        format!("{}.{}", self.0, index)
    }
}

impl TryFrom<&str> for Prefix {
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Prefix {
    type Error = PropertiesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two halves of a destructive extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Entries moved out of the source.
    pub matched: PropertySet,
    /// What is left of the source.
    pub remaining: PropertySet,
}
