//! Validation failure types.
//!
//! This module provides [`Mismatch`] for a single failed check,
//! [`Mismatches`] for the non-empty set produced by one failing match, and
//! [`ErrorMap`], the path-keyed view handed back to callers.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use stillwater::prelude::*;

use crate::path::JsonPath;

/// A single failed check at a location in the matched value.
///
/// # Example
///
/// ```rust
/// use jsv::{JsonPath, Mismatch};
///
/// let mismatch = Mismatch::new(
///     JsonPath::root().push_field("age"),
///     "The path of '$.age' requires to be a integer, string is given",
/// );
///
/// assert_eq!(mismatch.path.to_string(), "$.age");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Where the check failed.
    pub path: JsonPath,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Mismatch {
    /// Creates a new mismatch at `path`.
    pub fn new(path: JsonPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }

    /// Creates the standard type mismatch message used by built-in and
    /// predicate checks.
    pub fn type_mismatch(path: &JsonPath, expected: &str, given: &str) -> Self {
        let message = format!(
            "The path of '{}' requires to be a {}, {} is given",
            path, expected, given
        );
        Self::new(path.clone(), message)
    }
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A non-empty collection of mismatches produced by one failing match.
///
/// `Mismatches` implements `Semigroup`, so the failures of sibling fields can
/// be combined while the match keeps walking the remaining fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatches(NonEmptyVec<Mismatch>);

impl Mismatches {
    /// Creates a collection holding one mismatch.
    pub fn single(mismatch: Mismatch) -> Self {
        Self(NonEmptyVec::singleton(mismatch))
    }

    /// Returns the number of mismatches.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the first mismatch.
    pub fn first(&self) -> &Mismatch {
        self.0.head()
    }

    /// Returns an iterator over the mismatches in the order they were found.
    pub fn iter(&self) -> impl Iterator<Item = &Mismatch> {
        self.0.iter()
    }

    /// Converts this collection into a `Vec<Mismatch>`.
    pub fn into_vec(self) -> Vec<Mismatch> {
        self.0.into_vec()
    }
}

impl Semigroup for Mismatches {
    fn combine(self, other: Self) -> Self {
        Mismatches(self.0.combine(other.0))
    }
}

impl IntoIterator for Mismatches {
    type Item = Mismatch;
    type IntoIter = std::vec::IntoIter<Mismatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

/// The errors of one top-level match, keyed by rendered path.
///
/// At most one message is kept per path. Inserting a message for a path that
/// already has one replaces the message but keeps the path's original
/// position, so iteration follows the order in which paths first failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(IndexMap<String, String>);

impl ErrorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` at `path`, replacing any earlier message there.
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.insert(path.into(), message.into());
    }

    /// Returns the message recorded at `path`.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    /// Returns true if a message is recorded at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    /// Returns the number of recorded paths.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the recorded paths in first-failure order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns `(path, message)` pairs in first-failure order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, m)| (p.as_str(), m.as_str()))
    }

    /// Drops all recorded messages.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<Mismatches> for ErrorMap {
    fn from(mismatches: Mismatches) -> Self {
        let mut map = ErrorMap::new();
        for mismatch in mismatches {
            map.insert(mismatch.path.to_string(), mismatch.message);
        }
        map
    }
}

impl Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (path, message) in self.iter() {
            writeln!(f, "{}: {}", path, message)?;
        }
        Ok(())
    }
}

// Reports cross thread boundaries in batch validation.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Mismatches>();
    assert_sync::<Mismatches>();
    assert_send::<ErrorMap>();
    assert_sync::<ErrorMap>();
};
