//! Per-run validation context and results.
//!
//! This module provides the [`MatchContext`] threaded through every recursive
//! match call, the [`MatchMode`] selecting lenient or strict key handling, and
//! the [`MatchReport`] produced by one top-level match.

use stillwater::Validation;

use crate::error::{ErrorMap, Mismatches};
use crate::registry::TypeRegistry;

/// Outcome of matching one value against one type reference.
pub type MatchOutcome = Validation<(), Mismatches>;

/// How map definitions treat the keys of the matched data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Only the defined fields are checked; extra keys are ignored and
    /// missing fields are matched as null.
    #[default]
    Lenient,
    /// The data's key set must equal the definition's key set before any
    /// field is checked.
    Strict,
}

impl MatchMode {
    /// Returns true for [`MatchMode::Strict`].
    pub fn is_strict(self) -> bool {
        self == MatchMode::Strict
    }
}

impl From<bool> for MatchMode {
    fn from(strict: bool) -> Self {
        if strict {
            MatchMode::Strict
        } else {
            MatchMode::Lenient
        }
    }
}

/// State shared by every recursive call of one top-level match.
///
/// The context is read-only; the path is passed alongside it and failures
/// are returned, so independent matches never share mutable state.
#[derive(Clone, Copy)]
pub struct MatchContext<'a> {
    registry: &'a TypeRegistry,
    mode: MatchMode,
}

impl<'a> MatchContext<'a> {
    /// Creates a context resolving names through `registry`.
    pub fn new(registry: &'a TypeRegistry, mode: MatchMode) -> Self {
        Self { registry, mode }
    }

    /// Returns the registry used to resolve type names.
    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// Returns the key handling mode of this match.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }
}

/// Result of one top-level match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Whether the value matched.
    pub matched: bool,
    /// Messages keyed by path; empty when the value matched.
    pub errors: ErrorMap,
}

impl From<MatchOutcome> for MatchReport {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            Validation::Success(()) => MatchReport {
                matched: true,
                errors: ErrorMap::new(),
            },
            Validation::Failure(mismatches) => MatchReport {
                matched: false,
                errors: ErrorMap::from(mismatches),
            },
        }
    }
}
