//! The validator facade.
//!
//! [`Validator`] owns a [`TypeRegistry`], defines user types and matches
//! values. Each `matches*` call replaces the errors returned by
//! [`Validator::errors`]; [`Validator::validate`] returns them instead and
//! can run concurrently.

use rayon::prelude::*;
use serde_json::Value;

use crate::error::{ErrorMap, TypeError};
use crate::matcher::match_type;
use crate::path::JsonPath;
use crate::registry::TypeRegistry;
use crate::types::{Definition, TypeRef};
use crate::validation::{MatchContext, MatchMode, MatchReport};

/// Matches decoded values against named and inline types.
///
/// # Example
///
/// ```rust
/// use jsv::{Definition, ObjectDef, TypeRef, Validator};
/// use serde_json::json;
///
/// let mut validator = Validator::new();
/// validator
///     .define_type("user", Definition::object(
///         ObjectDef::new()
///             .field("name", "string")
///             .field("age", "integer")
///             .field("tags", TypeRef::list_of("string")),
///     ))
///     .unwrap();
///
/// let ok = validator
///     .matches(&json!({"name": "John", "age": 18, "tags": ["a"]}), "user")
///     .unwrap();
/// assert!(ok);
///
/// let ok = validator.matches(&json!({"name": 1, "age": 18, "tags": []}), "user").unwrap();
/// assert!(!ok);
/// assert_eq!(
///     validator.errors().get("$.name"),
///     Some("The path of '$.name' requires to be a string, integer is given"),
/// );
/// ```
pub struct Validator {
    registry: TypeRegistry,
    mode: MatchMode,
    last_errors: ErrorMap,
}

impl Validator {
    /// Creates a validator with its own registry of built-in types.
    pub fn new() -> Self {
        Self::with_registry(TypeRegistry::new())
    }

    /// Creates a validator over an existing registry.
    ///
    /// Registries are shared on clone, so several validators built from
    /// clones of one registry see each other's definitions.
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self {
            registry,
            mode: MatchMode::default(),
            last_errors: ErrorMap::new(),
        }
    }

    /// Sets the mode used by [`Validator::matches`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use jsv::{MatchMode, ObjectDef, TypeRef, Validator};
    /// use serde_json::json;
    ///
    /// let mut validator = Validator::new().with_mode(MatchMode::Strict);
    /// let point = TypeRef::object(ObjectDef::new().field("x", "number"));
    ///
    /// assert!(!validator.matches(&json!({"x": 1, "y": 2}), point).unwrap());
    /// ```
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the registry this validator resolves names through.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Defines a new named type.
    ///
    /// A predicate definition that returns false records
    /// `requires to be a <name>` at the failing path, like a built-in type.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::DuplicateType` if the name is already defined,
    /// built-in names included, and `TypeError::InvalidTypeName` for an
    /// empty or `?`-prefixed name.
    pub fn define_type(
        &self,
        name: impl Into<String>,
        definition: impl Into<Definition>,
    ) -> Result<(), TypeError> {
        self.registry.define(name, definition)
    }

    /// Matches `value` against `ty` using the configured mode.
    ///
    /// Returns `Ok(false)` on a mismatch; the messages are then available
    /// from [`Validator::errors`] until the next `matches*` call.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::UnknownType` if a name that has to be resolved is
    /// not defined.
    pub fn matches(&mut self, value: &Value, ty: impl Into<TypeRef>) -> Result<bool, TypeError> {
        let mode = self.mode;
        self.matches_with(value, ty, mode)
    }

    /// Matches `value` against `ty` with strict key checking.
    pub fn matches_strict(
        &mut self,
        value: &Value,
        ty: impl Into<TypeRef>,
    ) -> Result<bool, TypeError> {
        self.matches_with(value, ty, MatchMode::Strict)
    }

    /// Matches `value` against `ty` in the given mode.
    pub fn matches_with(
        &mut self,
        value: &Value,
        ty: impl Into<TypeRef>,
        mode: MatchMode,
    ) -> Result<bool, TypeError> {
        self.last_errors.clear();
        let report = self.validate(value, &ty.into(), mode)?;
        self.last_errors = report.errors;
        Ok(report.matched)
    }

    /// Returns the errors of the most recent `matches*` call.
    pub fn errors(&self) -> &ErrorMap {
        &self.last_errors
    }

    /// Matches `value` against `ty` and returns the full report.
    ///
    /// This does not touch [`Validator::errors`], so it can be called from
    /// many threads on a shared validator.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::UnknownType` if a name that has to be resolved is
    /// not defined.
    pub fn validate(
        &self,
        value: &Value,
        ty: &TypeRef,
        mode: MatchMode,
    ) -> Result<MatchReport, TypeError> {
        let ctx = MatchContext::new(&self.registry, mode);
        let report = MatchReport::from(match_type(value, ty, &JsonPath::root(), &ctx)?);

        tracing::trace!(
            matched = report.matched,
            errors = report.errors.len(),
            strict = mode.is_strict(),
            "matched value"
        );
        Ok(report)
    }

    /// Validates many values against one type in parallel.
    ///
    /// Reports are returned in the order of `values`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jsv::{MatchMode, Validator};
    /// use serde_json::json;
    ///
    /// let validator = Validator::new();
    /// let values = vec![json!(1), json!("two"), json!(3)];
    ///
    /// let reports = validator.validate_batch(&values, &"integer".into(), MatchMode::Lenient);
    /// let matched: Vec<_> = reports.into_iter().map(|r| r.unwrap().matched).collect();
    /// assert_eq!(matched, vec![true, false, true]);
    /// ```
    pub fn validate_batch(
        &self,
        values: &[Value],
        ty: &TypeRef,
        mode: MatchMode,
    ) -> Vec<Result<MatchReport, TypeError>> {
        values
            .par_iter()
            .map(|value| self.validate(value, ty, mode))
            .collect()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
