//! Named type storage and resolution.
//!
//! This module provides the [`TypeRegistry`] that maps type names to their
//! [`Definition`]s. Every registry starts with the built-in types.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::TypeError;
use crate::types::{BuiltinType, Definition};

/// Type alias for the definition storage map.
type DefinitionMap = Arc<RwLock<HashMap<String, Arc<Definition>>>>;

/// A thread-safe registry of named type definitions.
///
/// Clones share the same storage, so a type defined through one clone is
/// visible through all of them.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>`:
/// - Any number of matches can resolve names concurrently (read access)
/// - Definitions are serialized (write access)
///
/// # Example
///
/// ```rust
/// use jsv::{Definition, ObjectDef, TypeRegistry};
///
/// let registry = TypeRegistry::new();
/// assert!(registry.contains("integer"));
///
/// registry
///     .define("user", Definition::object(
///         ObjectDef::new().field("name", "string"),
///     ))
///     .unwrap();
///
/// // Names are unique, built-ins included
/// assert!(registry.define("string", Definition::list_of("integer")).is_err());
/// ```
pub struct TypeRegistry {
    types: DefinitionMap,
}

impl TypeRegistry {
    /// Creates a registry holding only the built-in types.
    pub fn new() -> Self {
        let types: HashMap<_, _> = BuiltinType::NAMES
            .iter()
            .map(|(name, builtin)| (name.to_string(), Arc::new(Definition::Builtin(*builtin))))
            .collect();

        Self {
            types: Arc::new(RwLock::new(types)),
        }
    }

    /// Registers a definition under `name`.
    ///
    /// # Errors
    ///
    /// - `TypeError::DuplicateType` if the name is taken, built-ins included.
    /// - `TypeError::InvalidTypeName` if the name is empty or starts with the
    ///   nullable marker `?`.
    pub fn define(
        &self,
        name: impl Into<String>,
        definition: impl Into<Definition>,
    ) -> Result<(), TypeError> {
        let name = name.into();
        if name.is_empty() || name.starts_with('?') {
            return Err(TypeError::InvalidTypeName(name));
        }

        let mut types = self.types.write();
        if types.contains_key(&name) {
            tracing::debug!(name = %name, "rejected duplicate type definition");
            return Err(TypeError::DuplicateType(name));
        }

        tracing::debug!(name = %name, "defined type");
        types.insert(name, Arc::new(definition.into()));
        Ok(())
    }

    /// Resolves a name to its definition.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::UnknownType` if nothing is registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Arc<Definition>, TypeError> {
        self.types
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| TypeError::UnknownType(name.to_string()))
    }

    /// Returns true if a type is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.types.read().contains_key(name)
    }

    /// Returns every registered name, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.types.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TypeRegistry {
    fn clone(&self) -> Self {
        Self {
            types: Arc::clone(&self.types),
        }
    }
}
