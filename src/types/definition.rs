//! Resolved definitions stored behind registered names.

use serde_json::Value;

use crate::error::TypeError;

use super::builtin::BuiltinType;
use super::type_ref::{ObjectDef, Predicate, TypeRef};

/// The shape a registered name resolves to.
///
/// User definitions are one of a predicate, a list definition or a map
/// definition. Built-in names are pre-registered as [`Definition::Builtin`].
///
/// # Example
///
/// ```rust
/// use jsv::{Definition, ObjectDef};
///
/// let user = Definition::object(
///     ObjectDef::new()
///         .field("name", "string")
///         .field("age", "integer"),
/// );
/// let tags = Definition::list_of("string");
/// let positive = Definition::predicate(|v| v.as_i64().is_some_and(|n| n > 0));
/// ```
#[derive(Debug, Clone)]
pub enum Definition {
    Builtin(BuiltinType),
    Predicate(Predicate),
    ListOf(TypeRef),
    ObjectOf(ObjectDef),
}

impl Definition {
    /// A predicate definition.
    pub fn predicate<F>(check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Definition::Predicate(Predicate::new(check))
    }

    /// A list definition whose elements all match `element`.
    pub fn list_of(element: impl Into<TypeRef>) -> Self {
        Definition::ListOf(element.into())
    }

    /// A map definition.
    pub fn object(fields: ObjectDef) -> Self {
        Definition::ObjectOf(fields)
    }

    /// Builds a definition from decoded data: an object of field
    /// definitions or a list definition (see [`TypeRef::from_json`]).
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidDefinition` if the data is malformed or is
    /// a bare type name.
    pub fn from_json(definition: &Value) -> Result<Self, TypeError> {
        Definition::try_from(TypeRef::from_json(definition)?)
    }
}

impl From<ObjectDef> for Definition {
    fn from(fields: ObjectDef) -> Self {
        Definition::ObjectOf(fields)
    }
}

impl From<Predicate> for Definition {
    fn from(predicate: Predicate) -> Self {
        Definition::Predicate(predicate)
    }
}

impl TryFrom<TypeRef> for Definition {
    type Error = TypeError;

    fn try_from(ty: TypeRef) -> Result<Self, Self::Error> {
        match ty {
            TypeRef::Predicate(predicate) => Ok(Definition::Predicate(predicate)),
            TypeRef::ListOf(element) => Ok(Definition::ListOf(*element)),
            TypeRef::ObjectOf(fields) => Ok(Definition::ObjectOf(fields)),
            TypeRef::Name(name) | TypeRef::Nullable(name) => Err(TypeError::InvalidDefinition(
                format!("a type name ('{}') is not a definition", name),
            )),
        }
    }
}
