//! Type references: what a value is matched against.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::TypeError;

use super::builtin::type_of;

/// A user supplied check over a single value.
///
/// Predicates are reference counted so definitions holding them can be
/// cloned and shared across threads.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Predicate {
    /// Wraps a check function.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// Runs the check against `value`.
    pub fn test(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// A reference to a type, either by name or as an inline definition.
///
/// String conversions parse the nullable marker, so `"?string"` becomes
/// [`TypeRef::Nullable`] and `"string"` becomes [`TypeRef::Name`].
///
/// # Example
///
/// ```rust
/// use jsv::{ObjectDef, TypeRef};
///
/// let user = TypeRef::object(
///     ObjectDef::new()
///         .field("name", "string")
///         .field("nickname", "?string")
///         .field("tags", TypeRef::list_of("string")),
/// );
///
/// assert!(matches!(TypeRef::from("?string"), TypeRef::Nullable(_)));
/// ```
#[derive(Debug, Clone)]
pub enum TypeRef {
    /// A registered type name.
    Name(String),
    /// A registered type name that also accepts null.
    Nullable(String),
    /// An inline predicate.
    Predicate(Predicate),
    /// A list whose every element matches the inner reference.
    ListOf(Box<TypeRef>),
    /// A map with the given fields.
    ObjectOf(ObjectDef),
}

impl TypeRef {
    /// References a registered type by its exact name.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Name(name.into())
    }

    /// References a registered type that also accepts null.
    pub fn nullable(name: impl Into<String>) -> Self {
        TypeRef::Nullable(name.into())
    }

    /// A list whose elements all match `element`.
    pub fn list_of(element: impl Into<TypeRef>) -> Self {
        TypeRef::ListOf(Box::new(element.into()))
    }

    /// An inline predicate; failures are reported as `custom type`.
    pub fn predicate<F>(check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        TypeRef::Predicate(Predicate::new(check))
    }

    /// An inline map definition.
    pub fn object(fields: ObjectDef) -> Self {
        TypeRef::ObjectOf(fields)
    }

    /// Builds a reference from a decoded definition.
    ///
    /// Strings are type names (with the nullable marker parsed), objects map
    /// field names to nested definitions, and arrays are list definitions
    /// whose first element is the element type. Elements after the first
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidDefinition` for an empty array or for
    /// values that are none of the above.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jsv::TypeRef;
    /// use serde_json::json;
    ///
    /// let tags = TypeRef::from_json(&json!(["string"])).unwrap();
    /// assert!(matches!(tags, TypeRef::ListOf(_)));
    ///
    /// assert!(TypeRef::from_json(&json!([])).is_err());
    /// ```
    pub fn from_json(definition: &Value) -> Result<Self, TypeError> {
        match definition {
            Value::String(name) => Ok(TypeRef::from(name.as_str())),
            Value::Array(items) => match items.first() {
                Some(element) => Ok(TypeRef::list_of(TypeRef::from_json(element)?)),
                None => Err(TypeError::InvalidDefinition(
                    "list definition has no element type".to_string(),
                )),
            },
            Value::Object(fields) => {
                let mut def = ObjectDef::new();
                for (name, field) in fields {
                    def = def.field(name.clone(), TypeRef::from_json(field)?);
                }
                Ok(TypeRef::ObjectOf(def))
            }
            other => Err(TypeError::InvalidDefinition(format!(
                "expected a type name, list or object definition, {} is given",
                type_of(other)
            ))),
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        match name.strip_prefix('?') {
            Some(base) => TypeRef::Nullable(base.to_string()),
            None => TypeRef::Name(name.to_string()),
        }
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        TypeRef::from(name.as_str())
    }
}

impl From<&TypeRef> for TypeRef {
    fn from(ty: &TypeRef) -> Self {
        ty.clone()
    }
}

impl From<ObjectDef> for TypeRef {
    fn from(fields: ObjectDef) -> Self {
        TypeRef::ObjectOf(fields)
    }
}

impl From<Predicate> for TypeRef {
    fn from(predicate: Predicate) -> Self {
        TypeRef::Predicate(predicate)
    }
}

/// Field definitions of a map type, kept in definition order.
///
/// Fields are matched in the order they were added, which is also the order
/// their errors are reported in.
#[derive(Debug, Clone, Default)]
pub struct ObjectDef {
    fields: IndexMap<String, TypeRef>,
}

impl ObjectDef {
    /// Creates a map definition with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field. Adding a name twice replaces its type but keeps its
    /// original position.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        self.fields.insert(name.into(), ty.into());
        self
    }

    /// Returns the type of the field `name`.
    pub fn get(&self, name: &str) -> Option<&TypeRef> {
        self.fields.get(name)
    }

    /// Returns the number of defined fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is defined.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the field names in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns `(name, type)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeRef)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), ty))
    }
}
