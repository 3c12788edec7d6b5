//! Built-in types and runtime kind names.

use serde_json::Value;

/// The checks behind the names every registry starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    Integer,
    Double,
    Boolean,
    String,
    Null,
    /// Integer or floating point.
    Number,
    Array,
    Object,
}

impl BuiltinType {
    /// Names registered for built-in types. `float` is an alias of `double`.
    pub const NAMES: [(&'static str, BuiltinType); 9] = [
        ("integer", BuiltinType::Integer),
        ("double", BuiltinType::Double),
        ("float", BuiltinType::Double),
        ("boolean", BuiltinType::Boolean),
        ("string", BuiltinType::String),
        ("null", BuiltinType::Null),
        ("number", BuiltinType::Number),
        ("array", BuiltinType::Array),
        ("object", BuiltinType::Object),
    ];

    /// Returns true if `value` is of this type.
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (BuiltinType::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (BuiltinType::Double, Value::Number(n)) => n.is_f64(),
            (BuiltinType::Number, Value::Number(_)) => true,
            (BuiltinType::Boolean, Value::Bool(_)) => true,
            (BuiltinType::String, Value::String(_)) => true,
            (BuiltinType::Null, Value::Null) => true,
            (BuiltinType::Array, Value::Array(_)) => true,
            (BuiltinType::Object, Value::Object(_)) => true,
            _ => false,
        }
    }
}

/// Returns the kind name reported as "given" in mismatch messages.
///
/// Integers and floats are told apart (`integer` / `double`); an empty array
/// is still an `array`.
pub fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "double",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
