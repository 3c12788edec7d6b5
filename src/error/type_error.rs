//! Definition and resolution errors.

/// Errors raised by misuse of the type registry or malformed definitions.
///
/// These are not validation failures: they abort the call that raised them
/// and are never recorded in an [`ErrorMap`](crate::ErrorMap).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// Attempted to define a type under a name that already exists.
    #[error("type '{0}' is already defined")]
    DuplicateType(String),

    /// A type name could not be resolved through the registry.
    #[error("type '{0}' is not defined")]
    UnknownType(String),

    /// The name cannot be used for a type definition.
    #[error("'{0}' is not a valid type name")]
    InvalidTypeName(String),

    /// A definition given as decoded data has no usable shape.
    #[error("invalid type definition: {0}")]
    InvalidDefinition(String),
}
