//! Type references and definitions.
//!
//! A [`TypeRef`] is what a value is matched against: a registered name, a
//! nullable name, an inline predicate, a list definition or a map
//! definition. A [`Definition`] is what a registered name resolves to.
//!
//! # Example
//!
//! ```rust
//! use jsv::{ObjectDef, TypeRef};
//!
//! let order = TypeRef::object(
//!     ObjectDef::new()
//!         .field("id", "integer")
//!         .field("note", "?string")
//!         .field("lines", TypeRef::list_of(
//!             ObjectDef::new()
//!                 .field("sku", "string")
//!                 .field("qty", "number"),
//!         )),
//! );
//! ```

mod builtin;
mod definition;
mod type_ref;

pub use builtin::{type_of, BuiltinType};
pub use definition::Definition;
pub use type_ref::{ObjectDef, Predicate, TypeRef};
