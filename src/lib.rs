//! # jsv
//!
//! A structural type matcher for decoded JSON values.
//!
//! ## Overview
//!
//! Types are lightweight and composable: a type is a registered name
//! (`"integer"`, `"user"`), a nullable name (`"?string"`), an inline
//! predicate, a list definition, or a map definition whose fields are
//! themselves types. Matching a value returns whether it conforms and records
//! one message per failing path, keyed like `$.users[0].email`.
//!
//! Map definitions check every field and report all failing fields; list
//! definitions stop at the first failing element. In strict mode a map's
//! keys must be exactly the defined fields.
//!
//! ## Core Types
//!
//! - [`Validator`]: defines types and matches values
//! - [`TypeRef`]: what a value is matched against
//! - [`Definition`]: what a registered name resolves to
//! - [`ErrorMap`]: messages of one match, keyed by rendered [`JsonPath`]
//! - [`TypeError`]: duplicate, unknown or malformed types
//!
//! ## Example
//!
//! ```rust
//! use jsv::{Validator, TypeRef, ObjectDef};
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! let ty = TypeRef::object(
//!     ObjectDef::new()
//!         .field("foo", "string")
//!         .field("bar", "string"),
//! );
//!
//! assert!(!validator.matches(&json!({"foo": 123, "bar": 456}), &ty).unwrap());
//! assert!(validator.errors().contains("$.foo"));
//! assert!(validator.errors().contains("$.bar"));
//!
//! // Strict mode also compares key sets
//! let ty = TypeRef::object(
//!     ObjectDef::new()
//!         .field("key1", "string")
//!         .field("key2", "string"),
//! );
//! assert!(!validator.matches_strict(&json!({"key1": "v1", "key3": "v3"}), &ty).unwrap());
//! assert_eq!(
//!     validator.errors().get("$"),
//!     Some("The object keys doesn't match the type definition: 'key2' are absent: 'key3' are not required"),
//! );
//! ```

pub mod error;
pub mod matcher;
pub mod path;
pub mod registry;
pub mod types;
pub mod validation;
pub mod validator;

pub use error::{ErrorMap, Mismatch, Mismatches, TypeError};
pub use path::{JsonPath, PathSegment};
pub use registry::TypeRegistry;
pub use types::{type_of, BuiltinType, Definition, ObjectDef, Predicate, TypeRef};
pub use validation::{MatchContext, MatchMode, MatchOutcome, MatchReport};
pub use validator::Validator;
