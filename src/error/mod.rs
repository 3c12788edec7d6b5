//! Error types.
//!
//! Validation failures ([`Mismatch`], [`Mismatches`], [`ErrorMap`]) are
//! reported, while definition problems ([`TypeError`]) are returned as `Err`.

mod mismatch;
mod type_error;

pub use mismatch::{ErrorMap, Mismatch, Mismatches};
pub use type_error::TypeError;
