//! The recursive matching engine.
//!
//! [`match_type`] dispatches a value against a [`TypeRef`]: nullable names
//! accept null without resolving, names are resolved through the registry,
//! and list and map definitions descend into the value with an extended
//! path. Failures are returned as [`Mismatches`]; only definition problems
//! ([`TypeError`]) abort the walk.

mod list;
mod object;

pub use object::{map_view, MapView};

use serde_json::Value;
use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::{Mismatch, Mismatches, TypeError};
use crate::path::JsonPath;
use crate::types::{type_of, Definition, TypeRef};
use crate::validation::{MatchContext, MatchOutcome};

/// Label used in messages for predicates given inline rather than by name.
const INLINE_PREDICATE: &str = "custom type";

/// Matches `value` against `ty` at `path`.
///
/// # Errors
///
/// Returns `TypeError::UnknownType` as soon as a name that has to be
/// resolved is not registered.
pub fn match_type(
    value: &Value,
    ty: &TypeRef,
    path: &JsonPath,
    ctx: &MatchContext<'_>,
) -> Result<MatchOutcome, TypeError> {
    match ty {
        TypeRef::Nullable(_) if value.is_null() => Ok(Validation::Success(())),
        TypeRef::Nullable(name) | TypeRef::Name(name) => {
            let definition = ctx.registry().resolve(name)?;
            match_definition(value, &definition, name, path, ctx)
        }
        TypeRef::Predicate(predicate) => Ok(check(
            predicate.test(value),
            value,
            INLINE_PREDICATE,
            path,
        )),
        TypeRef::ListOf(element) => list::match_list(value, element, path, ctx),
        TypeRef::ObjectOf(fields) => object::match_object(value, fields, path, ctx),
    }
}

/// Matches `value` against the definition registered as `name`.
fn match_definition(
    value: &Value,
    definition: &Definition,
    name: &str,
    path: &JsonPath,
    ctx: &MatchContext<'_>,
) -> Result<MatchOutcome, TypeError> {
    match definition {
        Definition::Builtin(builtin) => Ok(check(builtin.accepts(value), value, name, path)),
        Definition::Predicate(predicate) => Ok(check(predicate.test(value), value, name, path)),
        Definition::ListOf(element) => list::match_list(value, element, path, ctx),
        Definition::ObjectOf(fields) => object::match_object(value, fields, path, ctx),
    }
}

/// Turns the result of a single check into an outcome.
fn check(passed: bool, value: &Value, expected: &str, path: &JsonPath) -> MatchOutcome {
    if passed {
        Validation::Success(())
    } else {
        reject(value, expected, path)
    }
}

/// Fails with the standard "requires to be a ..." message.
fn reject(value: &Value, expected: &str, path: &JsonPath) -> MatchOutcome {
    Validation::Failure(Mismatches::single(Mismatch::type_mismatch(
        path,
        expected,
        type_of(value),
    )))
}

/// Folds `next` into `acc`, keeping every failure.
fn accumulate(acc: MatchOutcome, next: MatchOutcome) -> MatchOutcome {
    match (acc, next) {
        (Validation::Success(()), next) => next,
        (failure @ Validation::Failure(_), Validation::Success(())) => failure,
        (Validation::Failure(a), Validation::Failure(b)) => Validation::Failure(a.combine(b)),
    }
}
