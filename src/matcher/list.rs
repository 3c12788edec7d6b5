//! List definitions.

use serde_json::Value;
use stillwater::Validation;

use crate::error::TypeError;
use crate::path::JsonPath;
use crate::types::TypeRef;
use crate::validation::{MatchContext, MatchOutcome};

use super::{match_type, reject};

/// Matches every element of an array against `element`.
///
/// Stops at the first failing element: only that element's failures are
/// reported, later elements are not visited. Non-array data fails like the
/// `array` built-in.
pub(super) fn match_list(
    value: &Value,
    element: &TypeRef,
    path: &JsonPath,
    ctx: &MatchContext<'_>,
) -> Result<MatchOutcome, TypeError> {
    let Value::Array(items) = value else {
        return Ok(reject(value, "array", path));
    };

    for (index, item) in items.iter().enumerate() {
        let outcome = match_type(item, element, &path.push_index(index), ctx)?;
        if outcome.is_failure() {
            return Ok(outcome);
        }
    }

    Ok(Validation::Success(()))
}
