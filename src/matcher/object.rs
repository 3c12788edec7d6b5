//! Map definitions and strict key reconciliation.

use std::borrow::Cow;

use serde_json::{Map, Value};
use stillwater::Validation;

use crate::error::{Mismatch, Mismatches, TypeError};
use crate::path::JsonPath;
use crate::types::ObjectDef;
use crate::validation::{MatchContext, MatchOutcome};

use super::{accumulate, match_type};

static NULL: Value = Value::Null;

/// A borrowed keyed view of a value, as seen by map definitions.
///
/// Objects are used as they are and arrays are keyed by their indices
/// (`"0"`, `"1"`, ...). Every other value has no keys, so each defined field
/// of it reads as null.
#[derive(Debug, Clone, Copy)]
pub enum MapView<'a> {
    Object(&'a Map<String, Value>),
    List(&'a [Value]),
    Empty,
}

impl<'a> MapView<'a> {
    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match *self {
            MapView::Object(map) => map.get(key),
            MapView::List(items) => parse_index(key).and_then(|index| items.get(index)),
            MapView::Empty => None,
        }
    }

    /// Returns true if `key` names a value in the view.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns every key of the view. Array indices are rendered as strings.
    pub fn keys(&self) -> Vec<Cow<'a, str>> {
        match *self {
            MapView::Object(map) => map.keys().map(|key| Cow::Borrowed(key.as_str())).collect(),
            MapView::List(items) => (0..items.len()).map(|i| Cow::Owned(i.to_string())).collect(),
            MapView::Empty => Vec::new(),
        }
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        match *self {
            MapView::Object(map) => map.len(),
            MapView::List(items) => items.len(),
            MapView::Empty => 0,
        }
    }

    /// Returns true if the view has no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parses an array index key. Only the canonical form (`"3"`, not `"03"`
/// or `"+3"`) names an element.
fn parse_index(key: &str) -> Option<usize> {
    key.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == key)
}

/// Returns the keyed view map matching works on.
///
/// # Example
///
/// ```rust
/// use jsv::matcher::map_view;
/// use serde_json::json;
///
/// let value = json!(["a", "b"]);
/// let view = map_view(&value);
/// assert_eq!(view.get("1"), Some(&json!("b")));
///
/// let scalar = json!("scalar");
/// assert!(map_view(&scalar).is_empty());
/// ```
pub fn map_view(value: &Value) -> MapView<'_> {
    match value {
        Value::Object(map) => MapView::Object(map),
        Value::Array(items) => MapView::List(items),
        _ => MapView::Empty,
    }
}

/// Matches the fields of `fields` against the keyed view of `value`.
///
/// In strict mode the key sets must agree first; a disagreement is reported
/// once at `path` and no field is checked. Otherwise every defined field is
/// checked (a missing field is matched as null) and all field failures are
/// kept.
pub(super) fn match_object(
    value: &Value,
    fields: &ObjectDef,
    path: &JsonPath,
    ctx: &MatchContext<'_>,
) -> Result<MatchOutcome, TypeError> {
    let data = map_view(value);

    if ctx.mode().is_strict() {
        if let Some(mismatch) = reconcile_keys(data, fields, path) {
            return Ok(Validation::Failure(Mismatches::single(mismatch)));
        }
    }

    let mut outcome: MatchOutcome = Validation::Success(());
    for (name, ty) in fields.iter() {
        let field_value = data.get(name).unwrap_or(&NULL);
        let result = match_type(field_value, ty, &path.push_field(name), ctx)?;
        outcome = accumulate(outcome, result);
    }

    Ok(outcome)
}

/// Compares the key sets of `data` and `fields`.
///
/// Returns None when they are equal, or one mismatch naming the absent and
/// the unexpected keys, each sorted and comma-joined.
fn reconcile_keys(data: MapView<'_>, fields: &ObjectDef, path: &JsonPath) -> Option<Mismatch> {
    let mut absent: Vec<&str> = fields.keys().filter(|key| !data.contains_key(key)).collect();
    let mut extra: Vec<Cow<'_, str>> = data
        .keys()
        .into_iter()
        .filter(|key| fields.get(key).is_none())
        .collect();

    if absent.is_empty() && extra.is_empty() {
        return None;
    }

    absent.sort_unstable();
    extra.sort_unstable();

    let mut message = String::from("The object keys doesn't match the type definition");
    if !absent.is_empty() {
        message.push_str(&format!(": '{}' are absent", absent.join(",")));
    }
    if !extra.is_empty() {
        message.push_str(&format!(": '{}' are not required", extra.join(",")));
    }

    Some(Mismatch::new(path.clone(), message))
}
