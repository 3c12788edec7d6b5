//! Tests for list, map, nullable and custom type matching.

use jsv::{Definition, ObjectDef, TypeError, TypeRef, Validator};
use serde_json::{json, Value};

fn user_type() -> Definition {
    Definition::object(
        ObjectDef::new()
            .field("name", "string")
            .field("gender", "string")
            .field("age", "integer")
            .field("tags", TypeRef::list_of("string")),
    )
}

fn user_data() -> Value {
    json!({
        "name": "John",
        "gender": "Male",
        "age": 18,
        "tags": ["Foo", "Bar"]
    })
}

fn is_date(value: &Value) -> bool {
    let Some(text) = value.as_str() else {
        return false;
    };
    let parts: Vec<_> = text.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return false;
    };
    match (year.parse::<u32>(), month.parse::<u32>(), day.parse::<u32>()) {
        (Ok(_), Ok(month), Ok(day)) => (1..=12).contains(&month) && (1..=31).contains(&day),
        _ => false,
    }
}

#[test]
fn test_custom_object_type() {
    let mut validator = Validator::new();
    validator.define_type("user", user_type()).unwrap();

    assert!(validator.matches(&user_data(), "user").unwrap());
    assert!(validator.errors().is_empty());
}

#[test]
fn test_list_of_custom_type() {
    let mut validator = Validator::new();
    validator.define_type("user", user_type()).unwrap();

    assert!(validator
        .matches(&json!([user_data(), user_data()]), TypeRef::list_of("user"))
        .unwrap());
}

#[test]
fn test_custom_predicate_type() {
    let mut validator = Validator::new();
    validator
        .define_type("date", Definition::predicate(is_date))
        .unwrap();

    assert!(validator.matches(&json!("2017-01-01"), "date").unwrap());
    assert!(!validator.matches(&json!("2017-01-91"), "date").unwrap());
    assert_eq!(
        validator.errors().get("$"),
        Some("The path of '$' requires to be a date, string is given")
    );

    for value in [json!("2020-12-31"), json!("x"), json!(5), json!(null)] {
        assert_eq!(validator.matches(&value, "date").unwrap(), is_date(&value));
    }
}

#[test]
fn test_predicate_redefinition_fails() {
    let validator = Validator::new();
    validator
        .define_type("date", Definition::predicate(is_date))
        .unwrap();

    let err = validator
        .define_type("date", Definition::predicate(|v| v.is_string()))
        .unwrap_err();
    assert_eq!(err, TypeError::DuplicateType("date".to_string()));
}

#[test]
fn test_builtin_redefinition_fails() {
    let validator = Validator::new();
    let err = validator
        .define_type("integer", Definition::predicate(|v| v.is_i64()))
        .unwrap_err();
    assert_eq!(err, TypeError::DuplicateType("integer".to_string()));
}

#[test]
fn test_unknown_type_is_an_error() {
    let mut validator = Validator::new();
    let err = validator.matches(&json!(1), "timestamp").unwrap_err();
    assert_eq!(err, TypeError::UnknownType("timestamp".to_string()));
    assert!(validator.errors().is_empty());
}

#[test]
fn test_nullable_accepts_null_for_any_base() {
    let mut validator = Validator::new();
    for ty in ["?string", "?integer", "?object", "?array", "?not_defined_yet"] {
        assert!(validator.matches(&json!(null), ty).unwrap(), "{}", ty);
        assert!(validator.errors().is_empty());
    }
}

#[test]
fn test_nullable_behaves_as_base_for_non_null() {
    let values = [json!(1), json!("s"), json!(1.5), json!([1]), json!({"a": 1}), json!(false)];
    for base in ["string", "integer", "number", "array", "object", "boolean"] {
        for value in &values {
            let mut plain = Validator::new();
            let mut nullable = Validator::new();
            let expected = plain.matches(value, base).unwrap();
            let actual = nullable.matches(value, format!("?{}", base)).unwrap();

            assert_eq!(actual, expected, "{} against {}", value, base);
            assert_eq!(nullable.errors(), plain.errors());
        }
    }
}

#[test]
fn test_nullable_custom_type() {
    let mut validator = Validator::new();
    validator.define_type("user", user_type()).unwrap();

    let ty = TypeRef::object(ObjectDef::new().field("owner", "?user"));
    assert!(validator.matches(&json!({"owner": null}), &ty).unwrap());
    assert!(validator.matches(&json!({}), &ty).unwrap());
    assert!(validator.matches(&json!({"owner": user_data()}), &ty).unwrap());
    assert!(!validator.matches(&json!({"owner": "john"}), &ty).unwrap());
    assert!(!validator.errors().contains("$.owner"));
    assert_eq!(
        validator.errors().get("$.owner.name"),
        Some("The path of '$.owner.name' requires to be a string, null is given")
    );
}

#[test]
fn test_map_definition_on_scalar_data() {
    let mut validator = Validator::new();

    let optional = TypeRef::object(ObjectDef::new().field("nick", "?string"));
    assert!(validator.matches(&json!(null), &optional).unwrap());
    assert!(validator.errors().is_empty());
    assert!(validator.matches(&json!("abc"), &optional).unwrap());

    let required = TypeRef::object(ObjectDef::new().field("foo", "string"));
    assert!(!validator.matches(&json!(null), &required).unwrap());
    assert_eq!(validator.errors().len(), 1);
    assert_eq!(
        validator.errors().get("$.foo"),
        Some("The path of '$.foo' requires to be a string, null is given")
    );
}

#[test]
fn test_list_short_circuits_at_first_failure() {
    let mut validator = Validator::new();

    assert!(!validator.matches(&json!([1, 2, "x"]), TypeRef::list_of("string")).unwrap());
    let paths: Vec<_> = validator.errors().paths().collect();
    assert_eq!(paths, vec!["$[0]"]);
}

#[test]
fn test_empty_list_matches_any_list_definition() {
    let mut validator = Validator::new();
    assert!(validator.matches(&json!([]), TypeRef::list_of("string")).unwrap());
    assert!(validator
        .matches(&json!([]), TypeRef::list_of(TypeRef::list_of("integer")))
        .unwrap());
}

#[test]
fn test_list_definition_on_non_list() {
    let mut validator = Validator::new();
    assert!(!validator.matches(&json!("abc"), TypeRef::list_of("string")).unwrap());
    assert_eq!(
        validator.errors().get("$"),
        Some("The path of '$' requires to be a array, string is given")
    );
}

#[test]
fn test_map_collects_every_field() {
    let mut validator = Validator::new();
    let ty = TypeRef::object(ObjectDef::new().field("foo", "string").field("bar", "string"));

    assert!(!validator.matches(&json!({"foo": 123, "bar": 456}), ty).unwrap());
    assert_eq!(validator.errors().len(), 2);
    assert_eq!(
        validator.errors().get("$.foo"),
        Some("The path of '$.foo' requires to be a string, integer is given")
    );
    assert_eq!(
        validator.errors().get("$.bar"),
        Some("The path of '$.bar' requires to be a string, integer is given")
    );
}

#[test]
fn test_map_errors_follow_definition_order() {
    let mut validator = Validator::new();
    let ty = TypeRef::object(
        ObjectDef::new()
            .field("z", "string")
            .field("a", "string")
            .field("m", "string"),
    );

    assert!(!validator.matches(&json!({}), ty).unwrap());
    let paths: Vec<_> = validator.errors().paths().collect();
    assert_eq!(paths, vec!["$.z", "$.a", "$.m"]);
}

#[test]
fn test_nested_paths() {
    let mut validator = Validator::new();

    let ty = TypeRef::object(ObjectDef::new().field("foo", TypeRef::list_of("string")));
    assert!(!validator.matches(&json!({"foo": [3, 2, 1]}), ty).unwrap());
    assert_eq!(
        validator.errors().get("$.foo[0]"),
        Some("The path of '$.foo[0]' requires to be a string, integer is given")
    );

    let ty = TypeRef::list_of(ObjectDef::new().field("id", "integer"));
    assert!(!validator
        .matches(&json!([{"id": 1}, {"id": "2"}]), ty)
        .unwrap());
    let paths: Vec<_> = validator.errors().paths().collect();
    assert_eq!(paths, vec!["$[1].id"]);
}

#[test]
fn test_list_element_with_many_field_errors() {
    let mut validator = Validator::new();
    let ty = TypeRef::list_of(ObjectDef::new().field("a", "string").field("b", "string"));

    assert!(!validator
        .matches(&json!([{"a": 1, "b": 2}, {"a": 3, "b": 4}]), ty)
        .unwrap());
    let paths: Vec<_> = validator.errors().paths().collect();
    assert_eq!(paths, vec!["$[0].a", "$[0].b"]);
}

#[test]
fn test_inline_predicate() {
    let mut validator = Validator::new();
    let ty = TypeRef::object(
        ObjectDef::new().field("port", TypeRef::predicate(|v| {
            v.as_u64().is_some_and(|p| (1..=65535).contains(&p))
        })),
    );

    assert!(validator.matches(&json!({"port": 8080}), &ty).unwrap());
    assert!(!validator.matches(&json!({"port": 0}), &ty).unwrap());
    assert_eq!(
        validator.errors().get("$.port"),
        Some("The path of '$.port' requires to be a custom type, integer is given")
    );
}

#[test]
fn test_definition_from_json() {
    let mut validator = Validator::new();
    let def = Definition::from_json(&json!({
        "name": "string",
        "gender": "string",
        "age": "integer",
        "tags": ["string"]
    }))
    .unwrap();
    validator.define_type("user", def).unwrap();

    assert!(validator.matches(&user_data(), "user").unwrap());
}

#[test]
fn test_list_definition_extra_elements_ignored() {
    let mut validator = Validator::new();
    let ty = TypeRef::from_json(&json!(["integer", "string"])).unwrap();

    assert!(validator.matches(&json!([1, 2, 3]), &ty).unwrap());
    assert!(!validator.matches(&json!(["a"]), &ty).unwrap());
}

#[test]
fn test_malformed_json_definitions() {
    assert!(matches!(
        Definition::from_json(&json!([])),
        Err(TypeError::InvalidDefinition(_))
    ));
    assert!(matches!(
        Definition::from_json(&json!(true)),
        Err(TypeError::InvalidDefinition(_))
    ));
}

#[test]
fn test_object_definition_on_array_data_uses_indices() {
    let mut validator = Validator::new();
    let ty = TypeRef::object(ObjectDef::new().field("0", "string").field("1", "?integer"));

    assert!(validator.matches(&json!(["first"]), &ty).unwrap());
    assert!(!validator.matches(&json!([1]), &ty).unwrap());
    assert!(validator.errors().contains("$.0"));
}
