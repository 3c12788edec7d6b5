//! Integration tests for JsonPath rendering in reported errors.

use jsv::{JsonPath, ObjectDef, PathSegment, TypeRef, Validator};
use serde_json::json;

#[test]
fn test_path_construction_and_display() {
    assert_eq!(JsonPath::root().to_string(), "$");
    assert_eq!(JsonPath::root().push_field("name").to_string(), "$.name");
    assert_eq!(JsonPath::root().push_index(0).to_string(), "$[0]");

    let path = JsonPath::root()
        .push_field("users")
        .push_index(0)
        .push_field("address")
        .push_field("city");
    assert_eq!(path.to_string(), "$.users[0].address.city");
}

#[test]
fn test_path_segments_preserved() {
    let path = JsonPath::root()
        .push_field("data")
        .push_index(42)
        .push_field("value");

    let segments: Vec<&PathSegment> = path.segments().collect();
    assert_eq!(
        segments,
        vec![
            &PathSegment::Field("data".to_string()),
            &PathSegment::Index(42),
            &PathSegment::Field("value".to_string()),
        ]
    );
}

#[test]
fn test_reported_paths_for_deep_values() {
    let mut validator = Validator::new();
    let ty = TypeRef::object(
        ObjectDef::new().field(
            "matrix",
            TypeRef::list_of(TypeRef::list_of(ObjectDef::new().field("v", "number"))),
        ),
    );

    let value = json!({
        "matrix": [
            [{"v": 1}, {"v": 2.5}],
            [{"v": 3}, {"v": "four"}]
        ]
    });

    assert!(!validator.matches(&value, ty).unwrap());
    let paths: Vec<_> = validator.errors().paths().collect();
    assert_eq!(paths, vec!["$.matrix[1][1].v"]);
}

#[test]
fn test_field_names_rendered_verbatim() {
    let mut validator = Validator::new();
    let ty = TypeRef::object(ObjectDef::new().field("名前", "string"));

    assert!(!validator.matches(&json!({"名前": 1}), ty).unwrap());
    assert!(validator.errors().contains("$.名前"));
}
