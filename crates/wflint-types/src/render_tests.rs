use crate::{ExprType, FormatConfig, ObjectType};

#[test]
fn scalars() {
    let rendered: Vec<_> = [
        ExprType::Any,
        ExprType::Null,
        ExprType::Number,
        ExprType::Bool,
        ExprType::String,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(rendered, ["any", "null", "number", "bool", "string"]);
}

#[test]
fn empty_objects() {
    assert_eq!(ExprType::open_object().to_string(), "object");
    assert_eq!(ExprType::strict_object().to_string(), "{}");
}

#[test]
fn mapped_object() {
    let ty = ExprType::mapped_object(ExprType::array(ExprType::Number));
    insta::assert_snapshot!(ty.to_string(), @"{string => array<number>}");
}

#[test]
fn keyed_object_in_insertion_order() {
    let ty = ExprType::Object(
        ObjectType::open()
            .with_field("workflow", ExprType::String)
            .with_field("run_number", ExprType::Number)
            .with_field("event", ExprType::open_object()),
    );
    insta::assert_snapshot!(ty.to_string(), @"{workflow: string; run_number: number; event: object}");
}

#[test]
fn nested_arrays() {
    let ty = ExprType::array(ExprType::array(ExprType::mapped_object(ExprType::Bool)));
    insta::assert_snapshot!(ty.to_string(), @"array<array<{string => bool}>>");
}

#[test]
fn deref_array_renders_like_plain_array() {
    let ty = ExprType::array_deref(ExprType::String);
    assert_eq!(ty.to_string(), "array<string>");
}

#[test]
fn sorted_fields() {
    let inner = ObjectType::strict()
        .with_field("z", ExprType::Null)
        .with_field("m", ExprType::Bool);
    let ty = ExprType::Object(
        ObjectType::strict()
            .with_field("b", ExprType::array(ExprType::Object(inner)))
            .with_field("a", ExprType::Number),
    );
    let config = FormatConfig::new().sort_fields(true);

    insta::assert_snapshot!(ty.to_string(), @"{b: array<{z: null; m: bool}>; a: number}");
    insta::assert_snapshot!(
        ty.display_with(&config).to_string(),
        @"{a: number; b: array<{m: bool; z: null}>}"
    );
}

#[test]
fn default_config() {
    assert_eq!(FormatConfig::new(), FormatConfig::default());
}
