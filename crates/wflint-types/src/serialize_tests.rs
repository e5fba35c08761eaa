use indoc::indoc;

use crate::{ExprType, ObjectType};

fn to_json(ty: &ExprType) -> String {
    serde_json::to_string_pretty(ty).unwrap()
}

#[test]
fn scalar() {
    assert_eq!(
        serde_json::to_string(&ExprType::Number).unwrap(),
        r#"{"kind":"number"}"#
    );
    assert_eq!(
        serde_json::to_string(&ExprType::Any).unwrap(),
        r#"{"kind":"any"}"#
    );
}

#[test]
fn keyed_object() {
    let ty = ExprType::Object(
        ObjectType::strict()
            .with_field("os", ExprType::String)
            .with_field("arch", ExprType::Null),
    );
    assert_eq!(
        to_json(&ty),
        indoc! {r#"
        {
          "kind": "object",
          "props": {
            "os": {
              "kind": "string"
            },
            "arch": {
              "kind": "null"
            }
          },
          "strict": true
        }"#}
    );
}

#[test]
fn mapped_object() {
    let ty = ExprType::mapped_object(ExprType::String);
    assert_eq!(
        serde_json::to_string(&ty).unwrap(),
        r#"{"kind":"object","mapped":{"kind":"string"}}"#
    );
}

#[test]
fn open_object() {
    assert_eq!(
        serde_json::to_string(&ExprType::open_object()).unwrap(),
        r#"{"kind":"object","props":{},"strict":false}"#
    );
}

#[test]
fn array() {
    let ty = ExprType::array_deref(ExprType::Bool);
    assert_eq!(
        serde_json::to_string(&ty).unwrap(),
        r#"{"kind":"array","elem":{"kind":"bool"},"deref":true}"#
    );
}
