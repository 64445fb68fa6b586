//! Integration tests for the prelude module.
//!
//! Verifies that `use shapeguard_validator::prelude::*` brings in everything
//! a consumer needs for common validation scenarios.

use shapeguard_validator::prelude::*;

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_import_provides_validate_trait() {
    let v = is_defined().and(is_string());
    assert!(v.validate(&Value::from("hello")).is_ok());
    assert!(v.validate(&Value::Null).is_err());
}

#[test]
fn prelude_provides_result_contract() {
    assert!(is_valid(&is_number().validate(&Value::from(1))));
    assert!(is_error(&is_number().validate(&Value::from("1"))));
    assert!(validate_value(&Value::from(true), &is_boolean()).is_ok());
}

// ============================================================================
// COMBINATORS VIA PRELUDE
// ============================================================================

#[test]
fn function_and_macro_forms() {
    let binary = or(is("like"), is("comment"));
    let nary = or![is("like"), is("comment"), is_number()];
    let eager = eager_or![is("like"), is("comment")];

    for v in [Value::from("like"), Value::from("comment")] {
        assert!(binary.validate(&v).is_ok());
        assert!(nary.validate(&v).is_ok());
        assert!(eager.validate(&v).is_ok());
    }
    assert!(binary.validate(&Value::from("share")).is_err());
    assert!(nary.validate(&Value::from(1)).is_ok());
}

#[test]
fn optional_method_and_function_agree() {
    let by_method = is_string().optional();
    let by_function = optional(is_string());
    for v in [Value::Null, Value::from("x"), Value::from(1)] {
        assert_eq!(by_method.validate(&v), by_function.validate(&v));
    }
}

#[test]
fn structural_checkers_via_prelude() {
    let point = tuple![is_number(), is_number()];
    let path = list_checker(point);
    let shape = ObjectSchema::new()
        .field("name", is_string())
        .field("path", path)
        .build()
        .unwrap();

    let valid = Value::object([
        ("name", Value::from("route")),
        (
            "path",
            Value::from(vec![Value::from(vec![0, 0]), Value::from(vec![1, 2])]),
        ),
    ]);
    assert!(shape.validate(&valid).is_ok());

    let invalid = Value::object([
        ("name", Value::from("route")),
        ("path", Value::from(vec![Value::from(vec![0, 0]), Value::from(vec![1])])),
    ]);
    let err = shape.validate(&invalid).unwrap_err();
    let path_errors = err.field("path").unwrap();
    assert_eq!(
        path_errors.index(1).unwrap().code(),
        Some("arity_mismatch")
    );
}

// ============================================================================
// CUSTOM VALIDATORS VIA PRELUDE
// ============================================================================

validator! {
    Positive;
    rule(value) { value.as_f64().is_some_and(|n| n > 0.0) }
    error(value) { ValidationError::new("positive", format!("{value} is not positive")) }
    fn positive();
}

#[test]
fn validator_macro_via_prelude() {
    let v = is_number().and(positive());
    assert!(v.validate(&Value::from(2)).is_ok());
    assert_eq!(
        v.validate(&Value::from(-2)).unwrap_err().to_string(),
        "-2 is not positive"
    );
}

#[test]
fn type_mismatch_on_null_for_string_validator() {
    let err = is_string().validate(&Value::Null).unwrap_err();
    assert_eq!(err.code(), Some("type_mismatch"));
    assert_eq!(err.to_string(), "Expected type 'string', got null");
}
