//! Integration tests for validating `serde_json` data.

#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Serialize;
use serde_json::json;
use shapeguard_validator::prelude::*;

fn server_schema() -> ObjectChecker {
    let endpoint = ObjectSchema::new()
        .field("host", is_string())
        .field("port", is_number())
        .build()
        .unwrap();

    ObjectSchema::new()
        .field("name", is_string())
        .field("endpoints", list_checker(endpoint))
        .field("tags", list_checker(is_string()).optional())
        .build()
        .unwrap()
}

// ============================================================================
// CONVERSION
// ============================================================================

#[test]
fn json_values_convert_losslessly() {
    let json = json!({ "a": [1, 2.5, "x", null, false], "b": { "c": {} } });
    let value = Value::from(&json);
    assert_eq!(value.to_json(), json);
    assert_eq!(value.get("a").at(1), &Value::from(2.5));
    assert_eq!(value.get("missing"), &Value::Undefined);
}

#[test]
fn derived_structs_validate_through_json() {
    #[derive(Serialize)]
    struct Endpoint {
        host: String,
        port: Option<u16>,
    }

    #[derive(Serialize)]
    struct Server {
        name: String,
        endpoints: Vec<Endpoint>,
    }

    let server = Server {
        name: "edge".into(),
        endpoints: vec![
            Endpoint {
                host: "a".into(),
                port: Some(80),
            },
            Endpoint {
                host: "b".into(),
                port: None,
            },
        ],
    };

    let value = Value::from(serde_json::to_value(&server).unwrap());
    let err = server_schema().validate(&value).unwrap_err();
    assert_eq!(
        err.to_json_value(),
        json!({ "endpoints": { "1": { "port": "is null!" } } })
    );
}

// ============================================================================
// NESTED COLLECTIONS
// ============================================================================

#[rstest]
#[case::valid(
    json!({ "name": "edge", "endpoints": [{ "host": "a", "port": 80 }] }),
    None
)]
#[case::empty_endpoints(json!({ "name": "edge", "endpoints": [] }), None)]
#[case::bad_tag(
    json!({ "name": "edge", "endpoints": [], "tags": ["x", 1] }),
    Some(json!({ "tags": [
        "expected ill-defined value, got x,1",
        { "1": "Expected type 'string', got number" }
    ] }))
)]
#[case::endpoints_not_a_list(
    json!({ "name": "edge", "endpoints": { "host": "a" } }),
    Some(json!({ "endpoints": "Expected type 'list', got object" }))
)]
#[case::several_failures(
    json!({
        "endpoints": [
            { "host": "a", "port": 80 },
            { "host": 1, "port": "80" },
            null
        ]
    }),
    Some(json!({
        "name": "Expected type 'string', got undefined",
        "endpoints": {
            "1": {
                "host": "Expected type 'string', got number",
                "port": "Expected type 'number', got string"
            },
            "2": "is null!"
        }
    }))
)]
fn nested_collections(#[case] input: serde_json::Value, #[case] expected: Option<serde_json::Value>) {
    let result = server_schema().validate(&Value::from(input));
    assert_eq!(result.err().as_ref().map(ValidationError::to_json_value), expected);
}

#[test]
fn tuples_from_json_arrays() {
    let pair = tuple![is_string(), is_number()];
    assert!(pair.validate(&Value::from(json!(["a", 1]))).is_ok());
    assert_eq!(
        pair.validate(&Value::from(json!(["a", "b"])))
            .unwrap_err()
            .to_json_value(),
        json!({ "1": "Expected type 'number', got string" })
    );
    assert_eq!(
        pair.validate(&Value::from(json!(["a"])))
            .unwrap_err()
            .to_json_value(),
        json!("expected tuple of 2 elements, got tuple of 1")
    );
}

#[test]
fn error_serializes_with_serde() {
    let err = list_checker(is_number())
        .validate(&Value::from(json!([1, "two", 3, null])))
        .unwrap_err();
    let text = serde_json::to_string(&err).unwrap();
    assert_eq!(
        text,
        r#"{"1":"Expected type 'number', got string","3":"is null!"}"#
    );
}

#[test]
fn payload_errors_keep_their_value() {
    let reject = from_fn(|value, _| {
        if value.as_str() == Some("forbidden") {
            Err(ValidationError::payload(json!({ "reason": "blocked", "code": 7 })))
        } else {
            Ok(())
        }
    });
    let checker = list_checker(reject);
    let err = checker
        .validate(&Value::from(json!(["ok", "forbidden"])))
        .unwrap_err();
    assert_eq!(
        err.to_json_value(),
        json!({ "1": { "reason": "blocked", "code": 7 } })
    );
}
