//! Validating a nested company record received as JSON.
//!
//! Run: `cargo run -p shapeguard-validator --example company`

use serde_json::json;
use shapeguard_validator::prelude::*;

validator! {
    /// A string with at least one character.
    NonEmptyString;
    rule(value) { value.as_str().is_some_and(|s| !s.is_empty()) }
    error(value) { ValidationError::new("non_empty", "must be a non-empty string") }
    fn non_empty_string();
}

fn company_schema() -> Result<ObjectChecker, SchemaError> {
    let names = ObjectSchema::new()
        .field("display", non_empty_string())
        .field("legal", non_empty_string().optional())
        .build()?;

    let bank_account = ObjectSchema::new()
        .field("routing_number", non_empty_string())
        .field("account_number", non_empty_string())
        .field("account_holder_name", non_empty_string())
        .field("account_holder_type", is("company"))
        .build()?;

    // Accepting the terms only matters once a bank account is attached.
    let tos_accepted = is_boolean().and(from_fn(|value, cx| {
        if !cx.sibling("bank_account").is_ill_defined() && value.as_bool() != Some(true) {
            Err(ValidationError::new(
                "tos_required",
                "terms of service must be accepted before adding a bank account",
            ))
        } else {
            Ok(())
        }
    }));

    ObjectSchema::new()
        .field("name", names)
        .field("bank_account", bank_account.optional())
        .field("website", is_string().optional())
        .field("tax_id", is_string().optional())
        .field("email", is_string().optional())
        .field("tos_accepted", tos_accepted)
        .build()
}

fn report(label: &str, checker: &ObjectChecker, input: serde_json::Value) {
    match checker.validate(&Value::from(input)) {
        Ok(()) => println!("{label}: valid"),
        Err(err) => println!("{label}: {}", err.to_json_value()),
    }
}

fn main() -> Result<(), SchemaError> {
    let checker = company_schema()?;

    report(
        "minimal",
        &checker,
        json!({ "name": { "display": "pujitm" }, "tos_accepted": false }),
    );

    report(
        "bank account without terms",
        &checker,
        json!({
            "name": { "display": "pujitm" },
            "bank_account": {
                "routing_number": "k",
                "account_holder_name": "j",
                "account_holder_type": "company",
                "account_number": "234"
            },
            "tos_accepted": false
        }),
    );

    report(
        "empty names",
        &checker,
        json!({ "name": { "legal": "" }, "website": 42, "tos_accepted": true }),
    );

    Ok(())
}
