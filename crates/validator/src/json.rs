//! `serde_json` interop for values and error payloads.
//!
//! Converts loosely-typed JSON into [`Value`] for validation and renders
//! [`ValidationError`]s back to JSON for reporting:
//!
//! | error                | JSON                              |
//! |----------------------|-----------------------------------|
//! | `Failure`            | the message string                |
//! | `Payload`            | the payload value                 |
//! | `Sequence`           | array of branch errors            |
//! | `Fields` / `Indices` | object keyed by field / index     |
//!
//! JSON has no undefined and no `NaN`: both render as `null`, and undefined
//! object members are omitted.
//!
//! # Examples
//!
//! ```
//! use shapeguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let checker = ObjectSchema::new()
//!     .field("display", and(is_defined(), is_string()))
//!     .build()
//!     .unwrap();
//!
//! let err = checker.validate(&Value::from(json!({}))).unwrap_err();
//! assert_eq!(err.to_json_value(), json!({ "display": "is undefined!" }));
//! ```

use crate::foundation::{ValidationError, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(members) => Self::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        Self::from(json.clone())
    }
}

fn number_to_json(n: f64) -> JsonValue {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        JsonValue::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
    }
}

impl Value {
    /// Renders this value as JSON.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Undefined | Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Number(n) => number_to_json(*n),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::List(items) => JsonValue::Array(items.iter().map(Self::to_json).collect()),
            Self::Object(members) => JsonValue::Object(
                members
                    .iter()
                    .filter(|(_, value)| !value.is_undefined())
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Self::from)
    }
}

impl ValidationError {
    /// Renders this error as JSON, with terminal failures reduced to their
    /// message.
    pub fn to_json_value(&self) -> JsonValue {
        match self {
            Self::Failure(failure) => JsonValue::String(failure.message.to_string()),
            Self::Payload(value) => value.to_json(),
            Self::Sequence(errors) => {
                JsonValue::Array(errors.iter().map(Self::to_json_value).collect())
            }
            Self::Fields(errors) => JsonValue::Object(
                errors
                    .iter()
                    .map(|(key, error)| (key.clone(), error.to_json_value()))
                    .collect(),
            ),
            Self::Indices(errors) => JsonValue::Object(
                errors
                    .iter()
                    .map(|(index, error)| (index.to_string(), error.to_json_value()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}
