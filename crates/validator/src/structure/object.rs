//! Object checker
//!
//! Validates the declared keys of an object, each with its own validator.
//! Keys that are not declared are ignored. A declared key that is missing
//! from the input is validated as [`Value::Undefined`], so "required" and
//! "optional" are expressed by the field validator itself.

use crate::foundation::{
    Context, FieldErrors, SchemaError, SharedValidator, Validate, ValidationError,
    ValidationResult, Value, shared,
};
use crate::validators::is_object;
use indexmap::IndexMap;
use indexmap::map::Entry;

// ============================================================================
// SCHEMA BUILDER
// ============================================================================

/// Builder for an [`ObjectChecker`].
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// let checker = ObjectSchema::new()
///     .field("display", and(is_defined(), is_string()))
///     .field("nickname", is_string().optional())
///     .build()?;
///
/// assert!(checker.validate(&Value::object([("display", "x")])).is_ok());
/// ```
#[derive(Clone, Default)]
pub struct ObjectSchema {
    fields: Vec<(String, SharedValidator)>,
}

impl ObjectSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `key` and the validator responsible for its value.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V>(mut self, key: impl Into<String>, validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
    {
        self.fields.push((key.into(), shared(validator)));
        self
    }

    /// Declares `key` with an already erased validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn shared_field(mut self, key: impl Into<String>, validator: SharedValidator) -> Self {
        self.fields.push((key.into(), validator));
        self
    }

    /// Builds the checker.
    ///
    /// Fails with [`SchemaError::DuplicateField`] if a key was declared more
    /// than once.
    pub fn build(self) -> Result<ObjectChecker, SchemaError> {
        let mut fields = IndexMap::with_capacity(self.fields.len());
        for (key, validator) in self.fields {
            match fields.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(SchemaError::DuplicateField {
                        key: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(validator);
                }
            }
        }
        Ok(ObjectChecker { fields })
    }
}

impl std::fmt::Debug for ObjectSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectSchema")
            .field("keys", &self.fields.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .finish()
    }
}

/// Builds an [`ObjectChecker`] from `(key, validator)` pairs.
///
/// ```rust,ignore
/// let checker = object_checker([
///     ("name", shared(is_string())),
///     ("age", shared(is_number().optional())),
/// ])?;
/// ```
pub fn object_checker<K, I>(fields: I) -> Result<ObjectChecker, SchemaError>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, SharedValidator)>,
{
    fields
        .into_iter()
        .fold(ObjectSchema::new(), |schema, (key, validator)| {
            schema.shared_field(key, validator)
        })
        .build()
}

// ============================================================================
// OBJECT CHECKER
// ============================================================================

/// Validates an object against a fixed set of field validators.
///
/// 1. The input must be a defined object, otherwise the shape error is
///    returned and no field validator runs.
/// 2. Every declared field validator runs, in declaration order, with the
///    field value and a [`Context::Field`] carrying the key and the whole
///    object.
/// 3. Failing fields are collected into [`ValidationError::Fields`].
#[derive(Clone)]
pub struct ObjectChecker {
    fields: IndexMap<String, SharedValidator>,
}

impl ObjectChecker {
    /// The declared keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The validator declared for `key`.
    pub fn get(&self, key: &str) -> Option<&SharedValidator> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Validate for ObjectChecker {
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        let Some(object) = value.as_object() else {
            return is_object().validate_with(value, cx);
        };

        let mut errors = FieldErrors::new();
        for (key, validator) in &self.fields {
            let field_cx = Context::Field {
                key: key.as_str(),
                object,
            };
            if let Err(e) = validator.validate_with(value.get(key), field_cx) {
                errors.insert(key.clone(), e);
            }
        }

        tracing::trace!(
            fields = self.fields.len(),
            failed = errors.len(),
            "object checked"
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Fields(errors))
        }
    }
}

impl std::fmt::Debug for ObjectChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectChecker")
            .field("keys", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
