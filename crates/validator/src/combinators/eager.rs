//! Eager AND / OR combinators
//!
//! [`EagerAnd`] and [`EagerOr`] always invoke every validator exactly once,
//! in order, before deciding the outcome. Use them where every branch must
//! run regardless of earlier failures; prefer the lazy [`and_all`] and
//! [`or_any`] otherwise.
//!
//! [`and_all`]: crate::combinators::and_all
//! [`or_any`]: crate::combinators::or_any

use crate::foundation::{Context, Validate, ValidationError, ValidationResult, Value};

/// Runs every validator and collects the errors.
fn run_all<V: Validate>(validators: &[V], value: &Value, cx: Context<'_>) -> (usize, Vec<ValidationError>) {
    let mut passed = 0;
    let mut errors = Vec::new();
    for validator in validators {
        match validator.validate_with(value, cx) {
            Ok(()) => passed += 1,
            Err(e) => errors.push(e),
        }
    }
    (passed, errors)
}

// ============================================================================
// EAGER AND
// ============================================================================

/// Conjunction that evaluates every validator.
///
/// Valid when no validator failed; otherwise the error is the sequence of
/// every failing validator's error, in order. Vacuously valid when empty.
#[derive(Debug, Clone)]
pub struct EagerAnd<V> {
    validators: Vec<V>,
}

impl<V> EagerAnd<V> {
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V: Validate> Validate for EagerAnd<V> {
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        let (_, errors) = run_all(&self.validators, value, cx);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Sequence(errors))
        }
    }
}

/// Creates an [`EagerAnd`]. See also [`eager_and!`](crate::eager_and).
#[must_use]
pub fn eager_and<V, I>(validators: I) -> EagerAnd<V>
where
    V: Validate,
    I: IntoIterator<Item = V>,
{
    EagerAnd {
        validators: validators.into_iter().collect(),
    }
}

// ============================================================================
// EAGER OR
// ============================================================================

/// Disjunction that evaluates every validator.
///
/// Valid when at least one validator passed; otherwise the error is the
/// sequence of every error. With no validators the result is an empty
/// sequence error, since no branch could have passed.
#[derive(Debug, Clone)]
pub struct EagerOr<V> {
    validators: Vec<V>,
}

impl<V> EagerOr<V> {
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V: Validate> Validate for EagerOr<V> {
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        let (passed, errors) = run_all(&self.validators, value, cx);
        if passed > 0 {
            Ok(())
        } else {
            Err(ValidationError::Sequence(errors))
        }
    }
}

/// Creates an [`EagerOr`]. See also [`eager_or!`](crate::eager_or).
#[must_use]
pub fn eager_or<V, I>(validators: I) -> EagerOr<V>
where
    V: Validate,
    I: IntoIterator<Item = V>,
{
    EagerOr {
        validators: validators.into_iter().collect(),
    }
}
