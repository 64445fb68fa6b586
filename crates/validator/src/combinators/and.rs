//! AND combinator - lazy logical conjunction of validators
//!
//! This module provides the [`And`] combinator which combines two validators
//! with logical AND semantics, and [`AndAll`] for any number of validators.
//! Both are lazy: evaluation stops at the first failing validator and that
//! validator's error is returned unchanged. Later validators never run.
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard_validator::combinators::And;
//! use shapeguard_validator::foundation::{Validate, Value};
//!
//! // Both validators must pass
//! let validator = And::new(is_defined(), is_type(Kind::Number));
//! assert!(validator.validate(&Value::from(1)).is_ok());
//! assert!(validator.validate(&Value::Number(f64::NAN)).is_err()); // fails is_defined
//! ```

use crate::foundation::{Context, Validate, ValidationResult, Value};

/// Combines two validators with lazy logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// The error of the first failing validator is returned as-is.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first validator to apply
    /// * `right` - The second validator, applied only if `left` passes
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        self.left.validate_with(value, cx)?;
        self.right.validate_with(value, cx)
    }
}

/// Creates an `And` combinator from two validators.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::combinators::and;
///
/// let validator = and(is_defined(), is_string());
/// assert!(validator.validate(&Value::from("x")).is_ok());
/// ```
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
{
    And::new(left, right)
}

/// Creates an `AndAll` combinator from any number of validators.
///
/// With no validators the conjunction is vacuously valid. Use the
/// [`and!`](crate::and) macro to mix validators of different types.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::combinators::and_all;
///
/// let validator = and_all([is("a"), is("a")]);
/// assert!(validator.validate(&Value::from("a")).is_ok());
/// ```
#[must_use]
pub fn and_all<V, I>(validators: I) -> AndAll<V>
where
    V: Validate,
    I: IntoIterator<Item = V>,
{
    AndAll {
        validators: validators.into_iter().collect(),
    }
}

/// Combines multiple validators with lazy logical AND.
///
/// Validators run in order; the first error is returned unchanged and the
/// remaining validators are skipped.
///
/// # Type Parameters
///
/// * `V` - The validator type
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> AndAll<V> {
    /// Returns the validators in evaluation order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        for validator in &self.validators {
            validator.validate_with(value, cx)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::from_fn;
    use crate::foundation::{ValidateExt, ValidationError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fails(code: &'static str) -> impl Validate + Send + Sync {
        from_fn(move |_, _| Err(ValidationError::new(code, code)))
    }

    fn passes() -> impl Validate + Send + Sync {
        from_fn(|_, _| Ok(()))
    }

    #[test]
    fn test_and_both_pass() {
        let validator = And::new(passes(), passes());
        assert!(validator.validate(&Value::Null).is_ok());
    }

    #[test]
    fn test_and_returns_first_error_unwrapped() {
        let validator = And::new(fails("left"), fails("right"));
        let err = validator.validate(&Value::Null).unwrap_err();
        assert_eq!(err.code(), Some("left"));
    }

    #[test]
    fn test_and_skips_right_after_failure() {
        let calls = AtomicUsize::new(0);
        let counted = from_fn(|_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        let validator = fails("left").and(counted);
        assert!(validator.validate(&Value::Null).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_and_chain() {
        let validator = passes().and(passes()).and(fails("third"));
        let err = validator.validate(&Value::Null).unwrap_err();
        assert_eq!(err.code(), Some("third"));
    }

    #[test]
    fn test_and_all() {
        let combined = and_all(vec![passes().into_shared(), fails("second").into_shared()]);
        let err = combined.validate(&Value::from(1)).unwrap_err();
        assert_eq!(err.code(), Some("second"));
        assert!(err.is_terminal());
    }

    #[test]
    fn test_and_all_empty_is_valid() {
        let combined = and_all(Vec::<crate::foundation::SharedValidator>::new());
        assert!(combined.validate(&Value::Undefined).is_ok());
    }
}
