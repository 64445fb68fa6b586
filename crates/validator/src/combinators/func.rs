//! FROM_FN combinator - closures as validators

use crate::foundation::{Context, Validate, ValidationResult, Value};

/// A validator backed by a closure.
///
/// The closure sees the value and the position it was found at, which is
/// how cross-field and list-relative rules are written.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::combinators::from_fn;
/// use shapeguard_validator::foundation::{Validate, ValidationError, Value};
///
/// let non_negative = from_fn(|value, _| match value.as_f64() {
///     Some(n) if n >= 0.0 => Ok(()),
///     _ => Err(ValidationError::custom("must be non-negative")),
/// });
/// assert!(non_negative.validate(&Value::from(3)).is_ok());
/// ```
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

impl<F> Validate for FromFn<F>
where
    F: Fn(&Value, Context<'_>) -> ValidationResult,
{
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        (self.f)(value, cx)
    }
}

// Manual Debug impl since F might not implement Debug
impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Lifts a closure into a validator.
#[must_use]
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&Value, Context<'_>) -> ValidationResult,
{
    FromFn { f }
}
