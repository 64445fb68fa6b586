//! OR combinator - lazy logical disjunction of validators
//!
//! This module provides the [`Or`] combinator which combines two validators
//! with logical OR semantics, and [`OrAny`] for any number of validators.
//! Evaluation stops at the first validator that passes. A disjunction can
//! only fail after every branch has been tried, so the error is the sequence
//! of all branch errors in evaluation order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard_validator::combinators::Or;
//! use shapeguard_validator::foundation::{Validate, Value};
//!
//! let validator = Or::new(is("like"), is("comment"));
//! assert!(validator.validate(&Value::from("like")).is_ok());
//! assert!(validator.validate(&Value::from("share")).is_err());
//! ```

use crate::foundation::{Context, Validate, ValidationError, ValidationResult, Value};

/// Combines two validators with lazy logical OR.
///
/// If the first validator passes, the second is not evaluated. If both fail
/// the error is a [`ValidationError::Sequence`] of `[left, right]`.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first validator to try
    /// * `right` - The second validator to try if the first fails
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

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        match self.left.validate_with(value, cx) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate_with(value, cx) {
                Ok(()) => Ok(()),
                Err(right_error) => Err(ValidationError::Sequence(vec![left_error, right_error])),
            },
        }
    }
}

/// Creates an `Or` combinator from two validators.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::combinators::or;
///
/// let validator = or(is_string(), is_number());
/// assert!(validator.validate(&Value::from(1)).is_ok());
/// ```
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate,
{
    Or::new(left, right)
}

/// Creates an `OrAny` combinator from any number of validators.
///
/// With no validators the disjunction is vacuously an error: an empty
/// [`ValidationError::Sequence`]. Use the [`or!`](crate::or) macro to mix
/// validators of different types.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::combinators::or_any;
///
/// let action = or_any([is("like"), is("comment"), is("subscribe")]);
/// assert!(action.validate(&Value::from("comment")).is_ok());
/// ```
#[must_use]
pub fn or_any<V, I>(validators: I) -> OrAny<V>
where
    V: Validate,
    I: IntoIterator<Item = V>,
{
    OrAny {
        validators: validators.into_iter().collect(),
    }
}

/// Tries multiple validators until one passes.
///
/// Iterates through the validators in order, returning success as soon as
/// one passes. If all fail, returns the sequence of every error.
///
/// # Type Parameters
///
/// * `V` - The validator type
#[derive(Debug, Clone)]
pub struct OrAny<V> {
    validators: Vec<V>,
}

impl<V> OrAny<V> {
    /// Returns the validators in evaluation order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Validate for OrAny<V>
where
    V: Validate,
{
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        let mut errors = Vec::with_capacity(self.validators.len());

        for validator in &self.validators {
            match validator.validate_with(value, cx) {
                Ok(()) => return Ok(()),
                Err(e) => errors.push(e),
            }
        }

        Err(ValidationError::Sequence(errors))
    }
}
