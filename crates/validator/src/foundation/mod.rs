//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Values**: [`Value`], [`Object`], [`Kind`]
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Context**: [`Context`], handed from structural checkers to children
//! - **Errors**: [`ValidationError`], [`Failure`], [`ErrorMap`], [`SchemaError`]
//!
//! # The result contract
//!
//! Every validator returns a [`ValidationResult`]. `Ok(())` is the single
//! "valid" outcome; any `Err` is an error, whatever its payload. There is no
//! truthiness involved: an `Err` carrying `""`, `0`, `false` or `null` is an
//! error like any other.
//!
//! ```rust,ignore
//! use shapeguard_validator::foundation::{is_error, ValidationError};
//!
//! assert!(!is_error(&Ok(())));
//! assert!(is_error(&Err(ValidationError::payload(""))));
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{ErrorMap, Failure, SchemaError, ValidationError};
pub use traits::{Context, SharedValidator, Validate, ValidateExt, shared};
pub use value::{Kind, Object, Value};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The outcome of a validation call.
pub type ValidationResult = Result<(), ValidationError>;

/// Per-field errors from an object checker.
pub type FieldErrors = ErrorMap<String>;

/// Per-index errors from a list or tuple checker.
pub type IndexErrors = ErrorMap<usize>;

// ============================================================================
// RESULT CONTRACT
// ============================================================================

/// Returns `true` iff `result` is not the valid outcome.
///
/// This is the one predicate every combinator and checker uses to tell
/// validity from failure.
#[inline]
pub fn is_error(result: &ValidationResult) -> bool {
    result.is_err()
}

/// Inverse of [`is_error`].
#[inline]
pub fn is_valid(result: &ValidationResult) -> bool {
    !is_error(result)
}

/// Validates a top-level value with `validator`.
///
/// This is a convenience function for one-off validations.
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &Value, validator: &V) -> ValidationResult
where
    V: Validate + ?Sized,
{
    validator.validate(value)
}

// ============================================================================
// TESTS
// ============================================================================
