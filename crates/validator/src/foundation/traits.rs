//! Core traits for the validation system
//!
//! This module defines the [`Validate`] contract every checker implements,
//! the per-call [`Context`] handed down by structural checkers, and the
//! [`ValidateExt`] combinator methods.

use crate::foundation::value::{Object, Value};
use crate::foundation::ValidationResult;
use std::sync::Arc;

// ============================================================================
// CONTEXT
// ============================================================================

/// Where the value being validated sits inside its parent.
///
/// Structural checkers pass the enclosing container so that a child
/// validator can express co-dependent rules ("`b` is required when `a` is
/// set", "elements must be non-decreasing"). Combinators forward the context
/// they received to every branch unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub enum Context<'a> {
    /// A top-level call with no enclosing container.
    #[default]
    Root,
    /// The value of `key` inside `object`.
    Field { key: &'a str, object: &'a Object },
    /// Element `index` of `list`. Used by both list and tuple checkers.
    Element { index: usize, list: &'a [Value] },
}

impl<'a> Context<'a> {
    /// The field key, for a value read from an object.
    pub fn key(&self) -> Option<&'a str> {
        match *self {
            Self::Field { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The whole parent object, for a value read from an object.
    pub fn object(&self) -> Option<&'a Object> {
        match *self {
            Self::Field { object, .. } => Some(object),
            _ => None,
        }
    }

    /// The element index, for a value read from a list or tuple.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::Element { index, .. } => Some(index),
            _ => None,
        }
    }

    /// The whole parent list, for a value read from a list or tuple.
    pub fn list(&self) -> Option<&'a [Value]> {
        match *self {
            Self::Element { list, .. } => Some(list),
            _ => None,
        }
    }

    /// A sibling member of the parent object, or [`Value::Undefined`].
    pub fn sibling(&self, key: &str) -> &'a Value {
        static UNDEFINED: Value = Value::Undefined;
        self.object()
            .and_then(|object| object.get(key))
            .unwrap_or(&UNDEFINED)
    }
}

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The contract every validator implements.
///
/// A validator is a pure, stateless judgement over a [`Value`]: it returns
/// `Ok(())` when the value conforms and `Err(ValidationError)` otherwise. It
/// never mutates or coerces the value it is given.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::foundation::{Context, Validate, ValidationError, ValidationResult, Value};
///
/// struct NonNegative;
///
/// impl Validate for NonNegative {
///     fn validate_with(&self, value: &Value, _cx: Context<'_>) -> ValidationResult {
///         match value.as_f64() {
///             Some(n) if n >= 0.0 => Ok(()),
///             _ => Err(ValidationError::custom("must be non-negative")),
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// Validates `value` found at position `cx`.
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult;

    /// Validates a top-level value.
    fn validate(&self, value: &Value) -> ValidationResult {
        self.validate_with(value, Context::Root)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        (**self).validate_with(value, cx)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        (**self).validate_with(value, cx)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        (**self).validate_with(value, cx)
    }
}

/// A type-erased validator that can be shared across schemas and threads.
pub type SharedValidator = Arc<dyn Validate + Send + Sync>;

/// Erases a validator's type so heterogeneous validators can be composed.
pub fn shared<V>(validator: V) -> SharedValidator
where
    V: Validate + Send + Sync + 'static,
{
    Arc::new(validator)
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every type that implements [`Validate`].
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// let priority = is("high").or(is("low")).optional();
/// assert!(priority.validate(&Value::Null).is_ok());
/// assert!(priority.validate(&Value::from("normal")).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with lazy logical AND.
    ///
    /// Short-circuits on the first failure and returns that error unchanged.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate,
    {
        And::new(self, other)
    }

    /// Combines two validators with lazy logical OR.
    ///
    /// Short-circuits on the first success. If both fail, the error is the
    /// sequence of both branch errors.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate,
    {
        Or::new(self, other)
    }

    /// Accepts ill-defined values (undefined, null, `NaN`) without running
    /// this validator.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Erases the validator's type. See [`shared`].
    fn into_shared(self) -> SharedValidator
    where
        Self: Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================
