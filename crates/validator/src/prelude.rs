//! Prelude module for convenient imports.
//!
//! Provides a single `use shapeguard_validator::prelude::*;` import that
//! brings in the traits, value and error types, combinators, structural
//! checkers and leaf validators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard_validator::prelude::*;
//!
//! let action = or![is("like"), is("comment"), is("subscribe")];
//! let priority = is("high").or(is("low")).optional();
//! let cart = list_checker(is_number());
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    Context, ErrorMap, Failure, FieldErrors, IndexErrors, Kind, Object, SchemaError,
    SharedValidator, Validate, ValidateExt, ValidationError, ValidationResult, Value, is_error,
    is_valid, shared, validate_value,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, AndAll, EagerAnd, EagerOr, FromFn, Optional, Or, OrAny, and, and_all, eager_and,
    eager_or, from_fn, optional, or, or_any,
};

// ============================================================================
// STRUCTURE: Object, list and tuple checkers
// ============================================================================

pub use crate::structure::{
    ListChecker, ObjectChecker, ObjectSchema, TupleChecker, list_checker, object_checker,
    tuple_checker,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{and, eager_and, eager_or, or, tuple, validator};
