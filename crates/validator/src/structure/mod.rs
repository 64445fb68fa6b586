//! Structural checkers
//!
//! Checkers that apply child validators across a composite value and
//! aggregate the child results into a sparse error map:
//!
//! - [`ObjectChecker`] - one validator per declared key, errors keyed by field
//! - [`ListChecker`] - one validator for every element, errors keyed by index
//! - [`TupleChecker`] - one validator per position, errors keyed by index
//!
//! All three check the shape of the input first and return a terminal error
//! if it is ill-defined or of the wrong kind. Child validators are then run
//! eagerly: a failing child never prevents its siblings from running.
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard_validator::prelude::*;
//!
//! let checker = ObjectSchema::new()
//!     .field("name", is_string())
//!     .field("tags", list_checker(is_string()).optional())
//!     .build()?;
//! ```

pub mod list;
pub mod object;
pub mod tuple;

pub use list::{ListChecker, list_checker};
pub use object::{ObjectChecker, ObjectSchema, object_checker};
pub use tuple::{TupleChecker, tuple_checker};

use crate::foundation::{Context, Validate, ValidateExt, ValidationResult, Value};
use crate::validators::{is_defined, is_list};

/// Shape check shared by the list and tuple checkers: a defined list.
///
/// Only called once `value` is known not to be a list, so it always fails.
fn list_shape_error(value: &Value, cx: Context<'_>) -> ValidationResult {
    is_defined().and(is_list()).validate_with(value, cx)
}
