//! # shapeguard-validator
//!
//! Composable runtime validation for untyped values.
//!
//! A validator judges a [`Value`](foundation::Value) and returns
//! `Ok(())` or a structured [`ValidationError`](foundation::ValidationError)
//! describing where and why it failed. Validators compose with lazy and
//! eager logical combinators, and structural checkers apply them across
//! objects, lists and tuples.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shapeguard_validator::prelude::*;
//!
//! let user = ObjectSchema::new()
//!     .field("name", and(is_defined(), is_string()))
//!     .field("tags", list_checker(is_string()).optional())
//!     .field("role", or![is("admin"), is("member")])
//!     .build()?;
//!
//! let err = user.validate(&Value::object([("role", "guest")])).unwrap_err();
//! assert!(err.field("name").is_some());
//! assert!(err.field("role").is_some());
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for leaf validators, [`from_fn`](combinators::from_fn)
//! for one-off closures, or implement [`Validate`](foundation::Validate)
//! manually for complex cases.
//!
//! ## Modules
//!
//! - [`foundation`]: values, the `Validate` trait, context and errors
//! - [`combinators`]: `and`, `or`, eager variants, `optional`, `from_fn`
//! - [`structure`]: object, list and tuple checkers
//! - [`validators`]: definedness, type-tag and equality checks
//! - `json` (feature `serde`): `serde_json` interop

// ValidationError is returned by value on every call; boxing it would add an
// allocation to each failure.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Optional<...>, ...>, ...>) produces complex types.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
#[cfg(feature = "serde")]
pub mod json;
mod macros;
pub mod prelude;
pub mod structure;
pub mod validators;
