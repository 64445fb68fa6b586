//! Built-in leaf validators
//!
//! Leaf validators judge a single value and ignore its context.
//!
//! # Categories
//!
//! - **Definedness**: [`is_defined`], [`is_ill_defined`], [`is_undefined`]
//! - **Type tags**: [`is_type`], [`is_string`], [`is_number`], [`is_boolean`],
//!   [`is_list`], [`is_object`]
//! - **Equality**: [`is`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard_validator::prelude::*;
//!
//! let required_string = and(is_defined(), is_string());
//! let priority = is("high").or(is("low")).optional();
//! ```

pub mod defined;
pub mod equal;
pub mod types;

pub use defined::{IsDefined, IsIllDefined, IsUndefined, is_defined, is_ill_defined, is_undefined};
pub use equal::{Is, is};
pub use types::{
    IsDefinedType, IsType, is_boolean, is_list, is_number, is_object, is_string, is_type,
};
