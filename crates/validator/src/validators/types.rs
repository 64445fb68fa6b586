//! Type-tag validators

use crate::combinators::{And, and};
use crate::foundation::{Kind, ValidationError};
use crate::validators::defined::{IsDefined, is_defined};

crate::validator! {
    /// Validates that a value has the given [`Kind`].
    ///
    /// `NaN` has kind [`Kind::Number`]; use [`is_number`] to reject it.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub IsType { kind: Kind };
    rule(self, value) { value.kind() == self.kind }
    error(self, value) { ValidationError::type_mismatch(self.kind, value.kind()) }
    fn is_type(kind: Kind);
}

/// Lazy conjunction of [`IsDefined`] and a type tag.
pub type IsDefinedType = And<IsDefined, IsType>;

#[must_use]
pub fn is_string() -> IsType {
    is_type(Kind::String)
}

#[must_use]
pub fn is_boolean() -> IsType {
    is_type(Kind::Boolean)
}

#[must_use]
pub fn is_list() -> IsType {
    is_type(Kind::List)
}

/// A defined number: `NaN` fails with `is NaN!`.
#[must_use]
pub fn is_number() -> IsDefinedType {
    and(is_defined(), is_type(Kind::Number))
}

/// A defined object: `null` fails with `is null!` rather than a type mismatch.
#[must_use]
pub fn is_object() -> IsDefinedType {
    and(is_defined(), is_type(Kind::Object))
}
