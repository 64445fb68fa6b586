//! Definedness validators
//!
//! A value is ill-defined when it is [`Value::Undefined`], [`Value::Null`] or
//! a `NaN` number. Everything else, including `0`, `""` and `false`, is
//! defined.
//!
//! [`Value::Undefined`]: crate::foundation::Value::Undefined
//! [`Value::Null`]: crate::foundation::Value::Null

use crate::foundation::{Kind, ValidationError};

crate::validator! {
    /// Rejects ill-defined values with `is undefined!`, `is null!` or `is NaN!`.
    pub IsDefined;
    rule(value) { !value.is_ill_defined() }
    error(value) { ValidationError::ill_defined(value) }
    fn is_defined();
}

crate::validator! {
    /// Accepts only ill-defined values. The left branch of
    /// [`optional`](crate::combinators::optional).
    pub IsIllDefined;
    rule(value) { value.is_ill_defined() }
    error(value) {
        ValidationError::new(
            "expected_ill_defined",
            format!("expected ill-defined value, got {value}"),
        )
    }
    fn is_ill_defined();
}

crate::validator! {
    /// Accepts only the absent value.
    pub IsUndefined;
    rule(value) { value.is_undefined() }
    error(value) { ValidationError::type_mismatch(Kind::Undefined, value.kind()) }
    fn is_undefined();
}
