//! Equality validator

use crate::foundation::{ValidationError, Value};

crate::validator! {
    /// Validates that a value equals a fixed value.
    ///
    /// Comparison is structural and strict: no coercion between kinds, and
    /// `NaN` equals nothing.
    #[derive(PartialEq)]
    pub Is { expected: Value };
    rule(self, value) { *value == self.expected }
    error(self, value) { ValidationError::not_equal(&self.expected, value) }
    new(expected: impl Into<Value>) { Self { expected: expected.into() } }
    fn is(expected: impl Into<Value>);
}
