//! OPTIONAL combinator - lets ill-defined values through

use crate::combinators::or::Or;
use crate::foundation::{Context, Validate, ValidationResult, Value};
use crate::validators::{IsIllDefined, is_ill_defined};

/// Accepts ill-defined values (undefined, null, `NaN`) and delegates
/// everything else to the inner validator.
///
/// Equivalent to `or(is_ill_defined(), inner)`: the inner validator is never
/// invoked on an ill-defined input. When the inner validator rejects a
/// defined value the error is the two-branch sequence produced by [`Or`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: Or<IsIllDefined, V>,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self {
            inner: Or::new(is_ill_defined(), inner),
        }
    }

    pub fn inner(&self) -> &V {
        self.inner.right()
    }

    pub fn into_inner(self) -> V {
        self.inner.into_parts().1
    }
}

impl<V: Validate> Validate for Optional<V> {
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        self.inner.validate_with(value, cx)
    }
}

/// Creates an [`Optional`] wrapper around `validator`.
pub fn optional<V: Validate>(validator: V) -> Optional<V> {
    Optional::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::from_fn;
    use crate::foundation::ValidationError;
    use crate::validators::is_string;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[case::null(Value::Null)]
    #[case::undefined(Value::Undefined)]
    #[case::nan(Value::Number(f64::NAN))]
    fn ill_defined_skips_inner(#[case] value: Value) {
        let calls = AtomicUsize::new(0);
        let validator = optional(from_fn(|_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ValidationError::custom("inner"))
        }));
        assert!(validator.validate(&value).is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn defined_values_delegate() {
        let validator = optional(is_string());
        assert!(validator.validate(&Value::from("x")).is_ok());

        let err = validator.validate(&Value::from(1)).unwrap_err();
        let branches = err.as_sequence().unwrap();
        assert_eq!(branches.len(), 2);
        assert_eq!(branches[0].code(), Some("expected_ill_defined"));
        assert_eq!(branches[1].code(), Some("type_mismatch"));
    }

    #[test]
    fn falsy_defined_values_are_checked() {
        let calls = AtomicUsize::new(0);
        let validator = optional(from_fn(|_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }));
        for value in [Value::from(0), Value::from(""), Value::from(false)] {
            assert!(validator.validate(&value).is_ok());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn inner_accessors() {
        let validator = optional(is_string());
        assert_eq!(*validator.inner(), is_string());
        assert_eq!(validator.into_inner(), is_string());
    }
}
