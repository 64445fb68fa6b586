//! List checker

use super::list_shape_error;
use crate::foundation::{Context, IndexErrors, Validate, ValidationError, ValidationResult, Value};

/// Validates every element of a list with the same validator.
///
/// Each element is checked with a [`Context::Element`] carrying its index and
/// the whole list, so a validator can express rules relative to its
/// neighbours. Every element is checked; the failing ones are collected into
/// [`ValidationError::Indices`].
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// let sorted = list_checker(from_fn(|value, cx| {
///     let previous = cx.index().and_then(|i| i.checked_sub(1)).map(|i| &cx.list().unwrap()[i]);
///     match (previous.and_then(Value::as_f64), value.as_f64()) {
///         (Some(p), Some(n)) if n < p => Err(ValidationError::custom("not sorted")),
///         _ => Ok(()),
///     }
/// }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListChecker<V> {
    element: V,
}

impl<V> ListChecker<V> {
    pub fn new(element: V) -> Self {
        Self { element }
    }

    /// Returns a reference to the element validator.
    pub fn element(&self) -> &V {
        &self.element
    }

    pub fn into_inner(self) -> V {
        self.element
    }
}

impl<V: Validate> Validate for ListChecker<V> {
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        let Some(list) = value.as_list() else {
            return list_shape_error(value, cx);
        };

        let errors: IndexErrors = list
            .iter()
            .enumerate()
            .filter_map(|(index, element)| {
                self.element
                    .validate_with(element, Context::Element { index, list })
                    .err()
                    .map(|e| (index, e))
            })
            .collect();

        tracing::trace!(elements = list.len(), failed = errors.len(), "list checked");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Indices(errors))
        }
    }
}

/// Creates a [`ListChecker`] applying `validator` to every element.
pub fn list_checker<V: Validate>(validator: V) -> ListChecker<V> {
    ListChecker::new(validator)
}
