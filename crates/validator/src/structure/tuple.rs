//! Tuple checker

use super::list_shape_error;
use crate::foundation::{
    Context, IndexErrors, SharedValidator, Validate, ValidationError, ValidationResult, Value,
};

/// Validates a fixed-length list with one validator per position.
///
/// A length mismatch is reported as a single arity error and no position is
/// checked. Otherwise every position is checked with a
/// [`Context::Element`], and failing positions are collected into
/// [`ValidationError::Indices`].
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::prelude::*;
///
/// let point = tuple![is_number(), is_number(), is_string()];
/// assert!(point.validate(&Value::from(vec![Value::from(1), Value::from(2)])).is_err());
/// ```
#[derive(Clone)]
pub struct TupleChecker {
    positions: Vec<SharedValidator>,
}

impl TupleChecker {
    /// Number of positions.
    pub fn arity(&self) -> usize {
        self.positions.len()
    }
}

impl Validate for TupleChecker {
    fn validate_with(&self, value: &Value, cx: Context<'_>) -> ValidationResult {
        let Some(list) = value.as_list() else {
            return list_shape_error(value, cx);
        };

        if list.len() != self.positions.len() {
            tracing::trace!(
                expected = self.positions.len(),
                actual = list.len(),
                "tuple arity mismatch"
            );
            return Err(ValidationError::arity_mismatch(
                self.positions.len(),
                list.len(),
            ));
        }

        let errors: IndexErrors = self
            .positions
            .iter()
            .zip(list)
            .enumerate()
            .filter_map(|(index, (validator, element))| {
                validator
                    .validate_with(element, Context::Element { index, list })
                    .err()
                    .map(|e| (index, e))
            })
            .collect();

        tracing::trace!(elements = list.len(), failed = errors.len(), "tuple checked");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Indices(errors))
        }
    }
}

impl std::fmt::Debug for TupleChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TupleChecker")
            .field("arity", &self.positions.len())
            .finish()
    }
}

/// Creates a [`TupleChecker`] from positional validators.
///
/// See also [`tuple!`](crate::tuple) for validators of mixed types.
pub fn tuple_checker<I>(positions: I) -> TupleChecker
where
    I: IntoIterator<Item = SharedValidator>,
{
    TupleChecker {
        positions: positions.into_iter().collect(),
    }
}
