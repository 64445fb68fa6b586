//! Error payloads produced by validators.
//!
//! A failed validation returns a [`ValidationError`]. Leaf checkers produce
//! terminal payloads ([`Failure`] or an opaque [`Value`]); combinators wrap
//! branch errors into a [`ValidationError::Sequence`]; structural checkers
//! aggregate per-position errors into a sparse [`ErrorMap`].
//!
//! All static strings use `Cow<'static, str>` so the common case of fixed
//! codes and messages does not allocate.

use crate::foundation::value::Value;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

// ============================================================================
// FAILURE
// ============================================================================

/// A terminal, descriptive error: a machine-readable code, a human message
/// and ordered parameters.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard_validator::foundation::Failure;
///
/// let failure = Failure::new("too_long", "Expected at most 17 characters")
///     .with_param("max", "17");
/// assert_eq!(failure.param("max"), Some("17"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Failure {
    /// Error code for programmatic handling, e.g. `type_mismatch`.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Message parameters, typically 0-3 entries.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Failure {
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The error half of a validation result.
///
/// Any `Err` is an error regardless of what it carries: a payload of `""`,
/// `0`, `false`, `NaN` or `null` is still a failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Terminal error from a leaf, shape, arity or equality check.
    #[error("{0}")]
    Failure(Failure),

    /// Opaque payload returned by a custom validator.
    #[error("{0}")]
    Payload(Value),

    /// Branch errors collected by a combinator, in evaluation order.
    #[error("{}", display_sequence(.0))]
    Sequence(Vec<ValidationError>),

    /// Per-field errors from an object checker.
    #[error("{0}")]
    Fields(ErrorMap<String>),

    /// Per-index errors from a list or tuple checker.
    #[error("{0}")]
    Indices(ErrorMap<usize>),
}

fn display_sequence(errors: &[ValidationError]) -> String {
    let parts: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join("; "))
}

impl ValidationError {
    /// Creates a terminal error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Failure(Failure::new(code, message))
    }

    /// Creates a terminal error with the `custom` code.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// Wraps an arbitrary value as the error payload.
    pub fn payload(value: impl Into<Value>) -> Self {
        Self::Payload(value.into())
    }

    /// "Expected type 'object', got list".
    pub fn type_mismatch(
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        let (expected, actual) = (expected.to_string(), actual.to_string());
        Self::Failure(
            Failure::new(
                "type_mismatch",
                format!("Expected type '{expected}', got {actual}"),
            )
            .with_param("expected", expected)
            .with_param("actual", actual),
        )
    }

    /// "is null!" for an ill-defined value.
    pub fn ill_defined(value: &Value) -> Self {
        Self::Failure(
            Failure::new("ill_defined", format!("is {value}!"))
                .with_param("actual", value.kind().as_str()),
        )
    }

    /// Tuple length mismatch.
    pub fn arity_mismatch(expected: usize, actual: usize) -> Self {
        Self::Failure(
            Failure::new(
                "arity_mismatch",
                format!("expected tuple of {expected} elements, got tuple of {actual}"),
            )
            .with_param("expected", expected.to_string())
            .with_param("actual", actual.to_string()),
        )
    }

    /// Strict equality mismatch.
    pub fn not_equal(expected: &Value, actual: &Value) -> Self {
        Self::Failure(
            Failure::new("not_equal", format!("Expected '{expected}', got {actual}"))
                .with_param("expected", expected.to_string()),
        )
    }

    /// Whether this error is a leaf payload rather than an aggregate.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failure(_) | Self::Payload(_))
    }

    /// The code of a [`Failure`], if this is one.
    pub fn code(&self) -> Option<&str> {
        self.as_failure().map(|failure| failure.code.as_ref())
    }

    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Self::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn as_payload(&self) -> Option<&Value> {
        match self {
            Self::Payload(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ValidationError]> {
        match self {
            Self::Sequence(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn as_fields(&self) -> Option<&ErrorMap<String>> {
        match self {
            Self::Fields(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_indices(&self) -> Option<&ErrorMap<usize>> {
        match self {
            Self::Indices(map) => Some(map),
            _ => None,
        }
    }

    /// The error recorded for `key` by an object checker.
    pub fn field(&self, key: &str) -> Option<&ValidationError> {
        self.as_fields().and_then(|map| map.get(key))
    }

    /// The error recorded for `index` by a list or tuple checker.
    pub fn index(&self, index: usize) -> Option<&ValidationError> {
        self.as_indices().and_then(|map| map.get(&index))
    }

    /// Returns the number of errors, this one included.
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + match self {
            Self::Failure(_) | Self::Payload(_) => 0,
            Self::Sequence(errors) => errors.iter().map(Self::total_error_count).sum(),
            Self::Fields(map) => map.values().map(Self::total_error_count).sum(),
            Self::Indices(map) => map.values().map(Self::total_error_count).sum(),
        }
    }
}

impl From<Failure> for ValidationError {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

// ============================================================================
// ERROR MAP
// ============================================================================

/// Sparse map from a field key or element index to its error.
///
/// Only failing positions are present; a missing key means that position
/// passed. Entries keep the order in which they were checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMap<K: Hash + Eq> {
    entries: IndexMap<K, ValidationError>,
}

impl<K: Hash + Eq> ErrorMap<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Records the error for a failing position.
    pub fn insert(&mut self, key: K, error: ValidationError) {
        self.entries.insert(key, error);
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&ValidationError>
    where
        Q: Hash + indexmap::Equivalent<K> + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Hash + indexmap::Equivalent<K> + ?Sized,
    {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, K, ValidationError> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, K, ValidationError> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, K, ValidationError> {
        self.entries.values()
    }
}

impl<K: Hash + Eq> Default for ErrorMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> FromIterator<(K, ValidationError)> for ErrorMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, ValidationError)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq> IntoIterator for ErrorMap<K> {
    type Item = (K, ValidationError);
    type IntoIter = indexmap::map::IntoIter<K, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K: Hash + Eq> IntoIterator for &'a ErrorMap<K> {
    type Item = (&'a K, &'a ValidationError);
    type IntoIter = indexmap::map::Iter<'a, K, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Hash + Eq + fmt::Display> fmt::Display for ErrorMap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, error)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{key}: {error}")?;
        }
        f.write_str("}")
    }
}

// ============================================================================
// SCHEMA ERROR
// ============================================================================

/// A malformed schema, reported when the schema is built.
///
/// These are programmer errors and never occur on the validation path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// The same key was declared twice in an object schema.
    #[error("field '{key}' is declared more than once")]
    DuplicateField { key: String },
}

// ============================================================================
// TESTS
// ============================================================================
