//! Macros for creating and composing validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] - Create a leaf validator (struct + Validate impl + factory fn)
//! - [`and!`] - Lazy AND over validators of any type
//! - [`or!`] - Lazy OR over validators of any type
//! - [`eager_and!`] / [`eager_or!`] - Eager counterparts
//! - [`tuple!`] - Positional tuple checker
//!
//! The composition macros erase each argument into a
//! [`SharedValidator`](crate::foundation::SharedValidator), so arguments may
//! have different types. An empty invocation is allowed.
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard_validator::{and, or, validator};
//! use shapeguard_validator::foundation::{ValidationError, Value};
//!
//! validator! {
//!     pub NonEmpty;
//!     rule(value) { value.as_str().is_some_and(|s| !s.is_empty()) }
//!     error(value) { ValidationError::new("non_empty", "must not be empty") }
//!     fn non_empty();
//! }
//!
//! let name = and![is_string(), non_empty()];
//! let action = or![is("like"), is("comment")];
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete leaf validator: struct definition, `Validate`
/// implementation, constructor, and factory function.
///
/// The rule is a boolean expression over the validated `&Value`; the error
/// block builds the [`ValidationError`](crate::foundation::ValidationError)
/// returned when the rule does not hold. Leaf validators ignore the context.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields). Derives `Debug`, `Clone`,
/// `Copy`, `Default`, `PartialEq`, `Eq` and `Hash`:
/// ```rust,ignore
/// validator! {
///     pub IsTrue;
///     rule(value) { value.as_bool() == Some(true) }
///     error(value) { ValidationError::new("is_true", "must be true") }
///     fn is_true();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields). Derives `Debug` and
/// `Clone`; add more via `#[derive(...)]`:
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub IsType { kind: Kind };
///     rule(self, value) { value.kind() == self.kind }
///     error(self, value) { ValidationError::type_mismatch(self.kind, value.kind()) }
///     fn is_type(kind: Kind);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub Is { expected: Value };
///     rule(self, value) { *value == self.expected }
///     error(self, value) { ValidationError::not_equal(&self.expected, value) }
///     new(expected: impl Into<Value>) { Self { expected: expected.into() } }
///     fn is(expected: impl Into<Value>);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Shared Validate impl for struct validators ───────────────────────
    (@impl $name:ident; $self_:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate_with(
                &$self_,
                $inp: &$crate::foundation::Value,
                _cx: $crate::foundation::Context<'_>,
            ) -> $crate::foundation::ValidationResult {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate_with(
                &self,
                $inp: &$crate::foundation::Value,
                _cx: $crate::foundation::Context<'_>,
            ) -> $crate::foundation::ValidationResult {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name; $self_, $inp, $rule, $einp, $err);
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name; $self_, $inp, $rule, $einp, $err);
    };

}

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

/// Lazy AND over validators of any type. See [`and_all`](crate::combinators::and_all).
///
/// ```rust,ignore
/// let name = and![is_defined(), is_string()];
/// ```
#[macro_export]
macro_rules! and {
    ($($validator:expr),* $(,)?) => {{
        let validators: ::std::vec::Vec<$crate::foundation::SharedValidator> =
            ::std::vec![$($crate::foundation::shared($validator)),*];
        $crate::combinators::and_all(validators)
    }};
}

/// Lazy OR over validators of any type. See [`or_any`](crate::combinators::or_any).
///
/// ```rust,ignore
/// let action = or![is("like"), is("comment"), is("subscribe")];
/// ```
#[macro_export]
macro_rules! or {
    ($($validator:expr),* $(,)?) => {{
        let validators: ::std::vec::Vec<$crate::foundation::SharedValidator> =
            ::std::vec![$($crate::foundation::shared($validator)),*];
        $crate::combinators::or_any(validators)
    }};
}

/// Eager AND over validators of any type. See [`eager_and`](crate::combinators::eager_and).
#[macro_export]
macro_rules! eager_and {
    ($($validator:expr),* $(,)?) => {{
        let validators: ::std::vec::Vec<$crate::foundation::SharedValidator> =
            ::std::vec![$($crate::foundation::shared($validator)),*];
        $crate::combinators::eager_and(validators)
    }};
}

/// Eager OR over validators of any type. See [`eager_or`](crate::combinators::eager_or).
#[macro_export]
macro_rules! eager_or {
    ($($validator:expr),* $(,)?) => {{
        let validators: ::std::vec::Vec<$crate::foundation::SharedValidator> =
            ::std::vec![$($crate::foundation::shared($validator)),*];
        $crate::combinators::eager_or(validators)
    }};
}

/// Tuple checker with one validator per position.
/// See [`tuple_checker`](crate::structure::tuple_checker).
///
/// ```rust,ignore
/// let point = tuple![is_number(), is_number()];
/// ```
#[macro_export]
macro_rules! tuple {
    ($($validator:expr),* $(,)?) => {{
        let validators: ::std::vec::Vec<$crate::foundation::SharedValidator> =
            ::std::vec![$($crate::foundation::shared($validator)),*];
        $crate::structure::tuple_checker(validators)
    }};
}

// ============================================================================
// TESTS
// ============================================================================
