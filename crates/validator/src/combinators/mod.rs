//! Validator combinators
//!
//! Combinators build new validators out of existing ones without changing
//! the result contract: every combinator is itself a [`Validate`] and
//! forwards the [`Context`] it received to its children.
//!
//! - **Lazy**: [`And`], [`AndAll`], [`Or`], [`OrAny`] stop as soon as the
//!   outcome is known.
//! - **Eager**: [`EagerAnd`], [`EagerOr`] run every validator.
//! - **Optional**: [`Optional`] lets ill-defined values through.
//! - **Closures**: [`FromFn`] lifts a closure.
//!
//! There is no negation combinator.
//!
//! [`Validate`]: crate::foundation::Validate
//! [`Context`]: crate::foundation::Context

pub mod and;
pub mod eager;
pub mod func;
pub mod optional;
pub mod or;

pub use and::{And, AndAll, and, and_all};
pub use eager::{EagerAnd, EagerOr, eager_and, eager_or};
pub use func::{FromFn, from_fn};
pub use optional::{Optional, optional};
pub use or::{Or, OrAny, or, or_any};
