//! # Proviso
//!
//! > *a condition attached to an agreement*
//!
//! A validation library built from three small pieces: [`Rule`]s pair a
//! predicate with a failure message, [`NamedValue`]s tag values with the
//! field name used in that message, and contexts decide what a failure
//! means. The same rules run under any context:
//!
//! - [`Collector`] records every violation and reports them all
//! - [`FailFast`] stops at the first violation with a typed error
//! - [`Lazy`] defers evaluation until the violations are iterated
//!
//! ## Quick Example
//!
//! ```rust
//! use proviso::{rules, validate_all, Named};
//!
//! let report = validate_all(|v| {
//!     v.must(&"".named("username"), rules::string::not_blank());
//!     v.must(&"hunter2".named("password"), rules::string::min_length(8));
//!     v.must(&16.named("age"), rules::ord::at_least(18));
//! });
//!
//! assert!(report.is_invalid());
//! let messages: Vec<&str> = report.violations().iter().map(|v| v.message()).collect();
//! assert_eq!(
//!     messages,
//!     vec![
//!         "username must not be blank",
//!         "password must be at least 8 characters long",
//!         "age must be at least 18",
//!     ],
//! );
//! ```
//!
//! Ready-made rules live in [`rules`]; the predicates they wrap are in
//! [`predicate`] and compose with `and`/`or`/`not` for custom rules. The
//! `demos/` directory walks through each validation strategy.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod context;
pub mod monoid;
pub mod name;
pub mod nonempty;
pub mod predicate;
pub mod result;
pub mod rule;
pub mod rules;
pub mod semigroup;

// Re-exports
pub use context::{
    validate_all, validate_first, validate_lazy, Collector, FailFast, Lazy, ValidationContext,
    ValidationFailure, Violations,
};
pub use monoid::Monoid;
pub use name::{Named, NamedValue};
pub use nonempty::NonEmptyVec;
pub use result::ValidationResult;
pub use rule::{Rule, Violation};
pub use semigroup::Semigroup;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{
        validate_all, validate_first, validate_lazy, Collector, FailFast, Lazy, ValidationContext,
        ValidationFailure,
    };
    pub use crate::monoid::Monoid;
    pub use crate::name::{Named, NamedValue};
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::result::ValidationResult;
    pub use crate::rule::{Rule, Violation};
    pub use crate::rules;
    pub use crate::semigroup::Semigroup;
}
