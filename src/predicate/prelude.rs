//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use proviso::predicate::prelude::*;
//!
//! let valid_age = ge(0).and(le(150));
//! assert!(valid_age.check(&25));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, any_of, none_of, optional, And, Not, Or};

// String predicates
pub use super::string::{
    all_chars, any_char, contains, ends_with, is_alphabetic, is_alphanumeric, is_ascii,
    is_lowercase, is_numeric, is_uppercase, len_between, len_eq, len_max, len_min, matches,
    not_blank, not_empty, starts_with,
};

// Comparison predicates
pub use super::number::{
    between, eq, ge, gt, le, lt, ne, negative, non_negative, one_of, positive,
};

// Collection predicates
pub use super::collection::{
    all, any, contains_all, contains_element, has_len, has_max_len, has_min_len, is_empty,
    is_not_empty,
};
