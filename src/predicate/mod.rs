//! Predicate combinators for composable validation logic
//!
//! A [`Predicate`] is a reusable boolean test over a borrowed value. Rules
//! pair a predicate with a message; this module is the layer below that,
//! where the actual checks live and compose.
//!
//! Predicates combine with logical operators (`and`, `or`, `not`) so complex
//! checks build up from simple, reusable pieces.
//!
//! # Example
//!
//! ```rust
//! use proviso::predicate::*;
//!
//! // Define reusable predicates for String type
//! let valid_len = len_between(3, 20);
//! let chars_ok = all_chars(|c: char| c.is_alphanumeric() || c == '_');
//!
//! // Check individual predicates
//! assert!(valid_len.check(&String::from("john_doe")));
//! assert!(!valid_len.check(&String::from("ab"))); // too short
//! assert!(!chars_ok.check(&String::from("invalid-name"))); // contains hyphen
//! ```
//!
//! # Integration with rules
//!
//! ```rust
//! use proviso::{Named, Rule, predicate::*};
//!
//! let rule = Rule::new("must look like an email", contains("@"));
//! assert!(rule.eval(&"user@example.com".named("email")).is_none());
//!
//! let violation = rule.eval(&"invalid".named("email")).unwrap();
//! assert_eq!(violation.message(), "email must look like an email");
//! ```

mod collection;
mod combinators;
mod number;
mod string;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{
    all_of, any_of, none_of, optional, AllOf, And, AnyOf, NoneOf, Not, Optional, Or,
};

// Re-export string predicates
pub use string::{
    all_chars, any_char, contains, ends_with, is_alphabetic, is_alphanumeric, is_ascii,
    is_lowercase, is_numeric, is_uppercase, len_between, len_eq, len_max, len_min, matches,
    not_blank, not_empty, starts_with, AllChars, AnyChar, Contains, EndsWith, LenBetween, Matches,
    NotBlank, NotEmpty, StartsWith,
};

// Re-export comparison predicates
pub use number::{
    between, eq, ge, gt, le, lt, ne, negative, non_negative, one_of, positive, Between, Eq, Ge,
    Gt, Le, Lt, Ne, OneOf,
};

// Re-export collection predicates
pub use collection::{
    all, any, contains_all, contains_element, has_len, has_max_len, has_min_len, is_empty,
    is_not_empty, All, Any, ContainsAll, ContainsElement, HasLen, HasMaxLen, HasMinLen, IsEmpty,
    IsNotEmpty,
};
