//! Ordering rules
//!
//! Equality, comparison, and range rules for any ordered type. The threshold
//! is interpolated into the message, so the type must be `Display`.
//!
//! Boundary semantics follow the names: `at_least`/`at_most` are inclusive,
//! `greater_than`/`less_than` are strict, `between` includes both ends.

use std::fmt::Display;

use crate::predicate::{self, Between, Eq, Ge, Gt, Le, Lt, Ne};
use crate::rule::Rule;

/// The value must equal the given value.
pub fn equal_to<T>(value: T) -> Rule<Eq<T>>
where
    T: PartialEq + Display + Send + Sync,
{
    let message = format!("must equal {value}");
    Rule::new(message, predicate::eq(value))
}

/// The value must not equal the given value.
pub fn not_equal_to<T>(value: T) -> Rule<Ne<T>>
where
    T: PartialEq + Display + Send + Sync,
{
    let message = format!("must not equal {value}");
    Rule::new(message, predicate::ne(value))
}

/// The value must be strictly greater than the threshold.
pub fn greater_than<T>(threshold: T) -> Rule<Gt<T>>
where
    T: PartialOrd + Display + Send + Sync,
{
    let message = format!("must be greater than {threshold}");
    Rule::new(message, predicate::gt(threshold))
}

/// The value must be at least the threshold (inclusive).
///
/// # Example
///
/// ```rust
/// use proviso::{rules, Named};
///
/// let rule = rules::ord::at_least(18);
/// assert!(rule.eval(&18.named("age")).is_none());
/// assert_eq!(
///     rule.eval(&17.named("age")).unwrap().message(),
///     "age must be at least 18",
/// );
/// ```
pub fn at_least<T>(threshold: T) -> Rule<Ge<T>>
where
    T: PartialOrd + Display + Send + Sync,
{
    let message = format!("must be at least {threshold}");
    Rule::new(message, predicate::ge(threshold))
}

/// The value must be strictly less than the threshold.
pub fn less_than<T>(threshold: T) -> Rule<Lt<T>>
where
    T: PartialOrd + Display + Send + Sync,
{
    let message = format!("must be less than {threshold}");
    Rule::new(message, predicate::lt(threshold))
}

/// The value must be at most the threshold (inclusive).
pub fn at_most<T>(threshold: T) -> Rule<Le<T>>
where
    T: PartialOrd + Display + Send + Sync,
{
    let message = format!("must be at most {threshold}");
    Rule::new(message, predicate::le(threshold))
}

/// The value must fall within `min..=max`.
///
/// # Example
///
/// ```rust
/// use proviso::{rules, Named};
///
/// let rule = rules::ord::between(1024u16, 49151);
/// assert!(rule.eval(&8080u16.named("port")).is_none());
/// assert_eq!(
///     rule.eval(&80u16.named("port")).unwrap().message(),
///     "port must be between 1024 and 49151",
/// );
/// ```
pub fn between<T>(min: T, max: T) -> Rule<Between<T>>
where
    T: PartialOrd + Display + Send + Sync,
{
    let message = format!("must be between {min} and {max}");
    Rule::new(message, predicate::between(min, max))
}
