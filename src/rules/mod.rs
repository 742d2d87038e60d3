//! Ready-made rules
//!
//! Each function here builds a [`Rule`](crate::Rule) from parameters: a
//! concrete predicate paired with a message template that interpolates those
//! parameters. The field name is added later, when
//! [`Rule::eval`](crate::Rule::eval) fails against a named value.
//!
//! Rules are grouped by the shape of the value they check:
//!
//! - [`string`]: blankness, length, affixes, patterns
//! - [`collection`]: size and membership
//! - [`ord`]: equality, ordering, ranges
//!
//! # Example
//!
//! ```rust
//! use proviso::{rules, Named};
//!
//! let rule = rules::string::min_length(3);
//! assert!(rule.eval(&"ada".named("username")).is_none());
//! assert_eq!(
//!     rule.eval(&"ab".named("username")).unwrap().message(),
//!     "username must be at least 3 characters long",
//! );
//! ```

pub mod collection;
pub mod ord;
pub mod string;

use crate::predicate::Optional;
use crate::rule::Rule;

/// Lift a rule over `Option<T>`, letting absent values pass.
///
/// The message is unchanged; only a present value that fails the inner
/// predicate produces a violation.
///
/// # Example
///
/// ```rust
/// use proviso::{rules, Named};
///
/// let rule = rules::optional(rules::string::min_length(3));
///
/// assert!(rule.eval(&None::<&str>.named("nickname")).is_none());
/// assert!(rule.eval(&Some("ada").named("nickname")).is_none());
/// assert_eq!(
///     rule.eval(&Some("x").named("nickname")).unwrap().message(),
///     "nickname must be at least 3 characters long",
/// );
/// ```
pub fn optional<P>(rule: Rule<P>) -> Rule<Optional<P>> {
    let (message, predicate) = rule.into_parts();
    Rule::new(message, Optional(predicate))
}
