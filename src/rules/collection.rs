//! Collection rules
//!
//! Size and membership rules for vectors and slices. Rules that interpolate
//! an element into their message need the element type to be `Display`.

use std::fmt::Display;

use crate::predicate::{
    self, And, ContainsAll, ContainsElement, HasLen, HasMaxLen, HasMinLen, IsNotEmpty,
};
use crate::rule::Rule;

/// The collection must not be empty.
pub fn not_empty() -> Rule<IsNotEmpty> {
    Rule::new("must not be empty", predicate::is_not_empty())
}

/// The collection must have exactly `size` items.
///
/// # Example
///
/// ```rust
/// use proviso::{rules, Named};
///
/// let rule = rules::collection::of_size(2);
/// assert!(rule.eval(&vec![1, 2].named("winners")).is_none());
/// assert_eq!(
///     rule.eval(&vec![1].named("winners")).unwrap().message(),
///     "winners must have exactly 2 items",
/// );
/// ```
pub fn of_size(size: usize) -> Rule<HasLen> {
    Rule::new(
        format!("must have exactly {size} items"),
        predicate::has_len(size),
    )
}

/// The collection must have at least `min` items.
pub fn min_size(min: usize) -> Rule<HasMinLen> {
    Rule::new(
        format!("must have at least {min} items"),
        predicate::has_min_len(min),
    )
}

/// The collection must have at most `max` items.
pub fn max_size(max: usize) -> Rule<HasMaxLen> {
    Rule::new(
        format!("must have at most {max} items"),
        predicate::has_max_len(max),
    )
}

/// The collection's size must fall within `min..=max`.
pub fn size_between(min: usize, max: usize) -> Rule<And<HasMinLen, HasMaxLen>> {
    Rule::new(
        format!("must have between {min} and {max} items"),
        And(predicate::has_min_len(min), predicate::has_max_len(max)),
    )
}

/// The collection must contain the given element.
///
/// # Example
///
/// ```rust
/// use proviso::{rules, Named};
///
/// let rule = rules::collection::contains_element("admin");
/// assert!(rule.eval(&vec!["admin", "dev"].named("roles")).is_none());
/// assert_eq!(
///     rule.eval(&vec!["dev"].named("roles")).unwrap().message(),
///     "roles must contain admin",
/// );
/// ```
pub fn contains_element<T>(element: T) -> Rule<ContainsElement<T>>
where
    T: PartialEq + Display + Send + Sync,
{
    let message = format!("must contain {element}");
    Rule::new(message, predicate::contains_element(element))
}

/// The collection must contain every one of the given elements.
pub fn contains_all<T, const N: usize>(elements: [T; N]) -> Rule<ContainsAll<T, N>>
where
    T: PartialEq + Display + Send + Sync,
{
    let listed = elements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let message = format!("must contain all of: {listed}");
    Rule::new(message, predicate::contains_all(elements))
}
