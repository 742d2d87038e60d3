//! Monoid trait for types with identity elements
//!
//! A `Monoid` extends `Semigroup` by adding an identity element. For
//! validation outcomes the identity is `Valid`: folding any number of results
//! together starts from "no violations yet".
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Monoid, it must satisfy:
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Right Identity**:
//!    ```text
//!    a.combine(M::empty()) == a
//!    ```
//! 3. **Left Identity**:
//!    ```text
//!    M::empty().combine(a) == a
//!    ```
//!
//! # Examples
//!
//! ```
//! use proviso::{Monoid, Semigroup};
//!
//! let v1 = vec![1, 2, 3];
//! let empty: Vec<i32> = Monoid::empty();
//! assert_eq!(v1.clone().combine(empty.clone()), v1);
//! assert_eq!(empty.combine(v1.clone()), v1);
//! ```
//!
//! # Folding Validation Outcomes
//!
//! ```
//! use proviso::monoid::combine_all;
//! use proviso::{ValidationResult, Violation};
//!
//! let results = vec![
//!     ValidationResult::valid(),
//!     ValidationResult::from_violation(Violation::new("name must not be blank")),
//!     ValidationResult::valid(),
//! ];
//!
//! let merged = combine_all(results);
//! assert_eq!(merged.violations().len(), 1);
//! ```

use crate::semigroup::Semigroup;

/// A `Monoid` is a `Semigroup` with an identity element.
///
/// # Laws
///
/// For any value `a` of type `M` where `M: Monoid`:
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
///
/// Combined with `Semigroup` associativity:
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))  (associativity)
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    ///
    /// Satisfies: `a.combine(Self::empty()) == a` and `Self::empty().combine(a) == a`
    fn empty() -> Self;
}

// Vec monoid - empty vector is identity
impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

// String monoid - empty string is identity
impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

// Option monoid - None is identity (lifts inner semigroup)
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// Fold an iterator using the Monoid instance, starting with `empty()`.
///
/// This is more convenient than `Iterator::fold` when working with monoids
/// because the identity element is provided by the type.
///
/// # Example
///
/// ```
/// use proviso::monoid::combine_all;
///
/// let vecs = vec![vec![1, 2], vec![3, 4], vec![5]];
/// let result: Vec<i32> = combine_all(vecs);
/// assert_eq!(result, vec![1, 2, 3, 4, 5]);
/// ```
pub fn combine_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_right_identity() {
        let v = vec![1, 2, 3];
        let empty: Vec<i32> = Monoid::empty();
        assert_eq!(v.clone().combine(empty), v);
    }

    #[test]
    fn test_vec_left_identity() {
        let v = vec![1, 2, 3];
        let empty: Vec<i32> = Monoid::empty();
        assert_eq!(empty.combine(v.clone()), v);
    }

    #[test]
    fn test_string_identities() {
        let s = "hello".to_string();
        let empty: String = Monoid::empty();
        assert_eq!(s.clone().combine(empty.clone()), s);
        assert_eq!(empty.combine(s.clone()), s);
    }

    #[test]
    fn test_option_identities() {
        let v = Some(vec![1, 2, 3]);
        let empty: Option<Vec<i32>> = Monoid::empty();
        assert_eq!(v.clone().combine(empty.clone()), v);
        assert_eq!(empty.combine(v.clone()), v);
    }

    #[test]
    fn test_combine_all_vec() {
        let vecs = vec![vec![1], vec![2, 3], vec![4]];
        let result = combine_all(vecs);
        assert_eq!(result, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_combine_all_empty_iter() {
        let vecs: Vec<Vec<i32>> = vec![];
        let result = combine_all(vecs);
        assert_eq!(result, vec![]);
    }

    #[test]
    fn test_combine_all_string() {
        let strings = vec!["Hello".to_string(), " ".to_string(), "World".to_string()];
        let result: String = combine_all(strings);
        assert_eq!(result, "Hello World");
    }

    // Property-based tests
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_vec_right_identity(v: Vec<i32>) {
                let empty: Vec<i32> = Monoid::empty();
                prop_assert_eq!(v.clone().combine(empty), v);
            }

            #[test]
            fn prop_vec_left_identity(v: Vec<i32>) {
                let empty: Vec<i32> = Monoid::empty();
                prop_assert_eq!(empty.combine(v.clone()), v);
            }

            #[test]
            fn prop_vec_associativity(a: Vec<i32>, b: Vec<i32>, c: Vec<i32>) {
                let left = a.clone().combine(b.clone()).combine(c.clone());
                let right = a.combine(b.combine(c));
                prop_assert_eq!(left, right);
            }

            #[test]
            fn prop_string_associativity(a: String, b: String, c: String) {
                let left = a.clone().combine(b.clone()).combine(c.clone());
                let right = a.combine(b.combine(c));
                prop_assert_eq!(left, right);
            }

            #[test]
            fn prop_option_associativity(
                a: Option<Vec<i32>>,
                b: Option<Vec<i32>>,
                c: Option<Vec<i32>>
            ) {
                let left = a.clone().combine(b.clone()).combine(c.clone());
                let right = a.combine(b.combine(c));
                prop_assert_eq!(left, right);
            }

            #[test]
            fn prop_combine_all_matches_flatten(vecs: Vec<Vec<i32>>) {
                let result = combine_all(vecs.clone());
                let expected: Vec<i32> = vecs.into_iter().flatten().collect();
                prop_assert_eq!(result, expected);
            }
        }
    }
}
