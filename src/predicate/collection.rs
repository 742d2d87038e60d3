//! Collection predicates
//!
//! This module provides common predicates for collection validation. Each
//! predicate is implemented for `Vec<T>`, `[T]`, and `&[T]`, so owned vectors
//! and borrowed slices check the same way.

use super::combinators::Predicate;

// Each collection predicate implements `Predicate<[T]>` by hand; this derives
// the `Vec<T>` and `&[T]` impls from it. The element identifier is passed in
// so it names the same parameter as the generics list.
macro_rules! impl_vec_and_ref {
    ([$($gen:tt)*] $elem:ident, $ty:ty) => {
        impl<$($gen)*> Predicate<Vec<$elem>> for $ty {
            #[inline]
            fn check(&self, value: &Vec<$elem>) -> bool {
                Predicate::<[$elem]>::check(self, value)
            }
        }

        impl<'a, $($gen)*> Predicate<&'a [$elem]> for $ty {
            #[inline]
            fn check(&self, value: &&'a [$elem]) -> bool {
                Predicate::<[$elem]>::check(self, value)
            }
        }
    };
}

/// Predicate that checks if a collection is empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmpty;

impl<T> Predicate<[T]> for IsEmpty {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.is_empty()
    }
}

impl_vec_and_ref!([T] T, IsEmpty);

/// Create a predicate that checks if a collection is empty.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(is_empty().check(&Vec::<i32>::new()));
/// assert!(!is_empty().check(&vec![1, 2, 3]));
/// ```
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Predicate that checks if a collection is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNotEmpty;

impl<T> Predicate<[T]> for IsNotEmpty {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        !value.is_empty()
    }
}

impl_vec_and_ref!([T] T, IsNotEmpty);

/// Create a predicate that checks if a collection is not empty.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(is_not_empty().check(&vec![1, 2, 3]));
/// assert!(!is_not_empty().check(&Vec::<i32>::new()));
/// ```
pub fn is_not_empty() -> IsNotEmpty {
    IsNotEmpty
}

/// Predicate that checks collection length equals expected.
#[derive(Clone, Copy, Debug)]
pub struct HasLen {
    expected: usize,
}

impl<T> Predicate<[T]> for HasLen {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.len() == self.expected
    }
}

impl_vec_and_ref!([T] T, HasLen);

/// Create a predicate that checks if collection has exact length.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(has_len(3).check(&vec![1, 2, 3]));
/// assert!(!has_len(3).check(&vec![1, 2]));
/// ```
pub fn has_len(expected: usize) -> HasLen {
    HasLen { expected }
}

/// Predicate that checks minimum collection length.
#[derive(Clone, Copy, Debug)]
pub struct HasMinLen {
    min: usize,
}

impl<T> Predicate<[T]> for HasMinLen {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.len() >= self.min
    }
}

impl_vec_and_ref!([T] T, HasMinLen);

/// Create a predicate that checks if collection has at least min elements.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(has_min_len(2).check(&vec![1, 2, 3]));
/// assert!(has_min_len(2).check(&vec![1, 2]));
/// assert!(!has_min_len(2).check(&vec![1]));
/// ```
pub fn has_min_len(min: usize) -> HasMinLen {
    HasMinLen { min }
}

/// Predicate that checks maximum collection length.
#[derive(Clone, Copy, Debug)]
pub struct HasMaxLen {
    max: usize,
}

impl<T> Predicate<[T]> for HasMaxLen {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.len() <= self.max
    }
}

impl_vec_and_ref!([T] T, HasMaxLen);

/// Create a predicate that checks if collection has at most max elements.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(has_max_len(3).check(&vec![1, 2]));
/// assert!(has_max_len(3).check(&vec![1, 2, 3]));
/// assert!(!has_max_len(3).check(&vec![1, 2, 3, 4]));
/// ```
pub fn has_max_len(max: usize) -> HasMaxLen {
    HasMaxLen { max }
}

/// Predicate that checks if all elements satisfy a predicate.
#[derive(Clone, Copy, Debug)]
pub struct All<P>(pub P);

impl<T, P: Predicate<T>> Predicate<[T]> for All<P> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.iter().all(|item| self.0.check(item))
    }
}

impl_vec_and_ref!([T, P: Predicate<T>] T, All<P>);

/// Create a predicate that checks if all elements satisfy a condition.
///
/// An empty collection passes.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(all(positive::<i32>()).check(&vec![1, 2, 3]));
/// assert!(!all(positive::<i32>()).check(&vec![1, -2, 3]));
/// ```
pub fn all<P>(predicate: P) -> All<P> {
    All(predicate)
}

/// Predicate that checks if any element satisfies a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Any<P>(pub P);

impl<T, P: Predicate<T>> Predicate<[T]> for Any<P> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.iter().any(|item| self.0.check(item))
    }
}

impl_vec_and_ref!([T, P: Predicate<T>] T, Any<P>);

/// Create a predicate that checks if any element satisfies a condition.
///
/// An empty collection fails.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(any(eq(5)).check(&vec![1, 5, 10]));
/// assert!(!any(eq(5)).check(&vec![1, 2, 3]));
/// ```
pub fn any<P>(predicate: P) -> Any<P> {
    Any(predicate)
}

/// Predicate that checks if collection contains a specific element.
#[derive(Clone, Copy, Debug)]
pub struct ContainsElement<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<[T]> for ContainsElement<T> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.contains(&self.0)
    }
}

impl_vec_and_ref!([T: PartialEq + Send + Sync] T, ContainsElement<T>);

/// Create a predicate that checks if collection contains a specific element.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(contains_element(5).check(&vec![1, 5, 10]));
/// assert!(!contains_element(5).check(&vec![1, 2, 3]));
/// ```
pub fn contains_element<T: PartialEq + Send + Sync>(element: T) -> ContainsElement<T> {
    ContainsElement(element)
}

/// Predicate that checks if collection contains every one of a set of elements.
#[derive(Clone, Copy, Debug)]
pub struct ContainsAll<T, const N: usize>(pub [T; N]);

impl<T: PartialEq + Send + Sync, const N: usize> Predicate<[T]> for ContainsAll<T, N> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        self.0.iter().all(|needle| value.contains(needle))
    }
}

impl_vec_and_ref!([T: PartialEq + Send + Sync, const N: usize] T, ContainsAll<T, N>);

/// Create a predicate that checks if collection contains all given elements.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// let required = contains_all(["read", "write"]);
/// assert!(required.check(&vec!["read", "write", "admin"]));
/// assert!(!required.check(&vec!["read"]));
/// ```
pub fn contains_all<T: PartialEq + Send + Sync, const N: usize>(elements: [T; N]) -> ContainsAll<T, N> {
    ContainsAll(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{eq, not_blank, positive};

    #[test]
    fn test_is_empty() {
        assert!(is_empty().check(&Vec::<i32>::new()));
        assert!(!is_empty().check(&vec![1]));
    }

    #[test]
    fn test_is_empty_slice() {
        let empty: &[i32] = &[];
        let non_empty: &[i32] = &[1, 2, 3];
        assert!(is_empty().check(empty));
        assert!(!is_empty().check(non_empty));
    }

    #[test]
    fn test_is_not_empty() {
        assert!(is_not_empty().check(&vec![1]));
        assert!(!is_not_empty().check(&Vec::<i32>::new()));
    }

    #[test]
    fn test_has_len() {
        assert!(has_len(3).check(&vec![1, 2, 3]));
        assert!(!has_len(3).check(&vec![1, 2]));
        assert!(!has_len(3).check(&vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_has_min_len() {
        assert!(has_min_len(2).check(&vec![1, 2, 3]));
        assert!(has_min_len(2).check(&vec![1, 2]));
        assert!(!has_min_len(2).check(&vec![1]));
    }

    #[test]
    fn test_has_max_len() {
        assert!(has_max_len(3).check(&vec![1, 2]));
        assert!(has_max_len(3).check(&vec![1, 2, 3]));
        assert!(!has_max_len(3).check(&vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_all() {
        assert!(all(positive::<i32>()).check(&vec![1, 2, 3]));
        assert!(!all(positive::<i32>()).check(&vec![1, -2, 3]));
        assert!(all(positive::<i32>()).check(&Vec::<i32>::new())); // vacuously true
    }

    #[test]
    fn test_all_with_string_elements() {
        let no_blanks = all(not_blank());
        assert!(no_blanks.check(&vec!["alpha".to_string(), "beta".to_string()]));
        assert!(!no_blanks.check(&vec!["alpha".to_string(), "  ".to_string()]));
    }

    #[test]
    fn test_any() {
        assert!(any(eq(5)).check(&vec![1, 5, 10]));
        assert!(!any(eq(5)).check(&vec![1, 2, 3]));
        assert!(!any(eq(5)).check(&Vec::<i32>::new())); // empty has no matches
    }

    #[test]
    fn test_contains_element() {
        assert!(contains_element(5).check(&vec![1, 5, 10]));
        assert!(!contains_element(5).check(&vec![1, 2, 3]));
    }

    #[test]
    fn test_contains_all() {
        let p = contains_all([1, 2]);
        assert!(p.check(&vec![3, 2, 1]));
        assert!(!p.check(&vec![1, 3]));
        assert!(contains_all::<i32, 0>([]).check(&vec![9]));
    }

    #[test]
    fn test_borrowed_slice_target() {
        // Predicates also apply to slices held behind another reference,
        // which is how named values of type &[T] are checked.
        let value: &[i32] = &[1, 5, 10];
        assert!(Predicate::<&[i32]>::check(&is_not_empty(), &value));
        assert!(Predicate::<&[i32]>::check(&contains_element(5), &value));
    }
}
