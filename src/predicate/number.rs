//! Comparison predicates
//!
//! Equality, ordering, and range predicates for any [`PartialOrd`] type.
//! They are most often applied to numbers, but work equally well on dates,
//! characters, or anything else with an ordering.

use super::combinators::Predicate;
use std::cmp::PartialOrd;

/// Predicate for equality.
#[derive(Clone, Copy, Debug)]
pub struct Eq<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Eq<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// Create a predicate that checks for equality.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(eq(200).check(&200));
/// assert!(!eq(200).check(&404));
/// ```
pub fn eq<T: PartialEq + Send + Sync>(value: T) -> Eq<T> {
    Eq(value)
}

/// Predicate for not equal.
#[derive(Clone, Copy, Debug)]
pub struct Ne<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Ne<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value != self.0
    }
}

/// Create a predicate that checks for inequality.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(ne(0).check(&7));
/// assert!(!ne(0).check(&0));
/// ```
pub fn ne<T: PartialEq + Send + Sync>(value: T) -> Ne<T> {
    Ne(value)
}

/// Predicate for greater than.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Create a predicate that checks if value is strictly greater than threshold.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(gt(5).check(&6));
/// assert!(!gt(5).check(&5));
/// assert!(!gt(5).check(&4));
/// ```
pub fn gt<T: PartialOrd + Send + Sync>(value: T) -> Gt<T> {
    Gt(value)
}

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Create a predicate that checks if value is greater than or equal to threshold.
///
/// The threshold itself passes.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(ge(18).check(&21));
/// assert!(ge(18).check(&18));
/// assert!(!ge(18).check(&17));
/// ```
pub fn ge<T: PartialOrd + Send + Sync>(value: T) -> Ge<T> {
    Ge(value)
}

/// Predicate for less than.
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Lt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value < self.0
    }
}

/// Create a predicate that checks if value is strictly less than threshold.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(lt(5).check(&4));
/// assert!(!lt(5).check(&5));
/// assert!(!lt(5).check(&6));
/// ```
pub fn lt<T: PartialOrd + Send + Sync>(value: T) -> Lt<T> {
    Lt(value)
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Create a predicate that checks if value is less than or equal to threshold.
///
/// The threshold itself passes.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// assert!(le(100).check(&99));
/// assert!(le(100).check(&100));
/// assert!(!le(100).check(&101));
/// ```
pub fn le<T: PartialOrd + Send + Sync>(value: T) -> Le<T> {
    Le(value)
}

/// Predicate for value in range (inclusive on both ends).
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks if value is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// let valid_port = between(1024u16, 65535);
/// assert!(valid_port.check(&8080));
/// assert!(valid_port.check(&1024));
/// assert!(!valid_port.check(&80));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

/// Predicate for membership in a fixed set of allowed values.
#[derive(Clone, Copy, Debug)]
pub struct OneOf<T, const N: usize>(pub [T; N]);

impl<T: PartialEq + Send + Sync, const N: usize> Predicate<T> for OneOf<T, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.contains(value)
    }
}

/// Create a predicate that checks if value equals one of the given values.
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// let known_status = one_of([200, 301, 404]);
/// assert!(known_status.check(&404));
/// assert!(!known_status.check(&500));
/// ```
pub fn one_of<T: PartialEq + Send + Sync, const N: usize>(values: [T; N]) -> OneOf<T, N> {
    OneOf(values)
}

/// Create a predicate that checks if value is positive (greater than zero).
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// let p = positive::<i32>();
/// assert!(p.check(&1));
/// assert!(!p.check(&0));
/// assert!(!p.check(&-1));
/// ```
pub fn positive<T>() -> Gt<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    Gt(T::default())
}

/// Create a predicate that checks if value is negative (less than zero).
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// let p = negative::<i32>();
/// assert!(p.check(&-1));
/// assert!(!p.check(&0));
/// assert!(!p.check(&1));
/// ```
pub fn negative<T>() -> Lt<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    Lt(T::default())
}

/// Create a predicate that checks if value is non-negative (greater than or equal to zero).
///
/// # Example
///
/// ```rust
/// use proviso::predicate::*;
///
/// let p = non_negative::<i32>();
/// assert!(p.check(&0));
/// assert!(p.check(&1));
/// assert!(!p.check(&-1));
/// ```
pub fn non_negative<T>() -> Ge<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    Ge(T::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_eq() {
        assert!(eq(5).check(&5));
        assert!(!eq(5).check(&4));
    }

    #[test]
    fn test_ne() {
        let p = ne(5);
        assert!(p.check(&4));
        assert!(p.check(&6));
        assert!(!p.check(&5));
    }

    #[test]
    fn test_gt() {
        assert!(gt(5).check(&6));
        assert!(!gt(5).check(&5));
        assert!(!gt(5).check(&4));
    }

    #[test]
    fn test_ge_boundary_passes() {
        assert!(ge(5).check(&6));
        assert!(ge(5).check(&5));
        assert!(!ge(5).check(&4));
    }

    #[test]
    fn test_lt() {
        assert!(lt(5).check(&4));
        assert!(!lt(5).check(&5));
        assert!(!lt(5).check(&6));
    }

    #[test]
    fn test_le_boundary_passes() {
        assert!(le(5).check(&4));
        assert!(le(5).check(&5));
        assert!(!le(5).check(&6));
    }

    #[test]
    fn test_between_inclusive_on_both_ends() {
        let p = between(0, 100);
        assert!(p.check(&0));
        assert!(p.check(&50));
        assert!(p.check(&100));
        assert!(!p.check(&-1));
        assert!(!p.check(&101));
    }

    #[test]
    fn test_one_of() {
        let p = one_of(["pending", "active", "closed"]);
        assert!(p.check(&"active"));
        assert!(!p.check(&"archived"));
    }

    #[test]
    fn test_positive() {
        let p = positive::<i32>();
        assert!(p.check(&1));
        assert!(!p.check(&0));
        assert!(!p.check(&-1));
    }

    #[test]
    fn test_negative() {
        let p = negative::<i32>();
        assert!(p.check(&-1));
        assert!(!p.check(&0));
        assert!(!p.check(&1));
    }

    #[test]
    fn test_non_negative() {
        let p = non_negative::<i32>();
        assert!(p.check(&0));
        assert!(p.check(&1));
        assert!(!p.check(&-1));
    }

    #[test]
    fn test_combined_range() {
        let p = gt(10).and(lt(20));
        assert!(p.check(&15));
        assert!(!p.check(&10));
        assert!(!p.check(&20));
    }

    #[test]
    fn test_ordering_on_non_numbers() {
        assert!(between('a', 'z').check(&'m'));
        assert!(!between('a', 'z').check(&'A'));

        let p = ge("2024-01-01".to_string());
        assert!(p.check(&"2024-06-15".to_string()));
        assert!(!p.check(&"2023-12-31".to_string()));
    }

    #[test]
    fn test_with_floats() {
        let p = between(0.0_f64, 1.0_f64);
        assert!(p.check(&0.5));
        assert!(p.check(&0.0));
        assert!(p.check(&1.0));
        assert!(!p.check(&1.1));
    }
}
