//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and the logical
//! combinators rules are composed from.

/// A composable predicate over values of type T.
///
/// Predicates are the boolean half of a [`Rule`](crate::Rule): they decide
/// whether a value is acceptable, and the rule supplies the message when it
/// is not. Predicates combine with logical operators:
/// - `and`: Both predicates must hold
/// - `or`: Either predicate must hold
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// let valid_percentage = ge(0).and(le(100));
/// assert!(valid_percentage.check(&42));
/// assert!(!valid_percentage.check(&-1));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types, so composed predicates stay
/// stack-allocated and statically dispatched.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// let outside = gt(0).and(lt(100)).not();
/// assert!(outside.check(&-5));
/// assert!(!outside.check(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::predicate::*;
    ///
    /// let p = gt(0).and(lt(100));
    /// assert!(p.check(&50));
    /// assert!(!p.check(&0));
    /// assert!(!p.check(&100));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::predicate::*;
    ///
    /// let p = lt(0).or(gt(100));
    /// assert!(p.check(&-5));
    /// assert!(p.check(&150));
    /// assert!(!p.check(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::predicate::*;
    ///
    /// let p = positive::<i32>().not();
    /// assert!(p.check(&-5));
    /// assert!(p.check(&0));
    /// assert!(!p.check(&5));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must hold.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must hold.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Lifts a predicate over `Option<T>`; absent values pass.
///
/// Used for optional fields: the constraint applies only when a value is
/// present.
#[derive(Clone, Copy, Debug)]
pub struct Optional<P>(pub P);

impl<T, P: Predicate<T>> Predicate<Option<T>> for Optional<P> {
    #[inline]
    fn check(&self, value: &Option<T>) -> bool {
        match value {
            Some(inner) => self.0.check(inner),
            None => true,
        }
    }
}

/// Create a predicate over `Option<T>` that applies only to present values.
///
/// `None` always passes; `Some(v)` passes when the inner predicate accepts
/// `v`.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// let p = optional(ge(18));
/// assert!(p.check(&None));
/// assert!(p.check(&Some(21)));
/// assert!(!p.check(&Some(16)));
/// ```
pub fn optional<P>(predicate: P) -> Optional<P> {
    Optional(predicate)
}

/// Check if all predicates are satisfied (const generic, zero-allocation).
///
/// Uses a fixed-size array to avoid heap allocation.
/// Note: all_of requires homogeneous predicate types.
/// For mixed predicates, use `.and()` chaining instead.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate that checks if all given predicates are satisfied.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// let all_bounds = all_of([gt(0), gt(-10), gt(-100)]);
/// assert!(all_bounds.check(&50));
/// assert!(!all_bounds.check(&-50));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// Check if any predicate is satisfied (const generic, zero-allocation).
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AnyOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that checks if any given predicate is satisfied.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// let allowed_port = any_of([eq(80), eq(443), eq(8080)]);
/// assert!(allowed_port.check(&443));
/// assert!(!allowed_port.check(&22));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// Check if no predicates are satisfied (const generic, zero-allocation).
///
/// Equivalent to `not(any_of(...))`.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for NoneOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that checks if no given predicates are satisfied.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// let not_reserved = none_of([eq(0), eq(1)]);
/// assert!(not_reserved.check(&42));
/// assert!(!not_reserved.check(&0));
/// ```
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}
