//! Semigroup trait for associative operations
//!
//! A Semigroup is a type with an associative binary operation. It is the
//! backbone of violation accumulation: combining two validation outcomes
//! concatenates their violation lists instead of discarding one of them.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use proviso::Semigroup;
//!
//! // Combining vectors
//! let v1 = vec![1, 2, 3];
//! let v2 = vec![4, 5, 6];
//! assert_eq!(v1.combine(v2), vec![1, 2, 3, 4, 5, 6]);
//!
//! // Combining strings
//! let s1 = "Hello, ".to_string();
//! let s2 = "World!".to_string();
//! assert_eq!(s1.combine(s2), "Hello, World!");
//! ```
//!
//! # Validation Outcomes
//!
//! [`ValidationResult`](crate::ValidationResult) is a Semigroup: `Valid` is
//! absorbed and violation lists concatenate in order.
//!
//! ```
//! use proviso::{Semigroup, ValidationResult, Violation};
//!
//! let a = ValidationResult::from_violation(Violation::new("name must not be blank"));
//! let b = ValidationResult::valid();
//! let c = ValidationResult::from_violation(Violation::new("age must be at least 18"));
//!
//! let combined = a.combine(b).combine(c);
//! assert_eq!(combined.violations().len(), 2);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Note on Ownership
///
/// The `combine` method takes `self` by value, not by reference. If you need to
/// preserve the original values, you must clone them before combining.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use proviso::Semigroup;
    ///
    /// let v1 = vec![1, 2];
    /// let v2 = vec![3, 4];
    /// let result = v1.combine(v2);
    /// assert_eq!(result, vec![1, 2, 3, 4]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

// Implementation for Vec<T>
impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

// Implementation for String
impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// Option lifts the inner semigroup; None is absorbed
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup() {
        let v1 = vec![1, 2, 3];
        let v2 = vec![4, 5, 6];
        assert_eq!(v1.combine(v2), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_vec_semigroup_empty() {
        let v1: Vec<i32> = vec![];
        let v2 = vec![1, 2, 3];
        assert_eq!(v1.combine(v2), vec![1, 2, 3]);
    }

    #[test]
    fn test_string_semigroup() {
        let s1 = "Hello, ".to_string();
        let s2 = "World!".to_string();
        assert_eq!(s1.combine(s2), "Hello, World!");
    }

    #[test]
    fn test_option_both_some() {
        let a = Some(vec![1, 2]);
        let b = Some(vec![3]);
        assert_eq!(a.combine(b), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_option_with_none() {
        let a: Option<Vec<i32>> = None;
        let b = Some(vec![1]);
        assert_eq!(a.combine(b.clone()), Some(vec![1]));
        assert_eq!(b.combine(None), Some(vec![1]));
    }

    // Associativity tests
    #[test]
    fn test_vec_associativity() {
        let a = vec![1, 2];
        let b = vec![3, 4];
        let c = vec![5, 6];

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }

    #[test]
    fn test_string_associativity() {
        let a = "hello".to_string();
        let b = " ".to_string();
        let c = "world".to_string();

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }

    #[test]
    fn test_vec_multiple_combines() {
        let result = vec![1].combine(vec![2]).combine(vec![3]).combine(vec![4]);
        assert_eq!(result, vec![1, 2, 3, 4]);
    }
}
