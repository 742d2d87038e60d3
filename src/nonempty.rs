//! Non-empty vector type for type-safe collections
//!
//! This module provides the `NonEmptyVec<T>` type, which is a vector guaranteed to contain
//! at least one element. `ValidationResult::Invalid` is built on it: an invalid result
//! always holds at least one violation, and the type system enforces that instead of a
//! runtime check.
//!
//! # Examples
//!
//! ```
//! use proviso::NonEmptyVec;
//!
//! let nev = NonEmptyVec::new(1, vec![2, 3, 4]);
//! assert_eq!(nev.first(), &1);
//! assert_eq!(nev.last(), &4);
//! assert_eq!(nev.len(), 4);
//! ```
//!
//! # Use Cases
//!
//! - Validation failures: an invalid result always carries at least one violation
//! - Aggregations: operations like `first()` and `last()` require non-empty data
//! - Type safety: prevent `None`/`panic!` in operations that need elements

use crate::semigroup::Semigroup;

/// A vector guaranteed to contain at least one element.
///
/// This makes accessors like [`first`](NonEmptyVec::first) and
/// [`last`](NonEmptyVec::last) total: they return `&T` directly, with no
/// `Option` to unwrap.
///
/// # Example
///
/// ```
/// use proviso::NonEmptyVec;
///
/// let nev = NonEmptyVec::singleton("first");
/// assert_eq!(nev.first(), &"first");
/// assert_eq!(nev.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    // Invariant: never empty. Every constructor and mutator preserves this.
    items: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a first element and the rest.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// assert_eq!(nev.len(), 3);
    /// ```
    pub fn new(first: T, rest: Vec<T>) -> Self {
        let mut items = Vec::with_capacity(1 + rest.len());
        items.push(first);
        items.extend(rest);
        Self { items }
    }

    /// Create a non-empty vector holding a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton(42);
    /// assert_eq!(nev.len(), 1);
    /// assert_eq!(nev.first(), &42);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self { items: vec![value] }
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::from_vec(vec![1, 2, 3]).unwrap();
    /// assert_eq!(nev.len(), 3);
    ///
    /// let empty = NonEmptyVec::from_vec(Vec::<i32>::new());
    /// assert!(empty.is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            Some(Self { items: vec })
        }
    }

    /// Get the first element (always succeeds).
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// assert_eq!(nev.first(), &1);
    /// ```
    pub fn first(&self) -> &T {
        &self.items[0]
    }

    /// Get the last element (always succeeds).
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// assert_eq!(nev.last(), &3);
    ///
    /// let single = NonEmptyVec::singleton(42);
    /// assert_eq!(single.last(), &42);
    /// ```
    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    /// Get the number of elements.
    ///
    /// Always >= 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the vector is empty.
    ///
    /// Always returns `false`; this method exists to satisfy clippy's
    /// `len_without_is_empty` lint.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Push an element to the end.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::NonEmptyVec;
    ///
    /// let mut nev = NonEmptyVec::singleton(1);
    /// nev.push(2);
    /// nev.push(3);
    /// assert_eq!(nev.len(), 3);
    /// ```
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// View the elements as a slice.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// assert_eq!(nev.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over all elements.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// let sum: i32 = nev.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Convert to a regular `Vec`.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// assert_eq!(nev.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Map a function over all elements.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// let doubled = nev.map(|x| x * 2);
    /// assert_eq!(doubled.into_vec(), vec![2, 4, 6]);
    /// ```
    pub fn map<U, F>(self, f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyVec {
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

// Semigroup: concatenation
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.items.extend(other.items);
        self
    }
}

impl<T> Extend<T> for NonEmptyVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// Note: FromIterator cannot be implemented because the source iterator may be
// empty. Collect into a Vec and use `NonEmptyVec::from_vec` instead.

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(nev: NonEmptyVec<T>) -> Self {
        nev.into_vec()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyVec<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmptyVec<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmptyVec::from_vec(items)
            .ok_or_else(|| serde::de::Error::custom("NonEmptyVec requires at least one element"))
    }
}
