//! Rules: a failure message paired with the predicate that enforces it
//!
//! A [`Rule`] is the unit of validation: it knows how to check a value and
//! what to say when the check fails. Rules are built either directly from a
//! predicate via [`Rule::new`] or through the constructors in
//! [`crate::rules`], which come with sensible default messages.
//!
//! # Examples
//!
//! ## Evaluating a rule against a named value
//!
//! ```
//! use proviso::{Named, rules};
//!
//! let rule = rules::string::not_blank();
//! assert!(rule.eval(&"ada".named("username")).is_none());
//!
//! let violation = rule.eval(&"".named("username")).unwrap();
//! assert_eq!(violation.message(), "username must not be blank");
//! ```
//!
//! ## Overriding the default message
//!
//! ```
//! use proviso::{Named, rules};
//!
//! let rule = rules::string::min_length(8).with_message("is too short for a password");
//! let violation = rule.eval(&"hunter2".named("password")).unwrap();
//! assert_eq!(violation.message(), "password is too short for a password");
//! ```
//!
//! ## Custom rules from closures
//!
//! ```
//! use proviso::{Named, Rule};
//!
//! let even = Rule::new("must be even", |n: &i32| n % 2 == 0);
//! assert!(even.check(&4));
//! assert_eq!(
//!     even.eval(&3.named("count")).unwrap().message(),
//!     "count must be even",
//! );
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::name::NamedValue;
use crate::predicate::Predicate;

/// A single validation failure.
///
/// Violations carry nothing but the finished, human-readable message; by the
/// time one exists, the field name has already been interpolated in.
///
/// # Example
///
/// ```
/// use proviso::Violation;
///
/// let violation = Violation::new("age must be at least 18");
/// assert_eq!(violation.message(), "age must be at least 18");
/// assert_eq!(violation.to_string(), "age must be at least 18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    message: String,
}

impl Violation {
    /// Create a violation with the given message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the violation and return its message.
    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A constraint: a failure message paired with the predicate enforcing it.
///
/// `Rule` is generic over its predicate type, so composed predicates stay
/// concrete and rule evaluation involves no dynamic dispatch. The stored
/// message describes the constraint ("must not be blank"); the name of the
/// offending field is prepended when [`Rule::eval`] produces a [`Violation`].
///
/// # Example
///
/// ```
/// use proviso::{Named, Rule};
/// use proviso::predicate::{any_char, len_min, PredicateExt};
///
/// let rule = Rule::new(
///     "must be at least 3 characters and contain a digit",
///     PredicateExt::<str>::and(len_min(3), any_char(|c| c.is_ascii_digit())),
/// );
///
/// assert!(rule.eval(&"abc1".named("code")).is_none());
/// assert!(rule.eval(&"ab".named("code")).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Rule<P> {
    message: Cow<'static, str>,
    predicate: P,
}

impl<P> Rule<P> {
    /// Create a rule from a constraint message and a predicate.
    pub fn new(message: impl Into<Cow<'static, str>>, predicate: P) -> Self {
        Self {
            message: message.into(),
            predicate,
        }
    }

    /// Replace the constraint message, keeping the predicate.
    ///
    /// The field name is still prepended at evaluation time.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::{Named, rules};
    ///
    /// let rule = rules::ord::at_least(18).with_message("requires an adult");
    /// let violation = rule.eval(&16.named("age")).unwrap();
    /// assert_eq!(violation.message(), "age requires an adult");
    /// ```
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            predicate: self.predicate,
        }
    }

    /// The constraint message reported when the predicate fails.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Split the rule into its message and predicate.
    ///
    /// Used by adapters that rewrap the predicate while keeping the message,
    /// such as [`rules::optional`](crate::rules::optional).
    #[inline]
    pub fn into_parts(self) -> (Cow<'static, str>, P) {
        (self.message, self.predicate)
    }

    /// Check a bare value against this rule's predicate.
    #[inline]
    pub fn check<T: ?Sized>(&self, value: &T) -> bool
    where
        P: Predicate<T>,
    {
        self.predicate.check(value)
    }

    /// Evaluate the rule against a named value.
    ///
    /// Returns `None` when the predicate holds, or a [`Violation`] whose
    /// message interpolates the value's name when it does not.
    pub fn eval<T>(&self, named: &NamedValue<T>) -> Option<Violation>
    where
        P: Predicate<T>,
    {
        if self.predicate.check(named.value()) {
            None
        } else {
            Some(Violation::new(format!("{} {}", named.name(), self.message)))
        }
    }
}
