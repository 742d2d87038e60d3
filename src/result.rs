//! Validation outcomes
//!
//! This module provides [`ValidationResult`], the terminal value of every
//! validation run. A result is either `Valid` or `Invalid` with at least one
//! [`Violation`]; the "at least one" part is enforced structurally by
//! [`NonEmptyVec`], so "invalid with an empty violation list" cannot be
//! constructed.
//!
//! # Examples
//!
//! ## Building results
//!
//! ```
//! use proviso::{ValidationResult, Violation};
//!
//! let ok = ValidationResult::valid();
//! assert!(ok.is_valid());
//!
//! let bad = ValidationResult::from_violation(Violation::new("name must not be blank"));
//! assert!(bad.is_invalid());
//! assert_eq!(bad.violations().len(), 1);
//!
//! // An empty violation list means the run was valid
//! let from_empty = ValidationResult::from_violations(Vec::new());
//! assert!(from_empty.is_valid());
//! ```
//!
//! ## Branching on the outcome
//!
//! ```
//! use proviso::{ValidationResult, Violation};
//!
//! let result = ValidationResult::from_violation(Violation::new("age must be at least 18"));
//!
//! let summary = result.fold(
//!     || "all good".to_string(),
//!     |violations| format!("{} problem(s)", violations.len()),
//! );
//! assert_eq!(summary, "1 problem(s)");
//! ```
//!
//! ## Combining results
//!
//! ```
//! use proviso::{Semigroup, ValidationResult, Violation};
//!
//! let a = ValidationResult::from_violation(Violation::new("name must not be blank"));
//! let b = ValidationResult::from_violation(Violation::new("email must contain \"@\""));
//!
//! let combined = a.combine(b);
//! assert_eq!(combined.violations().len(), 2);
//! ```

use std::fmt;

use crate::monoid::Monoid;
use crate::nonempty::NonEmptyVec;
use crate::rule::Violation;
use crate::semigroup::Semigroup;

/// The outcome of running validation checks.
///
/// Valid if and only if no violations were recorded. `Invalid` holds its
/// violations in the order the failing checks were declared.
///
/// # Example
///
/// ```
/// use proviso::{Named, rules, validate_all};
///
/// let result = validate_all(|v| {
///     v.must(&"".named("name"), rules::string::not_blank());
///     v.must(&16.named("age"), rules::ord::at_least(18));
/// });
///
/// assert!(result.is_invalid());
/// assert_eq!(result.violations()[0].message(), "name must not be blank");
/// assert_eq!(result.violations()[1].message(), "age must be at least 18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationResult {
    /// Every check passed.
    Valid,
    /// At least one check failed.
    Invalid(NonEmptyVec<Violation>),
}

impl ValidationResult {
    /// The valid outcome: no violations.
    #[inline]
    pub fn valid() -> Self {
        ValidationResult::Valid
    }

    /// An invalid outcome holding the given violations.
    #[inline]
    pub fn invalid(violations: NonEmptyVec<Violation>) -> Self {
        ValidationResult::Invalid(violations)
    }

    /// An invalid outcome holding a single violation.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::{ValidationResult, Violation};
    ///
    /// let result = ValidationResult::from_violation(Violation::new("id must be positive"));
    /// assert_eq!(result.violations().len(), 1);
    /// ```
    pub fn from_violation(violation: Violation) -> Self {
        ValidationResult::Invalid(NonEmptyVec::singleton(violation))
    }

    /// Build a result from a list of violations.
    ///
    /// An empty list produces `Valid`; this is the only way results are
    /// assembled, which keeps "valid" and "no violations" the same thing.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::{ValidationResult, Violation};
    ///
    /// assert!(ValidationResult::from_violations(vec![]).is_valid());
    ///
    /// let result = ValidationResult::from_violations(vec![
    ///     Violation::new("name must not be blank"),
    /// ]);
    /// assert!(result.is_invalid());
    /// ```
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        match NonEmptyVec::from_vec(violations) {
            Some(violations) => ValidationResult::Invalid(violations),
            None => ValidationResult::Valid,
        }
    }

    /// Check whether every check passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Check whether any check failed.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidationResult::Invalid(_))
    }

    /// The recorded violations, in declaration order.
    ///
    /// Empty exactly when the result is valid.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(violations) => violations.as_slice(),
        }
    }

    /// Consume the result and return its violations.
    pub fn into_violations(self) -> Vec<Violation> {
        match self {
            ValidationResult::Valid => Vec::new(),
            ValidationResult::Invalid(violations) => violations.into_vec(),
        }
    }

    /// Run a callback if the result is valid, then return the result.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::ValidationResult;
    ///
    /// let mut saved = false;
    /// ValidationResult::valid().on_valid(|| saved = true);
    /// assert!(saved);
    /// ```
    pub fn on_valid<F: FnOnce()>(self, f: F) -> Self {
        if self.is_valid() {
            f();
        }
        self
    }

    /// Run a callback with the violations if the result is invalid, then
    /// return the result.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::{ValidationResult, Violation};
    ///
    /// let mut seen = 0;
    /// ValidationResult::from_violation(Violation::new("name must not be blank"))
    ///     .on_invalid(|violations| seen = violations.len());
    /// assert_eq!(seen, 1);
    /// ```
    pub fn on_invalid<F: FnOnce(&[Violation])>(self, f: F) -> Self {
        if let ValidationResult::Invalid(violations) = &self {
            f(violations.as_slice());
        }
        self
    }

    /// Collapse the result into a single value.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::ValidationResult;
    ///
    /// let ok = ValidationResult::valid().fold(|| true, |_| false);
    /// assert!(ok);
    /// ```
    pub fn fold<R>(
        self,
        on_valid: impl FnOnce() -> R,
        on_invalid: impl FnOnce(NonEmptyVec<Violation>) -> R,
    ) -> R {
        match self {
            ValidationResult::Valid => on_valid(),
            ValidationResult::Invalid(violations) => on_invalid(violations),
        }
    }

    /// Convert into a `Result`, for `?`-style propagation.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::{ValidationResult, Violation};
    ///
    /// assert!(ValidationResult::valid().into_result().is_ok());
    ///
    /// let err = ValidationResult::from_violation(Violation::new("port must be positive"))
    ///     .into_result()
    ///     .unwrap_err();
    /// assert_eq!(err.first().message(), "port must be positive");
    /// ```
    pub fn into_result(self) -> Result<(), NonEmptyVec<Violation>> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(violations) => Err(violations),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        ValidationResult::Valid
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResult::Valid => f.write_str("valid"),
            ValidationResult::Invalid(violations) => {
                f.write_str("invalid: ")?;
                for (i, violation) in violations.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<Violation> for ValidationResult {
    fn from(violation: Violation) -> Self {
        ValidationResult::from_violation(violation)
    }
}

// Valid is absorbed; violation lists concatenate in order
impl Semigroup for ValidationResult {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (ValidationResult::Valid, other) => other,
            (this, ValidationResult::Valid) => this,
            (ValidationResult::Invalid(a), ValidationResult::Invalid(b)) => {
                ValidationResult::Invalid(a.combine(b))
            }
        }
    }
}

impl Monoid for ValidationResult {
    fn empty() -> Self {
        ValidationResult::Valid
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ValidationResult::Valid, Semigroup::combine)
    }
}

impl FromIterator<Violation> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        ValidationResult::from_violations(iter.into_iter().collect())
    }
}
