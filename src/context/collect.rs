//! Collect-everything validation
//!
//! [`Collector`] runs every check and records every violation, in the order
//! the checks were written. This is the policy for user-facing forms, where
//! the caller wants the complete list of problems in one pass.

use crate::name::NamedValue;
use crate::predicate::Predicate;
use crate::result::ValidationResult;
use crate::rule::{Rule, Violation};

use super::{ValidationContext, ValidationFailure};

/// Context that records every violation and never aborts.
///
/// Checks run in order and failures accumulate; [`finish`](Collector::finish)
/// turns the recorded violations into a [`ValidationResult`].
///
/// # Example
///
/// ```rust
/// use proviso::{rules, Collector, Named};
///
/// let mut v = Collector::new();
/// v.must(&"".named("username"), rules::string::not_blank())
///     .must(&"abc".named("password"), rules::string::min_length(8));
///
/// let report = v.finish();
/// assert_eq!(report.violations().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Collector {
    violations: Vec<Violation>,
}

impl Collector {
    /// Create an empty collector.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a named value against a rule, recording any violation.
    pub fn must<T, P>(&mut self, named: &NamedValue<T>, rule: Rule<P>) -> &mut Self
    where
        P: Predicate<T>,
    {
        if let Some(violation) = rule.eval(named) {
            self.record(violation);
        }
        self
    }

    /// Record a violation with the given message unless the condition holds.
    ///
    /// This is the escape hatch for one-off checks that are not worth a rule:
    ///
    /// ```rust
    /// use proviso::Collector;
    ///
    /// let mut v = Collector::new();
    /// v.ensure(1 + 1 == 2, "arithmetic is broken");
    /// v.ensure(false, "end date must follow start date");
    /// assert_eq!(v.violations().len(), 1);
    /// ```
    pub fn ensure(&mut self, condition: bool, message: impl Into<String>) -> &mut Self {
        if !condition {
            self.record(Violation::new(message));
        }
        self
    }

    /// Record a violation directly.
    pub fn record(&mut self, violation: Violation) -> &mut Self {
        #[cfg(feature = "tracing")]
        tracing::debug!("violation: {}", violation);
        self.violations.push(violation);
        self
    }

    /// Absorb the violations of another result, preserving their order.
    ///
    /// Useful for composing validators: validate a nested structure on its
    /// own, then merge its report into the outer run.
    pub fn merge(&mut self, result: ValidationResult) -> &mut Self {
        for violation in result.into_violations() {
            self.record(violation);
        }
        self
    }

    /// The violations recorded so far, in check order.
    #[inline]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Finish the run and report every recorded violation.
    ///
    /// Returns [`ValidationResult::Valid`] when nothing was recorded.
    pub fn finish(self) -> ValidationResult {
        #[cfg(feature = "tracing")]
        tracing::debug!("validation finished with {} violation(s)", self.violations.len());
        ValidationResult::from_violations(self.violations)
    }
}

impl ValidationContext for Collector {
    fn on_failure(&mut self, violation: Violation) -> Result<(), ValidationFailure> {
        self.record(violation);
        Ok(())
    }
}

/// Run checks under a [`Collector`] and report every violation.
///
/// # Example
///
/// ```rust
/// use proviso::{rules, validate_all, Named};
///
/// let report = validate_all(|v| {
///     v.must(&"ada".named("username"), rules::string::min_length(3));
///     v.must(&16.named("age"), rules::ord::at_least(18));
/// });
///
/// assert!(report.is_invalid());
/// assert_eq!(report.violations()[0].message(), "age must be at least 18");
/// ```
pub fn validate_all(f: impl FnOnce(&mut Collector)) -> ValidationResult {
    let mut collector = Collector::new();
    f(&mut collector);
    collector.finish()
}
