//! Validation contexts
//!
//! A context decides what happens when a rule fails. The same rules run under
//! any context; only the failure policy changes:
//!
//! - [`Collector`] records every violation and reports them all at once
//! - [`FailFast`] stops at the first violation and returns it as an error
//! - [`Lazy`] defers evaluation until the violations are actually iterated
//!
//! Each context is usually driven through its runner, which scopes the
//! context to a closure:
//!
//! ```rust
//! use proviso::{rules, validate_all, validate_first, Named};
//!
//! let report = validate_all(|v| {
//!     v.must(&"".named("username"), rules::string::not_blank());
//!     v.must(&16.named("age"), rules::ord::at_least(18));
//! });
//! assert_eq!(report.violations().len(), 2);
//!
//! let early = validate_first(|v| {
//!     v.must(&"".named("username"), rules::string::not_blank())?;
//!     v.must(&16.named("age"), rules::ord::at_least(18))?;
//!     Ok(())
//! });
//! assert_eq!(
//!     early.unwrap_err().violation().message(),
//!     "username must not be blank",
//! );
//! ```

mod collect;
mod fail_fast;
mod lazy;

pub use collect::{validate_all, Collector};
pub use fail_fast::{validate_first, FailFast};
pub use lazy::{validate_lazy, Lazy, Violations};

use thiserror::Error;

use crate::name::NamedValue;
use crate::predicate::Predicate;
use crate::rule::{Rule, Violation};

/// Error returned when a context aborts validation.
///
/// Carries the single violation that stopped the run. Produced by
/// [`FailFast`]; the other contexts never abort.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("validation failed: {violation}")]
pub struct ValidationFailure {
    violation: Violation,
}

impl ValidationFailure {
    /// Wrap a violation as an abort error.
    #[inline]
    pub fn new(violation: Violation) -> Self {
        Self { violation }
    }

    /// The violation that aborted validation.
    #[inline]
    pub fn violation(&self) -> &Violation {
        &self.violation
    }

    /// Consume the error and return its violation.
    #[inline]
    pub fn into_violation(self) -> Violation {
        self.violation
    }
}

impl From<Violation> for ValidationFailure {
    fn from(violation: Violation) -> Self {
        Self::new(violation)
    }
}

impl From<ValidationFailure> for crate::result::ValidationResult {
    fn from(failure: ValidationFailure) -> Self {
        Self::from_violation(failure.into_violation())
    }
}

/// A failure policy for running rules.
///
/// Implementors decide what a failed check means: record it and keep going,
/// or abort the run. The provided [`check`](ValidationContext::check) method
/// evaluates a rule against a named value and routes any violation to the
/// policy, which lets generic code run the same checks under any context.
///
/// ```rust
/// use proviso::{rules, Named, NamedValue, ValidationContext, ValidationFailure};
///
/// fn check_port<C: ValidationContext>(
///     port: &NamedValue<u16>,
///     ctx: &mut C,
/// ) -> Result<(), ValidationFailure> {
///     ctx.check(port, &rules::ord::at_least(1024))?;
///     ctx.check(port, &rules::ord::at_most(49151))?;
///     Ok(())
/// }
///
/// let mut all = proviso::Collector::new();
/// check_port(&80.named("port"), &mut all).unwrap();
/// assert_eq!(all.violations().len(), 1);
/// ```
pub trait ValidationContext {
    /// Handle a failed check.
    ///
    /// Returns `Err` to abort the run, `Ok` to continue.
    fn on_failure(&mut self, violation: Violation) -> Result<(), ValidationFailure>;

    /// Evaluate a rule against a named value under this context's policy.
    fn check<T, P>(&mut self, named: &NamedValue<T>, rule: &Rule<P>) -> Result<(), ValidationFailure>
    where
        P: Predicate<T>,
    {
        match rule.eval(named) {
            None => Ok(()),
            Some(violation) => self.on_failure(violation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::Named;
    use crate::rules;

    #[test]
    fn test_validation_failure_display() {
        let failure = ValidationFailure::new(Violation::new("age must be at least 18"));
        assert_eq!(failure.to_string(), "validation failed: age must be at least 18");
    }

    #[test]
    fn test_validation_failure_from_violation() {
        let failure: ValidationFailure = Violation::new("port out of range").into();
        assert_eq!(failure.violation().message(), "port out of range");
    }

    #[test]
    fn test_generic_check_records_under_collector() {
        fn run<C: ValidationContext>(ctx: &mut C) -> Result<(), ValidationFailure> {
            ctx.check(&"".named("name"), &rules::string::not_blank())?;
            ctx.check(&200.named("age"), &rules::ord::at_most(130))?;
            Ok(())
        }

        let mut collector = Collector::new();
        run(&mut collector).unwrap();
        assert_eq!(collector.violations().len(), 2);
    }

    #[test]
    fn test_generic_check_aborts_under_fail_fast() {
        fn run<C: ValidationContext>(ctx: &mut C) -> Result<(), ValidationFailure> {
            ctx.check(&"".named("name"), &rules::string::not_blank())?;
            ctx.check(&200.named("age"), &rules::ord::at_most(130))?;
            Ok(())
        }

        let mut fail_fast = FailFast::new();
        let err = run(&mut fail_fast).unwrap_err();
        assert_eq!(err.violation().message(), "name must not be blank");
    }
}
