//! Stop-at-first-failure validation
//!
//! [`FailFast`] turns the first violation into a typed error, so checks wire
//! together with `?` like any other fallible code. Checks after the failing
//! one never run, which makes this the policy for guarding expensive work
//! behind cheap preconditions.

use crate::name::NamedValue;
use crate::predicate::Predicate;
use crate::rule::{Rule, Violation};

use super::{ValidationContext, ValidationFailure};

/// Context that aborts on the first violation.
///
/// Every check returns `Result`, so a failing check short-circuits the
/// enclosing closure through `?`.
///
/// # Example
///
/// ```rust
/// use proviso::{rules, validate_first, Named};
///
/// let outcome = validate_first(|v| {
///     v.must(&"ada".named("username"), rules::string::not_blank())?;
///     v.must(&16.named("age"), rules::ord::at_least(18))?;
///     v.must(&"".named("email"), rules::string::not_blank())?;
///     Ok(())
/// });
///
/// // Only the age violation is reported; the email check never ran.
/// let failure = outcome.unwrap_err();
/// assert_eq!(failure.violation().message(), "age must be at least 18");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFast;

impl FailFast {
    /// Create a fail-fast context.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Check a named value against a rule, aborting on violation.
    pub fn must<T, P>(
        &mut self,
        named: &NamedValue<T>,
        rule: Rule<P>,
    ) -> Result<(), ValidationFailure>
    where
        P: Predicate<T>,
    {
        self.check(named, &rule)
    }

    /// Abort with the given message unless the condition holds.
    pub fn ensure(
        &mut self,
        condition: bool,
        message: impl Into<String>,
    ) -> Result<(), ValidationFailure> {
        if condition {
            Ok(())
        } else {
            self.on_failure(Violation::new(message))
        }
    }
}

impl ValidationContext for FailFast {
    fn on_failure(&mut self, violation: Violation) -> Result<(), ValidationFailure> {
        #[cfg(feature = "tracing")]
        tracing::debug!("aborting validation: {}", violation);
        Err(ValidationFailure::new(violation))
    }
}

/// Run checks under a [`FailFast`] context, stopping at the first violation.
///
/// Returns `Ok(())` when every check passes, otherwise the error carries the
/// first violation encountered.
///
/// # Example
///
/// ```rust
/// use proviso::{rules, validate_first, Named};
///
/// let ok = validate_first(|v| {
///     v.must(&"ada".named("username"), rules::string::not_blank())?;
///     v.ensure(2 + 2 == 4, "arithmetic is broken")?;
///     Ok(())
/// });
/// assert!(ok.is_ok());
/// ```
pub fn validate_first(
    f: impl FnOnce(&mut FailFast) -> Result<(), ValidationFailure>,
) -> Result<(), ValidationFailure> {
    let mut ctx = FailFast::new();
    f(&mut ctx)
}
