//! Deferred validation
//!
//! [`Lazy`] registers checks without running them. Nothing is evaluated until
//! the violations are iterated, and every traversal re-evaluates from the
//! current state of whatever the checks capture. Registering is cheap, so a
//! validator can be assembled up front and consulted repeatedly.

use std::fmt;

use crate::name::NamedValue;
use crate::predicate::Predicate;
use crate::result::ValidationResult;
use crate::rule::{Rule, Violation};

use super::{ValidationContext, ValidationFailure};

type Check = Box<dyn Fn() -> Option<Violation> + Send + Sync>;

/// Context that defers every check until its violations are iterated.
///
/// [`must`](Lazy::must) and [`ensure`](Lazy::ensure) only record the check;
/// the predicate runs when [`violations`](Lazy::violations) is pulled. Each
/// new traversal runs the checks again.
///
/// # Example
///
/// ```rust
/// use proviso::{rules, validate_lazy, Named};
///
/// let checks = validate_lazy(|v| {
///     v.must("".named("username"), rules::string::not_blank());
///     v.must(16.named("age"), rules::ord::at_least(18));
/// });
///
/// // Nothing has run yet; pulling the iterator evaluates the checks.
/// let messages: Vec<String> = checks
///     .violations()
///     .map(|violation| violation.into_message())
///     .collect();
/// assert_eq!(messages, vec!["username must not be blank", "age must be at least 18"]);
///
/// // A second traversal evaluates them again.
/// assert_eq!(checks.violations().count(), 2);
/// ```
#[derive(Default)]
pub struct Lazy {
    checks: Vec<Check>,
}

impl Lazy {
    /// Create a context with no registered checks.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule check without evaluating it.
    ///
    /// The named value is moved into the deferred check, so the context owns
    /// everything it needs to evaluate later.
    pub fn must<T, P>(&mut self, named: NamedValue<T>, rule: Rule<P>) -> &mut Self
    where
        T: Send + Sync + 'static,
        P: Predicate<T> + 'static,
    {
        self.checks.push(Box::new(move || rule.eval(&named)));
        #[cfg(feature = "tracing")]
        tracing::trace!("registered deferred check #{}", self.checks.len());
        self
    }

    /// Register a deferred condition with a fixed message.
    ///
    /// The condition closure runs on every traversal, so it observes state as
    /// it is at evaluation time, not at registration time.
    pub fn ensure<F>(&mut self, condition: F, message: impl Into<String>) -> &mut Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.checks.push(Box::new(move || {
            if condition() {
                None
            } else {
                Some(Violation::new(message.clone()))
            }
        }));
        #[cfg(feature = "tracing")]
        tracing::trace!("registered deferred check #{}", self.checks.len());
        self
    }

    /// Number of registered checks.
    ///
    /// Counting does not evaluate anything.
    #[inline]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no checks have been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Iterate the violations, evaluating checks as the iterator is pulled.
    ///
    /// Passing checks are skipped; each pull runs checks up to and including
    /// the next failing one. Dropping the iterator early leaves the remaining
    /// checks unevaluated.
    pub fn violations(&self) -> Violations<'_> {
        Violations {
            checks: self.checks.iter(),
        }
    }

    /// Evaluate until the first violation, if any.
    pub fn first(&self) -> Option<Violation> {
        self.violations().next()
    }

    /// Whether every check currently passes.
    ///
    /// Stops evaluating at the first violation.
    pub fn is_valid(&self) -> bool {
        self.first().is_none()
    }

    /// Evaluate every check now and report the outcome.
    pub fn result(&self) -> ValidationResult {
        self.violations().collect()
    }
}

impl fmt::Debug for Lazy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("checks", &self.checks.len())
            .finish()
    }
}

impl ValidationContext for Lazy {
    /// Defers only the reporting: the violation handed in was already
    /// evaluated by the caller. Use [`Lazy::must`] to defer evaluation too.
    fn on_failure(&mut self, violation: Violation) -> Result<(), ValidationFailure> {
        self.checks.push(Box::new(move || Some(violation.clone())));
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Lazy {
    type Item = Violation;
    type IntoIter = Violations<'a>;

    fn into_iter(self) -> Violations<'a> {
        self.violations()
    }
}

/// Iterator over the violations of a [`Lazy`] context.
///
/// Each call to [`next`](Iterator::next) evaluates registered checks until
/// one fails, then yields that failure.
pub struct Violations<'a> {
    checks: std::slice::Iter<'a, Check>,
}

impl Iterator for Violations<'_> {
    type Item = Violation;

    fn next(&mut self) -> Option<Violation> {
        for check in self.checks.by_ref() {
            if let Some(violation) = check() {
                #[cfg(feature = "tracing")]
                tracing::debug!("violation: {}", violation);
                return Some(violation);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anywhere between all checks passing and all failing.
        (0, Some(self.checks.len()))
    }
}

impl fmt::Debug for Violations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Violations")
            .field("remaining", &self.checks.len())
            .finish()
    }
}

/// Build a [`Lazy`] context by registering checks in a closure.
///
/// Nothing is evaluated; the returned context runs its checks whenever its
/// violations are iterated.
///
/// # Example
///
/// ```rust
/// use proviso::{rules, validate_lazy, Named};
///
/// let checks = validate_lazy(|v| {
///     v.must(8080u16.named("port"), rules::ord::at_least(1024));
/// });
/// assert!(checks.result().is_valid());
/// ```
pub fn validate_lazy(f: impl FnOnce(&mut Lazy)) -> Lazy {
    let mut ctx = Lazy::new();
    f(&mut ctx);
    ctx
}
