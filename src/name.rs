//! Named values for violation messages
//!
//! Validation failures are reported in terms of the field being checked, so
//! every value enters a validation block together with the name it is known
//! by. `NamedValue` is that pairing, and the [`Named`] extension trait
//! attaches a name to any value at the call site.
//!
//! # Examples
//!
//! ```
//! use proviso::Named;
//!
//! let age = 42.named("age");
//! assert_eq!(age.name(), "age");
//! assert_eq!(age.value(), &42);
//! ```

use std::borrow::Cow;

/// A value paired with the name used for it in violation messages.
///
/// The name is typically a field or parameter name and almost always a
/// string literal, so it is stored as `Cow<'static, str>` to avoid an
/// allocation in the common case.
///
/// # Example
///
/// ```
/// use proviso::{Named, NamedValue};
///
/// let direct = NamedValue::new("email", "user@example.com");
/// let via_ext = "user@example.com".named("email");
/// assert_eq!(direct, via_ext);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedValue<T> {
    name: Cow<'static, str>,
    value: T,
}

impl<T> NamedValue<T> {
    /// Pair a value with its name.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::NamedValue;
    ///
    /// let port = NamedValue::new("port", 8080u16);
    /// assert_eq!(port.name(), "port");
    /// ```
    pub fn new(name: impl Into<Cow<'static, str>>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The name this value is reported under.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the pair and return the underlying value.
    ///
    /// # Example
    ///
    /// ```
    /// use proviso::Named;
    ///
    /// let named = String::from("hello").named("greeting");
    /// assert_eq!(named.into_value(), "hello");
    /// ```
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Extension trait attaching a name to any value.
///
/// Blanket-implemented for all sized types, so `value.named("field")` works
/// everywhere a validation block needs it.
///
/// # Example
///
/// ```
/// use proviso::Named;
///
/// let username = "ada".named("username");
/// assert_eq!(username.name(), "username");
/// ```
pub trait Named: Sized {
    /// Pair this value with a name for violation messages.
    fn named(self, name: impl Into<Cow<'static, str>>) -> NamedValue<Self> {
        NamedValue::new(name, self)
    }
}

impl<T> Named for T {}
