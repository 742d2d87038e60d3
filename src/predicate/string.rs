//! String predicates
//!
//! This module provides common predicates for string validation. Each
//! predicate is implemented for `str`, `String`, and `&str`, so it works on
//! borrowed and owned values alike.
//!
//! Length predicates count characters (Unicode scalar values), not bytes:
//! `"héllo"` has length 5.

use regex::Regex;

use super::combinators::Predicate;

// Each string predicate defines `holds` once; this wires it up for `str`,
// `String`, and `&str` targets.
macro_rules! impl_str_predicate {
    (@impls [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> Predicate<str> for $ty {
            #[inline]
            fn check(&self, value: &str) -> bool {
                self.holds(value)
            }
        }

        impl<$($gen)*> Predicate<String> for $ty {
            #[inline]
            fn check(&self, value: &String) -> bool {
                self.holds(value)
            }
        }

        impl<'a, $($gen)*> Predicate<&'a str> for $ty {
            #[inline]
            fn check(&self, value: &&'a str) -> bool {
                self.holds(value)
            }
        }
    };
    ([$($gen:tt)+] $ty:ty) => {
        impl_str_predicate!(@impls [$($gen)+] $ty);
    };
    ($ty:ty) => {
        impl_str_predicate!(@impls [] $ty);
    };
}

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl NotEmpty {
    #[inline]
    fn holds(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

impl_str_predicate!(NotEmpty);

/// Create a predicate that checks if a string is not empty.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(not_empty().check("hello"));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks if a string has non-whitespace content.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl NotBlank {
    #[inline]
    fn holds(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }
}

impl_str_predicate!(NotBlank);

/// Create a predicate that checks if a string contains at least one
/// non-whitespace character.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(not_blank().check("hello"));
/// assert!(!not_blank().check(""));
/// assert!(!not_blank().check("   \t\n"));
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Predicate that checks string length is in range.
///
/// Length is counted in characters, not bytes.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl LenBetween {
    #[inline]
    fn holds(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

impl_str_predicate!(LenBetween);

/// Create a predicate that checks if string length is between min and max (inclusive).
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// let p = len_between(3, 10);
/// assert!(!p.check("ab"));          // too short
/// assert!(p.check("abc"));          // exactly min
/// assert!(p.check("1234567890"));   // exactly max
/// assert!(!p.check("12345678901")); // too long
/// ```
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// Create a predicate that checks if string length is at least min.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(len_min(3).check("abc"));
/// assert!(!len_min(3).check("ab"));
/// ```
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if string length is at most max.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(len_max(5).check("hello"));
/// assert!(!len_max(5).check("toolong"));
/// ```
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Create a predicate that checks if string length is exactly len.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(len_eq(5).check("hello"));
/// assert!(!len_eq(5).check("hi"));
/// ```
pub fn len_eq(len: usize) -> LenBetween {
    LenBetween { min: len, max: len }
}

/// Predicate that checks if string starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl<S: AsRef<str>> StartsWith<S> {
    #[inline]
    fn holds(&self, value: &str) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

impl_str_predicate!([S: AsRef<str> + Send + Sync] StartsWith<S>);

/// Create a predicate that checks if string starts with prefix.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(starts_with("http").check("https://example.com"));
/// assert!(!starts_with("http").check("ftp://example.com"));
/// ```
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks if string ends with a suffix.
#[derive(Clone, Debug)]
pub struct EndsWith<S>(pub S);

impl<S: AsRef<str>> EndsWith<S> {
    #[inline]
    fn holds(&self, value: &str) -> bool {
        value.ends_with(self.0.as_ref())
    }
}

impl_str_predicate!([S: AsRef<str> + Send + Sync] EndsWith<S>);

/// Create a predicate that checks if string ends with suffix.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(ends_with(".rs").check("main.rs"));
/// assert!(!ends_with(".rs").check("main.py"));
/// ```
pub fn ends_with<S: AsRef<str> + Send + Sync>(suffix: S) -> EndsWith<S> {
    EndsWith(suffix)
}

/// Predicate that checks if string contains a substring.
#[derive(Clone, Debug)]
pub struct Contains<S>(pub S);

impl<S: AsRef<str>> Contains<S> {
    #[inline]
    fn holds(&self, value: &str) -> bool {
        value.contains(self.0.as_ref())
    }
}

impl_str_predicate!([S: AsRef<str> + Send + Sync] Contains<S>);

/// Create a predicate that checks if string contains substring.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(contains("@").check("user@example.com"));
/// assert!(!contains("@").check("invalid"));
/// ```
pub fn contains<S: AsRef<str> + Send + Sync>(substring: S) -> Contains<S> {
    Contains(substring)
}

/// Predicate that checks if a string matches a regular expression.
#[derive(Clone, Debug)]
pub struct Matches {
    pattern: Regex,
}

impl Matches {
    #[inline]
    fn holds(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

impl_str_predicate!(Matches);

/// Create a predicate that checks if a string matches the given pattern.
///
/// The pattern is compiled by the caller, so a malformed pattern surfaces
/// where it is written rather than at validation time.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
/// use regex::Regex;
///
/// let hex_color = matches(Regex::new(r"^#[0-9a-f]{6}$").unwrap());
/// assert!(hex_color.check("#1a2b3c"));
/// assert!(!hex_color.check("blue"));
/// ```
pub fn matches(pattern: Regex) -> Matches {
    Matches { pattern }
}

/// Predicate that checks if all characters satisfy a predicate.
#[derive(Clone, Copy, Debug)]
pub struct AllChars<F>(pub F);

impl<F: Fn(char) -> bool> AllChars<F> {
    #[inline]
    fn holds(&self, value: &str) -> bool {
        value.chars().all(&self.0)
    }
}

impl_str_predicate!([F: Fn(char) -> bool + Send + Sync] AllChars<F>);

/// Create a predicate that checks if all characters satisfy a condition.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(all_chars(char::is_alphabetic).check("hello"));
/// assert!(!all_chars(char::is_alphabetic).check("hello123"));
/// ```
pub fn all_chars<F: Fn(char) -> bool + Send + Sync>(f: F) -> AllChars<F> {
    AllChars(f)
}

/// Predicate that checks if any character satisfies a predicate.
#[derive(Clone, Copy, Debug)]
pub struct AnyChar<F>(pub F);

impl<F: Fn(char) -> bool> AnyChar<F> {
    #[inline]
    fn holds(&self, value: &str) -> bool {
        value.chars().any(&self.0)
    }
}

impl_str_predicate!([F: Fn(char) -> bool + Send + Sync] AnyChar<F>);

/// Create a predicate that checks if any character satisfies a condition.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(any_char(char::is_numeric).check("hello123"));
/// assert!(!any_char(char::is_numeric).check("hello"));
/// ```
pub fn any_char<F: Fn(char) -> bool + Send + Sync>(f: F) -> AnyChar<F> {
    AnyChar(f)
}

/// Create a predicate that checks if all characters are ASCII.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(is_ascii().check("hello"));
/// assert!(!is_ascii().check("héllo"));
/// ```
pub fn is_ascii() -> AllChars<fn(char) -> bool> {
    AllChars(|c| c.is_ascii())
}

/// Create a predicate that checks if all characters are alphanumeric.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(is_alphanumeric().check("hello123"));
/// assert!(!is_alphanumeric().check("hello_123"));
/// ```
pub fn is_alphanumeric() -> AllChars<fn(char) -> bool> {
    AllChars(|c| c.is_alphanumeric())
}

/// Create a predicate that checks if all characters are alphabetic.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(is_alphabetic().check("hello"));
/// assert!(!is_alphabetic().check("hello123"));
/// ```
pub fn is_alphabetic() -> AllChars<fn(char) -> bool> {
    AllChars(|c| c.is_alphabetic())
}

/// Create a predicate that checks if all characters are numeric.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(is_numeric().check("123"));
/// assert!(!is_numeric().check("hello123"));
/// ```
pub fn is_numeric() -> AllChars<fn(char) -> bool> {
    AllChars(|c| c.is_numeric())
}

/// Create a predicate that checks that no character is uppercase.
///
/// Digits and punctuation pass; only uppercase letters fail.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(is_lowercase().check("hello-123"));
/// assert!(!is_lowercase().check("Hello"));
/// ```
pub fn is_lowercase() -> AllChars<fn(char) -> bool> {
    AllChars(|c| !c.is_uppercase())
}

/// Create a predicate that checks that no character is lowercase.
///
/// # Example
///
/// ```
/// use proviso::predicate::*;
///
/// assert!(is_uppercase().check("HELLO-123"));
/// assert!(!is_uppercase().check("Hello"));
/// ```
pub fn is_uppercase() -> AllChars<fn(char) -> bool> {
    AllChars(|c| !c.is_lowercase())
}
