//! String rules
//!
//! Length rules count characters (Unicode scalar values), not bytes, matching
//! the string predicates they wrap.

use regex::Regex;

use crate::predicate::{
    self, AllChars, Contains, EndsWith, LenBetween, Matches, NotBlank, NotEmpty, StartsWith,
};
use crate::rule::Rule;

/// The value must contain at least one non-whitespace character.
///
/// # Example
///
/// ```rust
/// use proviso::{rules, Named};
///
/// let rule = rules::string::not_blank();
/// assert_eq!(
///     rule.eval(&"  ".named("username")).unwrap().message(),
///     "username must not be blank",
/// );
/// ```
pub fn not_blank() -> Rule<NotBlank> {
    Rule::new("must not be blank", predicate::not_blank())
}

/// The value must not be empty.
///
/// Whitespace-only strings pass; use [`not_blank`] to reject those too.
pub fn not_empty() -> Rule<NotEmpty> {
    Rule::new("must not be empty", predicate::not_empty())
}

/// The value must be exactly `len` characters long.
pub fn of_length(len: usize) -> Rule<LenBetween> {
    Rule::new(
        format!("must be exactly {len} characters long"),
        predicate::len_eq(len),
    )
}

/// The value must be at least `min` characters long.
///
/// # Example
///
/// ```rust
/// use proviso::{rules, Named};
///
/// let rule = rules::string::min_length(8);
/// assert_eq!(
///     rule.eval(&"abc".named("password")).unwrap().message(),
///     "password must be at least 8 characters long",
/// );
/// ```
pub fn min_length(min: usize) -> Rule<LenBetween> {
    Rule::new(
        format!("must be at least {min} characters long"),
        predicate::len_min(min),
    )
}

/// The value must be at most `max` characters long.
pub fn max_length(max: usize) -> Rule<LenBetween> {
    Rule::new(
        format!("must be at most {max} characters long"),
        predicate::len_max(max),
    )
}

/// The value's length must fall within `min..=max` characters.
pub fn length_between(min: usize, max: usize) -> Rule<LenBetween> {
    Rule::new(
        format!("must be between {min} and {max} characters long"),
        predicate::len_between(min, max),
    )
}

/// The value must contain the given substring.
pub fn contains<S: AsRef<str> + Send + Sync>(substring: S) -> Rule<Contains<S>> {
    let message = format!("must contain \"{}\"", substring.as_ref());
    Rule::new(message, predicate::contains(substring))
}

/// The value must start with the given prefix.
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> Rule<StartsWith<S>> {
    let message = format!("must start with \"{}\"", prefix.as_ref());
    Rule::new(message, predicate::starts_with(prefix))
}

/// The value must end with the given suffix.
pub fn ends_with<S: AsRef<str> + Send + Sync>(suffix: S) -> Rule<EndsWith<S>> {
    let message = format!("must end with \"{}\"", suffix.as_ref());
    Rule::new(message, predicate::ends_with(suffix))
}

/// The value must match the given pattern.
///
/// # Example
///
/// ```rust
/// use proviso::{rules, Named};
/// use regex::Regex;
///
/// let rule = rules::string::matches(Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
/// assert!(rule.eval(&"2024-01-31".named("date")).is_none());
/// assert_eq!(
///     rule.eval(&"31/01/2024".named("date")).unwrap().message(),
///     r"date must match pattern ^\d{4}-\d{2}-\d{2}$",
/// );
/// ```
pub fn matches(pattern: Regex) -> Rule<Matches> {
    let message = format!("must match pattern {pattern}");
    Rule::new(message, predicate::matches(pattern))
}

/// The value must contain only letters and digits.
pub fn alphanumeric() -> Rule<AllChars<fn(char) -> bool>> {
    Rule::new(
        "must contain only letters and digits",
        predicate::is_alphanumeric(),
    )
}

/// The value must not contain uppercase characters.
pub fn lowercase() -> Rule<AllChars<fn(char) -> bool>> {
    Rule::new(
        "must not contain uppercase characters",
        predicate::is_lowercase(),
    )
}

/// The value must not contain lowercase characters.
pub fn uppercase() -> Rule<AllChars<fn(char) -> bool>> {
    Rule::new(
        "must not contain lowercase characters",
        predicate::is_uppercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::Named;

    #[test]
    fn test_not_blank() {
        assert!(not_blank().eval(&"ada".named("name")).is_none());
        assert_eq!(
            not_blank().eval(&" \t".named("name")).unwrap().message(),
            "name must not be blank",
        );
    }

    #[test]
    fn test_not_empty_accepts_whitespace() {
        assert!(not_empty().eval(&"  ".named("name")).is_none());
        assert_eq!(
            not_empty().eval(&"".named("name")).unwrap().message(),
            "name must not be empty",
        );
    }

    #[test]
    fn test_of_length_boundaries() {
        let rule = of_length(3);
        assert!(rule.eval(&"ab".named("code")).is_some());
        assert!(rule.eval(&"abc".named("code")).is_none());
        assert!(rule.eval(&"abcd".named("code")).is_some());
        assert_eq!(
            rule.eval(&"ab".named("code")).unwrap().message(),
            "code must be exactly 3 characters long",
        );
    }

    #[test]
    fn test_min_length_boundaries() {
        let rule = min_length(3);
        assert!(rule.eval(&"ab".named("code")).is_some());
        assert!(rule.eval(&"abc".named("code")).is_none());
        assert!(rule.eval(&"abcd".named("code")).is_none());
    }

    #[test]
    fn test_max_length_boundaries() {
        let rule = max_length(3);
        assert!(rule.eval(&"ab".named("code")).is_none());
        assert!(rule.eval(&"abc".named("code")).is_none());
        assert!(rule.eval(&"abcd".named("code")).is_some());
        assert_eq!(
            rule.eval(&"abcd".named("code")).unwrap().message(),
            "code must be at most 3 characters long",
        );
    }

    #[test]
    fn test_length_between_message() {
        let rule = length_between(2, 4);
        assert!(rule.eval(&"ab".named("code")).is_none());
        assert_eq!(
            rule.eval(&"a".named("code")).unwrap().message(),
            "code must be between 2 and 4 characters long",
        );
    }

    #[test]
    fn test_length_counts_chars() {
        // "héllo" is 5 characters but 6 bytes
        assert!(of_length(5).eval(&"héllo".named("word")).is_none());
    }

    #[test]
    fn test_contains() {
        let rule = contains("@");
        assert!(rule.eval(&"user@example.com".named("email")).is_none());
        assert_eq!(
            rule.eval(&"invalid".named("email")).unwrap().message(),
            "email must contain \"@\"",
        );
    }

    #[test]
    fn test_starts_with() {
        let rule = starts_with("https://");
        assert!(rule.eval(&"https://example.com".named("url")).is_none());
        assert_eq!(
            rule.eval(&"http://example.com".named("url")).unwrap().message(),
            "url must start with \"https://\"",
        );
    }

    #[test]
    fn test_ends_with() {
        let rule = ends_with(".rs");
        assert!(rule.eval(&"main.rs".named("path")).is_none());
        assert_eq!(
            rule.eval(&"main.py".named("path")).unwrap().message(),
            "path must end with \".rs\"",
        );
    }

    #[test]
    fn test_matches() {
        let rule = matches(Regex::new(r"^[a-z]+$").unwrap());
        assert!(rule.eval(&"abc".named("slug")).is_none());
        assert_eq!(
            rule.eval(&"Abc".named("slug")).unwrap().message(),
            "slug must match pattern ^[a-z]+$",
        );
    }

    #[test]
    fn test_alphanumeric() {
        assert!(alphanumeric().eval(&"abc123".named("code")).is_none());
        assert_eq!(
            alphanumeric().eval(&"abc_123".named("code")).unwrap().message(),
            "code must contain only letters and digits",
        );
    }

    #[test]
    fn test_lowercase() {
        assert!(lowercase().eval(&"abc-123".named("slug")).is_none());
        assert_eq!(
            lowercase().eval(&"Abc".named("slug")).unwrap().message(),
            "slug must not contain uppercase characters",
        );
    }

    #[test]
    fn test_uppercase() {
        assert!(uppercase().eval(&"ABC-123".named("code")).is_none());
        assert_eq!(
            uppercase().eval(&"Abc".named("code")).unwrap().message(),
            "code must not contain lowercase characters",
        );
    }

    #[test]
    fn test_rules_apply_to_owned_strings() {
        let rule = min_length(3);
        assert!(rule.eval(&String::from("ada").named("name")).is_none());
        assert!(rule.eval(&String::from("ab").named("name")).is_some());
    }
}
