//! String predicates
//!
//! Lengths are counted in characters so that "Zoë" is three long, the way a
//! person typing into the form counts it.

use std::sync::LazyLock;

use regex::Regex;

use super::combinators::Predicate;

// local@label.label[.label...]; each DNS label is alphanumeric with inner
// hyphens and at most 63 characters, and at least one dot is required.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a string is not empty.
///
/// Whitespace counts as content.
///
/// # Example
///
/// ```rust
/// use signup_form::predicate::*;
///
/// assert!(not_empty().check("Pavlo"));
/// assert!(not_empty().check(" "));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks a string has at least `min` characters.
#[derive(Clone, Copy, Debug)]
pub struct MinChars {
    min: usize,
}

impl Predicate<str> for MinChars {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().count() >= self.min
    }
}

/// Create a predicate that checks if a string has at least `min` characters.
///
/// # Example
///
/// ```rust
/// use signup_form::predicate::*;
///
/// assert!(min_chars(2).check("Al"));
/// assert!(!min_chars(2).check("A"));
/// assert!(min_chars(3).check("Zoë"));
/// ```
pub fn min_chars(min: usize) -> MinChars {
    MinChars { min }
}

/// Predicate that checks a string is one of a fixed set of choices.
#[derive(Clone, Copy, Debug)]
pub struct OneOf<'a> {
    choices: &'a [&'a str],
}

impl Predicate<str> for OneOf<'_> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.choices.contains(&value)
    }
}

/// Create a predicate that checks if a string exactly matches one of `choices`.
///
/// # Example
///
/// ```rust
/// use signup_form::predicate::*;
///
/// let gender = one_of(&["male", "female"]);
/// assert!(gender.check("female"));
/// assert!(!gender.check("Female"));
/// assert!(!gender.check("other"));
/// ```
pub fn one_of<'a>(choices: &'a [&'a str]) -> OneOf<'a> {
    OneOf { choices }
}

/// Predicate that checks a string has email syntax.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmail;

impl Predicate<str> for IsEmail {
    #[inline]
    fn check(&self, value: &str) -> bool {
        EMAIL_RE.is_match(value)
    }
}

/// Create a predicate that checks if a string looks like `local@domain.tld`.
///
/// # Example
///
/// ```rust
/// use signup_form::predicate::*;
///
/// assert!(is_email().check("email@example.com"));
/// assert!(!is_email().check("email@example"));
/// assert!(!is_email().check("not an email"));
/// ```
pub fn is_email() -> IsEmail {
    IsEmail
}
