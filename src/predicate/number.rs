//! Comparison predicates
//!
//! Generic over any `PartialEq`/`PartialOrd` type, so they serve the age
//! bounds, the terms checkbox (`eq(true)`), and anything else comparable.

use super::combinators::Predicate;
use std::cmp::PartialOrd;

/// Predicate for equality.
#[derive(Clone, Copy, Debug)]
pub struct Eq<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Eq<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// Create a predicate that checks for equality.
///
/// # Example
///
/// ```rust
/// use signup_form::predicate::*;
///
/// assert!(eq(true).check(&true));
/// assert!(!eq(true).check(&false));
/// ```
pub fn eq<T: PartialEq + Send + Sync>(value: T) -> Eq<T> {
    Eq(value)
}

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Create a predicate that checks if value is at least `threshold`.
///
/// # Example
///
/// ```rust
/// use signup_form::predicate::*;
///
/// assert!(ge(1).check(&1));
/// assert!(!ge(1).check(&0));
/// ```
pub fn ge<T: PartialOrd + Send + Sync>(threshold: T) -> Ge<T> {
    Ge(threshold)
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Create a predicate that checks if value is at most `threshold`.
///
/// # Example
///
/// ```rust
/// use signup_form::predicate::*;
///
/// assert!(le(120).check(&120));
/// assert!(!le(120).check(&121));
/// ```
pub fn le<T: PartialOrd + Send + Sync>(threshold: T) -> Le<T> {
    Le(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(ge(1_i64).check(&1));
        assert!(le(120_i64).check(&120));
        assert!(!ge(1_i64).check(&-3));
        assert!(!le(120_i64).check(&i64::MAX));
    }

    #[test]
    fn eq_on_strings() {
        let matches_password = eq(String::from("secret"));
        assert!(matches_password.check(&String::from("secret")));
        assert!(!matches_password.check(&String::from("secre")));
    }
}
