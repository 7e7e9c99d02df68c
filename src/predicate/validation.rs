//! Validation integration for predicates
//!
//! Rules do not need to hand back the checked value, only whether it passed,
//! so these helpers borrow the value and produce `Validation<(), E>`.

use super::combinators::Predicate;
use crate::Validation;

/// Check a borrowed value against a predicate.
///
/// Returns `Validation::success(())` if the predicate holds, otherwise
/// `Validation::failure(error)`.
///
/// # Example
///
/// ```rust
/// use signup_form::{Validation, predicate::*};
///
/// assert_eq!(ensure("Al", min_chars(2), "too short"), Validation::success(()));
/// assert_eq!(ensure("A", min_chars(2), "too short"), Validation::failure("too short"));
/// ```
pub fn ensure<T, E, P>(value: &T, predicate: P, error: E) -> Validation<(), E>
where
    T: ?Sized,
    P: Predicate<T>,
{
    if predicate.check(value) {
        Validation::success(())
    } else {
        Validation::failure(error)
    }
}
