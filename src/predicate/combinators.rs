//! Core predicate trait

/// A composable check over values of type `T`.
///
/// Field rules are built from these: a rule asks a predicate about one value
/// and turns a `false` answer into an error kind.
///
/// # Example
///
/// ```rust
/// use signup_form::predicate::*;
///
/// let adult = ge(18.0);
/// assert!(adult.check(&42.5));
/// assert!(!adult.check(&17.0));
///
/// let has_digit = |s: &str| s.chars().any(|c| c.is_ascii_digit());
/// assert!(has_digit.check("secret1"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Closures are predicates.
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}
