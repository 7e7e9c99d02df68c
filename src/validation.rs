//! Validation type for accumulating field errors
//!
//! `Validation` is like `Result`, except that combining two failures keeps
//! both. A single field's rule chain short-circuits with [`Validation::and_then`]
//! (first failure wins), while independent fields are combined with
//! [`Validation::and`], [`Validation::all_vec`] or [`ValidateAll::validate_all`]
//! so every broken field is reported.
//!
//! # Examples
//!
//! ```
//! use signup_form::{ErrorKind, Field, FieldError, FieldErrors, Validation};
//!
//! let rejected = |field, kind| FieldErrors::from(FieldError::new(field, kind));
//!
//! let name = Validation::<_, FieldErrors>::success("Pavlo");
//! let email = Validation::<&str, _>::failure(rejected(Field::Email, ErrorKind::InvalidEmail));
//! let agree = Validation::<bool, _>::failure(rejected(Field::Agree, ErrorKind::MustAgree));
//!
//! let errors = name.and(email).and(agree).err().unwrap();
//! assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Email, Field::Agree]);
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (a `Semigroup` when errors accumulate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// The error, if this validation failed
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_form::Validation;
    ///
    /// let v = Validation::<(), _>::failure("Passwords must match");
    /// assert_eq!(v.map_err(str::len), Validation::Failure(20));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function only runs if this validation succeeded, so the first
    /// failure in a chain is the one reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_form::Validation;
    ///
    /// let parsed = Validation::<_, &str>::success(130.0);
    /// let checked = parsed.and_then(|age| {
    ///     if age <= 120.0 {
    ///         Validation::success(age)
    ///     } else {
    ///         Validation::failure("Age must be less than 120")
    ///     }
    /// });
    /// assert_eq!(checked, Validation::Failure("Age must be less than 120"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_form::{ErrorKind, Field, FieldError, FieldErrors, Validation};
    ///
    /// let name = Validation::<&str, FieldErrors>::success("Pavlo");
    /// let agree = Validation::<bool, _>::failure(FieldErrors::from(FieldError::new(
    ///     Field::Agree,
    ///     ErrorKind::MustAgree,
    /// )));
    /// let errors = name.and(agree).err().unwrap();
    /// assert_eq!(errors.to_string(), "agree: You must agree to the terms");
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Combine a list of validations
    ///
    /// Succeeds with every value if all succeed; otherwise fails with all
    /// errors combined in order.
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}

/// Trait for combining a tuple of validations
///
/// Implemented for the seven-field tuple a sign-up is built from, all sharing
/// one error type, so `validate_all()` collects heterogeneous field values.
pub trait ValidateAll<E: Semigroup> {
    /// The output type when all validations succeed
    type Output;

    /// Combine all validations, accumulating errors
    fn validate_all(self) -> Validation<Self::Output, E>;
}

impl<E, T1, T2, T3, T4, T5, T6, T7> ValidateAll<E>
    for (
        Validation<T1, E>,
        Validation<T2, E>,
        Validation<T3, E>,
        Validation<T4, E>,
        Validation<T5, E>,
        Validation<T6, E>,
        Validation<T7, E>,
    )
where
    E: Semigroup,
{
    type Output = (T1, T2, T3, T4, T5, T6, T7);

    fn validate_all(self) -> Validation<Self::Output, E> {
        let (v1, v2, v3, v4, v5, v6, v7) = self;
        v1.and(v2)
            .and(v3)
            .and(v4)
            .and(v5)
            .and(v6)
            .and(v7)
            .map(|((((((a, b), c), d), e), f), g)| (a, b, c, d, e, f, g))
    }
}
