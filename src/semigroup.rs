//! Semigroup trait for accumulating validation failures
//!
//! A Semigroup is a type with an associative binary operation. [`Validation`]
//! uses it to merge the failures of independent field checks so that a single
//! pass over the form reports every broken field at once.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use signup_form::{ErrorKind, Field, FieldError, FieldErrors, Semigroup};
//!
//! let name = FieldErrors::from(FieldError::new(Field::Name, ErrorKind::Required));
//! let agree = FieldErrors::from(FieldError::new(Field::Agree, ErrorKind::MustAgree));
//! assert_eq!(name.combine(agree).len(), 2);
//! ```
//!
//! [`Validation`]: crate::Validation

/// A type that supports an associative binary operation
///
/// `combine` takes both sides by value; clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}
