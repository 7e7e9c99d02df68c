//! Predicate combinators for field rules
//!
//! Each leaf check a field rule performs (non-empty, minimum length, email
//! syntax, numeric bound, fixed choice) is a [`Predicate`], and [`ensure`]
//! turns a predicate answer into a [`Validation`](crate::Validation).
//!
//! # Example
//!
//! ```rust
//! use signup_form::{Validation, predicate::*};
//!
//! assert!(min_chars(6).check("secret"));
//! assert!(!is_email().check("email@"));
//!
//! let result = ensure("secre", min_chars(6), "Password must be at least 6 characters");
//! assert_eq!(result, Validation::failure("Password must be at least 6 characters"));
//! ```

mod combinators;
mod number;
mod string;
mod validation;

pub use combinators::Predicate;

pub use string::{is_email, min_chars, not_empty, one_of, IsEmail, MinChars, NotEmpty, OneOf};

pub use number::{eq, ge, le, Eq, Ge, Le};

pub use validation::ensure;
