//! # signup-form
//!
//! A sign-up form as a validation engine: seven fields, an ordered rule chain
//! per field, and the touched/dirty/error bookkeeping that decides what the
//! user sees and when the form may be submitted.
//!
//! ## Design
//!
//! The validation core is pure: [`validate`] maps [`FormValues`] to
//! [`FieldErrors`] with no state and no side effects. [`SignUpForm`] is the
//! thin stateful shell around it, and the [`view`] module decides which
//! errors are shown. Rendering is left to the caller.
//!
//! ## Quick Example
//!
//! ```rust
//! use signup_form::{Field, SignUpForm};
//!
//! let mut form = SignUpForm::new();
//! form.set_field_value(Field::Name, "Pavlo Lukianchuk").unwrap();
//! form.set_field_value(Field::Age, "33").unwrap();
//! form.set_field_value(Field::Gender, "male").unwrap();
//! form.set_field_value(Field::Email, "email@example.com").unwrap();
//! form.set_field_value(Field::Password, "secret").unwrap();
//! form.set_field_value(Field::ConfirmPassword, "secret").unwrap();
//! form.set_field_value(Field::Agree, true).unwrap();
//! assert!(form.can_submit());
//!
//! let mut registered = false;
//! assert!(form.submit(|| registered = true).is_success());
//! assert!(registered);
//! ```
//!
//! ## Features
//!
//! - `serde`: Serialize/Deserialize for values, errors, events and config
//! - `tracing`: debug-level events for every form transition
//! - `proptest`: strategies for generating form values in `testing::strategies`

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod predicate;
pub mod rules;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod values;
pub mod view;

// Re-exports
pub use config::{FormConfig, RuleConfig};
pub use engine::SignUpForm;
pub use error::{ErrorKind, FieldError, FieldErrors, FormError};
pub use field::{Field, FieldValue, ValueKind};
pub use rules::{validate, validate_field, validate_field_with, validate_with};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use values::{AgeInput, FormValues, Gender, SignUp};
pub use view::{FormEvent, FormSnapshot};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{FormConfig, RuleConfig};
    pub use crate::engine::SignUpForm;
    pub use crate::error::{ErrorKind, FieldError, FieldErrors, FormError};
    pub use crate::field::{Field, FieldValue};
    pub use crate::rules::validate;
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::values::{AgeInput, FormValues, Gender, SignUp};
    pub use crate::view::{FormEvent, FormSnapshot};
}
