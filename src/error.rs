//! Field validation errors and engine boundary errors
//!
//! A [`FieldError`] is a value, not a failure of the program: it is recomputed
//! from the current form values whenever they change and lives in the
//! [`FieldErrors`] mapping until the field becomes valid again.
//!
//! [`FormError`] covers misuse at the renderer boundary, such as handing a
//! checkbox state to a text field.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::field::{Field, ValueKind};
use crate::Semigroup;

/// Why a field's rule chain rejected its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ErrorKind {
    /// The field is empty
    Required,
    /// Fewer characters than the configured minimum
    TooShort {
        /// Minimum number of characters
        min: usize,
    },
    /// Not an email address
    InvalidEmail,
    /// The confirmation is empty
    ConfirmationRequired,
    /// The confirmation differs from the password
    PasswordMismatch,
    /// The terms checkbox is not ticked
    MustAgree,
    /// The input is not a number
    NotANumber,
    /// Below the lower bound
    BelowMinimum {
        /// Smallest accepted value
        min: u8,
    },
    /// Above the upper bound
    AboveMaximum {
        /// Largest accepted value
        max: u8,
    },
    /// Not one of the offered choices
    InvalidChoice,
}

impl ErrorKind {
    /// Whether the value had the wrong type, as opposed to a bad value of the
    /// right type.
    pub fn is_type_error(self) -> bool {
        matches!(self, ErrorKind::NotANumber)
    }
}

/// A validation failure on one field.
///
/// Displays as the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{}", message(*.field, *.kind))]
pub struct FieldError {
    /// The rejected field
    pub field: Field,
    /// Why it was rejected
    pub kind: ErrorKind,
}

impl FieldError {
    /// Create an error for `field`.
    pub fn new(field: Field, kind: ErrorKind) -> Self {
        FieldError { field, kind }
    }

    /// The message shown under the field.
    pub fn message(&self) -> String {
        message(self.field, self.kind)
    }
}

fn message(field: Field, kind: ErrorKind) -> String {
    match (field, kind) {
        (_, ErrorKind::Required) => "Required field".to_string(),
        (Field::Password, ErrorKind::TooShort { min }) => {
            format!("Password must be at least {min} characters")
        }
        (_, ErrorKind::TooShort { min }) => format!("Must be at least {min} characters"),
        (_, ErrorKind::InvalidEmail) => "Invalid email format".to_string(),
        (_, ErrorKind::ConfirmationRequired) => "Please confirm your password".to_string(),
        (_, ErrorKind::PasswordMismatch) => "Passwords must match".to_string(),
        (_, ErrorKind::MustAgree) => "You must agree to the terms".to_string(),
        (field, ErrorKind::NotANumber) => format!("{} must be a number", field.label()),
        (field, ErrorKind::BelowMinimum { min }) => {
            format!("{} must be at least {min}", field.label())
        }
        // Historical wording; the bound itself is accepted.
        (field, ErrorKind::AboveMaximum { max }) => {
            format!("{} must be less than {max}", field.label())
        }
        (field, ErrorKind::InvalidChoice) => {
            format!("Please select your {}", field.label().to_lowercase())
        }
    }
}

/// Per-field error mapping; a field is valid exactly when it is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    /// An empty mapping.
    pub fn new() -> Self {
        FieldErrors(BTreeMap::new())
    }

    /// True when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The error for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// True when `field` has an error.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Store `error`, or clear `field` when `error` is `None`.
    pub fn set(&mut self, field: Field, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.0.insert(field, error);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    /// Remove every error.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Fields with errors, in rendered order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Errors in rendered order.
    pub fn iter(&self) -> btree_map::Values<'_, Field, FieldError> {
        self.0.values()
    }

    /// Keep only the errors for which `keep` returns true.
    pub fn filtered(&self, mut keep: impl FnMut(Field) -> bool) -> FieldErrors {
        self.0
            .iter()
            .filter(|(field, _)| keep(**field))
            .map(|(field, error)| (*field, *error))
            .collect()
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        FieldErrors(BTreeMap::from([(error.field, error)]))
    }
}

impl FromIterator<(Field, FieldError)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, FieldError)>>(iter: I) -> Self {
        FieldErrors(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = btree_map::Values<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Union; a field already present on the left keeps its error.
impl Semigroup for FieldErrors {
    fn combine(mut self, other: Self) -> Self {
        for (field, error) in other.0 {
            self.0.entry(field).or_insert(error);
        }
        self
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", error.field, error)?;
        }
        Ok(())
    }
}

/// Errors at the renderer boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A value of the wrong shape was given for a field.
    #[error("field `{field}` expects a {expected} value, got {found}")]
    ValueMismatch {
        /// Target field
        field: Field,
        /// What the field accepts
        expected: ValueKind,
        /// What was given
        found: ValueKind,
    },

    /// A wire name that matches no field.
    #[error("unknown field `{0}`")]
    UnknownField(String),
}
