//! What a renderer sees and sends
//!
//! Errors exist for every invalid field at all times, but a field's message
//! is only shown once the user has touched it (or tried to submit). That
//! gating lives here so the engine and the rules can be tested on raw errors.
//!
//! A renderer drives the form with [`FormEvent`]s and redraws from a
//! [`FormSnapshot`].
//!
//! # Example
//!
//! ```
//! use signup_form::{Field, FormEvent, SignUpForm};
//!
//! let mut form = SignUpForm::new();
//! form.handle(FormEvent::change(Field::Email, "nope"), || {}).unwrap();
//! assert!(form.visible_error(Field::Email).is_none());
//!
//! form.handle(FormEvent::blur(Field::Email), || {}).unwrap();
//! assert_eq!(
//!     form.visible_error(Field::Email).map(|e| e.to_string()),
//!     Some("Invalid email format".to_string())
//! );
//! ```

use crate::engine::SignUpForm;
use crate::error::{FieldError, FieldErrors, FormError};
use crate::field::{Field, FieldValue};
use crate::validation::Validation;
use crate::values::FormValues;

/// Something the user did to the form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum FormEvent {
    /// A control's value changed
    Change {
        /// The field that changed
        field: Field,
        /// Its new raw value
        value: FieldValue,
    },
    /// A control lost focus
    Blur {
        /// The field that lost focus
        field: Field,
    },
    /// The submit button was pressed
    Submit,
    /// The reset button was pressed
    Reset,
}

impl FormEvent {
    /// Shorthand for [`FormEvent::Change`].
    pub fn change(field: Field, value: impl Into<FieldValue>) -> Self {
        FormEvent::Change {
            field,
            value: value.into(),
        }
    }

    /// Shorthand for [`FormEvent::Blur`].
    pub fn blur(field: Field) -> Self {
        FormEvent::Blur { field }
    }
}

/// Everything a renderer needs to draw the form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FormSnapshot {
    /// Current values
    pub values: FormValues,
    /// Every current error
    pub errors: FieldErrors,
    /// Errors on touched fields only
    pub visible_errors: FieldErrors,
    /// Touched fields, in rendered order
    pub touched: Vec<Field>,
    /// Whether any value differs from the initial values
    pub dirty: bool,
    /// Whether the submit button should be enabled
    pub can_submit: bool,
}

impl FormSnapshot {
    /// Whether `field` should be drawn as invalid.
    pub fn is_invalid(&self, field: Field) -> bool {
        self.visible_errors.contains(field)
    }
}

impl SignUpForm {
    /// The error on `field`, but only once the field is touched.
    pub fn visible_error(&self, field: Field) -> Option<&FieldError> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    /// Errors on touched fields.
    pub fn visible_errors(&self) -> FieldErrors {
        self.errors().filtered(|field| self.is_touched(field))
    }

    /// Whether `field` should be drawn as invalid: touched and failing.
    pub fn is_invalid(&self, field: Field) -> bool {
        self.visible_error(field).is_some()
    }

    /// Capture the current state for rendering.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values().clone(),
            errors: self.errors().clone(),
            visible_errors: self.visible_errors(),
            touched: self.touched().collect(),
            dirty: self.is_dirty(),
            can_submit: self.can_submit(),
        }
    }

    /// Apply a renderer event.
    ///
    /// `on_submit` is only called for a [`FormEvent::Submit`] on a valid form,
    /// and the returned validation is that submit's outcome. Every other event
    /// yields `Validation::Success(())`. A mismatched value in a
    /// [`FormEvent::Change`] is the only `Err`.
    pub fn handle<F>(
        &mut self,
        event: FormEvent,
        on_submit: F,
    ) -> Result<Validation<(), FieldErrors>, FormError>
    where
        F: FnOnce(),
    {
        match event {
            FormEvent::Change { field, value } => self.set_field_value(field, value)?,
            FormEvent::Blur { field } => self.set_field_touched(field),
            FormEvent::Submit => return Ok(self.submit(on_submit)),
            FormEvent::Reset => self.reset(),
        }
        Ok(Validation::success(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn errors_hidden_until_touched() {
        let mut form = SignUpForm::new();
        form.set_field_value(Field::Name, "A").unwrap();

        assert!(form.error(Field::Name).is_some());
        assert!(form.visible_error(Field::Name).is_none());
        assert!(!form.is_invalid(Field::Name));
        assert!(form.visible_errors().is_empty());

        form.set_field_touched(Field::Name);
        assert_eq!(
            form.visible_error(Field::Name).map(|e| e.kind),
            Some(ErrorKind::TooShort { min: 2 })
        );
        assert!(form.is_invalid(Field::Name));
        assert_eq!(form.visible_errors().len(), 1);
    }

    #[test]
    fn touched_valid_field_is_not_invalid() {
        let mut form = SignUpForm::new();
        form.set_field_value(Field::Name, "Al").unwrap();
        form.set_field_touched(Field::Name);
        assert!(!form.is_invalid(Field::Name));
    }

    #[test]
    fn failed_submit_makes_every_error_visible() {
        let mut form = SignUpForm::new();
        let outcome = form.handle(FormEvent::Submit, || panic!("must not submit")).unwrap();

        let snapshot = form.snapshot();
        assert_eq!(outcome, Validation::Failure(snapshot.errors.clone()));
        assert_eq!(snapshot.visible_errors, snapshot.errors);
        assert_eq!(snapshot.touched, Field::ALL.to_vec());
        assert!(Field::ALL.iter().all(|f| snapshot.is_invalid(*f)));
        assert!(!snapshot.can_submit);
    }

    #[test]
    fn handle_dispatches_each_event() {
        let mut form = SignUpForm::new();
        let mut submitted = 0;

        for (field, value) in [
            (Field::Name, FieldValue::from("Pavlo")),
            (Field::Age, FieldValue::from("33")),
            (Field::Gender, FieldValue::from("female")),
            (Field::Email, FieldValue::from("email@example.com")),
            (Field::Password, FieldValue::from("secret")),
            (Field::ConfirmPassword, FieldValue::from("secret")),
            (Field::Agree, FieldValue::from(true)),
        ] {
            form.handle(FormEvent::Change { field, value }, || {}).unwrap();
            form.handle(FormEvent::blur(field), || {}).unwrap();
        }
        assert!(form.snapshot().can_submit);

        let outcome = form.handle(FormEvent::Submit, || submitted += 1).unwrap();
        assert_eq!(outcome, Validation::success(()));
        assert_eq!(submitted, 1);
        assert_eq!(form, SignUpForm::new());
    }

    #[test]
    fn handle_reset() {
        let mut form = SignUpForm::new();
        form.handle(FormEvent::change(Field::Email, "x"), || {}).unwrap();
        form.handle(FormEvent::blur(Field::Email), || {}).unwrap();
        let outcome = form.handle(FormEvent::Reset, || {}).unwrap();
        assert!(outcome.is_success());
        assert_eq!(form, SignUpForm::new());
    }

    #[test]
    fn handle_propagates_value_mismatch() {
        let mut form = SignUpForm::new();
        let err = form
            .handle(FormEvent::change(Field::Name, false), || {})
            .unwrap_err();
        assert!(matches!(err, FormError::ValueMismatch { field: Field::Name, .. }));
        assert!(!form.is_dirty());
    }

    #[test]
    fn visible_errors_are_a_subset_of_errors() {
        let mut form = SignUpForm::new();
        form.set_field_value(Field::Email, "bad").unwrap();
        form.set_field_touched(Field::Email);
        form.set_field_touched(Field::Agree);

        let snapshot = form.snapshot();
        for error in &snapshot.visible_errors {
            assert_eq!(snapshot.errors.get(error.field), Some(error));
            assert!(snapshot.touched.contains(&error.field));
        }
        assert_eq!(
            snapshot.visible_errors.fields().collect::<Vec<_>>(),
            vec![Field::Email, Field::Agree]
        );
    }
}
