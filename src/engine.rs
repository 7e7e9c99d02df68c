//! The sign-up form state machine
//!
//! [`SignUpForm`] owns the current values, the touched set, the error mapping
//! and the dirty flag, and moves them together through four transitions:
//! change, touch, submit and reset. Errors are always what [`validate`] would
//! say about the current values; which of them a user sees is decided in
//! [`view`](crate::view).
//!
//! # Example
//!
//! ```
//! use signup_form::{Field, SignUpForm};
//!
//! let mut form = SignUpForm::new();
//! assert!(!form.can_submit());
//!
//! form.set_field_value(Field::Password, "secret").unwrap();
//! form.set_field_value(Field::ConfirmPassword, "secre").unwrap();
//! assert!(form.errors().contains(Field::ConfirmPassword));
//!
//! form.set_field_value(Field::ConfirmPassword, "secret").unwrap();
//! assert!(!form.errors().contains(Field::ConfirmPassword));
//! ```
//!
//! [`validate`]: crate::validate

use std::collections::BTreeSet;

use crate::config::FormConfig;
use crate::error::{FieldError, FieldErrors, FormError};
use crate::field::{Field, FieldValue};
use crate::rules;
use crate::validation::Validation;
use crate::values::FormValues;

/// A sign-up form: values plus touched, error and dirty bookkeeping.
///
/// Two forms compare equal when every piece of state matches, so a reset
/// form equals a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct SignUpForm {
    config: FormConfig,
    values: FormValues,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
    dirty: bool,
    // False until the first change or submit; the error mapping is empty
    // rather than computed before that.
    validated: bool,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpForm {
    /// A fresh form with the default rules.
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// A fresh form with `config`.
    pub fn with_config(config: FormConfig) -> Self {
        SignUpForm {
            config,
            values: FormValues::default(),
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            dirty: false,
            validated: false,
        }
    }

    /// The configuration this form was built with.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current errors, whether or not their fields are touched.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The current error on `field`, touched or not.
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Whether the user has interacted with `field`.
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Touched fields, in rendered order.
    pub fn touched(&self) -> impl Iterator<Item = Field> + '_ {
        self.touched.iter().copied()
    }

    /// Whether any value differs from the initial values.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True when the submit action should be enabled: the form has been
    /// changed and no field has an error.
    pub fn can_submit(&self) -> bool {
        self.dirty && self.errors.is_empty()
    }

    /// Store a new value for `field` and bring the errors up to date.
    ///
    /// The first change validates the whole form. Later changes re-run the
    /// changed field and the fields that read it, which yields the same
    /// mapping as a full validation. A value of the wrong shape is rejected
    /// and nothing changes.
    pub fn set_field_value(
        &mut self,
        field: Field,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        self.values.set(field, value.into())?;
        self.dirty = self.values != FormValues::default();

        if self.validated {
            for affected in field.with_dependents() {
                let error = rules::validate_field_with(&self.config.rules, affected, &self.values);
                self.errors.set(affected, error);
            }
        } else {
            self.revalidate();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            field = %field,
            dirty = self.dirty,
            error = ?self.errors.get(field).map(|e| e.kind),
            "field value changed"
        );

        Ok(())
    }

    /// Mark `field` as touched.
    ///
    /// Values and errors are unchanged; the field's error, if any, becomes
    /// visible.
    pub fn set_field_touched(&mut self, field: Field) {
        if self.touched.insert(field) {
            #[cfg(feature = "tracing")]
            tracing::debug!(field = %field, "field touched");
        }
    }

    /// Touch every field, validate everything, and call `on_submit` if the
    /// form is valid.
    ///
    /// On success `on_submit` runs exactly once and, with
    /// [`FormConfig::reset_on_submit`], the form returns to its initial state.
    /// On failure values are kept, every error becomes visible, and the
    /// errors are returned.
    pub fn submit<F>(&mut self, on_submit: F) -> Validation<(), FieldErrors>
    where
        F: FnOnce(),
    {
        self.touched.extend(Field::ALL);
        self.revalidate();

        if !self.errors.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                errors = self.errors.len(),
                fields = ?self.errors.fields().collect::<Vec<_>>(),
                "submit blocked"
            );
            return Validation::failure(self.errors.clone());
        }

        #[cfg(feature = "tracing")]
        tracing::info!("sign-up submitted");

        on_submit();
        if self.config.reset_on_submit {
            self.reset();
        }
        Validation::success(())
    }

    /// Return to the initial state: default values, nothing touched, no
    /// errors, not dirty.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.touched.clear();
        self.errors.clear();
        self.dirty = false;
        self.validated = false;

        #[cfg(feature = "tracing")]
        tracing::debug!("form reset");
    }

    fn revalidate(&mut self) {
        self.errors = rules::validate_with(&self.config.rules, &self.values);
        self.validated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::strategies::field_change;
    use crate::values::AgeInput;
    use crate::{assert_failure, assert_field_error, assert_success};
    use proptest::prelude::*;

    fn fill_valid(form: &mut SignUpForm) {
        form.set_field_value(Field::Name, "Pavlo Lukianchuk").unwrap();
        form.set_field_value(Field::Age, 33_i64).unwrap();
        form.set_field_value(Field::Gender, "male").unwrap();
        form.set_field_value(Field::Email, "email@example.com").unwrap();
        form.set_field_value(Field::Password, "secret").unwrap();
        form.set_field_value(Field::ConfirmPassword, "secret").unwrap();
        form.set_field_value(Field::Agree, true).unwrap();
    }

    #[test]
    fn fresh_form_cannot_submit() {
        let form = SignUpForm::new();
        assert!(form.errors().is_empty());
        assert!(!form.is_dirty());
        assert!(!form.can_submit());
        assert_eq!(form.touched().count(), 0);
    }

    #[test]
    fn first_change_validates_the_whole_form() {
        let mut form = SignUpForm::new();
        form.set_field_value(Field::Name, "Pavlo").unwrap();
        assert!(form.is_dirty());
        assert!(form.error(Field::Name).is_none());
        assert_field_error!(*form.errors(), Field::Email, ErrorKind::Required);
        assert!(!form.can_submit());
    }

    #[test]
    fn can_submit_once_dirty_and_valid() {
        let mut form = SignUpForm::new();
        fill_valid(&mut form);
        assert!(form.errors().is_empty());
        assert!(form.can_submit());
    }

    #[test]
    fn password_change_revalidates_confirmation() {
        let mut form = SignUpForm::new();
        fill_valid(&mut form);

        form.set_field_value(Field::Password, "secret2").unwrap();
        assert_field_error!(*form.errors(), Field::ConfirmPassword, ErrorKind::PasswordMismatch);
        assert!(form.error(Field::Password).is_none());

        form.set_field_value(Field::ConfirmPassword, "secret2").unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn confirmation_fix_leaves_password_error_alone() {
        let mut form = SignUpForm::new();
        form.set_field_value(Field::Password, "secret").unwrap();
        form.set_field_value(Field::ConfirmPassword, "secre").unwrap();
        assert_field_error!(*form.errors(), Field::ConfirmPassword, ErrorKind::PasswordMismatch);

        form.set_field_value(Field::ConfirmPassword, "secret").unwrap();
        assert!(form.error(Field::ConfirmPassword).is_none());
        assert!(form.error(Field::Password).is_none());

        form.set_field_value(Field::Password, "abc").unwrap();
        form.set_field_value(Field::ConfirmPassword, "abc").unwrap();
        assert_field_error!(*form.errors(), Field::Password, ErrorKind::TooShort { min: 6 });
        assert!(form.error(Field::ConfirmPassword).is_none());
    }

    #[test]
    fn dirty_tracks_difference_from_initial_values() {
        let mut form = SignUpForm::new();
        form.set_field_value(Field::Name, "P").unwrap();
        assert!(form.is_dirty());
        form.set_field_value(Field::Name, "").unwrap();
        assert!(!form.is_dirty());
        assert!(!form.can_submit());
    }

    #[test]
    fn mismatched_value_changes_nothing() {
        let mut form = SignUpForm::new();
        form.set_field_value(Field::Name, "Pavlo").unwrap();
        let before = form.clone();

        let err = form.set_field_value(Field::Agree, "on").unwrap_err();
        assert!(matches!(err, FormError::ValueMismatch { field: Field::Agree, .. }));
        assert_eq!(form, before);
    }

    #[test]
    fn touching_does_not_change_values_or_errors() {
        let mut form = SignUpForm::new();
        form.set_field_value(Field::Email, "nope").unwrap();
        let errors = form.errors().clone();
        let values = form.values().clone();

        form.set_field_touched(Field::Email);
        assert!(form.is_touched(Field::Email));
        assert!(!form.is_touched(Field::Name));
        assert_eq!(form.errors(), &errors);
        assert_eq!(form.values(), &values);
    }

    #[test]
    fn submit_with_errors_keeps_values_and_skips_callback() {
        let mut form = SignUpForm::new();
        form.set_field_value(Field::Name, "Pavlo").unwrap();
        form.set_field_value(Field::Age, "abc").unwrap();
        let values = form.values().clone();

        let mut calls = 0;
        let result = form.submit(|| calls += 1);

        assert_failure!(result.clone());
        assert_eq!(calls, 0);
        assert_eq!(form.values(), &values);
        assert!(Field::ALL.iter().all(|f| form.is_touched(*f)));
        let errors = result.err().unwrap();
        assert_field_error!(errors, Field::Age, ErrorKind::NotANumber);
        assert_eq!(&errors, form.errors());
    }

    #[test]
    fn submit_on_untouched_form_reports_every_field() {
        let mut form = SignUpForm::new();
        let errors = form.submit(|| panic!("must not submit")).err().unwrap();
        assert_eq!(errors.len(), Field::ALL.len());
        assert!(!form.is_dirty());
    }

    #[test]
    fn valid_submit_calls_back_once_and_resets() {
        let mut form = SignUpForm::new();
        fill_valid(&mut form);

        let mut calls = 0;
        assert_success!(form.submit(|| calls += 1));
        assert_eq!(calls, 1);
        assert_eq!(form, SignUpForm::new());
    }

    #[test]
    fn valid_submit_can_keep_values() {
        let mut form = SignUpForm::with_config(FormConfig::default().with_reset_on_submit(false));
        fill_valid(&mut form);

        let mut calls = 0;
        assert_success!(form.submit(|| calls += 1));
        assert_eq!(calls, 1);
        assert_eq!(form.values().age, AgeInput::Number(33.0));
        assert!(form.can_submit());
    }

    #[test]
    fn reset_restores_fresh_state() {
        let mut form = SignUpForm::new();
        fill_valid(&mut form);
        form.set_field_touched(Field::Email);
        form.set_field_value(Field::Email, "bad").unwrap();
        let _ = form.submit(|| {});

        form.reset();
        assert_eq!(form, SignUpForm::new());
    }

    proptest! {
        #[test]
        fn incremental_errors_match_full_validation(
            changes in prop::collection::vec(field_change(), 1..24)
        ) {
            let mut form = SignUpForm::new();
            for (field, value) in changes {
                form.set_field_value(field, value).unwrap();
                prop_assert_eq!(form.errors(), &crate::validate(form.values()));
                prop_assert_eq!(form.is_dirty(), form.values() != &FormValues::default());
            }
        }

        #[test]
        fn reset_after_any_changes_equals_new(
            changes in prop::collection::vec(field_change(), 0..16),
            touched in prop::collection::vec(prop::sample::select(Field::ALL.to_vec()), 0..7),
        ) {
            let mut form = SignUpForm::new();
            for (field, value) in changes {
                form.set_field_value(field, value).unwrap();
            }
            for field in touched {
                form.set_field_touched(field);
            }
            form.reset();
            prop_assert_eq!(form, SignUpForm::new());
        }
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn logs_changes_and_blocked_submits() {
            let mut form = SignUpForm::new();
            form.set_field_value(Field::Email, "nope").unwrap();
            let _ = form.submit(|| {});

            assert!(logs_contain("field value changed"));
            assert!(logs_contain("submit blocked"));
        }

        #[traced_test]
        #[test]
        fn logs_successful_submit() {
            let mut form = SignUpForm::new();
            fill_valid(&mut form);
            let _ = form.submit(|| {});

            assert!(logs_contain("sign-up submitted"));
            assert!(logs_contain("form reset"));
        }
    }
}
