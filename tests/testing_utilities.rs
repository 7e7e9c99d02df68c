//! Tests and examples for the testing utilities
//!
//! Shows how downstream code can check form validation with the assertion
//! macros instead of matching on results by hand.

use signup_form::prelude::*;
use signup_form::{assert_failure, assert_field_error, assert_no_errors, assert_success};

fn filled() -> FormValues {
    FormValues {
        name: "Ada".to_string(),
        email: "ada@example.org".to_string(),
        password: "analytical".to_string(),
        confirm_password: "analytical".to_string(),
        agree: true,
        age: AgeInput::Number(36.0),
        gender: "female".to_string(),
    }
}

#[test]
fn test_assert_success_with_complete_signup() {
    assert_success!(SignUp::try_from_values(&filled()));
}

#[test]
fn test_assert_failure_with_blank_values() {
    assert_failure!(SignUp::try_from_values(&FormValues::default()));
}

#[test]
fn test_assert_no_errors_with_valid_values() {
    assert_no_errors!(validate(&filled()));
}

#[test]
fn test_assert_field_error_on_each_failing_field() {
    let values = FormValues {
        email: "ada@".to_string(),
        confirm_password: "analyticaL".to_string(),
        age: AgeInput::NotANumber("thirty".to_string()),
        ..filled()
    };
    let errors = validate(&values);

    assert_eq!(errors.len(), 3);
    assert_field_error!(errors, Field::Email, ErrorKind::InvalidEmail);
    assert_field_error!(errors, Field::ConfirmPassword, ErrorKind::PasswordMismatch);
    assert_field_error!(errors, Field::Age, ErrorKind::NotANumber);
}

#[test]
fn test_accumulating_errors_from_separate_checks() {
    let name = FieldErrors::from(FieldError::new(Field::Name, ErrorKind::Required));
    let agree = FieldErrors::from(FieldError::new(Field::Agree, ErrorKind::MustAgree));

    let result = Validation::<(), FieldErrors>::failure(name)
        .and(Validation::<(), FieldErrors>::failure(agree));
    assert_failure!(result.clone());

    let errors = result.err().unwrap_or_default();
    assert_field_error!(errors, Field::Name, ErrorKind::Required);
    assert_field_error!(errors, Field::Agree, ErrorKind::MustAgree);
}

#[test]
fn test_form_submission_with_macros() {
    let mut form = SignUpForm::new();
    assert_failure!(form.submit(|| {}));

    for field in Field::ALL {
        form.set_field_value(field, filled().get(field)).unwrap();
    }
    assert_no_errors!(*form.errors());
    assert_success!(form.submit(|| {}));
}

#[test]
#[should_panic(expected = "wrong error on field `email`")]
fn test_assert_field_error_reports_wrong_kind() {
    let values = FormValues {
        email: "ada@".to_string(),
        ..filled()
    };
    assert_field_error!(validate(&values), Field::Email, ErrorKind::Required);
}
