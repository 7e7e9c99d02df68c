//! Field rule chains and the pure `validate` function
//!
//! Every field has an ordered chain of rules. A rule is a plain function from
//! the thresholds and the current values to `Validation<(), ErrorKind>`; the
//! chain runs in order and stops at the first failure, so a field carries at
//! most one error. Presence checks come first, then format and range checks.
//!
//! Rules read the whole [`FormValues`] so that cross-field rules are ordinary
//! rules. The only one today is the password confirmation, and the fields it
//! reads are declared in [`Field::depends_on`].
//!
//! # Example
//!
//! ```
//! use signup_form::{validate, AgeInput, Field, FormValues};
//!
//! let values = FormValues {
//!     name: "A".into(),
//!     age: AgeInput::parse("abc"),
//!     ..FormValues::default()
//! };
//!
//! let errors = validate(&values);
//! assert_eq!(errors.get(Field::Name).unwrap().to_string(), "Must be at least 2 characters");
//! assert_eq!(errors.get(Field::Age).unwrap().to_string(), "Age must be a number");
//! ```

use crate::config::RuleConfig;
use crate::error::{ErrorKind, FieldError, FieldErrors};
use crate::field::Field;
use crate::predicate::{ensure, eq, ge, is_email, le, min_chars, not_empty, one_of};
use crate::validation::Validation;
use crate::values::{AgeInput, FormValues, Gender};

/// One step of a field's rule chain.
pub type Rule = fn(&RuleConfig, &FormValues) -> Validation<(), ErrorKind>;

const NAME_RULES: &[Rule] = &[name_present, name_long_enough];
const AGE_RULES: &[Rule] = &[age_present, age_is_number, age_at_least_min, age_at_most_max];
const GENDER_RULES: &[Rule] = &[gender_present, gender_is_choice];
const EMAIL_RULES: &[Rule] = &[email_present, email_has_syntax];
const PASSWORD_RULES: &[Rule] = &[password_present, password_long_enough];
const CONFIRM_RULES: &[Rule] = &[confirmation_present, confirmation_matches];
const AGREE_RULES: &[Rule] = &[terms_accepted];

/// The rule chain for `field`, in evaluation order.
pub fn chain(field: Field) -> &'static [Rule] {
    match field {
        Field::Name => NAME_RULES,
        Field::Age => AGE_RULES,
        Field::Gender => GENDER_RULES,
        Field::Email => EMAIL_RULES,
        Field::Password => PASSWORD_RULES,
        Field::ConfirmPassword => CONFIRM_RULES,
        Field::Agree => AGREE_RULES,
    }
}

/// Validate every field under the default thresholds.
///
/// Only failing fields appear in the result.
pub fn validate(values: &FormValues) -> FieldErrors {
    validate_with(&RuleConfig::default(), values)
}

/// Validate every field under `config`.
pub fn validate_with(config: &RuleConfig, values: &FormValues) -> FieldErrors {
    let checks = Field::ALL
        .into_iter()
        .map(|field| check_field(config, field, values))
        .collect();
    Validation::all_vec(checks).err().unwrap_or_default()
}

/// Run one field's chain under the default thresholds.
pub fn validate_field(field: Field, values: &FormValues) -> Option<FieldError> {
    validate_field_with(&RuleConfig::default(), field, values)
}

/// Run one field's chain under `config`, returning its first failure.
pub fn validate_field_with(
    config: &RuleConfig,
    field: Field,
    values: &FormValues,
) -> Option<FieldError> {
    chain(field)
        .iter()
        .fold(Validation::success(()), |outcome, rule| {
            outcome.and_then(|()| rule(config, values))
        })
        .map_err(|kind| FieldError::new(field, kind))
        .err()
}

pub(crate) fn check_field(
    config: &RuleConfig,
    field: Field,
    values: &FormValues,
) -> Validation<(), FieldErrors> {
    match validate_field_with(config, field, values) {
        Some(error) => Validation::failure(error.into()),
        None => Validation::success(()),
    }
}

fn name_present(_: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    ensure(values.name.as_str(), not_empty(), ErrorKind::Required)
}

fn name_long_enough(config: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    let min = config.name_min_chars;
    ensure(values.name.as_str(), min_chars(min), ErrorKind::TooShort { min })
}

fn age_present(_: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    ensure(&values.age, |age: &AgeInput| !age.is_empty(), ErrorKind::Required)
}

fn age_is_number(_: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    ensure(
        &values.age,
        |age: &AgeInput| age.as_number().is_some(),
        ErrorKind::NotANumber,
    )
}

fn age_at_least_min(config: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    let min = config.age_min;
    match values.age.as_number() {
        Some(age) => ensure(&age, ge(f64::from(min)), ErrorKind::BelowMinimum { min }),
        None => Validation::success(()),
    }
}

fn age_at_most_max(config: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    let max = config.age_max;
    match values.age.as_number() {
        Some(age) => ensure(&age, le(f64::from(max)), ErrorKind::AboveMaximum { max }),
        None => Validation::success(()),
    }
}

fn gender_present(_: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    ensure(values.gender.as_str(), not_empty(), ErrorKind::Required)
}

fn gender_is_choice(_: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    ensure(
        values.gender.as_str(),
        one_of(&Gender::CHOICES),
        ErrorKind::InvalidChoice,
    )
}

fn email_present(_: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    ensure(values.email.as_str(), not_empty(), ErrorKind::Required)
}

fn email_has_syntax(_: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    ensure(values.email.as_str(), is_email(), ErrorKind::InvalidEmail)
}

fn password_present(_: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    ensure(values.password.as_str(), not_empty(), ErrorKind::Required)
}

fn password_long_enough(config: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    let min = config.password_min_chars;
    ensure(values.password.as_str(), min_chars(min), ErrorKind::TooShort { min })
}

fn confirmation_present(_: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    ensure(
        values.confirm_password.as_str(),
        not_empty(),
        ErrorKind::ConfirmationRequired,
    )
}

// Reads `password`; see `Field::depends_on`.
fn confirmation_matches(_: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    ensure(
        values.confirm_password.as_str(),
        |confirmation: &str| confirmation == values.password,
        ErrorKind::PasswordMismatch,
    )
}

// "Must be true" is the whole chain; there is no separate presence check.
fn terms_accepted(_: &RuleConfig, values: &FormValues) -> Validation<(), ErrorKind> {
    ensure(&values.agree, eq(true), ErrorKind::MustAgree)
}
