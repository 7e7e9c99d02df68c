//! Testing utilities for form validation
//!
//! Assertion macros for [`Validation`](crate::Validation) results and
//! [`FieldErrors`](crate::FieldErrors) mappings, plus `proptest` strategies
//! for form values (with the `proptest` feature).
//!
//! # Example
//!
//! ```rust
//! use signup_form::{assert_field_error, validate, ErrorKind, Field, FormValues};
//!
//! let errors = validate(&FormValues::default());
//! assert_field_error!(errors, Field::Agree, ErrorKind::MustAgree);
//! ```

/// Assert that a validation succeeds.
///
/// # Example
///
/// ```rust
/// use signup_form::{Validation, assert_success};
///
/// let val = Validation::<_, Vec<String>>::success(42);
/// assert_success!(val);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// # Example
///
/// ```rust
/// use signup_form::{Validation, assert_failure};
///
/// let val = Validation::<i32, _>::failure(vec!["Required field".to_string()]);
/// assert_failure!(val);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an error mapping holds an error of the given kind on a field.
#[macro_export]
macro_rules! assert_field_error {
    ($errors:expr, $field:expr, $kind:expr) => {{
        let errors: &$crate::FieldErrors = &$errors;
        let field: $crate::Field = $field;
        match errors.get(field) {
            Some(error) => assert_eq!(error.kind, $kind, "wrong error on field `{}`", field),
            None => panic!("Expected an error on `{}`, got none; errors: {:?}", field, errors),
        }
    }};
}

/// Assert that an error mapping is empty.
#[macro_export]
macro_rules! assert_no_errors {
    ($errors:expr) => {{
        let errors: &$crate::FieldErrors = &$errors;
        if !errors.is_empty() {
            panic!("Expected no errors, got:\n{}", errors);
        }
    }};
}

/// `proptest` strategies for form values.
#[cfg(any(test, feature = "proptest"))]
pub mod strategies {
    use proptest::prelude::*;
    use proptest::sample::select;

    use crate::field::{Field, FieldValue};
    use crate::values::{AgeInput, FormValues};

    /// Values that pass every default rule.
    pub fn valid_values() -> impl Strategy<Value = FormValues> {
        (
            "[A-Za-z][A-Za-z ]{1,20}",
            "[a-z0-9._%+-]{1,12}@[a-z0-9]{1,10}\\.[a-z]{2,6}",
            "[ -~]{6,20}",
            prop_oneof![(1_u8..=120).prop_map(f64::from), 1.0_f64..=120.0],
            select(vec!["male", "female"]),
        )
            .prop_map(|(name, email, password, age, gender)| FormValues {
                name,
                email,
                confirm_password: password.clone(),
                password,
                agree: true,
                age: AgeInput::Number(age),
                gender: gender.to_string(),
            })
    }

    /// Raw age control contents around the edges of the default range.
    pub fn age_input() -> impl Strategy<Value = AgeInput> {
        prop_oneof![
            Just(AgeInput::Empty),
            (-5_i8..127).prop_map(|n| AgeInput::Number(f64::from(n))),
            (-5.0_f64..130.0).prop_map(AgeInput::Number),
            "[a-z]{1,4}".prop_map(AgeInput::NotANumber),
        ]
    }

    /// Any form values, biased towards empty fields, boundary lengths and
    /// password/confirmation collisions.
    pub fn any_values() -> impl Strategy<Value = FormValues> {
        (
            prop_oneof![Just(String::new()), "[A-Za-z]{1,3}", "[A-Za-z ]{0,12}"],
            prop_oneof![
                Just(String::new()),
                "[a-z]{1,6}@[a-z]{1,6}\\.[a-z]{2,3}",
                "[a-z@.]{0,12}",
            ],
            "[ab]{0,7}",
            "[ab]{0,7}",
            any::<bool>(),
            age_input(),
            select(vec!["", "male", "female", "other"]),
        )
            .prop_map(
                |(name, email, password, confirm_password, agree, age, gender)| FormValues {
                    name,
                    email,
                    password,
                    confirm_password,
                    agree,
                    age,
                    gender: gender.to_string(),
                },
            )
    }

    /// A field paired with a value of the right shape for it.
    pub fn field_change() -> impl Strategy<Value = (Field, FieldValue)> {
        (any_values(), select(Field::ALL.to_vec()))
            .prop_map(|(values, field)| (field, values.get(field)))
    }

    impl Arbitrary for FormValues {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            any_values().boxed()
        }
    }
}
