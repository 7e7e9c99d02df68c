//! Form values as entered, and the typed record they become once valid
//!
//! [`FormValues`] holds exactly what the controls hold, including input the
//! rules will reject ("abc" typed into the age box, an unlisted gender), so
//! the rules can say precisely what is wrong. [`SignUp`] is the typed result
//! of a form that passed every rule.

use std::fmt;

use crate::config::RuleConfig;
use crate::error::{ErrorKind, FieldError, FieldErrors, FormError};
use crate::field::{Field, FieldValue};
use crate::rules;
use crate::validation::{ValidateAll, Validation};

/// Raw contents of the age control.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "FieldValue", into = "FieldValue"))]
pub enum AgeInput {
    /// Nothing entered
    #[default]
    Empty,
    /// A finite number
    Number(f64),
    /// Something that is not a number, kept verbatim
    NotANumber(String),
}

impl AgeInput {
    /// Interpret typed text.
    ///
    /// Surrounding whitespace is ignored. Anything that parses as a finite
    /// number (`"42"`, `"42.5"`, `"4.2e1"`) is a number; everything else is
    /// kept as [`AgeInput::NotANumber`].
    ///
    /// # Example
    ///
    /// ```
    /// use signup_form::AgeInput;
    ///
    /// assert_eq!(AgeInput::parse(""), AgeInput::Empty);
    /// assert_eq!(AgeInput::parse(" 42 "), AgeInput::Number(42.0));
    /// assert_eq!(AgeInput::parse("42.5"), AgeInput::Number(42.5));
    /// assert_eq!(AgeInput::parse("abc"), AgeInput::NotANumber("abc".into()));
    /// ```
    pub fn parse(raw: &str) -> AgeInput {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return AgeInput::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => AgeInput::Number(n),
            _ => AgeInput::NotANumber(raw.to_string()),
        }
    }

    /// The number, if one was entered.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AgeInput::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// True when nothing was entered.
    pub fn is_empty(&self) -> bool {
        matches!(self, AgeInput::Empty)
    }
}

impl fmt::Display for AgeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeInput::Empty => Ok(()),
            AgeInput::Number(n) => write!(f, "{n}"),
            AgeInput::NotANumber(raw) => f.write_str(raw),
        }
    }
}

impl From<FieldValue> for AgeInput {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(raw) => AgeInput::parse(&raw),
            FieldValue::Number(n) if n.is_finite() => AgeInput::Number(n),
            FieldValue::Number(n) => AgeInput::NotANumber(n.to_string()),
            FieldValue::Checked(b) => AgeInput::NotANumber(b.to_string()),
        }
    }
}

impl From<AgeInput> for FieldValue {
    fn from(age: AgeInput) -> Self {
        match age {
            AgeInput::Empty => FieldValue::Text(String::new()),
            AgeInput::Number(n) => FieldValue::Number(n),
            AgeInput::NotANumber(raw) => FieldValue::Text(raw),
        }
    }
}

/// The choices offered by the gender select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    /// `"male"`
    Male,
    /// `"female"`
    Female,
}

impl Gender {
    /// Select option values, in display order.
    pub const CHOICES: [&'static str; 2] = ["male", "female"];

    /// The select option value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Match a select option value exactly.
    pub fn parse(value: &str) -> Option<Gender> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the sign-up form holds.
///
/// `FormValues::default()` is the state of a freshly opened form.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FormValues {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Password confirmation
    pub confirm_password: String,
    /// Terms accepted
    pub agree: bool,
    /// Age control contents
    pub age: AgeInput,
    /// Gender select value; `""` when nothing is selected
    pub gender: String,
}

impl FormValues {
    /// The current value of `field` as a control would show it.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Name => FieldValue::Text(self.name.clone()),
            Field::Age => self.age.clone().into(),
            Field::Gender => FieldValue::Text(self.gender.clone()),
            Field::Email => FieldValue::Text(self.email.clone()),
            Field::Password => FieldValue::Text(self.password.clone()),
            Field::ConfirmPassword => FieldValue::Text(self.confirm_password.clone()),
            Field::Agree => FieldValue::Checked(self.agree),
        }
    }

    /// Store `value` into `field`.
    ///
    /// Text fields take text, `agree` takes a checkbox state, and `age` takes
    /// either a number or text to be parsed. Anything else is rejected and
    /// nothing changes.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        match (field, value) {
            (Field::Name, FieldValue::Text(s)) => self.name = s,
            (Field::Gender, FieldValue::Text(s)) => self.gender = s,
            (Field::Email, FieldValue::Text(s)) => self.email = s,
            (Field::Password, FieldValue::Text(s)) => self.password = s,
            (Field::ConfirmPassword, FieldValue::Text(s)) => self.confirm_password = s,
            (Field::Age, value @ (FieldValue::Text(_) | FieldValue::Number(_))) => {
                self.age = value.into()
            }
            (Field::Agree, FieldValue::Checked(b)) => self.agree = b,
            (field, value) => {
                return Err(FormError::ValueMismatch {
                    field,
                    expected: field.value_kind(),
                    found: value.kind(),
                })
            }
        }
        Ok(())
    }
}

/// A completed sign-up, built only from values that pass every rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignUp {
    /// Full name
    pub name: String,
    /// Age in years
    pub age: f64,
    /// Selected gender
    pub gender: Gender,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Terms accepted
    pub agreed_to_terms: bool,
}

impl SignUp {
    /// Build a sign-up from form values under the default rules.
    ///
    /// # Example
    ///
    /// ```
    /// use signup_form::{AgeInput, FormValues, SignUp, Field};
    ///
    /// let values = FormValues {
    ///     name: "Pavlo".into(),
    ///     email: "pavlo@example.com".into(),
    ///     password: "secret".into(),
    ///     confirm_password: "secret".into(),
    ///     agree: true,
    ///     age: AgeInput::Number(30.0),
    ///     gender: "male".into(),
    /// };
    /// assert!(SignUp::try_from_values(&values).is_success());
    ///
    /// let errors = SignUp::try_from_values(&FormValues::default()).err().unwrap();
    /// assert_eq!(errors.len(), Field::ALL.len());
    /// ```
    pub fn try_from_values(values: &FormValues) -> Validation<SignUp, FieldErrors> {
        Self::try_from_values_with(&RuleConfig::default(), values)
    }

    /// Build a sign-up under `config`, reporting every failing field.
    pub fn try_from_values_with(
        config: &RuleConfig,
        values: &FormValues,
    ) -> Validation<SignUp, FieldErrors> {
        let checked = |field: Field| rules::check_field(config, field, values);
        let rejected =
            |field: Field, kind: ErrorKind| FieldErrors::from(FieldError::new(field, kind));

        (
            checked(Field::Name).map(|()| values.name.clone()),
            checked(Field::Age).and_then(|()| match values.age.as_number() {
                Some(age) => Validation::success(age),
                None => Validation::failure(rejected(Field::Age, ErrorKind::NotANumber)),
            }),
            checked(Field::Gender).and_then(|()| match Gender::parse(&values.gender) {
                Some(gender) => Validation::success(gender),
                None => Validation::failure(rejected(Field::Gender, ErrorKind::InvalidChoice)),
            }),
            checked(Field::Email).map(|()| values.email.clone()),
            checked(Field::Password).map(|()| values.password.clone()),
            checked(Field::ConfirmPassword),
            checked(Field::Agree).map(|()| values.agree),
        )
            .validate_all()
            .map(
                |(name, age, gender, email, password, (), agreed_to_terms)| SignUp {
                    name,
                    age,
                    gender,
                    email,
                    password,
                    agreed_to_terms,
                },
            )
    }
}
