//! Field identifiers and raw input values
//!
//! [`Field`] names the seven inputs of the sign-up form in the order they are
//! rendered. [`FieldValue`] is what a renderer hands over when an input
//! changes: typed text, a number from a numeric control, or a checkbox state.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// One input of the sign-up form.
///
/// Ordering follows the rendered layout, so maps keyed by `Field` iterate top
/// to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Field {
    /// Full name
    Name,
    /// Age in years
    Age,
    /// Gender select
    Gender,
    /// Email address
    Email,
    /// Password
    Password,
    /// Password confirmation
    ConfirmPassword,
    /// Agree-to-terms checkbox
    Agree,
}

/// The shape of value a field's control produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ValueKind {
    /// Free text (also the raw form of a number input)
    Text,
    /// A number
    Number,
    /// A checkbox state
    Checkbox,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Text => "text",
            ValueKind::Number => "number",
            ValueKind::Checkbox => "checkbox",
        })
    }
}

impl Field {
    /// Every field, in rendered order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Age,
        Field::Gender,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Agree,
    ];

    /// The input name a renderer binds to.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Agree => "agree",
        }
    }

    /// Human-readable label shown next to the control.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::Agree => "I agree to the terms and conditions",
        }
    }

    /// Placeholder text for the empty control, if it has one.
    pub const fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::Name => Some("Pavlo Lukianchuk"),
            Field::Age => Some("Enter your age"),
            Field::Gender => Some("Select your gender"),
            Field::Email => Some("email@example.com"),
            Field::Password | Field::ConfirmPassword => Some("******"),
            Field::Agree => None,
        }
    }

    /// The kind of value this field's control produces.
    ///
    /// Age also accepts [`FieldValue::Text`], since number inputs hand over
    /// whatever the user typed.
    pub const fn value_kind(self) -> ValueKind {
        match self {
            Field::Age => ValueKind::Number,
            Field::Agree => ValueKind::Checkbox,
            _ => ValueKind::Text,
        }
    }

    /// Fields whose rule chains read this field's value.
    ///
    /// When this field changes, these must be re-validated too.
    pub const fn dependents(self) -> &'static [Field] {
        match self {
            Field::Password => &[Field::ConfirmPassword],
            _ => &[],
        }
    }

    /// Fields this field's rule chain reads besides its own value.
    pub const fn depends_on(self) -> &'static [Field] {
        match self {
            Field::ConfirmPassword => &[Field::Password],
            _ => &[],
        }
    }

    /// This field followed by its dependents.
    pub fn with_dependents(self) -> impl Iterator<Item = Field> {
        std::iter::once(self).chain(self.dependents().iter().copied())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// A raw value coming from a form control.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    /// Text as typed
    Text(String),
    /// A number from a numeric control
    Number(f64),
    /// Checkbox state
    Checked(bool),
}

impl FieldValue {
    /// The shape of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::Number(_) => ValueKind::Number,
            FieldValue::Checked(_) => ValueKind::Checkbox,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Checked(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "confirm_password".parse::<Field>(),
            Err(FormError::UnknownField("confirm_password".to_string()))
        );
    }

    #[test]
    fn dependency_sets_mirror_each_other() {
        for field in Field::ALL {
            for dependent in field.dependents() {
                assert!(dependent.depends_on().contains(&field));
            }
            for source in field.depends_on() {
                assert!(source.dependents().contains(&field));
            }
        }
    }

    #[test]
    fn password_change_reaches_confirmation() {
        let affected: Vec<_> = Field::Password.with_dependents().collect();
        assert_eq!(affected, vec![Field::Password, Field::ConfirmPassword]);
        let affected: Vec<_> = Field::Name.with_dependents().collect();
        assert_eq!(affected, vec![Field::Name]);
    }

    #[test]
    fn numbers_convert_to_number_values() {
        assert_eq!(FieldValue::from(33_i64), FieldValue::Number(33.0));
        assert_eq!(FieldValue::from(42.5), FieldValue::Number(42.5));
        assert_eq!(FieldValue::from(42.5).kind(), ValueKind::Number);
    }

    #[test]
    fn all_is_sorted_in_render_order() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
    }
}
