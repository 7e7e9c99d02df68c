//! Rule thresholds and engine options
//!
//! The defaults reproduce the sign-up form exactly. Every threshold can be
//! changed with a `with_*` builder method, and with the `serde` feature both
//! types load from any serde format, with missing keys taking their default.
//!
//! # Example
//!
//! ```
//! use signup_form::{FormConfig, RuleConfig};
//!
//! let config = FormConfig::default()
//!     .with_rules(RuleConfig::default().with_password_min_chars(8))
//!     .with_reset_on_submit(false);
//!
//! assert_eq!(config.rules.password_min_chars, 8);
//! assert_eq!(config.rules.name_min_chars, 2);
//! ```

/// Thresholds used by the field rule chains.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RuleConfig {
    /// Minimum characters in `name`
    pub name_min_chars: usize,
    /// Minimum characters in `password`
    pub password_min_chars: usize,
    /// Smallest accepted age
    pub age_min: u8,
    /// Largest accepted age
    pub age_max: u8,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            name_min_chars: 2,
            password_min_chars: 6,
            age_min: 1,
            age_max: 120,
        }
    }
}

impl RuleConfig {
    /// Set the minimum name length.
    pub fn with_name_min_chars(mut self, min: usize) -> Self {
        self.name_min_chars = min;
        self
    }

    /// Set the minimum password length.
    pub fn with_password_min_chars(mut self, min: usize) -> Self {
        self.password_min_chars = min;
        self
    }

    /// Set the accepted age range, inclusive on both ends.
    pub fn with_age_range(mut self, min: u8, max: u8) -> Self {
        self.age_min = min;
        self.age_max = max;
        self
    }
}

/// Options for [`SignUpForm`](crate::SignUpForm).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FormConfig {
    /// Rule thresholds
    pub rules: RuleConfig,
    /// Return to the initial state after a successful submit
    pub reset_on_submit: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            rules: RuleConfig::default(),
            reset_on_submit: true,
        }
    }
}

impl FormConfig {
    /// Replace the rule thresholds.
    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Choose whether a successful submit resets the form.
    pub fn with_reset_on_submit(mut self, reset: bool) -> Self {
        self.reset_on_submit = reset;
        self
    }
}
