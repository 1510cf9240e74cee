//! Error messages shown for failing rules

use serde::{Deserialize, Serialize};

use crate::rule::Rule;

/// One message per rule
///
/// Every field defaults on its own, so a settings file or builder can override
/// just the messages it cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessages {
    #[serde(default = "default_required")]
    pub required: String,

    #[serde(default = "default_pattern", alias = "regEx", alias = "regExp")]
    pub pattern: String,

    #[serde(default = "default_custom_validation", alias = "custom_validation")]
    pub custom_validation: String,
}

impl ErrorMessages {
    /// Message configured for a rule
    pub fn get(&self, rule: Rule) -> &str {
        match rule {
            Rule::Required => &self.required,
            Rule::Pattern => &self.pattern,
            Rule::CustomValidation => &self.custom_validation,
        }
    }

    /// Replace the message for a rule
    pub fn set(&mut self, rule: Rule, message: impl Into<String>) {
        let message = message.into();
        match rule {
            Rule::Required => self.required = message,
            Rule::Pattern => self.pattern = message,
            Rule::CustomValidation => self.custom_validation = message,
        }
    }

    pub fn with(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.set(rule, message);
        self
    }
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            required: default_required(),
            pattern: default_pattern(),
            custom_validation: default_custom_validation(),
        }
    }
}

// Default values
fn default_required() -> String {
    "This input must be provided".to_string()
}

fn default_pattern() -> String {
    "This input does not match the given regular expression".to_string()
}

fn default_custom_validation() -> String {
    "This input does not match the given custom validation".to_string()
}
