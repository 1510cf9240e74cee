//! Validation rules and their key names

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three independent checks applied to an input value
///
/// Ordering follows evaluation order, so an errors map iterates
/// `required`, `pattern`, `customValidation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// The value must be non-empty (only when `required` is set)
    #[serde(rename = "required")]
    Required,

    /// The value must match the configured regular expression
    #[serde(rename = "pattern", alias = "regEx", alias = "regExp")]
    Pattern,

    /// The caller's predicate must accept the value
    #[serde(rename = "customValidation")]
    CustomValidation,
}

impl Rule {
    /// All rules, in evaluation order
    pub const ALL: [Rule; 3] = [Rule::Required, Rule::Pattern, Rule::CustomValidation];

    /// Key used for this rule in errors maps and serialized output
    pub fn key(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Pattern => "pattern",
            Rule::CustomValidation => "customValidation",
        }
    }

    /// Parse a key name, accepting the older `regEx`/`regExp` spellings
    pub fn from_key(key: &str) -> Option<Rule> {
        match key {
            "required" => Some(Rule::Required),
            "pattern" | "regEx" | "regExp" => Some(Rule::Pattern),
            "customValidation" => Some(Rule::CustomValidation),
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
