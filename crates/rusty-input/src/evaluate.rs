// File: src/evaluate.rs
// Purpose: Evaluate a candidate value against the configured rules

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::InputConfig;
use crate::rule::Rule;

/// Messages of the rules that currently fail, keyed by rule
pub type Errors = BTreeMap<Rule, String>;

/// Outcome of evaluating one candidate value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub result: bool,
    pub errors: Errors,
}

impl Evaluation {
    /// Create a passing evaluation
    pub fn success() -> Self {
        Self {
            result: true,
            errors: Errors::new(),
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Message for a failing rule
    pub fn get_error(&self, rule: Rule) -> Option<&String> {
        self.errors.get(&rule)
    }

    /// Failing rules in evaluation order
    pub fn failed_rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.errors.keys().copied()
    }
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::success()
    }
}

impl InputConfig {
    /// Evaluate `candidate` against all three rules
    ///
    /// The custom predicate is always called, even for an empty value on a
    /// field that is not required.
    pub fn evaluate(&self, candidate: &str) -> Evaluation {
        let required_result = !self.required() || !candidate.is_empty();
        let pattern_result = self.pattern().is_match(candidate);
        let custom_result = self.custom_validation(candidate);

        let mut errors = Errors::new();
        for (rule, passed) in [
            (Rule::Required, required_result),
            (Rule::Pattern, pattern_result),
            (Rule::CustomValidation, custom_result),
        ] {
            if !passed {
                errors.insert(rule, self.error_message().get(rule).to_string());
            }
        }

        let result = required_result && pattern_result && custom_result;

        let failed: Vec<&str> = errors.keys().map(|rule| rule.key()).collect();
        tracing::trace!(result, ?failed, "Evaluated input value");

        Evaluation { result, errors }
    }
}
