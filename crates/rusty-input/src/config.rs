// File: src/config.rs
// Purpose: Hook configuration, its builder, and settings files (TOML / JSON)

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::error::{ConfigError, Result};
use crate::messages::ErrorMessages;
use crate::rule::Rule;

/// Predicate run by the `customValidation` rule
pub type CustomValidation = Rc<dyn Fn(&str) -> bool>;

// Matches every string, including the empty one
static MATCH_ANY: Lazy<Regex> = Lazy::new(|| Regex::new(".*").expect("match-any pattern compiles"));

/// Configuration supplied once when the hook is created
///
/// Defaults are produced per instance: the match-any regex is cloned from a
/// compiled template and the default predicate is a fresh closure, so no two
/// hooks share mutable configuration.
#[derive(Clone)]
pub struct InputConfig {
    initial_value: String,
    required: bool,
    pattern: Regex,
    custom_validation: CustomValidation,
    error_message: ErrorMessages,
}

impl InputConfig {
    pub fn builder() -> InputConfigBuilder {
        InputConfigBuilder::default()
    }

    pub fn initial_value(&self) -> &str {
        &self.initial_value
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn error_message(&self) -> &ErrorMessages {
        &self.error_message
    }

    /// Run the custom predicate on its own
    pub fn custom_validation(&self, value: &str) -> bool {
        (self.custom_validation)(value)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            initial_value: String::new(),
            required: false,
            pattern: MATCH_ANY.clone(),
            custom_validation: Rc::new(|_| true),
            error_message: ErrorMessages::default(),
        }
    }
}

impl fmt::Debug for InputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputConfig")
            .field("initial_value", &self.initial_value)
            .field("required", &self.required)
            .field("pattern", &self.pattern.as_str())
            .field("custom_validation", &"<fn>")
            .field("error_message", &self.error_message)
            .finish()
    }
}

/// Builder for [`InputConfig`]
///
/// Each setter overrides one field; everything else keeps its default.
#[derive(Debug, Clone, Default)]
pub struct InputConfigBuilder {
    config: InputConfig,
}

impl InputConfigBuilder {
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.config.initial_value = value.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.config.required = required;
        self
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.config.pattern = pattern;
        self
    }

    /// Compile and set the pattern
    pub fn pattern_str(self, pattern: &str) -> Result<Self> {
        let regex = compile_pattern(pattern)?;
        Ok(self.pattern(regex))
    }

    pub fn custom_validation(mut self, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        self.config.custom_validation = Rc::new(predicate);
        self
    }

    pub fn error_message(mut self, messages: ErrorMessages) -> Self {
        self.config.error_message = messages;
        self
    }

    /// Override the message of a single rule
    pub fn message(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.config.error_message.set(rule, message);
        self
    }

    pub fn build(self) -> InputConfig {
        self.config
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Serializable part of [`InputConfig`]
///
/// Everything except the custom predicate, which has to be attached in code
/// through [`InputSettings::into_builder`].
///
/// ```toml
/// initial_value = ""
/// required = true
/// pattern = '^\d+$'
///
/// [error_message]
/// required = "Enter a number"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSettings {
    #[serde(default, alias = "initialValue", deserialize_with = "null_as_empty")]
    pub initial_value: String,

    #[serde(default)]
    pub required: bool,

    /// Regex source; `None` matches anything
    #[serde(default, alias = "regEx", alias = "regExp")]
    pub pattern: Option<String>,

    #[serde(default, alias = "errorMessage")]
    pub error_message: ErrorMessages,
}

// `null` and a missing value both read as an empty field
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl InputSettings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read settings from a file; `.json` files are JSON, anything else TOML
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Load a settings file and compile it into a configuration
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<InputConfig> {
        let path = path.as_ref();

        let settings = Self::read(path)
            .with_context(|| format!("Failed to load input settings: {:?}", path))?;
        tracing::debug!("Loaded input settings from {:?}", path);

        let config = settings
            .into_config()
            .with_context(|| format!("Invalid input settings in {:?}", path))?;

        Ok(config)
    }

    /// Compile the settings into a builder, ready for a custom predicate
    pub fn into_builder(self) -> Result<InputConfigBuilder> {
        let mut builder = InputConfig::builder()
            .initial_value(self.initial_value)
            .required(self.required)
            .error_message(self.error_message);

        if let Some(pattern) = self.pattern.as_deref() {
            builder = builder.pattern_str(pattern)?;
        }

        Ok(builder)
    }

    pub fn into_config(self) -> Result<InputConfig> {
        Ok(self.into_builder()?.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InputConfig::default();
        assert_eq!(config.initial_value(), "");
        assert!(!config.required());
        assert!(config.pattern().is_match(""));
        assert!(config.pattern().is_match("anything at all\nacross lines"));
        assert!(config.custom_validation("whatever"));
        assert_eq!(config.error_message(), &ErrorMessages::default());
    }

    #[test]
    fn test_builder_partial_overrides() {
        let config = InputConfig::builder()
            .required(true)
            .message(Rule::Required, "Name is required")
            .build();

        assert!(config.required());
        assert_eq!(config.initial_value(), "");
        assert_eq!(config.error_message().required, "Name is required");
        assert_eq!(
            config.error_message().pattern,
            ErrorMessages::default().pattern
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let err = InputConfig::builder().pattern_str("(unclosed").unwrap_err();
        match err {
            ConfigError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_settings() {
        let settings = InputSettings::from_toml_str("").unwrap();
        assert_eq!(settings, InputSettings::default());

        let config = settings.into_config().unwrap();
        assert!(config.pattern().is_match("x"));
    }

    #[test]
    fn test_toml_settings() {
        let toml = r#"
            initial_value = "42"
            required = true
            pattern = '^\d+$'

            [error_message]
            pattern = "Digits only"
        "#;
        let settings = InputSettings::from_toml_str(toml).unwrap();
        assert_eq!(settings.initial_value, "42");
        assert!(settings.required);
        assert_eq!(settings.pattern.as_deref(), Some(r"^\d+$"));
        assert_eq!(settings.error_message.pattern, "Digits only");
        assert_eq!(
            settings.error_message.required,
            ErrorMessages::default().required
        );
    }

    #[test]
    fn test_json_settings_with_camel_case_aliases() {
        let json = r#"{
            "initialValue": null,
            "required": true,
            "regExp": "^[a-z]+$",
            "errorMessage": { "regExp": "Lowercase only", "customValidation": "Taken" }
        }"#;
        let settings = InputSettings::from_json_str(json).unwrap();
        assert_eq!(settings.initial_value, "");
        assert_eq!(settings.pattern.as_deref(), Some("^[a-z]+$"));
        assert_eq!(settings.error_message.pattern, "Lowercase only");
        assert_eq!(settings.error_message.custom_validation, "Taken");
    }

    #[test]
    fn test_settings_into_builder_keeps_custom_predicate() {
        let config = InputSettings::from_toml_str("required = true")
            .unwrap()
            .into_builder()
            .unwrap()
            .custom_validation(|value| value != "admin")
            .build();

        assert!(config.required());
        assert!(!config.custom_validation("admin"));
        assert!(config.custom_validation("guest"));
    }
}
