//! Integration tests for loading input settings from files

use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_input::*;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_toml_settings() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "zip.toml",
        r#"
            required = true
            pattern = '^\d{5}$'

            [error_message]
            pattern = "Enter a 5 digit ZIP code"
        "#,
    );

    let hook = use_input_value(InputSettings::load(&path).unwrap());
    assert!(!hook.valid());

    hook.on_change("1234");
    assert_eq!(
        hook.error(Rule::Pattern).as_deref(),
        Some("Enter a 5 digit ZIP code")
    );

    hook.on_change("12345");
    assert!(hook.valid());
}

#[test]
fn test_load_json_settings() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "name.json",
        r#"{ "initialValue": "Ada", "required": true, "errorMessage": { "required": "Name?" } }"#,
    );

    let config = InputSettings::load(&path).unwrap();
    assert_eq!(config.initial_value(), "Ada");
    assert_eq!(config.error_message().required, "Name?");
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "empty.toml", "  \n");

    assert_eq!(InputSettings::read(&path).unwrap(), InputSettings::default());
}

#[rstest]
#[case("bad.toml", "pattern = '('")]
#[case("bad.json", r#"{ "pattern": "[a-" }"#)]
fn test_invalid_pattern_is_reported(#[case] name: &str, #[case] content: &str) {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, name, content);

    let err = InputSettings::load(&path).unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().unwrap();
    assert!(matches!(config_err, ConfigError::InvalidPattern { .. }));
}

#[rstest]
#[case("broken.toml", "required = ")]
#[case("broken.json", "{ required: true }")]
fn test_malformed_file_is_reported(#[case] name: &str, #[case] content: &str) {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, name, content);

    let err = InputSettings::read(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_) | ConfigError::Json(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = InputSettings::read(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
