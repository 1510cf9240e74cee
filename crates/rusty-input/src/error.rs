// File: src/error.rs
// Purpose: Errors raised while building an input configuration

use thiserror::Error;

/// Configuration errors
///
/// Validation failures are never reported here; they are data in
/// [`Errors`](crate::Errors).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to parse TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
