//! # rusty-input
//!
//! A reusable input value hook. It tracks the value of a single text field and
//! validates it against three optional rules: required-ness, a regular
//! expression pattern and a custom predicate.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_input::{use_input_value, InputConfig, Rule};
//!
//! let config = InputConfig::builder()
//!     .required(true)
//!     .pattern_str(r"^\d+$")
//!     .unwrap()
//!     .build();
//!
//! let age = use_input_value(config);
//! assert!(!age.valid());
//! assert!(age.errors().contains_key(&Rule::Required));
//!
//! age.on_change("123");
//! assert!(age.valid());
//! assert!(!age.show_error());
//!
//! age.on_change("12a");
//! assert_eq!(age.errors().keys().copied().collect::<Vec<_>>(), vec![Rule::Pattern]);
//! ```
//!
//! ## Modules
//!
//! - **`rule`** - The three rules and their key names
//! - **`messages`** - Per-rule error messages with defaults
//! - **`config`** - Hook configuration, builder and settings files
//! - **`evaluate`** - Rule evaluation into an errors mapping
//! - **`event`** - Change events carrying the new raw value
//! - **`hook`** - The stateful `UseInputValue` handle

pub mod config;
pub mod error;
pub mod evaluate;
pub mod event;
pub mod hook;
pub mod messages;
pub mod rule;

pub use config::{InputConfig, InputConfigBuilder, InputSettings};
pub use error::ConfigError;
pub use evaluate::{Errors, Evaluation};
pub use event::{ChangeEvent, EventTarget, InputEvent};
pub use hook::{use_input_value, InputState, UseInputValue};
pub use messages::ErrorMessages;
pub use rule::Rule;
