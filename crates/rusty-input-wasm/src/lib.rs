//! rusty-input WASM
//!
//! WebAssembly bindings for the input value hook, so JavaScript UI layers get
//! the same rules and messages as Rust callers.
//!
//! ```javascript
//! import { useInputValue } from 'rusty-input-wasm';
//!
//! const age = useInputValue({ required: true, pattern: '^\\d+$' });
//! input.addEventListener('input', (e) => age.onChange(e));
//! input.addEventListener('blur', () => age.updateShowError());
//! if (age.showError) console.log(age.errors);
//! ```

use std::fmt::Display;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{use_input_value, InputValue};

/// Message of the error thrown back to JavaScript
pub fn error_message(context: &str, err: impl Display) -> String {
    format!("rusty-input: {}: {}", context, err)
}
