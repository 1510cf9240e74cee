use js_sys::{Function, Reflect};
use rusty_input::{InputSettings, UseInputValue};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error_message;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Input value hook exported to JavaScript
///
/// # Example (JavaScript)
/// ```javascript
/// const name = new InputValue(
///     { required: true, errorMessage: { required: 'Name is required' } },
///     (value) => value !== 'admin',
/// );
/// name.onChange({ target: { value: 'Ada' } });
/// name.valid;     // true
/// name.errors;    // {}
/// ```
#[wasm_bindgen]
pub struct InputValue {
    hook: UseInputValue,
}

#[wasm_bindgen]
impl InputValue {
    /// `options` takes the settings fields (`initialValue`, `required`,
    /// `pattern`, `errorMessage`); `customValidation` is called with the
    /// value and passes on a truthy result.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue, custom_validation: Option<Function>) -> Result<InputValue, JsValue> {
        let settings: InputSettings = if options.is_undefined() || options.is_null() {
            InputSettings::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&error_message("invalid options", e)))?
        };

        let mut builder = settings
            .into_builder()
            .map_err(|e| JsValue::from_str(&error_message("invalid options", e)))?;

        if let Some(predicate) = custom_validation {
            builder = builder.custom_validation(move |value| call_predicate(&predicate, value));
        }

        tracing::debug!("Created JS input value hook");

        Ok(Self {
            hook: UseInputValue::new(builder.build()),
        })
    }

    /// Accepts a DOM event (`event.target.value`) or the raw string value
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, event: JsValue) {
        self.hook.on_change(read_event_value(&event));
    }

    #[wasm_bindgen(js_name = updateShowError)]
    pub fn update_show_error(&self) {
        self.hook.update_show_error();
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.hook.value()
    }

    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.hook.valid()
    }

    #[wasm_bindgen(getter, js_name = showError)]
    pub fn show_error(&self) -> bool {
        self.hook.show_error()
    }

    /// Failing rules as a plain object, e.g. `{ pattern: "..." }`
    #[wasm_bindgen(getter)]
    pub fn errors(&self) -> Result<JsValue, JsValue> {
        to_js(&self.hook.errors())
    }

    /// `{ value, valid, showError, errors }`
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.hook.state())
    }
}

/// Same as `new InputValue(options, customValidation)`
#[wasm_bindgen(js_name = useInputValue)]
pub fn use_input_value(
    options: JsValue,
    custom_validation: Option<Function>,
) -> Result<InputValue, JsValue> {
    InputValue::new(options, custom_validation)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    // Maps become plain objects rather than JS `Map`s
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

// A missing or non-string value reads as ""
fn read_event_value(event: &JsValue) -> String {
    if let Some(value) = event.as_string() {
        return value;
    }

    Reflect::get(event, &JsValue::from_str("target"))
        .ok()
        .filter(|target| target.is_object())
        .and_then(|target| Reflect::get(&target, &JsValue::from_str("value")).ok())
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

// A throwing predicate fails the rule
fn call_predicate(predicate: &Function, value: &str) -> bool {
    match predicate.call1(&JsValue::NULL, &JsValue::from_str(value)) {
        Ok(result) => result.is_truthy(),
        Err(err) => {
            tracing::warn!("customValidation threw for value {:?}", value);
            web_sys::console::warn_2(&JsValue::from_str("rusty-input: customValidation threw"), &err);
            false
        }
    }
}
