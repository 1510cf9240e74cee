// File: src/hook.rs
// Purpose: The stateful input value hook

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::config::InputConfig;
use crate::evaluate::{Errors, Evaluation};
use crate::event::ChangeEvent;
use crate::rule::Rule;

/// Observable state of one input
///
/// `valid` is true exactly when `errors` is empty, and `show_error` is
/// `!valid` after every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputState {
    pub value: String,
    pub valid: bool,
    pub show_error: bool,
    pub errors: Errors,
}

impl InputState {
    fn from_evaluation(value: String, evaluation: Evaluation) -> Self {
        Self {
            value,
            valid: evaluation.result,
            show_error: !evaluation.result,
            errors: evaluation.errors,
        }
    }
}

/// Handle to an input's value and validation state
///
/// Cloning is cheap and every clone sees the same state, so a clone can be
/// moved into each UI callback. The handle is single-threaded.
#[derive(Debug, Clone)]
pub struct UseInputValue {
    config: Rc<InputConfig>,
    state: Rc<RefCell<InputState>>,
}

/// Create an input hook from its configuration
///
/// The initial value is evaluated right away, so an invalid initial value is
/// flagged before any user interaction.
pub fn use_input_value(config: InputConfig) -> UseInputValue {
    UseInputValue::new(config)
}

impl UseInputValue {
    pub fn new(config: InputConfig) -> Self {
        let value = config.initial_value().to_string();
        let evaluation = config.evaluate(&value);

        tracing::debug!(
            required = config.required(),
            pattern = config.pattern().as_str(),
            valid = evaluation.result,
            "Created input value hook"
        );

        Self {
            config: Rc::new(config),
            state: Rc::new(RefCell::new(InputState::from_evaluation(value, evaluation))),
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    pub fn valid(&self) -> bool {
        self.state.borrow().valid
    }

    pub fn show_error(&self) -> bool {
        self.state.borrow().show_error
    }

    pub fn errors(&self) -> Errors {
        self.state.borrow().errors.clone()
    }

    /// Message of a currently failing rule
    pub fn error(&self, rule: Rule) -> Option<String> {
        self.state.borrow().errors.get(&rule).cloned()
    }

    /// Snapshot of the whole state
    pub fn state(&self) -> InputState {
        self.state.borrow().clone()
    }

    /// Take the new value from `event`, evaluate it, and replace the state
    pub fn on_change<E: ChangeEvent>(&self, event: E) {
        let value = event.target_value();
        // No borrow is held while the predicate runs; it may read this hook.
        let evaluation = self.config.evaluate(&value);
        *self.state.borrow_mut() = InputState::from_evaluation(value, evaluation);
    }

    /// Re-evaluate the current value, e.g. when the input loses focus
    pub fn update_show_error(&self) {
        let value = self.value();
        let evaluation = self.config.evaluate(&value);

        let mut state = self.state.borrow_mut();
        state.valid = evaluation.result;
        state.show_error = !evaluation.result;
        state.errors = evaluation.errors;
    }

    /// `on_change` bound to a clone of this handle, for an input's change prop
    pub fn on_change_callback<E: ChangeEvent + 'static>(&self) -> impl Fn(E) + 'static {
        let hook = self.clone();
        move |event| hook.on_change(event)
    }

    /// `update_show_error` bound to a clone of this handle, for a blur prop
    pub fn on_blur_callback(&self) -> impl Fn() + 'static {
        let hook = self.clone();
        move || hook.update_show_error()
    }
}
