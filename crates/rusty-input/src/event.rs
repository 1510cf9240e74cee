//! Change events carrying the new raw value of an input

use serde::{Deserialize, Serialize};

/// Anything a UI layer hands to `on_change`
pub trait ChangeEvent {
    /// The new raw value, as `event.target.value` would read it
    fn target_value(&self) -> String;
}

/// Element that fired the event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTarget {
    #[serde(default)]
    pub value: String,
}

/// A change event shaped like a DOM `input`/`change` event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    #[serde(default)]
    pub target: EventTarget,
}

impl InputEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            target: EventTarget {
                value: value.into(),
            },
        }
    }
}

impl ChangeEvent for InputEvent {
    fn target_value(&self) -> String {
        self.target.value.clone()
    }
}

impl ChangeEvent for &InputEvent {
    fn target_value(&self) -> String {
        self.target.value.clone()
    }
}

impl ChangeEvent for &str {
    fn target_value(&self) -> String {
        (*self).to_string()
    }
}

impl ChangeEvent for String {
    fn target_value(&self) -> String {
        self.clone()
    }
}

impl ChangeEvent for &String {
    fn target_value(&self) -> String {
        (*self).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_shaped_event_from_json() {
        let event: InputEvent = serde_json::from_str(r#"{ "target": { "value": "hello" } }"#).unwrap();
        assert_eq!(event.target_value(), "hello");
    }

    #[test]
    fn test_missing_value_reads_empty() {
        let event: InputEvent = serde_json::from_str(r#"{ "target": {} }"#).unwrap();
        assert_eq!(event.target_value(), "");
    }

    #[test]
    fn test_plain_strings() {
        assert_eq!("abc".target_value(), "abc");
        assert_eq!(String::from("abc").target_value(), "abc");
        assert_eq!(InputEvent::new("abc").target_value(), "abc");
    }
}
