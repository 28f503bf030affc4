// src/store/model.rs

use crate::errors::{BindError, Result};
use crate::store::keys;

/// One (trigger, message, delay) record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// AutoHotkey hotkey spec, e.g. `F5`, `^b`, `XButton1`.
    pub key: String,
    /// Chat message sent when the trigger fires.
    pub message: String,
    /// Delay before sending, in milliseconds.
    pub delay_ms: u64,
}

impl Keybind {
    pub fn new(key: impl Into<String>, message: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            delay_ms,
        }
    }

    /// Validate a record before it enters the store.
    ///
    /// Load-time parsing is deliberately lenient (bad lines are dropped);
    /// this stricter check only guards `add` / `edit`.
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(BindError::invalid_keybind("key must not be empty"));
        }
        if self.message.trim().is_empty() {
            return Err(BindError::invalid_keybind("message must not be empty"));
        }
        for (field, value) in [("key", &self.key), ("message", &self.message)] {
            if value.contains('|') {
                return Err(BindError::invalid_keybind(format!(
                    "{field} must not contain '|'"
                )));
            }
            if value.contains('\n') || value.contains('\r') {
                return Err(BindError::invalid_keybind(format!(
                    "{field} must not contain line breaks"
                )));
            }
        }
        keys::validate_hotkey(&self.key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_record_passes() {
        assert!(Keybind::new("F5", "/heal", 0).validate().is_ok());
        assert!(Keybind::new("^b", "hello there", 250).validate().is_ok());
        assert!(Keybind::new("XButton1", "gg", 0).validate().is_ok());
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(Keybind::new("", "/heal", 0).validate().is_err());
        assert!(Keybind::new("F5", "   ", 0).validate().is_err());
    }

    #[test]
    fn rejects_delimiter_and_newlines() {
        assert!(Keybind::new("F5", "a|b", 0).validate().is_err());
        assert!(Keybind::new("F5", "a\nb", 0).validate().is_err());
        assert!(Keybind::new("F|5", "msg", 0).validate().is_err());
    }
}
