// src/store/keys.rs

//! Hotkey-spec sanity checking.
//!
//! We never simulate or parse hotkeys for real (the external interpreter
//! owns that); this only catches obvious typos before a key string is
//! written into the store and baked into a script.
//!
//! A spec is: optional modifier prefix characters followed by either a
//! single printable character (`b`, `5`, `,`) or a known key name (`F5`,
//! `NumpadAdd`, `XButton1`, ...). Names compare case-insensitively.

use crate::errors::{BindError, Result};

/// AutoHotkey modifier prefix symbols.
const MODIFIER_CHARS: &[char] = &['^', '!', '+', '#', '<', '>', '*', '~', '$'];

/// Named keys the interpreter understands, matching what the original
/// key-recorder could produce plus the F13–F24 extras.
const KEY_NAMES: &[&str] = &[
    "escape", "backspace", "tab", "enter", "space", "capslock",
    "insert", "delete", "home", "end", "pgup", "pgdn",
    "up", "down", "left", "right",
    "numlock", "scrolllock", "printscreen", "pause", "appskey",
    "numpad0", "numpad1", "numpad2", "numpad3", "numpad4",
    "numpad5", "numpad6", "numpad7", "numpad8", "numpad9",
    "numpaddot", "numpaddiv", "numpadmult", "numpadsub", "numpadadd",
    "numpadenter",
    "lbutton", "rbutton", "mbutton", "xbutton1", "xbutton2",
    "wheelup", "wheeldown", "wheelleft", "wheelright",
];

/// Check that `spec` looks like a hotkey the interpreter will accept.
pub fn validate_hotkey(spec: &str) -> Result<()> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(BindError::invalid_hotkey(spec, "empty hotkey"));
    }

    // Strip leading modifier symbols.
    let rest: &str = spec.trim_start_matches(|c| MODIFIER_CHARS.contains(&c));
    if rest.is_empty() {
        return Err(BindError::invalid_hotkey(spec, "modifiers without a key"));
    }

    // A single printable non-whitespace character is always fine.
    let mut chars = rest.chars();
    let first = chars.next().unwrap_or(' ');
    if chars.next().is_none() {
        if first.is_whitespace() {
            return Err(BindError::invalid_hotkey(spec, "whitespace key"));
        }
        return Ok(());
    }

    let lower = rest.to_lowercase();

    // Function keys F1..F24.
    if let Some(num) = lower.strip_prefix('f') {
        if let Ok(n) = num.parse::<u8>() {
            if (1..=24).contains(&n) {
                return Ok(());
            }
            return Err(BindError::invalid_hotkey(spec, "function key out of range"));
        }
    }

    if KEY_NAMES.contains(&lower.as_str()) {
        return Ok(());
    }

    Err(BindError::invalid_hotkey(spec, "unknown key name"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_characters() {
        assert!(validate_hotkey("b").is_ok());
        assert!(validate_hotkey("5").is_ok());
        assert!(validate_hotkey("`").is_ok());
        assert!(validate_hotkey(",").is_ok());
    }

    #[test]
    fn modified_keys() {
        assert!(validate_hotkey("^b").is_ok());
        assert!(validate_hotkey("^+!e").is_ok());
        assert!(validate_hotkey("#Space").is_ok());
        assert!(validate_hotkey("~LButton").is_ok());
    }

    #[test]
    fn named_keys_case_insensitive() {
        assert!(validate_hotkey("F5").is_ok());
        assert!(validate_hotkey("f24").is_ok());
        assert!(validate_hotkey("XButton1").is_ok());
        assert!(validate_hotkey("wheelup").is_ok());
        assert!(validate_hotkey("NumpadAdd").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(validate_hotkey("").is_err());
        assert!(validate_hotkey("^!").is_err());
        assert!(validate_hotkey("F25").is_err());
        assert!(validate_hotkey("NotAKey").is_err());
        assert!(validate_hotkey(" ").is_err());
    }
}
