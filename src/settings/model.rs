// src/settings/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Official AutoHotkey v2 installer download.
pub const DEFAULT_DOWNLOAD_URL: &str = "https://www.autohotkey.com/download/ahk-v2.exe";

/// Top-level settings as read from `ahkbind.toml`.
///
/// The whole file is optional, as is every section and field:
///
/// ```toml
/// [interpreter]
/// path = "C:/Tools/AutoHotkey64.exe"
///
/// [script]
/// window_title = "GTA:SA:MP"
/// poll_interval_ms = 1000
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    /// `[interpreter]`: where to find / fetch the external interpreter.
    #[serde(default)]
    pub interpreter: InterpreterSection,

    /// `[script]`: knobs baked into the generated script.
    #[serde(default)]
    pub script: ScriptSection,
}

/// `[interpreter]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct InterpreterSection {
    /// Explicit interpreter binary; short-circuits detection when set.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Installer download URL.
    #[serde(default = "default_download_url")]
    pub download_url: String,

    /// Hotkey that makes the generated script exit itself.
    #[serde(default = "default_exit_hotkey")]
    pub exit_hotkey: String,
}

fn default_download_url() -> String {
    DEFAULT_DOWNLOAD_URL.to_string()
}

fn default_exit_hotkey() -> String {
    "^+!e".to_string()
}

impl Default for InterpreterSection {
    fn default() -> Self {
        Self {
            path: None,
            download_url: default_download_url(),
            exit_hotkey: default_exit_hotkey(),
        }
    }
}

/// `[script]` section.
///
/// Defaults reproduce the window targeting and timing constants of the
/// original tool (SA-MP chat).
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptSection {
    /// `WinExist("ahk_class ...")` target, tried first.
    #[serde(default = "default_window_class")]
    pub window_class: String,

    /// Plain window-title target, tried second.
    #[serde(default = "default_window_title")]
    pub window_title: String,

    /// How often the script polls the config file's mtime.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Sleep between Enter / message / Enter sends.
    #[serde(default = "default_key_delay_ms")]
    pub key_delay_ms: u64,

    /// Sleep after activating the target window.
    #[serde(default = "default_focus_delay_ms")]
    pub focus_delay_ms: u64,
}

fn default_window_class() -> String {
    "Grand theft auto San Andreas".to_string()
}

fn default_window_title() -> String {
    "GTA:SA:MP".to_string()
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_key_delay_ms() -> u64 {
    30
}

fn default_focus_delay_ms() -> u64 {
    50
}

impl Default for ScriptSection {
    fn default() -> Self {
        Self {
            window_class: default_window_class(),
            window_title: default_window_title(),
            poll_interval_ms: default_poll_interval_ms(),
            key_delay_ms: default_key_delay_ms(),
            focus_delay_ms: default_focus_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let s: Settings = toml::from_str("").unwrap();
        assert!(s.interpreter.path.is_none());
        assert_eq!(s.interpreter.download_url, DEFAULT_DOWNLOAD_URL);
        assert_eq!(s.interpreter.exit_hotkey, "^+!e");
        assert_eq!(s.script.poll_interval_ms, 2000);
        assert_eq!(s.script.key_delay_ms, 30);
        assert_eq!(s.script.focus_delay_ms, 50);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let s: Settings = toml::from_str(
            r#"
            [script]
            window_title = "My Game"
            poll_interval_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(s.script.window_title, "My Game");
        assert_eq!(s.script.poll_interval_ms, 500);
        assert_eq!(s.script.window_class, "Grand theft auto San Andreas");
        assert_eq!(s.interpreter.download_url, DEFAULT_DOWNLOAD_URL);
    }
}
