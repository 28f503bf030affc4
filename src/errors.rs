// src/errors.rs

//! Structured error types for ahkbind.
//!
//! Domain-level failures get a `thiserror` enum so callers can match on
//! them; application-level plumbing uses `anyhow` with context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ahkbind operations.
#[derive(Error, Debug)]
pub enum BindError {
    /// The interpreter binary could not be located on this machine.
    #[error("AutoHotkey v2 interpreter not found (run `ahkbind install`)")]
    InterpreterNotFound,

    /// The installer ran but the binary still did not appear.
    #[error("interpreter installed but not found after {attempts} detection attempts")]
    InstallNotDetected { attempts: u32 },

    /// The installer process exited with a failure code.
    #[error("interpreter installer failed with exit code {code}")]
    InstallFailed { code: i32 },

    /// Downloading the installer failed.
    #[error("failed to download installer from '{url}': {reason}")]
    Download { url: String, reason: String },

    /// A keybind record failed validation.
    #[error("invalid keybind: {0}")]
    InvalidKeybind(String),

    /// The trigger key is not a plausible hotkey spec.
    #[error("invalid hotkey '{key}': {reason}")]
    InvalidHotkey { key: String, reason: String },

    /// A keybind index from the CLI is out of range.
    #[error("no keybind at index {index} (store has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Error reading or writing a store/settings file.
    #[error("failed to access '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error without a more specific home.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for ahkbind operations.
pub type Result<T> = std::result::Result<T, BindError>;

impl BindError {
    pub fn invalid_keybind(message: impl Into<String>) -> Self {
        Self::InvalidKeybind(message.into())
    }

    pub fn invalid_hotkey(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHotkey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BindError::invalid_hotkey("??", "unknown key name");
        assert_eq!(err.to_string(), "invalid hotkey '??': unknown key name");

        let err = BindError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "no keybind at index 4 (store has 2 entries)"
        );
    }

    #[test]
    fn error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: BindError = io_err.into();
        assert!(matches!(err, BindError::Io(_)));
    }
}
