// src/paths.rs

//! Data-directory resolution and artifact paths.
//!
//! Everything ahkbind touches lives in one flat directory, like the
//! portable layout of the original tool:
//!
//! - `keybinds.txt`  - the pipe-delimited record store
//! - `keybinds.ahk`  - the generated interpreter script
//! - `ahkbind.toml`  - optional app settings
//! - `AutoHotkey_v2_Setup.exe` - transient installer download
//!
//! Resolution order for the directory itself:
//! 1. `--data-dir` CLI flag
//! 2. `AHKBIND_DATA` environment variable
//! 3. directory containing the executable
//! 4. current working directory

use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "keybinds.txt";
pub const SCRIPT_FILE_NAME: &str = "keybinds.ahk";
pub const SETTINGS_FILE_NAME: &str = "ahkbind.toml";
pub const INSTALLER_FILE_NAME: &str = "AutoHotkey_v2_Setup.exe";

/// Resolved locations of all on-disk artifacts.
#[derive(Debug, Clone)]
pub struct Paths {
    data_dir: PathBuf,
}

impl Paths {
    /// Resolve the data directory from an optional CLI override.
    pub fn resolve(cli_dir: Option<&Path>) -> Self {
        let data_dir = cli_dir
            .map(|p| p.to_path_buf())
            .or_else(|| std::env::var_os("AHKBIND_DATA").map(PathBuf::from))
            .or_else(exe_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self { data_dir }
    }

    /// Use an explicit directory (tests, programmatic use).
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn script_file(&self) -> PathBuf {
        self.data_dir.join(SCRIPT_FILE_NAME)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE_NAME)
    }

    pub fn installer_file(&self) -> PathBuf {
        self.data_dir.join(INSTALLER_FILE_NAME)
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let paths = Paths::resolve(Some(Path::new("/tmp/binds")));
        assert_eq!(paths.data_dir(), Path::new("/tmp/binds"));
        assert_eq!(paths.config_file(), Path::new("/tmp/binds/keybinds.txt"));
        assert_eq!(paths.script_file(), Path::new("/tmp/binds/keybinds.ahk"));
    }

    #[test]
    fn in_dir_joins_artifacts() {
        let paths = Paths::in_dir("x");
        assert_eq!(paths.settings_file(), Path::new("x/ahkbind.toml"));
        assert_eq!(
            paths.installer_file(),
            Path::new("x/AutoHotkey_v2_Setup.exe")
        );
    }
}
