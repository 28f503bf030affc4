// src/interp/detect.rs

//! Locating an installed AutoHotkey v2 binary.
//!
//! Probes a fixed list of candidate locations (portable layouts under the
//! data dir, then the standard Windows install roots), and finally scans
//! `PATH`. The first existing candidate wins.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::paths::Paths;
use crate::settings::Settings;

const BINARY_NAMES: &[&str] = &["AutoHotkey64.exe", "AutoHotkey32.exe", "AutoHotkey.exe"];

/// Find the interpreter binary, honouring the settings override.
///
/// Returns `None` if nothing is found; the caller decides whether that
/// means "install it" or "give up".
pub fn detect_interpreter(paths: &Paths, settings: &Settings) -> Option<PathBuf> {
    if let Some(configured) = &settings.interpreter.path {
        if configured.exists() {
            debug!(path = ?configured, "using configured interpreter path");
            return Some(configured.clone());
        }
        debug!(path = ?configured, "configured interpreter path does not exist, falling back to detection");
    }

    for candidate in candidate_paths(paths) {
        if candidate.exists() {
            debug!(path = ?candidate, "found interpreter at candidate path");
            return Some(candidate);
        }
    }

    search_path_env()
}

/// Ordered candidate locations relative to the data dir plus the standard
/// Windows install roots.
fn candidate_paths(paths: &Paths) -> Vec<PathBuf> {
    let data = paths.data_dir();
    let mut candidates = vec![
        data.join("AutoHotkey").join("v2").join("AutoHotkey64.exe"),
        data.join("AutoHotkey").join("v2").join("AutoHotkey32.exe"),
        data.join("AutoHotkey").join("AutoHotkey64.exe"),
        data.join("AutoHotkey").join("AutoHotkey32.exe"),
        data.join("AutoHotkey64.exe"),
        data.join("AutoHotkey32.exe"),
    ];

    if cfg!(windows) {
        for root in [
            PathBuf::from("C:\\Program Files\\AutoHotkey\\v2"),
            PathBuf::from("C:\\Program Files\\AutoHotkey"),
        ] {
            candidates.push(root.join("AutoHotkey64.exe"));
            candidates.push(root.join("AutoHotkey32.exe"));
        }
        if let Some(local) = std::env::var_os("LOCALAPPDATA") {
            let base = PathBuf::from(local)
                .join("Programs")
                .join("AutoHotkey")
                .join("v2");
            candidates.push(base.join("AutoHotkey64.exe"));
            candidates.push(base.join("AutoHotkey32.exe"));
        }
    }

    candidates
}

/// Scan `PATH` for a known binary name, preferring hits whose path
/// mentions `v2` (the generated script is v2-only).
fn search_path_env() -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    let mut fallback: Option<PathBuf> = None;

    for dir in std::env::split_paths(&path_var) {
        for name in BINARY_NAMES {
            let candidate = dir.join(name);
            if !candidate.exists() {
                continue;
            }
            if path_mentions_v2(&candidate) {
                debug!(path = ?candidate, "found v2 interpreter on PATH");
                return Some(candidate);
            }
            fallback.get_or_insert(candidate);
        }
    }

    if let Some(ref p) = fallback {
        debug!(path = ?p, "found interpreter on PATH (version unverified)");
    }
    fallback
}

fn path_mentions_v2(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().contains("v2")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_portable_binary_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let bin_dir = dir.path().join("AutoHotkey").join("v2");
        fs::create_dir_all(&bin_dir).unwrap();
        let bin = bin_dir.join("AutoHotkey64.exe");
        fs::write(&bin, b"").unwrap();

        let paths = Paths::in_dir(dir.path());
        let found = detect_interpreter(&paths, &Settings::default());
        assert_eq!(found, Some(bin));
    }

    #[test]
    fn settings_override_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("custom-ahk.exe");
        fs::write(&bin, b"").unwrap();

        let mut settings = Settings::default();
        settings.interpreter.path = Some(bin.clone());

        let paths = Paths::in_dir(dir.path().join("elsewhere"));
        assert_eq!(detect_interpreter(&paths, &settings), Some(bin));
    }

    #[test]
    fn missing_override_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("AutoHotkey64.exe");
        fs::write(&bin, b"").unwrap();

        let mut settings = Settings::default();
        settings.interpreter.path = Some(dir.path().join("not-there.exe"));

        let paths = Paths::in_dir(dir.path());
        assert_eq!(detect_interpreter(&paths, &settings), Some(bin));
    }

    #[test]
    fn nothing_found_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::in_dir(dir.path());
        // No binaries anywhere under the temp dir; PATH may still hit on a
        // developer machine with AHK installed, which is fine to tolerate.
        let found = detect_interpreter(&paths, &Settings::default());
        if let Some(p) = found {
            assert!(p.exists());
        }
    }

    #[test]
    fn v2_path_detection() {
        assert!(path_mentions_v2(Path::new("C:/AutoHotkey/v2/AutoHotkey64.exe")));
        assert!(!path_mentions_v2(Path::new("C:/AutoHotkey/AutoHotkey.exe")));
    }
}
