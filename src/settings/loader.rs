// src/settings/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::settings::model::Settings;

/// Load settings from a given path.
///
/// Fails if the file is unreadable or not valid TOML; a missing file is
/// handled by [`load_or_default`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading settings file at {:?}", path))?;

    let settings: Settings = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML settings from {:?}", path))?;

    Ok(settings)
}

/// Load settings from path, or return defaults when the file is absent.
///
/// This is the entry point the rest of the application uses: the settings
/// file is entirely optional.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(?path, "no settings file, using defaults");
        return Ok(Settings::default());
    }
    load_from_path(path)
}
