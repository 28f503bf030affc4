// src/store/file.rs

use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::paths::Paths;
use crate::script;
use crate::settings::Settings;
use crate::store::model::Keybind;
use crate::store::parse::{parse_store, serialize_store};

/// Load all records from the store file.
///
/// A missing file is an empty store, not an error.
pub fn load_store(paths: &Paths) -> Result<Vec<Keybind>> {
    let path = paths.config_file();
    if !path.exists() {
        debug!(?path, "no store file yet, starting empty");
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("reading keybind store at {:?}", path))?;
    Ok(parse_store(&contents))
}

/// Persist the records and regenerate the script artifact.
///
/// The two files are always written together, config first, so a running
/// interpreter sees the config mtime change only after-the-fact and
/// reloads an already-regenerated script. Last write wins; no locking.
pub fn save_store(paths: &Paths, settings: &Settings, binds: &[Keybind]) -> Result<()> {
    if let Some(parent) = paths.config_file().parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating data dir at {:?}", parent))?;
    }

    let config_path = paths.config_file();
    fs::write(&config_path, serialize_store(binds))
        .with_context(|| format!("writing keybind store to {:?}", config_path))?;

    let script_path = paths.script_file();
    let script_text = script::generate(binds, &config_path, settings);
    fs::write(&script_path, script_text)
        .with_context(|| format!("writing generated script to {:?}", script_path))?;

    info!(
        binds = binds.len(),
        config = ?config_path,
        script = ?script_path,
        "store saved and script regenerated"
    );
    Ok(())
}

/// Regenerate only the script artifact from the current store contents.
///
/// Used when the config file changed out-of-band: rewriting the config
/// here would re-trigger the file watcher.
pub fn regenerate_script(paths: &Paths, settings: &Settings) -> Result<usize> {
    let binds = load_store(paths)?;
    let script_path = paths.script_file();
    let script_text = script::generate(&binds, &paths.config_file(), settings);
    fs::write(&script_path, script_text)
        .with_context(|| format!("writing generated script to {:?}", script_path))?;
    Ok(binds.len())
}
