// src/settings/mod.rs

//! Optional app settings from `ahkbind.toml`.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load the settings file from the data dir, falling back to defaults
//!   when it is absent (`loader.rs`).

pub mod loader;
pub mod model;

pub use loader::{load_or_default, load_from_path};
pub use model::{InterpreterSection, ScriptSection, Settings};
