// src/store/mod.rs

//! The keybind record store.
//!
//! Responsibilities:
//! - Define the record type and its validation (`model.rs`, `keys.rs`).
//! - Parse and serialize the flat `KEY|MESSAGE|DELAY_MS` line format
//!   (`parse.rs`).
//! - Load/save the store file, regenerating the script artifact on every
//!   save (`file.rs`).

pub mod file;
pub mod keys;
pub mod model;
pub mod parse;

pub use file::{load_store, regenerate_script, save_store};
pub use model::Keybind;
pub use parse::{parse_store, serialize_store};
