// src/script/mod.rs

//! Generation of the AutoHotkey v2 script consumed by the external
//! interpreter. We only emit text here; everything about how it executes
//! (hotkey hooks, window focus, Send) is the interpreter's business.

pub mod generator;

pub use generator::generate;
