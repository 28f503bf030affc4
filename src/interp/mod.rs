// src/interp/mod.rs

//! Lifecycle management of the external AutoHotkey interpreter.
//!
//! - [`detect`] locates an installed v2 binary.
//! - [`install`] downloads and silently runs the official installer.
//! - [`supervisor`] spawns/kills the interpreter and tracks at most one
//!   child, pushing [`status::InterpStatus`] events to whoever listens.

pub mod detect;
pub mod install;
pub mod status;
pub mod supervisor;

pub use detect::detect_interpreter;
pub use install::install_interpreter;
pub use status::{InterpStatus, StatusSender};
pub use supervisor::{Supervisor, kill_by_script, running_count, spawn_detached};
