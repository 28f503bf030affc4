// src/cli.rs

//! CLI argument parsing using `clap` (derive feature).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `ahkbind`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ahkbind",
    version,
    about = "Manage hotkey-to-message bindings and supervise the AutoHotkey interpreter that enforces them.",
    long_about = None
)]
pub struct CliArgs {
    /// Data directory holding keybinds.txt / keybinds.ahk / ahkbind.toml.
    ///
    /// Default: `AHKBIND_DATA`, else the executable's directory.
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `AHKBIND_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print all keybinds in the store.
    List,

    /// Add a keybind and regenerate the script.
    Add {
        /// Hotkey spec, e.g. `F5`, `^b`, `XButton1`.
        key: String,
        /// Message to send when the hotkey fires.
        message: String,
        /// Delay before sending, in milliseconds.
        #[arg(long, value_name = "MS", default_value_t = 0)]
        delay: u64,
    },

    /// Edit the keybind at a given index (as shown by `list`).
    Edit {
        index: usize,
        #[arg(long)]
        key: Option<String>,
        #[arg(long)]
        message: Option<String>,
        #[arg(long, value_name = "MS")]
        delay: Option<u64>,
    },

    /// Remove the keybind at a given index.
    Remove { index: usize },

    /// Regenerate the script from the store without touching the interpreter.
    Gen,

    /// Report interpreter installation and running state.
    Status,

    /// Download and silently install the AutoHotkey v2 interpreter.
    Install,

    /// Start the interpreter detached and exit.
    Start,

    /// Best-effort stop of any interpreter running our script.
    Stop,

    /// Stop, then start again.
    Restart,

    /// Run in the foreground: supervise the interpreter and watch the
    /// store file for out-of-band edits, until Ctrl-C.
    Run,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
