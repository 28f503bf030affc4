// src/script/generator.rs

use std::fmt::Write;
use std::path::Path;

use crate::settings::Settings;
use crate::store::Keybind;

/// Build the full AutoHotkey v2 script for the given records.
///
/// The emitted script:
/// - polls `config_path`'s modification time and reloads itself when it
///   changes, so edits made while it runs are picked up;
/// - defines `SendChat(message, delay)` which focuses the configured
///   target window and types Enter / message / Enter;
/// - defines one hotkey block per record and a final exit hotkey.
pub fn generate(binds: &[Keybind], config_path: &Path, settings: &Settings) -> String {
    let cfg = escape_path(config_path);
    let s = &settings.script;

    let mut out = String::new();
    let _ = write!(
        out,
        "#Requires AutoHotkey v2.0\n\
         #SingleInstance Force\n\
         #NoTrayIcon\n\
         Persistent\n\
         \n\
         ; ahkbind - auto-generated script\n\
         ; Do not edit manually - changes will be overwritten\n\
         \n\
         global ScriptPath := A_ScriptFullPath\n\
         global ConfigModTime := FileGetTime(\"{cfg}\", \"M\")\n\
         \n\
         ; Check for config changes every {poll} ms\n\
         SetTimer(CheckConfigUpdate, {poll})\n\
         \n\
         CheckConfigUpdate() {{\n\
         \x20   global ConfigModTime\n\
         \x20   try {{\n\
         \x20       currentModTime := FileGetTime(\"{cfg}\", \"M\")\n\
         \x20       if (currentModTime != ConfigModTime) {{\n\
         \x20           Reload\n\
         \x20       }}\n\
         \x20   }}\n\
         }}\n\
         \n\
         ; Send a chat message to the target window\n\
         SendChat(message, delay := 0) {{\n\
         \x20   if (delay > 0) {{\n\
         \x20       Sleep(delay)\n\
         \x20   }}\n\
         \n\
         \x20   targetWindow := WinExist(\"ahk_class {class}\")\n\
         \x20   if (!targetWindow) {{\n\
         \x20       targetWindow := WinExist(\"{title}\")\n\
         \x20   }}\n\
         \n\
         \x20   if (targetWindow) {{\n\
         \x20       WinActivate\n\
         \x20       Sleep({focus})\n\
         \x20   }}\n\
         \n\
         \x20   Send(\"{{Enter}}\")\n\
         \x20   Sleep({key})\n\
         \x20   Send(message)\n\
         \x20   Sleep({key})\n\
         \x20   Send(\"{{Enter}}\")\n\
         }}\n\
         \n\
         ; Keybind definitions\n",
        poll = s.poll_interval_ms,
        class = s.window_class,
        title = s.window_title,
        focus = s.focus_delay_ms,
        key = s.key_delay_ms,
    );

    for (index, bind) in binds.iter().enumerate() {
        let message = escape_literal(&bind.message);
        let preview: String = bind.message.chars().take(30).collect();
        let _ = write!(
            out,
            "\n\
             ; Keybind {n}: {hotkey} -> {preview}...\n\
             {hotkey}:: {{\n\
             \x20   SendChat(\"{message}\", {delay})\n\
             }}\n",
            n = index + 1,
            hotkey = bind.key,
            delay = bind.delay_ms,
        );
    }

    let _ = write!(
        out,
        "\n\
         ; Exit hotkey\n\
         {exit}:: {{\n\
         \x20   ExitApp\n\
         }}\n",
        exit = settings.interpreter.exit_hotkey,
    );

    out
}

/// Escape a message for embedding in an AHK double-quoted literal:
/// quotes and backticks are doubled.
fn escape_literal(message: &str) -> String {
    message.replace('"', "\"\"").replace('`', "``")
}

/// Escape a filesystem path for embedding in the script (backslashes
/// doubled for the Windows case).
fn escape_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "\\\\")
}
