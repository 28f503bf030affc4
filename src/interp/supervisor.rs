// src/interp/supervisor.rs

//! Spawning and killing the interpreter process.
//!
//! At most one child is tracked at a time: `start` implicitly stops any
//! previously tracked child. Stopping is best-effort: signal the handle
//! if we have one, then sweep the process table for interpreter processes
//! running our script, with no confirmation of termination.

use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use sysinfo::{ProcessesToUpdate, System};
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::errors::BindError;
use crate::interp::detect::detect_interpreter;
use crate::interp::status::{InterpStatus, StatusSender};
use crate::paths::Paths;
use crate::settings::Settings;
use crate::store;

pub struct Supervisor {
    paths: Paths,
    settings: Settings,
    status: StatusSender,
    child: Option<Child>,
}

impl Supervisor {
    pub fn new(paths: Paths, settings: Settings, status: StatusSender) -> Self {
        Self {
            paths,
            settings,
            status,
            child: None,
        }
    }

    /// Whether a child is currently tracked.
    pub fn has_child(&self) -> bool {
        self.child.is_some()
    }

    /// Start the interpreter on the generated script, stopping any
    /// previously tracked child first.
    ///
    /// The child is spawned with `kill_on_drop`, so dropping the
    /// supervisor tears the interpreter down with it.
    pub async fn start(&mut self) -> Result<()> {
        self.stop().await;

        let Some(interpreter) = detect_interpreter(&self.paths, &self.settings) else {
            self.status.push(InterpStatus::NotInstalled).await;
            return Err(BindError::InterpreterNotFound.into());
        };

        let script = self.paths.script_file();
        if !script.exists() {
            // First run: materialize the script from whatever the store holds.
            let binds = store::load_store(&self.paths)?;
            store::save_store(&self.paths, &self.settings, &binds)?;
        }

        info!(interpreter = ?interpreter, script = ?script, "starting interpreter");
        let child = Command::new(&interpreter)
            .arg(&script)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("spawning interpreter at {:?}", interpreter))?;

        self.child = Some(child);
        self.status.push(InterpStatus::Running).await;
        Ok(())
    }

    /// Stop the interpreter: signal the tracked handle, then sweep the
    /// process table. Never fails; termination is not confirmed.
    pub async fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            match child.start_kill() {
                Ok(()) => {
                    // Reap so the handle doesn't linger as a zombie.
                    let _ = child.wait().await;
                    debug!("tracked interpreter child signalled");
                }
                Err(err) => warn!(error = %err, "could not signal interpreter child"),
            }
        }

        let swept = kill_by_script();
        if swept > 0 {
            info!(count = swept, "killed stray interpreter processes");
        }

        self.status.push(InterpStatus::Stopped).await;
    }

    /// Stop, pause briefly, start again.
    pub async fn restart(&mut self) -> Result<()> {
        self.stop().await;
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        self.start().await
    }

    /// Wait for the tracked child to exit on its own.
    ///
    /// Pends forever when no child is tracked, so this is safe to use as
    /// one branch of a `select!` loop.
    pub async fn wait_exit(&mut self) -> Option<ExitStatus> {
        match &mut self.child {
            Some(child) => {
                let status = child.wait().await.ok();
                self.child = None;
                status
            }
            None => std::future::pending().await,
        }
    }
}

/// Kill interpreter processes whose command line mentions our script file.
///
/// This is the cross-invocation fallback for `stop`: a fresh CLI process
/// has no handle to the child a previous `start` spawned. Matches on the
/// script's file name, like the original's kill-by-window-title.
pub fn kill_by_script() -> usize {
    let script_name = crate::paths::SCRIPT_FILE_NAME.to_lowercase();

    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::All, true);

    let mut killed = 0;
    for process in system.processes().values() {
        let name = process.name().to_string_lossy().to_lowercase();
        if !name.contains("autohotkey") {
            continue;
        }
        let runs_our_script = process
            .cmd()
            .iter()
            .any(|arg| arg.to_string_lossy().to_lowercase().contains(&script_name));
        if runs_our_script && process.kill() {
            killed += 1;
        }
    }
    killed
}

/// Count interpreter processes currently running our script (for `status`).
pub fn running_count() -> usize {
    let script_name = crate::paths::SCRIPT_FILE_NAME.to_lowercase();

    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::All, true);

    system
        .processes()
        .values()
        .filter(|process| {
            process
                .name()
                .to_string_lossy()
                .to_lowercase()
                .contains("autohotkey")
                && process
                    .cmd()
                    .iter()
                    .any(|arg| arg.to_string_lossy().to_lowercase().contains(&script_name))
        })
        .count()
}

/// Spawn the interpreter detached from this process (one-shot `start`).
///
/// The CLI exits immediately afterwards, so no handle is kept and nothing
/// kills the child on drop.
pub fn spawn_detached(paths: &Paths, settings: &Settings) -> Result<()> {
    let Some(interpreter) = detect_interpreter(paths, settings) else {
        return Err(BindError::InterpreterNotFound.into());
    };

    let script = paths.script_file();
    if !script.exists() {
        let binds = store::load_store(paths)?;
        store::save_store(paths, settings, &binds)?;
    }

    let mut cmd = std::process::Command::new(&interpreter);
    cmd.arg(&script)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }

    cmd.spawn()
        .with_context(|| format!("spawning interpreter at {:?}", interpreter))?;

    info!(interpreter = ?interpreter, script = ?script, "interpreter started (detached)");
    Ok(())
}
