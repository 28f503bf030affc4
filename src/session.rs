// src/session.rs

//! Foreground supervision mode (`ahkbind run`).
//!
//! A single event loop ties together the supervisor, the file watcher and
//! Ctrl-C handling:
//! - watcher sends `ConfigChanged`
//! - the status channel carries interpreter lifecycle transitions
//! - Ctrl-C sends `ShutdownRequested`
//! - child exit is observed directly off the supervisor

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::interp::status::{InterpStatus, StatusSender};
use crate::interp::supervisor::Supervisor;
use crate::paths::Paths;
use crate::settings::Settings;
use crate::store;
use crate::watch;

/// Events consumed by the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The store file changed on disk (out-of-band edit).
    ConfigChanged,
    ShutdownRequested,
}

/// Run the foreground supervision session until Ctrl-C.
pub async fn run_session(paths: Paths, settings: Settings) -> Result<()> {
    let (session_tx, mut session_rx) = mpsc::channel::<SessionEvent>(64);
    let (status_tx, mut status_rx) = mpsc::channel::<InterpStatus>(16);

    // Make sure both artifacts exist and agree before starting.
    let binds = store::load_store(&paths)?;
    store::save_store(&paths, &settings, &binds)?;
    info!(binds = binds.len(), "session starting");

    let mut supervisor = Supervisor::new(
        paths.clone(),
        settings.clone(),
        StatusSender::new(status_tx),
    );
    supervisor.start().await?;

    let _watcher_handle = watch::spawn_watcher(&paths, session_tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = session_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(SessionEvent::ShutdownRequested).await;
        });
    }

    loop {
        // Resolve the select to a plain value first; the `wait_exit` future
        // mutably borrows the supervisor, which the handlers below also need.
        let turn = tokio::select! {
            event = session_rx.recv() => Turn::Session(event),
            status = status_rx.recv() => Turn::Status(status),
            exit = supervisor.wait_exit() => Turn::ChildExited(exit),
        };

        match turn {
            Turn::Session(None) => break,
            Turn::Session(Some(event)) => {
                debug!(?event, "session received event");
                match event {
                    SessionEvent::ConfigChanged => {
                        handle_config_changed(&paths, &settings);
                    }
                    SessionEvent::ShutdownRequested => {
                        info!("shutdown requested, stopping interpreter");
                        supervisor.stop().await;
                        break;
                    }
                }
            }
            Turn::Status(Some(status)) => {
                println!("status: {status}");
            }
            Turn::Status(None) => {}
            Turn::ChildExited(exit) => {
                match exit {
                    Some(code) => warn!(?code, "interpreter exited on its own"),
                    None => warn!("interpreter exited (status unknown)"),
                }
                println!("status: {}", InterpStatus::Stopped);
            }
        }
    }

    info!("session ended");
    Ok(())
}

enum Turn {
    Session(Option<SessionEvent>),
    Status(Option<InterpStatus>),
    ChildExited(Option<std::process::ExitStatus>),
}

/// Reload the store and regenerate the script. The running script notices
/// the config mtime change itself and reloads the fresh script.
fn handle_config_changed(paths: &Paths, settings: &Settings) {
    match store::file::regenerate_script(paths, settings) {
        Ok(binds) => info!(binds, "store changed on disk, script regenerated"),
        Err(err) => warn!(error = %err, "failed to regenerate script after config change"),
    }
}
