// src/watch.rs

//! Filesystem watcher on the data dir.
//!
//! Bridges `notify`'s synchronous callback into the async session loop:
//! changes to the store file become [`SessionEvent::ConfigChanged`] so
//! out-of-band edits (a text editor on `keybinds.txt`) get the script
//! regenerated.

use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::paths::{CONFIG_FILE_NAME, Paths};
use crate::session::SessionEvent;

/// Handle keeping the underlying `RecommendedWatcher` alive.
/// Dropping this handle stops file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Watch the data dir (non-recursively) and forward store-file changes to
/// the session loop.
pub fn spawn_watcher(
    paths: &Paths,
    session_tx: mpsc::Sender<SessionEvent>,
) -> Result<WatcherHandle> {
    let root = paths.data_dir().to_path_buf();

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    // Can't log via tracing from here; fall back to stderr.
                    eprintln!("ahkbind: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("ahkbind: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&root, RecursiveMode::NonRecursive)?;
    info!("file watcher started on {:?}", root);

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            debug!("received notify event: {:?}", event);

            let touches_config = event
                .paths
                .iter()
                .any(|p| p.file_name().is_some_and(|n| n == CONFIG_FILE_NAME));
            if !touches_config {
                continue;
            }

            if let Err(err) = session_tx.send(SessionEvent::ConfigChanged).await {
                warn!("failed to send SessionEvent::ConfigChanged: {err}");
                // Session loop gone; no point keeping this task alive.
                return;
            }
        }

        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}
