// src/interp/status.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::info;

/// Interpreter lifecycle status, pushed to listeners as it changes.
///
/// This is the channel-based replacement for the original tool's
/// status notifications to its UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpStatus {
    NotInstalled,
    Ready,
    Downloading,
    Installing,
    Running,
    Stopped,
    Error,
}

impl fmt::Display for InterpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InterpStatus::NotInstalled => "not-installed",
            InterpStatus::Ready => "ready",
            InterpStatus::Downloading => "downloading",
            InterpStatus::Installing => "installing",
            InterpStatus::Running => "running",
            InterpStatus::Stopped => "stopped",
            InterpStatus::Error => "error",
        };
        f.write_str(s)
    }
}

/// Optional push channel for status transitions.
///
/// When no listener is attached (one-shot CLI commands), transitions are
/// still logged via `tracing`.
#[derive(Debug, Clone, Default)]
pub struct StatusSender {
    tx: Option<mpsc::Sender<InterpStatus>>,
}

impl StatusSender {
    pub fn new(tx: mpsc::Sender<InterpStatus>) -> Self {
        Self { tx: Some(tx) }
    }

    /// A sender that only logs.
    pub fn detached() -> Self {
        Self { tx: None }
    }

    pub async fn push(&self, status: InterpStatus) {
        info!(%status, "interpreter status");
        if let Some(tx) = &self.tx {
            // Listener gone is fine; the log line above already happened.
            let _ = tx.send(status).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_strings() {
        assert_eq!(InterpStatus::NotInstalled.to_string(), "not-installed");
        assert_eq!(InterpStatus::Running.to_string(), "running");
        assert_eq!(InterpStatus::Downloading.to_string(), "downloading");
    }

    #[tokio::test]
    async fn push_reaches_listener() {
        let (tx, mut rx) = mpsc::channel(4);
        let sender = StatusSender::new(tx);
        sender.push(InterpStatus::Ready).await;
        assert_eq!(rx.recv().await, Some(InterpStatus::Ready));
    }

    #[tokio::test]
    async fn detached_push_is_a_noop() {
        StatusSender::detached().push(InterpStatus::Error).await;
    }
}
