// src/interp/install.rs

//! Download and silently run the official interpreter installer.
//!
//! The flow is a linear download -> silent-execute -> poll-for-binary
//! sequence. There are no retry or resume semantics beyond reqwest's
//! redirect following; a failure anywhere aborts the installation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::process::Command;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::errors::BindError;
use crate::interp::detect::detect_interpreter;
use crate::interp::status::{InterpStatus, StatusSender};
use crate::paths::Paths;
use crate::settings::Settings;

const DETECT_ATTEMPTS: u32 = 10;
const DETECT_INTERVAL: Duration = Duration::from_millis(500);

/// Install the interpreter and return the detected binary path.
pub async fn install_interpreter(
    paths: &Paths,
    settings: &Settings,
    status: &StatusSender,
) -> Result<PathBuf> {
    let url = settings.interpreter.download_url.clone();
    let installer = paths.installer_file();

    status.push(InterpStatus::Downloading).await;
    download(&url, &installer).await?;

    status.push(InterpStatus::Installing).await;
    let result = run_installer(&installer).await;

    // Clean up the installer regardless of outcome.
    if let Err(err) = tokio::fs::remove_file(&installer).await {
        warn!(path = ?installer, error = %err, "could not remove installer file");
    }
    result?;

    // The installer exits before the binary is necessarily in place;
    // poll detection for a bounded time.
    for attempt in 1..=DETECT_ATTEMPTS {
        if let Some(found) = detect_interpreter(paths, settings) {
            info!(path = ?found, "interpreter installed");
            status.push(InterpStatus::Ready).await;
            return Ok(found);
        }
        info!(attempt, "interpreter not visible yet, waiting");
        sleep(DETECT_INTERVAL).await;
    }

    status.push(InterpStatus::Error).await;
    Err(BindError::InstallNotDetected {
        attempts: DETECT_ATTEMPTS,
    }
    .into())
}

/// Fetch the installer to `dest`, following redirects.
async fn download(url: &str, dest: &Path) -> Result<()> {
    info!(url, dest = ?dest, "downloading installer");

    let response = reqwest::get(url).await.map_err(|e| BindError::Download {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if !response.status().is_success() {
        return Err(BindError::Download {
            url: url.to_string(),
            reason: format!("HTTP status {}", response.status()),
        }
        .into());
    }

    let bytes = response.bytes().await.map_err(|e| BindError::Download {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if let Err(err) = tokio::fs::write(dest, &bytes).await {
        // Don't leave a truncated installer behind.
        let _ = tokio::fs::remove_file(dest).await;
        return Err(err).with_context(|| format!("writing installer to {:?}", dest));
    }

    info!(size = bytes.len(), "installer downloaded");
    Ok(())
}

/// Run the downloaded installer with the silent flag and wait for it.
async fn run_installer(installer: &Path) -> Result<()> {
    info!(path = ?installer, "running silent install");

    let status = Command::new(installer)
        .arg("/silent")
        .status()
        .await
        .with_context(|| format!("spawning installer at {:?}", installer))?;

    if !status.success() {
        return Err(BindError::InstallFailed {
            code: status.code().unwrap_or(-1),
        }
        .into());
    }
    Ok(())
}
