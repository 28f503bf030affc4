// src/lib.rs

pub mod cli;
pub mod errors;
pub mod interp;
pub mod logging;
pub mod paths;
pub mod script;
pub mod session;
pub mod settings;
pub mod store;
pub mod watch;

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::cli::{CliArgs, Command};
use crate::errors::BindError;
use crate::interp::status::StatusSender;
use crate::paths::Paths;
use crate::settings::Settings;
use crate::store::Keybind;

/// High-level entry point used by `main.rs`.
///
/// Resolves the data dir, loads optional settings, and dispatches the
/// subcommand.
pub async fn run(args: CliArgs) -> Result<()> {
    let paths = Paths::resolve(args.data_dir.as_deref());
    let settings = settings::load_or_default(paths.settings_file())?;

    match args.command {
        Command::List => cmd_list(&paths),
        Command::Add {
            key,
            message,
            delay,
        } => cmd_add(&paths, &settings, key, message, delay),
        Command::Edit {
            index,
            key,
            message,
            delay,
        } => cmd_edit(&paths, &settings, index, key, message, delay),
        Command::Remove { index } => cmd_remove(&paths, &settings, index),
        Command::Gen => cmd_gen(&paths, &settings),
        Command::Status => cmd_status(&paths, &settings),
        Command::Install => cmd_install(&paths, &settings).await,
        Command::Start => cmd_start(&paths, &settings),
        Command::Stop => cmd_stop(),
        Command::Restart => cmd_restart(&paths, &settings).await,
        Command::Run => session::run_session(paths, settings).await,
    }
}

fn cmd_list(paths: &Paths) -> Result<()> {
    let binds = store::load_store(paths)?;
    if binds.is_empty() {
        println!("no keybinds (store: {:?})", paths.config_file());
        return Ok(());
    }

    println!("keybinds ({}):", binds.len());
    for (index, bind) in binds.iter().enumerate() {
        println!("  [{index}] {} -> {}", bind.key, bind.message);
        if bind.delay_ms > 0 {
            println!("        delay: {} ms", bind.delay_ms);
        }
    }
    Ok(())
}

fn cmd_add(
    paths: &Paths,
    settings: &Settings,
    key: String,
    message: String,
    delay: u64,
) -> Result<()> {
    let bind = Keybind::new(key, message, delay);
    bind.validate()?;

    let mut binds = store::load_store(paths)?;
    binds.push(bind);
    store::save_store(paths, settings, &binds)?;

    println!("added keybind [{}]", binds.len() - 1);
    Ok(())
}

fn cmd_edit(
    paths: &Paths,
    settings: &Settings,
    index: usize,
    key: Option<String>,
    message: Option<String>,
    delay: Option<u64>,
) -> Result<()> {
    let mut binds = store::load_store(paths)?;
    let len = binds.len();
    let bind = binds
        .get_mut(index)
        .ok_or(BindError::IndexOutOfRange { index, len })?;

    if let Some(key) = key {
        bind.key = key;
    }
    if let Some(message) = message {
        bind.message = message;
    }
    if let Some(delay) = delay {
        bind.delay_ms = delay;
    }
    bind.validate()?;

    store::save_store(paths, settings, &binds)?;
    println!("updated keybind [{index}]");
    Ok(())
}

fn cmd_remove(paths: &Paths, settings: &Settings, index: usize) -> Result<()> {
    let mut binds = store::load_store(paths)?;
    if index >= binds.len() {
        return Err(BindError::IndexOutOfRange {
            index,
            len: binds.len(),
        }
        .into());
    }
    let removed = binds.remove(index);
    store::save_store(paths, settings, &binds)?;

    println!("removed keybind [{index}] ({} -> {})", removed.key, removed.message);
    Ok(())
}

fn cmd_gen(paths: &Paths, settings: &Settings) -> Result<()> {
    let binds = store::load_store(paths)?;
    store::save_store(paths, settings, &binds)?;
    println!(
        "generated {:?} from {} keybind(s)",
        paths.script_file(),
        binds.len()
    );
    Ok(())
}

fn cmd_status(paths: &Paths, settings: &Settings) -> Result<()> {
    match interp::detect_interpreter(paths, settings) {
        Some(path) => println!("interpreter: {:?}", path),
        None => println!("interpreter: not installed"),
    }

    let running = interp::running_count();
    if running > 0 {
        println!("script: running ({running} process(es))");
    } else {
        println!("script: stopped");
    }

    let binds = store::load_store(paths)?;
    println!("store: {} keybind(s) at {:?}", binds.len(), paths.config_file());
    Ok(())
}

async fn cmd_install(paths: &Paths, settings: &Settings) -> Result<()> {
    if let Some(existing) = interp::detect_interpreter(paths, settings) {
        println!("interpreter already installed: {:?}", existing);
        return Ok(());
    }

    let path = interp::install_interpreter(paths, settings, &StatusSender::detached()).await?;
    println!("interpreter installed: {:?}", path);
    Ok(())
}

fn cmd_start(paths: &Paths, settings: &Settings) -> Result<()> {
    // Starting implicitly stops any previous instance.
    interp::kill_by_script();
    interp::spawn_detached(paths, settings)?;
    println!("interpreter started");
    Ok(())
}

fn cmd_stop() -> Result<()> {
    let killed = interp::kill_by_script();
    if killed > 0 {
        println!("stopped {killed} interpreter process(es)");
    } else {
        println!("no running interpreter found");
    }
    Ok(())
}

async fn cmd_restart(paths: &Paths, settings: &Settings) -> Result<()> {
    let killed = interp::kill_by_script();
    info!(killed, "stopped interpreter for restart");
    tokio::time::sleep(Duration::from_millis(500)).await;
    interp::spawn_detached(paths, settings)?;
    println!("interpreter restarted");
    Ok(())
}
