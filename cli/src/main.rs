//! Menagerie CLI - binary entry point.
//!
//! Wires the process collaborators into one interactive session:
//!
//! ```text
//! main() -> MenagerieConfig::load() -> StdConsole + JsonSettingsStore + Catalog
//!                                            |
//!                                            v
//!                          build_navigation().run(session) -> Exit
//! ```
//!
//! Logs go to a file so the interactive console stays clean.

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use menagerie_config::{JsonSettingsStore, MenagerieConfig};
use menagerie_core::Catalog;
use menagerie_engine::{Screen, Session, StdConsole, build_navigation};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: drop events rather than interleave them with the menus.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.menagerie/logs/menagerie.log
    if let Some(config_path) = MenagerieConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("menagerie.log"));
    }

    // Fallback: ./.menagerie/logs/menagerie.log
    candidates.push(PathBuf::from(".menagerie").join("logs").join("menagerie.log"));

    candidates
}

fn load_config() -> MenagerieConfig {
    match MenagerieConfig::load() {
        Ok(Some(config)) => config,
        Ok(None) => MenagerieConfig::default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using default config: {err}");
            MenagerieConfig::default()
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = load_config();
    let settings = JsonSettingsStore::new(config.settings_path());
    tracing::info!(settings = %settings.path().display(), "Starting session");

    let mut console = StdConsole::new(config.color_enabled());
    let mut catalog = Catalog::new();
    let exit = {
        let mut session = Session::new(&mut console, &mut catalog, &settings);
        build_navigation()
            .run(&mut session)
            .context("console I/O failed")?
    };

    tracing::info!(?exit, census = ?catalog.census(), "Session ended");
    Ok(())
}
