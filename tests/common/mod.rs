//! Shared test utilities and fixtures
//!
//! Drives whole sessions from the root menu through a scripted console.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use menagerie_config::{JsonSettingsStore, SettingsStore};
use menagerie_core::Catalog;
use menagerie_engine::{Exit, MemoryConsole, Screen, Session, build_navigation};

/// Outcome of one scripted session.
pub struct Run {
    pub exit: Exit,
    pub console: MemoryConsole,
    pub catalog: Catalog,
}

impl Run {
    pub fn transcript(&self) -> &str {
        self.console.transcript()
    }
}

/// Run the full navigation tree against `input`, starting from `catalog`.
pub fn run_session_with(catalog: Catalog, store: &dyn SettingsStore, input: &[&str]) -> Run {
    let mut console = MemoryConsole::new(input.iter().copied());
    let mut catalog = catalog;
    let exit = build_navigation()
        .run(&mut Session::new(&mut console, &mut catalog, store))
        .expect("memory console never fails");
    Run {
        exit,
        console,
        catalog,
    }
}

pub fn run_session(store: &dyn SettingsStore, input: &[&str]) -> Run {
    run_session_with(Catalog::new(), store, input)
}

/// Root → Animals → Mammals, then the species entry numbered `species`.
pub fn into_species(species: &str) -> Vec<&str> {
    vec!["1", "1", species]
}

/// Leave a species screen and every menu above it.
pub const BACK_TO_ROOT_AND_EXIT: [&str; 4] = ["0", "0", "0", "0"];

/// A settings file inside a fresh temporary directory.
pub struct TempSettings {
    _dir: tempfile::TempDir,
    pub path: PathBuf,
    pub store: JsonSettingsStore,
}

impl TempSettings {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("ColorSettings.json");
        let store = JsonSettingsStore::new(&path);
        Self {
            _dir: dir,
            path,
            store,
        }
    }

    pub fn with_contents(contents: &str) -> Self {
        let settings = Self::new();
        std::fs::write(&settings.path, contents).expect("write settings");
        settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_json(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(&self.path).expect("read settings");
        serde_json::from_str(&raw).expect("settings are JSON")
    }
}
