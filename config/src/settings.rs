//! Screen color settings: a flat JSON object of screen key to color name.
//!
//! ```json
//! { "MainScreen": "Red", "AnimalsScreen": "Blue" }
//! ```
//!
//! The map is read in full on every lookup and rewritten in full on every
//! edit; no file handle outlives a single call.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use menagerie_types::{ConsoleColor, ScreenId, parse_integer};
use menagerie_utils::{atomic_write, recover_bak_file};

pub const DEFAULT_SETTINGS_FILE: &str = "ColorSettings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("settings file {} is malformed: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write settings at {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Screen key to color name.
///
/// Keys that are not known screens are kept as-is so that rewriting the file
/// never drops entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenSettings(BTreeMap<String, String>);

impl ScreenSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Set one entry, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Color configured for `screen`.
    ///
    /// `None` when the screen has no entry. Entries are palette names or
    /// palette codes; anything outside the palette resolves to white.
    #[must_use]
    pub fn color_for(&self, screen: ScreenId) -> Option<ConsoleColor> {
        let raw = self.get(screen.key())?;
        if let Some(color) = ConsoleColor::parse(raw) {
            return Some(color);
        }
        if let Some(code) = parse_integer(raw) {
            return Some(ConsoleColor::from_code_or_default(code));
        }
        tracing::warn!(screen = %screen, value = raw, "Unknown color in settings");
        Some(ConsoleColor::default())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ScreenSettings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Durable home of the [`ScreenSettings`] map.
pub trait SettingsStore {
    /// `Ok(None)` when no store exists yet.
    fn load(&self) -> Result<Option<ScreenSettings>, SettingsError>;

    fn save(&self, settings: &ScreenSettings) -> Result<(), SettingsError>;
}

/// Settings persisted as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Open the store at `path`, first restoring a backup left behind by an
    /// interrupted save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        recover_bak_file(&path);
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Option<ScreenSettings>, SettingsError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(SettingsError::Read {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| {
                tracing::warn!(path = %self.path.display(), "Malformed settings file: {source}");
                SettingsError::Parse {
                    path: self.path.clone(),
                    source,
                }
            })
    }

    fn save(&self, settings: &ScreenSettings) -> Result<(), SettingsError> {
        let mut content = serde_json::to_string_pretty(settings).map_err(|err| {
            SettingsError::Write {
                path: self.path.clone(),
                source: io::Error::other(err),
            }
        })?;
        content.push('\n');

        atomic_write(&self.path, content.as_bytes()).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(
            path = %self.path.display(),
            entries = settings.len(),
            "Saved screen settings"
        );
        Ok(())
    }
}

/// Process-local store, for sessions and tests that must not touch disk.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: RefCell<Option<ScreenSettings>>,
}

impl MemorySettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: ScreenSettings) -> Self {
        Self {
            settings: RefCell::new(Some(settings)),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<ScreenSettings> {
        self.settings.borrow().clone()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<ScreenSettings>, SettingsError> {
        Ok(self.snapshot())
    }

    fn save(&self, settings: &ScreenSettings) -> Result<(), SettingsError> {
        *self.settings.borrow_mut() = Some(settings.clone());
        Ok(())
    }
}
