//! Configuration for Menagerie.
//!
//! Two independent stores live here:
//!
//! - **`app`**: the optional TOML application config at `~/.menagerie/config.toml`
//! - **`settings`**: the JSON screen color map edited from inside the app

mod app;
mod settings;

pub use app::{AppConfig, ConfigError, MenagerieConfig, SETTINGS_FILE_ENV, config_path};
pub use settings::{
    DEFAULT_SETTINGS_FILE, JsonSettingsStore, MemorySettingsStore, ScreenSettings, SettingsError,
    SettingsStore,
};
