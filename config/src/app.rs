use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::DEFAULT_SETTINGS_FILE;

/// Environment variable that overrides the settings file location.
pub const SETTINGS_FILE_ENV: &str = "MENAGERIE_SETTINGS_FILE";

const fn default_true() -> bool {
    true
}

/// Application configuration.
///
/// ```toml
/// [app]
/// settings_file = "ColorSettings.json"
/// color = true
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct MenagerieConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Path of the screen color settings file. Relative paths resolve
    /// against the working directory.
    pub settings_file: Option<PathBuf>,
    /// Apply screen colors to the console. Default: true.
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl MenagerieConfig {
    /// Load the config from its default location.
    ///
    /// Returns `Ok(None)` when there is no home directory or no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve the settings file: environment, then config, then the default
    /// file name in the working directory.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        if let Ok(value) = env::var(SETTINGS_FILE_ENV)
            && !value.trim().is_empty()
        {
            return PathBuf::from(value);
        }
        self.app
            .as_ref()
            .and_then(|app| app.settings_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    #[must_use]
    pub fn color_enabled(&self) -> bool {
        self.app.as_ref().is_none_or(|app| app.color)
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".menagerie").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config: MenagerieConfig = toml::from_str("").unwrap();
        assert!(config.app.is_none());
        assert!(config.color_enabled());
    }

    #[test]
    fn parse_app_config() {
        let config: MenagerieConfig = toml::from_str(
            r#"
[app]
settings_file = "/tmp/colors.json"
color = false
"#,
        )
        .unwrap();
        let app = config.app.as_ref().unwrap();
        assert_eq!(app.settings_file.as_deref(), Some(Path::new("/tmp/colors.json")));
        assert!(!config.color_enabled());
    }

    #[test]
    fn settings_path_falls_back_to_default_file() {
        if env::var_os(SETTINGS_FILE_ENV).is_some() {
            return;
        }
        assert_eq!(
            MenagerieConfig::default().settings_path(),
            PathBuf::from(DEFAULT_SETTINGS_FILE)
        );
        let config: MenagerieConfig =
            toml::from_str("[app]\nsettings_file = \"colors.json\"\n").unwrap();
        assert_eq!(config.settings_path(), PathBuf::from("colors.json"));
    }

    #[test]
    fn color_defaults_on_when_section_present() {
        let config: MenagerieConfig = toml::from_str("[app]\n").unwrap();
        assert!(config.color_enabled());
    }

    #[test]
    fn load_from_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = MenagerieConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[app\n").unwrap();
        let err = MenagerieConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &path);
    }
}
