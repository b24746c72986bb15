use crate::domain::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR_NAME: &str = ".focusboard";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("config file already exists: {0}")]
    AlreadyExists(PathBuf),
}

/// User preferences read at startup (never written back by the dashboard)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme to start in
    pub theme: Theme,
    /// Use emoji glyphs in the header and task list
    pub use_emoji: bool,
    /// Seed the checklist with starter tasks
    pub sample_tasks: bool,
    /// Show the weekly insight card
    pub show_insight: bool,
    /// Log filter passed to the file logger (e.g. "info", "debug")
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            use_emoji: true,
            sample_tasks: true,
            show_insight: true,
            log_level: "info".to_string(),
        }
    }
}

/// Get the focusboard home directory (~/.focusboard)
pub fn get_focusboard_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Default config file path
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_focusboard_dir()?.join(CONFIG_FILE_NAME))
}

/// Directory for rotated log files
pub fn log_dir() -> Result<PathBuf, ConfigError> {
    Ok(get_focusboard_dir()?.join("logs"))
}

/// Load config from a JSON file. A missing file yields defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a default config file, refusing to overwrite an existing one
pub fn write_default_config<P: AsRef<Path>>(path: P) -> Result<PathBuf, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let json = serde_json::to_string_pretty(&Config::default()).map_err(|source| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    fs::write(path, json).map_err(io_err)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = tempdir().unwrap();
        let config = load_config(temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "theme": "dark", "use_emoji": false }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert!(!config.use_emoji);
        assert!(config.sample_tasks);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_config_is_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_write_default_config_round_trips() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        write_default_config(&path).unwrap();
        assert_eq!(load_config(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_write_default_config_refuses_overwrite() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let err = write_default_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
