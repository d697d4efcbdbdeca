// Configuration loading (courtside.toml). Every key is optional.

use crate::data::DataPaths;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "courtside.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player_name: String,
    pub data: DataSection,
    pub window: WindowSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataSection {
    pub seasons: PathBuf,
    pub summary: PathBuf,
    pub teams: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSection {
    pub width: f32,
    pub height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: "LeBron James".to_string(),
            data: DataSection::default(),
            window: WindowSection::default(),
        }
    }
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            seasons: PathBuf::from("lebron_stats.csv"),
            summary: PathBuf::from("summary.csv"),
            teams: PathBuf::from("perteam.csv"),
        }
    }
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 900.0,
        }
    }
}

impl Config {
    /// Data file paths, resolved against `base_dir` when relative.
    pub fn data_paths(&self, base_dir: &Path) -> DataPaths {
        DataPaths {
            seasons: base_dir.join(&self.data.seasons),
            summary: base_dir.join(&self.data.summary),
            teams: base_dir.join(&self.data.teams),
        }
    }
}

/// Load `courtside.toml` from `base_dir`, falling back to defaults when absent.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join(CONFIG_FILE);
    if !path.exists() {
        info!(path = %path.display(), "no config file, using defaults");
        let config = Config::default();
        validate(&config)?;
        return Ok(config);
    }

    let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    let config = parse_config(&text).map_err(|e| ConfigError::Parse {
        path: path.clone(),
        source: e,
    })?;
    validate(&config)?;

    info!(path = %path.display(), player = %config.player_name, "config loaded");
    Ok(config)
}

fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let data = [
        ("data.seasons", &config.data.seasons),
        ("data.summary", &config.data.summary),
        ("data.teams", &config.data.teams),
    ];
    for (field, path) in data {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation {
                field: field.to_string(),
                message: "path must not be empty".to_string(),
            });
        }
    }

    let window = [
        ("window.width", config.window.width),
        ("window.height", config.window.height),
    ];
    for (field, value) in window {
        if !(value.is_finite() && value > 0.0) {
            return Err(ConfigError::Validation {
                field: field.to_string(),
                message: format!("must be a positive number, got {}", value),
            });
        }
    }

    Ok(())
}
