//! Runtime configuration loaded from a TOML file.
//!
//! The file is looked up at `$TETRIS_CONFIG`, then
//! `<config dir>/tetris/config.toml`, then `config/tetris.toml`. Every field
//! has a default, so partial files are fine. Gravity and scoring are game
//! rules and deliberately not configurable.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::FRAME_MS;

pub const CONFIG_ENV_VAR: &str = "TETRIS_CONFIG";
const FALLBACK_CONFIG_PATH: &str = "config/tetris.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Piece generator seed; a random one is drawn when absent.
    pub seed: Option<u32>,
    /// Display frame interval in milliseconds
    pub frame_ms: u32,
    /// Terminal columns per board block
    pub cell_width: u16,
    /// Terminal rows per board block
    pub cell_height: u16,
    pub show_ghost: bool,
    pub log_file: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: FRAME_MS,
            cell_width: 2,
            cell_height: 1,
            show_ghost: true,
            log_file: PathBuf::from("tetris.log"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Clamp values that would stall the loop or collapse the board.
    pub fn sanitized(mut self) -> Self {
        self.frame_ms = self.frame_ms.clamp(1, 1000);
        self.cell_width = self.cell_width.clamp(1, 8);
        self.cell_height = self.cell_height.clamp(1, 4);
        if self.log_level.trim().is_empty() {
            self.log_level = Config::default().log_level;
        }
        self
    }

    /// Load from `path`, or return defaults if there is no file yet.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from_path(path)
    }

    /// Write the default config to `path` unless a file is already there.
    /// Returns whether a file was written.
    pub fn write_default_if_missing(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        Config::default().save_to_path(path)?;
        Ok(true)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config.sanitized())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }
}

/// Resolve the config file location.
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("tetris").join("config.toml"),
        None => PathBuf::from(FALLBACK_CONFIG_PATH),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config I/O error: {err}"),
            ConfigError::Parse(err) => write!(f, "invalid config file: {err}"),
            ConfigError::Serialize(err) => write!(f, "could not serialize config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}
