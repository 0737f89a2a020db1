//! Application configuration, loadable from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::BoardSize;
use crate::error::ConfigError;
use crate::rules::Ruleset;

/// Longest pause allowed between replayed moves
const MAX_REPLAY_DELAY_MS: u64 = 60_000;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub replay: ReplayConfig,
    pub log: LogConfig,
}

/// Settings for new matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: BoardSize,
    pub ruleset: Ruleset,
}

/// Replay pacing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub delay_ms: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

/// Default tracing filter, overridden by `RUST_LOG`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.replay.delay_ms > MAX_REPLAY_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "replay.delay_ms must be <= {MAX_REPLAY_DELAY_MS}"
            )));
        }
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::Validation("log.level must not be empty".to_string()));
        }
        Ok(())
    }
}
