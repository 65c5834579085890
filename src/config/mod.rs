//! # Configuration Management Module
//!
//! Optional TOML configuration for where saved data lives and how logging
//! behaves. Every field has a default, so running without a config file is
//! the normal case.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [storage]
//! data_dir = "."
//! stats_file = "player_stats.json"
//! high_scores_file = "high_scores.json"
//!
//! [logging]
//! level = "warn"
//! file = "numguess.log"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use numguess::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml")?;
//!     println!("Data dir: {}", config.storage.data_dir);
//!     Config::create_default("config.toml")?;
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_stats_file")]
    pub stats_file: String,
    #[serde(default = "default_high_scores_file")]
    pub high_scores_file: String,
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_stats_file() -> String {
    "player_stats.json".to_string()
}

fn default_high_scores_file() -> String {
    "high_scores.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            data_dir: default_data_dir(),
            stats_file: default_stats_file(),
            high_scores_file: default_high_scores_file(),
        }
    }
}

impl StorageConfig {
    pub fn stats_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.stats_file)
    }

    pub fn high_scores_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.high_scores_file)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log to this file instead of stderr so records do not land on the game screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown strings fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
