//! Configuration management for Stickies
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    DEFAULT_NOTE_COLOR, NOTE_WINDOW_DEFAULT_HEIGHT, NOTE_WINDOW_DEFAULT_WIDTH, NOTE_WINDOW_MAX_HEIGHT,
    NOTE_WINDOW_MAX_WIDTH, NOTE_WINDOW_MIN_HEIGHT, NOTE_WINDOW_MIN_WIDTH,
};
use crate::utils::color;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color assigned to new notes (one of the palette names)
    pub default_color: String,
    /// Note window width in columns
    pub note_width: u16,
    /// Note window height in rows
    pub note_height: u16,
    /// Reopen all stored notes on startup
    pub autoload: bool,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the database file location
    pub database_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_NOTE_COLOR.to_string(),
            note_width: NOTE_WINDOW_DEFAULT_WIDTH,
            note_height: NOTE_WINDOW_DEFAULT_HEIGHT,
            autoload: true,
        }
    }
}

impl Config {
    /// Load the configuration from the default location, falling back to
    /// defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::default_config_path()?;
        Self::load_from(&path)
    }

    /// Load the configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !color::is_palette_color(&self.ui.default_color) {
            return Err(anyhow!(
                "Invalid default_color '{}', expected one of: {}",
                self.ui.default_color,
                color::NOTE_COLORS.join(", ")
            ));
        }

        if !(NOTE_WINDOW_MIN_WIDTH..=NOTE_WINDOW_MAX_WIDTH).contains(&self.ui.note_width) {
            return Err(anyhow!(
                "note_width must be between {} and {}",
                NOTE_WINDOW_MIN_WIDTH,
                NOTE_WINDOW_MAX_WIDTH
            ));
        }

        if !(NOTE_WINDOW_MIN_HEIGHT..=NOTE_WINDOW_MAX_HEIGHT).contains(&self.ui.note_height) {
            return Err(anyhow!(
                "note_height must be between {} and {}",
                NOTE_WINDOW_MIN_HEIGHT,
                NOTE_WINDOW_MAX_HEIGHT
            ));
        }

        Ok(())
    }

    /// Path of the configuration file.
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("stickies").join("config.toml"))
    }

    /// Resolve the database file location, honoring the override.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.storage.database_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir().ok_or_else(|| anyhow!("Could not determine data directory"))?;
        Ok(data_dir.join("stickies").join("notes.db"))
    }

    /// Write a commented default configuration file, creating parent
    /// directories as needed.
    pub fn generate_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let config = Config::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let content = format!(
            "# Stickies Configuration File\n\
             #\n\
             # default_color: color for new notes ({})\n\
             # note_width / note_height: note window size in terminal cells\n\
             # autoload: reopen all stored notes on startup\n\n{}",
            color::NOTE_COLORS.join(", "),
            toml_content
        );

        std::fs::write(path, content).with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
