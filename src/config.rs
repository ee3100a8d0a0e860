//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{
    APP_DATA_DIR, CONFIG_DIR_ENV, DEFAULT_MESSAGING_HOST, DEFAULT_RECIPIENT, DEFAULT_SHARE_LINK,
};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Destination of messaging deep links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// Messaging host, e.g. "wa.me"
    pub host: String,
    /// Recipient address appended to the host
    pub recipient: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MESSAGING_HOST.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

/// Share message settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Link appended to share messages
    pub link: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            link: DEFAULT_SHARE_LINK.to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/TapizDesigner/config.toml`
/// - macOS: `~/Library/Application Support/TapizDesigner/config.toml`
/// - Windows: `%APPDATA%\TapizDesigner\config.toml`
///
/// The directory can be overridden with the `TAPIZ_CONFIG_DIR` environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Messaging deep link destination
    #[serde(default)]
    pub messaging: MessagingConfig,
    /// Share message settings
    #[serde(default)]
    pub share: ShareConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using temp file + rename.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Host and recipient end up inside a URL path, so they must be non-empty
    /// and free of separators and whitespace.
    pub fn validate(&self) -> Result<()> {
        validate_url_segment("messaging.host", &self.messaging.host)?;
        validate_url_segment("messaging.recipient", &self.messaging.recipient)?;

        if self.share.link.trim().is_empty() {
            anyhow::bail!("share.link must not be empty");
        }

        Ok(())
    }

    /// Sets the messaging recipient after validating it.
    pub fn set_recipient(&mut self, recipient: &str) -> Result<()> {
        validate_url_segment("messaging.recipient", recipient)?;
        self.messaging.recipient = recipient.to_string();
        Ok(())
    }

    /// Sets the share link.
    pub fn set_share_link(&mut self, link: &str) -> Result<()> {
        let link = link.trim();
        if link.is_empty() {
            anyhow::bail!("share.link must not be empty");
        }
        self.share.link = link.to_string();
        Ok(())
    }
}

fn validate_url_segment(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("{field} must not be empty");
    }
    if let Some(bad) = value
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
    {
        anyhow::bail!("{field} contains invalid character {bad:?}: '{value}'");
    }
    Ok(())
}
