use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::client;

/// Top-level configuration stored on disk: the service credential plus
/// request options. Every field except the key has a default matching the
/// client's stock options.
///
/// Example TOML:
/// ```toml
/// api_key = "0123456789abcdef"
/// default_location = "CA/San_Francisco"
/// language = "EN"
/// best_forecast = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Secret key issued by the weather service.
    pub api_key: String,

    /// Location used when a call does not supply one.
    #[serde(default = "default_location")]
    pub default_location: String,

    /// Base URL for building API calls.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Language code for response localization.
    #[serde(default = "default_language")]
    pub language: String,

    /// The service's premium forecast blend, enabled unless told otherwise.
    #[serde(default = "default_best_forecast")]
    pub best_forecast: bool,
}

fn default_location() -> String {
    client::DEFAULT_LOCATION.to_string()
}

fn default_api_base() -> String {
    client::DEFAULT_API_BASE.to_string()
}

fn default_language() -> String {
    client::DEFAULT_LANGUAGE.to_string()
}

fn default_best_forecast() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            default_location: default_location(),
            api_base: default_api_base(),
            language: default_language(),
            best_forecast: default_best_forecast(),
        }
    }
}

impl Config {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wunder", "wunder-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
