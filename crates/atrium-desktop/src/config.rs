//! # Configuration Persistence
//!
//! Save and load settings to/from disk.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL of the auth server.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Seconds between session expiry checks.
    #[serde(default = "default_expiry_poll_secs")]
    pub expiry_poll_secs: u64,
}

fn default_server_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_expiry_poll_secs() -> u64 {
    atrium_session::DEFAULT_POLL_INTERVAL.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            expiry_poll_secs: default_expiry_poll_secs(),
        }
    }
}

impl Config {
    /// Directory holding all Atrium files.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("atrium"))
    }

    /// Returns the config file path.
    fn config_path() -> Option<PathBuf> {
        Self::dir().map(|p| p.join("config.json"))
    }

    /// Returns the session file path.
    pub fn session_path() -> Option<PathBuf> {
        Self::dir().map(|p| p.join("session.json"))
    }

    /// Period between expiry checks, kept between one second and one day.
    pub fn poll_interval(&self) -> Duration {
        atrium_session::clamp_poll_interval(Duration::from_secs(self.expiry_poll_secs))
    }

    /// Loads configuration from disk, or returns default if not found.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(?path, "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Saves configuration to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path().context("could not determine config directory")?;
        self.save_to(&path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("failed to create config directory")?;
        }

        let contents = serde_json::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, contents).context("failed to write config")?;

        tracing::info!(?path, "Saved configuration");
        Ok(())
    }
}
