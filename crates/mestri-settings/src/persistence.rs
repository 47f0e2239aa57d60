//! Settings Persistence
//!
//! Locates the configuration file and loads it, falling back to defaults
//! when no file exists yet.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "mestri";
const CONFIG_FILE: &str = "config.toml";

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    config: Config,
    path: Option<PathBuf>,
}

impl SettingsPersistence {
    /// Create new persistence layer with default config and no backing file
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            path: None,
        }
    }

    /// Platform config directory for the application, e.g. `~/.config/mestri`
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Default config file location
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load settings from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        let config = if path.exists() {
            Config::load_from_file(path)?
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Config::default()
        };
        Ok(Self {
            config,
            path: Some(path.to_path_buf()),
        })
    }

    /// Save settings to the backing file, creating parent directories
    pub fn save(&self) -> SettingsResult<()> {
        let path = self.path.as_ref().ok_or_else(|| {
            SettingsError::ConfigDirectory("settings have no backing file".to_string())
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.config.save_to_file(path)
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for SettingsPersistence {
    fn default() -> Self {
        Self::new()
    }
}
