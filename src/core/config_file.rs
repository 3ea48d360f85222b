//! User configuration file handling
//!
//! Manages settings from ~/.config/bluezone/settings.json

use crate::zones::ZoneEditorConfig;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration from ~/.config/bluezone/settings.json
///
/// Every field is optional; missing values fall back to built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    /// Zone editing rules (selection distance, nudge amounts, ...)
    pub editor: Option<ZoneEditorConfig>,
    pub double_click_interval: Option<f32>,
    pub view_width: Option<f64>,
}

impl ConfigFile {
    /// Get the path to the bluezone config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("bluezone")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Initialize the user configuration directory
    ///
    /// Creates ~/.config/bluezone with a logs/ directory and a settings.json
    /// holding the default values, leaving an existing settings file alone.
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = crate::logging::logs_dir();
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);
        println!("Today's log file: {:?}", crate::logging::current_log_file());

        let settings_path = Self::config_path();
        if settings_path.exists() {
            println!("Settings file already exists: {:?}", settings_path);
        } else {
            let defaults = crate::core::settings::BlueZoneSettings::default();
            let config = ConfigFile {
                editor: Some(defaults.editor),
                double_click_interval: Some(defaults.double_click_interval),
                view_width: Some(defaults.view_width),
            };
            config.save()?;
            println!("Created settings file: {:?}", settings_path);
        }

        Ok(())
    }
}
