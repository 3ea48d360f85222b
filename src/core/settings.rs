//! Application settings
//!
//! Built-in defaults, overridden by ~/.config/bluezone/settings.json.

use crate::core::config_file::ConfigFile;
use crate::zones::ZoneEditorConfig;
use bevy::prelude::*;

pub const WINDOW_TITLE: &str = "Bluezone";
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (1280.0, 800.0);

/// Settings shared by the tool and the renderer
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BlueZoneSettings {
    pub editor: ZoneEditorConfig,
    /// Seconds between clicks that still count as a double click
    pub double_click_interval: f32,
    /// Half width of a zone band at view scale 1.0
    pub view_width: f64,
}

impl Default for BlueZoneSettings {
    fn default() -> Self {
        Self {
            editor: ZoneEditorConfig::default(),
            double_click_interval: 0.35,
            view_width: 4000.0,
        }
    }
}

impl BlueZoneSettings {
    /// Defaults with any values from the user config file applied
    pub fn from_config(config: Option<&ConfigFile>) -> Self {
        let mut settings = Self::default();
        if let Some(config) = config {
            if let Some(editor) = config.editor {
                settings.editor = editor;
            }
            if let Some(interval) = config.double_click_interval {
                settings.double_click_interval = interval;
            }
            if let Some(width) = config.view_width {
                settings.view_width = width;
            }
        }
        settings
    }
}
