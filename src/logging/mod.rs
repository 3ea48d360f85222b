//! Application logging functionality
//!
//! Console logging goes through Bevy's `LogPlugin`; a second layer writes
//! the same events to a daily log file in ~/.config/bluezone/logs/.

use bevy::log::{BoxedLayer, Level, LogPlugin};
use bevy::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::Layer;

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    crate::core::config_file::ConfigFile::config_dir().join("logs")
}

/// Get the path to today's log file
pub fn current_log_file() -> PathBuf {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    logs_dir().join(format!("bluezone.log.{timestamp}"))
}

/// Configure logging with performance optimization for release builds
pub fn configure_logging() -> LogPlugin {
    #[cfg(debug_assertions)]
    {
        LogPlugin {
            level: Level::INFO,
            filter: "bluezone=debug,bevy_render=warn,bevy_winit=warn,wgpu=warn,winit=warn"
                .to_string(),
            custom_layer: file_layer,
            ..default()
        }
    }

    #[cfg(not(debug_assertions))]
    {
        LogPlugin {
            level: Level::WARN,
            filter: "bluezone=info,bevy=warn,wgpu=error,winit=error".to_string(),
            custom_layer: file_layer,
            ..default()
        }
    }
}

/// Extra tracing layer writing plain-text logs to a daily file
///
/// Skipped when the config directory hasn't been created, so running the
/// editor never creates ~/.config/bluezone on its own.
fn file_layer(_app: &mut App) -> Option<BoxedLayer> {
    let config_dir = crate::core::config_file::ConfigFile::config_dir();
    if !config_dir.exists() {
        return None;
    }
    if let Err(e) = std::fs::create_dir_all(logs_dir()) {
        eprintln!("Failed to create logs directory: {e}");
        return None;
    }

    let appender = tracing_appender::rolling::daily(logs_dir(), "bluezone.log");
    Some(
        tracing_subscriber::fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .boxed(),
    )
}
