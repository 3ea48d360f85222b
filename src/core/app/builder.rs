//! Application builder and initialization
//!
//! This module provides the main app creation function

use super::plugins::{CorePluginGroup, RenderingPluginGroup};
use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::core::settings::BlueZoneSettings;
use crate::core::state::AppState;
use crate::systems::configure_default_plugins;
use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a fully configured Bevy app for editing blue zones.
///
/// Fonts named on the command line are loaded before the window opens, so
/// a bad path fails early with a readable error.
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    let app_state =
        AppState::load_fonts(&cli_args.font_sources).context("Failed to open font sources")?;

    let mut app = App::new();
    configure_resources(&mut app, cli_args, app_state);
    app.add_plugins(configure_default_plugins());
    add_plugin_groups(&mut app);
    Ok(app)
}

/// Sets up application resources and configuration
fn configure_resources(app: &mut App, cli_args: CliArgs, app_state: AppState) {
    let config = ConfigFile::load();
    let settings = BlueZoneSettings::from_config(config.as_ref());

    app.insert_resource(cli_args)
        .insert_resource(app_state)
        .insert_resource(settings)
        .insert_resource(ClearColor(Color::srgb(0.1, 0.1, 0.1)));

    #[cfg(debug_assertions)]
    app.insert_resource(WinitSettings {
        focused_mode: bevy::winit::UpdateMode::Continuous,
        unfocused_mode: bevy::winit::UpdateMode::Continuous,
    });

    #[cfg(not(debug_assertions))]
    app.insert_resource(WinitSettings::desktop_app());
}

/// Add all plugin groups to the application
fn add_plugin_groups(app: &mut App) {
    debug!("Adding plugin groups...");
    app.add_plugins((RenderingPluginGroup, CorePluginGroup));
    debug!("All plugin groups added successfully");
}
