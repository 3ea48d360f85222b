//! Plugin management and configuration for the Bluezone app

use crate::core::settings::{DEFAULT_WINDOW_SIZE, WINDOW_TITLE};
use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

/// Configure default Bevy plugins for the application
pub fn configure_default_plugins() -> PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: DEFAULT_WINDOW_SIZE.into(),
                ..default()
            }),
            ..default()
        })
        .set(crate::logging::configure_logging())
}

/// Host systems that don't belong to a tool
pub struct BluezoneSystems;

impl Plugin for BluezoneSystems {
    fn build(&self, app: &mut App) {
        app.add_event::<crate::core::state::FontBecameCurrent>()
            .add_systems(
                Update,
                super::font_switching::handle_font_switching
                    .before(crate::tools::blue_zones::handle_font_became_current),
            );
    }
}
