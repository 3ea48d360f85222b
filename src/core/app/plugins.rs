//! Plugin group definitions for the Bluezone application
//!
//! Organized into logical groups for clarity and maintainability

use bevy::app::{PluginGroup, PluginGroupBuilder};

/// Plugin group for core application functionality
#[derive(Default)]
pub struct CorePluginGroup;

impl PluginGroup for CorePluginGroup {
    fn build(self) -> PluginGroupBuilder {
        use crate::systems::BluezoneSystems;
        use crate::tools::ToolsPlugin;

        PluginGroupBuilder::start::<Self>()
            .add(ToolsPlugin)
            .add(BluezoneSystems)
    }
}

/// Plugin group for rendering functionality
#[derive(Default)]
pub struct RenderingPluginGroup;

impl PluginGroup for RenderingPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        use crate::rendering::{CameraPlugin, StatusPlugin, ZoneRenderingPlugin};

        PluginGroupBuilder::start::<Self>()
            .add(CameraPlugin)
            .add(ZoneRenderingPlugin)
            .add(StatusPlugin)
    }
}
