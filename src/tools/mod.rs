//! Editing tools
//!
//! `ToolState` tracks which tool is active; each tool's plugin reacts to
//! activation changes and handles input while it is active.

pub mod blue_zones;
pub mod tool_state;


pub use blue_zones::{BlueZoneTool, BlueZoneToolPlugin};
pub use tool_state::{
    clear_tool_changed, handle_tool_shortcuts, handle_tool_switch, tool_is_active,
    SwitchToolEvent, ToolId, ToolInfo, ToolState,
};

use bevy::prelude::*;

/// Tool switching and every tool plugin
pub struct ToolsPlugin;

impl Plugin for ToolsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ToolState>()
            .add_event::<SwitchToolEvent>()
            .add_systems(Update, (handle_tool_shortcuts, handle_tool_switch).chain())
            .add_systems(Last, clear_tool_changed)
            .add_plugins(BlueZoneToolPlugin);
    }
}
