//! Tool state management - single source of truth for the active tool

use bevy::prelude::*;

/// The single source of truth for which tool is currently active
#[derive(Resource, Debug, Default)]
pub struct ToolState {
    /// Currently active tool
    pub active: ToolId,

    /// Track if active tool changed this frame (for activation systems)
    active_changed: bool,

    /// Previous tool
    previous: Option<ToolId>,
}

impl ToolState {
    /// Switch to a new tool
    pub fn activate(&mut self, tool: ToolId) {
        if self.active != tool {
            self.previous = Some(self.active);
            self.active = tool;
            self.active_changed = true;
            info!("Tool switched: {:?} -> {:?}", self.previous, self.active);
        }
    }

    /// Check if active tool changed this frame
    pub fn just_changed(&self) -> bool {
        self.active_changed
    }

    /// Reset the changed flag (called at end of frame)
    pub fn clear_changed(&mut self) {
        self.active_changed = false;
    }

    /// Check if a specific tool is active
    pub fn is_active(&self, tool: ToolId) -> bool {
        self.active == tool
    }

    /// Get the previous tool
    pub fn previous(&self) -> Option<ToolId> {
        self.previous
    }
}

/// Tool identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolId {
    /// Look at the font without editing
    #[default]
    Select,
    BlueZones,
}

/// Static description of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: &'static str,
    pub display_name: &'static str,
    pub tooltip: &'static str,
    pub shortcut: KeyCode,
}

impl ToolId {
    pub const ALL: [ToolId; 2] = [ToolId::Select, ToolId::BlueZones];

    pub fn info(&self) -> ToolInfo {
        match self {
            ToolId::Select => ToolInfo {
                name: "select",
                display_name: "Select",
                tooltip: "View the font",
                shortcut: KeyCode::KeyV,
            },
            ToolId::BlueZones => ToolInfo {
                name: "blue_zones",
                display_name: "Blue Zones",
                tooltip: "Blue Zones",
                shortcut: KeyCode::KeyB,
            },
        }
    }

    /// Get the tool's display name
    pub fn name(&self) -> &'static str {
        self.info().display_name
    }

    /// Convert from string ID
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == s)
    }

    /// Convert to string ID
    pub fn as_str(&self) -> &'static str {
        self.info().name
    }
}

/// Event to request tool switch
#[derive(Event, Debug)]
pub struct SwitchToolEvent {
    pub tool: ToolId,
}

/// Turn tool shortcuts into switch requests
pub fn handle_tool_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut events: EventWriter<SwitchToolEvent>,
) {
    for tool in ToolId::ALL {
        if keyboard.just_pressed(tool.info().shortcut) {
            events.write(SwitchToolEvent { tool });
        }
    }
}

/// System to handle tool switching
pub fn handle_tool_switch(
    mut tool_state: ResMut<ToolState>,
    mut events: EventReader<SwitchToolEvent>,
) {
    for event in events.read() {
        debug!("SwitchToolEvent received: {:?}", event);
        tool_state.activate(event.tool);
    }
}

/// System to clear the changed flag at end of frame
pub fn clear_tool_changed(mut tool_state: ResMut<ToolState>) {
    if tool_state.just_changed() {
        tool_state.clear_changed();
    }
}

/// Run condition for systems that only run when a specific tool is active
pub fn tool_is_active(tool: ToolId) -> impl Fn(Res<ToolState>) -> bool {
    move |tool_state: Res<ToolState>| tool_state.is_active(tool)
}
