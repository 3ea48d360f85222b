//! One-line status readout in the window corner

use crate::core::state::AppState;
use crate::tools::{BlueZoneTool, ToolId, ToolState};
use crate::zones::ZoneCounts;
use bevy::prelude::*;

const STATUS_FONT_SIZE: f32 = 14.0;
const STATUS_MARGIN: f32 = 12.0;

#[derive(Component)]
pub struct StatusText;

pub struct StatusPlugin;

impl Plugin for StatusPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_status_text)
            .add_systems(PostUpdate, update_status_text);
    }
}

fn spawn_status_text(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(STATUS_MARGIN),
            left: Val::Px(STATUS_MARGIN),
            ..default()
        },
        Text::new(""),
        TextFont {
            font_size: STATUS_FONT_SIZE,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        StatusText,
    ));
}

/// Status text for the current tool and font
pub fn status_line(tool: ToolId, font_name: Option<&str>, counts: Option<ZoneCounts>) -> String {
    let font = font_name.unwrap_or("No font open");
    let mut line = format!("{} | {}", tool.name(), font);
    if let Some(counts) = counts {
        line.push_str(&format!(
            " | BlueValues: {} OtherBlues: {}",
            counts.primary, counts.other
        ));
    }
    let help = match tool {
        ToolId::Select => "B: blue zones, Tab: next font",
        ToolId::BlueZones => "Double click: add/flip, Return: flip, Delete: remove, V: done",
    };
    format!("{line}\n{help}")
}

fn update_status_text(
    tool_state: Res<ToolState>,
    tool: Res<BlueZoneTool>,
    app_state: Res<AppState>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    if !(tool_state.is_changed() || tool.is_changed() || app_state.is_changed()) {
        return;
    }
    let Ok(mut text) = query.single_mut() else {
        return;
    };

    let font_name = app_state.current_font().map(|font| font.display_name());
    let counts = tool
        .editor
        .is_active()
        .then(|| tool.editor.count_zones());
    text.0 = status_line(tool_state.active, font_name.as_deref(), counts);
}
