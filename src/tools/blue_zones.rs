//! Blue zone tool
//!
//! Feeds Bevy input into the [`BlueZoneEditor`] and keeps it in step with
//! the tool lifecycle and the current font.

use super::tool_state::{tool_is_active, ToolId, ToolState};
use crate::core::settings::BlueZoneSettings;
use crate::core::state::{AppState, FontBecameCurrent};
use crate::data::SharedUfo;
use crate::rendering::cameras::DesignCamera;
use crate::rendering::zones::BluesDisplaySettings;
use crate::zones::{BlueZoneEditor, EditKey};
use bevy::prelude::*;
use kurbo::Point;

/// The editor for whichever font is current
#[derive(Resource, Debug)]
pub struct BlueZoneTool {
    pub editor: BlueZoneEditor<SharedUfo>,
}

impl BlueZoneTool {
    pub fn new(settings: &BlueZoneSettings) -> Self {
        Self {
            editor: BlueZoneEditor::new(settings.editor),
        }
    }
}

/// Counts successive clicks at the same spot
#[derive(Resource, Debug, Default, Clone)]
pub struct ClickCounter {
    last_time: Option<f32>,
    last_position: Vec2,
    count: u32,
}

/// Clicks further apart than this (in screen pixels) never pair up
const DOUBLE_CLICK_SLOP: f32 = 4.0;

impl ClickCounter {
    /// Register a press and return its click count (1, 2, 3, ...)
    pub fn register(&mut self, time: f32, screen_position: Vec2, interval: f32) -> u32 {
        let continues = self.last_time.is_some_and(|last| time - last <= interval)
            && self.last_position.distance(screen_position) <= DOUBLE_CLICK_SLOP;
        self.count = if continues { self.count + 1 } else { 1 };
        self.last_time = Some(time);
        self.last_position = screen_position;
        self.count
    }
}

/// Last pointer position in design space while the button is held
#[derive(Resource, Debug, Default)]
pub struct PointerDrag {
    last_position: Option<Vec2>,
}

pub struct BlueZoneToolPlugin;

impl Plugin for BlueZoneToolPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<BlueZoneSettings>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(BlueZoneTool::new(&settings))
            .init_resource::<ClickCounter>()
            .init_resource::<PointerDrag>()
            .add_event::<FontBecameCurrent>()
            .add_systems(
                Update,
                (
                    handle_tool_lifecycle,
                    handle_font_became_current,
                    sync_external_info_changes,
                    (handle_pointer_input, handle_key_input)
                        .run_if(tool_is_active(ToolId::BlueZones)),
                )
                    .chain()
                    .after(super::tool_state::handle_tool_switch),
            );
    }
}

/// Activate or deactivate the editor when the tool changes
pub fn handle_tool_lifecycle(
    tool_state: Res<ToolState>,
    mut tool: ResMut<BlueZoneTool>,
    mut display: ResMut<BluesDisplaySettings>,
    app_state: Res<AppState>,
) {
    if !tool_state.just_changed() {
        return;
    }

    let should_be_active = tool_state.is_active(ToolId::BlueZones);
    if should_be_active && !tool.editor.is_active() {
        let current = app_state.current_font().cloned();
        tool.editor.activate(&mut display.overlay, current);
    } else if !should_be_active && tool.editor.is_active() {
        tool.editor.deactivate(&mut display.overlay);
    }
}

/// Point the editor at the new current font
pub fn handle_font_became_current(
    mut events: EventReader<FontBecameCurrent>,
    mut tool: ResMut<BlueZoneTool>,
    app_state: Res<AppState>,
) {
    // Several switches in one frame collapse to the final font
    if events.read().count() == 0 || !tool.editor.is_active() {
        return;
    }
    let current = app_state.current_font().cloned();
    if let Some(font) = &current {
        info!("Editing blue zones of '{}'", font.display_name());
    }
    tool.editor.font_became_current(current);
}

/// Reload zones when font info was changed by someone else
pub fn sync_external_info_changes(mut tool: ResMut<BlueZoneTool>) {
    if !tool.editor.is_active() {
        return;
    }
    // Avoid tripping change detection every frame
    if tool.bypass_change_detection().editor.sync_external_changes() {
        tool.set_changed();
    }
}

/// Translate mouse input into pointer events for the editor
#[allow(clippy::too_many_arguments)]
pub fn handle_pointer_input(
    mouse_input: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<DesignCamera>>,
    time: Res<Time>,
    settings: Res<BlueZoneSettings>,
    mut clicks: ResMut<ClickCounter>,
    mut drag: ResMut<PointerDrag>,
    mut tool: ResMut<BlueZoneTool>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let Some(cursor_position) = window.cursor_position() else {
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let Ok(world_position) = camera.viewport_to_world_2d(camera_transform, cursor_position)
    else {
        return;
    };

    let point = Point::new(f64::from(world_position.x), f64::from(world_position.y));

    if mouse_input.just_pressed(MouseButton::Left) {
        let count = clicks.register(
            time.elapsed_secs(),
            cursor_position,
            settings.double_click_interval,
        );
        debug!("Pointer down at {:?} (click {})", point, count);
        tool.editor.pointer_down(point, count);
        drag.last_position = Some(world_position);
    } else if mouse_input.pressed(MouseButton::Left) {
        if let Some(last) = drag.last_position {
            let delta = world_position - last;
            if delta != Vec2::ZERO {
                tool.editor.pointer_dragged(
                    point,
                    kurbo::Vec2::new(f64::from(delta.x), f64::from(delta.y)),
                );
                drag.last_position = Some(world_position);
            }
        }
    }

    if mouse_input.just_released(MouseButton::Left) {
        tool.editor.pointer_up(point);
        drag.last_position = None;
    }
}

/// Arrow keys nudge, Delete removes, Return flips the selected zones
pub fn handle_key_input(keyboard: Res<ButtonInput<KeyCode>>, mut tool: ResMut<BlueZoneTool>) {
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    let keys = [
        (KeyCode::ArrowUp, EditKey::Up),
        (KeyCode::ArrowDown, EditKey::Down),
        (KeyCode::Delete, EditKey::Delete),
        (KeyCode::Backspace, EditKey::Delete),
        (KeyCode::Enter, EditKey::Return),
        (KeyCode::NumpadEnter, EditKey::Return),
    ];

    for (code, key) in keys {
        if keyboard.just_pressed(code) {
            debug!("Key {:?} (shift: {})", key, shift);
            tool.editor.key_down(key, shift);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_presses_at_one_spot_count_up() {
        let mut clicks = ClickCounter::default();
        let at = Vec2::new(100.0, 100.0);
        assert_eq!(clicks.register(1.0, at, 0.35), 1);
        assert_eq!(clicks.register(1.2, at, 0.35), 2);
        assert_eq!(clicks.register(1.4, at + Vec2::ONE, 0.35), 3);
    }

    #[test]
    fn slow_or_distant_presses_start_over() {
        let mut clicks = ClickCounter::default();
        let at = Vec2::new(100.0, 100.0);
        clicks.register(1.0, at, 0.35);
        assert_eq!(clicks.register(2.0, at, 0.35), 1);
        assert_eq!(clicks.register(2.1, at + Vec2::new(20.0, 0.0), 0.35), 1);
    }

    #[test]
    fn tool_uses_configured_editor_rules() {
        let mut settings = BlueZoneSettings::default();
        settings.editor.select_distance = 9.0;
        let tool = BlueZoneTool::new(&settings);
        assert_eq!(tool.editor.config().select_distance, 9.0);
        assert!(!tool.editor.is_active());
    }
}
