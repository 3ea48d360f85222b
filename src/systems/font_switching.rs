//! Switching between open fonts
//!
//! Tab makes the next open font current and Ctrl+W closes the current one.
//! Either sends [`FontBecameCurrent`] so tools can follow the change.

use crate::core::state::{AppState, FontBecameCurrent};
use bevy::prelude::*;

pub fn handle_font_switching(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut app_state: ResMut<AppState>,
    mut events: EventWriter<FontBecameCurrent>,
) {
    let control = keyboard.pressed(KeyCode::ControlLeft)
        || keyboard.pressed(KeyCode::ControlRight)
        || keyboard.pressed(KeyCode::SuperLeft)
        || keyboard.pressed(KeyCode::SuperRight);

    if keyboard.just_pressed(KeyCode::Tab) && app_state.cycle_font() {
        if let Some(font) = app_state.current_font() {
            info!("Current font: '{}'", font.display_name());
        }
        events.write(FontBecameCurrent);
    }

    if control && keyboard.just_pressed(KeyCode::KeyW) {
        if let Some(font) = app_state.close_current() {
            info!("Closed font '{}'", font.display_name());
            events.write(FontBecameCurrent);
        }
    }
}
