//! Camera setup for the design view
//!
//! One 2D camera looks at glyph design space. Middle or right drag pans and
//! the scroll wheel zooms; the left button belongs to the active tool.

use bevy::prelude::*;
use bevy_pancam::{PanCam, PanCamPlugin};

/// Marker for the camera showing design space
#[derive(Component, Debug, Default)]
pub struct DesignCamera;

/// Height the camera centers on at startup, roughly mid x-height
const INITIAL_CENTER_Y: f32 = 300.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PanCamPlugin::default())
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, INITIAL_CENTER_Y, 0.0),
        PanCam {
            grab_buttons: vec![MouseButton::Middle, MouseButton::Right],
            ..default()
        },
        DesignCamera,
    ));
    debug!("Design camera spawned");
}

/// World units per screen pixel for the design camera
pub fn view_scale(projection: &Projection) -> f32 {
    match projection {
        Projection::Orthographic(ortho) => ortho.scale,
        _ => 1.0,
    }
}
