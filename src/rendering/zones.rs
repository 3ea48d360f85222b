//! Blue zone rendering
//!
//! Draws the zone editor's primitives with meshes and 2D text. Visuals are
//! rebuilt every frame: existing zone entities are despawned and the current
//! drawing list is spawned again.

use super::cameras::{view_scale, DesignCamera};
use crate::core::settings::BlueZoneSettings;
use crate::core::state::AppState;
use crate::tools::BlueZoneTool;
use crate::zones::draw::overlay_commands;
use crate::zones::normalize::zones_from_values;
use crate::zones::{BlueZone, ColorRole, DrawCommand, FontInfoSource, OverlayDisplay, ZoneCategory};
use bevy::prelude::*;
use bevy::render::mesh::Mesh2d;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};
use bevy::text::TextLayout;
use std::collections::HashMap;

/// Font size labels are rasterized at; the transform scales them to size
const LABEL_RASTER_SIZE: f32 = 12.0;
const ZONE_Z: f32 = 1.0;
/// Each later primitive is drawn slightly above the previous one
const Z_STEP: f32 = 0.001;

/// The host's "show blues" display toggles
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct BluesDisplaySettings {
    pub overlay: OverlayDisplay,
}

/// Marker for entities drawn for zones
#[derive(Component)]
pub struct ZoneVisual;

/// One material per color role, created once
#[derive(Resource, Default)]
pub struct ZoneMaterials {
    materials: HashMap<ColorRole, Handle<ColorMaterial>>,
}

impl ZoneMaterials {
    fn get(&self, role: ColorRole) -> Option<Handle<ColorMaterial>> {
        self.materials.get(&role).cloned()
    }
}

const ALL_ROLES: [ColorRole; 6] = [
    ColorRole::Zone,
    ColorRole::SelectionTint,
    ColorRole::PrimaryMarker,
    ColorRole::OtherMarker,
    ColorRole::EdgeStroke,
    ColorRole::Label,
];

/// Color for each drawing role
pub fn role_color(role: ColorRole) -> Color {
    match role {
        ColorRole::Zone => Color::srgba(0.5, 0.7, 1.0, 0.25),
        ColorRole::SelectionTint => Color::srgba(0.3, 0.5, 1.0, 0.2),
        ColorRole::PrimaryMarker => Color::srgb(0.2, 0.2, 0.8),
        ColorRole::OtherMarker => Color::WHITE,
        ColorRole::EdgeStroke => Color::srgba(0.0, 0.0, 1.0, 0.5),
        ColorRole::Label => Color::srgba(0.45, 0.65, 1.0, 0.9),
    }
}

pub struct ZoneRenderingPlugin;

impl Plugin for ZoneRenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BluesDisplaySettings>()
            .init_resource::<ZoneMaterials>()
            .add_systems(Startup, setup_zone_materials)
            .add_systems(PostUpdate, render_zones);
    }
}

fn setup_zone_materials(
    mut zone_materials: ResMut<ZoneMaterials>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for role in ALL_ROLES {
        let handle = materials.add(ColorMaterial::from(role_color(role)));
        zone_materials.materials.insert(role, handle);
    }
}

/// Zones stored in a font, as the passive overlay shows them
fn stored_zones(font: &impl FontInfoSource) -> Vec<BlueZone> {
    ZoneCategory::ALL
        .iter()
        .flat_map(|&category| zones_from_values(&font.zone_values(category), category))
        .collect()
}

/// Rebuild zone visuals from the editor, or from font info when the tool
/// is inactive and the host overlay is on
#[allow(clippy::too_many_arguments)]
pub fn render_zones(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    zone_materials: Res<ZoneMaterials>,
    tool: Res<BlueZoneTool>,
    display: Res<BluesDisplaySettings>,
    app_state: Res<AppState>,
    settings: Res<BlueZoneSettings>,
    camera_query: Query<&Projection, With<DesignCamera>>,
    existing: Query<Entity, With<ZoneVisual>>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let scale = camera_query.single().map(view_scale).unwrap_or(1.0);

    let draw_list = if tool.editor.is_active() {
        tool.editor.draw(f64::from(scale), settings.view_width)
    } else if display.overlay.blues {
        match app_state.current_font() {
            Some(font) => {
                overlay_commands(&stored_zones(font), f64::from(scale), settings.view_width)
            }
            None => Vec::new(),
        }
    } else {
        Vec::new()
    };

    for (index, command) in draw_list.iter().enumerate() {
        let z = ZONE_Z + index as f32 * Z_STEP;
        spawn_command(&mut commands, &mut meshes, &zone_materials, command, z);
    }
}

fn vec2(point: kurbo::Point) -> Vec2 {
    Vec2::new(point.x as f32, point.y as f32)
}

fn spawn_command(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    zone_materials: &ZoneMaterials,
    command: &DrawCommand,
    z: f32,
) {
    match command {
        DrawCommand::Rect { min, max, color } => {
            let Some(material) = zone_materials.get(*color) else {
                return;
            };
            let (min, max) = (vec2(*min), vec2(*max));
            let size = max - min;
            if size.x <= 0.0 || size.y <= 0.0 {
                return;
            }
            let center = (min + max) / 2.0;
            commands.spawn((
                Mesh2d(meshes.add(Rectangle::new(size.x, size.y))),
                MeshMaterial2d(material),
                Transform::from_translation(center.extend(z)),
                ZoneVisual,
            ));
        }
        DrawCommand::Triangle { points, color } => {
            let Some(material) = zone_materials.get(*color) else {
                return;
            };
            let triangle = Triangle2d::new(vec2(points[0]), vec2(points[1]), vec2(points[2]));
            commands.spawn((
                Mesh2d(meshes.add(triangle)),
                MeshMaterial2d(material),
                Transform::from_translation(Vec3::new(0.0, 0.0, z)),
                ZoneVisual,
            ));
        }
        DrawCommand::Line {
            from,
            to,
            width,
            color,
        } => {
            let Some(material) = zone_materials.get(*color) else {
                return;
            };
            let (from, to) = (vec2(*from), vec2(*to));
            let length = from.distance(to);
            if length <= 0.0 {
                return;
            }
            let angle = (to - from).to_angle();
            let center = (from + to) / 2.0;
            commands.spawn((
                Mesh2d(meshes.add(Rectangle::new(length, *width as f32))),
                MeshMaterial2d(material),
                Transform::from_translation(center.extend(z))
                    .with_rotation(Quat::from_rotation_z(angle)),
                ZoneVisual,
            ));
        }
        DrawCommand::Label {
            text,
            center,
            size,
            color,
        } => {
            commands.spawn((
                Text2d::new(text.clone()),
                TextFont {
                    font_size: LABEL_RASTER_SIZE,
                    ..default()
                },
                TextColor(role_color(*color)),
                TextLayout::new_with_justify(JustifyText::Center),
                Transform::from_translation(vec2(*center).extend(z))
                    .with_scale(Vec3::splat(*size as f32 / LABEL_RASTER_SIZE)),
                ZoneVisual,
            ));
        }
    }
}
