//! Drawing primitives for zones
//!
//! Zones are described as a flat list of shapes in glyph coordinates, which
//! the renderer turns into meshes and text. Colors are roles, not values, so
//! the renderer can pick them from the theme.

use super::zone::{BlueZone, ZoneCategory};
use kurbo::Point;

/// Height of the category marker triangle
const MARKER_HEIGHT: f64 = 10.0;
/// Half the width of the category marker's base
const MARKER_HALF_WIDTH: f64 = 5.0;
/// Half the length of the stroke drawn over a selected edge
const EDGE_STROKE_HALF_LENGTH: f64 = 30.0;
const EDGE_STROKE_WIDTH: f64 = 3.0;
const LABEL_SIZE: f64 = 12.0;
/// Zones thinner than this push the lower label down so labels don't overlap
const MIN_LABEL_GAP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Zone,
    SelectionTint,
    PrimaryMarker,
    OtherMarker,
    EdgeStroke,
    Label,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        min: Point,
        max: Point,
        color: ColorRole,
    },
    Triangle {
        points: [Point; 3],
        color: ColorRole,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: ColorRole,
    },
    /// Text centered on `center`
    Label {
        text: String,
        center: Point,
        size: f64,
        color: ColorRole,
    },
}

fn band(zone: &BlueZone, scale: f64, view_width: f64, color: ColorRole) -> DrawCommand {
    let (low, high) = zone.bounds();
    DrawCommand::Rect {
        min: Point::new(-view_width * scale, low),
        max: Point::new(view_width * scale, high),
        color,
    }
}

/// Shapes for one zone as the editing tool shows it
pub fn zone_commands(zone: &BlueZone, scale: f64, view_width: f64) -> Vec<DrawCommand> {
    let mut commands = vec![band(zone, scale, view_width, ColorRole::Zone)];

    let selected_edges: Vec<f64> = [
        zone.start_selected.map(|_| zone.start),
        zone.end_selected.map(|_| zone.end),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !selected_edges.is_empty() {
        commands.push(band(zone, scale, view_width, ColorRole::SelectionTint));
    }

    // Primary zones point up from the top edge, other blues point down
    // from the bottom edge
    let (apex, base, color) = match zone.category {
        ZoneCategory::Primary => (zone.end, zone.end - MARKER_HEIGHT, ColorRole::PrimaryMarker),
        ZoneCategory::Other => (zone.start, zone.start + MARKER_HEIGHT, ColorRole::OtherMarker),
    };
    commands.push(DrawCommand::Triangle {
        points: [
            Point::new(0.0, apex),
            Point::new(-MARKER_HALF_WIDTH, base),
            Point::new(MARKER_HALF_WIDTH, base),
        ],
        color,
    });

    for &y in &selected_edges {
        commands.push(DrawCommand::Line {
            from: Point::new(-EDGE_STROKE_HALF_LENGTH, y),
            to: Point::new(EDGE_STROKE_HALF_LENGTH, y),
            width: EDGE_STROKE_WIDTH * scale,
            color: ColorRole::EdgeStroke,
        });
    }

    if !selected_edges.is_empty() {
        let (low, high) = zone.range();
        let size = LABEL_SIZE * scale;
        let height = f64::from(high - low);
        let offset = if height < MIN_LABEL_GAP {
            MIN_LABEL_GAP - height
        } else {
            0.0
        };
        commands.push(DrawCommand::Label {
            text: low.to_string(),
            center: Point::new(0.0, f64::from(low) - size / 2.0 - offset),
            size,
            color: ColorRole::Label,
        });
        commands.push(DrawCommand::Label {
            text: high.to_string(),
            center: Point::new(0.0, f64::from(high) + size / 2.0),
            size,
            color: ColorRole::Label,
        });
        commands.push(DrawCommand::Label {
            text: zone.category.label().to_string(),
            center: Point::new(0.0, f64::from(high) + size * 1.5),
            size,
            color: ColorRole::Label,
        });
    }

    commands
}

/// Plain bands, as the host shows blues while the tool is inactive
pub fn overlay_commands(zones: &[BlueZone], scale: f64, view_width: f64) -> Vec<DrawCommand> {
    zones
        .iter()
        .map(|zone| band(zone, scale, view_width, ColorRole::Zone))
        .collect()
}
