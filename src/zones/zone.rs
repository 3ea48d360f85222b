//! A single blue zone
//!
//! A zone is a pair of vertical edge positions treated as one solid band.
//! Each edge can be selected on its own, which is how dragging one edge
//! resizes a zone while dragging both moves it.

use kurbo::{Point, Vec2};
use std::fmt;

/// Which font info list a zone belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZoneCategory {
    /// `postscriptBlueValues`
    #[default]
    Primary,
    /// `postscriptOtherBlues`
    Other,
}

impl ZoneCategory {
    pub const ALL: [ZoneCategory; 2] = [ZoneCategory::Primary, ZoneCategory::Other];

    /// The other category
    pub fn toggled(self) -> Self {
        match self {
            ZoneCategory::Primary => ZoneCategory::Other,
            ZoneCategory::Other => ZoneCategory::Primary,
        }
    }

    /// The UFO fontinfo key this category is stored under
    pub fn info_key(self) -> &'static str {
        match self {
            ZoneCategory::Primary => "postscriptBlueValues",
            ZoneCategory::Other => "postscriptOtherBlues",
        }
    }

    /// Label shown next to a selected zone
    pub fn label(self) -> &'static str {
        match self {
            ZoneCategory::Primary => "BlueValue",
            ZoneCategory::Other => "OtherBlue",
        }
    }
}

/// A pair of blue zone locations managed as one zone
#[derive(Debug, Clone, PartialEq)]
pub struct BlueZone {
    pub start: f64,
    pub end: f64,
    /// Horizontal pointer offset recorded when the start edge was selected
    pub start_selected: Option<f64>,
    /// Horizontal pointer offset recorded when the end edge was selected
    pub end_selected: Option<f64>,
    pub category: ZoneCategory,
}

impl BlueZone {
    pub fn new(start: f64, end: f64, category: ZoneCategory) -> Self {
        Self {
            start,
            end,
            start_selected: None,
            end_selected: None,
            category,
        }
    }

    /// Move every selected edge vertically by `delta.y`
    ///
    /// The horizontal component only updates the stored selection offsets.
    /// If the edges cross, they are swapped so that `start <= end`, and a
    /// single selected edge keeps its selection across the swap.
    pub fn move_selection(&mut self, delta: Vec2) {
        if let Some(offset) = self.start_selected.as_mut() {
            *offset += delta.x;
            self.start += delta.y;
        }
        if let Some(offset) = self.end_selected.as_mut() {
            *offset += delta.x;
            self.end += delta.y;
        }

        if self.start > self.end {
            std::mem::swap(&mut self.start, &mut self.end);
            if self.start_selected.is_some() != self.end_selected.is_some() {
                std::mem::swap(&mut self.start_selected, &mut self.end_selected);
            }
        }

        self.start = self.start.round();
        self.end = self.end.round();
    }

    /// True if either edge is selected
    pub fn is_selected(&self) -> bool {
        self.start_selected.is_some() || self.end_selected.is_some()
    }

    pub fn deselect(&mut self) {
        self.start_selected = None;
        self.end_selected = None;
    }

    /// Select whichever edge is vertically closest to `point`
    pub fn select(&mut self, point: Point) {
        self.deselect();
        if (self.start - point.y).abs() < (self.end - point.y).abs() {
            self.start_selected = Some(point.x);
        } else {
            self.end_selected = Some(point.x);
        }
    }

    /// Select both edges so the whole zone moves together
    pub fn select_both(&mut self, x: f64) {
        self.start_selected = Some(x);
        self.end_selected = Some(x);
    }

    /// Distance from `location` to the closest edge
    pub fn distance(&self, location: f64) -> f64 {
        (self.start - location)
            .abs()
            .min((self.end - location).abs())
    }

    /// True if `location` lies strictly between the two edges
    pub fn point_inside(&self, location: f64) -> bool {
        let (low, high) = self.bounds();
        low < location && location < high
    }

    pub fn toggle_category(&mut self) {
        self.category = self.category.toggled();
    }

    /// Edge positions ordered low to high
    pub fn bounds(&self) -> (f64, f64) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// Rounded integer range, ordered low to high
    pub fn range(&self) -> (i32, i32) {
        let (low, high) = self.bounds();
        (low.round() as i32, high.round() as i32)
    }
}

impl fmt::Display for BlueZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            ZoneCategory::Primary => write!(f, "<BlueZone {} {}>", self.start, self.end),
            ZoneCategory::Other => write!(f, "<BlueZone (Other) {} {}>", self.start, self.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(start: f64, end: f64) -> BlueZone {
        BlueZone::new(start, end, ZoneCategory::Primary)
    }

    #[test]
    fn distance_is_to_nearest_edge() {
        let z = zone(30.0, 50.0);
        assert_eq!(z.distance(28.0), 2.0);
        assert_eq!(z.distance(55.0), 5.0);
        assert_eq!(z.distance(40.0), 10.0);
    }

    #[test]
    fn point_inside_is_an_open_interval() {
        let z = zone(30.0, 50.0);
        assert!(z.point_inside(40.0));
        assert!(!z.point_inside(30.0));
        assert!(!z.point_inside(50.0));
        assert!(!z.point_inside(10.0));

        // Reversed edges behave the same
        let z = zone(50.0, 30.0);
        assert!(z.point_inside(40.0));
    }

    #[test]
    fn swap_keeps_selection_on_the_same_edge() {
        let mut z = zone(100.0, 50.0);
        z.start_selected = Some(0.0);
        z.move_selection(Vec2::ZERO);

        assert_eq!(z.start, 50.0);
        assert_eq!(z.end, 100.0);
        assert_eq!(z.start_selected, None);
        assert_eq!(z.end_selected, Some(0.0));
    }

    #[test]
    fn dragging_an_edge_past_the_other_swaps() {
        let mut z = zone(0.0, 20.0);
        z.end_selected = Some(12.0);
        z.move_selection(Vec2::new(3.0, -30.0));

        assert_eq!((z.start, z.end), (-10.0, 0.0));
        assert_eq!(z.start_selected, Some(15.0));
        assert_eq!(z.end_selected, None);
    }

    #[test]
    fn moving_both_edges_keeps_height_and_rounds() {
        let mut z = zone(10.0, 20.0);
        z.select_both(0.0);
        z.move_selection(Vec2::new(0.0, 4.6));

        assert_eq!((z.start, z.end), (15.0, 25.0));
        assert!(z.start_selected.is_some() && z.end_selected.is_some());
    }

    #[test]
    fn unselected_zone_does_not_move() {
        let mut z = zone(10.0, 20.0);
        z.move_selection(Vec2::new(5.0, 5.0));
        assert_eq!((z.start, z.end), (10.0, 20.0));
    }

    #[test]
    fn select_picks_the_closer_edge() {
        let mut z = zone(0.0, 20.0);
        z.select(Point::new(7.0, 3.0));
        assert_eq!(z.start_selected, Some(7.0));
        assert_eq!(z.end_selected, None);

        z.select(Point::new(-2.0, 18.0));
        assert_eq!(z.start_selected, None);
        assert_eq!(z.end_selected, Some(-2.0));

        // Equidistant goes to the end edge
        z.select(Point::new(0.0, 10.0));
        assert_eq!(z.end_selected, Some(0.0));
        assert!(z.is_selected());

        z.deselect();
        assert!(!z.is_selected());
    }

    #[test]
    fn a_selection_at_x_zero_still_counts() {
        let mut z = zone(0.0, 20.0);
        z.select(Point::new(0.0, 1.0));
        assert!(z.is_selected());
    }

    #[test]
    fn range_orders_and_rounds() {
        assert_eq!(zone(20.4, 9.6).range(), (10, 20));
    }

    #[test]
    fn category_toggles() {
        let mut z = zone(0.0, 10.0);
        z.toggle_category();
        assert_eq!(z.category, ZoneCategory::Other);
        assert_eq!(z.to_string(), "<BlueZone (Other) 0 10>");
        z.toggle_category();
        assert_eq!(z.category, ZoneCategory::Primary);
    }
}
