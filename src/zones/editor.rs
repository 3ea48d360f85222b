//! The blue zone editing tool
//!
//! [`BlueZoneEditor`] owns the zones of the current font and turns pointer
//! and key input into selection, movement, add and delete operations. Zones
//! are only normalized when they are committed back to font info.

use super::draw::{self, DrawCommand};
use super::normalize::{category_values, zones_from_values};
use super::source::{FontInfoSource, ObserverId, ReloadLatch};
use super::zone::{BlueZone, ZoneCategory};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Tunable values for the zone editor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneEditorConfig {
    /// Maximum distance from an edge for a click to select it
    pub select_distance: f64,
    /// Half the height of a zone created by double-clicking
    pub new_zone_half_height: f64,
    /// Zones allowed per category
    pub max_zones_per_category: usize,
    pub nudge: f64,
    pub shift_nudge: f64,
}

impl Default for ZoneEditorConfig {
    fn default() -> Self {
        Self {
            select_distance: 6.0,
            new_zone_half_height: 5.0,
            max_zones_per_category: MAX_ZONES_PER_CATEGORY,
            nudge: 1.0,
            shift_nudge: 10.0,
        }
    }
}

/// PostScript allows seven zones in each of BlueValues and OtherBlues
pub const MAX_ZONES_PER_CATEGORY: usize = 7;

/// Host display toggles the tool hides while it draws zones itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayDisplay {
    pub blues: bool,
    pub family_blues: bool,
}

impl Default for OverlayDisplay {
    fn default() -> Self {
        Self {
            blues: true,
            family_blues: true,
        }
    }
}

/// Keys the editor responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Up,
    Down,
    Delete,
    Return,
}

/// Zone counts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneCounts {
    pub primary: usize,
    pub other: usize,
}

impl ZoneCounts {
    pub fn of(&self, category: ZoneCategory) -> usize {
        match category {
            ZoneCategory::Primary => self.primary,
            ZoneCategory::Other => self.other,
        }
    }
}

/// Edits the blue zones of whichever font is current
#[derive(Debug)]
pub struct BlueZoneEditor<S: FontInfoSource> {
    config: ZoneEditorConfig,
    active: bool,
    font: Option<S>,
    observer: Option<ObserverId>,
    zones: Vec<BlueZone>,
    latch: ReloadLatch,
    previous_display: Option<OverlayDisplay>,
}

impl<S: FontInfoSource> Default for BlueZoneEditor<S> {
    fn default() -> Self {
        Self::new(ZoneEditorConfig::default())
    }
}

impl<S: FontInfoSource> BlueZoneEditor<S> {
    pub fn new(config: ZoneEditorConfig) -> Self {
        Self {
            config,
            active: false,
            font: None,
            observer: None,
            zones: Vec::new(),
            latch: ReloadLatch::default(),
            previous_display: None,
        }
    }

    pub fn config(&self) -> &ZoneEditorConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn zones(&self) -> &[BlueZone] {
        &self.zones
    }

    pub fn zones_mut(&mut self) -> &mut Vec<BlueZone> {
        &mut self.zones
    }

    pub fn font(&self) -> Option<&S> {
        self.font.as_ref()
    }

    pub fn is_updating_info(&self) -> bool {
        self.latch.is_held()
    }

    // Tool lifecycle

    /// Start editing: hide the host's blues overlay and load the current font
    pub fn activate(&mut self, display: &mut OverlayDisplay, current: Option<S>) {
        self.previous_display = Some(*display);
        display.blues = false;
        display.family_blues = false;

        self.active = true;
        self.zones.clear();
        self.font_became_current(current);
        info!("Blue zone tool activated with {} zones", self.zones.len());
    }

    /// Stop editing: restore the overlay and commit pending zones
    pub fn deactivate(&mut self, display: &mut OverlayDisplay) {
        if let Some(previous) = self.previous_display.take() {
            *display = previous;
        }
        if self.font.is_some() {
            self.commit();
            self.stop_observing();
        }
        self.font = None;
        self.zones.clear();
        self.active = false;
        info!("Blue zone tool deactivated");
    }

    // Notifications

    /// Track `current` as the active font
    ///
    /// When the font actually changes, zones are committed to the old font
    /// before switching. Zones are then reloaded from the tracked font.
    pub fn font_became_current(&mut self, current: Option<S>) {
        let changed = match (&self.font, &current) {
            (Some(tracked), Some(new)) => tracked.font_id() != new.font_id(),
            (None, None) => false,
            _ => true,
        };

        if changed {
            if self.font.is_some() {
                self.commit();
                self.stop_observing();
            }
            self.font = current;
            if let Some(font) = self.font.as_mut() {
                self.observer = Some(font.observe_info(self.latch.callback()));
                debug!("Observing font info for {:?}", font.font_id());
            } else {
                self.zones.clear();
            }
        }

        if self.font.is_some() {
            self.collect_zones();
        }
    }

    /// Font info changed; reload unless the change is our own commit
    pub fn metadata_changed(&mut self) {
        if !self.latch.is_held() && self.font.is_some() {
            debug!("Font info changed externally, reloading zones");
            self.collect_zones();
        }
    }

    /// Reload if an observed info change arrived since the last call
    pub fn sync_external_changes(&mut self) -> bool {
        if self.latch.take_pending() {
            self.metadata_changed();
            true
        } else {
            false
        }
    }

    // Input

    pub fn pointer_down(&mut self, point: Point, click_count: u32) {
        let y = point.y.round();
        match click_count {
            2 => {
                // Double click in a zone flips its category, elsewhere adds one
                let mut flipped = false;
                for zone in self.zones.iter_mut().filter(|z| z.point_inside(y)) {
                    zone.toggle_category();
                    flipped = true;
                }
                if !flipped {
                    let half = self.config.new_zone_half_height;
                    self.add_zone(y - half, y + half, ZoneCategory::Primary);
                }
            }
            1 => {
                let selected =
                    self.select_closest_edge(point, false, self.config.select_distance);
                if !selected {
                    for zone in self.zones.iter_mut().filter(|z| z.point_inside(y)) {
                        zone.select_both(point.x);
                    }
                }
            }
            _ => {}
        }
    }

    pub fn pointer_dragged(&mut self, _point: Point, delta: Vec2) {
        self.move_selection(delta);
    }

    pub fn pointer_up(&mut self, _point: Point) {
        if self.zones.iter().any(BlueZone::is_selected) {
            self.commit();
        }
    }

    /// Handle a key press, returning true when the view should redraw
    pub fn key_down(&mut self, key: EditKey, shift: bool) -> bool {
        let step = if shift {
            self.config.shift_nudge
        } else {
            self.config.nudge
        };
        match key {
            EditKey::Up => {
                self.move_selection(Vec2::new(0.0, step));
                true
            }
            EditKey::Down => {
                self.move_selection(Vec2::new(0.0, -step));
                true
            }
            EditKey::Delete => {
                self.remove_selected_zones();
                true
            }
            EditKey::Return => {
                self.flip_selected_zones();
                true
            }
        }
    }

    // Operations

    /// Move the selected edges of every zone
    pub fn move_selection(&mut self, delta: Vec2) {
        for zone in &mut self.zones {
            zone.move_selection(delta);
        }
    }

    /// Rebuild zones from the tracked font's info
    pub fn collect_zones(&mut self) {
        let Some(font) = self.font.as_ref() else {
            return;
        };
        self.zones = ZoneCategory::ALL
            .iter()
            .flat_map(|&category| zones_from_values(&font.zone_values(category), category))
            .collect();
        debug!("Collected {} zones", self.zones.len());
    }

    /// Normalize zones and write both categories back to font info
    pub fn commit(&mut self) {
        let Some(font) = self.font.as_mut() else {
            return;
        };
        let _guard = self.latch.hold();
        for category in ZoneCategory::ALL {
            let values = category_values(&self.zones, category);
            debug!("Writing {}: {:?}", category.info_key(), values);
            font.set_zone_values(category, &values);
        }
    }

    /// Select the nearest edge closer than `max_distance`
    ///
    /// Other zones are deselected first unless `keep_selection` is set.
    /// Returns true if an edge was selected.
    pub fn select_closest_edge(
        &mut self,
        point: Point,
        keep_selection: bool,
        max_distance: f64,
    ) -> bool {
        if self.font.is_none() {
            return false;
        }

        let mut closest: Option<usize> = None;
        let mut closest_distance = max_distance;
        for (index, zone) in self.zones.iter_mut().enumerate() {
            if !keep_selection {
                zone.deselect();
            }
            let distance = zone.distance(point.y);
            if distance < closest_distance {
                closest_distance = distance;
                closest = Some(index);
            }
        }

        match closest {
            Some(index) => {
                self.zones[index].select(point);
                true
            }
            None => false,
        }
    }

    pub fn count_zones(&self) -> ZoneCounts {
        let mut counts = ZoneCounts::default();
        for zone in &self.zones {
            match zone.category {
                ZoneCategory::Primary => counts.primary += 1,
                ZoneCategory::Other => counts.other += 1,
            }
        }
        counts
    }

    /// Add a zone with both edges selected, if the category has room
    pub fn add_zone(&mut self, start: f64, end: f64, category: ZoneCategory) {
        if self.font.is_none() {
            return;
        }
        if self.count_zones().of(category) >= self.config.max_zones_per_category {
            debug!("{} is full, not adding a zone", category.info_key());
            return;
        }
        let mut zone = BlueZone::new(start, end, category);
        zone.select_both(0.0);
        self.zones.push(zone);
    }

    /// Drop every zone with a selected edge and commit
    pub fn remove_selected_zones(&mut self) {
        self.zones.retain(|zone| !zone.is_selected());
        self.commit();
    }

    pub fn flip_selected_zones(&mut self) {
        for zone in self.zones.iter_mut().filter(|z| z.is_selected()) {
            zone.toggle_category();
        }
    }

    /// Drawing primitives for every zone at view `scale`
    pub fn draw(&self, scale: f64, view_width: f64) -> Vec<DrawCommand> {
        self.zones
            .iter()
            .flat_map(|zone| draw::zone_commands(zone, scale, view_width))
            .collect()
    }

    fn stop_observing(&mut self) {
        if let (Some(font), Some(id)) = (self.font.as_mut(), self.observer.take()) {
            font.unobserve_info(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::source::MemoryFontInfo;

    fn font(blues: &[f64], others: &[f64]) -> MemoryFontInfo {
        MemoryFontInfo::new(blues.to_vec(), others.to_vec())
    }

    fn active_editor(font: &MemoryFontInfo) -> BlueZoneEditor<MemoryFontInfo> {
        let mut editor = BlueZoneEditor::default();
        let mut display = OverlayDisplay::default();
        editor.activate(&mut display, Some(font.clone()));
        editor
    }

    #[test]
    fn activation_loads_zones_and_hides_overlay() {
        let font = font(&[-10.0, 0.0, 500.0, 510.0], &[-250.0, -240.0]);
        let mut editor = BlueZoneEditor::default();
        let mut display = OverlayDisplay::default();
        editor.activate(&mut display, Some(font.clone()));

        assert!(editor.is_active());
        assert!(!display.blues && !display.family_blues);
        assert_eq!(editor.zones().len(), 3);
        assert_eq!(editor.count_zones(), ZoneCounts { primary: 2, other: 1 });
        assert_eq!(font.observer_count(), 1);

        editor.deactivate(&mut display);
        assert_eq!(display, OverlayDisplay::default());
        assert_eq!(font.observer_count(), 0);
    }

    #[test]
    fn double_click_inside_a_zone_flips_it() {
        let font = font(&[0.0, 20.0], &[]);
        let mut editor = active_editor(&font);

        editor.pointer_down(Point::new(50.0, 10.0), 2);
        assert_eq!(editor.zones().len(), 1);
        assert_eq!(editor.zones()[0].category, ZoneCategory::Other);
    }

    #[test]
    fn double_click_flips_every_zone_under_the_pointer() {
        let font = font(&[0.0, 20.0], &[5.0, 30.0]);
        let mut editor = active_editor(&font);

        editor.pointer_down(Point::new(0.0, 10.0), 2);
        assert_eq!(editor.count_zones(), ZoneCounts { primary: 1, other: 1 });
        assert_eq!(editor.zones()[0].category, ZoneCategory::Other);
        assert_eq!(editor.zones()[1].category, ZoneCategory::Primary);
    }

    #[test]
    fn double_click_outside_adds_a_selected_zone() {
        let font = font(&[0.0, 20.0], &[]);
        let mut editor = active_editor(&font);

        editor.pointer_down(Point::new(3.0, 99.6), 2);
        let added = &editor.zones()[1];
        assert_eq!((added.start, added.end), (95.0, 105.0));
        assert_eq!(added.category, ZoneCategory::Primary);
        assert!(added.start_selected.is_some() && added.end_selected.is_some());
    }

    #[test]
    fn eighth_zone_is_not_added() {
        let values: Vec<f64> = (0..7).flat_map(|i| [i as f64 * 100.0, i as f64 * 100.0 + 10.0]).collect();
        let font = font(&values, &[]);
        let mut editor = active_editor(&font);
        assert_eq!(editor.zones().len(), 7);

        editor.add_zone(1000.0, 1010.0, ZoneCategory::Primary);
        assert_eq!(editor.zones().len(), 7);

        // The other category still has room
        editor.add_zone(1000.0, 1010.0, ZoneCategory::Other);
        assert_eq!(editor.zones().len(), 8);
    }

    #[test]
    fn nothing_happens_without_a_font() {
        let mut editor: BlueZoneEditor<MemoryFontInfo> = BlueZoneEditor::default();
        let mut display = OverlayDisplay::default();
        editor.activate(&mut display, None);

        editor.pointer_down(Point::new(0.0, 100.0), 2);
        assert!(editor.zones().is_empty());
        assert!(!editor.select_closest_edge(Point::new(0.0, 0.0), false, 6.0));
        editor.commit();
        editor.deactivate(&mut display);
    }

    #[test]
    fn single_click_selects_the_nearest_edge_within_range() {
        let font = font(&[0.0, 20.0, 100.0, 120.0], &[]);
        let mut editor = active_editor(&font);

        editor.pointer_down(Point::new(4.0, 97.0), 1);
        let zones = editor.zones();
        assert!(!zones[0].is_selected());
        assert_eq!(zones[1].start_selected, Some(4.0));
        assert_eq!(zones[1].end_selected, None);
    }

    #[test]
    fn single_click_inside_selects_the_whole_zone() {
        let font = font(&[0.0, 40.0, 100.0, 120.0], &[]);
        let mut editor = active_editor(&font);

        editor.pointer_down(Point::new(0.0, 110.0), 1);
        editor.pointer_down(Point::new(0.0, 20.0), 1);
        let zones = editor.zones();
        assert!(zones[0].start_selected.is_some() && zones[0].end_selected.is_some());
        // The edge search deselected the earlier selection
        assert!(!zones[1].is_selected());
    }

    #[test]
    fn single_click_in_empty_space_clears_selection() {
        let font = font(&[0.0, 40.0], &[]);
        let mut editor = active_editor(&font);
        editor.pointer_down(Point::new(0.0, 20.0), 1);
        assert!(editor.zones()[0].is_selected());

        editor.pointer_down(Point::new(0.0, 300.0), 1);
        assert!(!editor.zones()[0].is_selected());
    }

    #[test]
    fn drag_then_release_commits_normalized_values() {
        let font = font(&[0.0, 20.0, 40.0, 60.0], &[]);
        let mut editor = active_editor(&font);

        // Grab the lower zone's top edge and drag it into the upper zone
        editor.pointer_down(Point::new(0.0, 21.0), 1);
        editor.pointer_dragged(Point::new(0.0, 41.0), Vec2::new(0.0, 20.0));
        editor.pointer_dragged(Point::new(0.0, 51.0), Vec2::new(0.0, 10.0));
        editor.pointer_up(Point::new(0.0, 51.0));

        assert_eq!(font.zone_values(ZoneCategory::Primary), vec![0.0, 60.0]);
        assert_eq!(font.writes(), 2);
    }

    #[test]
    fn release_without_selection_does_not_commit() {
        let font = font(&[0.0, 20.0], &[]);
        let mut editor = active_editor(&font);
        editor.pointer_up(Point::new(0.0, 0.0));
        assert_eq!(font.writes(), 0);
    }

    #[test]
    fn arrow_keys_nudge_selected_edges() {
        let font = font(&[0.0, 20.0], &[]);
        let mut editor = active_editor(&font);
        editor.pointer_down(Point::new(0.0, 10.0), 1);

        assert!(editor.key_down(EditKey::Up, false));
        assert_eq!((editor.zones()[0].start, editor.zones()[0].end), (1.0, 21.0));

        editor.key_down(EditKey::Down, true);
        assert_eq!((editor.zones()[0].start, editor.zones()[0].end), (-9.0, 11.0));
        // Nudging alone does not write font info
        assert_eq!(font.writes(), 0);
    }

    #[test]
    fn return_flips_selected_zones_without_committing() {
        let font = font(&[0.0, 20.0, 100.0, 120.0], &[]);
        let mut editor = active_editor(&font);
        editor.pointer_down(Point::new(0.0, 10.0), 1);

        assert!(editor.key_down(EditKey::Return, false));
        assert_eq!(editor.zones()[0].category, ZoneCategory::Other);
        assert_eq!(editor.zones()[1].category, ZoneCategory::Primary);
        assert_eq!(font.writes(), 0);
    }

    #[test]
    fn delete_removes_selected_zones_and_commits() {
        let font = font(&[0.0, 20.0, 100.0, 120.0], &[-50.0, -40.0]);
        let mut editor = active_editor(&font);
        editor.pointer_down(Point::new(0.0, 110.0), 1);

        editor.key_down(EditKey::Delete, false);
        assert_eq!(editor.zones().len(), 2);
        assert_eq!(font.zone_values(ZoneCategory::Primary), vec![0.0, 20.0]);
        assert_eq!(font.zone_values(ZoneCategory::Other), vec![-50.0, -40.0]);
    }

    #[test]
    fn deactivation_commits_exactly_once() {
        let font = font(&[30.0, 10.0, 15.0, 25.0], &[]);
        let mut editor = BlueZoneEditor::default();
        let mut display = OverlayDisplay::default();
        editor.activate(&mut display, Some(font.clone()));
        editor.pointer_down(Point::new(0.0, 20.0), 1);
        assert!(editor.zones().iter().any(BlueZone::is_selected));

        editor.deactivate(&mut display);
        // One write per category
        assert_eq!(font.writes(), 2);
        assert_eq!(font.zone_values(ZoneCategory::Primary), vec![10.0, 30.0]);
        assert!(!editor.is_updating_info());
    }

    #[test]
    fn own_commit_does_not_trigger_a_reload() {
        let font = font(&[0.0, 20.0], &[]);
        let mut editor = active_editor(&font);
        editor.pointer_down(Point::new(0.0, 10.0), 1);
        editor.commit();

        // Selection survives because nothing was reloaded
        assert!(!editor.sync_external_changes());
        assert!(editor.zones()[0].is_selected());
    }

    #[test]
    fn external_change_reloads_zones() {
        let font = font(&[0.0, 20.0], &[]);
        let mut editor = active_editor(&font);

        font.edit_externally(ZoneCategory::Other, vec![-100.0, -90.0]);
        assert!(editor.sync_external_changes());
        assert_eq!(editor.count_zones(), ZoneCounts { primary: 1, other: 1 });
    }

    #[test]
    fn switching_fonts_commits_the_old_one() {
        let first = font(&[0.0, 20.0], &[]);
        let second = font(&[400.0, 410.0], &[-5.0, 5.0]);
        let mut editor = active_editor(&first);

        editor.pointer_down(Point::new(0.0, 10.0), 1);
        editor.key_down(EditKey::Up, true);
        editor.font_became_current(Some(second.clone()));

        assert_eq!(first.zone_values(ZoneCategory::Primary), vec![10.0, 30.0]);
        assert_eq!(first.observer_count(), 0);
        assert_eq!(second.observer_count(), 1);
        assert_eq!(editor.zones().len(), 2);
    }

    #[test]
    fn same_font_again_only_reloads() {
        let font = font(&[0.0, 20.0], &[]);
        let mut editor = active_editor(&font);
        editor.font_became_current(Some(font.clone()));

        assert_eq!(font.writes(), 0);
        assert_eq!(font.observer_count(), 1);
        assert_eq!(editor.zones().len(), 1);
    }

    #[test]
    fn losing_the_font_clears_zones() {
        let font = font(&[0.0, 20.0], &[]);
        let mut editor = active_editor(&font);
        editor.font_became_current(None);

        assert!(editor.zones().is_empty());
        assert!(editor.font().is_none());
        assert_eq!(font.writes(), 2);
    }
}
