//! Core application state
//!
//! Holds every open font and tracks which one is current.

use crate::data::SharedUfo;
use anyhow::Result;
use bevy::prelude::*;
use std::path::Path;

/// Open fonts, thread-safe for Bevy
#[derive(Resource, Default, Clone, Debug)]
pub struct AppState {
    fonts: Vec<SharedUfo>,
    current: Option<usize>,
}

/// Sent whenever a different font (or no font) becomes current
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct FontBecameCurrent;

impl AppState {
    /// Load every UFO in `paths`; the first becomes current
    pub fn load_fonts<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut state = Self::default();
        for path in paths {
            let font = SharedUfo::load(path)?;
            info!("Loaded font '{}'", font.display_name());
            state.add_font(font);
        }
        Ok(state)
    }

    /// Open a font; it becomes current if nothing else is
    pub fn add_font(&mut self, font: SharedUfo) {
        self.fonts.push(font);
        if self.current.is_none() {
            self.current = Some(self.fonts.len() - 1);
        }
    }

    pub fn fonts(&self) -> &[SharedUfo] {
        &self.fonts
    }

    pub fn current_font(&self) -> Option<&SharedUfo> {
        self.current.and_then(|index| self.fonts.get(index))
    }

    /// Make the next open font current, wrapping around
    ///
    /// Returns true if the current font changed.
    pub fn cycle_font(&mut self) -> bool {
        match self.current {
            Some(index) if self.fonts.len() > 1 => {
                self.current = Some((index + 1) % self.fonts.len());
                true
            }
            _ => false,
        }
    }

    /// Close the current font
    pub fn close_current(&mut self) -> Option<SharedUfo> {
        let index = self.current?;
        let font = self.fonts.remove(index);
        self.current = if self.fonts.is_empty() {
            None
        } else {
            Some(index % self.fonts.len())
        };
        Some(font)
    }
}
