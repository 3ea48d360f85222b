//! UFO file I/O operations and the shared font handle the tool edits

use crate::zones::source::InfoObservers;
use crate::zones::{FontId, FontInfoSource, InfoCallback, ObserverId, ZoneCategory};
use anyhow::{Context, Result};
use norad::Font;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Load a UFO font file from disk
pub fn load_ufo_from_path(path: impl AsRef<Path>) -> Result<Font> {
    let path = path.as_ref();
    let font =
        Font::load(path).with_context(|| format!("Failed to load UFO: {}", path.display()))?;
    Ok(font)
}

struct UfoDocument {
    path: Option<PathBuf>,
    font: Font,
    observers: InfoObservers,
}

/// A loaded UFO shared between the app state and the zone editor
///
/// Clones point at the same font. Writes through [`FontInfoSource`] notify
/// every registered info observer before returning.
#[derive(Clone)]
pub struct SharedUfo {
    id: FontId,
    inner: Arc<Mutex<UfoDocument>>,
}

impl SharedUfo {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let font = load_ufo_from_path(path)?;
        Ok(Self::from_font(font, Some(path.to_path_buf())))
    }

    pub fn from_font(font: Font, path: Option<PathBuf>) -> Self {
        Self {
            id: FontId::next(),
            inner: Arc::new(Mutex::new(UfoDocument {
                path,
                font,
                observers: InfoObservers::default(),
            })),
        }
    }

    fn read(&self) -> MutexGuard<'_, UfoDocument> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> MutexGuard<'_, UfoDocument> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.read().path.clone()
    }

    /// Family and style name, or the file name when the font has neither
    pub fn display_name(&self) -> String {
        let document = self.read();
        let info = &document.font.font_info;
        let parts: Vec<&str> = [info.family_name.as_deref(), info.style_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if !parts.is_empty() {
            return parts.join(" ");
        }
        document
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled Font".to_string())
    }

    /// Run `f` with read access to the underlying norad font
    pub fn with_font<R>(&self, f: impl FnOnce(&Font) -> R) -> R {
        f(&self.read().font)
    }
}

impl fmt::Debug for SharedUfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedUfo")
            .field("id", &self.id)
            .field("path", &self.path())
            .finish()
    }
}

impl FontInfoSource for SharedUfo {
    fn font_id(&self) -> FontId {
        self.id
    }

    fn zone_values(&self, category: ZoneCategory) -> Vec<f64> {
        let document = self.read();
        let info = &document.font.font_info;
        let values = match category {
            ZoneCategory::Primary => &info.postscript_blue_values,
            ZoneCategory::Other => &info.postscript_other_blues,
        };
        values.clone().unwrap_or_default()
    }

    fn set_zone_values(&mut self, category: ZoneCategory, values: &[i32]) {
        let mut document = self.write();
        // An empty list is stored as an absent key
        let values = if values.is_empty() {
            None
        } else {
            Some(values.iter().map(|&v| f64::from(v)).collect())
        };
        let info = &mut document.font.font_info;
        match category {
            ZoneCategory::Primary => info.postscript_blue_values = values,
            ZoneCategory::Other => info.postscript_other_blues = values,
        }
        document.observers.notify();
    }

    fn observe_info(&mut self, callback: InfoCallback) -> ObserverId {
        self.write().observers.add(callback)
    }

    fn unobserve_info(&mut self, id: ObserverId) {
        self.write().observers.remove(id);
    }
}
