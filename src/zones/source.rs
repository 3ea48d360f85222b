//! Font info access for the zone editor
//!
//! The editor never talks to a concrete font type. It reads and writes zone
//! values through [`FontInfoSource`] and hears about outside edits through a
//! callback registered with [`FontInfoSource::observe_info`].

use super::zone::ZoneCategory;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Callback run synchronously after every font info write
pub type InfoCallback = Box<dyn Fn() + Send + Sync>;

/// Identity of a loaded font, used to detect font switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(u64);

impl FontId {
    /// Allocate a process-unique id
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        FontId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle returned by [`FontInfoSource::observe_info`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// A font whose info record holds blue zones
pub trait FontInfoSource {
    fn font_id(&self) -> FontId;

    /// Stored values for a category as a flat `low, high, ...` list
    fn zone_values(&self, category: ZoneCategory) -> Vec<f64>;

    /// Replace the stored values for a category and notify observers
    fn set_zone_values(&mut self, category: ZoneCategory, values: &[i32]);

    fn observe_info(&mut self, callback: InfoCallback) -> ObserverId;

    fn unobserve_info(&mut self, id: ObserverId);
}

/// Registered info-change callbacks for one font
#[derive(Default)]
pub struct InfoObservers {
    next_id: u64,
    entries: Vec<(ObserverId, InfoCallback)>,
}

impl InfoObservers {
    pub fn add(&mut self, callback: InfoCallback) -> ObserverId {
        self.next_id += 1;
        let id = ObserverId(self.next_id);
        self.entries.push((id, callback));
        id
    }

    pub fn remove(&mut self, id: ObserverId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub fn notify(&self) {
        for (_, callback) in &self.entries {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for InfoObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoObservers")
            .field("count", &self.entries.len())
            .finish()
    }
}

/// Suppresses reloads while the editor writes its own zones
///
/// Observer callbacks created by [`ReloadLatch::callback`] record a pending
/// reload only while the latch is released.
#[derive(Debug, Default, Clone)]
pub struct ReloadLatch {
    suppressed: Arc<AtomicBool>,
    pending: Arc<AtomicBool>,
}

impl ReloadLatch {
    /// Hold the latch until the returned guard is dropped
    pub fn hold(&self) -> LatchGuard<'_> {
        self.suppressed.store(true, Ordering::SeqCst);
        LatchGuard {
            flag: &self.suppressed,
        }
    }

    pub fn is_held(&self) -> bool {
        self.suppressed.load(Ordering::SeqCst)
    }

    /// Callback to register with a font's info observers
    pub fn callback(&self) -> InfoCallback {
        let suppressed = Arc::clone(&self.suppressed);
        let pending = Arc::clone(&self.pending);
        Box::new(move || {
            if !suppressed.load(Ordering::SeqCst) {
                pending.store(true, Ordering::SeqCst);
            }
        })
    }

    /// Clear and return the pending-reload flag
    pub fn take_pending(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}

/// Releases a [`ReloadLatch`] on drop, including during unwinding
#[derive(Debug)]
pub struct LatchGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for LatchGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
struct MemoryInfo {
    blue_values: Vec<f64>,
    other_blues: Vec<f64>,
    writes: usize,
    observers: InfoObservers,
}

/// In-memory font info, shared between clones
///
/// Used where no UFO is loaded, and by tests to watch what the editor
/// writes.
#[derive(Debug, Clone)]
pub struct MemoryFontInfo {
    id: FontId,
    inner: Arc<Mutex<MemoryInfo>>,
}

impl MemoryFontInfo {
    pub fn new(blue_values: Vec<f64>, other_blues: Vec<f64>) -> Self {
        Self {
            id: FontId::next(),
            inner: Arc::new(Mutex::new(MemoryInfo {
                blue_values,
                other_blues,
                ..Default::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInfo> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of category writes so far
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    pub fn observer_count(&self) -> usize {
        self.lock().observers.len()
    }

    /// Write values as an outside editor would
    pub fn edit_externally(&self, category: ZoneCategory, values: Vec<f64>) {
        let mut info = self.lock();
        match category {
            ZoneCategory::Primary => info.blue_values = values,
            ZoneCategory::Other => info.other_blues = values,
        }
        info.observers.notify();
    }
}

impl FontInfoSource for MemoryFontInfo {
    fn font_id(&self) -> FontId {
        self.id
    }

    fn zone_values(&self, category: ZoneCategory) -> Vec<f64> {
        let info = self.lock();
        match category {
            ZoneCategory::Primary => info.blue_values.clone(),
            ZoneCategory::Other => info.other_blues.clone(),
        }
    }

    fn set_zone_values(&mut self, category: ZoneCategory, values: &[i32]) {
        let mut info = self.lock();
        let values = values.iter().map(|&v| f64::from(v)).collect();
        match category {
            ZoneCategory::Primary => info.blue_values = values,
            ZoneCategory::Other => info.other_blues = values,
        }
        info.writes += 1;
        info.observers.notify();
    }

    fn observe_info(&mut self, callback: InfoCallback) -> ObserverId {
        self.lock().observers.add(callback)
    }

    fn unobserve_info(&mut self, id: ObserverId) {
        self.lock().observers.remove(id);
    }
}
