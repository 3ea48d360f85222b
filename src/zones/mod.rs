//! Blue zone model and editing
//!
//! Nothing in here depends on Bevy. The tool in `crate::tools::blue_zones`
//! feeds input into [`BlueZoneEditor`] and draws what it returns.

pub mod draw;
pub mod editor;
pub mod normalize;
pub mod source;
pub mod zone;

pub use draw::{ColorRole, DrawCommand};
pub use editor::{
    BlueZoneEditor, EditKey, OverlayDisplay, ZoneCounts, ZoneEditorConfig, MAX_ZONES_PER_CATEGORY,
};
pub use source::{FontId, FontInfoSource, InfoCallback, MemoryFontInfo, ObserverId, ReloadLatch};
pub use zone::{BlueZone, ZoneCategory};
