//! Rendering and Visualization
//!
//! - Camera management for viewport control
//! - Blue zone bands, markers and labels
//! - Status readout

pub mod cameras;
pub mod status;
pub mod zones;

// Re-export commonly used items
pub use cameras::{CameraPlugin, DesignCamera};
pub use status::StatusPlugin;
pub use zones::{BluesDisplaySettings, ZoneRenderingPlugin};
