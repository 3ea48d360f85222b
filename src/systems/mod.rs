//! Bevy Systems and Plugins
//!
//! - Plugin management and configuration
//! - Font switching

pub mod font_switching;
pub mod plugins;

// Re-export commonly used items
pub use font_switching::handle_font_switching;
pub use plugins::{configure_default_plugins, BluezoneSystems};
