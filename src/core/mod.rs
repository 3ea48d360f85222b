//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Application initialization and configuration
//! - State management
//! - Settings and CLI handling

pub mod app;
pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;
pub mod settings;
pub mod state;

// Re-export commonly used items
pub use app::create_app;
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use runner::run_app;
pub use settings::BlueZoneSettings;
pub use state::{AppState, FontBecameCurrent};
