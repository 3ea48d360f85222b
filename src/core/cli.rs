//! Command line interface for the blue zone editor
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Bluezone CLI arguments
///
/// Examples:
///   bluezone --edit my-font.ufo                    # Edit one font
///   bluezone --edit Regular.ufo --edit Bold.ufo    # Tab switches between fonts
///   bluezone --new-config                          # Write ~/.config/bluezone/settings.json
#[derive(Parser, Debug, Resource, Clone, Default)]
#[clap(
    name = "bluezone",
    version,
    about = "Edit PostScript blue zones of UFO fonts",
    long_about = "Bluezone shows the BlueValues and OtherBlues of UFO fonts as bands you can create, drag, merge, flip and delete. Zones are written back to the in-memory font info whenever an edit is committed."
)]
pub struct CliArgs {
    /// UFO sources to edit
    ///
    /// Pass the flag more than once to open several fonts; the first one
    /// starts as the current font.
    #[clap(
        long = "edit",
        short = 'e',
        help = "UFO source to edit (repeatable)",
        long_help = "Path to a UFO directory to edit. Pass --edit several times to open more than one font; Tab cycles the current font."
    )]
    pub font_sources: Vec<PathBuf>,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Create ~/.config/bluezone with a settings.json holding the default editor settings, and a logs directory."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that all paths exist and look like UFOs before the
    /// application starts.
    pub fn validate(&self) -> Result<(), String> {
        for path in &self.font_sources {
            if !path.exists() {
                return Err(format!(
                    "Font source does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
            if !path.is_dir() {
                return Err(format!(
                    "Not a UFO directory: {}\nOnly UFO sources are supported.",
                    path.display()
                ));
            }
            if !path.join("metainfo.plist").exists() {
                return Err(format!(
                    "Not a valid UFO directory: missing metainfo.plist in {}\nMake sure this is a valid UFO directory.",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}
