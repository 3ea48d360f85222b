//! Application runner logic
//!
//! Handles the different ways to run the Bluezone application

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use anyhow::Result;

/// Create and run the application with the given CLI arguments.
/// Handles special CLI flags before starting the editor.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        ConfigFile::initialize_config_directory()?;
        return Ok(());
    }

    let mut app = crate::core::app::create_app(cli_args)?;
    app.run();
    Ok(())
}
