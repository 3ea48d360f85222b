//! A blue zone editor for UFO fonts, built with Rust, the Bevy game engine,
//! and Linebender crates.

use bluezone::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    match core::runner::run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
