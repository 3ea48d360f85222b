//! Font source data

pub mod ufo;

pub use ufo::{load_ufo_from_path, SharedUfo};
