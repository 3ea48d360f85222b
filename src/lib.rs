//! Bluezone
pub mod core;
pub mod data;
pub mod logging;
pub mod rendering;
pub mod systems;
pub mod tools;
pub mod zones;
