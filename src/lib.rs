//! Orrery - an interactive solar system
//!
//! A library crate providing the orbital model, camera director and scenes,
//! exposed for testing and integration purposes.

pub mod assets;
pub mod audio;
pub mod bodies;
pub mod camera;
pub mod character;
pub mod orbit;
pub mod quiz;
pub mod render;
pub mod scenes;
pub mod time;
pub mod types;
pub mod ui;
