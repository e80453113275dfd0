//! Solarium - Interactive Solar System Visualization
//!
//! A library crate providing the simulation and presentation components
//! for testing and integration purposes.

pub mod assets;
pub mod audio;
pub mod camera;
pub mod catalog;
pub mod input;
pub mod scene;
pub mod share;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
