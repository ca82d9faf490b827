//! horo engine crate.
//!
//! Owns the platform, GPU and pixel-canvas pieces that host a `horo-dial`
//! clock face in a desktop window.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod raster;
pub mod render;
pub mod text;
