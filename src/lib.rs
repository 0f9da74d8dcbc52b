//! Swell library - Procedural ocean wave synthesis and surface tessellation

pub mod cli;
pub mod error;
pub mod heightmap;
pub mod ocean;
pub mod params;
pub mod rendering;

pub use error::{OceanError, Result};
