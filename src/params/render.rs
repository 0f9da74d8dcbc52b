//! Per-frame shading inputs and heightmap export configuration.

use std::path::PathBuf;

use glam::{Vec3, Vec4};

/// Values pushed to the water shader alongside the wave buffer each frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameParams {
    /// Water tint (linear RGBA)
    pub color: Vec4,

    /// Sun position in world space (meters)
    pub sun_position: Vec3,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            sun_position: Vec3::new(0.0, 100.0, 0.0),
        }
    }
}

/// Heightmap export configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output PNG path
    pub output: PathBuf,

    /// Image width and height (pixels)
    pub size: u32,

    /// Elapsed time to sample the surface at (seconds)
    pub time_s: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("heightmap.png"),
            size: 256,
            time_s: 0.0,
        }
    }
}
