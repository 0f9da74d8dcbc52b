//! Grayscale heightmap export of the summed wave surface.

use std::path::Path;

use glam::Vec3;
use image::{GrayImage, Luma};

use crate::error::{OceanError, Result};
use crate::ocean::WaveSet;

/// Sample `waves` on a `size x size` lattice over `[-L/2, L/2]^2` at `time_s`
///
/// Heights are mapped from `[-max_height, max_height]` to `0..=255`,
/// so a flat surface renders as mid gray.
pub fn render_heightmap(
    waves: &WaveSet,
    plane_length: f32,
    size: u32,
    time_s: f32,
) -> Result<GrayImage> {
    if size < 2 {
        return Err(OceanError::invalid("size", format!("{} must be >= 2", size)));
    }
    if !(plane_length.is_finite() && plane_length > 0.0) {
        return Err(OceanError::invalid(
            "plane_length",
            format!("{} must be finite and > 0", plane_length),
        ));
    }

    let half = plane_length * 0.5;
    let step = plane_length / (size - 1) as f32;
    let scale = waves.max_height();

    let image = GrayImage::from_fn(size, size, |px, py| {
        // Image rows run along +Z, columns along +X
        let pos = Vec3::new(px as f32 * step - half, 0.0, py as f32 * step - half);
        let h = waves.height_at(pos, time_s);
        let normalized = if scale > 0.0 { h / scale } else { 0.0 };
        let level = ((normalized * 0.5 + 0.5) * 255.0).round().clamp(0.0, 255.0);
        Luma([level as u8])
    });

    Ok(image)
}

/// Render and write a PNG heightmap
pub fn save_heightmap(
    path: &Path,
    waves: &WaveSet,
    plane_length: f32,
    size: u32,
    time_s: f32,
) -> Result<()> {
    let image = render_heightmap(waves, plane_length, size, time_s)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    image.save(path)?;
    log::info!("Saved {}x{} heightmap to {}", size, size, path.display());
    Ok(())
}
