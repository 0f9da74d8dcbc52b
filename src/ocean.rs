//! Procedural ocean surface: sinusoidal wave synthesis and plane tessellation.

mod mesh;
mod surface;
mod wave;
mod waveset;

// Re-export public types
pub use mesh::{recalculate_normals, tessellate, GridMesh, Vertex, MAX_SIDE_QUADS, PLANE_TANGENT};
pub use surface::{WaterSurface, WaveSink};
pub use wave::{Wave, GRAVITY};
pub use waveset::{generate_wave_set, Bounds, WaveSet, WAVE_CAPACITY};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{SurfaceParams, WaveSpectrum};
    use glam::{Mat4, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_displaced_mesh_stays_within_amplitude_sum() {
        let params = SurfaceParams::default();
        let mesh = tessellate(params.plane.plane_length, 2).unwrap();
        let spectrum = WaveSpectrum {
            wave_count: 12,
            ..Default::default()
        };
        let bounds = Bounds::from_plane(params.plane.plane_length as f32, Mat4::IDENTITY);
        let mut rng = StdRng::seed_from_u64(99);
        let waves = generate_wave_set(&spectrum, &bounds, &mut rng).unwrap();

        let limit = waves.max_height() + 1e-4;
        for p in &mesh.positions {
            let h = waves.height_at(Vec3::from_array(*p), 2.0);
            assert!(h.abs() <= limit);
        }
    }
}
