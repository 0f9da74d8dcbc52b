//! Single sinusoidal wave component and its height/slope evaluation.
//!
//! The formulas here mirror `wave_height` / `wave_slope` in
//! `src/waves.wgsl`, so CPU queries agree with GPU displacement.

use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::error::{OceanError, Result};

/// Gravity constant for the dispersion relation (m/s²)
pub const GRAVITY: f32 = 9.8;

/// Wave descriptor, laid out exactly as the shader's `Wave` struct
/// (7 floats, 28 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Wave {
    /// Unit propagation direction in the XZ plane
    pub direction: [f32; 2],
    /// Anchor point; carried to the GPU but not used by evaluation
    pub origin: [f32; 2],
    /// `2 / wavelength`
    pub frequency: f32,
    pub amplitude: f32,
    /// Angular speed, `speed * sqrt(g * 2π / wavelength)`
    pub phase: f32,
}

impl Wave {
    /// Build a wave from physical parameters
    ///
    /// # Arguments
    /// * `wavelength` - Crest-to-crest distance (meters, > 0)
    /// * `amplitude` - Height scale (meters)
    /// * `speed` - Multiplier on the dispersion-relation speed
    /// * `direction_deg` - Propagation angle (degrees, 0 = +X)
    /// * `origin` - Anchor point in world XZ
    pub fn new(
        wavelength: f32,
        amplitude: f32,
        speed: f32,
        direction_deg: f32,
        origin: Vec2,
    ) -> Result<Self> {
        if !(wavelength.is_finite() && wavelength > 0.0) {
            return Err(OceanError::invalid(
                "wavelength",
                format!("{} must be finite and > 0", wavelength),
            ));
        }

        let radians = direction_deg * PI / 180.0;
        let direction = Vec2::new(radians.cos(), radians.sin()).normalize();

        Ok(Self {
            direction: direction.to_array(),
            origin: origin.to_array(),
            frequency: 2.0 / wavelength,
            amplitude,
            phase: speed * (GRAVITY * 2.0 * PI / wavelength).sqrt(),
        })
    }

    pub fn direction(&self) -> Vec2 {
        Vec2::from_array(self.direction)
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::from_array(self.origin)
    }

    /// Projection of `pos` (XZ) onto the propagation direction
    pub fn wave_coord(&self, pos: Vec3) -> f32 {
        pos.x * self.direction[0] + pos.z * self.direction[1]
    }

    /// Time term of the sine argument
    pub fn time_phase(&self, time_s: f32) -> f32 {
        time_s * self.phase
    }

    fn argument(&self, pos: Vec3, time_s: f32) -> f32 {
        self.frequency * self.wave_coord(pos) + self.time_phase(time_s)
    }

    /// Height offset at `pos` after `time_s` seconds
    pub fn height(&self, pos: Vec3, time_s: f32) -> f32 {
        self.argument(pos, time_s).sin() * self.amplitude
    }

    /// Partial derivatives of `height` along X and Z, packed as `(dx, dz, 0)`
    pub fn slope(&self, pos: Vec3, time_s: f32) -> Vec3 {
        let c = self.argument(pos, time_s).cos();
        let k = self.frequency * self.amplitude;

        Vec3::new(k * self.direction[0] * c, k * self.direction[1] * c, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_shader() {
        assert_eq!(std::mem::size_of::<Wave>(), 28);
        assert_eq!(std::mem::align_of::<Wave>(), 4);
    }

    #[test]
    fn test_derived_fields() {
        for wavelength in [0.1_f32, 0.5, 1.0, 3.0, 120.0] {
            let wave = Wave::new(wavelength, 1.0, 1.0, 0.0, Vec2::ZERO).unwrap();
            assert_eq!(wave.frequency, 2.0 / wavelength);
            assert!(wave.phase > 0.0);
        }

        let wave = Wave::new(2.0 * PI, 1.0, 2.0, 0.0, Vec2::ZERO).unwrap();
        assert!((wave.phase - 2.0 * GRAVITY.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_direction_is_unit_length() {
        for deg in [-720.0_f32, -135.0, -30.0, 0.0, 13.7, 90.0, 181.0, 359.9, 1000.0] {
            let wave = Wave::new(1.0, 1.0, 1.0, deg, Vec2::ZERO).unwrap();
            assert!((wave.direction().length() - 1.0).abs() < 1e-5, "deg {}", deg);
        }

        let wave = Wave::new(1.0, 1.0, 1.0, 90.0, Vec2::ZERO).unwrap();
        assert!(wave.direction[0].abs() < 1e-6);
        assert!((wave.direction[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_bad_wavelength() {
        for wavelength in [0.0_f32, -1.0, f32::NAN, f32::INFINITY] {
            let err = Wave::new(wavelength, 1.0, 1.0, 0.0, Vec2::ZERO).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_height_bounded_by_amplitude() {
        let wave = Wave::new(1.7, 0.8, 1.1, 37.0, Vec2::ZERO).unwrap();
        for i in 0..50 {
            for j in 0..50 {
                let pos = Vec3::new(i as f32 * 0.37 - 9.0, 3.0, j as f32 * 0.41 - 10.0);
                let t = (i * j) as f32 * 0.013;
                let h = wave.height(pos, t);
                assert!(h.abs() <= wave.amplitude + 1e-6);
            }
        }
    }

    #[test]
    fn test_wave_coord_ignores_height() {
        let wave = Wave::new(1.0, 1.0, 1.0, 0.0, Vec2::ZERO).unwrap();
        let low = wave.wave_coord(Vec3::new(2.0, -5.0, 3.0));
        let high = wave.wave_coord(Vec3::new(2.0, 5.0, 3.0));
        assert_eq!(low, high);
        assert!((low - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_slope_matches_finite_difference() {
        let wave = Wave::new(4.0, 0.5, 1.0, 30.0, Vec2::ZERO).unwrap();
        let pos = Vec3::new(1.3, 0.0, -0.7);
        let t = 0.25;
        let eps = 1e-3;

        let dx = (wave.height(pos + Vec3::X * eps, t) - wave.height(pos - Vec3::X * eps, t))
            / (2.0 * eps);
        let dz = (wave.height(pos + Vec3::Z * eps, t) - wave.height(pos - Vec3::Z * eps, t))
            / (2.0 * eps);

        let slope = wave.slope(pos, t);
        assert!((slope.x - dx).abs() < 1e-3);
        assert!((slope.y - dz).abs() < 1e-3);
        assert_eq!(slope.z, 0.0);
    }

    #[test]
    fn test_zeroed_wave_is_inert() {
        let wave = Wave::zeroed();
        assert_eq!(wave.height(Vec3::new(3.0, 0.0, 4.0), 10.0), 0.0);
        assert_eq!(wave.slope(Vec3::new(3.0, 0.0, 4.0), 10.0), Vec3::ZERO);
    }
}
