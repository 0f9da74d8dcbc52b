//! Fixed-capacity wave buffer and the randomized wave generator.

use bytemuck::Zeroable;
use glam::{Mat4, Vec2, Vec3};
use rand::Rng;

use super::wave::Wave;
use crate::error::{OceanError, Result};
use crate::params::{interval_is_sampleable, WaveSpectrum};

/// Slots in the GPU wave buffer
pub const WAVE_CAPACITY: usize = 64;

/// Region that wave origins are scattered over (world space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Corners `(±L/2, 0, ±L/2)` of a plane, moved into world space by `transform`
    pub fn from_plane(plane_length: f32, transform: Mat4) -> Self {
        let half = plane_length * 0.5;
        Self {
            min: transform.transform_point3(Vec3::new(-half, 0.0, -half)),
            max: transform.transform_point3(Vec3::new(half, 0.0, half)),
        }
    }

    /// Range both origin components are drawn from.
    ///
    /// Uses the X extent for both axes, doubled. Ordered so a mirroring
    /// transform still yields `lo <= hi`. Non-finite or overflowing
    /// extents are rejected.
    pub fn origin_range(&self) -> Result<(f32, f32)> {
        let a = self.min.x * 2.0;
        let b = self.max.x * 2.0;
        let (lo, hi) = (a.min(b), a.max(b));
        if !(a.is_finite() && b.is_finite() && interval_is_sampleable(lo, hi)) {
            return Err(OceanError::invalid(
                "transform",
                format!("origin range [{}, {}] is not a finite interval", lo, hi),
            ));
        }
        Ok((lo, hi))
    }
}

/// Bounded wave sequence: 64 slots, of which the first `len` are active.
///
/// Inactive slots keep whatever they held last; a shader reading the
/// full buffer must stop at `len`.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveSet {
    slots: [Wave; WAVE_CAPACITY],
    len: usize,
}

impl Default for WaveSet {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveSet {
    /// Empty set with every slot zeroed
    pub fn new() -> Self {
        Self {
            slots: [Wave::zeroed(); WAVE_CAPACITY],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Overwrite every slot with an inert wave and reset the count
    pub fn clear(&mut self) {
        self.slots = [Wave::zeroed(); WAVE_CAPACITY];
        self.len = 0;
    }

    /// Meaningful prefix
    pub fn active(&self) -> &[Wave] {
        &self.slots[..self.len]
    }

    /// All slots, for fixed-width sinks
    pub fn as_buffer(&self) -> &[Wave; WAVE_CAPACITY] {
        &self.slots
    }

    /// Raw bytes of the full buffer (`WAVE_CAPACITY * 28`)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.slots)
    }

    /// Regenerate the first `spectrum.wave_count` slots in place
    ///
    /// Slots past the count are left untouched. Fails without writing
    /// anything if the spectrum is invalid.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        spectrum: &WaveSpectrum,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Result<()> {
        spectrum.validate()?;
        let (origin_min, origin_max) = bounds.origin_range()?;

        let (wavelength_min, wavelength_max) = spectrum.wavelength_bounds();
        let (direction_min, direction_max) = spectrum.direction_bounds();
        let (amplitude_min, amplitude_max) = spectrum.amplitude_bounds();
        let (speed_min, speed_max) = spectrum.speed_bounds();

        for slot in self.slots.iter_mut().take(spectrum.wave_count) {
            let wavelength = rng.gen_range(wavelength_min..=wavelength_max);
            let direction = rng.gen_range(direction_min..=direction_max);
            let amplitude = rng.gen_range(amplitude_min..=amplitude_max);
            let speed = rng.gen_range(speed_min..=speed_max);
            let origin = Vec2::new(
                rng.gen_range(origin_min..=origin_max),
                rng.gen_range(origin_min..=origin_max),
            );

            *slot = Wave::new(wavelength, amplitude, speed, direction, origin)?;
        }
        self.len = spectrum.wave_count;

        log::debug!(
            "Generated {} waves (wavelength {:.3}..{:.3}, direction {:.1}..{:.1} deg)",
            spectrum.wave_count,
            wavelength_min,
            wavelength_max,
            direction_min,
            direction_max
        );

        Ok(())
    }

    /// Summed height of the active waves
    pub fn height_at(&self, pos: Vec3, time_s: f32) -> f32 {
        self.active().iter().map(|w| w.height(pos, time_s)).sum()
    }

    /// Summed slope `(dx, dz, 0)` of the active waves
    pub fn slope_at(&self, pos: Vec3, time_s: f32) -> Vec3 {
        self.active().iter().map(|w| w.slope(pos, time_s)).sum()
    }

    /// Surface normal from the summed slope
    pub fn normal_at(&self, pos: Vec3, time_s: f32) -> Vec3 {
        let slope = self.slope_at(pos, time_s);
        Vec3::new(-slope.x, 1.0, -slope.y).normalize()
    }

    /// Sum of absolute active amplitudes; bounds `|height_at|`
    pub fn max_height(&self) -> f32 {
        self.active().iter().map(|w| w.amplitude.abs()).sum()
    }
}

/// Fresh set with `spectrum.wave_count` generated waves
pub fn generate_wave_set<R: Rng + ?Sized>(
    spectrum: &WaveSpectrum,
    bounds: &Bounds,
    rng: &mut R,
) -> Result<WaveSet> {
    let mut set = WaveSet::new();
    set.generate(spectrum, bounds, rng)?;
    Ok(set)
}
