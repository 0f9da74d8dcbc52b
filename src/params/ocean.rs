//! Wave spectrum and water-plane parameters.

use glam::Mat4;

use crate::error::{OceanError, Result};
use crate::ocean::WAVE_CAPACITY;

/// Statistical ranges the wave generator samples from.
///
/// Every `*_range` is a half-width: samples are drawn from
/// `[median - range, median + range]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveSpectrum {
    /// Number of waves to (re)generate, at most `WAVE_CAPACITY`
    pub wave_count: usize,

    /// Median wavelength (meters)
    pub median_wavelength: f32,

    /// Wavelength half-width (meters); must stay below the median
    pub wavelength_range: f32,

    /// Median propagation direction (degrees, 0 = +X, 90 = +Z)
    pub median_direction: f32,

    /// Direction half-width (degrees)
    pub directional_range: f32,

    /// Median amplitude (meters)
    pub median_amplitude: f32,

    /// Amplitude half-width (meters)
    pub amplitude_range: f32,

    /// Median speed multiplier (dimensionless, scales the dispersion speed)
    pub median_speed: f32,

    /// Speed half-width; the lower bound is floored at `MIN_SPEED`
    pub speed_range: f32,
}

impl Default for WaveSpectrum {
    fn default() -> Self {
        Self {
            wave_count: 4,
            median_wavelength: 1.0,
            wavelength_range: 0.5, // Keeps the shortest wave strictly positive
            median_direction: 0.0,
            directional_range: 30.0,
            median_amplitude: 1.0,
            amplitude_range: 1.0,
            median_speed: 1.0,
            speed_range: 0.1,
        }
    }
}

impl WaveSpectrum {
    /// Slowest speed multiplier the generator will sample
    pub const MIN_SPEED: f32 = 0.01;

    /// Validate counts and ranges before sampling
    pub fn validate(&self) -> Result<()> {
        if self.wave_count > WAVE_CAPACITY {
            return Err(OceanError::invalid(
                "wave_count",
                format!("{} exceeds capacity {}", self.wave_count, WAVE_CAPACITY),
            ));
        }

        let fields = [
            ("median_wavelength", self.median_wavelength),
            ("wavelength_range", self.wavelength_range),
            ("median_direction", self.median_direction),
            ("directional_range", self.directional_range),
            ("median_amplitude", self.median_amplitude),
            ("amplitude_range", self.amplitude_range),
            ("median_speed", self.median_speed),
            ("speed_range", self.speed_range),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(OceanError::invalid(name, format!("{} is not finite", value)));
            }
        }

        let ranges = [
            ("wavelength_range", self.wavelength_range),
            ("directional_range", self.directional_range),
            ("amplitude_range", self.amplitude_range),
            ("speed_range", self.speed_range),
        ];
        for (name, value) in ranges {
            if value < 0.0 {
                return Err(OceanError::invalid(name, format!("{} is negative", value)));
            }
        }

        let (min_wavelength, _) = self.wavelength_bounds();
        if min_wavelength <= 0.0 {
            return Err(OceanError::invalid(
                "wavelength_range",
                format!(
                    "shortest wavelength {} must be > 0 (median {}, range {})",
                    min_wavelength, self.median_wavelength, self.wavelength_range
                ),
            ));
        }

        let (_, max_speed) = self.speed_bounds();
        if max_speed < Self::MIN_SPEED {
            return Err(OceanError::invalid(
                "median_speed",
                format!("fastest speed {} is below the {} floor", max_speed, Self::MIN_SPEED),
            ));
        }

        let bounds = [
            ("wavelength_range", self.wavelength_bounds()),
            ("directional_range", self.direction_bounds()),
            ("amplitude_range", self.amplitude_bounds()),
            ("speed_range", self.speed_bounds()),
        ];
        for (name, (lo, hi)) in bounds {
            if !interval_is_sampleable(lo, hi) {
                return Err(OceanError::invalid(
                    name,
                    format!("sampling interval [{}, {}] overflows f32", lo, hi),
                ));
            }
        }

        Ok(())
    }

    pub fn wavelength_bounds(&self) -> (f32, f32) {
        symmetric(self.median_wavelength, self.wavelength_range)
    }

    pub fn direction_bounds(&self) -> (f32, f32) {
        symmetric(self.median_direction, self.directional_range)
    }

    pub fn amplitude_bounds(&self) -> (f32, f32) {
        symmetric(self.median_amplitude, self.amplitude_range)
    }

    /// Speed bounds with the lower end floored at `MIN_SPEED`
    pub fn speed_bounds(&self) -> (f32, f32) {
        let (lo, hi) = symmetric(self.median_speed, self.speed_range);
        (lo.max(Self::MIN_SPEED), hi)
    }
}

fn symmetric(median: f32, range: f32) -> (f32, f32) {
    (median - range, median + range)
}

/// Finite ends with headroom on the width, so uniform sampling cannot overflow
pub(crate) fn interval_is_sampleable(lo: f32, hi: f32) -> bool {
    lo.is_finite() && hi.is_finite() && lo <= hi && ((hi - lo) * 2.0).is_finite()
}

/// Water-plane tessellation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneParams {
    /// Side length of the square plane (meters)
    pub plane_length: u32,

    /// Quads per meter along each side
    pub quad_res: u32,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            plane_length: 10,
            quad_res: 10,
        }
    }
}

impl PlaneParams {
    pub fn validate(&self) -> Result<()> {
        if self.plane_length == 0 {
            return Err(OceanError::invalid("plane_length", "must be > 0"));
        }
        if self.quad_res == 0 {
            return Err(OceanError::invalid("quad_res", "must be > 0"));
        }
        Ok(())
    }

    /// Quads along one side (`plane_length * quad_res`)
    pub fn side_quads(&self) -> Option<u32> {
        self.plane_length.checked_mul(self.quad_res)
    }
}

/// Everything needed to open a water surface
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceParams {
    pub spectrum: WaveSpectrum,
    pub plane: PlaneParams,

    /// Local-to-world transform of the plane, used to place the wave origin region
    pub transform: Mat4,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            spectrum: WaveSpectrum::default(),
            plane: PlaneParams::default(),
            transform: Mat4::IDENTITY,
        }
    }
}

impl SurfaceParams {
    pub fn validate(&self) -> Result<()> {
        if !self.transform.is_finite() {
            return Err(OceanError::invalid("transform", "matrix has non-finite entries"));
        }
        self.spectrum.validate()?;
        self.plane.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spectrum_is_valid() {
        assert!(WaveSpectrum::default().validate().is_ok());
        assert!(SurfaceParams::default().validate().is_ok());
    }

    #[test]
    fn test_speed_floor() {
        let spectrum = WaveSpectrum {
            median_speed: 0.05,
            speed_range: 0.5,
            ..Default::default()
        };
        let (lo, hi) = spectrum.speed_bounds();
        assert_eq!(lo, WaveSpectrum::MIN_SPEED);
        assert!((hi - 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_wave_count_over_capacity() {
        let spectrum = WaveSpectrum {
            wave_count: WAVE_CAPACITY + 1,
            ..Default::default()
        };
        let err = spectrum.validate().unwrap_err();
        assert!(err.is_invalid_argument());

        let at_capacity = WaveSpectrum {
            wave_count: WAVE_CAPACITY,
            ..Default::default()
        };
        assert!(at_capacity.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_wavelength() {
        let spectrum = WaveSpectrum {
            median_wavelength: 1.0,
            wavelength_range: 1.0,
            ..Default::default()
        };
        assert!(spectrum.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_rejects_negative_range() {
        let spectrum = WaveSpectrum {
            directional_range: -1.0,
            ..Default::default()
        };
        assert!(spectrum.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_rejects_overflowing_interval() {
        // Finite field whose sampling width overflows f32
        let wide_direction = WaveSpectrum {
            directional_range: 2.0e38,
            ..Default::default()
        };
        assert!(wide_direction.validate().unwrap_err().is_invalid_argument());

        let huge_amplitude = WaveSpectrum {
            median_amplitude: f32::MAX,
            amplitude_range: f32::MAX,
            ..Default::default()
        };
        assert!(huge_amplitude.validate().unwrap_err().is_invalid_argument());

        let wide_speed = WaveSpectrum {
            median_speed: 3.0e38,
            speed_range: 1.0e38,
            ..Default::default()
        };
        assert!(wide_speed.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_rejects_non_finite_transform() {
        let params = SurfaceParams {
            transform: Mat4::from_scale(glam::Vec3::splat(f32::NAN)),
            ..Default::default()
        };
        assert!(params.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_plane_validation() {
        let zero_length = PlaneParams {
            plane_length: 0,
            quad_res: 4,
        };
        assert!(zero_length.validate().is_err());

        let zero_res = PlaneParams {
            plane_length: 4,
            quad_res: 0,
        };
        assert!(zero_res.validate().is_err());

        assert_eq!(PlaneParams::default().side_quads(), Some(100));
    }
}
