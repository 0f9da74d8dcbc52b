//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::params::{ExportConfig, PlaneParams, SurfaceParams, WaveSpectrum};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "swell")]
#[command(about = "Procedural ocean wave generator and heightmap exporter", long_about = None)]
pub struct Args {
    /// Number of waves to generate (at most 64)
    #[arg(long, default_value_t = 4)]
    pub wave_count: usize,

    /// Median wavelength (meters)
    #[arg(long, value_name = "METERS", default_value_t = 1.0)]
    pub median_wavelength: f32,

    /// Wavelength half-width (meters)
    #[arg(long, value_name = "METERS", default_value_t = 0.5)]
    pub wavelength_range: f32,

    /// Median propagation direction (degrees)
    #[arg(long, value_name = "DEGREES", default_value_t = 0.0, allow_hyphen_values = true)]
    pub median_direction: f32,

    /// Direction half-width (degrees)
    #[arg(long, value_name = "DEGREES", default_value_t = 30.0)]
    pub directional_range: f32,

    /// Median amplitude (meters)
    #[arg(long, value_name = "METERS", default_value_t = 1.0, allow_hyphen_values = true)]
    pub median_amplitude: f32,

    /// Amplitude half-width (meters)
    #[arg(long, value_name = "METERS", default_value_t = 1.0)]
    pub amplitude_range: f32,

    /// Median speed multiplier
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub median_speed: f32,

    /// Speed half-width
    #[arg(long, default_value_t = 0.1)]
    pub speed_range: f32,

    /// Plane side length (meters)
    #[arg(long, value_name = "METERS", default_value_t = 10)]
    pub plane_length: u32,

    /// Quads per meter
    #[arg(long, default_value_t = 10)]
    pub quad_res: u32,

    /// RNG seed; random if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Elapsed time to sample the surface at (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0, allow_hyphen_values = true)]
    pub time: f32,

    /// Heightmap output path
    #[arg(long, short, value_name = "PATH", default_value = "heightmap.png")]
    pub output: PathBuf,

    /// Heightmap width and height (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 256)]
    pub size: u32,

    /// Print the active waves
    #[arg(long)]
    pub dump_waves: bool,
}

impl Args {
    pub fn spectrum(&self) -> WaveSpectrum {
        WaveSpectrum {
            wave_count: self.wave_count,
            median_wavelength: self.median_wavelength,
            wavelength_range: self.wavelength_range,
            median_direction: self.median_direction,
            directional_range: self.directional_range,
            median_amplitude: self.median_amplitude,
            amplitude_range: self.amplitude_range,
            median_speed: self.median_speed,
            speed_range: self.speed_range,
        }
    }

    pub fn surface_params(&self) -> SurfaceParams {
        SurfaceParams {
            spectrum: self.spectrum(),
            plane: PlaneParams {
                plane_length: self.plane_length,
                quad_res: self.quad_res,
            },
            ..Default::default()
        }
    }

    pub fn export_config(&self) -> ExportConfig {
        ExportConfig {
            output: self.output.clone(),
            size: self.size,
            time_s: self.time,
        }
    }

    /// Seeded RNG, or one seeded from the OS when no seed was given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                log::info!("Using seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_params() {
        let args = Args::parse_from(["swell"]);
        assert_eq!(args.spectrum(), WaveSpectrum::default());
        assert_eq!(args.surface_params().plane, PlaneParams::default());
        assert_eq!(args.export_config().size, ExportConfig::default().size);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "swell",
            "--wave-count",
            "32",
            "--median-direction",
            "-45",
            "--plane-length",
            "20",
            "--seed",
            "9",
            "-o",
            "out/waves.png",
        ]);
        let params = args.surface_params();
        assert_eq!(params.spectrum.wave_count, 32);
        assert_eq!(params.spectrum.median_direction, -45.0);
        assert_eq!(params.plane.plane_length, 20);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.output, PathBuf::from("out/waves.png"));
    }

    #[test]
    fn test_negative_speed_and_time_parse() {
        let args = Args::try_parse_from([
            "swell",
            "--median-speed",
            "-0.5",
            "--time",
            "-1.5",
        ])
        .unwrap();
        assert_eq!(args.median_speed, -0.5);
        assert_eq!(args.export_config().time_s, -1.5);

        // Parses, then fails validation as a spectrum error
        let err = args.spectrum().validate().unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
