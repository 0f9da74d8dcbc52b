//! Swell - procedural ocean surface generator
//!
//! Generates a randomized wave set over a tessellated plane, syncs one
//! frame through a logging sink, and exports the summed surface height
//! as a grayscale PNG.

use clap::Parser;

use swell::cli::Args;
use swell::heightmap::save_heightmap;
use swell::ocean::{Wave, WaterSurface, WaveSink, WAVE_CAPACITY};
use swell::params::FrameParams;
use swell::rendering::FrameUniforms;

/// Sink that only reports what a renderer would receive
struct LogSink;

impl WaveSink for LogSink {
    fn upload_waves(&mut self, waves: &[Wave; WAVE_CAPACITY]) {
        log::debug!(
            "Wave buffer upload: {} bytes",
            std::mem::size_of_val(waves)
        );
    }

    fn upload_uniforms(&mut self, uniforms: &FrameUniforms) {
        log::debug!(
            "Uniforms: {} waves at t={:.2}s",
            uniforms.wave_count,
            uniforms.time
        );
    }

    fn release(&mut self) {
        log::debug!("Sink released");
    }
}

fn run(args: &Args) -> swell::Result<()> {
    let mut rng = args.rng();
    let params = args.surface_params();
    let export = args.export_config();

    let mut surface = WaterSurface::open(params, LogSink, &mut rng)?;

    let vertices = surface.mesh().interleaved();
    log::info!(
        "Vertex buffer: {} vertices, {} bytes ({} index bytes)",
        vertices.len(),
        std::mem::size_of_val(vertices.as_slice()),
        std::mem::size_of_val(surface.mesh().indices.as_slice())
    );

    surface.sync(export.time_s, &FrameParams::default());

    if args.dump_waves {
        for (i, wave) in surface.waves().active().iter().enumerate() {
            println!(
                "wave {:2}: dir ({:+.3}, {:+.3}) origin ({:+.2}, {:+.2}) freq {:.3} amp {:+.3} phase {:.3}",
                i,
                wave.direction[0],
                wave.direction[1],
                wave.origin[0],
                wave.origin[1],
                wave.frequency,
                wave.amplitude,
                wave.phase
            );
        }
    }

    save_heightmap(
        &export.output,
        surface.waves(),
        surface.params().plane.plane_length as f32,
        export.size,
        export.time_s,
    )?;

    surface.close();
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
