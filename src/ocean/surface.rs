//! Water surface lifecycle: open, per-frame sync, close.

use rand::Rng;

use super::mesh::{tessellate, GridMesh};
use super::wave::Wave;
use super::waveset::{Bounds, WaveSet, WAVE_CAPACITY};
use crate::error::Result;
use crate::params::{FrameParams, SurfaceParams, WaveSpectrum};
use crate::rendering::FrameUniforms;

/// Rendering collaborator that receives the wave buffer and uniforms
pub trait WaveSink {
    /// Replace the whole fixed-width wave buffer
    fn upload_waves(&mut self, waves: &[Wave; WAVE_CAPACITY]);

    /// Replace the per-frame uniforms
    fn upload_uniforms(&mut self, uniforms: &FrameUniforms);

    /// Free any resources; called exactly once
    fn release(&mut self);
}

/// Tessellated plane plus its wave set, bound to a sink for its lifetime
///
/// The sink is released by `close`, or on drop if `close` was never called.
pub struct WaterSurface<S: WaveSink> {
    params: SurfaceParams,
    mesh: GridMesh,
    waves: WaveSet,
    sink: Option<S>,
}

impl<S: WaveSink> WaterSurface<S> {
    /// Tessellate the plane, generate waves and push them to `sink`
    ///
    /// On failure the sink is released before the error is returned.
    pub fn open<R: Rng + ?Sized>(params: SurfaceParams, mut sink: S, rng: &mut R) -> Result<Self> {
        let built = params.validate().and_then(|()| {
            let mesh = tessellate(params.plane.plane_length, params.plane.quad_res)?;
            let mut waves = WaveSet::new();
            waves.generate(&params.spectrum, &bounds_for(&params), rng)?;
            Ok((mesh, waves))
        });

        let (mesh, waves) = match built {
            Ok(parts) => parts,
            Err(e) => {
                sink.release();
                return Err(e);
            }
        };

        sink.upload_waves(waves.as_buffer());

        log::info!(
            "Opened water surface: {} vertices, {} waves",
            mesh.vertex_count(),
            waves.len()
        );

        Ok(Self {
            params,
            mesh,
            waves,
            sink: Some(sink),
        })
    }

    pub fn mesh(&self) -> &GridMesh {
        &self.mesh
    }

    pub fn waves(&self) -> &WaveSet {
        &self.waves
    }

    pub fn params(&self) -> &SurfaceParams {
        &self.params
    }

    /// Region wave origins are drawn from
    pub fn bounds(&self) -> Bounds {
        bounds_for(&self.params)
    }

    /// Reroll the active waves with the current spectrum and push the buffer
    pub fn regenerate_waves<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let bounds = self.bounds();
        self.waves.generate(&self.params.spectrum, &bounds, rng)?;
        self.push_waves();
        Ok(())
    }

    /// Swap the spectrum and regenerate; the old spectrum is kept on failure
    pub fn set_spectrum<R: Rng + ?Sized>(
        &mut self,
        spectrum: WaveSpectrum,
        rng: &mut R,
    ) -> Result<()> {
        spectrum.validate()?;
        self.params.spectrum = spectrum;
        self.regenerate_waves(rng)
    }

    /// Per-frame push of uniforms and the full wave buffer
    pub fn sync(&mut self, time_s: f32, frame: &FrameParams) -> FrameUniforms {
        let uniforms = FrameUniforms::new(frame, self.waves.len(), time_s);
        if let Some(sink) = self.sink.as_mut() {
            sink.upload_uniforms(&uniforms);
            sink.upload_waves(self.waves.as_buffer());
        }
        uniforms
    }

    /// Release the sink and hand it back
    pub fn close(mut self) -> Option<S> {
        let mut sink = self.sink.take()?;
        sink.release();
        log::info!("Closed water surface");
        Some(sink)
    }

    fn push_waves(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.upload_waves(self.waves.as_buffer());
        }
    }
}

impl<S: WaveSink> Drop for WaterSurface<S> {
    fn drop(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            sink.release();
            log::debug!("Water surface dropped without close; sink released");
        }
    }
}

fn bounds_for(params: &SurfaceParams) -> Bounds {
    Bounds::from_plane(params.plane.plane_length as f32, params.transform)
}
