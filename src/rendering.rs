//! GPU-facing records: per-frame uniforms, the WGSL wave library, and
//! (with the `gpu` feature) a wgpu-backed wave buffer.

use bytemuck::{Pod, Zeroable};

use crate::params::FrameParams;

/// WGSL declarations matching `Wave` / `FrameUniforms` plus the
/// height and slope functions, for inclusion in a water shader
pub const WAVES_WGSL: &str = include_str!("waves.wgsl");

/// Uniform buffer for the water shader (tint + sun + wave count + time)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub color: [f32; 4],
    pub sun_position: [f32; 4],
    pub wave_count: u32,
    pub time: f32,
    pub _padding: [f32; 2], // Pad to 48 bytes for uniform alignment
}

impl FrameUniforms {
    pub fn new(frame: &FrameParams, wave_count: usize, time_s: f32) -> Self {
        Self {
            color: frame.color.to_array(),
            sun_position: frame.sun_position.extend(1.0).to_array(),
            wave_count: wave_count as u32,
            time: time_s,
            _padding: [0.0; 2],
        }
    }
}

#[cfg(feature = "gpu")]
pub use gpu::GpuWaveBuffer;

#[cfg(feature = "gpu")]
mod gpu {
    use bytemuck::Zeroable;
    use wgpu::util::DeviceExt;

    use super::FrameUniforms;
    use crate::ocean::{Wave, WaveSink, WAVE_CAPACITY};

    /// Storage buffer of `WAVE_CAPACITY` waves plus the frame uniform
    /// buffer, bound at bindings 0 and 1 of one bind group
    pub struct GpuWaveBuffer<'q> {
        queue: &'q wgpu::Queue,
        pub wave_buffer: wgpu::Buffer,
        pub uniform_buffer: wgpu::Buffer,
        pub bind_group_layout: wgpu::BindGroupLayout,
        pub bind_group: wgpu::BindGroup,
    }

    impl<'q> GpuWaveBuffer<'q> {
        /// Allocate both buffers, zero-filled
        pub fn new(device: &wgpu::Device, queue: &'q wgpu::Queue) -> Self {
            let waves = [Wave::default(); WAVE_CAPACITY];
            let wave_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Wave Buffer"),
                contents: bytemuck::cast_slice(&waves),
                usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            });

            let uniforms = FrameUniforms::zeroed();
            let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Water Uniform Buffer"),
                contents: bytemuck::cast_slice(&[uniforms]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

            let bind_group_layout =
                device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Water Bind Group Layout"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Storage { read_only: true },
                                has_dynamic_offset: false,
                                min_binding_size: None,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Uniform,
                                has_dynamic_offset: false,
                                min_binding_size: None,
                            },
                            count: None,
                        },
                    ],
                });

            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Water Bind Group"),
                layout: &bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wave_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: uniform_buffer.as_entire_binding(),
                    },
                ],
            });

            Self {
                queue,
                wave_buffer,
                uniform_buffer,
                bind_group_layout,
                bind_group,
            }
        }
    }

    impl WaveSink for GpuWaveBuffer<'_> {
        fn upload_waves(&mut self, waves: &[Wave; WAVE_CAPACITY]) {
            self.queue
                .write_buffer(&self.wave_buffer, 0, bytemuck::cast_slice(waves));
        }

        fn upload_uniforms(&mut self, uniforms: &FrameUniforms) {
            self.queue
                .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[*uniforms]));
        }

        fn release(&mut self) {
            self.wave_buffer.destroy();
            self.uniform_buffer.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 48);
    }

    #[test]
    fn test_uniforms_from_frame() {
        let frame = FrameParams {
            color: Vec4::new(0.1, 0.2, 0.3, 1.0),
            sun_position: Vec3::new(5.0, 50.0, -5.0),
        };
        let uniforms = FrameUniforms::new(&frame, 12, 3.5);

        assert_eq!(uniforms.color, [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(uniforms.sun_position, [5.0, 50.0, -5.0, 1.0]);
        assert_eq!(uniforms.wave_count, 12);
        assert_eq!(uniforms.time, 3.5);
    }

    #[test]
    fn test_shader_declares_wave_functions() {
        assert!(WAVES_WGSL.contains("fn wave_height"));
        assert!(WAVES_WGSL.contains("fn wave_slope"));
        assert!(WAVES_WGSL.contains("WAVE_STRIDE: u32 = 7u"));
    }
}
