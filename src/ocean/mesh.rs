//! Flat water-plane tessellation.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::error::{OceanError, Result};
use crate::params::PlaneParams;

/// Largest accepted quads-per-side; about 4.2M vertices and 200 MB of attributes
pub const MAX_SIDE_QUADS: u32 = 2048;

/// Tangent shared by every vertex (+X, negative handedness)
pub const PLANE_TANGENT: [f32; 4] = [1.0, 0.0, 0.0, -1.0];

/// Interleaved vertex record for upload (position + normal + uv + tangent)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub tangent: [f32; 4],
}

/// Square grid mesh centred on the origin in the XZ plane
///
/// Vertices are stored x-major: index `x * (side + 1) + z`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridMesh {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub tangents: Vec<[f32; 4]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    side_quads: u32,
}

impl GridMesh {
    /// Quads along one edge
    pub fn side_quads(&self) -> u32 {
        self.side_quads
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleave the attribute arrays into `Vertex` records
    pub fn interleaved(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .zip(&self.tangents)
            .map(|(((&position, &normal), &uv), &tangent)| Vertex {
                position,
                normal,
                uv,
                tangent,
            })
            .collect()
    }
}

/// Build a grid of `plane_length * quad_res` quads per side spanning
/// `[-L/2, L/2]` on X and Z
pub fn tessellate(plane_length: u32, quad_res: u32) -> Result<GridMesh> {
    let params = PlaneParams {
        plane_length,
        quad_res,
    };
    params.validate()?;

    let side = params
        .side_quads()
        .filter(|side| *side <= MAX_SIDE_QUADS)
        .ok_or_else(|| {
            OceanError::invalid(
                "quad_res",
                format!(
                    "{} x {} quads per side exceeds the {} limit",
                    plane_length, quad_res, MAX_SIDE_QUADS
                ),
            )
        })?;

    let length = plane_length as f32;
    let half_length = length * 0.5;
    let row = side as usize + 1;
    let vertex_count = row * row;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    // Generate flat XZ plane grid, x outer, z inner
    for x in 0..=side {
        for z in 0..=side {
            let u = x as f32 / side as f32;
            let v = z as f32 / side as f32;

            positions.push([u * length - half_length, 0.0, v * length - half_length]);
            uvs.push([u, v]);
        }
    }

    let mut indices = Vec::with_capacity(side as usize * side as usize * 6);
    let stride = side + 1;

    for x in 0..side {
        for z in 0..side {
            let vi = x * stride + z;

            indices.extend_from_slice(&[
                vi,
                vi + 1,
                vi + side + 2,
                vi,
                vi + side + 2,
                vi + side + 1,
            ]);
        }
    }

    let normals = recalculate_normals(&positions, &indices);

    log::debug!(
        "Tessellated {}m plane: {} quads/side, {} vertices, {} triangles",
        plane_length,
        side,
        vertex_count,
        indices.len() / 3
    );

    Ok(GridMesh {
        positions,
        uvs,
        tangents: vec![PLANE_TANGENT; vertex_count],
        normals,
        indices,
        side_quads: side,
    })
}

/// Area-weighted vertex normals: each face adds its unnormalised cross
/// product to its three corners, then every sum is normalised
pub fn recalculate_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut sums = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let i0 = tri[0] as usize;
        let i1 = tri[1] as usize;
        let i2 = tri[2] as usize;

        let v0 = Vec3::from_array(positions[i0]);
        let v1 = Vec3::from_array(positions[i1]);
        let v2 = Vec3::from_array(positions[i2]);

        let face = (v1 - v0).cross(v2 - v0);
        sums[i0] += face;
        sums[i1] += face;
        sums[i2] += face;
    }

    sums.into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}
