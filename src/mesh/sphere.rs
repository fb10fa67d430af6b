//! UV-sphere primitive used for cloud layers.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use super::Mesh;
use crate::error::{Error, Result};

/// Sphere tessellation options
#[derive(Debug, Clone, Copy)]
pub struct SphereOptions {
    /// Sphere radius (meters)
    pub radius: f32,

    /// Latitude bands (pole to pole), at least 2
    pub stacks: u32,

    /// Longitude segments, at least 3
    pub slices: u32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            stacks: 12,
            slices: 24,
        }
    }
}

impl SphereOptions {
    /// Vertex count produced by [`uv_sphere`] for these options
    pub fn vertex_count(&self) -> usize {
        ((self.stacks + 1) * (self.slices + 1)) as usize
    }
}

/// Generate a UV sphere centered at the origin with outward normals.
///
/// The seam column and both pole rows are duplicated so texture coordinates
/// stay continuous.
pub fn uv_sphere(opts: SphereOptions) -> Result<Mesh> {
    if opts.stacks < 2 || opts.slices < 3 {
        return Err(Error::resource(
            "sphere",
            format!(
                "tessellation needs at least 2 stacks and 3 slices, got {}x{}",
                opts.stacks, opts.slices
            ),
        ));
    }
    if !(opts.radius.is_finite() && opts.radius > 0.0) {
        return Err(Error::resource(
            "sphere",
            format!("radius must be positive, got {}", opts.radius),
        ));
    }

    let stacks = opts.stacks;
    let slices = opts.slices;
    let vertex_count = opts.vertex_count();

    let mut mesh = Mesh {
        positions: Vec::with_capacity(vertex_count),
        tex_coords: Vec::with_capacity(vertex_count),
        normals: Vec::with_capacity(vertex_count),
        indices: Vec::with_capacity((stacks * slices * 6) as usize),
    };

    for stack in 0..=stacks {
        let v = stack as f32 / stacks as f32;
        let phi = v * PI;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for slice in 0..=slices {
            let u = slice as f32 / slices as f32;
            let theta = u * (2.0 * PI);
            let (sin_theta, cos_theta) = theta.sin_cos();

            let normal = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);

            mesh.positions.push(normal * opts.radius);
            mesh.normals.push(normal);
            mesh.tex_coords.push(Vec2::new(u, v));
        }
    }

    let ring = slices + 1;
    for stack in 0..stacks {
        for slice in 0..slices {
            let i0 = stack * ring + slice;
            let i1 = i0 + 1;
            let i2 = (stack + 1) * ring + slice;
            let i3 = i2 + 1;

            // Two triangles per quad (CCW seen from outside)
            mesh.indices.extend_from_slice(&[i0, i1, i2, i1, i3, i2]);
        }
    }

    Ok(mesh)
}
