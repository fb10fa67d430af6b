//! Triangle mesh container shared by the ocean grid and the clouds.

mod sphere;

pub use sphere::{uv_sphere, SphereOptions};

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Vertex data for GPU upload (position + normal + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle mesh with optional texture coordinates and normals.
///
/// `tex_coords` and `normals` are either empty or exactly as long as
/// `positions`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub tex_coords: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    pub fn has_tex_coords(&self) -> bool {
        !self.tex_coords.is_empty()
    }

    /// Append another mesh, translating its vertices by `offset`.
    ///
    /// Vertices are not welded; appended indices are shifted by the current
    /// vertex count so they keep pointing at the appended vertices. When only
    /// one side carries normals or UVs, the other side is filled with the
    /// [`Mesh::to_vertices`] defaults (+Y, zero) so attributes stay aligned.
    pub fn append_translated(&mut self, other: &Mesh, offset: Vec3) {
        let base_len = self.positions.len();
        let other_len = other.positions.len();

        append_attribute(&mut self.normals, &other.normals, base_len, other_len, Vec3::Y);
        append_attribute(
            &mut self.tex_coords,
            &other.tex_coords,
            base_len,
            other_len,
            Vec2::ZERO,
        );

        self.positions
            .extend(other.positions.iter().map(|&p| p + offset));
        let base = base_len as u32;
        self.indices.extend(other.indices.iter().map(|&i| i + base));
    }

    /// Recompute smooth vertex normals from area-weighted face normals
    pub fn compute_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let v0 = self.positions[i0];
            let v1 = self.positions[i1];
            let v2 = self.positions[i2];

            // Cross product length is twice the triangle area
            let face = (v1 - v0).cross(v2 - v0);
            normals[i0] += face;
            normals[i1] += face;
            normals[i2] += face;
        }

        for n in &mut normals {
            *n = n.normalize_or_zero();
        }

        self.normals = normals;
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }

    /// Interleave into GPU vertices. Missing normals default to +Y, missing UVs to zero.
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, p)| Vertex {
                position: p.to_array(),
                normal: self.normals.get(i).copied().unwrap_or(Vec3::Y).to_array(),
                uv: self.tex_coords.get(i).copied().unwrap_or(Vec2::ZERO).to_array(),
            })
            .collect()
    }
}

/// Extend a per-vertex attribute, padding whichever side lacks it
fn append_attribute<T: Copy>(
    dst: &mut Vec<T>,
    src: &[T],
    dst_vertices: usize,
    src_vertices: usize,
    fill: T,
) {
    if dst.is_empty() && src.is_empty() {
        return;
    }
    dst.resize(dst_vertices, fill);
    if src.is_empty() {
        dst.resize(dst_vertices + src_vertices, fill);
    } else {
        dst.extend_from_slice(src);
    }
}
