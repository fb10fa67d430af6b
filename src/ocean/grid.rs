//! Ocean grid mesh: a fixed square lattice whose heights come from a [`WaveField`].

use glam::{Vec2, Vec3};
use log::debug;

use super::wave::WaveField;
use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::noise::NoiseSource;

/// Largest accepted resolution: 8192² vertices is already several GB of
/// positions and indices, and the bound keeps every index within `u32`
pub const MAX_RESOLUTION: usize = 8192;

/// Ocean grid mesh with baked wave heights
#[derive(Debug, Clone)]
pub struct OceanGrid {
    mesh: Mesh,
    resolution: usize,
    size: f32,
}

impl OceanGrid {
    /// Build the flat lattice: `resolution²` vertices spanning a square of
    /// side `size` centered at the origin, all at height zero.
    pub fn flat(resolution: usize, size: f32) -> Result<Self> {
        if resolution < 2 {
            return Err(Error::invalid(
                "grid_resolution",
                format!("must be at least 2, got {}", resolution),
            ));
        }
        if resolution > MAX_RESOLUTION {
            return Err(Error::invalid(
                "grid_resolution",
                format!(
                    "must be at most {}, got {}",
                    MAX_RESOLUTION, resolution
                ),
            ));
        }
        if !(size.is_finite() && size > 0.0) {
            return Err(Error::invalid(
                "domain_size",
                format!("must be finite and positive, got {}", size),
            ));
        }

        let n = resolution;
        let n_f = n as f32;
        let mut mesh = Mesh {
            positions: Vec::with_capacity(n * n),
            tex_coords: Vec::with_capacity(n * n),
            normals: Vec::new(),
            indices: Vec::with_capacity((n - 1) * (n - 1) * 6),
        };

        // Row-major: index = z * n + x
        for z in 0..n {
            for x in 0..n {
                mesh.positions.push(Vec3::new(
                    (x as f32 - n_f / 2.0) * size / n_f,
                    0.0,
                    (z as f32 - n_f / 2.0) * size / n_f,
                ));
                mesh.tex_coords.push(Vec2::new(
                    x as f32 / (n - 1) as f32,
                    z as f32 / (n - 1) as f32,
                ));
            }
        }

        let stride = n as u32;
        for z in 0..n - 1 {
            for x in 0..n - 1 {
                let i = (z * n + x) as u32;
                mesh.indices.extend_from_slice(&[
                    i,
                    i + 1,
                    i + stride,
                    i + 1,
                    i + stride + 1,
                    i + stride,
                ]);
            }
        }

        Ok(Self {
            mesh,
            resolution,
            size,
        })
    }

    /// Build the lattice and bake heights from `field` sampled at `t0`
    pub fn build<N: NoiseSource>(
        resolution: usize,
        size: f32,
        field: &WaveField<N>,
        t0: f32,
    ) -> Result<Self> {
        let mut grid = Self::flat(resolution, size)?;
        grid.resample(field, t0);

        debug!(
            "Baked ocean grid: {}x{} over {}m ({} vertices, {} triangles)",
            resolution,
            resolution,
            size,
            grid.mesh.num_vertices(),
            grid.mesh.num_triangles()
        );

        Ok(grid)
    }

    /// Re-evaluate every vertex height at time `t`; `x` and `z` never move.
    ///
    /// Normals are refreshed and point up (+Y) on a flat surface.
    pub fn resample<N: NoiseSource>(&mut self, field: &WaveField<N>, t: f32) {
        for position in &mut self.mesh.positions {
            position.y = field.evaluate(*position, t);
        }

        // Lattice winding faces -Y, flip so normals face the sky
        self.mesh.compute_normals();
        for normal in &mut self.mesh.normals {
            *normal = -*normal;
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Vertices per side
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Side length of the square domain (meters)
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Height of lattice vertex `(x, z)`, or `None` outside the grid
    pub fn height_at(&self, x: usize, z: usize) -> Option<f32> {
        if x >= self.resolution || z >= self.resolution {
            return None;
        }
        Some(self.mesh.positions[z * self.resolution + x].y)
    }

    /// Lowest and highest vertex height
    pub fn height_range(&self) -> (f32, f32) {
        self.mesh
            .positions
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::ConstantNoise;
    use crate::ocean::wave::{default_wave_table, WaveComponent};

    #[test]
    fn test_ocean_grid_creation() {
        for n in [2usize, 3, 4, 17] {
            let grid = OceanGrid::flat(n, 100.0).unwrap();
            let mesh = grid.mesh();

            // Check vertex count: n^2
            assert_eq!(mesh.num_vertices(), n * n);
            assert_eq!(mesh.tex_coords.len(), n * n);

            // Check triangle count: (n - 1)^2 * 2 triangles
            assert_eq!(mesh.num_triangles(), (n - 1) * (n - 1) * 2);
            assert!(mesh.indices.iter().all(|&i| (i as usize) < n * n));
        }
    }

    #[test]
    fn test_single_quad() {
        let grid = OceanGrid::flat(2, 10.0).unwrap();
        assert_eq!(grid.mesh().num_vertices(), 4);
        assert_eq!(grid.mesh().indices, vec![0, 1, 2, 1, 3, 2]);
    }

    #[test]
    fn test_vertex_world_positions() {
        let grid = OceanGrid::flat(4, 4.0).unwrap();
        let positions = &grid.mesh().positions;

        assert_eq!(positions[0], Vec3::new(-2.0, 0.0, -2.0));
        assert_eq!(positions[3 * 4 + 3], Vec3::new(1.0, 0.0, 1.0));
        // Row-major: index 1 is x = 1, z = 0
        assert_eq!(positions[1], Vec3::new(-1.0, 0.0, -2.0));
    }

    #[test]
    fn test_tex_coords_span_unit_square() {
        let grid = OceanGrid::flat(5, 8.0).unwrap();
        let uv = &grid.mesh().tex_coords;
        assert_eq!(uv[0], Vec2::ZERO);
        assert_eq!(uv[4], Vec2::new(1.0, 0.0));
        assert_eq!(uv[24], Vec2::ONE);
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        for (n, size) in [(0, 10.0), (1, 10.0), (4, 0.0), (4, -2.0), (4, f32::NAN)] {
            let err = OceanGrid::flat(n, size).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { .. }), "n={} size={}", n, size);
        }
    }

    #[test]
    fn test_rejects_resolution_above_cap() {
        // Rejected before any allocation happens
        for n in [MAX_RESOLUTION + 1, 65_536] {
            let err = OceanGrid::flat(n, 1.0).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidParameter {
                    name: "grid_resolution",
                    ..
                }
            ));
        }
        assert!(MAX_RESOLUTION * MAX_RESOLUTION <= u32::MAX as usize);
    }

    #[test]
    fn test_build_bakes_heights() {
        let field = WaveField::new(default_wave_table(), ConstantNoise::new(0.5)).unwrap();
        let grid = OceanGrid::build(8, 200.0, &field, 1.0).unwrap();

        for position in &grid.mesh().positions {
            assert_eq!(position.y, field.height(position.x, position.z, 1.0));
        }
        assert_eq!(grid.mesh().normals.len(), 64);
    }

    #[test]
    fn test_resample_keeps_lattice() {
        let field = WaveField::with_defaults();
        let mut grid = OceanGrid::build(6, 60.0, &field, 0.0).unwrap();
        let before = grid.mesh().clone();

        grid.resample(&field, 2.5);

        for (a, b) in before.positions.iter().zip(&grid.mesh().positions) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.z, b.z);
        }
        assert_eq!(before.indices, grid.mesh().indices);
        assert_eq!(
            grid.height_at(2, 3),
            Some(field.height(before.positions[20].x, before.positions[20].z, 2.5))
        );
    }

    #[test]
    fn test_normals_point_up_on_flat_field() {
        let field = WaveField::new(
            vec![WaveComponent::new(0.0, 10.0, 0.0, Vec2::X)],
            ConstantNoise::new(0.0),
        )
        .unwrap();
        // Only the chop term remains: heights within ±0.8m over 8m spacing
        let grid = OceanGrid::build(5, 40.0, &field, 0.0).unwrap();
        for normal in &grid.mesh().normals {
            assert!(normal.y > 0.0, "normal {:?}", normal);
        }
    }

    #[test]
    fn test_height_at_bounds() {
        let grid = OceanGrid::flat(3, 3.0).unwrap();
        assert_eq!(grid.height_at(2, 2), Some(0.0));
        assert_eq!(grid.height_at(3, 0), None);
        assert_eq!(grid.height_range(), (0.0, 0.0));
    }
}
