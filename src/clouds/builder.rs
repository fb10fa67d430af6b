//! Builds a single cloud mesh as a union of overlapping spheres.

use std::f32::consts::TAU;

use glam::{Mat4, Quat, Vec3};

use crate::error::Result;
use crate::mesh::{uv_sphere, Mesh, SphereOptions};
use crate::params::CloudShape;
use crate::random::PlacementRng;

/// One sphere contributing to a cloud, relative to the cloud center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudLayer {
    pub offset: Vec3,
    pub radius: f32,
}

/// A merged cloud mesh and its draw transform.
///
/// Position and scale are never baked into the vertices.
#[derive(Debug, Clone)]
pub struct Cloud {
    mesh: Mesh,
    position: Vec3,
    scale: f32,
}

impl Cloud {
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Model matrix: uniform scale, then translation to the cloud position
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::IDENTITY,
            self.position,
        )
    }
}

/// Cloud mesh builder
#[derive(Debug, Clone, Default)]
pub struct CloudBuilder {
    shape: CloudShape,
}

impl CloudBuilder {
    /// Create a builder, rejecting inverted or non-positive shape ranges
    pub fn new(shape: CloudShape) -> Result<Self> {
        shape.validate()?;
        Ok(Self { shape })
    }

    pub fn shape(&self) -> &CloudShape {
        &self.shape
    }

    /// Draw the layer layout for one cloud.
    ///
    /// The first layer is always the central sphere at the origin.
    pub fn sample_layers(&self, rng: &mut PlacementRng) -> Vec<CloudLayer> {
        let s = &self.shape;

        let center_radius = rng.uniform(s.center_radius_m.0, s.center_radius_m.1);
        let count = rng.uniform_int(s.layer_count.0, s.layer_count.1) as usize;

        let mut layers = Vec::with_capacity(count + 1);
        layers.push(CloudLayer {
            offset: Vec3::ZERO,
            radius: center_radius,
        });

        for _ in 0..count {
            let rotation = rng.uniform(0.0, TAU);
            let distance = rng.uniform(s.layer_distance_m.0, s.layer_distance_m.1);
            let y_offset = rng.uniform(s.layer_y_offset_m.0, s.layer_y_offset_m.1);
            let radius = rng.uniform(s.layer_radius_m.0, s.layer_radius_m.1);

            layers.push(CloudLayer {
                offset: Vec3::new(rotation.cos() * distance, y_offset, rotation.sin() * distance),
                radius,
            });
        }

        layers
    }

    /// Merge one sphere per layer into a single mesh.
    ///
    /// Overlapping geometry is kept as-is: no vertices are welded, so the
    /// vertex count is the sum of the per-layer sphere vertex counts.
    pub fn build_from_layers(
        &self,
        layers: &[CloudLayer],
        position: Vec3,
        scale: f32,
    ) -> Result<Cloud> {
        let mut mesh = Mesh::new();

        for layer in layers {
            let sphere = uv_sphere(SphereOptions {
                radius: layer.radius,
                stacks: self.shape.sphere_stacks,
                slices: self.shape.sphere_slices,
            })?;
            mesh.append_translated(&sphere, layer.offset);
        }

        Ok(Cloud {
            mesh,
            position,
            scale,
        })
    }

    /// Sample a layer layout and build the cloud from it
    pub fn build_cloud(&self, position: Vec3, scale: f32, rng: &mut PlacementRng) -> Result<Cloud> {
        let layers = self.sample_layers(rng);
        self.build_from_layers(&layers, position, scale)
    }
}
