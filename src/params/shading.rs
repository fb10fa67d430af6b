//! Named shading parameters handed to the renderer alongside the meshes.
//!
//! The crate does not interpret these; they only travel with the scene so a
//! renderer can upload them as uniforms.

use glam::Vec3;

/// Lighting, water and atmosphere colors
#[derive(Debug, Clone, PartialEq)]
pub struct ShadingParams {
    /// World-space light position (meters)
    pub light_position: Vec3,

    /// Cool blue-white moonlight
    pub light_color: Vec3,

    pub water_color_deep: Vec3,
    pub water_color_shallow: Vec3,
    pub foam_color: Vec3,

    pub fog_color: Vec3,

    /// Exponential fog density (per meter)
    pub fog_density: f32,

    pub cloud_color: Vec3,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            light_position: Vec3::new(500.0, 800.0, 400.0),
            light_color: Vec3::new(0.9, 0.95, 1.0),
            water_color_deep: Vec3::new(0.01, 0.05, 0.10),
            water_color_shallow: Vec3::new(0.08, 0.15, 0.22),
            foam_color: Vec3::new(0.85, 0.90, 0.95),
            fog_color: Vec3::new(0.02, 0.03, 0.05),
            fog_density: 0.0008,
            cloud_color: Vec3::new(0.55, 0.58, 0.62),
        }
    }
}

impl ShadingParams {
    /// Brighter daylight palette with thinner fog
    pub fn daylight() -> Self {
        Self {
            light_position: Vec3::new(300.0, 1200.0, 200.0),
            light_color: Vec3::new(1.0, 0.97, 0.9),
            water_color_deep: Vec3::new(0.0, 0.12, 0.25),
            water_color_shallow: Vec3::new(0.05, 0.35, 0.45),
            fog_color: Vec3::new(0.6, 0.7, 0.8),
            fog_density: 0.0003,
            cloud_color: Vec3::new(0.95, 0.95, 0.97),
            ..Self::default()
        }
    }
}
