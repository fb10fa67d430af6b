//! Scene assembly: owns the wave field, the ocean grid and the cloud field.

use log::{info, warn};

use crate::clouds::{generate_cloud_field, Cloud};
use crate::error::Result;
use crate::noise::PerlinNoise;
use crate::ocean::{OceanGrid, WaveField, WaveUniforms};
use crate::params::{AnimationParams, SceneConfig, ShadingParams};
use crate::random::PlacementRng;

/// Time-scale step for [`SceneClock::speed_up`] and [`SceneClock::slow_down`]
const TIME_SCALE_STEP: f32 = 0.1;

/// Wall-clock accumulator that produces shader time
#[derive(Debug, Clone)]
pub struct SceneClock {
    elapsed_s: f32,
    animate: bool,
    time_scale: f32,
}

impl SceneClock {
    pub fn new(params: &AnimationParams) -> Self {
        Self {
            elapsed_s: 0.0,
            animate: params.animate,
            time_scale: params.time_scale.max(0.0),
        }
    }

    /// Advance wall time by `dt_s` seconds
    pub fn advance(&mut self, dt_s: f32) {
        self.elapsed_s += dt_s.max(0.0);
    }

    /// Time fed to the wave shader: scaled wall time, or zero while paused
    pub fn shader_time(&self) -> f32 {
        if self.animate {
            self.elapsed_s * self.time_scale
        } else {
            0.0
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed_s
    }

    pub fn is_animating(&self) -> bool {
        self.animate
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn toggle_animation(&mut self) {
        self.animate = !self.animate;
    }

    pub fn speed_up(&mut self) {
        self.time_scale += TIME_SCALE_STEP;
    }

    /// Decrease the time scale, never below zero
    pub fn slow_down(&mut self) {
        self.time_scale = (self.time_scale - TIME_SCALE_STEP).max(0.0);
    }
}

/// Geometry totals, as shown in an on-screen overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStats {
    pub ocean_vertices: usize,
    pub ocean_indices: usize,
    pub cloud_count: usize,
    pub cloud_vertices: usize,
    pub cloud_indices: usize,
}

/// Fully generated scene.
///
/// Geometry is built once in [`Scene::new`]; afterwards only the clock
/// changes unless the caller explicitly resamples or rebuilds.
#[derive(Debug)]
pub struct Scene {
    config: SceneConfig,
    waves: WaveField,
    ocean: OceanGrid,
    clouds: Vec<Cloud>,
    clock: SceneClock,
}

impl Scene {
    /// Validate `config` and generate all geometry
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;

        let waves = WaveField::new(
            config.ocean.waves.clone(),
            PerlinNoise::new(config.ocean.noise_seed),
        )?;

        let ocean = OceanGrid::build(
            config.ocean.grid_resolution,
            config.ocean.domain_size_m,
            &waves,
            config.ocean.initial_time_s,
        )?;

        let clouds = match &config.clouds {
            Some(params) => {
                let mut rng = match config.seed {
                    Some(seed) => PlacementRng::seeded(seed),
                    None => {
                        warn!("No cloud seed given, seeding from system entropy");
                        PlacementRng::from_entropy()
                    }
                };
                generate_cloud_field(params, &mut rng)?
            }
            None => Vec::new(),
        };

        let clock = SceneClock::new(&config.animation);
        let scene = Self {
            config,
            waves,
            ocean,
            clouds,
            clock,
        };

        let stats = scene.stats();
        info!(
            "Scene ready: ocean {} vertices / {} indices, {} clouds ({} vertices)",
            stats.ocean_vertices, stats.ocean_indices, stats.cloud_count, stats.cloud_vertices
        );

        Ok(scene)
    }

    /// Replace the scene with one generated from `config`.
    ///
    /// The new scene is built completely before anything is swapped, so on
    /// error the current geometry and clock are left untouched.
    pub fn rebuild(&mut self, config: SceneConfig) -> Result<()> {
        let next = Self::new(config)?;
        *self = next;
        Ok(())
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn waves(&self) -> &WaveField {
        &self.waves
    }

    pub fn ocean(&self) -> &OceanGrid {
        &self.ocean
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn shading(&self) -> &ShadingParams {
        &self.config.shading
    }

    pub fn clock(&self) -> &SceneClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SceneClock {
        &mut self.clock
    }

    /// Advance the scene clock by `dt_s` seconds of wall time
    pub fn advance(&mut self, dt_s: f32) {
        self.clock.advance(dt_s);
    }

    /// Surface height at world `(x, z)` and time `t`
    pub fn height(&self, x: f32, z: f32, t: f32) -> f32 {
        self.waves.height(x, z, t)
    }

    /// Wave uniform block at the current shader time
    pub fn wave_uniforms(&self) -> Result<WaveUniforms> {
        self.waves.uniforms(self.clock.shader_time())
    }

    /// Re-bake ocean heights at the current shader time (CPU-side animation)
    pub fn resample_ocean(&mut self) {
        let t = self.clock.shader_time();
        self.ocean.resample(&self.waves, t);
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            ocean_vertices: self.ocean.mesh().num_vertices(),
            ocean_indices: self.ocean.mesh().num_indices(),
            cloud_count: self.clouds.len(),
            cloud_vertices: self.clouds.iter().map(|c| c.mesh().num_vertices()).sum(),
            cloud_indices: self.clouds.iter().map(|c| c.mesh().num_indices()).sum(),
        }
    }
}
