//! Multi-component Gerstner-style height field with per-vertex noise jitter.

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::error::{Error, Result};
use crate::noise::{NoiseSource, PerlinNoise};

/// Maximum number of wave components in a [`WaveUniforms`] block
pub const MAX_WAVES: usize = 8;

/// A single sinusoidal wave component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveComponent {
    /// Nominal wave height (meters), perturbed per vertex
    pub amplitude: f32,

    /// Nominal crest-to-crest distance (meters), perturbed per vertex
    pub wavelength: f32,

    /// Phase speed term (radians per second)
    pub speed: f32,

    /// Travel direction. Not normalized: its length scales the wavenumber.
    pub direction: Vec2,
}

impl WaveComponent {
    pub fn new(amplitude: f32, wavelength: f32, speed: f32, direction: Vec2) -> Self {
        Self {
            amplitude,
            wavelength,
            speed,
            direction,
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.amplitude.is_finite() && self.amplitude >= 0.0) {
            return Err(Error::invalid(
                "amplitude",
                format!("must be finite and non-negative, got {}", self.amplitude),
            ));
        }
        if !(self.wavelength.is_finite() && self.wavelength > 0.0) {
            return Err(Error::invalid(
                "wavelength",
                format!("must be finite and positive, got {}", self.wavelength),
            ));
        }
        if !self.speed.is_finite() {
            return Err(Error::invalid("speed", format!("must be finite, got {}", self.speed)));
        }
        if !self.direction.is_finite() {
            return Err(Error::invalid(
                "direction",
                format!("must be finite, got {:?}", self.direction),
            ));
        }
        Ok(())
    }
}

/// Wind-driven swell table: a long primary swell from the northwest with
/// progressively shorter, smaller components layered on top.
pub fn default_wave_table() -> Vec<WaveComponent> {
    vec![
        WaveComponent::new(10.0, 200.0, 10.5, Vec2::new(0.85, 0.52)),
        WaveComponent::new(5.0, 100.0, 7.5, Vec2::new(0.92, 0.38)),
        WaveComponent::new(3.5, 55.0, 5.5, Vec2::new(0.78, 0.62)),
        WaveComponent::new(1.5, 30.0, 4.2, Vec2::new(1.0, 0.1)),
        WaveComponent::new(0.8, 16.0, 3.0, Vec2::new(0.88, 0.47)),
    ]
}

/// Wave parameters packed for a uniform buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct WaveUniforms {
    pub amplitudes: [f32; MAX_WAVES],
    pub wavelengths: [f32; MAX_WAVES],
    pub speeds: [f32; MAX_WAVES],
    pub directions: [[f32; 2]; MAX_WAVES],
    pub wave_count: u32,
    pub time: f32,
    pub _padding: [f32; 2],
}

/// Immutable wave parameter set plus the noise used to jitter it.
///
/// Evaluation is a pure function of `(x, z, t)`; the field can be shared
/// freely between the mesher, the renderer and worker threads.
#[derive(Debug, Clone)]
pub struct WaveField<N = PerlinNoise> {
    components: Vec<WaveComponent>,
    noise: N,
}

impl WaveField<PerlinNoise> {
    /// Wave field with the default swell table and seed-0 Perlin noise
    pub fn with_defaults() -> Self {
        Self {
            components: default_wave_table(),
            noise: PerlinNoise::default(),
        }
    }
}

impl<N: NoiseSource> WaveField<N> {
    /// Create a wave field, rejecting non-finite or out-of-range components
    pub fn new(components: Vec<WaveComponent>, noise: N) -> Result<Self> {
        for component in &components {
            component.validate()?;
        }
        Ok(Self { components, noise })
    }

    pub fn components(&self) -> &[WaveComponent] {
        &self.components
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    pub fn amplitudes(&self) -> Vec<f32> {
        self.components.iter().map(|c| c.amplitude).collect()
    }

    pub fn wavelengths(&self) -> Vec<f32> {
        self.components.iter().map(|c| c.wavelength).collect()
    }

    pub fn speeds(&self) -> Vec<f32> {
        self.components.iter().map(|c| c.speed).collect()
    }

    pub fn directions(&self) -> Vec<Vec2> {
        self.components.iter().map(|c| c.direction).collect()
    }

    /// Surface height at a position; the `y` coordinate is ignored
    pub fn evaluate(&self, position: Vec3, t: f32) -> f32 {
        self.height(position.x, position.z, t)
    }

    /// Surface height at world `(x, z)` and time `t` (seconds)
    pub fn height(&self, x: f32, z: f32, t: f32) -> f32 {
        let mut y = 0.0;

        for (i, wave) in self.components.iter().enumerate() {
            let wavelength_var =
                wave.wavelength * (0.9 + 0.6 * self.noise.noise2(x * 0.01, z * 0.01));
            let k = TAU / wavelength_var;

            let phase = self.noise.noise1(i as f32 * 0.1) * TAU;

            let angle_offset = self.noise.noise2(x * 0.02, z * 0.02) * 0.2;
            let dir = Vec2::from_angle(angle_offset).rotate(wave.direction);
            let dot = dir.dot(Vec2::new(x, z));

            let amp_var =
                wave.amplitude * (0.8 + 0.4 * self.noise.noise2(x * 0.01, z * 0.01));

            y += amp_var * (k * dot - wave.speed * t + phase).sin();
        }

        // High-frequency chop for surface roughness
        let chop_amplitude = 1.0 + 2.0 * self.noise.noise3(x * 0.1, z * 0.1, t * 0.5);
        let chop_wavelength = 10.0 + 5.0 * self.noise.noise2(x * 0.05, z * 0.05);
        let chop_k = TAU / chop_wavelength;
        y += chop_amplitude * (chop_k * (x + z) - 10.0 * t).sin();

        // Large-scale low-frequency modulation
        let height_mod = 0.8 + 0.4 * self.noise.noise2(x * 0.005, z * 0.005);
        y * height_mod
    }

    /// Pack the wave table for upload, together with the shader time
    pub fn uniforms(&self, time: f32) -> Result<WaveUniforms> {
        if self.components.len() > MAX_WAVES {
            return Err(Error::invalid(
                "waves",
                format!(
                    "uniform block holds at most {} components, got {}",
                    MAX_WAVES,
                    self.components.len()
                ),
            ));
        }

        let mut uniforms = WaveUniforms::zeroed();
        for (i, wave) in self.components.iter().enumerate() {
            uniforms.amplitudes[i] = wave.amplitude;
            uniforms.wavelengths[i] = wave.wavelength;
            uniforms.speeds[i] = wave.speed;
            uniforms.directions[i] = wave.direction.to_array();
        }
        uniforms.wave_count = self.components.len() as u32;
        uniforms.time = time;

        Ok(uniforms)
    }
}
