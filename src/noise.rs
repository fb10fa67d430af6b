//! Coherent noise used for per-vertex wave jitter.
//!
//! All sources return values in `[0, 1]`. The default source samples Perlin
//! noise; lower-dimensional lookups are taken on the zero plane of the
//! higher-dimensional field so that they stay continuous.

use std::fmt;

use noise::{NoiseFn, Perlin};

/// Smooth, deterministic pseudo-random field.
pub trait NoiseSource: Send + Sync {
    /// Sample 1D noise. Returns value in range [0, 1]
    fn noise1(&self, a: f32) -> f32;

    /// Sample 2D noise. Returns value in range [0, 1]
    fn noise2(&self, a: f32, b: f32) -> f32;

    /// Sample 3D noise. Returns value in range [0, 1]
    fn noise3(&self, a: f32, b: f32, c: f32) -> f32;
}

/// Perlin noise generator remapped to [0, 1]
#[derive(Clone)]
pub struct PerlinNoise {
    perlin: Perlin,
    seed: u32,
}

impl PerlinNoise {
    /// Create new noise generator with seed
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    fn unit(value: f64) -> f32 {
        ((value as f32 + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

impl fmt::Debug for PerlinNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerlinNoise").field("seed", &self.seed).finish()
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseSource for PerlinNoise {
    fn noise1(&self, a: f32) -> f32 {
        Self::unit(self.perlin.get([a as f64, 0.0]))
    }

    fn noise2(&self, a: f32, b: f32) -> f32 {
        Self::unit(self.perlin.get([a as f64, b as f64]))
    }

    fn noise3(&self, a: f32, b: f32, c: f32) -> f32 {
        Self::unit(self.perlin.get([a as f64, b as f64, c as f64]))
    }
}

/// Noise source that returns the same value everywhere (for fixtures and flat previews)
#[derive(Clone, Copy, Debug)]
pub struct ConstantNoise(f32);

impl ConstantNoise {
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }
}

impl NoiseSource for ConstantNoise {
    fn noise1(&self, _a: f32) -> f32 {
        self.0
    }

    fn noise2(&self, _a: f32, _b: f32) -> f32 {
        self.0
    }

    fn noise3(&self, _a: f32, _b: f32, _c: f32) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perlin_range() {
        let noise = PerlinNoise::new(7);
        for i in 0..200 {
            let a = i as f32 * 0.137 - 10.0;
            let b = i as f32 * 0.291 + 3.0;
            for v in [
                noise.noise1(a),
                noise.noise2(a, b),
                noise.noise3(a, b, a * b * 0.01),
            ] {
                assert!((0.0..=1.0).contains(&v), "noise out of range: {}", v);
            }
        }
    }

    #[test]
    fn test_perlin_deterministic() {
        let a = PerlinNoise::new(3);
        let b = PerlinNoise::new(3);
        assert_eq!(a.noise2(12.3, -4.5).to_bits(), b.noise2(12.3, -4.5).to_bits());
        assert_eq!(
            a.noise3(1.1, 2.2, 3.3).to_bits(),
            b.noise3(1.1, 2.2, 3.3).to_bits()
        );
    }

    #[test]
    fn test_perlin_continuity() {
        let noise = PerlinNoise::default();
        let step = 1e-4;
        let mut x = 0.05;
        while x < 5.0 {
            let delta = (noise.noise2(x, 0.7) - noise.noise2(x + step, 0.7)).abs();
            assert!(delta < 0.01, "jump of {} at x={}", delta, x);
            x += 0.173;
        }
    }

    #[test]
    fn test_perlin_lattice_is_midpoint() {
        // Gradient noise is zero on integer lattice points
        let noise = PerlinNoise::default();
        assert!((noise.noise1(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_constant_noise_clamps() {
        assert_eq!(ConstantNoise::new(0.5).noise2(1.0, 2.0), 0.5);
        assert_eq!(ConstantNoise::new(2.0).noise1(0.0), 1.0);
        assert_eq!(ConstantNoise::new(-1.0).noise3(0.0, 0.0, 0.0), 0.0);
    }
}
