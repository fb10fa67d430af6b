//! Seedable random source for cloud placement and sizing.
//!
//! Kept separate from [`crate::noise`]: coherent noise drives spatial jitter,
//! while this discrete generator decides how many layers a cloud has and
//! where clouds go.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Discrete RNG used for cloud placement
#[derive(Clone, Debug)]
pub struct PlacementRng {
    rng: StdRng,
}

impl PlacementRng {
    /// Create a reproducible generator from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reset to a fixed seed
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Uniform float in the closed interval `[min, max]`; returns `min` when
    /// `max < min`
    pub fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max >= min {
            self.rng.gen_range(min..=max)
        } else {
            min
        }
    }

    /// Uniform integer in `[min, max]` (inclusive); returns `min` when `max < min`
    pub fn uniform_int(&mut self, min: u32, max: u32) -> u32 {
        if max >= min {
            self.rng.gen_range(min..=max)
        } else {
            min
        }
    }
}
