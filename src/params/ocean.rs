//! Ocean grid and wave table parameters.

use crate::error::{Error, Result};
use crate::ocean::{default_wave_table, WaveComponent, MAX_WAVES};

/// Ocean surface parameters
#[derive(Debug, Clone)]
pub struct OceanParams {
    /// Grid resolution (vertices per side, e.g., 1024 = 1,048,576 vertices)
    pub grid_resolution: usize,

    /// Side length of the square ocean domain in meters, centered at the origin
    pub domain_size_m: f32,

    /// Wave components, summed in order
    pub waves: Vec<WaveComponent>,

    /// Time (seconds) at which the initial heights are baked
    pub initial_time_s: f32,

    /// Perlin noise seed for wave jitter
    pub noise_seed: u32,
}

impl Default for OceanParams {
    fn default() -> Self {
        Self {
            grid_resolution: 1024, // Fine enough for foam detail in the shader
            domain_size_m: 2000.0,
            waves: default_wave_table(),
            initial_time_s: 0.0,
            noise_seed: 0,
        }
    }
}

impl OceanParams {
    /// Validate scene-level constraints (individual components are checked by `WaveField`)
    pub fn validate(&self) -> Result<()> {
        if self.waves.is_empty() {
            return Err(Error::invalid("waves", "wave table must not be empty"));
        }
        if self.waves.len() > MAX_WAVES {
            return Err(Error::invalid(
                "waves",
                format!("at most {} components, got {}", MAX_WAVES, self.waves.len()),
            ));
        }
        if !self.initial_time_s.is_finite() {
            return Err(Error::invalid(
                "initial_time_s",
                format!("must be finite, got {}", self.initial_time_s),
            ));
        }
        Ok(())
    }
}
