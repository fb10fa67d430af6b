//! Whole-scene configuration and presets.

use std::fmt;
use std::str::FromStr;

use super::{CloudParams, OceanParams, ShadingParams};
use crate::error::{Error, Result};

/// Animation clock settings
#[derive(Debug, Clone)]
pub struct AnimationParams {
    /// Whether shader time advances
    pub animate: bool,

    /// Multiplier from wall time to shader time (dimensionless, >= 0)
    pub time_scale: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            animate: true,
            time_scale: 1.0,
        }
    }
}

/// Complete scene description
#[derive(Debug, Clone, Default)]
pub struct SceneConfig {
    pub ocean: OceanParams,

    /// `None` disables the cloud field
    pub clouds: Option<CloudParams>,

    pub shading: ShadingParams,

    pub animation: AnimationParams,

    /// Cloud placement seed; `None` seeds from system entropy
    pub seed: Option<u64>,
}

impl SceneConfig {
    pub fn from_preset(preset: ScenePreset) -> Self {
        match preset {
            ScenePreset::Full => {
                let ocean = OceanParams::default();
                let clouds = CloudParams::over_domain(ocean.domain_size_m);
                Self {
                    ocean,
                    clouds: Some(clouds),
                    ..Self::default()
                }
            }
            ScenePreset::OceanOnly => Self {
                clouds: None,
                ..Self::default()
            },
            ScenePreset::Preview => {
                let ocean = OceanParams {
                    grid_resolution: 256,
                    ..OceanParams::default()
                };
                let clouds = CloudParams {
                    count: 40,
                    ..CloudParams::over_domain(ocean.domain_size_m)
                };
                Self {
                    ocean,
                    clouds: Some(clouds),
                    shading: ShadingParams::daylight(),
                    ..Self::default()
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.ocean.validate()?;
        if let Some(clouds) = &self.clouds {
            clouds.validate()?;
        }
        if !(self.animation.time_scale.is_finite() && self.animation.time_scale >= 0.0) {
            return Err(Error::invalid(
                "time_scale",
                format!(
                    "must be finite and non-negative, got {}",
                    self.animation.time_scale
                ),
            ));
        }
        Ok(())
    }
}

/// Scene presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenePreset {
    /// High-resolution ocean under a full cloud field
    #[default]
    Full,

    /// High-resolution ocean, no clouds
    OceanOnly,

    /// Low-resolution ocean with a sparse cloud field, daylight palette
    Preview,
}

impl FromStr for ScenePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "ocean-only" | "ocean_only" | "ocean" => Ok(Self::OceanOnly),
            "preview" => Ok(Self::Preview),
            other => Err(Error::invalid(
                "preset",
                format!("unknown preset '{}' (expected full, ocean-only or preview)", other),
            )),
        }
    }
}

impl fmt::Display for ScenePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Full => "full",
            Self::OceanOnly => "ocean-only",
            Self::Preview => "preview",
        };
        f.write_str(name)
    }
}
