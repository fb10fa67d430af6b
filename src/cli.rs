//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::error::Result;
use crate::params::{CloudParams, SceneConfig, ScenePreset};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "seascape")]
#[command(about = "Procedural ocean surface and cloud field generator", long_about = None)]
pub struct Args {
    /// Scene preset: full (default), ocean-only, preview
    #[arg(long, value_name = "PRESET", default_value = "full")]
    pub preset: String,

    /// Grid resolution (vertices per side)
    #[arg(long, value_name = "N")]
    pub resolution: Option<usize>,

    /// Ocean domain side length (meters)
    #[arg(long, value_name = "METERS")]
    pub size: Option<f32>,

    /// Cloud placement seed (system entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Perlin seed for wave jitter
    #[arg(long)]
    pub noise_seed: Option<u32>,

    /// Number of clouds (0 disables the cloud field)
    #[arg(long, value_name = "COUNT")]
    pub clouds: Option<usize>,

    /// Time (seconds) at which ocean heights are baked
    #[arg(long, value_name = "SECONDS")]
    pub sample_time: Option<f32>,

    /// Write the baked height field to this PNG
    #[arg(long, value_name = "PATH")]
    pub heightmap: Option<PathBuf>,
}

impl Args {
    /// Parse scene preset from command-line arguments
    pub fn parse_preset(&self) -> Result<ScenePreset> {
        let preset: ScenePreset = self.preset.parse()?;
        info!("Preset: {}", preset);
        Ok(preset)
    }

    /// Build the scene configuration: preset first, then explicit overrides
    pub fn scene_config(&self) -> Result<SceneConfig> {
        let mut config = SceneConfig::from_preset(self.parse_preset()?);

        if let Some(resolution) = self.resolution {
            config.ocean.grid_resolution = resolution;
        }
        if let Some(size) = self.size {
            config.ocean.domain_size_m = size;
            // Keep the placement box over the resized ocean
            if let Some(clouds) = &mut config.clouds {
                let over = CloudParams::over_domain(size);
                clouds.x_range_m = over.x_range_m;
                clouds.z_range_m = over.z_range_m;
            }
        }
        if let Some(noise_seed) = self.noise_seed {
            config.ocean.noise_seed = noise_seed;
        }
        if let Some(t) = self.sample_time {
            config.ocean.initial_time_s = t;
        }
        match self.clouds {
            Some(0) => config.clouds = None,
            Some(count) => {
                let domain = config.ocean.domain_size_m;
                config
                    .clouds
                    .get_or_insert_with(|| CloudParams::over_domain(domain))
                    .count = count;
            }
            None => {}
        }
        config.seed = self.seed;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("seascape").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_args_use_full_preset() {
        let config = parse(&[]).scene_config().unwrap();
        assert_eq!(config.ocean.grid_resolution, 1024);
        assert_eq!(config.clouds.map(|c| c.count), Some(100));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_overrides_apply() {
        let config = parse(&[
            "--preset",
            "preview",
            "--resolution",
            "64",
            "--size",
            "500",
            "--seed",
            "7",
            "--clouds",
            "12",
        ])
        .scene_config()
        .unwrap();

        assert_eq!(config.ocean.grid_resolution, 64);
        assert_eq!(config.ocean.domain_size_m, 500.0);
        assert_eq!(config.seed, Some(7));
        let clouds = config.clouds.unwrap();
        assert_eq!(clouds.count, 12);
        assert_eq!(clouds.x_range_m, (-250.0, 250.0));
    }

    #[test]
    fn test_zero_clouds_disables_field() {
        let config = parse(&["--clouds", "0"]).scene_config().unwrap();
        assert!(config.clouds.is_none());
    }

    #[test]
    fn test_clouds_on_ocean_only_preset() {
        let config = parse(&["--preset", "ocean-only", "--clouds", "5"])
            .scene_config()
            .unwrap();
        assert_eq!(config.clouds.map(|c| c.count), Some(5));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        assert!(parse(&["--preset", "hurricane"]).scene_config().is_err());
    }
}
