//! Populates the sky with randomly placed clouds.

use glam::Vec3;
use log::debug;

use super::builder::{Cloud, CloudBuilder};
use crate::error::Result;
use crate::params::CloudParams;
use crate::random::PlacementRng;

/// Generate `params.count` clouds inside the placement box.
///
/// For each cloud the position (x, y, z) and scale are drawn before its
/// layers, so a fixed seed reproduces the whole field.
pub fn generate_cloud_field(params: &CloudParams, rng: &mut PlacementRng) -> Result<Vec<Cloud>> {
    params.validate()?;

    let builder = CloudBuilder::new(params.shape.clone())?;
    let mut clouds = Vec::with_capacity(params.count);

    for _ in 0..params.count {
        let position = Vec3::new(
            rng.uniform(params.x_range_m.0, params.x_range_m.1),
            rng.uniform(params.y_range_m.0, params.y_range_m.1),
            rng.uniform(params.z_range_m.0, params.z_range_m.1),
        );
        let scale = rng.uniform(params.scale_range.0, params.scale_range.1);

        clouds.push(builder.build_cloud(position, scale, rng)?);
    }

    debug!(
        "Generated {} clouds ({} vertices total)",
        clouds.len(),
        clouds.iter().map(|c| c.mesh().num_vertices()).sum::<usize>()
    );

    Ok(clouds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CloudShape;

    fn small_params() -> CloudParams {
        CloudParams {
            count: 8,
            shape: CloudShape {
                sphere_stacks: 4,
                sphere_slices: 6,
                ..CloudShape::default()
            },
            ..CloudParams::default()
        }
    }

    #[test]
    fn test_field_count_and_placement() {
        let params = small_params();
        let clouds = generate_cloud_field(&params, &mut PlacementRng::seeded(11)).unwrap();

        assert_eq!(clouds.len(), params.count);
        for cloud in &clouds {
            let p = cloud.position();
            assert!((params.x_range_m.0..=params.x_range_m.1).contains(&p.x));
            assert!((params.y_range_m.0..=params.y_range_m.1).contains(&p.y));
            assert!((params.z_range_m.0..=params.z_range_m.1).contains(&p.z));
            assert!((params.scale_range.0..=params.scale_range.1).contains(&cloud.scale()));
        }
    }

    #[test]
    fn test_field_reproducible() {
        let params = small_params();
        let a = generate_cloud_field(&params, &mut PlacementRng::seeded(5)).unwrap();
        let b = generate_cloud_field(&params, &mut PlacementRng::seeded(5)).unwrap();

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.position(), y.position());
            assert_eq!(x.scale(), y.scale());
            assert_eq!(x.mesh(), y.mesh());
        }
    }

    #[test]
    fn test_field_rejects_zero_count() {
        let params = CloudParams {
            count: 0,
            ..small_params()
        };
        assert!(generate_cloud_field(&params, &mut PlacementRng::seeded(0)).is_err());
    }
}
