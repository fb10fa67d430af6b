//! Cloud shape and cloud field placement parameters.

use crate::error::{check_range, Error, Result};

/// Shape of a single cloud: one central sphere plus a ring of smaller ones.
///
/// All ranges are `(min, max)` in meters unless noted.
#[derive(Debug, Clone)]
pub struct CloudShape {
    /// Radius of the central sphere
    pub center_radius_m: (f32, f32),

    /// Number of additional layers (inclusive)
    pub layer_count: (u32, u32),

    /// Horizontal distance of a layer from the cloud center
    pub layer_distance_m: (f32, f32),

    /// Vertical offset of a layer from the cloud center
    pub layer_y_offset_m: (f32, f32),

    /// Radius of an additional layer
    pub layer_radius_m: (f32, f32),

    /// Sphere latitude bands per layer
    pub sphere_stacks: u32,

    /// Sphere longitude segments per layer
    pub sphere_slices: u32,
}

impl Default for CloudShape {
    fn default() -> Self {
        Self {
            center_radius_m: (60.0, 80.0),
            layer_count: (12, 20),
            layer_distance_m: (25.0, 75.0),
            layer_y_offset_m: (-25.0, 25.0),
            layer_radius_m: (25.0, 50.0),
            sphere_stacks: 12,
            sphere_slices: 24,
        }
    }
}

impl CloudShape {
    pub fn validate(&self) -> Result<()> {
        check_range("center_radius_m", self.center_radius_m)?;
        check_range("layer_distance_m", self.layer_distance_m)?;
        check_range("layer_y_offset_m", self.layer_y_offset_m)?;
        check_range("layer_radius_m", self.layer_radius_m)?;

        if self.center_radius_m.0 <= 0.0 {
            return Err(Error::invalid(
                "center_radius_m",
                format!("radii must be positive, got {:?}", self.center_radius_m),
            ));
        }
        if self.layer_radius_m.0 <= 0.0 {
            return Err(Error::invalid(
                "layer_radius_m",
                format!("radii must be positive, got {:?}", self.layer_radius_m),
            ));
        }
        if self.layer_count.0 > self.layer_count.1 {
            return Err(Error::invalid(
                "layer_count",
                format!("range minimum exceeds maximum: {:?}", self.layer_count),
            ));
        }
        Ok(())
    }
}

/// Cloud field placement parameters
#[derive(Debug, Clone)]
pub struct CloudParams {
    /// Number of clouds generated at setup
    pub count: usize,

    /// Placement box, X extent (meters)
    pub x_range_m: (f32, f32),

    /// Placement box, elevated height band (meters)
    pub y_range_m: (f32, f32),

    /// Placement box, Z extent (meters)
    pub z_range_m: (f32, f32),

    /// Uniform scale applied at draw time (dimensionless)
    pub scale_range: (f32, f32),

    pub shape: CloudShape,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            count: 100,
            // Matches the default 2000m ocean domain
            x_range_m: (-1000.0, 1000.0),
            y_range_m: (250.0, 450.0),
            z_range_m: (-1000.0, 1000.0),
            scale_range: (0.6, 1.4),
            shape: CloudShape::default(),
        }
    }
}

impl CloudParams {
    /// Placement box spanning a square ocean domain of side `domain_size_m`
    pub fn over_domain(domain_size_m: f32) -> Self {
        let half = domain_size_m / 2.0;
        Self {
            x_range_m: (-half, half),
            z_range_m: (-half, half),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::invalid("cloud_count", "must be at least 1"));
        }
        check_range("x_range_m", self.x_range_m)?;
        check_range("y_range_m", self.y_range_m)?;
        check_range("z_range_m", self.z_range_m)?;
        check_range("scale_range", self.scale_range)?;
        if self.scale_range.0 <= 0.0 {
            return Err(Error::invalid(
                "scale_range",
                format!("scale must be positive, got {:?}", self.scale_range),
            ));
        }
        self.shape.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(CloudParams::default().validate().is_ok());
        assert!(CloudParams::over_domain(500.0).validate().is_ok());
    }

    #[test]
    fn test_over_domain_box() {
        let params = CloudParams::over_domain(500.0);
        assert_eq!(params.x_range_m, (-250.0, 250.0));
        assert_eq!(params.z_range_m, (-250.0, 250.0));
        assert_eq!(params.y_range_m, CloudParams::default().y_range_m);
    }

    #[test]
    fn test_rejects_bad_placement() {
        let mut params = CloudParams::default();
        params.count = 0;
        assert!(params.validate().is_err());

        let mut params = CloudParams::default();
        params.y_range_m = (500.0, 100.0);
        assert!(params.validate().is_err());

        let mut params = CloudParams::default();
        params.scale_range = (0.0, 1.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_shape() {
        let mut shape = CloudShape::default();
        shape.layer_radius_m = (-5.0, 10.0);
        assert!(shape.validate().is_err());

        let mut shape = CloudShape::default();
        shape.layer_count = (20, 12);
        assert!(shape.validate().is_err());

        let mut shape = CloudShape::default();
        shape.center_radius_m = (80.0, 60.0);
        assert!(shape.validate().is_err());
    }
}
