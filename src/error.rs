//! Error types for scene generation.

use thiserror::Error;

/// Errors raised while building ocean, cloud or scene geometry.
///
/// All generation is one-shot, so none of these are recoverable at runtime:
/// a failed construction call leaves any previously built state untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A geometry primitive could not be generated.
    #[error("failed to generate {primitive}: {reason}")]
    Resource {
        primitive: &'static str,
        reason: String,
    },

    /// Heightmap export failed.
    #[error("failed to write heightmap: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn resource(primitive: &'static str, reason: impl Into<String>) -> Self {
        Error::Resource {
            primitive,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Checks that `min..=max` is a well-formed, finite range.
pub(crate) fn check_range(name: &'static str, range: (f32, f32)) -> Result<()> {
    let (min, max) = range;
    if !min.is_finite() || !max.is_finite() {
        return Err(Error::invalid(
            name,
            format!("range bounds must be finite, got ({}, {})", min, max),
        ));
    }
    if min > max {
        return Err(Error::invalid(
            name,
            format!("range minimum {} exceeds maximum {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range("r", (1.0, 2.0)).is_ok());
        assert!(check_range("r", (2.0, 2.0)).is_ok());
        assert!(check_range("r", (3.0, 2.0)).is_err());
        assert!(check_range("r", (f32::NAN, 2.0)).is_err());
    }

    #[test]
    fn test_error_display_names_parameter() {
        let err = Error::invalid("grid_resolution", "must be at least 2");
        assert_eq!(
            err.to_string(),
            "invalid parameter `grid_resolution`: must be at least 2"
        );
    }
}
