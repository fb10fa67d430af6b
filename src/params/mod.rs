//! Parameter definitions with physical units and documented semantics.
//!
//! All tunable numbers are extracted here with:
//! - Physical units (meters, seconds, etc.)
//! - Documented ranges and meanings
//! - Validation at scene construction time

mod clouds;
mod ocean;
mod scene;
mod shading;

// Re-export all types
pub use clouds::{CloudParams, CloudShape};
pub use ocean::OceanParams;
pub use scene::{AnimationParams, SceneConfig, ScenePreset};
pub use shading::ShadingParams;
