//! Cloud meshes built from overlapping spheres.

mod builder;
mod field;

pub use builder::{Cloud, CloudBuilder, CloudLayer};
pub use field::generate_cloud_field;
