//! Seascape library - procedural ocean surface and cloud field geometry

pub mod cli;
pub mod clouds;
pub mod error;
pub mod export;
pub mod mesh;
pub mod noise;
pub mod ocean;
pub mod params;
pub mod random;
pub mod scene;

pub use error::{Error, Result};
