//! Ocean surface: wave height field and the grid mesh baked from it.

mod grid;
mod wave;

// Re-export public types
pub use grid::{OceanGrid, MAX_RESOLUTION};
pub use wave::{default_wave_table, WaveComponent, WaveField, WaveUniforms, MAX_WAVES};
