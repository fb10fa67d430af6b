//! Heightmap export of the baked ocean grid.

use std::path::Path;

use image::{GrayImage, Luma};
use log::info;

use crate::error::Result;
use crate::ocean::OceanGrid;

/// Render grid heights to a grayscale image, one pixel per vertex.
///
/// Heights are normalized to the grid's own min/max; a flat grid maps to
/// mid-gray.
pub fn heightmap_image(grid: &OceanGrid) -> GrayImage {
    let n = grid.resolution() as u32;
    let (lo, hi) = grid.height_range();
    let span = hi - lo;

    let mut img = GrayImage::new(n, n);
    for z in 0..n {
        for x in 0..n {
            let h = grid.height_at(x as usize, z as usize).unwrap_or(lo);
            let normalized = if span > 0.0 { (h - lo) / span } else { 0.5 };

            // Map [0, 1] to grayscale [0, 255]
            let gray = (normalized * 255.0).round().clamp(0.0, 255.0) as u8;
            img.put_pixel(x, z, Luma([gray]));
        }
    }

    img
}

/// Write the grid heightmap as a PNG (format inferred from the extension)
pub fn write_heightmap(grid: &OceanGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    heightmap_image(grid).save(path)?;
    info!(
        "Wrote {}x{} heightmap to {}",
        grid.resolution(),
        grid.resolution(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocean::WaveField;

    #[test]
    fn test_heightmap_dimensions_and_extremes() {
        let field = WaveField::with_defaults();
        let grid = OceanGrid::build(12, 300.0, &field, 0.0).unwrap();
        let img = heightmap_image(&grid);

        assert_eq!(img.dimensions(), (12, 12));
        let min = img.pixels().map(|p| p.0[0]).min().unwrap();
        let max = img.pixels().map(|p| p.0[0]).max().unwrap();
        assert_eq!(min, 0);
        assert_eq!(max, 255);
    }

    #[test]
    fn test_flat_grid_is_mid_gray() {
        let grid = OceanGrid::flat(4, 4.0).unwrap();
        let img = heightmap_image(&grid);
        assert!(img.pixels().all(|p| p.0[0] == 128));
    }

    #[test]
    fn test_write_heightmap_png() {
        let grid = OceanGrid::flat(3, 3.0).unwrap();
        let path = std::env::temp_dir()
            .join(format!("seascape_heightmap_{}.png", std::process::id()));

        write_heightmap(&grid, &path).unwrap();
        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.width(), 3);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unknown_extension_is_image_error() {
        let grid = OceanGrid::flat(3, 3.0).unwrap();
        let path = std::env::temp_dir().join("seascape_heightmap.unknown_ext");
        assert!(matches!(
            write_heightmap(&grid, &path),
            Err(crate::error::Error::Image(_))
        ));
    }
}
