//! Seascape - procedural storm ocean and cloud field generator
//!
//! Builds the scene geometry once, reports what a renderer would receive,
//! and optionally exports the baked height field.

use std::time::Instant;

use clap::Parser;
use log::info;

use seascape::cli::Args;
use seascape::export::write_heightmap;
use seascape::scene::Scene;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    println!("Seascape - procedural ocean and cloud generator");
    println!("Initializing scene...\n");

    let config = args.scene_config()?;
    info!(
        "Ocean: {}x{} grid over {}m, {} wave components",
        config.ocean.grid_resolution,
        config.ocean.grid_resolution,
        config.ocean.domain_size_m,
        config.ocean.waves.len()
    );

    let start = Instant::now();
    let scene = Scene::new(config)?;
    let elapsed = start.elapsed();

    let stats = scene.stats();
    let (lo, hi) = scene.ocean().height_range();
    println!("Vertices: {}", stats.ocean_vertices);
    println!("Indices: {}", stats.ocean_indices);
    println!("Height range: {:.2}m .. {:.2}m", lo, hi);
    println!(
        "Clouds: {} ({} vertices, {} indices)",
        stats.cloud_count, stats.cloud_vertices, stats.cloud_indices
    );
    println!("Build time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);

    if let Some(path) = &args.heightmap {
        write_heightmap(scene.ocean(), path)?;
        println!("Heightmap: {}", path.display());
    }

    Ok(())
}
