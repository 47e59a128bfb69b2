//! Walled terrain with Poisson-disk placement points.
//!
//! Builds a noise-driven terrain with a masked interior wall, colors it by
//! elevation, then scatters placement points across the finished surface.
//!
//! Run with: `cargo run -p relief-scatter --example walled_terrain`

use relief_color::{presets, Rgba};
use relief_noise::{Fbm, Perlin};
use relief_scatter::PoissonDisk;
use relief_terrain::{Mask, TerrainBuilder, TerrainConfig};

fn main() {
    let config = TerrainConfig::default();
    let cols = config.width + 1;
    let rows = config.depth + 1;

    // Paint a dividing wall down the middle of the grid, leaving a gap near
    // each rim so the two halves stay connected.
    let mut samples = vec![Rgba::BLACK; cols * rows];
    for z in 4..rows - 4 {
        samples[z * cols + cols / 2] = Rgba::WHITE;
    }
    let mask = Mask::from_samples(samples, cols, rows);

    let noise = Fbm::new(Perlin::with_seed(42)).octaves(4);
    let gradient = presets::elevation();

    let surface = match TerrainBuilder::new(config)
        .noise(&noise)
        .gradient(&gradient)
        .mask(&mask)
        .generate()
    {
        Ok(surface) => surface,
        Err(e) => {
            eprintln!("terrain generation failed: {}", e);
            return;
        }
    };

    let range = surface.height_range();
    println!(
        "generated {} vertices, {} triangles, heights {:.2}..{:.2}",
        surface.mesh().vertex_count(),
        surface.mesh().triangle_count(),
        range.min,
        range.max
    );

    let points = surface.place_points(&PoissonDisk::new(2.5).with_seed(7));
    println!("scattered {} placement points:", points.len());
    for p in points.iter().take(5) {
        println!("  ({:6.2}, {:6.2}, {:6.2})", p.x, p.y, p.z);
    }
    if points.len() > 5 {
        println!("  ...");
    }

    let mut mesh = surface.into_mesh();
    mesh.compute_smooth_normals();
    println!("computed {} smooth normals", mesh.normals.len());
}
