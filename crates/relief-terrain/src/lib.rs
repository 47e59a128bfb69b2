//! Heightfield terrain mesh synthesis.
//!
//! Turns a 2D noise field into a walled terrain mesh with per-vertex
//! attributes:
//!
//! 1. **Heights**: sample noise across a `(width + 1) x (depth + 1)` vertex
//!    grid, force the perimeter to a wall height, and optionally force more
//!    walls through a color [`Mask`] keyed on pure white.
//! 2. **Topology**: triangulate the grid into counter-clockwise triangle
//!    pairs and lay UVs once across the footprint.
//! 3. **Color**: normalize each height against the observed range and sample
//!    a gradient.
//!
//! [`TerrainBuilder`] runs the pipeline end to end and hands back a
//! [`TerrainSurface`], which can also scatter placement points through any
//! [`PointScatter`] strategy.
//!
//! # Example
//!
//! ```
//! use relief_color::presets;
//! use relief_noise::Perlin;
//! use relief_terrain::{TerrainBuilder, TerrainConfig};
//!
//! let noise = Perlin::with_seed(42);
//! let gradient = presets::elevation();
//!
//! let surface = TerrainBuilder::new(TerrainConfig::default())
//!     .noise(&noise)
//!     .gradient(&gradient)
//!     .generate()
//!     .unwrap();
//!
//! let mut mesh = surface.into_mesh();
//! mesh.compute_smooth_normals();
//! assert_eq!(mesh.vertex_count(), 33 * 33);
//! ```

mod builder;
mod error;
mod grid;
mod heightfield;
mod mask;
mod mesh;
mod placement;
mod surface;

pub use builder::{TerrainBuilder, TerrainConfig};
pub use error::TerrainError;
pub use grid::{grid_uvs, triangulate, GridSize};
pub use heightfield::{HeightField, HeightRange};
pub use mask::Mask;
pub use mesh::Mesh;
pub use placement::PointScatter;
pub use surface::{height_colors, TerrainSurface};
