//! Point scattering strategies for terrain surfaces.
//!
//! Implements the [`PointScatter`] boundary from `relief-terrain`:
//! [`PoissonDisk`] produces blue-noise placements with a guaranteed minimum
//! spacing (Bridson's algorithm), and [`UniformScatter`] drops independent
//! uniform points. Both confine points to the surface footprint and snap
//! them onto the terrain when asked to.
//!
//! # Example
//!
//! ```
//! use relief_color::presets;
//! use relief_noise::Perlin;
//! use relief_scatter::PoissonDisk;
//! use relief_terrain::{TerrainBuilder, TerrainConfig};
//!
//! let noise = Perlin::with_seed(42);
//! let gradient = presets::elevation();
//! let surface = TerrainBuilder::new(TerrainConfig::default())
//!     .noise(&noise)
//!     .gradient(&gradient)
//!     .generate()
//!     .unwrap();
//!
//! let points = surface.place_points(&PoissonDisk::new(2.5));
//! assert!(!points.is_empty());
//! ```

use glam::{Vec2, Vec3};
use relief_terrain::{PointScatter, TerrainSurface};

// ===== Poisson-disk scatter =====

/// Blue-noise scatter with a guaranteed minimum spacing between points.
///
/// Bridson's algorithm: grow placements outward from a random first point,
/// proposing candidates in the annulus between one and two radii around
/// active points and rejecting any candidate closer than `min_distance` to
/// an existing placement. A background grid sized so each cell holds at most
/// one point keeps the neighbor test cheap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoissonDisk {
    /// Minimum spacing between any two points, in grid units. Must be
    /// positive; a non-positive spacing scatters nothing.
    pub min_distance: f32,
    /// Candidate attempts around each active point before it retires.
    pub max_attempts: usize,
    /// Seed for the internal generator.
    pub seed: u64,
}

impl Default for PoissonDisk {
    fn default() -> Self {
        Self {
            min_distance: 1.0,
            max_attempts: 30,
            seed: 0,
        }
    }
}

impl PoissonDisk {
    /// Creates a scatter with the given minimum spacing.
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            ..Default::default()
        }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the candidate attempts allowed per active point.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    fn sample_plane(&self, extent: Vec2) -> Vec<Vec2> {
        if self.min_distance <= 0.0 {
            return Vec::new();
        }

        // Cell diagonal equals min_distance, so one point per cell.
        let cell = self.min_distance / std::f32::consts::SQRT_2;
        let cols = (extent.x / cell).ceil() as usize + 1;
        let rows = (extent.y / cell).ceil() as usize + 1;
        let mut grid: Vec<Option<usize>> = vec![None; cols * rows];
        let mut points: Vec<Vec2> = Vec::new();
        let mut active: Vec<usize> = Vec::new();
        let mut rng = Lcg::new(self.seed);

        let first = Vec2::new(rng.range(0.0, extent.x), rng.range(0.0, extent.y));
        grid[cell_index(first, cell, cols)] = Some(0);
        points.push(first);
        active.push(0);

        while !active.is_empty() {
            let slot = (rng.next_u64() % active.len() as u64) as usize;
            let around = points[active[slot]];
            let mut placed = false;

            'attempts: for _ in 0..self.max_attempts {
                let angle = rng.range(0.0, std::f32::consts::TAU);
                let radius = rng.range(self.min_distance, self.min_distance * 2.0);
                let candidate = around + Vec2::new(angle.cos(), angle.sin()) * radius;
                if candidate.x < 0.0
                    || candidate.y < 0.0
                    || candidate.x > extent.x
                    || candidate.y > extent.y
                {
                    continue;
                }

                // Points within min_distance can only sit in cells at most
                // two away in either axis.
                let cx = (candidate.x / cell) as usize;
                let cz = (candidate.y / cell) as usize;
                for gz in cz.saturating_sub(2)..=(cz + 2).min(rows - 1) {
                    for gx in cx.saturating_sub(2)..=(cx + 2).min(cols - 1) {
                        if let Some(i) = grid[gz * cols + gx] {
                            if points[i].distance(candidate) < self.min_distance {
                                continue 'attempts;
                            }
                        }
                    }
                }

                let index = points.len();
                grid[cz * cols + cx] = Some(index);
                points.push(candidate);
                active.push(index);
                placed = true;
                break;
            }

            if !placed {
                active.swap_remove(slot);
            }
        }

        points
    }
}

impl PointScatter for PoissonDisk {
    fn scatter(&self, surface: &TerrainSurface, snap_to_surface: bool) -> Vec<Vec3> {
        let size = surface.size();
        let extent = Vec2::new(size.width() as f32, size.depth() as f32);
        lift(self.sample_plane(extent), surface, snap_to_surface)
    }
}

// ===== Uniform scatter =====

/// Independent uniform random placements.
///
/// No spacing guarantee; points may land arbitrarily close together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformScatter {
    /// Number of points to place.
    pub count: usize,
    /// Seed for the internal generator.
    pub seed: u64,
}

impl UniformScatter {
    /// Creates a scatter placing `count` points.
    pub fn new(count: usize) -> Self {
        Self { count, seed: 0 }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl PointScatter for UniformScatter {
    fn scatter(&self, surface: &TerrainSurface, snap_to_surface: bool) -> Vec<Vec3> {
        let size = surface.size();
        let mut rng = Lcg::new(self.seed);
        let mut points = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let x = rng.range(0.0, size.width() as f32);
            let z = rng.range(0.0, size.depth() as f32);
            points.push(Vec2::new(x, z));
        }
        lift(points, surface, snap_to_surface)
    }
}

// ===== Helpers =====

/// Lifts planar points into 3D, sampling the surface height when snapping.
fn lift(points: Vec<Vec2>, surface: &TerrainSurface, snap_to_surface: bool) -> Vec<Vec3> {
    points
        .into_iter()
        .map(|p| {
            let y = if snap_to_surface {
                surface.height_at(p.x, p.y)
            } else {
                0.0
            };
            Vec3::new(p.x, y, p.y)
        })
        .collect()
}

fn cell_index(p: Vec2, cell: f32, cols: usize) -> usize {
    let cx = (p.x / cell) as usize;
    let cz = (p.y / cell) as usize;
    cz * cols + cx
}

/// Minimal LCG, good enough for scatter jitter.
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        let mut rng = Self { state: seed };
        rng.next_u64();
        rng
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform in [0, 1) from the top 24 bits.
    fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}
