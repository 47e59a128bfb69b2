//! Placement boundary for scattering points over a surface.

use glam::Vec3;

use crate::surface::TerrainSurface;

/// A strategy for placing points across a terrain surface.
///
/// Implementations pick horizontal positions inside the surface footprint
/// `[0, width] x [0, depth]`. When `snap_to_surface` is set, each point's Y
/// must be resolved by sampling the surface height at its horizontal
/// position; otherwise Y is left at the strategy's discretion (typically 0).
///
/// Terrain generation only depends on this trait. Concrete strategies such
/// as Poisson-disk scatter live outside the core crate.
pub trait PointScatter {
    /// Produces placement points for the given surface.
    fn scatter(&self, surface: &TerrainSurface, snap_to_surface: bool) -> Vec<Vec3>;
}
