//! Assembled terrain surfaces.

use glam::Vec3;
use relief_color::{Gradient, Rgba};

use crate::grid::GridSize;
use crate::heightfield::{bilinear_height, HeightField, HeightRange};
use crate::mesh::Mesh;
use crate::placement::PointScatter;

/// Derives per-vertex colors from normalized heights.
///
/// Each vertex's height is normalized against the field's observed range and
/// fed to the gradient. Normalization clamps, so heights outside the range
/// (none occur in a freshly built field) would still land on the gradient's
/// ends rather than wrapping.
pub fn height_colors(field: &HeightField, gradient: &Gradient) -> Vec<Rgba> {
    let range = field.range();
    field
        .positions()
        .iter()
        .map(|p| gradient.sample(range.normalize(p.y)))
        .collect()
}

/// A fully assembled terrain surface.
///
/// Owns the finished [`Mesh`] along with the grid size and height range it
/// was built from. The mesh position buffer keeps the height field's
/// row-major vertex order, which is what lets [`TerrainSurface::height_at`]
/// sample the surface without retaining a separate copy of the heights.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainSurface {
    mesh: Mesh,
    size: GridSize,
    range: HeightRange,
}

impl TerrainSurface {
    pub(crate) fn new(mesh: Mesh, size: GridSize, range: HeightRange) -> Self {
        Self { mesh, size, range }
    }

    /// The assembled mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Consumes the surface, returning the mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Grid dimensions the surface was built from.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Height extrema observed during the build.
    pub fn height_range(&self) -> HeightRange {
        self.range
    }

    /// Samples the surface height at a fractional grid coordinate, clamped
    /// to the footprint and bilinearly interpolated.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        bilinear_height(&self.mesh.positions, self.size, x, z)
    }

    /// Scatters placement points across the surface.
    ///
    /// The strategy is always asked to snap to the surface, so every
    /// returned point sits on the terrain.
    pub fn place_points(&self, scatter: &dyn PointScatter) -> Vec<Vec3> {
        scatter.scatter(self, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{TerrainBuilder, TerrainConfig};
    use relief_noise::Constant;

    fn small_surface() -> TerrainSurface {
        let config = TerrainConfig {
            width: 4,
            depth: 4,
            ..Default::default()
        };
        let noise = Constant::new(0.25);
        let gradient = Gradient::two_color(Rgba::BLACK, Rgba::WHITE);
        TerrainBuilder::new(config)
            .noise(&noise)
            .gradient(&gradient)
            .generate()
            .unwrap()
    }

    struct FixedScatter;

    impl PointScatter for FixedScatter {
        fn scatter(&self, surface: &TerrainSurface, snap_to_surface: bool) -> Vec<Vec3> {
            assert!(snap_to_surface, "surfaces always request snapping");
            let y = surface.height_at(2.0, 2.0);
            vec![Vec3::new(2.0, y, 2.0)]
        }
    }

    #[test]
    fn test_place_points_requests_snapping() {
        let surface = small_surface();
        let points = surface.place_points(&FixedScatter);
        assert_eq!(points.len(), 1);
        // Interior of the flat field sits at 0.25 * 2.0.
        assert_eq!(points[0].y, 0.5);
    }

    #[test]
    fn test_height_at_matches_vertex_heights() {
        let surface = small_surface();
        assert_eq!(surface.height_at(0.0, 0.0), 100.0);
        assert_eq!(surface.height_at(2.0, 2.0), 0.5);
    }

    #[test]
    fn test_into_mesh_keeps_buffers() {
        let surface = small_surface();
        let vertex_count = surface.mesh().vertex_count();
        let mesh = surface.into_mesh();
        assert_eq!(mesh.vertex_count(), vertex_count);
        assert_eq!(mesh.colors.len(), vertex_count);
        assert_eq!(mesh.uvs.len(), vertex_count);
    }
}
