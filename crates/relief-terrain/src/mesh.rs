//! Mesh buffers handed to the rendering boundary.

use glam::{Vec2, Vec3};
use relief_color::Rgba;

/// An indexed triangle mesh with per-vertex attributes.
///
/// `positions`, `uvs`, and `colors` are parallel buffers over the same
/// vertices; `indices` triples reference into them. `normals` starts empty:
/// deriving shading normals belongs to the consumer's side of the boundary,
/// via [`Mesh::compute_smooth_normals`] or the consumer's own pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals, empty until computed.
    pub normals: Vec<Vec3>,
    /// Per-vertex texture coordinates.
    pub uvs: Vec<Vec2>,
    /// Per-vertex colors.
    pub colors: Vec<Rgba>,
    /// Triangle indices, counter-clockwise when viewed from outside.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with preallocated buffers.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::new(),
            uvs: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if a normal exists for every vertex.
    pub fn has_normals(&self) -> bool {
        self.normals.len() == self.positions.len()
    }

    /// Computes area-weighted smooth normals from the triangle faces.
    ///
    /// Each face's unnormalized cross product accumulates into its three
    /// corners, so larger faces weigh more, then every sum is normalized.
    /// Vertices referenced by no triangle get a zero normal.
    pub fn compute_smooth_normals(&mut self) {
        let mut sums = vec![Vec3::ZERO; self.positions.len()];

        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let face = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            sums[a] += face;
            sums[b] += face;
            sums[c] += face;
        }

        self.normals = sums.into_iter().map(|n| n.normalize_or_zero()).collect();
    }
}
