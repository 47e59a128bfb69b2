//! Grid dimensions, triangulation, and UV layout.

use glam::Vec2;

use crate::error::TerrainError;

/// Validated cell counts for a terrain grid.
///
/// `width` and `depth` count cells, not vertices: a grid of `width x depth`
/// cells carries `(width + 1) * (depth + 1)` vertices, laid out row-major
/// with X advancing fastest. Construction rejects zero in either axis, so
/// every downstream stage can assume a non-degenerate grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    width: usize,
    depth: usize,
}

impl GridSize {
    /// Creates a grid size, rejecting zero cells in either axis.
    pub fn new(width: usize, depth: usize) -> Result<Self, TerrainError> {
        if width == 0 || depth == 0 {
            return Err(TerrainError::InvalidDimension { width, depth });
        }
        Ok(Self { width, depth })
    }

    /// Cell count along X.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell count along Z.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Vertices per row, `width + 1`.
    pub fn vertex_cols(&self) -> usize {
        self.width + 1
    }

    /// Vertex rows, `depth + 1`.
    pub fn vertex_rows(&self) -> usize {
        self.depth + 1
    }

    /// Total vertex count.
    pub fn vertex_count(&self) -> usize {
        self.vertex_cols() * self.vertex_rows()
    }

    /// Total index count after triangulation, six per cell.
    pub fn index_count(&self) -> usize {
        self.width * self.depth * 6
    }

    /// Linear index of the vertex at `(x, z)`, row-major.
    pub fn vertex_index(&self, x: usize, z: usize) -> usize {
        z * self.vertex_cols() + x
    }
}

/// Emits the triangle index buffer for a grid.
///
/// Each cell becomes two counter-clockwise triangles when viewed from +Y.
/// The cursor walks the vertex grid cell by cell and skips one vertex at the
/// end of every row, since the last vertex column starts no cell of its own.
pub fn triangulate(size: GridSize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(size.index_count());
    let stride = size.vertex_cols() as u32;
    let mut vert = 0u32;

    for _ in 0..size.depth() {
        for _ in 0..size.width() {
            indices.extend_from_slice(&[
                vert,
                vert + stride,
                vert + 1,
                vert + 1,
                vert + stride,
                vert + stride + 1,
            ]);
            vert += 1;
        }
        // Step over the row's last vertex; it only closes cells, never opens one.
        vert += 1;
    }

    indices
}

/// Emits per-vertex UVs spanning `[0, 1]` across the grid footprint.
///
/// The vertex at `(x, z)` maps to `(x / width, z / depth)`, so corners land
/// exactly on (0, 0) and (1, 1) and a texture stretches once over the whole
/// terrain regardless of its cell counts.
pub fn grid_uvs(size: GridSize) -> Vec<Vec2> {
    let mut uvs = Vec::with_capacity(size.vertex_count());
    let w = size.width() as f32;
    let d = size.depth() as f32;

    for z in 0..=size.depth() {
        for x in 0..=size.width() {
            uvs.push(Vec2::new(x as f32 / w, z as f32 / d));
        }
    }

    uvs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            GridSize::new(0, 4),
            Err(TerrainError::InvalidDimension { width: 0, depth: 4 })
        );
        assert_eq!(
            GridSize::new(4, 0),
            Err(TerrainError::InvalidDimension { width: 4, depth: 0 })
        );
        assert_eq!(
            GridSize::new(0, 0),
            Err(TerrainError::InvalidDimension { width: 0, depth: 0 })
        );
        assert!(GridSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_counts() {
        let size = GridSize::new(32, 32).unwrap();
        assert_eq!(size.vertex_count(), 33 * 33);
        assert_eq!(size.index_count(), 32 * 32 * 6);

        let size = GridSize::new(3, 2).unwrap();
        assert_eq!(size.vertex_cols(), 4);
        assert_eq!(size.vertex_rows(), 3);
        assert_eq!(size.vertex_count(), 12);
        assert_eq!(size.index_count(), 36);
    }

    #[test]
    fn test_vertex_index_is_row_major() {
        let size = GridSize::new(4, 4).unwrap();
        assert_eq!(size.vertex_index(0, 0), 0);
        assert_eq!(size.vertex_index(4, 0), 4);
        assert_eq!(size.vertex_index(0, 1), 5);
        assert_eq!(size.vertex_index(2, 3), 17);
    }

    #[test]
    fn test_single_cell_triangulation() {
        let size = GridSize::new(1, 1).unwrap();
        assert_eq!(triangulate(size), vec![0, 2, 1, 1, 2, 3]);
    }

    #[test]
    fn test_row_end_skips_wrap_cell() {
        // Two cells wide: no triangle may span from a row's last vertex
        // column back to the next row's first.
        let size = GridSize::new(2, 1).unwrap();
        let indices = triangulate(size);
        assert_eq!(indices, vec![0, 3, 1, 1, 3, 4, 1, 4, 2, 2, 4, 5]);
    }

    #[test]
    fn test_indices_stay_in_bounds() {
        for (w, d) in [(1, 1), (2, 3), (5, 4), (32, 32)] {
            let size = GridSize::new(w, d).unwrap();
            let indices = triangulate(size);
            assert_eq!(indices.len(), size.index_count());
            let max = size.vertex_count() as u32;
            assert!(indices.iter().all(|&i| i < max));
        }
    }

    #[test]
    fn test_every_vertex_is_referenced() {
        let size = GridSize::new(3, 3).unwrap();
        let indices = triangulate(size);
        let mut seen = vec![false; size.vertex_count()];
        for &i in &indices {
            seen[i as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_uv_corners_and_count() {
        let size = GridSize::new(4, 2).unwrap();
        let uvs = grid_uvs(size);
        assert_eq!(uvs.len(), size.vertex_count());
        assert_eq!(uvs[0], Vec2::new(0.0, 0.0));
        assert_eq!(uvs[size.vertex_index(4, 0)], Vec2::new(1.0, 0.0));
        assert_eq!(uvs[size.vertex_index(0, 2)], Vec2::new(0.0, 1.0));
        assert_eq!(uvs[size.vertex_index(4, 2)], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_uvs_are_monotonic_along_axes() {
        let size = GridSize::new(8, 8).unwrap();
        let uvs = grid_uvs(size);
        for x in 1..=8 {
            assert!(uvs[size.vertex_index(x, 3)].x > uvs[size.vertex_index(x - 1, 3)].x);
        }
        for z in 1..=8 {
            assert!(uvs[size.vertex_index(3, z)].y > uvs[size.vertex_index(3, z - 1)].y);
        }
    }
}
