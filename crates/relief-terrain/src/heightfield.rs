//! Height-field construction from a noise field.

use glam::Vec3;
use relief_noise::NoiseField;

use crate::error::TerrainError;
use crate::grid::GridSize;
use crate::mask::Mask;

/// Observed height extrema of a built field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightRange {
    /// Lowest vertex height.
    pub min: f32,
    /// Highest vertex height.
    pub max: f32,
}

impl HeightRange {
    /// Normalizes `height` into `[0, 1]` against the range, clamped.
    ///
    /// A degenerate range (`min == max`, as on a single-cell grid where every
    /// vertex sits on the perimeter wall) maps every height to 0.
    pub fn normalize(&self, height: f32) -> f32 {
        if self.min == self.max {
            return 0.0;
        }
        ((height - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// A grid of vertex positions whose Y encodes terrain elevation.
///
/// Positions are row-major with X fastest: the vertex at `(x, z)` lives at
/// linear index `z * (width + 1) + x`, and its X/Z components equal its grid
/// coordinates. Construction goes through [`HeightField::build`]; the stored
/// [`HeightRange`] always reflects the positions it sits next to.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    positions: Vec<Vec3>,
    size: GridSize,
    range: HeightRange,
}

impl HeightField {
    /// Builds a height field by sampling `noise` across the vertex grid.
    ///
    /// Each vertex samples the noise at `(x, z)` scaled by `noise_frequency`
    /// and multiplies the result by `height_scale`. Vertices on the grid
    /// perimeter ignore the noise and sit at `wall_height`, forming a closed
    /// rim. Min and max are folded over exactly these per-vertex heights.
    ///
    /// An optional `mask` then forces more walls: its samples are walked in
    /// linear order, and every sample equal to [`Mask::WALL`] writes
    /// `wall_height` to the vertex at the same linear index. A mask with more
    /// samples than the grid has vertices fails with
    /// [`TerrainError::MaskIndexOutOfRange`] before any vertex is written.
    /// The mask pass does not refold the range; it only writes `wall_height`,
    /// which the perimeter already contributed, so the range still brackets
    /// every final height.
    pub fn build(
        size: GridSize,
        noise: &dyn NoiseField,
        mask: Option<&Mask>,
        wall_height: f32,
        height_scale: f32,
        noise_frequency: f32,
    ) -> Result<Self, TerrainError> {
        let mut positions = Vec::with_capacity(size.vertex_count());
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;

        for z in 0..=size.depth() {
            for x in 0..=size.width() {
                let on_rim = x == 0 || z == 0 || x == size.width() || z == size.depth();
                let y = if on_rim {
                    wall_height
                } else {
                    noise.sample(x as f32 * noise_frequency, z as f32 * noise_frequency)
                        * height_scale
                };
                min = min.min(y);
                max = max.max(y);
                positions.push(Vec3::new(x as f32, y, z as f32));
            }
        }

        if let Some(mask) = mask {
            let samples = mask.sample_count();
            if samples > positions.len() {
                return Err(TerrainError::MaskIndexOutOfRange {
                    samples,
                    vertices: positions.len(),
                });
            }
            for (i, &sample) in mask.samples().iter().enumerate() {
                if sample == Mask::WALL {
                    positions[i].y = wall_height;
                }
            }
        }

        Ok(Self {
            positions,
            size,
            range: HeightRange { min, max },
        })
    }

    /// Grid dimensions.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Observed height extrema.
    pub fn range(&self) -> HeightRange {
        self.range
    }

    /// All vertex positions, row-major.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Consumes the field, returning its position buffer.
    pub fn into_positions(self) -> Vec<Vec3> {
        self.positions
    }

    /// Vertex count, `(width + 1) * (depth + 1)`.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Position of the vertex at `(x, z)`. Valid for `x <= width` and
    /// `z <= depth`.
    pub fn position(&self, x: usize, z: usize) -> Vec3 {
        self.positions[self.size.vertex_index(x, z)]
    }

    /// Height of the vertex at `(x, z)`. Valid for `x <= width` and
    /// `z <= depth`.
    pub fn height(&self, x: usize, z: usize) -> f32 {
        self.position(x, z).y
    }

    /// Samples the surface height at a fractional grid coordinate.
    ///
    /// Coordinates clamp to the grid footprint `[0, width] x [0, depth]`;
    /// interior points interpolate bilinearly between the four surrounding
    /// vertices.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        bilinear_height(&self.positions, self.size, x, z)
    }
}

/// Bilinearly samples vertex heights at a fractional grid coordinate,
/// clamped to the grid footprint.
pub(crate) fn bilinear_height(positions: &[Vec3], size: GridSize, x: f32, z: f32) -> f32 {
    let x = x.clamp(0.0, size.width() as f32);
    let z = z.clamp(0.0, size.depth() as f32);

    let x0 = (x.floor() as usize).min(size.width());
    let z0 = (z.floor() as usize).min(size.depth());
    let x1 = (x0 + 1).min(size.width());
    let z1 = (z0 + 1).min(size.depth());
    let fx = x - x0 as f32;
    let fz = z - z0 as f32;

    let h00 = positions[size.vertex_index(x0, z0)].y;
    let h10 = positions[size.vertex_index(x1, z0)].y;
    let h01 = positions[size.vertex_index(x0, z1)].y;
    let h11 = positions[size.vertex_index(x1, z1)].y;

    let near = h00 + (h10 - h00) * fx;
    let far = h01 + (h11 - h01) * fx;
    near + (far - near) * fz
}
