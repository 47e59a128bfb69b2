//! Color mask input for wall overrides.

use relief_color::Rgba;

/// A row-major grid of color samples that marks wall cells.
///
/// A mask carries its own extents, independent of the terrain grid it is
/// applied to. The override pass walks the mask's samples in linear order and
/// writes to the vertex at the same linear index, so a mask only lines up
/// cell for cell with the terrain when its extents equal the vertex grid's
/// `(width + 1) x (depth + 1)`. A smaller mask overrides a leading span of
/// vertices; a larger one is rejected before any vertex is touched.
///
/// Masks are read-only inputs: generation never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    samples: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Mask {
    /// Samples equal to this color mark wall cells. The comparison is exact,
    /// channel for channel; off-white never triggers an override.
    pub const WALL: Rgba = Rgba::WHITE;

    /// Creates a mask from row-major samples.
    ///
    /// # Panics
    ///
    /// Panics if `samples.len() != width * height`.
    pub fn from_samples(samples: Vec<Rgba>, width: usize, height: usize) -> Self {
        assert_eq!(
            samples.len(),
            width * height,
            "mask sample count must equal width * height"
        );
        Self {
            samples,
            width,
            height,
        }
    }

    /// Creates a mask filled with one color.
    pub fn solid(color: Rgba, width: usize, height: usize) -> Self {
        Self::from_samples(vec![color; width * height], width, height)
    }

    /// Sample columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sample rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total sample count.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// The samples in row-major order.
    pub fn samples(&self) -> &[Rgba] {
        &self.samples
    }

    /// Returns true if the sample at linear index `i` is the wall sentinel.
    /// Out-of-range indices are never walls.
    pub fn is_wall(&self, i: usize) -> bool {
        self.samples.get(i).is_some_and(|&c| c == Self::WALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_fill() {
        let mask = Mask::solid(Rgba::WHITE, 3, 2);
        assert_eq!(mask.sample_count(), 6);
        assert!((0..6).all(|i| mask.is_wall(i)));
    }

    #[test]
    fn test_sentinel_requires_exact_white() {
        let near_white = Rgba::new(1.0, 1.0, 1.0, 0.5);
        let mask = Mask::from_samples(vec![Rgba::WHITE, near_white, Rgba::BLACK], 3, 1);
        assert!(mask.is_wall(0));
        assert!(!mask.is_wall(1));
        assert!(!mask.is_wall(2));
    }

    #[test]
    fn test_out_of_range_index_is_not_a_wall() {
        let mask = Mask::solid(Rgba::WHITE, 2, 2);
        assert!(!mask.is_wall(4));
    }

    #[test]
    #[should_panic(expected = "mask sample count")]
    fn test_mismatched_sample_count_panics() {
        Mask::from_samples(vec![Rgba::BLACK; 5], 2, 2);
    }
}
