//! Terrain generation entry point.

use relief_color::Gradient;
use relief_noise::NoiseField;

use crate::error::TerrainError;
use crate::grid::{self, GridSize};
use crate::heightfield::HeightField;
use crate::mask::Mask;
use crate::mesh::Mesh;
use crate::surface::{height_colors, TerrainSurface};

/// Configuration for a terrain build.
///
/// Dimensions count cells; they are validated when generation runs, so a
/// config can hold transient zero values while being edited.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainConfig {
    /// Cell count along X.
    pub width: usize,
    /// Cell count along Z.
    pub depth: usize,
    /// Height forced on the grid rim and on masked vertices.
    pub wall_height: f32,
    /// Multiplier applied to raw noise samples.
    pub height_scale: f32,
    /// Grid-to-noise domain factor: vertex `(x, z)` samples the field at
    /// `(x * noise_frequency, z * noise_frequency)`.
    pub noise_frequency: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 32,
            depth: 32,
            wall_height: 100.0,
            height_scale: 2.0,
            noise_frequency: 0.1,
        }
    }
}

/// Assembles terrain surfaces from explicitly supplied inputs.
///
/// The builder borrows its noise field and gradient rather than owning them,
/// so one set of inputs can drive many builds. Generation fails with
/// [`TerrainError::MissingDependency`] if either required input was never
/// supplied; the mask is optional.
///
/// # Example
///
/// ```
/// use relief_color::presets;
/// use relief_noise::Perlin;
/// use relief_terrain::{TerrainBuilder, TerrainConfig};
///
/// let noise = Perlin::with_seed(42);
/// let gradient = presets::elevation();
///
/// let surface = TerrainBuilder::new(TerrainConfig::default())
///     .noise(&noise)
///     .gradient(&gradient)
///     .generate()
///     .unwrap();
///
/// assert_eq!(surface.mesh().vertex_count(), 33 * 33);
/// ```
#[derive(Clone)]
pub struct TerrainBuilder<'a> {
    config: TerrainConfig,
    noise: Option<&'a dyn NoiseField>,
    gradient: Option<&'a Gradient>,
    mask: Option<&'a Mask>,
}

impl<'a> TerrainBuilder<'a> {
    /// Creates a builder with no inputs attached.
    pub fn new(config: TerrainConfig) -> Self {
        Self {
            config,
            noise: None,
            gradient: None,
            mask: None,
        }
    }

    /// Supplies the noise field that drives vertex heights. Required.
    pub fn noise(mut self, noise: &'a dyn NoiseField) -> Self {
        self.noise = Some(noise);
        self
    }

    /// Supplies the gradient that colors vertices by height. Required.
    pub fn gradient(mut self, gradient: &'a Gradient) -> Self {
        self.gradient = Some(gradient);
        self
    }

    /// Supplies an optional wall mask.
    pub fn mask(mut self, mask: &'a Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Runs the full pipeline: heights, triangulation, UVs, colors.
    ///
    /// The stages run in a fixed order. Heights come first because the color
    /// stage normalizes against the observed height range; triangulation and
    /// UVs depend only on the validated grid size. On any error the inputs
    /// are untouched and no partial surface escapes.
    pub fn generate(&self) -> Result<TerrainSurface, TerrainError> {
        let size = GridSize::new(self.config.width, self.config.depth)?;
        let noise = self
            .noise
            .ok_or(TerrainError::MissingDependency("noise field"))?;
        let gradient = self
            .gradient
            .ok_or(TerrainError::MissingDependency("gradient"))?;

        let field = HeightField::build(
            size,
            noise,
            self.mask,
            self.config.wall_height,
            self.config.height_scale,
            self.config.noise_frequency,
        )?;

        let indices = grid::triangulate(size);
        let uvs = grid::grid_uvs(size);
        let colors = height_colors(&field, gradient);
        let range = field.range();

        let mesh = Mesh {
            positions: field.into_positions(),
            normals: Vec::new(),
            uvs,
            colors,
            indices,
        };

        Ok(TerrainSurface::new(mesh, size, range))
    }
}
