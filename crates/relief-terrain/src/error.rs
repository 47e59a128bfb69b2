//! Error types for terrain generation.

use thiserror::Error;

/// Errors produced while generating a terrain surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerrainError {
    /// Grid dimensions must both be at least one cell.
    #[error("invalid grid dimension {width}x{depth}: width and depth must be at least 1")]
    InvalidDimension {
        /// Requested cell count along X.
        width: usize,
        /// Requested cell count along Z.
        depth: usize,
    },

    /// A required input was never supplied to the builder.
    #[error("missing dependency: no {0} was supplied")]
    MissingDependency(&'static str),

    /// The mask addresses vertex indices past the end of the height field.
    #[error("mask covers {samples} samples but the grid has only {vertices} vertices")]
    MaskIndexOutOfRange {
        /// Sample count of the offending mask.
        samples: usize,
        /// Vertex count of the target grid.
        vertices: usize,
    },
}
