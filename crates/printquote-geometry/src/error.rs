//! Error types for mesh analysis.
//!
//! Nothing here is fatal to a batch: an unusable mesh is reported to the
//! caller and the owning item is excluded from costing.

use thiserror::Error;

/// Errors raised while constructing or validating a triangle mesh.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The mesh contains no triangles.
    #[error("mesh contains no triangles")]
    EmptyMesh,

    /// A triangle-soup vertex buffer must hold 3 vertices per triangle.
    #[error("vertex count {count} is not a multiple of 3")]
    RaggedSoup { count: usize },

    /// An index named a vertex outside the vertex buffer.
    #[error("triangle index {index} out of bounds (vertex count {vertex_count})")]
    IndexOutOfBounds { index: u32, vertex_count: usize },

    /// Computed volume is zero; the surface is unusable for costing.
    #[error("mesh volume is zero; surface is open or degenerate")]
    ZeroVolume,

    /// Computed volume is NaN or infinite.
    #[error("mesh volume is not finite")]
    NonFiniteVolume,
}

/// Result alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
