//! Error types for estimation.

use printquote_geometry::MeshError;
use thiserror::Error;

/// Errors that can exclude an item from costing.
///
/// Out-of-range profile values never error; they are clamped. Non-finite
/// intermediates never error; they degrade to documented fallbacks. The
/// only unrecoverable per-item condition is a mesh that cannot produce a
/// usable volume.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// The item's mesh is unusable for costing.
    #[error("unusable mesh: {0}")]
    InvalidMesh(#[from] MeshError),
}

/// Result alias for estimation operations.
pub type EstimateResult<T> = Result<T, EstimateError>;
