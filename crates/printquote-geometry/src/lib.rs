//! # PrintQuote Geometry
//!
//! Pure mesh analysis for the quoting pipeline. Consumes an
//! already-decoded triangle buffer (vertex positions plus an optional
//! index list) and produces the metrics the estimator needs:
//!
//! - [`metrics`] - signed-tetrahedron volume and surface area
//! - [`transform`] - copy-on-rotate Euler transform with AABB recompute
//! - [`contact`] - build-plate contact area and overhang statistics
//!
//! All computation is synchronous and allocation-light; the triangle
//! loops read straight out of the vertex buffer.

pub mod contact;
pub mod error;
pub mod mesh;
pub mod metrics;
pub mod transform;

pub use contact::{analyze_pose, OverhangStats, PoseAnalysis};
pub use error::{MeshError, MeshResult};
pub use mesh::{Aabb, TriangleMesh};
pub use metrics::{measure, MeshMetrics};
pub use transform::{rotated, rotation_matrix};
