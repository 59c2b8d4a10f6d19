//! Mesh volume and surface area
//!
//! Volume uses the divergence-theorem decomposition into signed
//! tetrahedra with apex at the origin: `|Σ v0 · (v1 × v2)| / 6`. Valid
//! for any closed, consistently wound surface; the absolute value makes
//! it tolerant of globally flipped winding, but it cannot detect
//! non-manifold input. Surface area is the orientation-independent
//! `Σ ‖(v1−v0) × (v2−v0)‖ / 2`.

use crate::error::{MeshError, MeshResult};
use crate::mesh::TriangleMesh;
use serde::{Deserialize, Serialize};

/// Pose-independent metrics of a mesh, computed once per mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshMetrics {
    /// Enclosed volume in mm³
    pub volume_mm3: f64,
    /// Total surface area in mm²
    pub surface_area_mm2: f64,
}

impl MeshMetrics {
    /// A mesh is usable for costing only with a positive, finite volume.
    pub fn is_usable(&self) -> bool {
        self.volume_mm3.is_finite() && self.volume_mm3 > 0.0
    }

    /// Reject zero or non-finite volume with the specific reason.
    pub fn validate(&self) -> MeshResult<()> {
        if !self.volume_mm3.is_finite() {
            return Err(MeshError::NonFiniteVolume);
        }
        if self.volume_mm3 <= 0.0 {
            return Err(MeshError::ZeroVolume);
        }
        Ok(())
    }
}

/// Compute volume and surface area of a mesh.
///
/// Triangles contributing a NaN or infinite term (garbage vertices) are
/// skipped rather than poisoning the totals; degenerate zero-area
/// triangles contribute zero to both sums naturally.
pub fn measure(mesh: &TriangleMesh) -> MeshMetrics {
    let mut volume6 = 0.0_f64;
    let mut surface_area = 0.0_f64;
    let mut skipped = 0_usize;

    for [v0, v1, v2] in mesh.triangles() {
        let tet = v0.coords.dot(&v1.coords.cross(&v2.coords));
        let area2 = (v1 - v0).cross(&(v2 - v0)).norm();

        if !tet.is_finite() || !area2.is_finite() {
            skipped += 1;
            continue;
        }

        volume6 += tet;
        surface_area += area2 * 0.5;
    }

    if skipped > 0 {
        tracing::warn!(
            skipped,
            total = mesh.triangle_count(),
            "skipped triangles with non-finite contributions"
        );
    }

    MeshMetrics {
        volume_mm3: volume6.abs() / 6.0,
        surface_area_mm2: surface_area,
    }
}
