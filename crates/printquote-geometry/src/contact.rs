//! Build-plate contact and overhang analysis
//!
//! Everything here depends on the rotated pose and must be recomputed
//! whenever the build orientation changes. Triangle classification is
//! done on unit normals via Z-component cutoffs; the support threshold
//! angle comparison uses the cosine directly so no inverse trig runs in
//! the hot loop.

use crate::mesh::{Aabb, TriangleMesh};
use crate::transform::rotated;
use nalgebra::{Point3, Vector3};
use printquote_core::data::calibration::CalibrationConstants;
use printquote_core::profile::Rotation;
use serde::{Deserialize, Serialize};

/// Overhang exposure of a rotated pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct OverhangStats {
    /// Total area of support-candidate triangles in mm²
    pub area_mm2: f64,
    /// Arithmetic mean of candidate centroid heights above the pose
    /// floor, in mm. Deliberately not area-weighted so one large flat
    /// overhang cannot dominate the average; capped at the pose height.
    pub avg_height_mm: f64,
}

/// Full pose-dependent analysis of a rotated mesh.
#[derive(Debug, Clone)]
pub struct PoseAnalysis {
    /// Bounding box of the rotated pose
    pub bounds: Aabb,
    /// Smallest bounding-box extent in mm
    pub min_dimension_mm: f64,
    /// Thin-part classification (min extent at or below the calibrated
    /// threshold); switches the overhang cutoff and solid costing
    pub is_thin_part: bool,
    /// Build-plate adhesion footprint in mm²
    pub bottom_area_mm2: f64,
    /// Overhang statistics for support estimation
    pub overhang: OverhangStats,
}

/// Area and unit normal of a triangle, or `None` when degenerate or
/// carrying non-finite coordinates.
fn area_and_normal(v0: &Point3<f64>, v1: &Point3<f64>, v2: &Point3<f64>) -> Option<(f64, Vector3<f64>)> {
    let n = (v1 - v0).cross(&(v2 - v0));
    let len = n.norm();
    if !len.is_finite() || len <= 0.0 {
        return None;
    }
    Some((len * 0.5, n / len))
}

/// Sum the area of triangles facing predominantly downward.
///
/// Approximates plate contact for bottom-thickness purposes; the cutoff
/// is a calibrated constant, not a strict coplanarity test.
pub fn bottom_contact_area(mesh: &TriangleMesh, cal: &CalibrationConstants) -> f64 {
    let mut bottom_area = 0.0;
    for [v0, v1, v2] in mesh.triangles() {
        if let Some((area, normal)) = area_and_normal(&v0, &v1, &v2) {
            if normal.z < cal.bottom_face_z_cutoff {
                bottom_area += area;
            }
        }
    }
    bottom_area
}

/// Collect overhang statistics for a rotated pose.
///
/// A triangle is a support candidate when its normal is not mostly
/// upward (`nz <= cutoff`, stricter for thin parts) AND it is steeper
/// than the configured threshold angle: `-nz >= cos(threshold)` means
/// the face points close enough to straight down that it rests on the
/// plate or bridges, so it is excluded.
pub fn overhang_stats(
    mesh: &TriangleMesh,
    bounds: &Aabb,
    threshold_deg: f64,
    thin_part: bool,
    cal: &CalibrationConstants,
) -> OverhangStats {
    let min_z = bounds.min.z;
    let pose_height = bounds.height();
    let cos_threshold = threshold_deg.to_radians().cos();
    let down_z_cutoff = cal.overhang_z_cutoff(thin_part);

    let mut area = 0.0;
    let mut height_sum = 0.0;
    let mut count = 0_usize;

    for [v0, v1, v2] in mesh.triangles() {
        let Some((tri_area, normal)) = area_and_normal(&v0, &v1, &v2) else {
            continue;
        };
        if normal.z > down_z_cutoff {
            continue;
        }
        if -normal.z >= cos_threshold {
            continue;
        }

        let centroid_z = (v0.z + v1.z + v2.z) / 3.0;
        let height = (centroid_z - min_z).max(0.0);

        area += tri_area;
        height_sum += height;
        count += 1;
    }

    let avg_height_mm = if count > 0 {
        (height_sum / count as f64).min(pose_height)
    } else {
        0.0
    };

    OverhangStats {
        area_mm2: area,
        avg_height_mm,
    }
}

/// Rotate a mesh into its build pose and analyze plate contact and
/// overhang exposure.
pub fn analyze_pose(
    mesh: &TriangleMesh,
    rotation: &Rotation,
    support_threshold_deg: f64,
    cal: &CalibrationConstants,
) -> PoseAnalysis {
    let posed = rotated(mesh, rotation);
    let bounds = posed.bounds();

    let min_dimension_mm = bounds.min_dimension();
    let is_thin_part = min_dimension_mm <= cal.thin_min_dim_mm;

    let bottom_area_mm2 = bottom_contact_area(&posed, cal);
    let overhang = overhang_stats(&posed, &bounds, support_threshold_deg, is_thin_part, cal);

    tracing::debug!(
        bottom_area_mm2,
        overhang_area_mm2 = overhang.area_mm2,
        avg_overhang_height_mm = overhang.avg_height_mm,
        is_thin_part,
        "pose analyzed"
    );

    PoseAnalysis {
        bounds,
        min_dimension_mm,
        is_thin_part,
        bottom_area_mm2,
        overhang,
    }
}
