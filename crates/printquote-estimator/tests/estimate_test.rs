//! End-to-end estimation scenarios.

use nalgebra::Point3;
use printquote_core::data::calibration::{CalibrationConstants, SupportType};
use printquote_core::data::filaments::{FilamentProperties, MaterialId};
use printquote_core::profile::{PrintProfile, Rotation};
use printquote_estimator::{EstimateError, PrintEstimator};
use printquote_geometry::{measure, MeshError, MeshMetrics, TriangleMesh};

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::new(x, y, z)
}

/// Axis-aligned closed box with outward-facing winding.
fn box_vertices(origin: Point3<f64>, dx: f64, dy: f64, dz: f64) -> Vec<Point3<f64>> {
    let (x0, y0, z0) = (origin.x, origin.y, origin.z);
    let (x1, y1, z1) = (x0 + dx, y0 + dy, z0 + dz);
    let quads = [
        [p(x0, y0, z0), p(x0, y1, z0), p(x1, y1, z0), p(x1, y0, z0)],
        [p(x0, y0, z1), p(x1, y0, z1), p(x1, y1, z1), p(x0, y1, z1)],
        [p(x0, y0, z0), p(x1, y0, z0), p(x1, y0, z1), p(x0, y0, z1)],
        [p(x0, y1, z0), p(x0, y1, z1), p(x1, y1, z1), p(x1, y1, z0)],
        [p(x0, y0, z0), p(x0, y0, z1), p(x0, y1, z1), p(x0, y1, z0)],
        [p(x1, y0, z0), p(x1, y1, z0), p(x1, y1, z1), p(x1, y0, z1)],
    ];
    let mut vertices = Vec::with_capacity(36);
    for [a, b, c, d] in quads {
        vertices.extend_from_slice(&[a, b, c]);
        vertices.extend_from_slice(&[a, c, d]);
    }
    vertices
}

fn cube(edge: f64) -> TriangleMesh {
    TriangleMesh::from_triangles(box_vertices(p(0.0, 0.0, 0.0), edge, edge, edge)).unwrap()
}

/// A 20mm cube with a 45°-tilted flap of the given surface area hovering
/// above it. The flap faces down-and-back (unit normal z = -0.707), so
/// it is a support candidate at the default 30° threshold.
fn cube_with_overhang_flap(flap_area_mm2: f64) -> TriangleMesh {
    let mut vertices = box_vertices(p(0.0, 0.0, 0.0), 20.0, 20.0, 20.0);

    let w = 5.0;
    let l = flap_area_mm2 / (w * std::f64::consts::SQRT_2);
    let z0 = 25.0;
    let q0 = p(0.0, 0.0, z0);
    let q1 = p(w, 0.0, z0);
    let q2 = p(w, l, z0 + l);
    let q3 = p(0.0, l, z0 + l);
    // Wound so the normal points downward
    vertices.extend_from_slice(&[q0, q3, q2]);
    vertices.extend_from_slice(&[q0, q2, q1]);

    TriangleMesh::from_triangles(vertices).unwrap()
}

fn no_support_profile() -> PrintProfile {
    PrintProfile {
        support_enabled: false,
        ..PrintProfile::default()
    }
}

#[test]
fn cube_quote_matches_the_calibrated_model() {
    let mesh = cube(20.0);
    let metrics = measure(&mesh);
    let estimator = PrintEstimator::new();

    let result = estimator
        .estimate(&mesh, &metrics, &no_support_profile())
        .unwrap();

    // Recompute the breakdown from the published constants:
    // shell = 2400 * (2 * 0.42) * 0.85, bottom = 400 * (3 * 0.20),
    // interior = 8000 - shell - bottom, infill = interior * 0.10
    let shell = 2400.0 * 0.84 * 0.85;
    let bottom = 400.0 * 0.6;
    let infill = (8000.0 - shell - bottom) * 0.10;
    let print_volume = shell + bottom + infill;

    assert!((result.model_volume_mm3 - 8000.0).abs() < 1e-6);
    assert!((result.print_volume_mm3 - print_volume).abs() < 1e-6);
    assert!(!result.support_required);
    assert_eq!(result.support_volume_mm3, 0.0);
    assert_eq!(result.effective_support_height_mm, 0.0);

    // PLA at 0.20mm: flow 5.0 mm³/s, rectilinear multiplier 1.0
    let display_time = print_volume / 5.0;
    assert!((result.display_time_s - display_time).abs() < 1e-6);
    assert!((result.quoted_time_s - (display_time + 15.0 * 60.0)).abs() < 1e-6);

    let display_grams = (print_volume / 1000.0) * 1.24 * 1.04;
    assert!((result.display_grams - display_grams).abs() < 1e-9);
    assert!((result.quoted_grams - (display_grams + 4.0)).abs() < 1e-9);

    let material_cost = result.quoted_grams * 7.0;
    let time_cost = result.quoted_time_s / 3600.0 * 100.0;
    assert!((result.material_cost - material_cost).abs() < 1e-9);
    assert!((result.time_cost - time_cost).abs() < 1e-9);
    assert!((result.total - (material_cost + time_cost)).abs() < 1e-9);
    assert!(result.total > 0.0);
}

#[test]
fn copies_scale_volumes_but_not_the_prime_allowance() {
    let mesh = cube(20.0);
    let metrics = measure(&mesh);
    let estimator = PrintEstimator::new();

    let one = estimator
        .estimate(&mesh, &metrics, &no_support_profile())
        .unwrap();
    let two = estimator
        .estimate(
            &mesh,
            &metrics,
            &PrintProfile {
                copies: 2,
                ..no_support_profile()
            },
        )
        .unwrap();

    // Per-batch volumes double exactly
    assert!((two.print_volume_total_mm3 - 2.0 * one.print_volume_total_mm3).abs() < 1e-9);
    assert!((two.support_volume_total_mm3 - 2.0 * one.support_volume_total_mm3).abs() < 1e-9);
    assert!((two.display_time_s - 2.0 * one.display_time_s).abs() < 1e-6);

    // The flat heat/prime overheads are charged once per item, not per
    // copy: subtracting them leaves exactly doubled charges
    let prime_s = 15.0 * 60.0;
    assert!(((two.quoted_time_s - prime_s) - 2.0 * (one.quoted_time_s - prime_s)).abs() < 1e-6);
    assert!(((two.quoted_grams - 4.0) - 2.0 * (one.quoted_grams - 4.0)).abs() < 1e-9);
}

#[test]
fn identical_inputs_yield_identical_results() {
    let mesh = cube_with_overhang_flap(120.0);
    let metrics = measure(&mesh);
    let estimator = PrintEstimator::new();
    let profile = PrintProfile {
        rotation: Rotation::new(15.0, -30.0, 45.0),
        ..PrintProfile::default()
    };

    let a = estimator.estimate(&mesh, &metrics, &profile).unwrap();
    let b = estimator.estimate(&mesh, &metrics, &profile).unwrap();
    assert_eq!(a, b);
}

#[test]
fn small_overhangs_do_not_require_support() {
    let mesh = cube_with_overhang_flap(50.0);
    let metrics = measure(&mesh);
    let estimator = PrintEstimator::new();

    let result = estimator
        .estimate(&mesh, &metrics, &PrintProfile::default())
        .unwrap();

    assert!((result.overhang_area_mm2 - 50.0).abs() < 1e-6);
    assert!(!result.support_required);
    assert_eq!(result.support_volume_mm3, 0.0);
    assert_eq!(result.effective_support_height_mm, 0.0);
    assert_eq!(result.support_fee, 0.0);
}

#[test]
fn large_overhangs_require_support_and_incur_the_fee() {
    let mesh = cube_with_overhang_flap(100.0);
    let metrics = measure(&mesh);
    let estimator = PrintEstimator::new();

    let result = estimator
        .estimate(&mesh, &metrics, &PrintProfile::default())
        .unwrap();

    assert!((result.overhang_area_mm2 - 100.0).abs() < 1e-6);
    assert!(result.support_required);
    assert!(result.support_volume_mm3 > 0.0);
    assert!(result.effective_support_height_mm > 0.0);
    assert!((result.support_fee - result.subtotal * 0.2).abs() < 1e-9);
    assert!((result.total - (result.subtotal + result.support_fee)).abs() < 1e-9);
}

#[test]
fn support_volume_respects_the_model_volume_cap() {
    let mesh = cube_with_overhang_flap(100.0);
    let metrics = measure(&mesh);
    let estimator = PrintEstimator::new();

    let result = estimator
        .estimate(&mesh, &metrics, &PrintProfile::default())
        .unwrap();
    let cap = result.model_volume_mm3 * CalibrationConstants::default().support_volume_cap_ratio;
    assert!(result.support_volume_mm3 <= cap + 1e-9);
}

#[test]
fn disabling_support_skips_detection_entirely() {
    let mesh = cube_with_overhang_flap(100.0);
    let metrics = measure(&mesh);
    let estimator = PrintEstimator::new();

    let result = estimator
        .estimate(&mesh, &metrics, &no_support_profile())
        .unwrap();
    assert!(!result.support_required);
    assert_eq!(result.support_type, None);
    assert_eq!(result.support_volume_mm3, 0.0);
}

#[test]
fn thin_plate_is_costed_as_solid_regardless_of_infill() {
    let plate =
        TriangleMesh::from_triangles(box_vertices(p(0.0, 0.0, 0.0), 40.0, 40.0, 1.0)).unwrap();
    let metrics = measure(&plate);
    let estimator = PrintEstimator::new();

    for infill in [10.0, 90.0] {
        let result = estimator
            .estimate(
                &plate,
                &metrics,
                &PrintProfile {
                    infill_percent: infill,
                    ..no_support_profile()
                },
            )
            .unwrap();
        assert!(result.is_thin_part);
        assert!(
            (result.print_volume_mm3 - result.model_volume_mm3).abs() < 1e-9,
            "thin part must print at model volume with {infill}% infill"
        );
        assert!((result.model_volume_mm3 - 1600.0).abs() < 1e-6);
    }
}

#[test]
fn out_of_range_profile_values_are_echoed_clamped() {
    let mesh = cube(20.0);
    let metrics = measure(&mesh);
    let estimator = PrintEstimator::new();

    let result = estimator
        .estimate(
            &mesh,
            &metrics,
            &PrintProfile {
                infill_percent: 250.0,
                wall_loops: 50,
                bottom_layers: 99,
                support_angle_deg: 500.0,
                copies: 0,
                ..PrintProfile::default()
            },
        )
        .unwrap();

    assert_eq!(result.infill_percent, 100.0);
    assert_eq!(result.wall_loops, 10);
    assert_eq!(result.bottom_layers, 20);
    assert_eq!(result.support_angle_deg, 89.0);
    assert_eq!(result.copies, 1);
}

#[test]
fn collapsed_decomposition_uses_the_ratio_fallback() {
    // With no usable surface area, no bottom layers, and 0% infill every
    // decomposition term is zero, so the estimate degrades to the
    // infill-scaled fraction of model volume
    let mesh = cube(20.0);
    let metrics = MeshMetrics {
        volume_mm3: 100.0,
        surface_area_mm2: 0.0,
    };
    let estimator = PrintEstimator::new();

    let result = estimator
        .estimate(
            &mesh,
            &metrics,
            &PrintProfile {
                infill_percent: 0.0,
                bottom_layers: 0,
                ..no_support_profile()
            },
        )
        .unwrap();

    // 100 * (0.5 + 0.5 * 0/100)
    assert!((result.print_volume_mm3 - 50.0).abs() < 1e-9);
    assert!(result.total.is_finite());
}

#[test]
fn zero_flow_filament_degrades_time_to_zero() {
    let mesh = cube(20.0);
    let metrics = measure(&mesh);

    let mut estimator = PrintEstimator::new();
    estimator.filaments.add_filament(
        MaterialId("resin".to_string()),
        FilamentProperties::new("Resin", 1.1, 0.0),
    );

    let result = estimator
        .estimate(
            &mesh,
            &metrics,
            &PrintProfile {
                material: MaterialId("resin".to_string()),
                ..no_support_profile()
            },
        )
        .unwrap();

    // No flow means no time estimate; quoted time is the flat prep
    // allowance alone and nothing divides by zero
    assert_eq!(result.display_time_s, 0.0);
    assert!((result.quoted_time_s - 15.0 * 60.0).abs() < 1e-9);
    assert!(result.display_grams > 0.0);
    assert!(result.total.is_finite());
    assert!(result.total > 0.0);
}

#[test]
fn zero_volume_mesh_is_rejected_with_a_reason() {
    // A lone triangle through the origin has zero signed volume
    let mesh = TriangleMesh::from_triangles(vec![
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 0.0),
        p(0.0, 1.0, 0.0),
    ])
    .unwrap();
    let metrics = measure(&mesh);
    let estimator = PrintEstimator::new();

    let err = estimator
        .estimate(&mesh, &metrics, &PrintProfile::default())
        .unwrap_err();
    assert_eq!(err, EstimateError::InvalidMesh(MeshError::ZeroVolume));
}

#[test]
fn tree_supports_use_less_material_than_normal() {
    let mesh = cube_with_overhang_flap(150.0);
    let metrics = measure(&mesh);
    let estimator = PrintEstimator::new();

    let tree = estimator
        .estimate(
            &mesh,
            &metrics,
            &PrintProfile {
                support_type: SupportType::Tree,
                ..PrintProfile::default()
            },
        )
        .unwrap();
    let normal = estimator
        .estimate(
            &mesh,
            &metrics,
            &PrintProfile {
                support_type: SupportType::Normal,
                ..PrintProfile::default()
            },
        )
        .unwrap();

    assert!(tree.support_required && normal.support_required);
    assert!(tree.support_volume_mm3 < normal.support_volume_mm3);
}

#[test]
fn calc_result_serializes_round_trip() {
    let mesh = cube(20.0);
    let metrics = measure(&mesh);
    let estimator = PrintEstimator::new();
    let result = estimator
        .estimate(&mesh, &metrics, &PrintProfile::default())
        .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: printquote_estimator::CalcResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
