//! Print cost estimation
//!
//! Converts one item's geometry and print profile into extrusion volume,
//! support volume, time, weight, and price using the calibrated
//! empirical model. The decomposition is shell + bottom skin + infill,
//! with a solid-volume override for thin parts and a ratio fallback when
//! the decomposition collapses.

use crate::error::EstimateResult;
use printquote_core::data::calibration::{
    CalibrationConstants, InfillPattern, LayerHeight, SupportType,
};
use printquote_core::data::filaments::{FilamentLibrary, MaterialId};
use printquote_core::data::pricing::PricingConfig;
use printquote_core::profile::{PrintProfile, Rotation};
use printquote_core::units::{minutes_to_seconds, seconds_to_hours, volume_to_grams, zero_if_unusable};
use printquote_geometry::{analyze_pose, MeshMetrics, TriangleMesh};
use serde::{Deserialize, Serialize};

/// Fully derived cost breakdown for one item.
///
/// Echoes the clamped profile values actually used, so a consumer sees
/// what was quoted rather than what was typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcResult {
    // Effective profile
    pub material: MaterialId,
    pub layer_height: LayerHeight,
    pub infill_percent: f64,
    pub wall_loops: u32,
    pub bottom_layers: u32,
    pub infill_pattern: InfillPattern,
    pub support_enabled: bool,
    /// `None` when support is disabled in the profile
    pub support_type: Option<SupportType>,
    pub support_angle_deg: f64,
    pub copies: u32,
    pub rotation: Rotation,

    // Pose classification
    pub is_thin_part: bool,
    pub min_dimension_mm: f64,

    // Volumes, per copy
    pub model_volume_mm3: f64,
    pub print_volume_mm3: f64,
    pub support_volume_mm3: f64,

    // Support detection
    pub support_required: bool,
    pub overhang_area_mm2: f64,
    /// Scaled-and-capped support build height; zero when support is not
    /// required, regardless of the raw overhang measurement
    pub effective_support_height_mm: f64,

    // Volumes, whole batch of copies
    pub print_volume_total_mm3: f64,
    pub support_volume_total_mm3: f64,

    // Display estimates mirror a slicer preview (support included)
    pub display_grams: f64,
    pub display_time_s: f64,

    // Quoted estimates exclude support extrusion and add flat prep
    // overheads; customers are not charged for removable material
    pub quoted_grams: f64,
    pub quoted_time_s: f64,

    // Price breakdown
    pub material_cost: f64,
    pub time_cost: f64,
    pub subtotal: f64,
    pub support_fee_rate: f64,
    pub support_fee: f64,
    pub total: f64,
}

/// The calibrated print estimator.
///
/// Holds the immutable lookup tables and rates; the estimate itself is a
/// pure function of (mesh, metrics, profile), so identical inputs always
/// produce identical results.
#[derive(Debug, Clone)]
pub struct PrintEstimator {
    pub filaments: FilamentLibrary,
    pub calibration: CalibrationConstants,
    pub pricing: PricingConfig,
}

impl Default for PrintEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintEstimator {
    /// Estimator with the standard filament library and default
    /// calibration/pricing.
    pub fn new() -> Self {
        Self {
            filaments: FilamentLibrary::default(),
            calibration: CalibrationConstants::default(),
            pricing: PricingConfig::default(),
        }
    }

    /// Estimate one item.
    ///
    /// `metrics` must be the pose-independent measurement of `mesh`
    /// (computed once per mesh, not per rotation). Fails only for an
    /// unusable mesh; every other irregularity is clamped or degraded.
    pub fn estimate(
        &self,
        mesh: &TriangleMesh,
        metrics: &MeshMetrics,
        profile: &PrintProfile,
    ) -> EstimateResult<CalcResult> {
        metrics.validate()?;

        let p = profile.clamped();
        let cal = &self.calibration;
        let filament = self.filaments.get_or_default(&p.material);

        let model_volume = metrics.volume_mm3.max(0.0);
        let surface_area = metrics.surface_area_mm2.max(0.0);

        // Rotation affects plate contact and overhangs, not volume
        let pose = analyze_pose(mesh, &p.rotation, p.support_angle_deg, cal);
        let overhang = pose.overhang;

        // Extrusion volume: shell + bottom skin + infill
        let wall_thickness_mm = p.wall_loops as f64 * cal.line_width_mm;
        let bottom_thickness_mm = p.bottom_layers as f64 * p.layer_height.mm();

        let shell_volume =
            zero_if_unusable(surface_area * wall_thickness_mm * cal.shell_surface_factor);
        let bottom_volume = zero_if_unusable(pose.bottom_area_mm2 * bottom_thickness_mm);

        let interior_volume = (model_volume - shell_volume - bottom_volume).max(0.0);
        let infill_volume = interior_volume * (p.infill_percent / 100.0);

        let mut print_volume = shell_volume + bottom_volume + infill_volume;

        // Thin parts print near-solid; the shell/infill decomposition is
        // unreliable at this scale
        if pose.is_thin_part {
            print_volume = model_volume;
        }

        if !print_volume.is_finite() || print_volume <= 0.0 {
            let ratio = 0.5 + 0.5 * (p.infill_percent / 100.0);
            tracing::warn!(
                model_volume_mm3 = model_volume,
                ratio,
                "extrusion decomposition collapsed, using ratio fallback"
            );
            print_volume = model_volume * ratio;
        }

        // Support gating: small or low overhangs are self-supporting
        let support_required = p.support_enabled
            && overhang.area_mm2 >= cal.support_min_overhang_area_mm2
            && overhang.avg_height_mm >= cal.support_min_avg_height_mm;

        let mut support_volume = 0.0;
        let mut effective_support_height = overhang.avg_height_mm * cal.support_height_scale;

        if support_required {
            let cap = cal.support_height_cap_mm(p.support_type, pose.is_thin_part);
            effective_support_height = effective_support_height.min(cap);

            support_volume = overhang.area_mm2
                * effective_support_height
                * p.support_type.density_factor()
                * p.support_type.sparseness();
            // Bound pathological meshes
            support_volume = support_volume.min(model_volume * cal.support_volume_cap_ratio);
        } else {
            effective_support_height = 0.0;
        }

        let copies = p.copies as f64;
        let print_volume_total = print_volume * copies;
        let support_volume_total = support_volume * copies;

        // Time: calibrated flow preset, scaled by material and pattern
        let effective_flow = p.layer_height.base_flow_mm3_per_s() * filament.flow_multiplier;
        let pattern_multiplier = p.infill_pattern.time_multiplier();

        let display_time_s = zero_if_unusable(if effective_flow > 0.0 {
            ((print_volume_total + support_volume_total) / effective_flow) * pattern_multiplier
        } else {
            0.0
        });
        let display_grams = volume_to_grams(
            print_volume_total + support_volume_total,
            filament.density_g_cm3,
        ) * cal.flow_fudge;

        // Quoted figures exclude support extrusion and add the flat
        // heat/prime overheads, once per item regardless of copy count
        let base_charge_time_s = zero_if_unusable(if effective_flow > 0.0 {
            (print_volume_total / effective_flow) * pattern_multiplier
        } else {
            0.0
        });
        let base_charge_grams =
            volume_to_grams(print_volume_total, filament.density_g_cm3) * cal.flow_fudge;

        let quoted_grams = base_charge_grams + self.pricing.prime_waste_grams;
        let quoted_time_s =
            base_charge_time_s + minutes_to_seconds(self.pricing.heat_and_prime_minutes);

        let material_cost = quoted_grams * self.pricing.rate_per_gram;
        let time_cost = seconds_to_hours(quoted_time_s) * self.pricing.rate_per_hour;
        let subtotal = material_cost + time_cost;

        let support_fee = if support_required {
            subtotal * self.pricing.support_fee_rate
        } else {
            0.0
        };
        let total = subtotal + support_fee;

        tracing::debug!(
            model_volume_mm3 = model_volume,
            print_volume_mm3 = print_volume,
            support_volume_mm3 = support_volume,
            support_required,
            total,
            "item estimated"
        );

        Ok(CalcResult {
            material: p.material.clone(),
            layer_height: p.layer_height,
            infill_percent: p.infill_percent,
            wall_loops: p.wall_loops,
            bottom_layers: p.bottom_layers,
            infill_pattern: p.infill_pattern,
            support_enabled: p.support_enabled,
            support_type: p.support_enabled.then_some(p.support_type),
            support_angle_deg: p.support_angle_deg,
            copies: p.copies,
            rotation: p.rotation,

            is_thin_part: pose.is_thin_part,
            min_dimension_mm: pose.min_dimension_mm,

            model_volume_mm3: model_volume,
            print_volume_mm3: print_volume,
            support_volume_mm3: support_volume,

            support_required,
            overhang_area_mm2: overhang.area_mm2,
            effective_support_height_mm: effective_support_height,

            print_volume_total_mm3: print_volume_total,
            support_volume_total_mm3: support_volume_total,

            display_grams,
            display_time_s,
            quoted_grams,
            quoted_time_s,

            material_cost,
            time_cost,
            subtotal,
            support_fee_rate: self.pricing.support_fee_rate,
            support_fee,
            total,
        })
    }
}
