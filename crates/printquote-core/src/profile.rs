//! Print profile model
//!
//! The per-item manufacturing settings a customer supplies. Every
//! numeric field has declared bounds and a default; [`PrintProfile::clamped`]
//! coerces arbitrary input into those bounds instead of rejecting it.

use crate::data::calibration::{InfillPattern, LayerHeight, SupportType};
use crate::data::filaments::MaterialId;
use crate::units::{clamp_f64, clamp_u32};
use serde::{Deserialize, Serialize};

/// Declared bounds and fallbacks for the clamped profile fields.
pub mod bounds {
    pub const INFILL_PERCENT: (f64, f64, f64) = (0.0, 100.0, 10.0);
    pub const WALL_LOOPS: (u32, u32) = (1, 10);
    pub const BOTTOM_LAYERS: (u32, u32) = (0, 20);
    pub const SUPPORT_ANGLE_DEG: (f64, f64, f64) = (0.0, 89.0, 30.0);
    pub const COPIES: (u32, u32) = (1, 999);
    pub const ROTATION_DEG: (f64, f64, f64) = (-360.0, 360.0, 0.0);
}

/// Euler rotation in degrees, applied intrinsically in X-then-Y-then-Z order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
    pub z_deg: f64,
}

impl Rotation {
    pub fn new(x_deg: f64, y_deg: f64, z_deg: f64) -> Self {
        Self {
            x_deg,
            y_deg,
            z_deg,
        }
    }

    /// Each axis coerced into [-360, 360]; non-finite input becomes 0.
    pub fn clamped(&self) -> Rotation {
        let (min, max, fallback) = bounds::ROTATION_DEG;
        Rotation {
            x_deg: clamp_f64(self.x_deg, min, max, fallback),
            y_deg: clamp_f64(self.y_deg, min, max, fallback),
            z_deg: clamp_f64(self.z_deg, min, max, fallback),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.x_deg == 0.0 && self.y_deg == 0.0 && self.z_deg == 0.0
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {} / Y {} / Z {}",
            self.x_deg, self.y_deg, self.z_deg
        )
    }
}

/// Manufacturing settings for a single quote item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintProfile {
    pub material: MaterialId,
    pub layer_height: LayerHeight,
    /// Infill density in percent [0, 100]
    pub infill_percent: f64,
    /// Perimeter wall count [1, 10]
    pub wall_loops: u32,
    /// Bottom skin layer count [0, 20]
    pub bottom_layers: u32,
    pub infill_pattern: InfillPattern,

    pub support_enabled: bool,
    pub support_type: SupportType,
    /// Overhang angle threshold in degrees [0, 89]
    pub support_angle_deg: f64,

    /// Copy count [1, 999]
    pub copies: u32,
    /// Build orientation, wrapped to [-360, 360] per axis
    pub rotation: Rotation,
}

impl Default for PrintProfile {
    fn default() -> Self {
        Self {
            material: MaterialId::pla(),
            layer_height: LayerHeight::H020,
            infill_percent: 10.0,
            wall_loops: 2,
            bottom_layers: 3,
            infill_pattern: InfillPattern::Rectilinear,

            support_enabled: true,
            support_type: SupportType::Tree,
            support_angle_deg: 30.0,

            copies: 1,
            rotation: Rotation::default(),
        }
    }
}

impl PrintProfile {
    /// Returns a copy with every numeric field coerced into its declared
    /// bounds. Out-of-range values clamp, non-finite values fall back to
    /// the field default; nothing is ever rejected.
    pub fn clamped(&self) -> PrintProfile {
        let (inf_min, inf_max, inf_fb) = bounds::INFILL_PERCENT;
        let (ang_min, ang_max, ang_fb) = bounds::SUPPORT_ANGLE_DEG;
        PrintProfile {
            material: self.material.clone(),
            layer_height: self.layer_height,
            infill_percent: clamp_f64(self.infill_percent, inf_min, inf_max, inf_fb),
            wall_loops: clamp_u32(self.wall_loops, bounds::WALL_LOOPS.0, bounds::WALL_LOOPS.1),
            bottom_layers: clamp_u32(
                self.bottom_layers,
                bounds::BOTTOM_LAYERS.0,
                bounds::BOTTOM_LAYERS.1,
            ),
            infill_pattern: self.infill_pattern,
            support_enabled: self.support_enabled,
            support_type: self.support_type,
            support_angle_deg: clamp_f64(self.support_angle_deg, ang_min, ang_max, ang_fb),
            copies: clamp_u32(self.copies, bounds::COPIES.0, bounds::COPIES.1),
            rotation: self.rotation.clamped(),
        }
    }
}
