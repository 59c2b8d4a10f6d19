//! Machine calibration presets
//!
//! Layer-height flow presets, infill pattern multipliers, support
//! strategy factors, and the empirical geometry constants the contact
//! analyzer and estimator share. The numeric values are calibrated
//! against a reference Ender-3 class printer; override them by
//! constructing a custom [`CalibrationConstants`] rather than editing
//! call sites.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported layer heights, each with its own calibrated flow preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum LayerHeight {
    #[serde(rename = "0.20")]
    H020,
    #[serde(rename = "0.25")]
    H025,
    #[serde(rename = "0.28")]
    H028,
}

impl LayerHeight {
    /// Layer height in millimeters
    pub fn mm(&self) -> f64 {
        match self {
            Self::H020 => 0.20,
            Self::H025 => 0.25,
            Self::H028 => 0.28,
        }
    }

    /// Calibrated effective flow rate in mm³/s at this layer height.
    ///
    /// Matches observed Ender-3 V3 print times better than a pure
    /// volumetric model; taller layers extrude faster.
    pub fn base_flow_mm3_per_s(&self) -> f64 {
        match self {
            Self::H020 => 5.0,
            Self::H025 => 5.8,
            Self::H028 => 6.2,
        }
    }
}

impl Default for LayerHeight {
    fn default() -> Self {
        Self::H020
    }
}

impl std::fmt::Display for LayerHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.mm())
    }
}

impl FromStr for LayerHeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0.20" | "0.2" => Ok(Self::H020),
            "0.25" => Ok(Self::H025),
            "0.28" => Ok(Self::H028),
            _ => Err(format!("Unsupported layer height: {}", s)),
        }
    }
}

/// Infill lattice pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum InfillPattern {
    Rectilinear,
    Grid,
    Gyroid,
    Honeycomb,
    Triangles,
    Cubic,
}

impl InfillPattern {
    /// Print-time multiplier relative to rectilinear.
    ///
    /// Denser direction changes cost time even at equal extrusion volume.
    pub fn time_multiplier(&self) -> f64 {
        match self {
            Self::Rectilinear => 1.0,
            Self::Grid => 1.05,
            Self::Gyroid => 1.15,
            Self::Honeycomb => 1.2,
            Self::Triangles => 1.1,
            Self::Cubic => 1.12,
        }
    }
}

impl Default for InfillPattern {
    fn default() -> Self {
        Self::Rectilinear
    }
}

impl std::fmt::Display for InfillPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rectilinear => write!(f, "Rectilinear"),
            Self::Grid => write!(f, "Grid"),
            Self::Gyroid => write!(f, "Gyroid"),
            Self::Honeycomb => write!(f, "Honeycomb"),
            Self::Triangles => write!(f, "Triangles"),
            Self::Cubic => write!(f, "Cubic"),
        }
    }
}

impl FromStr for InfillPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectilinear" => Ok(Self::Rectilinear),
            "grid" => Ok(Self::Grid),
            "gyroid" => Ok(Self::Gyroid),
            "honeycomb" => Ok(Self::Honeycomb),
            "triangles" => Ok(Self::Triangles),
            "cubic" => Ok(Self::Cubic),
            _ => Err(format!("Unknown infill pattern: {}", s)),
        }
    }
}

/// Support generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum SupportType {
    Tree,
    Normal,
}

impl SupportType {
    /// Material density factor of the support lattice.
    ///
    /// Tree supports are sparse; these factors are calibrated down to
    /// match slicer-reported support volume.
    pub fn density_factor(&self) -> f64 {
        match self {
            Self::Tree => 0.035,
            Self::Normal => 0.06,
        }
    }

    /// Additional sparseness multiplier (tree trunks skip most of the
    /// overhang footprint).
    pub fn sparseness(&self) -> f64 {
        match self {
            Self::Tree => 0.5,
            Self::Normal => 1.0,
        }
    }
}

impl Default for SupportType {
    fn default() -> Self {
        Self::Tree
    }
}

impl std::fmt::Display for SupportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tree => write!(f, "Tree"),
            Self::Normal => write!(f, "Normal"),
        }
    }
}

impl FromStr for SupportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tree" => Ok(Self::Tree),
            "normal" => Ok(Self::Normal),
            _ => Err(format!("Unknown support type: {}", s)),
        }
    }
}

/// Empirical constants shared by the contact analyzer and the estimator.
///
/// All values are tied to a specific reference printer and nozzle; they
/// are fields rather than `const`s so a differently calibrated machine
/// can supply its own set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationConstants {
    /// Extrusion line width in mm (0.4 nozzle with typical overextrusion)
    pub line_width_mm: f64,
    /// Shell surface factor accounting for perimeter/top/bottom overlap
    pub shell_surface_factor: f64,
    /// Minimum bounding-box dimension below which a part is "thin"
    /// (lithophanes, plates) and costed as near-solid
    pub thin_min_dim_mm: f64,

    /// Unit-normal Z cutoff for build-plate contact triangles
    pub bottom_face_z_cutoff: f64,
    /// Overhang down-facing Z cutoff for bulk parts
    pub overhang_z_cutoff_bulk: f64,
    /// Stricter overhang cutoff for thin parts, avoids false positives
    /// on near-vertical thin walls
    pub overhang_z_cutoff_thin: f64,

    /// Minimum overhang area before support is considered required (mm²)
    pub support_min_overhang_area_mm2: f64,
    /// Minimum average overhang height before support is required (mm)
    pub support_min_avg_height_mm: f64,
    /// Fraction of the average overhang centroid height that supports
    /// are actually built to
    pub support_height_scale: f64,
    /// Support volume ceiling as a fraction of model volume
    pub support_volume_cap_ratio: f64,

    /// Effective support height cap for thin tree-supported parts (mm)
    pub thin_tree_support_height_cap_mm: f64,
    /// Effective support height cap for tree supports (mm)
    pub tree_support_height_cap_mm: f64,
    /// Effective support height cap for normal supports (mm)
    pub normal_support_height_cap_mm: f64,

    /// Small multiplier correcting for seams/overlap flow reality
    pub flow_fudge: f64,
}

impl CalibrationConstants {
    /// Effective support height ceiling for a support strategy.
    pub fn support_height_cap_mm(&self, support_type: SupportType, thin_part: bool) -> f64 {
        match (support_type, thin_part) {
            (SupportType::Tree, true) => self.thin_tree_support_height_cap_mm,
            (SupportType::Tree, false) => self.tree_support_height_cap_mm,
            (SupportType::Normal, _) => self.normal_support_height_cap_mm,
        }
    }

    /// Overhang down-facing cutoff for the part classification.
    pub fn overhang_z_cutoff(&self, thin_part: bool) -> f64 {
        if thin_part {
            self.overhang_z_cutoff_thin
        } else {
            self.overhang_z_cutoff_bulk
        }
    }
}

impl Default for CalibrationConstants {
    fn default() -> Self {
        Self {
            line_width_mm: 0.42,
            shell_surface_factor: 0.85,
            thin_min_dim_mm: 2.2,

            bottom_face_z_cutoff: -0.5,
            overhang_z_cutoff_bulk: -0.15,
            overhang_z_cutoff_thin: -0.45,

            support_min_overhang_area_mm2: 80.0,
            support_min_avg_height_mm: 2.0,
            support_height_scale: 0.25,
            support_volume_cap_ratio: 0.15,

            thin_tree_support_height_cap_mm: 6.0,
            tree_support_height_cap_mm: 15.0,
            normal_support_height_cap_mm: 25.0,

            flow_fudge: 1.04,
        }
    }
}
