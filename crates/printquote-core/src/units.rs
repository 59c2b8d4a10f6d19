//! Unit conversion and numeric guard utilities
//!
//! All geometry is millimeter-based; weights are grams, densities g/cm³.
//! The clamping helpers implement the "never reject, always coerce"
//! policy for user-supplied profile values: non-finite input falls back
//! to a documented default, out-of-range input is clamped into bounds.

/// Cubic millimeters per cubic centimeter.
pub const MM3_PER_CM3: f64 = 1000.0;

/// Convert an extrusion volume in mm³ to grams for a given density in g/cm³.
pub fn volume_to_grams(volume_mm3: f64, density_g_cm3: f64) -> f64 {
    (volume_mm3 / MM3_PER_CM3) * density_g_cm3
}

/// Convert seconds to fractional hours.
pub fn seconds_to_hours(seconds: f64) -> f64 {
    seconds / 3600.0
}

/// Convert minutes to seconds.
pub fn minutes_to_seconds(minutes: f64) -> f64 {
    minutes * 60.0
}

/// Clamp a float into `[min, max]`, substituting `fallback` for
/// non-finite input before clamping.
pub fn clamp_f64(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    let v = if value.is_finite() { value } else { fallback };
    v.clamp(min, max)
}

/// Clamp an integer into `[min, max]`.
pub fn clamp_u32(value: u32, min: u32, max: u32) -> u32 {
    value.clamp(min, max)
}

/// Replace a non-finite or negative intermediate with zero.
///
/// Used at every division/accumulation seam in the estimator so a bad
/// mesh or a zero flow rate degrades to a zero term instead of
/// poisoning the whole breakdown.
pub fn zero_if_unusable(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// Format a duration in seconds as `"Hh MMm"` for report output.
pub fn format_duration(seconds: f64) -> String {
    let total_min = (seconds / 60.0).round() as i64;
    let hours = total_min / 60;
    let minutes = total_min % 60;
    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_to_grams() {
        // 1000 mm³ of PLA (1.24 g/cm³) weighs 1.24 g
        assert!((volume_to_grams(1000.0, 1.24) - 1.24).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_f64_bounds() {
        assert_eq!(clamp_f64(150.0, 0.0, 100.0, 10.0), 100.0);
        assert_eq!(clamp_f64(-5.0, 0.0, 100.0, 10.0), 0.0);
        assert_eq!(clamp_f64(42.0, 0.0, 100.0, 10.0), 42.0);
    }

    #[test]
    fn test_clamp_f64_non_finite_uses_fallback() {
        assert_eq!(clamp_f64(f64::NAN, 0.0, 100.0, 10.0), 10.0);
        assert_eq!(clamp_f64(f64::INFINITY, 0.0, 100.0, 10.0), 10.0);
    }

    #[test]
    fn test_zero_if_unusable() {
        assert_eq!(zero_if_unusable(5.0), 5.0);
        assert_eq!(zero_if_unusable(-1.0), 0.0);
        assert_eq!(zero_if_unusable(f64::NAN), 0.0);
        assert_eq!(zero_if_unusable(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(90.0 * 60.0), "1h 30m");
        assert_eq!(format_duration(12.0 * 60.0), "12m");
    }
}
