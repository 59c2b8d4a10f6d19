//! Calibrated reference data for the estimator
//!
//! Everything in this module is process-wide constant configuration:
//! filament properties, layer-height flow presets, infill pattern time
//! multipliers, support strategy factors, empirical geometry cutoffs,
//! and pricing rates. Tables are built once at startup and treated as
//! immutable by the pipeline.

pub mod calibration;
pub mod filaments;
pub mod pricing;
