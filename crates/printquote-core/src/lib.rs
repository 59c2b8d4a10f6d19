//! # PrintQuote Core
//!
//! Core types and utilities shared by the PrintQuote estimation pipeline.
//! Provides the print profile model, numeric clamping and unit helpers,
//! and the calibrated lookup tables (filaments, layer heights, infill
//! patterns, support strategies, pricing).

pub mod data;
pub mod profile;
pub mod units;

pub use data::calibration::{
    CalibrationConstants, InfillPattern, LayerHeight, SupportType,
};
pub use data::filaments::{
    init_standard_library, FilamentLibrary, FilamentProperties, MaterialId,
};
pub use data::pricing::PricingConfig;
pub use profile::{PrintProfile, Rotation};
