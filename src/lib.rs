//! # PrintQuote
//!
//! A quoting engine for FDM 3D printing. Takes an already-decoded
//! triangle mesh plus a manufacturing profile (material, layer height,
//! infill, walls, support policy, orientation, copies) and produces a
//! calibrated estimate of extrusion volume, support volume, print time,
//! weight, and price.
//!
//! ## Architecture
//!
//! PrintQuote is organized as a workspace with multiple crates:
//!
//! 1. **printquote-core** - profile model, units, calibration/pricing tables
//! 2. **printquote-geometry** - mesh metrics, rotation, contact/overhang analysis
//! 3. **printquote-estimator** - cost model, batch aggregation, quote report
//!
//! ## Pipeline
//!
//! ```text
//! TriangleMesh ── measure ──► MeshMetrics ─┐
//!                                          ├─► PrintEstimator ─► CalcResult
//! PrintProfile ── clamp ───► pose analysis ┘
//! ```
//!
//! Everything is pure, synchronous computation; mesh file parsing,
//! rendering, persistence, and notification live outside this crate.

pub use printquote_core::{
    init_standard_library, CalibrationConstants, FilamentLibrary, FilamentProperties,
    InfillPattern, LayerHeight, MaterialId, PricingConfig, PrintProfile, Rotation, SupportType,
};

pub use printquote_geometry::{
    analyze_pose, measure, rotated, Aabb, MeshError, MeshMetrics, MeshResult, OverhangStats,
    PoseAnalysis, TriangleMesh,
};

pub use printquote_estimator::{
    BatchQuote, CalcResult, EstimateError, EstimateResult, PrintEstimator, QuoteBatch, QuoteItem,
    QuoteLine, QuoteReport, ReportRow, ReportSection, SkippedItem,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, pretty formatting,
/// and `RUST_LOG` environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
