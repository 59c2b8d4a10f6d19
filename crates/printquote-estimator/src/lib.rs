//! # PrintQuote Estimator
//!
//! Turns one item's geometry, pose, and print profile into a full cost
//! breakdown, and aggregates independent items into a batch quote:
//!
//! - [`estimate`] - the calibrated extrusion/support/time/weight/cost model
//! - [`batch`] - quote items, ordered batches, parallel aggregation
//! - [`report`] - structured label/value report for downstream renderers
//!
//! Nothing here is fatal to a batch: unusable meshes are flagged and
//! excluded from totals, malformed profile values are clamped, and
//! non-finite intermediates degrade to documented fallbacks.

pub mod batch;
pub mod error;
pub mod estimate;
pub mod report;

pub use batch::{BatchQuote, QuoteBatch, QuoteItem, QuoteLine, SkippedItem};
pub use error::{EstimateError, EstimateResult};
pub use estimate::{CalcResult, PrintEstimator};
pub use report::{QuoteReport, ReportRow, ReportSection};
