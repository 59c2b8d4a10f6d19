//! Quote items and batch aggregation
//!
//! A [`QuoteItem`] owns its mesh and caches the pose-independent metrics
//! at construction; the cache is refreshed only when the mesh is
//! replaced. Items are independent, so the batch pass evaluates them in
//! parallel and collects results in insertion order for reproducible
//! report numbering.

use crate::error::EstimateError;
use crate::estimate::{CalcResult, PrintEstimator};
use chrono::{DateTime, Utc};
use printquote_core::profile::PrintProfile;
use printquote_geometry::{measure, MeshMetrics, TriangleMesh};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One uploaded model with its manufacturing settings.
#[derive(Debug, Clone)]
pub struct QuoteItem {
    pub id: Uuid,
    /// Source filename or user-facing label
    pub name: String,
    pub profile: PrintProfile,
    mesh: TriangleMesh,
    metrics: MeshMetrics,
}

impl QuoteItem {
    /// Wrap a loaded mesh, measuring it once. The metrics are
    /// rotation-invariant, so profile and orientation edits never force
    /// a re-measure.
    pub fn new(name: impl Into<String>, mesh: TriangleMesh, profile: PrintProfile) -> Self {
        let metrics = measure(&mesh);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            profile,
            mesh,
            metrics,
        }
    }

    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    pub fn metrics(&self) -> &MeshMetrics {
        &self.metrics
    }

    /// Replace the mesh and refresh the cached metrics.
    pub fn set_mesh(&mut self, mesh: TriangleMesh) {
        self.metrics = measure(&mesh);
        self.mesh = mesh;
    }

    /// Whether this item's mesh can be costed at all.
    pub fn is_usable(&self) -> bool {
        self.metrics.is_usable()
    }
}

/// One successfully quoted batch line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteLine {
    /// 1-based position in the batch, stable across runs
    pub item_no: usize,
    pub item_id: Uuid,
    pub name: String,
    pub result: CalcResult,
}

/// An item excluded from costing, with the reason surfaced to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedItem {
    pub item_no: usize,
    pub item_id: Uuid,
    pub name: String,
    pub reason: String,
}

/// The aggregated result of a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchQuote {
    pub created_at: DateTime<Utc>,
    /// Quoted lines in input insertion order
    pub lines: Vec<QuoteLine>,
    /// Items excluded from the totals
    pub skipped: Vec<SkippedItem>,
    /// Sum of all quoted line totals
    pub total: f64,
}

/// An ordered collection of quote items. Owns no geometry beyond its
/// items; insertion order drives report numbering.
#[derive(Debug, Clone, Default)]
pub struct QuoteBatch {
    items: Vec<QuoteItem>,
}

impl QuoteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, returning its id.
    pub fn add_item(&mut self, item: QuoteItem) -> Uuid {
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Remove an item by id, preserving the order of the rest.
    pub fn remove_item(&mut self, id: Uuid) -> Option<QuoteItem> {
        let pos = self.items.iter().position(|it| it.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn get_item_mut(&mut self, id: Uuid) -> Option<&mut QuoteItem> {
        self.items.iter_mut().find(|it| it.id == id)
    }

    pub fn items(&self) -> &[QuoteItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Run the estimator over every item and aggregate the totals.
    ///
    /// Items are independent, so the per-item work runs in parallel;
    /// results are collected back in insertion order. Items with an
    /// unusable mesh are excluded from the totals and reported in
    /// `skipped`.
    pub fn aggregate(&self, estimator: &PrintEstimator) -> BatchQuote {
        let outcomes: Vec<Result<CalcResult, EstimateError>> = self
            .items
            .par_iter()
            .map(|item| estimator.estimate(item.mesh(), item.metrics(), &item.profile))
            .collect();

        let mut lines = Vec::new();
        let mut skipped = Vec::new();
        let mut total = 0.0;

        for (idx, (item, outcome)) in self.items.iter().zip(outcomes).enumerate() {
            let item_no = idx + 1;
            match outcome {
                Ok(result) => {
                    total += result.total;
                    lines.push(QuoteLine {
                        item_no,
                        item_id: item.id,
                        name: item.name.clone(),
                        result,
                    });
                }
                Err(err) => {
                    tracing::warn!(item = %item.name, %err, "item excluded from batch");
                    skipped.push(SkippedItem {
                        item_no,
                        item_id: item.id,
                        name: item.name.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        BatchQuote {
            created_at: Utc::now(),
            lines,
            skipped,
            total,
        }
    }
}
