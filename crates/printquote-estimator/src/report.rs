//! Structured quote report
//!
//! Plain label/value sections, one per quoted item plus a totals
//! section. Downstream renderers (PDF, email, UI) consume this as data;
//! the core knows nothing about presentation.

use crate::batch::BatchQuote;
use printquote_core::data::pricing::PricingConfig;
use printquote_core::units::format_duration;
use serde::{Deserialize, Serialize};

/// One label/value row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

impl ReportRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub rows: Vec<ReportRow>,
}

/// A complete, render-ready quote summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteReport {
    pub title: String,
    pub sections: Vec<ReportSection>,
}

impl QuoteReport {
    /// Build the standard per-item + totals summary from a batch run.
    pub fn from_batch(batch: &BatchQuote, pricing: &PricingConfig) -> QuoteReport {
        let mut sections: Vec<ReportSection> = batch
            .lines
            .iter()
            .map(|line| {
                let c = &line.result;
                let support_type = match c.support_type {
                    Some(ty) => ty.to_string(),
                    None => "None".to_string(),
                };
                let thin = if c.is_thin_part {
                    format!("Yes (min dim {:.2}mm)", c.min_dimension_mm)
                } else {
                    format!("No (min dim {:.2}mm)", c.min_dimension_mm)
                };
                ReportSection {
                    title: format!("Item {} — {}", line.item_no, line.name),
                    rows: vec![
                        ReportRow::new("Material", c.material.to_string()),
                        ReportRow::new("Layer height (mm)", c.layer_height.to_string()),
                        ReportRow::new("Infill (%)", format!("{}", c.infill_percent)),
                        ReportRow::new("Wall loops", format!("{}", c.wall_loops)),
                        ReportRow::new("Bottom layers", format!("{}", c.bottom_layers)),
                        ReportRow::new("Infill pattern", c.infill_pattern.to_string()),
                        ReportRow::new(
                            "Support enabled",
                            if c.support_enabled { "Yes" } else { "No" },
                        ),
                        ReportRow::new("Support type", support_type),
                        ReportRow::new(
                            "Support threshold angle",
                            format!("{}°", c.support_angle_deg),
                        ),
                        ReportRow::new(
                            "Support required (detected)",
                            if c.support_required { "Yes" } else { "No" },
                        ),
                        ReportRow::new("Copies", format!("{}", c.copies)),
                        ReportRow::new("Rotation (deg)", c.rotation.to_string()),
                        ReportRow::new("Thin part mode", thin),
                        ReportRow::new(
                            "Model volume (one) (mm³)",
                            format!("{:.2}", c.model_volume_mm3),
                        ),
                        ReportRow::new(
                            "Est. print vol (one) (mm³)",
                            format!("{:.2}", c.print_volume_mm3),
                        ),
                        ReportRow::new(
                            "Est. support vol (one) (mm³)",
                            format!("{:.2}", c.support_volume_mm3),
                        ),
                        ReportRow::new(
                            "Overhang area (mm²)",
                            format!("{:.2}", c.overhang_area_mm2),
                        ),
                        ReportRow::new(
                            "Avg support height used (mm)",
                            format!("{:.2}", c.effective_support_height_mm),
                        ),
                        ReportRow::new("Estimated weight (g)", format!("{:.2}", c.display_grams)),
                        ReportRow::new("Estimated time", format_duration(c.display_time_s)),
                        ReportRow::new("Quoted weight (g)", format!("{:.2}", c.quoted_grams)),
                        ReportRow::new("Quoted time", format_duration(c.quoted_time_s)),
                        ReportRow::new("Material cost", pricing.format_amount(c.material_cost)),
                        ReportRow::new("Time cost", pricing.format_amount(c.time_cost)),
                        ReportRow::new("Subtotal", pricing.format_amount(c.subtotal)),
                        ReportRow::new(
                            format!("Support fee ({:.0}%)", c.support_fee_rate * 100.0),
                            pricing.format_amount(c.support_fee),
                        ),
                        ReportRow::new("Item total", pricing.format_amount(c.total)),
                    ],
                }
            })
            .collect();

        if !batch.skipped.is_empty() {
            sections.push(ReportSection {
                title: "Excluded items".to_string(),
                rows: batch
                    .skipped
                    .iter()
                    .map(|s| {
                        ReportRow::new(format!("Item {} — {}", s.item_no, s.name), s.reason.clone())
                    })
                    .collect(),
            });
        }

        sections.push(ReportSection {
            title: "Totals".to_string(),
            rows: vec![ReportRow::new("Final Total", pricing.format_amount(batch.total))],
        });

        QuoteReport {
            title: "3D Printing — Quote Summary".to_string(),
            sections,
        }
    }
}
