//! Pricing configuration
//!
//! Business-side rates, separate from the machine calibration: what a
//! gram of filament and an hour of printer time are billed at, plus the
//! flat prep overheads a customer pays once per quoted item.

use serde::{Deserialize, Serialize};

/// Rates and overheads used to turn weight/time into a price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Billed rate per gram of quoted filament
    pub rate_per_gram: f64,
    /// Billed rate per hour of quoted printer time
    pub rate_per_hour: f64,
    /// Percentage uplift applied to the subtotal when supports are
    /// required (covers removal labor, not support material)
    pub support_fee_rate: f64,

    /// Flat heat-up and prime allowance added to quoted time, charged
    /// once per item regardless of copy count
    pub heat_and_prime_minutes: f64,
    /// Flat purge/prime filament waste added to quoted weight, charged
    /// once per item regardless of copy count
    pub prime_waste_grams: f64,

    /// Currency prefix for report formatting
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rate_per_gram: 7.0,
            rate_per_hour: 100.0,
            support_fee_rate: 0.2,
            heat_and_prime_minutes: 15.0,
            prime_waste_grams: 4.0,
            currency: "Rs".to_string(),
        }
    }
}

impl PricingConfig {
    /// Format an amount for report output, rounded to whole units.
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{} {:.0}", self.currency, amount)
    }
}
