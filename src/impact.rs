//! Bottleneck impact calculator.
//!
//! Converts a bottleneck's per-occurrence hours and cost into yearly
//! figures and assigns a default priority tier from the yearly cost.
//! Everything here is a pure function of its input.

use crate::core::{Bottleneck, Frequency, Priority};
use serde::{Deserialize, Serialize};

/// Occurrences per year used when the frequency is missing or unrecognized.
pub const DEFAULT_OCCURRENCES_PER_YEAR: f64 = 12.0;

const CRITICAL_COST_THRESHOLD: f64 = 100_000.0;
const HIGH_COST_THRESHOLD: f64 = 50_000.0;
const MEDIUM_COST_THRESHOLD: f64 = 10_000.0;

/// Yearly occurrence count for a frequency. Daily counts business days.
pub fn occurrences_per_year(frequency: Option<&Frequency>) -> f64 {
    match frequency {
        Some(Frequency::Daily) => 250.0,
        Some(Frequency::Weekly) => 52.0,
        Some(Frequency::Monthly) => 12.0,
        Some(Frequency::Quarterly) => 4.0,
        Some(Frequency::Unrecognized(_)) | None => DEFAULT_OCCURRENCES_PER_YEAR,
    }
}

/// Annualized `(hours, cost)` impact of a bottleneck.
pub fn annualize(bottleneck: &Bottleneck) -> (f64, f64) {
    let occurrences = occurrences_per_year(bottleneck.frequency.as_ref());
    (
        bottleneck.time_impact_hours * occurrences,
        bottleneck.cost_impact * occurrences,
    )
}

/// Priority tier for an annualized cost. Boundaries are strict: exactly
/// 100,000 is `High`, not `Critical`.
pub fn default_priority(annual_cost_impact: f64) -> Priority {
    match annual_cost_impact {
        c if c > CRITICAL_COST_THRESHOLD => Priority::Critical,
        c if c > HIGH_COST_THRESHOLD => Priority::High,
        c if c > MEDIUM_COST_THRESHOLD => Priority::Medium,
        _ => Priority::Low,
    }
}

/// A bottleneck together with its derived yearly figures.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BottleneckImpact {
    pub name: String,
    pub frequency: String,
    pub occurrences_per_year: f64,
    pub annual_hours_impact: f64,
    pub annual_cost_impact: f64,
    pub priority: Priority,
    /// False when the priority was derived rather than supplied.
    pub priority_supplied: bool,
}

impl BottleneckImpact {
    pub fn from_bottleneck(bottleneck: &Bottleneck) -> Self {
        let (annual_hours_impact, annual_cost_impact) = annualize(bottleneck);
        Self {
            name: bottleneck.name.clone(),
            frequency: bottleneck
                .frequency
                .as_ref()
                .map(|f| f.as_str().to_string())
                .unwrap_or_default(),
            occurrences_per_year: occurrences_per_year(bottleneck.frequency.as_ref()),
            annual_hours_impact,
            annual_cost_impact,
            priority: bottleneck
                .priority
                .unwrap_or_else(|| default_priority(annual_cost_impact)),
            priority_supplied: bottleneck.priority.is_some(),
        }
    }
}

/// Sum of annualized `(hours, cost)` over a set of bottlenecks.
pub fn total_annual_impact(bottlenecks: &[Bottleneck]) -> (f64, f64) {
    bottlenecks
        .iter()
        .map(annualize)
        .fold((0.0, 0.0), |(hours, cost), (h, c)| (hours + h, cost + c))
}
