//! Per-bottleneck return on investment.

pub mod cost;


use crate::core::{Bottleneck, CompanyMetrics};
use serde::{Deserialize, Serialize};

pub use cost::{hourly_cost, implementation_cost, time_to_implement};

const BASE_CONFIDENCE: f64 = 0.5;
const CONFIDENCE_STEP: f64 = 0.1;

/// Snapshot of one ROI evaluation. Built fresh on every call.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoiCalculation {
    pub description: String,
    pub current_cost: f64,
    pub improved_cost: f64,
    pub implementation_cost: f64,
    pub time_to_implement_days: u32,
    pub annual_savings: f64,
    pub roi_percentage: f64,
    /// `f64::INFINITY` when the item never pays back.
    #[serde(with = "crate::core::payback")]
    pub payback_period_months: f64,
    pub confidence_level: f64,
}

impl RoiCalculation {
    pub fn pays_back(&self) -> bool {
        self.payback_period_months.is_finite()
    }

    /// ROI earned per day of implementation work, used to order phases.
    pub fn roi_per_day(&self) -> f64 {
        self.roi_percentage / f64::from(self.time_to_implement_days.max(1))
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {:.0}% ROI | payback {} | confidence {:.0}%",
            self.description,
            self.roi_percentage,
            crate::core::payback::describe(self.payback_period_months),
            self.confidence_level * 100.0
        )
    }
}

/// ROI percentage and payback months for a savings/investment pair.
///
/// No savings means zero ROI and infinite payback.
pub fn roi_and_payback(annual_savings: f64, implementation_cost: f64) -> (f64, f64) {
    if annual_savings > 0.0 {
        (
            (annual_savings - implementation_cost) / implementation_cost * 100.0,
            implementation_cost / annual_savings * 12.0,
        )
    } else {
        (0.0, f64::INFINITY)
    }
}

/// Confidence in an estimate, from how many of its inputs were supplied.
pub fn confidence(bottleneck: &Bottleneck, company: &CompanyMetrics) -> f64 {
    let present = [
        bottleneck.time_impact_hours != 0.0,
        bottleneck.cost_impact != 0.0,
        bottleneck.has_frequency(),
        company.annual_revenue != 0.0,
        company.employee_count != 0,
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    (BASE_CONFIDENCE + CONFIDENCE_STEP * present as f64).min(1.0)
}

pub fn calculate_roi(bottleneck: &Bottleneck, company: &CompanyMetrics) -> RoiCalculation {
    let rate = hourly_cost(company);
    let current_cost = bottleneck.annual_hours_impact() * rate;
    let improved_cost = current_cost * (1.0 - bottleneck.automation_potential_or_default());
    let annual_savings = current_cost - improved_cost;

    let complexity = bottleneck.complexity();
    let implementation_cost = implementation_cost(&complexity);
    let time_to_implement_days = time_to_implement(&complexity);
    let (roi_percentage, payback_period_months) =
        roi_and_payback(annual_savings, implementation_cost);

    tracing::trace!(
        bottleneck = %bottleneck.name,
        hourly_rate = rate,
        annual_savings,
        roi_percentage,
        "calculated bottleneck ROI"
    );

    RoiCalculation {
        description: format!("Automate {}", bottleneck.name),
        current_cost,
        improved_cost,
        implementation_cost,
        time_to_implement_days,
        annual_savings,
        roi_percentage,
        payback_period_months,
        confidence_level: confidence(bottleneck, company),
    }
}
