//! Portfolio aggregation over a set of bottlenecks.
//!
//! Each bottleneck is priced independently with [`calculate_roi`], then the
//! results are ranked by ROI, totalled, turned into recommendations and
//! split into a phased rollout.

pub mod phases;
pub mod recommendations;

use crate::core::{Bottleneck, CompanyMetrics};
use crate::roi::{calculate_roi, roi_and_payback, RoiCalculation};
use serde::{Deserialize, Serialize};

pub use phases::{plan_phases, ImplementationPhase};
pub use recommendations::generate_recommendations;

/// Projects listed individually in a portfolio result.
pub const MAX_LISTED_PROJECTS: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    pub description: String,
    pub annual_savings: f64,
    pub roi_percentage: f64,
    #[serde(with = "crate::core::payback")]
    pub payback_months: f64,
    pub confidence: f64,
}

impl From<&RoiCalculation> for ProjectSummary {
    fn from(calc: &RoiCalculation) -> Self {
        Self {
            description: calc.description.clone(),
            annual_savings: calc.annual_savings,
            roi_percentage: calc.roi_percentage,
            payback_months: calc.payback_period_months,
            confidence: calc.confidence_level,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSummary {
    pub total_current_cost: f64,
    pub total_improved_cost: f64,
    pub total_implementation_cost: f64,
    pub total_annual_savings: f64,
    pub portfolio_roi_percentage: f64,
    #[serde(with = "crate::core::payback")]
    pub portfolio_payback_months: f64,
    pub number_of_improvements: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PortfolioResult {
    pub individual_projects: Vec<ProjectSummary>,
    pub portfolio_summary: PortfolioSummary,
    pub recommendations: Vec<String>,
    pub implementation_phases: Vec<ImplementationPhase>,
}

/// Rank items by ROI, highest first. Ties keep their input order.
pub fn rank_by_roi(calculations: &mut [RoiCalculation]) {
    calculations.sort_by(|a, b| b.roi_percentage.total_cmp(&a.roi_percentage));
}

/// Totals and portfolio-level ROI over a set of evaluations.
///
/// A portfolio with no implementation cost reports zero ROI and zero
/// payback, unlike a single item, which reports infinite payback.
pub fn summarize(calculations: &[RoiCalculation]) -> PortfolioSummary {
    let mut summary = calculations
        .iter()
        .fold(PortfolioSummary::default(), |mut acc, calc| {
            acc.total_current_cost += calc.current_cost;
            acc.total_improved_cost += calc.improved_cost;
            acc.total_implementation_cost += calc.implementation_cost;
            acc.total_annual_savings += calc.annual_savings;
            acc
        });

    let (roi, payback) = if summary.total_implementation_cost == 0.0 {
        (0.0, 0.0)
    } else {
        roi_and_payback(
            summary.total_annual_savings,
            summary.total_implementation_cost,
        )
    };
    summary.portfolio_roi_percentage = roi;
    summary.portfolio_payback_months = payback;
    summary.number_of_improvements = calculations.len();
    summary
}

pub fn calculate_portfolio(bottlenecks: &[Bottleneck], company: &CompanyMetrics) -> PortfolioResult {
    let mut calculations: Vec<RoiCalculation> = bottlenecks
        .iter()
        .map(|bottleneck| calculate_roi(bottleneck, company))
        .collect();
    rank_by_roi(&mut calculations);

    let portfolio_summary = summarize(&calculations);

    tracing::debug!(
        company = %company.company_name,
        items = calculations.len(),
        total_savings = portfolio_summary.total_annual_savings,
        portfolio_roi = portfolio_summary.portfolio_roi_percentage,
        "calculated portfolio"
    );

    PortfolioResult {
        individual_projects: calculations
            .iter()
            .take(MAX_LISTED_PROJECTS)
            .map(ProjectSummary::from)
            .collect(),
        portfolio_summary,
        recommendations: generate_recommendations(&calculations),
        implementation_phases: plan_phases(&calculations),
    }
}
