//! Executive summary composed from portfolio and benchmark results.

use crate::benchmark::{benchmark, BenchmarkResult, PerformanceRating};
use crate::core::{Bottleneck, CompanyMetrics};
use crate::formatting::format_currency;
use crate::impact::total_annual_impact;
use crate::portfolio::{calculate_portfolio, PortfolioSummary, ProjectSummary};
use serde::{Deserialize, Serialize};

const TOP_OPPORTUNITIES: usize = 3;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompanySnapshot {
    pub name: String,
    pub employees: u32,
    pub annual_revenue: f64,
    pub industry: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct KeyFindings {
    pub total_inefficiency_hours_annual: f64,
    pub total_inefficiency_cost_annual: f64,
    pub number_of_bottlenecks: usize,
    /// Annual savings across the whole portfolio.
    pub automation_opportunity: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoiHighlights {
    pub total_investment_required: f64,
    pub annual_savings_potential: f64,
    pub roi_percentage: f64,
    #[serde(with = "crate::core::payback")]
    pub payback_period_months: f64,
}

impl From<&PortfolioSummary> for RoiHighlights {
    fn from(summary: &PortfolioSummary) -> Self {
        Self {
            total_investment_required: summary.total_implementation_cost,
            annual_savings_potential: summary.total_annual_savings,
            roi_percentage: summary.portfolio_roi_percentage,
            payback_period_months: summary.portfolio_payback_months,
        }
    }
}

/// Strength of the overall recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    StronglyRecommended,
    Recommended,
    WorthConsidering,
}

impl RecommendationTier {
    /// Tier for a portfolio ROI percentage and payback in months.
    pub fn classify(roi_percentage: f64, payback_months: f64) -> Self {
        if roi_percentage > 200.0 && payback_months < 6.0 {
            RecommendationTier::StronglyRecommended
        } else if roi_percentage > 100.0 && payback_months < 12.0 {
            RecommendationTier::Recommended
        } else {
            RecommendationTier::WorthConsidering
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecommendationTier::StronglyRecommended => "STRONGLY RECOMMENDED",
            RecommendationTier::Recommended => "RECOMMENDED",
            RecommendationTier::WorthConsidering => "WORTH CONSIDERING",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExecutiveSummary {
    pub company_snapshot: CompanySnapshot,
    pub key_findings: KeyFindings,
    pub roi_highlights: RoiHighlights,
    pub industry_comparison: BenchmarkResult,
    pub top_3_opportunities: Vec<ProjectSummary>,
    pub recommendation_tier: RecommendationTier,
    pub executive_recommendation: String,
}

/// Prose recommendation for a tier, with the benchmark gap appended when
/// the company trails its industry.
pub fn executive_recommendation(
    tier: RecommendationTier,
    highlights: &RoiHighlights,
    comparison: &BenchmarkResult,
) -> String {
    let roi = highlights.roi_percentage;
    let payback = highlights.payback_period_months;
    let mut text = match tier {
        RecommendationTier::StronglyRecommended => format!(
            "{}: This AI transformation presents an exceptional opportunity with {roi:.0}% ROI and {payback:.1} month payback. ",
            tier.label()
        ),
        RecommendationTier::Recommended => format!(
            "{}: This initiative offers strong returns with {roi:.0}% ROI and {payback:.1} month payback. ",
            tier.label()
        ),
        RecommendationTier::WorthConsidering => format!(
            "{}: While returns are moderate, the strategic benefits of automation are significant. ",
            tier.label()
        ),
    };

    if comparison.performance_rating == PerformanceRating::BelowAverage {
        text.push_str(&format!(
            "Additionally, reaching industry benchmarks could add {} in annual revenue.",
            format_currency(comparison.improvement_potential)
        ));
    }

    text
}

pub fn executive_summary(company: &CompanyMetrics, bottlenecks: &[Bottleneck]) -> ExecutiveSummary {
    let portfolio = calculate_portfolio(bottlenecks, company);
    let industry_comparison = benchmark(company);
    let (total_hours, total_cost) = total_annual_impact(bottlenecks);

    let roi_highlights = RoiHighlights::from(&portfolio.portfolio_summary);
    let recommendation_tier = RecommendationTier::classify(
        roi_highlights.roi_percentage,
        roi_highlights.payback_period_months,
    );
    let executive_recommendation =
        executive_recommendation(recommendation_tier, &roi_highlights, &industry_comparison);

    tracing::info!(
        company = %company.company_name,
        bottlenecks = bottlenecks.len(),
        tier = recommendation_tier.label(),
        "generated executive summary"
    );

    ExecutiveSummary {
        company_snapshot: CompanySnapshot {
            name: company.company_name.clone(),
            employees: company.employee_count,
            annual_revenue: company.annual_revenue,
            industry: company.industry.clone(),
        },
        key_findings: KeyFindings {
            total_inefficiency_hours_annual: total_hours,
            total_inefficiency_cost_annual: total_cost,
            number_of_bottlenecks: bottlenecks.len(),
            automation_opportunity: portfolio.portfolio_summary.total_annual_savings,
        },
        roi_highlights,
        industry_comparison,
        top_3_opportunities: portfolio
            .individual_projects
            .into_iter()
            .take(TOP_OPPORTUNITIES)
            .collect(),
        recommendation_tier,
        executive_recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlights(roi: f64, payback: f64) -> RoiHighlights {
        RoiHighlights {
            total_investment_required: 10_000.0,
            annual_savings_potential: 0.0,
            roi_percentage: roi,
            payback_period_months: payback,
        }
    }

    #[test]
    fn test_tier_boundaries() {
        use RecommendationTier::*;
        assert_eq!(RecommendationTier::classify(250.0, 3.0), StronglyRecommended);
        assert_eq!(RecommendationTier::classify(250.0, 6.0), Recommended);
        assert_eq!(RecommendationTier::classify(200.0, 3.0), Recommended);
        assert_eq!(RecommendationTier::classify(150.0, 12.0), WorthConsidering);
        assert_eq!(RecommendationTier::classify(100.0, 1.0), WorthConsidering);
        assert_eq!(RecommendationTier::classify(0.0, f64::INFINITY), WorthConsidering);
    }

    #[test]
    fn test_strong_recommendation_quotes_figures() {
        let comparison = benchmark(&CompanyMetrics::new("Even", "legal", 10, 2_000_000.0));
        let text = executive_recommendation(
            RecommendationTier::StronglyRecommended,
            &highlights(312.4, 2.96),
            &comparison,
        );
        assert_eq!(
            text,
            "STRONGLY RECOMMENDED: This AI transformation presents an exceptional opportunity with 312% ROI and 3.0 month payback. "
        );
    }

    #[test]
    fn test_below_average_appends_revenue_gap() {
        let comparison = benchmark(&CompanyMetrics::new("Small", "retail", 20, 1_000_000.0));
        let text = executive_recommendation(
            RecommendationTier::WorthConsidering,
            &highlights(0.0, 0.0),
            &comparison,
        );
        assert!(text.starts_with("WORTH CONSIDERING: "));
        assert!(text.ends_with(
            "Additionally, reaching industry benchmarks could add $1,000,000 in annual revenue."
        ));
    }

    #[test]
    fn test_findings_use_annualized_impact() {
        let company = CompanyMetrics::new("Acme", "legal", 45, 8_500_000.0);
        let bottlenecks = vec![
            Bottleneck::new("Intake", 20.0, 3000.0).with_frequency("weekly"),
            Bottleneck::new("Filing", 1.0, 100.0).with_frequency("daily"),
        ];
        let summary = executive_summary(&company, &bottlenecks);
        assert_eq!(summary.key_findings.total_inefficiency_hours_annual, 1290.0);
        assert_eq!(summary.key_findings.total_inefficiency_cost_annual, 181_000.0);
        assert_eq!(summary.key_findings.number_of_bottlenecks, 2);
    }

    #[test]
    fn test_top_three_are_highest_roi() {
        let company = CompanyMetrics::new("Acme", "legal", 45, 8_500_000.0);
        let bottlenecks: Vec<Bottleneck> = (1..=5)
            .map(|i| Bottleneck::new(format!("Task {i}"), f64::from(i), 1.0).with_frequency("daily"))
            .collect();
        let summary = executive_summary(&company, &bottlenecks);
        let names: Vec<&str> = summary
            .top_3_opportunities
            .iter()
            .map(|p| p.description.as_str())
            .collect();
        assert_eq!(names, vec!["Automate Task 5", "Automate Task 4", "Automate Task 3"]);
    }
}
