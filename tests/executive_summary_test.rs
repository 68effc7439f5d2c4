//! End-to-end executive summaries through the public API.

use bizdoctor::{
    executive_summary, Bottleneck, CompanyMetrics, PerformanceRating, RecommendationTier,
};
use pretty_assertions::assert_eq;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6 * b.abs().max(1.0)
}

fn client_intake() -> Bottleneck {
    Bottleneck::new("Manual client intake", 20.0, 3000.0)
        .with_frequency("weekly")
        .with_automation_potential(0.8)
        .with_complexity("medium")
}

#[test]
fn test_legal_firm_summary() {
    let company = CompanyMetrics::new("Smith Law Firm", "legal", 45, 8_500_000.0);
    let summary = executive_summary(&company, &[client_intake()]);

    assert_eq!(summary.company_snapshot.name, "Smith Law Firm");
    assert_eq!(summary.company_snapshot.employees, 45);

    assert_eq!(summary.key_findings.total_inefficiency_hours_annual, 1040.0);
    assert_eq!(summary.key_findings.total_inefficiency_cost_annual, 156_000.0);
    assert_eq!(summary.key_findings.number_of_bottlenecks, 1);
    assert!(close(summary.key_findings.automation_opportunity, 47_146.666_666));

    assert_eq!(summary.roi_highlights.total_investment_required, 25_000.0);
    assert!(close(summary.roi_highlights.roi_percentage, 88.586_666_6));
    assert!(close(summary.roi_highlights.payback_period_months, 6.363_122));

    assert_eq!(
        summary.industry_comparison.performance_rating,
        PerformanceRating::Average
    );
    assert_eq!(summary.recommendation_tier, RecommendationTier::WorthConsidering);
    assert!(summary
        .executive_recommendation
        .starts_with("WORTH CONSIDERING: While returns are moderate"));
    assert!(!summary.executive_recommendation.contains("Additionally"));

    assert_eq!(summary.top_3_opportunities.len(), 1);
    assert_eq!(
        summary.top_3_opportunities[0].description,
        "Automate Manual client intake"
    );
}

#[test]
fn test_strong_returns_are_strongly_recommended() {
    // 1,000 hours a year at $100 with 80% automation against a $10,000 build.
    let company =
        CompanyMetrics::new("Acme Advisory", "consulting", 10, 1_750_000.0).with_hourly_cost(100.0);
    let bottleneck = Bottleneck::new("Timesheet reconciliation", 4.0, 0.0)
        .with_frequency("daily")
        .with_automation_potential(0.8)
        .with_complexity("low");

    let summary = executive_summary(&company, &[bottleneck]);

    assert!(close(summary.roi_highlights.annual_savings_potential, 80_000.0));
    assert!(close(summary.roi_highlights.roi_percentage, 700.0));
    assert!(close(summary.roi_highlights.payback_period_months, 1.5));
    assert_eq!(
        summary.recommendation_tier,
        RecommendationTier::StronglyRecommended
    );
    assert_eq!(
        summary.executive_recommendation,
        "STRONGLY RECOMMENDED: This AI transformation presents an exceptional opportunity with 700% ROI and 1.5 month payback. "
    );
}

#[test]
fn test_below_average_company_gets_revenue_gap_appended() {
    let company = CompanyMetrics::new("Small Shop", "retail", 20, 1_000_000.0);
    let summary = executive_summary(&company, &[client_intake()]);

    assert_eq!(
        summary.industry_comparison.performance_rating,
        PerformanceRating::BelowAverage
    );
    assert!(summary.executive_recommendation.ends_with(
        "Additionally, reaching industry benchmarks could add $1,000,000 in annual revenue."
    ));
}

#[test]
fn test_top_three_is_capped_and_ranked() {
    let company = CompanyMetrics::new("Smith Law Firm", "legal", 45, 8_500_000.0);
    let bottlenecks: Vec<Bottleneck> = (1..=5)
        .map(|i| {
            Bottleneck::new(format!("Task {i}"), f64::from(i), 0.0)
                .with_frequency("weekly")
                .with_complexity("medium")
        })
        .collect();

    let summary = executive_summary(&company, &bottlenecks);

    let names: Vec<&str> = summary
        .top_3_opportunities
        .iter()
        .map(|p| p.description.as_str())
        .collect();
    assert_eq!(names, vec!["Automate Task 5", "Automate Task 4", "Automate Task 3"]);
    assert_eq!(summary.key_findings.number_of_bottlenecks, 5);
}

#[test]
fn test_no_bottlenecks_yields_empty_summary() {
    let company = CompanyMetrics::new("Quiet Co", "accounting", 12, 1_800_000.0);
    let summary = executive_summary(&company, &[]);

    assert_eq!(summary.key_findings.total_inefficiency_cost_annual, 0.0);
    assert_eq!(summary.roi_highlights.total_investment_required, 0.0);
    assert_eq!(summary.roi_highlights.roi_percentage, 0.0);
    assert_eq!(summary.roi_highlights.payback_period_months, 0.0);
    assert!(summary.top_3_opportunities.is_empty());
    assert_eq!(summary.recommendation_tier, RecommendationTier::WorthConsidering);
}
