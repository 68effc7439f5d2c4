//! Advisory strings generated from a ranked portfolio.

use crate::formatting::format_currency;
use crate::roi::RoiCalculation;

const QUICK_WIN_ROI: f64 = 100.0;
const QUICK_WIN_DAYS: u32 = 30;
const HIGH_IMPACT_SAVINGS: f64 = 50_000.0;
const PHASED_ROLLOUT_MIN_ITEMS: usize = 5;

pub fn is_quick_win(calc: &RoiCalculation) -> bool {
    calc.roi_percentage > QUICK_WIN_ROI && calc.time_to_implement_days <= QUICK_WIN_DAYS
}

pub fn is_high_impact(calc: &RoiCalculation) -> bool {
    calc.annual_savings > HIGH_IMPACT_SAVINGS
}

pub fn generate_recommendations(calculations: &[RoiCalculation]) -> Vec<String> {
    let mut recommendations = Vec::new();

    let (quick_wins, quick_savings) = tally(calculations, is_quick_win);
    if quick_wins > 0 {
        recommendations.push(format!(
            "Start with {quick_wins} quick wins that can deliver {} in annual savings within 30 days",
            format_currency(quick_savings)
        ));
    }

    let (high_impact, high_savings) = tally(calculations, is_high_impact);
    if high_impact > 0 {
        recommendations.push(format!(
            "Focus on {high_impact} high-impact projects with combined savings of {} annually",
            format_currency(high_savings)
        ));
    }

    if calculations.len() > PHASED_ROLLOUT_MIN_ITEMS {
        recommendations.push(
            "Implement improvements in phases to manage change and demonstrate value incrementally"
                .to_string(),
        );
    }

    recommendations
}

fn tally(calculations: &[RoiCalculation], keep: fn(&RoiCalculation) -> bool) -> (usize, f64) {
    calculations
        .iter()
        .filter(|c| keep(c))
        .fold((0, 0.0), |(count, savings), c| (count + 1, savings + c.annual_savings))
}
