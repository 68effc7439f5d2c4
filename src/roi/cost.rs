//! Cost model inputs: labour rate and implementation pricing.

use crate::benchmark::lookup;
use crate::core::{CompanyMetrics, SolutionComplexity};

/// Share of revenue assumed to be labour cost.
const LABOR_COST_SHARE: f64 = 0.6;
/// Working hours per employee per year.
const WORKING_HOURS_PER_YEAR: f64 = 2000.0;
/// Rate used when revenue and headcount are known but the hour count is zero.
pub const FALLBACK_HOURLY_RATE: f64 = 75.0;

/// Blended hourly labour cost for a company.
///
/// Resolution order: explicit override, then 60% of revenue spread over
/// `employees * 2000` hours, then the industry's typical rate.
pub fn hourly_cost(company: &CompanyMetrics) -> f64 {
    if let Some(rate) = company.average_hourly_cost {
        return rate;
    }

    if company.annual_revenue > 0.0 && company.employee_count > 0 {
        let total_hours = f64::from(company.employee_count) * WORKING_HOURS_PER_YEAR;
        if total_hours > 0.0 {
            return company.annual_revenue * LABOR_COST_SHARE / total_hours;
        }
        return FALLBACK_HOURLY_RATE;
    }

    lookup(&company.industry).typical_hourly_rate
}

/// One-off implementation cost for a complexity class.
pub fn implementation_cost(complexity: &SolutionComplexity) -> f64 {
    match complexity {
        SolutionComplexity::Low => 10_000.0,
        SolutionComplexity::High => 50_000.0,
        SolutionComplexity::Medium | SolutionComplexity::Unrecognized(_) => 25_000.0,
    }
}

/// Calendar days to implement for a complexity class.
pub fn time_to_implement(complexity: &SolutionComplexity) -> u32 {
    match complexity {
        SolutionComplexity::Low => 30,
        SolutionComplexity::High => 90,
        SolutionComplexity::Medium | SolutionComplexity::Unrecognized(_) => 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let company = CompanyMetrics::new("Acme", "legal", 45, 8_500_000.0).with_hourly_cost(90.0);
        assert_eq!(hourly_cost(&company), 90.0);
    }

    #[test]
    fn test_rate_derived_from_revenue() {
        let company = CompanyMetrics::new("Acme", "legal", 45, 8_500_000.0);
        assert!((hourly_cost(&company) - 56.666_666_666).abs() < 1e-6);
    }

    #[test]
    fn test_missing_revenue_uses_industry_rate() {
        assert_eq!(hourly_cost(&CompanyMetrics::new("Acme", "legal", 45, 0.0)), 300.0);
        assert_eq!(hourly_cost(&CompanyMetrics::new("Acme", "MSP", 0, 1_000_000.0)), 150.0);
        assert_eq!(hourly_cost(&CompanyMetrics::new("Acme", "bakery", 0, 0.0)), 75.0);
    }

    #[test]
    fn test_complexity_pricing() {
        assert_eq!(implementation_cost(&SolutionComplexity::Low), 10_000.0);
        assert_eq!(implementation_cost(&SolutionComplexity::High), 50_000.0);
        assert_eq!(
            implementation_cost(&SolutionComplexity::from("extreme")),
            25_000.0
        );
        assert_eq!(time_to_implement(&SolutionComplexity::Low), 30);
        assert_eq!(time_to_implement(&SolutionComplexity::Medium), 60);
        assert_eq!(time_to_implement(&SolutionComplexity::from("?")), 60);
    }
}
