//! Qualitative business profile derived from company metrics.

use crate::benchmark::lookup;
use crate::core::CompanyMetrics;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BusinessProfile {
    pub company_size_category: String,
    pub revenue_per_employee: f64,
    pub industry_comparison: String,
    pub automation_readiness: String,
    pub growth_potential: String,
}

pub fn analyze_business_metrics(company: &CompanyMetrics) -> BusinessProfile {
    BusinessProfile {
        company_size_category: size_category(company.employee_count).to_string(),
        revenue_per_employee: company.revenue_per_employee(),
        industry_comparison: industry_comparison(company).to_string(),
        automation_readiness: automation_readiness(company).to_string(),
        growth_potential: growth_potential(company.employee_count).to_string(),
    }
}

pub fn size_category(employee_count: u32) -> &'static str {
    match employee_count {
        0..=19 => "Micro",
        20..=49 => "Small",
        50..=249 => "Medium",
        250..=499 => "Mid-Market",
        _ => "Enterprise",
    }
}

pub fn industry_comparison(company: &CompanyMetrics) -> &'static str {
    let reference = lookup(&company.industry).revenue_per_employee;
    let revenue_per_employee = company.revenue_per_employee();
    if revenue_per_employee > reference * 1.2 {
        "Outperforming industry"
    } else if revenue_per_employee > reference * 0.8 {
        "Industry average"
    } else {
        "Below industry average"
    }
}

/// Readiness score out of 6: two points each for headcount, revenue and
/// technology stack breadth.
pub fn readiness_score(company: &CompanyMetrics) -> u8 {
    let size = match company.employee_count {
        n if n >= 20 => 2,
        n if n >= 10 => 1,
        _ => 0,
    };
    let revenue = match company.annual_revenue {
        r if r >= 5_000_000.0 => 2,
        r if r >= 1_000_000.0 => 1,
        _ => 0,
    };
    let tools = match company.technology_stack.len() {
        n if n >= 3 => 2,
        n if n >= 1 => 1,
        _ => 0,
    };
    size + revenue + tools
}

pub fn automation_readiness(company: &CompanyMetrics) -> &'static str {
    match readiness_score(company) {
        s if s >= 5 => "High - Ready for comprehensive automation",
        s if s >= 3 => "Medium - Ready for targeted automation",
        _ => "Low - Start with basic automation",
    }
}

pub fn growth_potential(employee_count: u32) -> &'static str {
    if employee_count < 50 {
        "High - Can scale 2-3x with same headcount"
    } else if employee_count < 200 {
        "Medium - Can scale 1.5-2x with same headcount"
    } else {
        "Moderate - Can improve efficiency 20-50%"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_categories() {
        assert_eq!(size_category(0), "Micro");
        assert_eq!(size_category(19), "Micro");
        assert_eq!(size_category(20), "Small");
        assert_eq!(size_category(249), "Medium");
        assert_eq!(size_category(250), "Mid-Market");
        assert_eq!(size_category(500), "Enterprise");
    }

    #[test]
    fn test_legal_firm_profile() {
        let company = CompanyMetrics::new("Smith Law Firm", "legal", 45, 8_500_000.0)
            .with_technology(["Clio", "Outlook", "QuickBooks"]);
        let profile = analyze_business_metrics(&company);
        assert_eq!(profile.company_size_category, "Small");
        assert_eq!(profile.industry_comparison, "Industry average");
        assert_eq!(profile.automation_readiness, "High - Ready for comprehensive automation");
        assert_eq!(profile.growth_potential, "High - Can scale 2-3x with same headcount");
    }

    #[test]
    fn test_readiness_without_tools() {
        let company = CompanyMetrics::new("Acme", "msp", 12, 1_500_000.0);
        assert_eq!(readiness_score(&company), 2);
        assert_eq!(automation_readiness(&company), "Low - Start with basic automation");
    }

    #[test]
    fn test_industry_comparison_bands() {
        let above = CompanyMetrics::new("A", "default", 1, 120_001.0);
        let average = CompanyMetrics::new("B", "default", 1, 120_000.0);
        let below = CompanyMetrics::new("C", "default", 1, 80_000.0);
        assert_eq!(industry_comparison(&above), "Outperforming industry");
        assert_eq!(industry_comparison(&average), "Industry average");
        assert_eq!(industry_comparison(&below), "Below industry average");
    }

    #[test]
    fn test_growth_potential() {
        assert_eq!(growth_potential(150), "Medium - Can scale 1.5-2x with same headcount");
        assert_eq!(growth_potential(200), "Moderate - Can improve efficiency 20-50%");
    }
}
