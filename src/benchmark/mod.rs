//! Industry benchmarking.
//!
//! Rates a company's revenue per employee against its industry's reference
//! value and, for companies rated below average, estimates the revenue gap.

pub mod table;

pub use table::{lookup, IndustryBenchmark};

use crate::core::CompanyMetrics;
use crate::formatting::format_currency;
use serde::{Deserialize, Serialize};

const RATING_BAND_PERCENT: f64 = 20.0;

/// Relative standing against the industry reference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceRating {
    #[serde(rename = "Above Average")]
    AboveAverage,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
}

impl PerformanceRating {
    /// Rating for a percentage difference from the benchmark.
    /// The bands are (20, inf), (-20, 20] and (-inf, -20].
    pub fn from_difference(difference_percentage: f64) -> Self {
        if difference_percentage > RATING_BAND_PERCENT {
            PerformanceRating::AboveAverage
        } else if difference_percentage > -RATING_BAND_PERCENT {
            PerformanceRating::Average
        } else {
            PerformanceRating::BelowAverage
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceRating::AboveAverage => "Above Average",
            PerformanceRating::Average => "Average",
            PerformanceRating::BelowAverage => "Below Average",
        }
    }
}

impl std::fmt::Display for PerformanceRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueComparison {
    pub company: f64,
    pub industry_average: f64,
    pub difference_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub revenue_per_employee: RevenueComparison,
    pub estimated_billable_percentage: f64,
    pub estimated_overhead_percentage: f64,
    pub industry_hourly_rate: f64,
    pub performance_rating: PerformanceRating,
    /// Extra annual revenue from closing the gap. Zero unless below average.
    pub improvement_potential: f64,
    pub improvement_message: String,
}

/// Percentage difference of `value` from `reference`, 0 when the reference is 0.
pub fn difference_percentage(value: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        0.0
    } else {
        (value - reference) / reference * 100.0
    }
}

/// Compare a company against its industry's reference figures.
pub fn benchmark(company: &CompanyMetrics) -> BenchmarkResult {
    let reference = lookup(&company.industry);
    let revenue_per_employee = company.revenue_per_employee();
    let difference = difference_percentage(revenue_per_employee, reference.revenue_per_employee);
    let performance_rating = PerformanceRating::from_difference(difference);

    let (improvement_potential, improvement_message) = match performance_rating {
        PerformanceRating::BelowAverage => {
            let gap = reference.revenue_per_employee - revenue_per_employee;
            let potential = gap * f64::from(company.employee_count);
            (
                potential,
                format!(
                    "Reaching industry average could add {} in annual revenue",
                    format_currency(potential)
                ),
            )
        }
        _ => (
            0.0,
            "Already performing at or above industry average".to_string(),
        ),
    };

    tracing::debug!(
        industry = %company.industry,
        revenue_per_employee,
        difference,
        rating = %performance_rating,
        "benchmarked company"
    );

    BenchmarkResult {
        revenue_per_employee: RevenueComparison {
            company: revenue_per_employee,
            industry_average: reference.revenue_per_employee,
            difference_percentage: difference,
        },
        estimated_billable_percentage: reference.billable_hours_percentage,
        estimated_overhead_percentage: reference.admin_overhead_percentage,
        industry_hourly_rate: reference.typical_hourly_rate,
        performance_rating,
        improvement_potential,
        improvement_message,
    }
}
