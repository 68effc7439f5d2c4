//! Industry reference figures.
//!
//! Process-wide constant data. Lookups are case-insensitive and anything
//! not in the table resolves to the `default` entry.

use serde::{Deserialize, Serialize};

/// Reference metrics for one industry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndustryBenchmark {
    pub revenue_per_employee: f64,
    /// Share of hours billed to clients, 0-1.
    pub billable_hours_percentage: f64,
    /// Share of effort spent on administration, 0-1.
    pub admin_overhead_percentage: f64,
    /// Currency per hour.
    pub typical_hourly_rate: f64,
}

pub const DEFAULT_INDUSTRY: &str = "default";

static BENCHMARKS: &[(&str, IndustryBenchmark)] = &[
    (
        "legal",
        IndustryBenchmark {
            revenue_per_employee: 200_000.0,
            billable_hours_percentage: 0.65,
            admin_overhead_percentage: 0.35,
            typical_hourly_rate: 300.0,
        },
    ),
    (
        "accounting",
        IndustryBenchmark {
            revenue_per_employee: 150_000.0,
            billable_hours_percentage: 0.70,
            admin_overhead_percentage: 0.30,
            typical_hourly_rate: 200.0,
        },
    ),
    (
        "consulting",
        IndustryBenchmark {
            revenue_per_employee: 175_000.0,
            billable_hours_percentage: 0.75,
            admin_overhead_percentage: 0.25,
            typical_hourly_rate: 250.0,
        },
    ),
    (
        "msp",
        IndustryBenchmark {
            revenue_per_employee: 125_000.0,
            billable_hours_percentage: 0.60,
            admin_overhead_percentage: 0.40,
            typical_hourly_rate: 150.0,
        },
    ),
    (
        DEFAULT_INDUSTRY,
        IndustryBenchmark {
            revenue_per_employee: 100_000.0,
            billable_hours_percentage: 0.50,
            admin_overhead_percentage: 0.50,
            typical_hourly_rate: 75.0,
        },
    ),
];

/// Find the benchmark for an industry, falling back to `default`.
pub fn lookup(industry: &str) -> &'static IndustryBenchmark {
    let key = industry.trim().to_lowercase();
    find(&key)
        .or_else(|| find(DEFAULT_INDUSTRY))
        .unwrap_or(&BENCHMARKS[BENCHMARKS.len() - 1].1)
}

fn find(key: &str) -> Option<&'static IndustryBenchmark> {
    BENCHMARKS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, benchmark)| benchmark)
}
