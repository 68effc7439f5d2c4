//! JSON-only subcommands exposing the individual calculators.

use crate::benchmark::benchmark;
use crate::impact::BottleneckImpact;
use crate::io::{read_analysis_input, JsonWriter};
use crate::portfolio::calculate_portfolio;
use crate::profile::analyze_business_metrics;
use crate::validation::AnalysisInput;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Computation {
    Portfolio,
    Benchmark,
    Profile,
    Annualize,
}

impl Computation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Computation::Portfolio => "portfolio",
            Computation::Benchmark => "benchmark",
            Computation::Profile => "profile",
            Computation::Annualize => "annualize",
        }
    }
}

pub fn run_computation(kind: Computation, input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let analysis = read_analysis_input(&input)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    tracing::debug!(computation = kind.as_str(), "running");

    match kind {
        Computation::Portfolio => emit(
            &calculate_portfolio(&analysis.bottlenecks, &analysis.company),
            output.as_deref(),
        ),
        Computation::Benchmark => emit(&benchmark(&analysis.company), output.as_deref()),
        Computation::Profile => emit(
            &analyze_business_metrics(&analysis.company),
            output.as_deref(),
        ),
        Computation::Annualize => emit(&annualized(&analysis), output.as_deref()),
    }
}

fn annualized(analysis: &AnalysisInput) -> Vec<BottleneckImpact> {
    analysis
        .bottlenecks
        .iter()
        .map(BottleneckImpact::from_bottleneck)
        .collect()
}

fn emit<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let destination = super::open_output(output)?;
    JsonWriter::new(destination)
        .write_value(value)
        .context("Failed to write JSON output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bottleneck, CompanyMetrics};
    use tempfile::TempDir;

    #[test]
    fn test_annualized_preserves_input_order() {
        let analysis = AnalysisInput::new(
            CompanyMetrics::new("Acme", "msp", 5, 500_000.0),
            vec![
                Bottleneck::new("small", 1.0, 10.0).with_frequency("monthly"),
                Bottleneck::new("large", 5.0, 1_000.0).with_frequency("daily"),
            ],
        );
        let rows = annualized(&analysis);
        assert_eq!(rows[0].name, "small");
        assert_eq!(rows[1].annual_cost_impact, 250_000.0);
    }

    #[test]
    fn test_writes_portfolio_json_to_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.json");
        let output = dir.path().join("portfolio.json");
        std::fs::write(
            &input,
            r#"{"company":{"company_name":"Acme","industry":"legal","employee_count":10,"annual_revenue":2000000},
               "bottlenecks":[{"name":"Intake","time_impact_hours":4,"cost_impact":300,"frequency":"weekly"}]}"#,
        )
        .unwrap();

        run_computation(Computation::Portfolio, input, Some(output.clone())).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value["portfolio_summary"]["number_of_improvements"], 1);
    }
}
