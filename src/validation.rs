//! Input validation boundary.
//!
//! The calculators in this crate are total over well-formed input. This
//! module rejects malformed input before it gets there, reporting every
//! problem at once with a field path such as `bottlenecks[2].cost_impact`.

use crate::core::{Bottleneck, CompanyMetrics};
use crate::effects::{from_errors, run_validation, FieldError, InputValidation};
use serde::{Deserialize, Serialize};

/// A company and the bottlenecks found in it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisInput {
    #[serde(default)]
    pub company: CompanyMetrics,
    #[serde(default)]
    pub bottlenecks: Vec<Bottleneck>,
}

impl AnalysisInput {
    pub fn new(company: CompanyMetrics, bottlenecks: Vec<Bottleneck>) -> Self {
        Self {
            company,
            bottlenecks,
        }
    }

    /// Parse JSON and validate it in one step.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let input: AnalysisInput = serde_json::from_str(json)?;
        run_validation(input.validate())
    }

    pub fn validate(self) -> InputValidation<Self> {
        let mut errors: Vec<FieldError> = company_errors(&self.company)
            .into_iter()
            .map(|e| e.nested("company"))
            .collect();

        for (i, bottleneck) in self.bottlenecks.iter().enumerate() {
            let parent = format!("bottlenecks[{i}]");
            errors.extend(bottleneck_errors(bottleneck).into_iter().map(|e| e.nested(&parent)));
        }

        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "analysis input rejected");
        }
        from_errors(self, errors)
    }
}

/// Problems with a company record. Empty when valid.
pub fn company_errors(company: &CompanyMetrics) -> Vec<FieldError> {
    let mut errors = Vec::new();
    errors.extend(check_amount("annual_revenue", company.annual_revenue));
    if let Some(rate) = company.average_hourly_cost {
        errors.extend(check_amount("average_hourly_cost", rate));
    }
    errors
}

/// Problems with a bottleneck record. Empty when valid.
pub fn bottleneck_errors(bottleneck: &Bottleneck) -> Vec<FieldError> {
    let mut errors = Vec::new();
    errors.extend(check_required("name", &bottleneck.name));
    errors.extend(check_amount("time_impact_hours", bottleneck.time_impact_hours));
    errors.extend(check_amount("cost_impact", bottleneck.cost_impact));
    if let Some(potential) = bottleneck.automation_potential {
        errors.extend(check_fraction("automation_potential", potential));
    }
    errors
}

pub fn check_required(field: &str, value: &str) -> Option<FieldError> {
    value
        .trim()
        .is_empty()
        .then(|| FieldError::new(field, "is required"))
}

/// Finite and non-negative.
pub fn check_amount(field: &str, value: f64) -> Option<FieldError> {
    if !value.is_finite() {
        Some(FieldError::new(field, "must be a finite number"))
    } else if value < 0.0 {
        Some(FieldError::new(field, format!("must be non-negative, got {value}")))
    } else {
        None
    }
}

/// Within `[0, 1]`.
pub fn check_fraction(field: &str, value: f64) -> Option<FieldError> {
    (!(0.0..=1.0).contains(&value))
        .then(|| FieldError::new(field, format!("must be between 0 and 1, got {value}")))
}
