//! Caller-owned consultation state.
//!
//! A [`ConsultationSession`] accumulates what the conversation has uncovered
//! so far. The calculators never hold on to it; they are handed a borrow
//! whenever a portfolio or summary is requested.

use crate::core::{Bottleneck, CompanyMetrics, Frequency, Insight, Priority};
use crate::formatting::{format_count, format_currency};
use crate::portfolio::{calculate_portfolio, PortfolioResult};
use crate::summary::{executive_summary, ExecutiveSummary};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

const MIN_CHALLENGE_CHARS: usize = 10;
const CHALLENGE_NAME_CHARS: usize = 50;
const CHALLENGE_HOURS: f64 = 5.0;
const CHALLENGE_COST: f64 = 375.0;
const CHALLENGE_AUTOMATION_POTENTIAL: f64 = 0.7;

/// Best-effort structured facts pulled from one conversational answer.
///
/// Values arrive from a language model, so numbers are accepted either as
/// JSON numbers or as numeric strings and anything else is skipped.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractionPayload {
    #[serde(default)]
    pub company_info: CompanyInfo,
    #[serde(default)]
    pub financial_data: FinancialData,
    #[serde(default)]
    pub challenges: Vec<Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CompanyInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FinancialData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<Value>,
}

/// A ranked suggestion from the session's diagnostic report.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionRecommendation {
    pub priority: usize,
    pub bottleneck: String,
    pub solution: String,
    pub expected_time_savings: String,
    pub expected_cost_savings: String,
    pub automation_potential: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ConsultationSession {
    pub metrics: CompanyMetrics,
    #[serde(default)]
    pub bottlenecks: Vec<Bottleneck>,
    #[serde(default)]
    pub insights: Vec<Insight>,
}

impl ConsultationSession {
    pub fn new(metrics: CompanyMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    pub fn add_bottleneck(&mut self, bottleneck: Bottleneck) {
        self.bottlenecks.push(bottleneck);
    }

    pub fn add_insight(&mut self, insight: Insight) {
        self.insights.push(insight);
    }

    /// Merge an extraction payload. Returns how many bottlenecks it added.
    pub fn apply_extraction(&mut self, payload: &ExtractionPayload) -> usize {
        let info = &payload.company_info;
        if let Some(name) = &info.name {
            self.metrics.company_name = name.clone();
        }
        if let Some(count) = info.employee_count.as_ref().and_then(as_count) {
            self.metrics.employee_count = count;
        }
        if let Some(industry) = &info.industry {
            self.metrics.industry = industry.clone();
        }
        if let Some(revenue) = payload.financial_data.revenue.as_ref().and_then(as_amount) {
            self.metrics.annual_revenue = revenue;
        }

        let before = self.bottlenecks.len();
        for challenge in payload.challenges.iter().filter_map(Value::as_str) {
            if challenge.chars().count() <= MIN_CHALLENGE_CHARS {
                continue;
            }
            self.metrics.current_challenges.push(challenge.to_string());
            self.bottlenecks.push(challenge_bottleneck(challenge));
        }

        let added = self.bottlenecks.len() - before;
        tracing::debug!(added, total = self.bottlenecks.len(), "applied extraction");
        added
    }

    /// Bottlenecks ranked by annualized cost, highest first.
    pub fn top_recommendations(&self, limit: usize) -> Vec<SessionRecommendation> {
        let mut ranked: Vec<&Bottleneck> = self.bottlenecks.iter().collect();
        ranked.sort_by(|a, b| b.annual_cost_impact().total_cmp(&a.annual_cost_impact()));

        ranked
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, bottleneck)| SessionRecommendation {
                priority: i + 1,
                bottleneck: bottleneck.name.clone(),
                solution: format!("Implement AI-powered automation for {}", bottleneck.name),
                expected_time_savings: format!(
                    "{} hours/year",
                    format_count(bottleneck.annual_hours_impact())
                ),
                expected_cost_savings: format!(
                    "{}/year",
                    format_currency(bottleneck.annual_cost_impact())
                ),
                automation_potential: bottleneck.automation_potential_or_default(),
            })
            .collect()
    }

    pub fn portfolio(&self) -> PortfolioResult {
        calculate_portfolio(&self.bottlenecks, &self.metrics)
    }

    pub fn executive_summary(&self) -> ExecutiveSummary {
        executive_summary(&self.metrics, &self.bottlenecks)
    }

    pub fn export_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn import_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn challenge_bottleneck(challenge: &str) -> Bottleneck {
    let short: String = challenge.chars().take(CHALLENGE_NAME_CHARS).collect();
    Bottleneck::new(format!("Challenge: {short}"), CHALLENGE_HOURS, CHALLENGE_COST)
        .with_description(challenge)
        .with_department("TBD")
        .with_frequency(Frequency::Daily)
        .with_automation_potential(CHALLENGE_AUTOMATION_POTENTIAL)
        .with_priority(Priority::Medium)
}

fn as_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}

fn as_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_start_matches('$').replace(',', "").parse().ok(),
        _ => None,
    }?;
    (amount.is_finite() && amount >= 0.0).then_some(amount)
}
