pub mod payback;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default share of a bottleneck's cost that automation removes when none is given.
pub const DEFAULT_AUTOMATION_POTENTIAL: f64 = 0.7;

/// How often a bottleneck occurs.
///
/// Parsing is case-insensitive. Strings outside the four known cadences are
/// kept verbatim in `Unrecognized` and annualize with monthly semantics.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Unrecognized(String),
}

impl Frequency {
    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Frequency {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "daily" => Frequency::Daily,
            "weekly" => Frequency::Weekly,
            "monthly" => Frequency::Monthly,
            "quarterly" => Frequency::Quarterly,
            _ => Frequency::Unrecognized(raw),
        }
    }
}

impl From<&str> for Frequency {
    fn from(raw: &str) -> Self {
        Frequency::from(raw.to_string())
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        frequency.as_str().to_string()
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complexity class of the automation that would remove a bottleneck.
///
/// Matched exactly, so `"High"` is unrecognized. Unknown strings are kept
/// and priced like `Medium`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SolutionComplexity {
    Low,
    #[default]
    Medium,
    High,
    Unrecognized(String),
}

impl SolutionComplexity {
    pub fn as_str(&self) -> &str {
        match self {
            SolutionComplexity::Low => "low",
            SolutionComplexity::Medium => "medium",
            SolutionComplexity::High => "high",
            SolutionComplexity::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for SolutionComplexity {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "low" => SolutionComplexity::Low,
            "medium" => SolutionComplexity::Medium,
            "high" => SolutionComplexity::High,
            _ => SolutionComplexity::Unrecognized(raw),
        }
    }
}

impl From<&str> for SolutionComplexity {
    fn from(raw: &str) -> Self {
        SolutionComplexity::from(raw.to_string())
    }
}

impl From<SolutionComplexity> for String {
    fn from(complexity: SolutionComplexity) -> Self {
        complexity.as_str().to_string()
    }
}

/// Effort needed to act on an insight.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EffortLevel {
    Low,
    #[default]
    Medium,
    High,
    Unrecognized(String),
}

impl EffortLevel {
    pub fn as_str(&self) -> &str {
        match self {
            EffortLevel::Low => "low",
            EffortLevel::Medium => "medium",
            EffortLevel::High => "high",
            EffortLevel::Unrecognized(raw) => raw,
        }
    }

    /// Weight applied to an insight's value when ranking by priority.
    pub fn priority_multiplier(&self) -> f64 {
        match self {
            EffortLevel::Low => 1.5,
            EffortLevel::Medium => 1.0,
            EffortLevel::High => 0.5,
            EffortLevel::Unrecognized(_) => 1.0,
        }
    }
}

impl From<String> for EffortLevel {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "low" => EffortLevel::Low,
            "medium" => EffortLevel::Medium,
            "high" => EffortLevel::High,
            _ => EffortLevel::Unrecognized(raw),
        }
    }
}

impl From<EffortLevel> for String {
    fn from(effort: EffortLevel) -> Self {
        effort.as_str().to_string()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Priority, &str)] = &[
            (Priority::Low, "Low"),
            (Priority::Medium, "Medium"),
            (Priority::High, "High"),
            (Priority::Critical, "Critical"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(p, _)| p == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// Company-level figures collected during intake.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CompanyMetrics {
    #[serde(default)]
    pub company_name: String,
    /// Case-insensitive key into the industry benchmark table.
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub employee_count: u32,
    #[serde(default)]
    pub annual_revenue: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_hourly_cost: Option<f64>,
    #[serde(default)]
    pub technology_stack: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub main_services: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub current_challenges: Vec<String>,
}

impl CompanyMetrics {
    pub fn new(
        company_name: impl Into<String>,
        industry: impl Into<String>,
        employee_count: u32,
        annual_revenue: f64,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            industry: industry.into(),
            employee_count,
            annual_revenue,
            ..Self::default()
        }
    }

    pub fn with_hourly_cost(mut self, hourly_cost: f64) -> Self {
        self.average_hourly_cost = Some(hourly_cost);
        self
    }

    pub fn with_technology<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technology_stack.extend(tools.into_iter().map(Into::into));
        self
    }

    /// Employee count safe to divide by. Zero means "unknown" and divides as 1.
    pub fn employee_divisor(&self) -> f64 {
        f64::from(self.employee_count.max(1))
    }

    /// Revenue per employee, with the zero-headcount divisor rule applied.
    pub fn revenue_per_employee(&self) -> f64 {
        self.annual_revenue / self.employee_divisor()
    }
}

/// A named process inefficiency observed during a consultation.
///
/// Only per-occurrence figures are stored. Annualized figures are always
/// derived from them and the frequency, see [`Bottleneck::annual_hours_impact`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bottleneck {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    /// Hours lost per occurrence.
    pub time_impact_hours: f64,
    /// Cost per occurrence.
    pub cost_impact: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automation_potential: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_complexity: Option<SolutionComplexity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Bottleneck {
    pub fn new(name: impl Into<String>, time_impact_hours: f64, cost_impact: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            department: None,
            frequency: None,
            time_impact_hours,
            cost_impact,
            automation_potential: None,
            solution_complexity: None,
            priority: None,
        }
    }

    pub fn with_frequency(mut self, frequency: impl Into<Frequency>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    pub fn with_automation_potential(mut self, potential: f64) -> Self {
        self.automation_potential = Some(potential);
        self
    }

    pub fn with_complexity(mut self, complexity: impl Into<SolutionComplexity>) -> Self {
        self.solution_complexity = Some(complexity.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn annual_hours_impact(&self) -> f64 {
        crate::impact::annualize(self).0
    }

    pub fn annual_cost_impact(&self) -> f64 {
        crate::impact::annualize(self).1
    }

    /// The supplied priority, or the tier derived from annualized cost.
    pub fn effective_priority(&self) -> Priority {
        self.priority
            .unwrap_or_else(|| crate::impact::default_priority(self.annual_cost_impact()))
    }

    pub fn automation_potential_or_default(&self) -> f64 {
        self.automation_potential
            .unwrap_or(DEFAULT_AUTOMATION_POTENTIAL)
    }

    pub fn complexity(&self) -> SolutionComplexity {
        self.solution_complexity.clone().unwrap_or_default()
    }

    /// Whether a non-empty frequency was supplied, recognized or not.
    pub fn has_frequency(&self) -> bool {
        self.frequency
            .as_ref()
            .is_some_and(|f| !f.as_str().trim().is_empty())
    }
}

/// An observation about the business with an estimated dollar value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    #[serde(default)]
    pub category: String,
    pub insight: String,
    pub confidence: f64,
    #[serde(default)]
    pub supporting_data: Vec<String>,
    #[serde(default)]
    pub potential_value: f64,
    #[serde(default)]
    pub implementation_effort: EffortLevel,
}

impl Insight {
    pub fn priority_score(&self) -> f64 {
        self.potential_value * self.confidence * self.implementation_effort.priority_multiplier()
    }
}
