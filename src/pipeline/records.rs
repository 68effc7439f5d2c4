//! Record kinds accepted by the pipeline.

use crate::core::{Bottleneck, CompanyMetrics, Insight};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_CONSULTATION_STATUS: &str = "in_progress";
pub const DEFAULT_REPORT_TYPE: &str = "diagnostic";

/// An envelope around one payload. An empty `id` is filled in by the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DataRecord {
    #[serde(default)]
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub payload: RecordPayload,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl DataRecord {
    pub fn new(timestamp: DateTime<Utc>, payload: impl Into<RecordPayload>) -> Self {
        Self {
            id: String::new(),
            timestamp,
            payload: payload.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn kind(&self) -> RecordKind {
        self.payload.kind()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Consultation,
    Bottleneck,
    Insight,
    Report,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Consultation => "consultation",
            RecordKind::Bottleneck => "bottleneck",
            RecordKind::Insight => "insight",
            RecordKind::Report => "report",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "record_type", content = "data", rename_all = "lowercase")]
pub enum RecordPayload {
    Consultation(ConsultationRecord),
    Bottleneck(BottleneckRecord),
    Insight(InsightRecord),
    Report(ReportRecord),
}

impl RecordPayload {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordPayload::Consultation(_) => RecordKind::Consultation,
            RecordPayload::Bottleneck(_) => RecordKind::Bottleneck,
            RecordPayload::Insight(_) => RecordKind::Insight,
            RecordPayload::Report(_) => RecordKind::Report,
        }
    }

    /// Canonical JSON of the inner data, with object keys sorted.
    pub fn canonical_json(&self) -> serde_json::Result<String> {
        let value = match self {
            RecordPayload::Consultation(data) => serde_json::to_value(data)?,
            RecordPayload::Bottleneck(data) => serde_json::to_value(data)?,
            RecordPayload::Insight(data) => serde_json::to_value(data)?,
            RecordPayload::Report(data) => serde_json::to_value(data)?,
        };
        serde_json::to_string(&value)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ConsultationRecord {
    #[serde(default)]
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub conversation: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<CompanyMetrics>,
}

impl ConsultationRecord {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BottleneckRecord {
    #[serde(default)]
    pub consultation_id: String,
    #[serde(flatten)]
    pub bottleneck: Bottleneck,
}

impl BottleneckRecord {
    pub fn new(consultation_id: impl Into<String>, bottleneck: Bottleneck) -> Self {
        Self {
            consultation_id: consultation_id.into(),
            bottleneck,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InsightRecord {
    #[serde(default)]
    pub consultation_id: String,
    #[serde(flatten)]
    pub insight: Insight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_score: Option<f64>,
}

impl InsightRecord {
    pub fn new(consultation_id: impl Into<String>, insight: Insight) -> Self {
        Self {
            consultation_id: consultation_id.into(),
            insight,
            priority_score: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReportRecord {
    #[serde(default)]
    pub consultation_id: String,
    #[serde(default = "default_report_type")]
    pub report_type: String,
    #[serde(default)]
    pub report_data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl ReportRecord {
    pub fn new(
        consultation_id: impl Into<String>,
        report_type: impl Into<String>,
        report_data: serde_json::Value,
    ) -> Self {
        Self {
            consultation_id: consultation_id.into(),
            report_type: report_type.into(),
            report_data,
            generated_at: None,
        }
    }
}

fn default_report_type() -> String {
    DEFAULT_REPORT_TYPE.to_string()
}

impl From<ConsultationRecord> for RecordPayload {
    fn from(data: ConsultationRecord) -> Self {
        RecordPayload::Consultation(data)
    }
}

impl From<BottleneckRecord> for RecordPayload {
    fn from(data: BottleneckRecord) -> Self {
        RecordPayload::Bottleneck(data)
    }
}

impl From<InsightRecord> for RecordPayload {
    fn from(data: InsightRecord) -> Self {
        RecordPayload::Insight(data)
    }
}

impl From<ReportRecord> for RecordPayload {
    fn from(data: ReportRecord) -> Self {
        RecordPayload::Report(data)
    }
}
