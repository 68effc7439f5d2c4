//! Persistence seam for consultation records.
//!
//! Durable backends live outside this crate. [`InMemoryStore`] backs the
//! CLI, tests and embedded use.

use crate::errors::{Error, Result};
use crate::pipeline::records::{
    BottleneckRecord, ConsultationRecord, DataRecord, InsightRecord, RecordPayload, ReportRecord,
};
use parking_lot::RwLock;
use std::collections::HashMap;

/// A stored payload together with the id it was stored under.
#[derive(Clone, Debug, PartialEq)]
pub struct Stored<T> {
    pub id: String,
    pub record: T,
}

pub trait ConsultationStore: Send + Sync {
    /// Persist a processed record. Consultations are upserted, every other
    /// kind must have a fresh id.
    fn store(&self, record: &DataRecord) -> Result<()>;

    fn consultation(&self, consultation_id: &str) -> Result<Option<ConsultationRecord>>;

    fn require_consultation(&self, consultation_id: &str) -> Result<ConsultationRecord> {
        self.consultation(consultation_id)?
            .ok_or_else(|| Error::NotFound {
                kind: "consultation",
                id: consultation_id.to_string(),
            })
    }

    /// Bottlenecks for a consultation, highest per-occurrence cost first.
    fn bottlenecks(&self, consultation_id: &str) -> Result<Vec<Stored<BottleneckRecord>>>;

    /// Insights for a consultation, highest potential value first.
    fn insights(&self, consultation_id: &str) -> Result<Vec<Stored<InsightRecord>>>;

    /// The most recently generated report of a type.
    fn report(&self, consultation_id: &str, report_type: &str) -> Result<Option<Stored<ReportRecord>>>;
}

#[derive(Default)]
struct Tables {
    consultations: HashMap<String, ConsultationRecord>,
    bottlenecks: Vec<Stored<BottleneckRecord>>,
    insights: Vec<Stored<InsightRecord>>,
    reports: Vec<Stored<ReportRecord>>,
}

fn insert_unique<T>(
    table: &mut Vec<Stored<T>>,
    kind: &'static str,
    id: &str,
    record: T,
) -> Result<()> {
    if table.iter().any(|row| row.id == id) {
        return Err(Error::DuplicateRecord {
            kind,
            id: id.to_string(),
        });
    }
    table.push(Stored {
        id: id.to_string(),
        record,
    });
    Ok(())
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored records across all kinds.
    pub fn len(&self) -> usize {
        let tables = self.tables.read();
        tables.consultations.len()
            + tables.bottlenecks.len()
            + tables.insights.len()
            + tables.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ConsultationStore for InMemoryStore {
    fn store(&self, record: &DataRecord) -> Result<()> {
        let mut tables = self.tables.write();
        match &record.payload {
            RecordPayload::Consultation(data) => {
                tables.consultations.insert(record.id.clone(), data.clone());
                Ok(())
            }
            RecordPayload::Bottleneck(data) => {
                insert_unique(&mut tables.bottlenecks, "bottleneck", &record.id, data.clone())
            }
            RecordPayload::Insight(data) => {
                insert_unique(&mut tables.insights, "insight", &record.id, data.clone())
            }
            RecordPayload::Report(data) => {
                insert_unique(&mut tables.reports, "report", &record.id, data.clone())
            }
        }
    }

    fn consultation(&self, consultation_id: &str) -> Result<Option<ConsultationRecord>> {
        Ok(self.tables.read().consultations.get(consultation_id).cloned())
    }

    fn bottlenecks(&self, consultation_id: &str) -> Result<Vec<Stored<BottleneckRecord>>> {
        let mut rows: Vec<_> = self
            .tables
            .read()
            .bottlenecks
            .iter()
            .filter(|row| row.record.consultation_id == consultation_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.record
                .bottleneck
                .cost_impact
                .total_cmp(&a.record.bottleneck.cost_impact)
        });
        Ok(rows)
    }

    fn insights(&self, consultation_id: &str) -> Result<Vec<Stored<InsightRecord>>> {
        let mut rows: Vec<_> = self
            .tables
            .read()
            .insights
            .iter()
            .filter(|row| row.record.consultation_id == consultation_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.record
                .insight
                .potential_value
                .total_cmp(&a.record.insight.potential_value)
        });
        Ok(rows)
    }

    fn report(&self, consultation_id: &str, report_type: &str) -> Result<Option<Stored<ReportRecord>>> {
        // max_by keeps the last of equal elements, so later inserts win ties
        Ok(self
            .tables
            .read()
            .reports
            .iter()
            .filter(|row| {
                row.record.consultation_id == consultation_id && row.record.report_type == report_type
            })
            .max_by(|a, b| a.record.generated_at.cmp(&b.record.generated_at))
            .cloned())
    }
}
