//! Validate, enrich and store consultation records.
//!
//! Every record passes through three stages:
//!
//! 1. **Validate** kind-specific rules, collecting every failure.
//! 2. **Process** fills in ids and derived fields.
//! 3. **Store** hands the record to a [`ConsultationStore`].
//!
//! Dispatch is a `match` over [`RecordPayload`], so adding a record kind
//! is a compile error until every stage handles it.

pub mod ids;
pub mod records;

pub use ids::generate_id;
pub use records::{
    BottleneckRecord, ConsultationRecord, DataRecord, InsightRecord, RecordKind, RecordPayload,
    ReportRecord,
};

use crate::effects::{from_errors, run_validation, FieldError, InputValidation};
use crate::impact::default_priority;
use crate::store::ConsultationStore;
use crate::validation::{bottleneck_errors, check_fraction, check_required};
use records::DEFAULT_CONSULTATION_STATUS;

/// Check a record against the rules for its kind.
pub fn validate_record(record: DataRecord) -> InputValidation<DataRecord> {
    let errors: Vec<FieldError> = match &record.payload {
        RecordPayload::Consultation(data) => {
            check_required("client_id", &data.client_id).into_iter().collect()
        }
        RecordPayload::Bottleneck(data) => {
            let mut errors: Vec<FieldError> =
                check_required("consultation_id", &data.consultation_id)
                    .into_iter()
                    .collect();
            errors.extend(bottleneck_errors(&data.bottleneck));
            errors
        }
        RecordPayload::Insight(data) => {
            let mut errors: Vec<FieldError> =
                check_required("consultation_id", &data.consultation_id)
                    .into_iter()
                    .collect();
            errors.extend(check_required("insight", &data.insight.insight));
            errors.extend(check_fraction("confidence", data.insight.confidence));
            errors
        }
        RecordPayload::Report(data) => check_required("consultation_id", &data.consultation_id)
            .into_iter()
            .collect(),
    };

    let parent = record.kind().as_str();
    let errors = errors.into_iter().map(|e| e.nested(parent)).collect();
    from_errors(record, errors)
}

/// Fill in the id and kind-specific derived fields.
pub fn process_record(mut record: DataRecord) -> crate::Result<DataRecord> {
    if record.id.is_empty() {
        record.id = generate_id(&record)?;
    }

    let timestamp = record.timestamp;
    match &mut record.payload {
        RecordPayload::Consultation(data) => {
            if data.start_time.is_none() {
                data.start_time = Some(timestamp);
            }
            if data.status.is_none() {
                data.status = Some(DEFAULT_CONSULTATION_STATUS.to_string());
            }
        }
        RecordPayload::Bottleneck(data) => {
            let bottleneck = &mut data.bottleneck;
            if bottleneck.priority.is_none() {
                bottleneck.priority = Some(default_priority(bottleneck.annual_cost_impact()));
            }
        }
        RecordPayload::Insight(data) => {
            data.priority_score = Some(data.insight.priority_score());
        }
        RecordPayload::Report(data) => {
            if data.generated_at.is_none() {
                data.generated_at = Some(timestamp);
            }
        }
    }

    Ok(record)
}

pub struct RecordPipeline<S: ConsultationStore> {
    store: S,
}

impl<S: ConsultationStore> RecordPipeline<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate, process and store a record, returning the stored form.
    pub fn process(&self, record: DataRecord) -> crate::Result<DataRecord> {
        let kind = record.kind();
        let record = run_validation(validate_record(record)).inspect_err(|err| {
            tracing::warn!(%kind, error = %err, "record rejected");
        })?;
        let record = process_record(record)?;
        self.store.store(&record)?;
        tracing::debug!(%kind, id = %record.id, "stored record");
        Ok(record)
    }
}
