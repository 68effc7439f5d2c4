//! Record pipeline backed by the in-memory store.

use bizdoctor::core::{EffortLevel, Insight, Priority};
use bizdoctor::pipeline::{BottleneckRecord, ConsultationRecord, InsightRecord, ReportRecord};
use bizdoctor::store::ConsultationStore;
use bizdoctor::{Bottleneck, DataRecord, Error, InMemoryStore, RecordPipeline};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, hour, 0, 0).unwrap()
}

fn pipeline_with_consultation() -> RecordPipeline<InMemoryStore> {
    let pipeline = RecordPipeline::new(InMemoryStore::new());
    pipeline
        .process(DataRecord::new(at(9), ConsultationRecord::new("client_42")).with_id("c-1"))
        .unwrap();
    pipeline
}

fn insight(text: &str, value: f64, confidence: f64, effort: EffortLevel) -> Insight {
    Insight {
        category: "operations".to_string(),
        insight: text.to_string(),
        confidence,
        supporting_data: vec![],
        potential_value: value,
        implementation_effort: effort,
    }
}

#[test]
fn test_consultation_defaults_are_filled() {
    let pipeline = pipeline_with_consultation();
    let stored = pipeline.store().require_consultation("c-1").unwrap();

    assert_eq!(stored.client_id, "client_42");
    assert_eq!(stored.start_time, Some(at(9)));
    assert_eq!(stored.status.as_deref(), Some("in_progress"));
}

#[test]
fn test_generated_ids_are_deterministic() {
    let record = DataRecord::new(
        at(10),
        BottleneckRecord::new("c-1", Bottleneck::new("Intake", 2.0, 150.0)),
    );

    let first = RecordPipeline::new(InMemoryStore::new())
        .process(record.clone())
        .unwrap();
    let second = RecordPipeline::new(InMemoryStore::new())
        .process(record)
        .unwrap();

    assert!(first.id.starts_with("bottleneck_"));
    assert!(first.id.ends_with(&at(10).timestamp().to_string()));
    assert_eq!(first.id, second.id);
}

#[test]
fn test_bottlenecks_get_priority_and_cost_ordering() {
    let pipeline = pipeline_with_consultation();
    for (name, cost) in [("Cheap", 10.0), ("Pricey", 900.0), ("Middling", 300.0)] {
        let bottleneck = Bottleneck::new(name, 1.0, cost).with_frequency("weekly");
        pipeline
            .process(DataRecord::new(at(10), BottleneckRecord::new("c-1", bottleneck)))
            .unwrap();
    }

    let rows = pipeline.store().bottlenecks("c-1").unwrap();
    let names: Vec<&str> = rows
        .iter()
        .map(|row| row.record.bottleneck.name.as_str())
        .collect();
    assert_eq!(names, vec!["Pricey", "Middling", "Cheap"]);

    // 900 * 52 = 46,800 a year
    assert_eq!(rows[0].record.bottleneck.priority, Some(Priority::Medium));
    // 10 * 52 = 520 a year
    assert_eq!(rows[2].record.bottleneck.priority, Some(Priority::Low));
}

#[test]
fn test_supplied_priority_is_kept() {
    let pipeline = pipeline_with_consultation();
    let bottleneck = Bottleneck::new("Small but urgent", 1.0, 1.0).with_priority(Priority::Critical);
    let stored = pipeline
        .process(DataRecord::new(at(11), BottleneckRecord::new("c-1", bottleneck)))
        .unwrap();

    match stored.payload {
        bizdoctor::pipeline::RecordPayload::Bottleneck(data) => {
            assert_eq!(data.bottleneck.priority, Some(Priority::Critical));
        }
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn test_insights_are_scored_and_ranked_by_value() {
    let pipeline = pipeline_with_consultation();
    pipeline
        .process(DataRecord::new(
            at(10),
            InsightRecord::new("c-1", insight("Automate intake", 10_000.0, 0.8, EffortLevel::Low)),
        ))
        .unwrap();
    pipeline
        .process(DataRecord::new(
            at(10),
            InsightRecord::new("c-1", insight("Replace billing", 40_000.0, 0.5, EffortLevel::High)),
        ))
        .unwrap();

    let rows = pipeline.store().insights("c-1").unwrap();
    assert_eq!(rows[0].record.insight.insight, "Replace billing");
    assert_eq!(rows[0].record.priority_score, Some(10_000.0));
    assert_eq!(rows[1].record.priority_score, Some(12_000.0));
}

#[test]
fn test_latest_report_wins() {
    let pipeline = pipeline_with_consultation();
    for (hour, version) in [(10, 1), (14, 3), (12, 2)] {
        let mut report = ReportRecord::new("c-1", "diagnostic", json!({ "version": version }));
        report.generated_at = Some(at(hour));
        pipeline
            .process(DataRecord::new(at(hour), report))
            .unwrap();
    }

    let latest = pipeline
        .store()
        .report("c-1", "diagnostic")
        .unwrap()
        .unwrap();
    assert_eq!(latest.record.report_data["version"], 3);
    assert!(pipeline.store().report("c-1", "roi").unwrap().is_none());
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let pipeline = pipeline_with_consultation();
    let record = DataRecord::new(
        at(10),
        BottleneckRecord::new("c-1", Bottleneck::new("Intake", 2.0, 150.0)),
    )
    .with_id("b-1");

    pipeline.process(record.clone()).unwrap();
    let err = pipeline.process(record).unwrap_err();
    assert!(matches!(err, Error::DuplicateRecord { kind: "bottleneck", .. }));
}

#[test]
fn test_consultations_upsert() {
    let pipeline = pipeline_with_consultation();
    let mut updated = ConsultationRecord::new("client_42");
    updated.status = Some("completed".to_string());
    pipeline
        .process(DataRecord::new(at(17), updated).with_id("c-1"))
        .unwrap();

    let stored = pipeline.store().consultation("c-1").unwrap().unwrap();
    assert_eq!(stored.status.as_deref(), Some("completed"));
    assert_eq!(pipeline.store().len(), 1);
}

#[test]
fn test_invalid_records_are_not_stored() {
    let pipeline = pipeline_with_consultation();
    let bad = Bottleneck::new("", -1.0, 10.0).with_automation_potential(2.0);
    let err = pipeline
        .process(DataRecord::new(at(10), BottleneckRecord::new("", bad)))
        .unwrap_err();

    let message = err.to_string();
    for field in [
        "bottleneck.consultation_id",
        "bottleneck.name",
        "bottleneck.time_impact_hours",
        "bottleneck.automation_potential",
    ] {
        assert!(message.contains(field), "missing {field} in {message}");
    }
    assert!(pipeline.store().bottlenecks("").unwrap().is_empty());
}
