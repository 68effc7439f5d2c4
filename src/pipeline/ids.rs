//! Record identifiers.

use super::records::{DataRecord, RecordKind};
use sha2::{Digest, Sha256};

const HASH_PREFIX_LEN: usize = 8;

/// `{kind}_{hash}_{unix seconds}` where `hash` is the first eight hex
/// digits of the SHA-256 of the payload's canonical JSON. The timestamp
/// comes from the record, so the same record always gets the same id.
pub fn generate_id(record: &DataRecord) -> crate::Result<String> {
    let canonical = record.payload.canonical_json()?;
    Ok(format_id(
        record.kind(),
        &content_hash(&canonical),
        record.timestamp.timestamp(),
    ))
}

pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(HASH_PREFIX_LEN);
    hex
}

fn format_id(kind: RecordKind, hash: &str, unix_seconds: i64) -> String {
    format!("{kind}_{hash}_{unix_seconds}")
}
