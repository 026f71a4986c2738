//! Tolerant JSON codec for the persisted configuration documents.
//!
//! Decoding never fails: an unparseable document yields an empty
//! collection, a malformed element is skipped with a warning. Encoding
//! errors are real failures and propagate.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use remsync_types::{Root, SyncRecord, SyncTable, Target};

use crate::error::{StoreError, StoreResult};

/// Decode a JSON array document element by element, skipping elements that
/// do not decode.
fn decode_elements<T: DeserializeOwned>(raw: &str, what: &str) -> Vec<T> {
    let values: Vec<Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(err) => {
            warn!(document = what, %err, "unparseable persisted document; treating as empty");
            return Vec::new();
        }
    };

    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(element) => Some(element),
            Err(err) => {
                warn!(document = what, %err, "skipping malformed element");
                None
            }
        })
        .collect()
}

/// Decode the targets document.
pub fn decode_targets(raw: &str) -> Vec<Target> {
    decode_elements(raw, "targets")
}

/// Decode the roots document.
pub fn decode_roots(raw: &str) -> Vec<Root> {
    decode_elements(raw, "roots")
}

/// Decode the sync table document.
pub fn decode_records(raw: &str) -> SyncTable {
    decode_elements::<SyncRecord>(raw, "sync-table")
        .into_iter()
        .collect()
}

/// Encode the sync table document.
pub fn encode_records(table: &SyncTable) -> StoreResult<String> {
    serde_json::to_string(table).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Encode the targets document.
pub fn encode_targets(targets: &[Target]) -> StoreResult<String> {
    serde_json::to_string(targets).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Encode the roots document.
pub fn encode_roots(roots: &[Root]) -> StoreResult<String> {
    serde_json::to_string(roots).map_err(|e| StoreError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use remsync_types::{ObjectId, SyncKey};

    #[test]
    fn unparseable_document_decodes_as_empty() {
        assert!(decode_targets("not json at all").is_empty());
        assert!(decode_roots("{\"oops\":").is_empty());
        assert!(decode_records("42").is_empty());
    }

    #[test]
    fn empty_array_decodes_as_empty() {
        assert!(decode_targets("[]").is_empty());
        assert!(decode_records("[]").is_empty());
    }

    #[test]
    fn malformed_element_is_skipped() {
        let raw = r#"[
            {"Folder":"alpha","ObjectID":501,"Name":"a","Active":true},
            {"Folder":"alpha"},
            {"Folder":"beta","ObjectID":502}
        ]"#;
        let table = decode_records(raw);
        assert_eq!(table.len(), 2);
        assert!(table.get(&SyncKey::new("alpha", 501)).unwrap().active);
        assert!(table.get(&SyncKey::new("beta", 502)).is_some());
    }

    #[test]
    fn record_roundtrip() {
        let mut record = SyncRecord::new("alpha", 501, "Temperature");
        record.delete = true;
        let table: SyncTable = vec![record].into_iter().collect();

        let raw = encode_records(&table).unwrap();
        let decoded = decode_records(&raw);
        assert_eq!(decoded, table);
    }

    #[test]
    fn targets_and_roots_roundtrip() {
        let targets = vec![Target::new("alpha", "server-1")];
        let roots = vec![Root::new(100, "alpha")];

        assert_eq!(decode_targets(&encode_targets(&targets).unwrap()), targets);
        assert_eq!(decode_roots(&encode_roots(&roots).unwrap()), roots);
    }

    #[test]
    fn absent_flags_decode_as_false() {
        let table = decode_records(r#"[{"Folder":"alpha","ObjectID":501}]"#);
        let record = table.get(&SyncKey::new("alpha", ObjectId::new(501))).unwrap();
        assert!(!record.active && !record.action && !record.delete);
    }
}
