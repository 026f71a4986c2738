//! The ordered collection of synchronization records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::{SyncKey, SyncRecord};

/// An ordered collection of [`SyncRecord`]s, logically a mapping from
/// [`SyncKey`] to record.
///
/// Insertion order is preserved through serialization but carries no
/// semantic weight. Well-formed tables never contain two records with the
/// same composite key; [`SyncTable::index`] resolves duplicates in favor of
/// the later record, matching the replace-on-write behavior of the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncTable {
    pub records: Vec<SyncRecord>,
}

impl SyncTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record.
    pub fn push(&mut self, record: SyncRecord) {
        self.records.push(record);
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> impl Iterator<Item = &SyncRecord> {
        self.records.iter()
    }

    /// Find a record by its composite key.
    pub fn get(&self, key: &SyncKey) -> Option<&SyncRecord> {
        self.records
            .iter()
            .find(|r| r.folder == key.folder && r.object_id == key.object_id)
    }

    /// Build a key-indexed map of the table. Later records win on duplicate
    /// keys.
    pub fn index(&self) -> BTreeMap<SyncKey, SyncRecord> {
        self.records
            .iter()
            .map(|r| (r.key(), r.clone()))
            .collect()
    }

    /// Rebuild a table from a key-indexed map, in key order.
    pub fn from_index(index: BTreeMap<SyncKey, SyncRecord>) -> Self {
        Self {
            records: index.into_values().collect(),
        }
    }
}

impl FromIterator<SyncRecord> for SyncTable {
    fn from_iter<I: IntoIterator<Item = SyncRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SyncTable {
    type Item = SyncRecord;
    type IntoIter = std::vec::IntoIter<SyncRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
