use std::sync::RwLock;

use tracing::debug;

use remsync_types::{Root, SyncTable, Target};

use crate::codec;
use crate::error::StoreResult;
use crate::traits::ConfigStore;

/// In-memory configuration store backed by the three raw JSON documents.
///
/// Mirrors the reference persistence layer, which stores configuration as
/// JSON strings: documents are kept verbatim and decoded on every read, so
/// the fail-safe codec behavior is exercised exactly as it would be against
/// real persisted data. Intended for tests and embedding.
pub struct InMemoryConfigStore {
    inner: RwLock<Documents>,
}

struct Documents {
    targets: String,
    roots: String,
    sync_table: String,
}

impl Default for Documents {
    fn default() -> Self {
        Self {
            targets: "[]".to_string(),
            roots: "[]".to_string(),
            sync_table: "[]".to_string(),
        }
    }
}

impl InMemoryConfigStore {
    /// Create a store with all three documents empty.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Documents::default()),
        }
    }

    /// Replace the targets document (configuration authoring seam).
    pub fn set_targets(&self, targets: &[Target]) -> StoreResult<()> {
        let raw = codec::encode_targets(targets)?;
        self.inner.write().expect("lock poisoned").targets = raw;
        Ok(())
    }

    /// Replace the roots document (configuration authoring seam).
    pub fn set_roots(&self, roots: &[Root]) -> StoreResult<()> {
        let raw = codec::encode_roots(roots)?;
        self.inner.write().expect("lock poisoned").roots = raw;
        Ok(())
    }

    /// Replace a raw document verbatim. Lets tests seed corrupt data.
    pub fn set_sync_table_raw(&self, raw: impl Into<String>) {
        self.inner.write().expect("lock poisoned").sync_table = raw.into();
    }

    /// The sync table document as stored.
    pub fn sync_table_raw(&self) -> String {
        self.inner.read().expect("lock poisoned").sync_table.clone()
    }
}

impl Default for InMemoryConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn targets(&self) -> StoreResult<Vec<Target>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(codec::decode_targets(&inner.targets))
    }

    fn roots(&self) -> StoreResult<Vec<Root>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(codec::decode_roots(&inner.roots))
    }

    fn sync_table(&self) -> StoreResult<SyncTable> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(codec::decode_records(&inner.sync_table))
    }

    fn set_sync_table(&self, table: &SyncTable) -> StoreResult<()> {
        let raw = codec::encode_records(table)?;
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.sync_table = raw;
        debug!(records = table.len(), "persisted sync table replaced");
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().expect("lock poisoned");
        f.debug_struct("InMemoryConfigStore")
            .field("targets_bytes", &inner.targets.len())
            .field("roots_bytes", &inner.roots.len())
            .field("sync_table_bytes", &inner.sync_table.len())
            .finish()
    }
}
