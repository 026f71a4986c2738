use remsync_types::{Root, SyncTable, Target};

use crate::error::StoreResult;

/// Read/write boundary over the three persisted configuration documents.
///
/// All implementations must satisfy these invariants:
/// - Read-after-write: `sync_table` after `set_sync_table(t)` yields a table
///   observably equal to `t` (same composite keys, same flag values).
/// - Reads are fail-safe: corrupt persisted data degrades to fewer rows or
///   an empty collection, never to an error.
/// - `set_sync_table` is a single full replacement; no partial-write state
///   is ever observable. Its error is the one failure surfaced to callers.
pub trait ConfigStore: Send + Sync {
    /// The operator-authored target folders.
    fn targets(&self) -> StoreResult<Vec<Target>>;

    /// The operator-authored root bindings.
    fn roots(&self) -> StoreResult<Vec<Root>>;

    /// The persisted synchronization table.
    fn sync_table(&self) -> StoreResult<SyncTable>;

    /// Replace the persisted synchronization table wholesale.
    fn set_sync_table(&self, table: &SyncTable) -> StoreResult<()>;
}
