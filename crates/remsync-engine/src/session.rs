//! The session: two-slot working-table state.
//!
//! A [`Session`] holds the draft slot in memory and reaches the persisted
//! slot through its [`ConfigStore`]. The working table is whichever slot is
//! authoritative: the draft once it has been seeded, the persisted table
//! otherwise. The draft lifecycle is
//! `Empty -> Seeded -> Modified* -> Committed -> Empty`.

use std::sync::{Arc, RwLock};

use tracing::debug;

use remsync_store::ConfigStore;
use remsync_types::SyncTable;

use crate::error::EngineResult;

/// Session-scoped working-table state over a configuration store.
///
/// The draft is seeded lazily from the persisted table on first read and
/// stays authoritative until [`commit`] or [`invalidate`]. Every mutation
/// replaces the draft table wholesale, so readers never observe a partially
/// written table.
///
/// [`commit`]: Session::commit
/// [`invalidate`]: Session::invalidate
pub struct Session {
    store: Arc<dyn ConfigStore>,
    draft: RwLock<Option<SyncTable>>,
}

impl Session {
    /// Create a session with an empty draft slot.
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self {
            store,
            draft: RwLock::new(None),
        }
    }

    /// The configuration store backing this session.
    pub fn store(&self) -> &dyn ConfigStore {
        self.store.as_ref()
    }

    /// Returns `true` if the draft slot is currently authoritative.
    pub fn is_seeded(&self) -> bool {
        self.draft.read().expect("lock poisoned").is_some()
    }

    /// Snapshot of the working table, seeding the draft from the persisted
    /// table if the draft slot is empty.
    pub fn working_table(&self) -> EngineResult<SyncTable> {
        if let Some(table) = self.draft.read().expect("lock poisoned").as_ref() {
            return Ok(table.clone());
        }

        let seeded = self.store.sync_table()?;
        let mut draft = self.draft.write().expect("lock poisoned");
        // A concurrent caller may have seeded between the locks; theirs wins.
        let table = draft.get_or_insert_with(|| {
            debug!(records = seeded.len(), "draft seeded from persisted table");
            seeded
        });
        Ok(table.clone())
    }

    /// Replace the working table wholesale. The draft slot becomes
    /// authoritative regardless of its previous state.
    pub fn replace_working_table(&self, table: SyncTable) {
        debug!(records = table.len(), "working table replaced");
        *self.draft.write().expect("lock poisoned") = Some(table);
    }

    /// Write the working table through to the persisted store, then clear
    /// the draft slot.
    ///
    /// The write is a single full replacement. On failure the draft is left
    /// untouched, so no edit is lost; this is the one error surfaced to the
    /// operator.
    pub fn commit(&self) -> EngineResult<()> {
        let table = self.working_table()?;
        self.store.set_sync_table(&table)?;
        *self.draft.write().expect("lock poisoned") = None;
        debug!(records = table.len(), "working table committed");
        Ok(())
    }

    /// Discard the draft slot. The next read re-seeds from the persisted
    /// table.
    pub fn invalidate(&self) {
        debug!("draft invalidated");
        *self.draft.write().expect("lock poisoned") = None;
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("seeded", &self.is_seeded())
            .finish()
    }
}
