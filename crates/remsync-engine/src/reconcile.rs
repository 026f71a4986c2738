//! Reconciliation: merging live discovery with the working table.

use std::collections::BTreeMap;

use tracing::debug;

use remsync_store::ConfigStore;
use remsync_tree::TreeWalker;
use remsync_types::{ObjectId, Root, SyncKey, SyncRecord, SyncTable, Target};

/// Per-folder record lists, the output of [`reconcile`].
pub type FolderView = BTreeMap<String, Vec<SyncRecord>>;

/// All variable identifiers discovered under a folder's bound roots, in
/// root order then preorder within each root.
///
/// Roots with a non-positive identifier, a nonexistent root object, or an
/// empty folder name are skipped. Overlapping root subtrees may yield the
/// same identifier more than once; that is a caller configuration concern
/// and is deliberately not deduplicated.
pub fn discovered_under(roots: &[Root], walker: &dyn TreeWalker, folder: &str) -> Vec<ObjectId> {
    let mut found = Vec::new();
    for root in roots {
        if root.target_folder.is_empty() || root.target_folder != folder {
            continue;
        }
        if !root.local_root_id.is_valid() {
            debug!(root = %root.local_root_id, folder, "skipping root with invalid identifier");
            continue;
        }
        if !walker.exists(root.local_root_id) {
            debug!(root = %root.local_root_id, folder, "skipping nonexistent root");
            continue;
        }
        found.extend(walker.discover(root.local_root_id));
    }
    found
}

/// Merge targets, roots, live discovery, and the working table into
/// per-folder record lists.
///
/// A pure function of its inputs: running it twice with unchanged inputs
/// and discovery results yields identical output, and nothing is mutated.
/// For every discovered object the record's `name` is taken fresh from the
/// walker; its flags come from the working table's entry for
/// `(folder, object_id)` if present, else default to `false`. Stored
/// records whose objects are no longer discovered are silently left out of
/// the view but never removed from the table.
pub fn reconcile(
    targets: &[Target],
    roots: &[Root],
    table: &SyncTable,
    walker: &dyn TreeWalker,
) -> FolderView {
    let index = table.index();
    let mut view = FolderView::new();

    for target in targets {
        if target.name.is_empty() {
            continue;
        }
        let records = view.entry(target.name.clone()).or_default();
        for object_id in discovered_under(roots, walker, &target.name) {
            let name = walker.name_of(object_id).unwrap_or_default();
            let mut record = SyncRecord::new(&target.name, object_id, name);
            if let Some(stored) = index.get(&SyncKey::new(&target.name, object_id)) {
                record.active = stored.active;
                record.action = stored.action;
                record.delete = stored.delete;
            }
            records.push(record);
        }
    }

    view
}

/// Reconcile from the session's own store: targets and roots are read from
/// the configuration store, the table is the session working table.
///
/// This is the path a form-assembly caller takes; [`reconcile`] itself
/// stays a pure function for callers that already hold the inputs.
pub fn reconcile_session(
    session: &crate::session::Session,
    walker: &dyn TreeWalker,
) -> crate::error::EngineResult<FolderView> {
    let targets = session.store().targets()?;
    let roots = session.store().roots()?;
    let table = session.working_table()?;
    Ok(reconcile(&targets, &roots, &table, walker))
}
