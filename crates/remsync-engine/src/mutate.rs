//! Mutators over the session working table.
//!
//! Every mutator loads the working table, rewrites it in memory, and swaps
//! it back in one replacement, so the table is never observable in a
//! half-written state. Scoping is the critical invariant throughout: a
//! mutation for folder `A` must never touch a record of folder `B`, even
//! when both folders track an object with the same identifier.

use std::collections::HashSet;

use tracing::debug;

use remsync_tree::TreeWalker;
use remsync_types::{FlagColumn, Root, SyncKey, SyncRecord, SyncTable, Target};

use crate::error::EngineResult;
use crate::payload::EditRow;
use crate::reconcile::discovered_under;
use crate::session::Session;

/// Merge a submitted batch of per-object rows into the working table.
///
/// Each row replaces the record at `(folder, row.object_id)` wholesale;
/// there is no per-field merging. Records of other folders, and records of
/// this folder whose objects are not in `rows`, are left untouched — an
/// omitted object keeps its stored state until reconciliation stops
/// discovering it.
pub fn apply_individual_edits(
    session: &Session,
    folder: &str,
    rows: &[EditRow],
) -> EngineResult<()> {
    let mut index = session.working_table()?.index();

    for row in rows {
        let record = SyncRecord {
            folder: folder.to_string(),
            object_id: row.object_id,
            name: row.name.clone(),
            active: row.active,
            action: row.action,
            delete: row.delete,
        };
        index.insert(record.key(), record);
    }

    debug!(folder, rows = rows.len(), "individual edits applied");
    session.replace_working_table(SyncTable::from_index(index));
    Ok(())
}

/// Force one flag column to `value` for every object currently discovered
/// under `folder`'s bound roots.
///
/// Objects without a record get a fresh all-false record first; other
/// columns keep their existing values. Names are refreshed from the live
/// objects while we are here, as reconciliation would. Returns the
/// refreshed record list for the folder, in discovery order, for UI
/// refresh.
pub fn set_column_for_folder(
    session: &Session,
    roots: &[Root],
    walker: &dyn TreeWalker,
    folder: &str,
    column: FlagColumn,
    value: bool,
) -> EngineResult<Vec<SyncRecord>> {
    let mut index = session.working_table()?.index();
    let discovered = discovered_under(roots, walker, folder);

    for object_id in &discovered {
        let name = walker.name_of(*object_id).unwrap_or_default();
        let record = index
            .entry(SyncKey::new(folder, *object_id))
            .or_insert_with(|| SyncRecord::new(folder, *object_id, name.clone()));
        record.name = name;
        record.set_flag(column, value);
    }

    let refreshed: Vec<SyncRecord> = discovered
        .iter()
        .filter_map(|object_id| index.get(&SyncKey::new(folder, *object_id)).cloned())
        .collect();

    debug!(folder, column = %column, value, objects = discovered.len(), "column applied to folder");
    session.replace_working_table(SyncTable::from_index(index));
    Ok(refreshed)
}

/// Remove every working-table record whose composite key is absent from
/// the current discovery pass.
///
/// This is an explicit operator action: reconciliation itself never prunes,
/// so records of deleted objects accumulate until someone deliberately
/// calls this. Records of folders no longer present in `targets` count as
/// undiscovered and are removed too. Returns the number of records
/// removed.
pub fn prune_undiscovered(
    session: &Session,
    targets: &[Target],
    roots: &[Root],
    walker: &dyn TreeWalker,
) -> EngineResult<usize> {
    let table = session.working_table()?;

    let mut live: HashSet<SyncKey> = HashSet::new();
    for target in targets {
        if target.name.is_empty() {
            continue;
        }
        for object_id in discovered_under(roots, walker, &target.name) {
            live.insert(SyncKey::new(target.name.clone(), object_id));
        }
    }

    let before = table.len();
    let kept: SyncTable = table.into_iter().filter(|r| live.contains(&r.key())).collect();
    let removed = before - kept.len();
    if removed > 0 {
        debug!(removed, "pruned records for undiscovered objects");
    }
    session.replace_working_table(kept);
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use remsync_store::{ConfigStore, InMemoryConfigStore};
    use remsync_tree::{InMemoryObjectTree, ObjectKind};
    use remsync_types::ObjectId;

    fn id(raw: i32) -> ObjectId {
        ObjectId::new(raw)
    }

    fn record(folder: &str, object_id: i32, active: bool, action: bool, delete: bool) -> SyncRecord {
        SyncRecord {
            folder: folder.to_string(),
            object_id: id(object_id),
            name: format!("var-{object_id}"),
            active,
            action,
            delete,
        }
    }

    fn row(object_id: i32, active: bool, action: bool, delete: bool) -> EditRow {
        EditRow {
            object_id: id(object_id),
            name: format!("var-{object_id}"),
            active,
            action,
            delete,
        }
    }

    fn session_with(records: Vec<SyncRecord>) -> Session {
        let store = Arc::new(InMemoryConfigStore::new());
        store.set_sync_table(&records.into_iter().collect()).unwrap();
        Session::new(store)
    }

    /// Root 100 -> variables 501, 502; root 200 -> variable 601.
    fn two_root_tree() -> InMemoryObjectTree {
        let tree = InMemoryObjectTree::new();
        tree.insert(id(100), "A", ObjectKind::Category, None);
        tree.insert(id(501), "Temperature", ObjectKind::Variable, Some(id(100)));
        tree.insert(id(502), "Humidity", ObjectKind::Variable, Some(id(100)));
        tree.insert(id(200), "B", ObjectKind::Category, None);
        tree.insert(id(601), "Pressure", ObjectKind::Variable, Some(id(200)));
        tree
    }

    // -----------------------------------------------------------------------
    // apply_individual_edits
    // -----------------------------------------------------------------------

    #[test]
    fn rows_replace_records_wholesale() {
        let session = session_with(vec![record("alpha", 501, true, true, true)]);

        apply_individual_edits(&session, "alpha", &[row(501, false, true, false)]).unwrap();

        let table = session.working_table().unwrap();
        let got = table.get(&SyncKey::new("alpha", 501)).unwrap();
        assert!(!got.active && got.action && !got.delete);
    }

    #[test]
    fn other_folders_are_never_touched() {
        // Same object id under two folders; only alpha is submitted.
        let session = session_with(vec![
            record("alpha", 501, false, false, false),
            record("beta", 501, true, true, false),
        ]);

        apply_individual_edits(&session, "alpha", &[row(501, true, false, false)]).unwrap();

        let table = session.working_table().unwrap();
        assert!(table.get(&SyncKey::new("alpha", 501)).unwrap().active);
        let beta = table.get(&SyncKey::new("beta", 501)).unwrap();
        assert!(beta.active && beta.action && !beta.delete);
    }

    #[test]
    fn omitted_objects_keep_their_records() {
        let session = session_with(vec![
            record("alpha", 501, true, false, false),
            record("alpha", 502, false, true, false),
        ]);

        // Submit only 501; 502 must be retained unchanged, not deleted.
        apply_individual_edits(&session, "alpha", &[row(501, true, true, false)]).unwrap();

        let table = session.working_table().unwrap();
        assert_eq!(table.len(), 2);
        let kept = table.get(&SyncKey::new("alpha", 502)).unwrap();
        assert!(!kept.active && kept.action && !kept.delete);
    }

    #[test]
    fn rows_for_unknown_objects_create_records() {
        let session = session_with(vec![]);

        apply_individual_edits(&session, "alpha", &[row(777, true, false, false)]).unwrap();

        let table = session.working_table().unwrap();
        assert!(table.get(&SyncKey::new("alpha", 777)).unwrap().active);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let session = session_with(vec![record("alpha", 501, true, false, false)]);
        apply_individual_edits(&session, "alpha", &[]).unwrap();
        assert_eq!(session.working_table().unwrap().len(), 1);
    }

    // -----------------------------------------------------------------------
    // set_column_for_folder
    // -----------------------------------------------------------------------

    #[test]
    fn column_is_forced_for_all_discovered_objects() {
        let tree = two_root_tree();
        let roots = vec![Root::new(100, "alpha"), Root::new(200, "beta")];
        let session = session_with(vec![record("alpha", 501, true, false, false)]);

        let refreshed =
            set_column_for_folder(&session, &roots, &tree, "alpha", FlagColumn::Action, true)
                .unwrap();

        // Both discovered objects carry action=true; active is untouched.
        assert_eq!(refreshed.len(), 2);
        assert!(refreshed.iter().all(|r| r.action));
        assert!(refreshed[0].active); // 501 had active=true
        assert!(!refreshed[1].active); // 502 was created as default

        // Scoping: beta's objects gained no records.
        let table = session.working_table().unwrap();
        assert!(table.get(&SyncKey::new("beta", 601)).is_none());
    }

    #[test]
    fn absent_records_are_created_with_defaults() {
        let tree = two_root_tree();
        let roots = vec![Root::new(100, "alpha")];
        let session = session_with(vec![]);

        set_column_for_folder(&session, &roots, &tree, "alpha", FlagColumn::Active, true).unwrap();

        let table = session.working_table().unwrap();
        let created = table.get(&SyncKey::new("alpha", 502)).unwrap();
        assert!(created.active && !created.action && !created.delete);
        assert_eq!(created.name, "Humidity");
    }

    #[test]
    fn other_folders_records_stay_untouched() {
        let tree = two_root_tree();
        let roots = vec![Root::new(100, "alpha"), Root::new(200, "beta")];
        let session = session_with(vec![record("beta", 601, false, false, false)]);

        set_column_for_folder(&session, &roots, &tree, "alpha", FlagColumn::Delete, true).unwrap();

        let table = session.working_table().unwrap();
        let beta = table.get(&SyncKey::new("beta", 601)).unwrap();
        assert!(!beta.active && !beta.action && !beta.delete);
    }

    #[test]
    fn clearing_a_column_works_too() {
        let tree = two_root_tree();
        let roots = vec![Root::new(100, "alpha")];
        let session = session_with(vec![
            record("alpha", 501, true, true, false),
            record("alpha", 502, false, true, false),
        ]);

        let refreshed =
            set_column_for_folder(&session, &roots, &tree, "alpha", FlagColumn::Action, false)
                .unwrap();
        assert!(refreshed.iter().all(|r| !r.action));
        assert!(refreshed[0].active);
    }

    #[test]
    fn names_are_refreshed_while_setting() {
        let tree = two_root_tree();
        tree.rename(id(501), "Outside Temperature");
        let roots = vec![Root::new(100, "alpha")];
        let session = session_with(vec![record("alpha", 501, true, false, false)]);

        let refreshed =
            set_column_for_folder(&session, &roots, &tree, "alpha", FlagColumn::Active, true)
                .unwrap();
        assert_eq!(refreshed[0].name, "Outside Temperature");
    }

    #[test]
    fn folder_with_no_usable_roots_changes_nothing() {
        let tree = two_root_tree();
        let session = session_with(vec![record("alpha", 501, true, false, false)]);

        let refreshed =
            set_column_for_folder(&session, &[], &tree, "alpha", FlagColumn::Active, false)
                .unwrap();
        assert!(refreshed.is_empty());
        assert!(session.working_table().unwrap().get(&SyncKey::new("alpha", 501)).unwrap().active);
    }

    // -----------------------------------------------------------------------
    // prune_undiscovered
    // -----------------------------------------------------------------------

    #[test]
    fn prune_removes_only_undiscovered_records() {
        let tree = two_root_tree();
        tree.remove(id(502));
        let targets = vec![Target::new("alpha", ""), Target::new("beta", "")];
        let roots = vec![Root::new(100, "alpha"), Root::new(200, "beta")];
        let session = session_with(vec![
            record("alpha", 501, true, false, false),
            record("alpha", 502, true, true, true), // object vanished
            record("beta", 601, false, true, false),
        ]);

        let removed = prune_undiscovered(&session, &targets, &roots, &tree).unwrap();
        assert_eq!(removed, 1);

        let table = session.working_table().unwrap();
        assert!(table.get(&SyncKey::new("alpha", 501)).is_some());
        assert!(table.get(&SyncKey::new("alpha", 502)).is_none());
        assert!(table.get(&SyncKey::new("beta", 601)).is_some());
    }

    #[test]
    fn prune_drops_records_of_removed_folders() {
        let tree = two_root_tree();
        let targets = vec![Target::new("alpha", "")]; // beta no longer configured
        let roots = vec![Root::new(100, "alpha")];
        let session = session_with(vec![
            record("alpha", 501, true, false, false),
            record("beta", 601, true, false, false),
        ]);

        let removed = prune_undiscovered(&session, &targets, &roots, &tree).unwrap();
        assert_eq!(removed, 1);
        assert!(session
            .working_table()
            .unwrap()
            .get(&SyncKey::new("beta", 601))
            .is_none());
    }

    #[test]
    fn prune_with_everything_discovered_removes_nothing() {
        let tree = two_root_tree();
        let targets = vec![Target::new("alpha", "")];
        let roots = vec![Root::new(100, "alpha")];
        let session = session_with(vec![record("alpha", 501, true, false, false)]);

        let removed = prune_undiscovered(&session, &targets, &roots, &tree).unwrap();
        assert_eq!(removed, 0);
        assert_eq!(session.working_table().unwrap().len(), 1);
    }
}
