//! Tagged mutation commands.
//!
//! Callers that funnel UI actions through a single entry point hand the
//! engine a [`Command`] instead of a string-keyed action identifier; the
//! dispatcher matches exhaustively, so adding a variant is a compile error
//! at every dispatch site until handled.

use remsync_tree::TreeWalker;
use remsync_types::{FlagColumn, Root, SyncRecord, Target};

use crate::error::EngineResult;
use crate::mutate::{apply_individual_edits, prune_undiscovered, set_column_for_folder};
use crate::payload::EditRow;
use crate::session::Session;

/// A mutation against the session working table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Merge a UI-submitted batch of rows for one folder.
    EditIndividual { folder: String, rows: Vec<EditRow> },
    /// Force one flag column for every object discovered under a folder.
    SetColumn {
        folder: String,
        column: FlagColumn,
        value: bool,
    },
    /// Remove records whose objects are no longer discovered anywhere.
    Prune,
    /// Write the working table through to the persisted store.
    Commit,
}

/// Dispatch a command against the session.
///
/// `SetColumn` yields the refreshed record list of its folder for UI
/// refresh; the other commands yield nothing.
pub fn dispatch(
    session: &Session,
    targets: &[Target],
    roots: &[Root],
    walker: &dyn TreeWalker,
    command: Command,
) -> EngineResult<Option<Vec<SyncRecord>>> {
    match command {
        Command::EditIndividual { folder, rows } => {
            apply_individual_edits(session, &folder, &rows)?;
            Ok(None)
        }
        Command::SetColumn {
            folder,
            column,
            value,
        } => {
            let refreshed = set_column_for_folder(session, roots, walker, &folder, column, value)?;
            Ok(Some(refreshed))
        }
        Command::Prune => {
            prune_undiscovered(session, targets, roots, walker)?;
            Ok(None)
        }
        Command::Commit => {
            session.commit()?;
            Ok(None)
        }
    }
}
