//! Core reconciliation engine for remsync.
//!
//! Merges live discovery (via [`TreeWalker`]) with the persisted
//! synchronization table into per-folder record lists, preserving
//! user-entered flags for every rediscovered object. Edits accumulate in a
//! session-scoped draft table and become durable only on an explicit
//! commit.
//!
//! # Key Types
//!
//! - [`Session`] — Two-slot (draft / persisted) working-table state
//! - [`reconcile`] — Pure merge of targets, roots, discovery, and table
//! - [`Command`] — Tagged mutation commands with exhaustive dispatch
//! - [`EditRow`] — One UI-submitted row of a folder's list
//!
//! [`TreeWalker`]: remsync_tree::TreeWalker

pub mod command;
pub mod error;
pub mod mutate;
pub mod options;
pub mod payload;
pub mod reconcile;
pub mod session;

pub use command::{dispatch, Command};
pub use error::{EngineError, EngineResult};
pub use mutate::{apply_individual_edits, prune_undiscovered, set_column_for_folder};
pub use options::{folder_options, key_options, PLEASE_SELECT_CAPTION};
pub use payload::{decode_edit_rows, EditRow};
pub use reconcile::{discovered_under, reconcile, reconcile_session, FolderView};
pub use session::Session;
