//! Foundation types for remsync.
//!
//! This crate provides the data model shared by every other remsync crate:
//! the configuration rows authored by an operator, the per-object
//! synchronization records that the engine reconciles, and the composite
//! key that identifies a record within a table.
//!
//! # Key Types
//!
//! - [`ObjectId`] — Identifier of a node in the live object hierarchy
//! - [`Target`] — A named remote synchronization folder
//! - [`Root`] — A live-hierarchy subtree bound to a target folder
//! - [`SyncRecord`] — Per-object flags plus a cached display name
//! - [`SyncKey`] — The `(folder, object_id)` composite key
//! - [`SyncTable`] — An ordered collection of records
//! - [`FlagColumn`] — Names one of the three boolean flag columns

pub mod config;
pub mod error;
pub mod form;
pub mod id;
pub mod record;
pub mod table;

pub use config::{Root, Target};
pub use error::TypeError;
pub use form::SelectOption;
pub use id::ObjectId;
pub use record::{FlagColumn, SyncKey, SyncRecord};
pub use table::SyncTable;
