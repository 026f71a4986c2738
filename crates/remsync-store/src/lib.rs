//! Configuration persistence boundary for remsync.
//!
//! The persisted configuration consists of three JSON array documents:
//! targets, roots, and the sync table. Implementations of [`ConfigStore`]
//! must guarantee read-after-write of the exact shape written; everything
//! else (backing medium, durability strategy) is up to the backend.
//!
//! Reads are fail-safe: an unparseable document decodes as empty, a
//! malformed element is skipped. Only writes surface errors.
//!
//! # Key Types
//!
//! - [`ConfigStore`] — Read/write boundary over the three documents
//! - [`InMemoryConfigStore`] — String-document backed implementation
//! - [`codec`] — The tolerant JSON document codec

pub mod codec;
pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryConfigStore;
pub use traits::ConfigStore;
