//! Live object hierarchy boundary for remsync.
//!
//! The engine never talks to the host object hierarchy directly; it goes
//! through the [`TreeWalker`] trait. The crate ships an in-memory hierarchy
//! for tests and embedding.
//!
//! # Key Types
//!
//! - [`TreeWalker`] — Discovery boundary: leaf enumeration and name lookup
//! - [`ObjectNode`] / [`ObjectKind`] — Nodes of the in-memory hierarchy
//! - [`InMemoryObjectTree`] — HashMap-backed hierarchy implementation

pub mod memory;
pub mod node;
pub mod walker;

pub use memory::InMemoryObjectTree;
pub use node::{ObjectKind, ObjectNode};
pub use walker::TreeWalker;
