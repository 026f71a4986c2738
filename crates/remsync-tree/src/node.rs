//! Node types for the in-memory object hierarchy.

use serde::{Deserialize, Serialize};

use remsync_types::ObjectId;

/// Kind of a node in the live object hierarchy.
///
/// Only variables are synchronization candidates; every other kind is a
/// structural node that discovery recurses through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Category,
    Instance,
    Variable,
    Script,
    Media,
    Link,
}

impl ObjectKind {
    /// Returns `true` for the kind that discovery collects.
    pub fn is_variable(&self) -> bool {
        matches!(self, ObjectKind::Variable)
    }
}

/// A node in the in-memory object hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectNode {
    /// Display name of the object.
    pub name: String,
    /// Object kind.
    pub kind: ObjectKind,
    /// Child identifiers in insertion order.
    pub children: Vec<ObjectId>,
}

impl ObjectNode {
    /// Create a node with no children.
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    /// Returns `true` if the node has children to recurse into.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
