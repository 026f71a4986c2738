use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use tracing::warn;

use remsync_types::ObjectId;

use crate::node::{ObjectKind, ObjectNode};
use crate::walker::TreeWalker;

/// In-memory, HashMap-backed object hierarchy.
///
/// Intended for tests and embedding. Nodes are held behind an `RwLock` for
/// safe concurrent access; child order is insertion order.
pub struct InMemoryObjectTree {
    nodes: RwLock<HashMap<ObjectId, ObjectNode>>,
}

impl InMemoryObjectTree {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        Self {
            nodes: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the hierarchy has no objects.
    pub fn is_empty(&self) -> bool {
        self.nodes.read().expect("lock poisoned").is_empty()
    }

    /// Insert an object, optionally attaching it to a parent.
    ///
    /// Replaces any existing object with the same identifier. A dangling
    /// parent reference leaves the object unattached (reachable only as its
    /// own root).
    pub fn insert(
        &self,
        id: ObjectId,
        name: impl Into<String>,
        kind: ObjectKind,
        parent: Option<ObjectId>,
    ) {
        let mut nodes = self.nodes.write().expect("lock poisoned");
        nodes.insert(id, ObjectNode::new(name, kind));
        if let Some(parent_id) = parent {
            match nodes.get_mut(&parent_id) {
                Some(parent_node) => {
                    if !parent_node.children.contains(&id) {
                        parent_node.children.push(id);
                    }
                }
                None => warn!(%id, %parent_id, "insert with dangling parent; object left unattached"),
            }
        }
    }

    /// Attach an existing object as a child of another.
    ///
    /// No-op when either side is missing. Attaching an ancestor to one of
    /// its descendants creates a cycle; discovery stays safe because of the
    /// visited-set guard.
    pub fn attach(&self, parent: ObjectId, child: ObjectId) {
        let mut nodes = self.nodes.write().expect("lock poisoned");
        if !nodes.contains_key(&child) {
            return;
        }
        if let Some(parent_node) = nodes.get_mut(&parent) {
            if !parent_node.children.contains(&child) {
                parent_node.children.push(child);
            }
        }
    }

    /// Remove an object. Child links pointing at it are left dangling and
    /// skipped by discovery.
    pub fn remove(&self, id: ObjectId) -> bool {
        self.nodes.write().expect("lock poisoned").remove(&id).is_some()
    }

    /// Rename an object. Returns `false` if it does not exist.
    pub fn rename(&self, id: ObjectId, name: impl Into<String>) -> bool {
        match self.nodes.write().expect("lock poisoned").get_mut(&id) {
            Some(node) => {
                node.name = name.into();
                true
            }
            None => false,
        }
    }
}

impl Default for InMemoryObjectTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeWalker for InMemoryObjectTree {
    fn exists(&self, id: ObjectId) -> bool {
        self.nodes.read().expect("lock poisoned").contains_key(&id)
    }

    fn name_of(&self, id: ObjectId) -> Option<String> {
        self.nodes
            .read()
            .expect("lock poisoned")
            .get(&id)
            .map(|node| node.name.clone())
    }

    fn discover(&self, root: ObjectId) -> Vec<ObjectId> {
        let nodes = self.nodes.read().expect("lock poisoned");
        let Some(root_node) = nodes.get(&root) else {
            return Vec::new();
        };

        // Explicit-stack preorder walk. The visited set guards against
        // cyclic parent/child links; a well-formed hierarchy never hits it.
        let mut found = Vec::new();
        let mut visited = HashSet::from([root]);
        let mut stack: Vec<ObjectId> = root_node.children.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let Some(node) = nodes.get(&id) else {
                continue; // dangling child link
            };
            if node.kind.is_variable() {
                found.push(id);
            }
            for child in node.children.iter().rev() {
                stack.push(*child);
            }
        }

        found
    }
}

impl std::fmt::Debug for InMemoryObjectTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryObjectTree")
            .field("object_count", &self.len())
            .finish()
    }
}
