use remsync_types::ObjectId;

/// Discovery boundary over the live object hierarchy.
///
/// All implementations must satisfy these invariants:
/// - `discover` terminates on any input, including hierarchies with cyclic
///   parent/child links: implementations must keep a visited set and never
///   revisit a node.
/// - `discover` returns only variable-kind leaves, recursing into any node
///   that has children, in deterministic preorder per root.
/// - Unknown or invalid roots degrade to an empty result, never an error;
///   anomalies in the hierarchy mean "fewer objects", not failure.
pub trait TreeWalker: Send + Sync {
    /// Returns `true` if the identifier addresses an existing object.
    fn exists(&self, id: ObjectId) -> bool;

    /// Current display name of an object, if it exists.
    fn name_of(&self, id: ObjectId) -> Option<String>;

    /// All variable identifiers beneath `root`, in preorder.
    ///
    /// The root itself is never part of the result, even when it is a
    /// variable. Returns an empty list for unknown roots.
    fn discover(&self, root: ObjectId) -> Vec<ObjectId>;
}
