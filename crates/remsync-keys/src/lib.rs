//! Remote credential key boundary for remsync.
//!
//! Target folders reference a remote credential by key name. The list of
//! available key names lives in an external secrets provider, reached
//! through the [`KeyProvider`] trait. Provider failures are never fatal to
//! the engine: callers degrade to an empty key list.

use std::collections::HashMap;
use std::sync::RwLock;

use remsync_types::ObjectId;

/// Errors from key provider lookups.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// The source identifier does not address a known provider instance.
    #[error("unknown key source: {0}")]
    UnknownSource(ObjectId),

    /// The provider itself failed to deliver its key list.
    #[error("key provider failure: {0}")]
    Provider(String),
}

/// Result alias for key provider operations.
pub type KeyResult<T> = Result<T, KeyError>;

/// Access to the remote key names held by a secrets provider instance.
pub trait KeyProvider: Send + Sync {
    /// All key names known to the provider instance addressed by `source`.
    fn list_keys(&self, source: ObjectId) -> KeyResult<Vec<String>>;
}

/// In-memory key provider for tests and embedding.
///
/// Holds the key lists of any number of provider instances, keyed by their
/// source identifier.
pub struct InMemoryKeyProvider {
    sources: RwLock<HashMap<ObjectId, Vec<String>>>,
}

impl InMemoryKeyProvider {
    /// Create a provider with no sources.
    pub fn new() -> Self {
        Self {
            sources: RwLock::new(HashMap::new()),
        }
    }

    /// Register (or replace) a source and its key names.
    pub fn set_source(&self, source: ObjectId, keys: Vec<String>) {
        self.sources.write().expect("lock poisoned").insert(source, keys);
    }

    /// Remove a source. Returns `true` if it existed.
    pub fn remove_source(&self, source: ObjectId) -> bool {
        self.sources
            .write()
            .expect("lock poisoned")
            .remove(&source)
            .is_some()
    }
}

impl Default for InMemoryKeyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyProvider for InMemoryKeyProvider {
    fn list_keys(&self, source: ObjectId) -> KeyResult<Vec<String>> {
        self.sources
            .read()
            .expect("lock poisoned")
            .get(&source)
            .cloned()
            .ok_or(KeyError::UnknownSource(source))
    }
}

impl std::fmt::Debug for InMemoryKeyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.sources.read().expect("lock poisoned").len();
        f.debug_struct("InMemoryKeyProvider")
            .field("source_count", &count)
            .finish()
    }
}
