//! Operator-authored configuration rows.
//!
//! Targets and roots are created and edited outside this system; the engine
//! only consumes them. Serde field names follow the persisted JSON layout.

use serde::{Deserialize, Serialize};

use crate::id::ObjectId;

/// A named remote synchronization folder.
///
/// Identified by its unique `name`. The `remote_key` selects which remote
/// credential the folder synchronizes with; the engine never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Folder name. Targets with an empty name are excluded from
    /// reconciliation.
    #[serde(rename = "Name")]
    pub name: String,
    /// Remote credential key name.
    #[serde(rename = "RemoteKey", default)]
    pub remote_key: String,
}

impl Target {
    /// Create a target.
    pub fn new(name: impl Into<String>, remote_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remote_key: remote_key.into(),
        }
    }
}

/// Binds a subtree of the live object hierarchy to a target folder name.
///
/// Multiple roots may bind to the same folder; their discovered objects are
/// reconciled into one folder list in root order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    /// Root node of the subtree to scan.
    #[serde(rename = "LocalRootID", default = "ObjectId::unset")]
    pub local_root_id: ObjectId,
    /// Name of the target folder the subtree synchronizes into.
    #[serde(rename = "TargetFolder", default)]
    pub target_folder: String,
}

impl Root {
    /// Create a root binding.
    pub fn new(local_root_id: impl Into<ObjectId>, target_folder: impl Into<String>) -> Self {
        Self {
            local_root_id: local_root_id.into(),
            target_folder: target_folder.into(),
        }
    }
}
