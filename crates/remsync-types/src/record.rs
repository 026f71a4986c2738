//! Per-object synchronization records and their composite key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::id::ObjectId;

/// Per-object synchronization state within one folder.
///
/// A record is uniquely identified by its [`SyncKey`]. The `name` field is a
/// display cache, never authoritative: reconciliation always refreshes it
/// from the live object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncRecord {
    /// Target folder this record belongs to.
    #[serde(rename = "Folder")]
    pub folder: String,
    /// Identifier of the live object.
    #[serde(rename = "ObjectID")]
    pub object_id: ObjectId,
    /// Cached display name of the live object.
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Whether the object participates in synchronization.
    #[serde(rename = "Active", default)]
    pub active: bool,
    /// Whether the remote side should install an action script.
    #[serde(rename = "Action", default)]
    pub action: bool,
    /// Whether the object is marked for remote deletion.
    #[serde(rename = "Delete", default)]
    pub delete: bool,
}

impl SyncRecord {
    /// Create a record with all flags cleared.
    pub fn new(
        folder: impl Into<String>,
        object_id: impl Into<ObjectId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            folder: folder.into(),
            object_id: object_id.into(),
            name: name.into(),
            active: false,
            action: false,
            delete: false,
        }
    }

    /// The composite key identifying this record.
    pub fn key(&self) -> SyncKey {
        SyncKey::new(self.folder.clone(), self.object_id)
    }

    /// Read the given flag column.
    pub fn flag(&self, column: FlagColumn) -> bool {
        match column {
            FlagColumn::Active => self.active,
            FlagColumn::Action => self.action,
            FlagColumn::Delete => self.delete,
        }
    }

    /// Set the given flag column, leaving the others untouched.
    pub fn set_flag(&mut self, column: FlagColumn, value: bool) {
        match column {
            FlagColumn::Active => self.active = value,
            FlagColumn::Action => self.action = value,
            FlagColumn::Delete => self.delete = value,
        }
    }
}

/// Composite key `(folder, object_id)` uniquely identifying a [`SyncRecord`]
/// within a table snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SyncKey {
    pub folder: String,
    pub object_id: ObjectId,
}

impl SyncKey {
    /// Create a composite key.
    pub fn new(folder: impl Into<String>, object_id: impl Into<ObjectId>) -> Self {
        Self {
            folder: folder.into(),
            object_id: object_id.into(),
        }
    }
}

impl fmt::Display for SyncKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.folder, self.object_id)
    }
}

/// Names one of the three boolean flag columns of a [`SyncRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagColumn {
    Active,
    Action,
    Delete,
}

impl FlagColumn {
    /// Column name as used in payloads and persisted documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagColumn::Active => "active",
            FlagColumn::Action => "action",
            FlagColumn::Delete => "delete",
        }
    }
}

impl fmt::Display for FlagColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlagColumn {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(FlagColumn::Active),
            "action" => Ok(FlagColumn::Action),
            "delete" => Ok(FlagColumn::Delete),
            other => Err(TypeError::UnknownColumn(other.to_string())),
        }
    }
}
