use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node in the live object hierarchy.
///
/// Identifiers are small positive integers assigned by the host system.
/// Zero and negative values never address a real object; configuration rows
/// carrying them are ignored rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(i32);

impl ObjectId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The unset identifier (zero). Represents "no object selected".
    pub const fn unset() -> Self {
        Self(0)
    }

    /// The raw integer value.
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Returns `true` if this identifier can address a real object.
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ObjectId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<ObjectId> for i32 {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}
