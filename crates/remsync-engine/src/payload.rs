//! Decoding of UI-submitted edit payloads.
//!
//! The caller delivers one folder's list as a JSON array of row objects.
//! Decoding is fail-closed at the document level and tolerant at the row
//! level: a payload that is not a JSON array aborts the mutation, a row
//! missing its required fields is skipped.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use remsync_types::ObjectId;

use crate::error::{EngineError, EngineResult};

/// One UI-submitted row of a folder's list.
///
/// The folder itself is not part of the row; it is carried by the
/// surrounding mutation and scopes every row in the batch. `ObjectID` is
/// required; absent flags and name decode to their defaults, matching the
/// persisted record layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRow {
    #[serde(rename = "ObjectID")]
    pub object_id: ObjectId,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Active", default)]
    pub active: bool,
    #[serde(rename = "Action", default)]
    pub action: bool,
    #[serde(rename = "Delete", default)]
    pub delete: bool,
}

impl EditRow {
    /// Create a row with all flags cleared.
    pub fn new(object_id: impl Into<ObjectId>, name: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            name: name.into(),
            active: false,
            action: false,
            delete: false,
        }
    }
}

/// Decode an edit payload into rows.
///
/// Returns an error only when the document itself cannot be decoded; in
/// that case the caller must leave the working table untouched. Individual
/// rows that fail to decode are dropped with a warning.
pub fn decode_edit_rows(payload: &str) -> EngineResult<Vec<EditRow>> {
    let values: Vec<Value> =
        serde_json::from_str(payload).map_err(|e| EngineError::Payload(e.to_string()))?;

    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(row) => Some(row),
            Err(err) => {
                warn!(%err, "skipping malformed edit row");
                None
            }
        })
        .collect())
}
