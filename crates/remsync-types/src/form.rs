//! Option tuples handed to the form consumer.

use serde::{Deserialize, Serialize};

/// A selectable option in a dropdown column of the configuration form.
///
/// The form consumer is out of scope here; this is the shape it expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub caption: String,
    pub value: String,
}

impl SelectOption {
    /// Create an option.
    pub fn new(caption: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            value: value.into(),
        }
    }
}
