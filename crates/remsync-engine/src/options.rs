//! Dropdown option derivation for the configuration form.
//!
//! The form consumer renders two dropdown columns: the remote key of a
//! target and the folder a root binds to. Both option lists are derived
//! here; rendering itself is out of scope.

use tracing::warn;

use remsync_keys::KeyProvider;
use remsync_types::{ObjectId, SelectOption, Target};

/// Caption of the sentinel entry leading every key option list.
pub const PLEASE_SELECT_CAPTION: &str = "Please select...";

/// Folder options: one entry per target with a non-empty name.
pub fn folder_options(targets: &[Target]) -> Vec<SelectOption> {
    targets
        .iter()
        .filter(|t| !t.name.is_empty())
        .map(|t| SelectOption::new(t.name.clone(), t.name.clone()))
        .collect()
}

/// Remote key options from the secrets provider addressed by `source`.
///
/// The sentinel entry always comes first. An unset or invalid source, and
/// any provider failure, degrade to the sentinel alone — key listing is
/// never allowed to fail the form.
pub fn key_options(provider: &dyn KeyProvider, source: ObjectId) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new(PLEASE_SELECT_CAPTION, "")];

    if !source.is_valid() {
        return options;
    }
    match provider.list_keys(source) {
        Ok(keys) => {
            options.extend(keys.into_iter().map(|key| SelectOption::new(key.clone(), key)));
        }
        Err(err) => {
            warn!(%source, %err, "key provider unavailable; offering no keys");
        }
    }
    options
}
