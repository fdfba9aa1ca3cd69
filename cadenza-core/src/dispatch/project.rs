//! Project metadata actions.

use cadenza_types::{ActionError, Diff};
use serde_json::{Map, Value};

use super::Translation;

pub(super) fn set_title(title: &str) -> Translation {
    Translation::diffs(vec![Diff::replace("/project/title", title)])
}

/// One replace per metadata entry. serde_json's map iterates in key order,
/// so the fan-out is deterministic.
pub(super) fn set_meta(meta: &Map<String, Value>) -> Result<Translation, ActionError> {
    if meta.is_empty() {
        return Err(ActionError::Domain("meta must not be empty".into()));
    }
    let diffs = meta
        .iter()
        .map(|(key, value)| Diff::replace(format!("/project/{}", key), value.clone()))
        .collect();
    Ok(Translation::diffs(diffs))
}

/// Persistence is the host's concern; the action is accepted so plans that
/// end with a save keep working, but there is no document field to patch.
pub(super) fn save() -> Translation {
    Translation::diffs(Vec::new())
}

pub(super) fn open(path: &str) -> Translation {
    Translation::diffs(vec![Diff::replace("/project/path", path)])
}
