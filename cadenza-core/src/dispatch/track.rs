//! Track lifecycle and property actions.

use cadenza_types::{ActionMeta, Diff};
use serde_json::{json, Value};

use crate::paths;

use super::Translation;

pub(super) fn add(name: &str, color: Option<&str>) -> Translation {
    let id = paths::track_id_from_name(name);
    let mut value = json!({"id": id.clone(), "name": name});
    if let Some(c) = color {
        value["color"] = Value::from(c);
    }
    Translation::with_meta(ActionMeta::track(id), vec![Diff::add("/tracks/-", value)])
}

pub(super) fn rename(track_id: &str, name: &str) -> Translation {
    Translation::diffs(vec![Diff::replace(format!("/tracks/{}/name", track_id), name)])
}

pub(super) fn set_gain(track_id: &str, gain: f64) -> Translation {
    Translation::diffs(vec![Diff::replace(format!("/tracks/{}/gain", track_id), gain)])
}

pub(super) fn set_color(track_id: &str, color: &str) -> Translation {
    Translation::diffs(vec![Diff::replace(format!("/tracks/{}/color", track_id), color)])
}

/// The engine has no view of current document state, so the toggle degrades
/// to forcing mute on — the conventional safe default the upstream planner
/// relies on.
pub(super) fn toggle_mute(track_id: &str) -> Translation {
    Translation::diffs(vec![Diff::replace(format!("/tracks/{}/mute", track_id), true)])
}

pub(super) fn delete(track_id: &str) -> Translation {
    Translation::diffs(vec![Diff::remove(format!("/tracks/{}", track_id))])
}

pub(super) fn set_active(track_ids: &[String]) -> Translation {
    Translation::diffs(vec![Diff::replace("/tracks/active", json!(track_ids))])
}
