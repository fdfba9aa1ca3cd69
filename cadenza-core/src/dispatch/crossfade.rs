//! Crossfade lifecycle actions.

use cadenza_types::{ActionError, ActionMeta, Diff};
use serde_json::json;

use crate::paths;

use super::Translation;

pub(super) fn create_overlap(
    clip_a: &str,
    clip_b: &str,
    length_beats: f64,
) -> Result<Translation, ActionError> {
    if length_beats <= 0.0 {
        return Err(ActionError::Domain("lengthBeats must be > 0".into()));
    }
    let id = paths::xf_id(clip_a, clip_b);
    let value = json!({
        "id": id.clone(),
        "clipA": clip_a,
        "clipB": clip_b,
        "lengthBeats": length_beats,
    });
    Ok(Translation::with_meta(ActionMeta::xf(id), vec![Diff::add("/xf/-", value)]))
}

pub(super) fn update(
    xf_id: &str,
    length_beats: Option<f64>,
    curve: Option<&str>,
) -> Result<Translation, ActionError> {
    if let Some(len) = length_beats {
        if len <= 0.0 {
            return Err(ActionError::Domain("lengthBeats must be > 0".into()));
        }
    }
    let mut diffs = Vec::new();
    if let Some(len) = length_beats {
        diffs.push(Diff::replace(format!("/xf/{}/lengthBeats", xf_id), len));
    }
    if let Some(c) = curve {
        diffs.push(Diff::replace(format!("/xf/{}/curve", xf_id), c));
    }
    if diffs.is_empty() {
        return Err(ActionError::Domain("xf.update requires lengthBeats or curve".into()));
    }
    Ok(Translation::diffs(diffs))
}

pub(super) fn remove(xf_id: &str) -> Translation {
    Translation::diffs(vec![Diff::remove(format!("/xf/{}", xf_id))])
}
