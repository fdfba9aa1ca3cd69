//! Clip lifecycle and placement actions.

use cadenza_types::{ActionError, ActionMeta, Diff};
use serde_json::json;

use crate::paths;
use crate::plan::PlanContext;
use crate::units;

use super::Translation;

pub(super) fn add_audio(
    track_id: &str,
    start_beat: f64,
    path: &str,
    ctx: &PlanContext,
) -> Result<Translation, ActionError> {
    if !ctx.project_root.is_empty() && !path.starts_with(&ctx.project_root) {
        return Err(ActionError::Domain(format!("path outside project root: {}", path)));
    }
    let id = paths::clip_id_from_path(path);
    let start_sec = units::beats_to_seconds(start_beat, ctx.bpm, ctx.beat_unit);
    let value = json!({
        "id": id.clone(),
        "trackId": track_id,
        "startBeat": start_beat,
        "startSec": start_sec,
        "path": path,
    });
    Ok(Translation::with_meta(ActionMeta::clip(id), vec![Diff::add("/clips/-", value)]))
}

pub(super) fn mv(clip_id: &str, start_beat: f64) -> Translation {
    Translation::diffs(vec![Diff::replace(
        format!("/clips/{}/startBeat", clip_id),
        start_beat,
    )])
}

pub(super) fn delete(clip_id: &str) -> Translation {
    Translation::diffs(vec![Diff::remove(format!("/clips/{}", clip_id))])
}

/// One remove per clip, in input order.
pub(super) fn delete_many(clip_ids: &[String]) -> Result<Translation, ActionError> {
    if clip_ids.is_empty() {
        return Err(ActionError::Domain("clipIds must not be empty".into()));
    }
    let diffs = clip_ids
        .iter()
        .map(|id| Diff::remove(format!("/clips/{}", id)))
        .collect();
    Ok(Translation::diffs(diffs))
}

/// The duplicate gets a deterministic derived id; the mutation layer copies
/// the rest of the source clip's fields.
pub(super) fn duplicate(clip_id: &str, start_beat: Option<f64>) -> Translation {
    let id = paths::clip_id_from_path(&format!("{}/dup", clip_id));
    let mut value = json!({"id": id.clone(), "sourceId": clip_id});
    if let Some(beat) = start_beat {
        value["startBeat"] = json!(beat);
    }
    Translation::with_meta(ActionMeta::clip(id), vec![Diff::add("/clips/-", value)])
}

/// Emits the right-hand clip of the split. The engine does not know clip
/// bounds, so trimming the left-hand clip is the mutation layer's job.
pub(super) fn split_at_beat(clip_id: &str, beat: f64) -> Result<Translation, ActionError> {
    if beat <= 0.0 {
        return Err(ActionError::Domain("beat must be > 0".into()));
    }
    let id = paths::clip_id_from_path(&format!("{}@{}", clip_id, beat));
    let value = json!({"id": id.clone(), "sourceId": clip_id, "startBeat": beat});
    Ok(Translation::with_meta(ActionMeta::clip(id), vec![Diff::add("/clips/-", value)]))
}

pub(super) fn rename(clip_id: &str, name: &str) -> Translation {
    Translation::diffs(vec![Diff::replace(format!("/clips/{}/name", clip_id), name)])
}

pub(super) fn set_layer(clip_id: &str, layer: i64) -> Translation {
    Translation::diffs(vec![Diff::replace(format!("/clips/{}/layer", clip_id), layer)])
}

pub(super) fn set_bounds(
    clip_id: &str,
    start_beat: Option<f64>,
    length_beats: Option<f64>,
) -> Result<Translation, ActionError> {
    if let Some(len) = length_beats {
        if len <= 0.0 {
            return Err(ActionError::Domain("lengthBeats must be > 0".into()));
        }
    }
    let mut diffs = Vec::new();
    if let Some(beat) = start_beat {
        diffs.push(Diff::replace(format!("/clips/{}/startBeat", clip_id), beat));
    }
    if let Some(len) = length_beats {
        diffs.push(Diff::replace(format!("/clips/{}/lengthBeats", clip_id), len));
    }
    if diffs.is_empty() {
        return Err(ActionError::Domain(
            "clip.setBounds requires startBeat or lengthBeats".into(),
        ));
    }
    Ok(Translation::diffs(diffs))
}

pub(super) fn set_gain_pan(
    clip_id: &str,
    gain: Option<f64>,
    pan: Option<f64>,
) -> Result<Translation, ActionError> {
    if let Some(p) = pan {
        if !(-1.0..=1.0).contains(&p) {
            return Err(ActionError::Domain("pan must be within [-1, 1]".into()));
        }
    }
    let mut diffs = Vec::new();
    if let Some(g) = gain {
        diffs.push(Diff::replace(format!("/clips/{}/gain", clip_id), g));
    }
    if let Some(p) = pan {
        diffs.push(Diff::replace(format!("/clips/{}/pan", clip_id), p));
    }
    if diffs.is_empty() {
        return Err(ActionError::Domain("clip.setGainPan requires gain or pan".into()));
    }
    Ok(Translation::diffs(diffs))
}
