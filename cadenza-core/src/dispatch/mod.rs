//! Action dispatch — validation and translation of one action at a time.
//!
//! The raw wire record is decoded into the closed [`Action`] vocabulary
//! first, so every translation function works on typed fields rather than
//! untyped lookups. Decoding distinguishes the three boundary failures
//! (missing type, unsupported type, structural mismatch); domain checks live
//! inside the per-domain translation modules.

mod clip;
mod crossfade;
mod fx;
mod project;
mod track;
mod transport;

use cadenza_types::{is_known_type, Action, ActionError, ActionMeta, ActionResult, Diff, Mode};
use serde_json::Value;

use crate::plan::PlanContext;

/// Output of a successful translation: the diffs plus any derived ids to
/// hand back to the caller.
#[derive(Debug, Default)]
pub struct Translation {
    pub meta: Option<ActionMeta>,
    pub diffs: Vec<Diff>,
}

impl Translation {
    pub(crate) fn diffs(diffs: Vec<Diff>) -> Self {
        Self { meta: None, diffs }
    }

    pub(crate) fn with_meta(meta: ActionMeta, diffs: Vec<Diff>) -> Self {
        Self { meta: Some(meta), diffs }
    }
}

/// Validate and translate one raw action record.
///
/// Never panics and never returns an outer error: failures come back as
/// `{ok: false, error}` with zero diffs. `mode` does not change what is
/// produced — the engine is a pure function of `(action, ctx)` — it only
/// records what the caller intends to do with the diffs.
pub fn dispatch(raw: &Value, ctx: &PlanContext, mode: Mode) -> (ActionResult, Vec<Diff>) {
    let action = match decode(raw) {
        Ok(a) => a,
        Err(e) => {
            log::warn!(target: "dispatch", "rejected action: {}", e);
            return (ActionResult::err(e), Vec::new());
        }
    };

    log::debug!(target: "dispatch", "{} mode={:?}", action.kind(), mode);

    match translate(&action, ctx) {
        Ok(t) => {
            let result = match t.meta {
                Some(meta) => ActionResult::ok_with(meta),
                None => ActionResult::ok(),
            };
            (result, t.diffs)
        }
        Err(e) => {
            log::warn!(target: "dispatch", "{} failed: {}", action.kind(), e);
            (ActionResult::err(e), Vec::new())
        }
    }
}

/// Decode a raw record into the typed vocabulary.
fn decode(raw: &Value) -> Result<Action, ActionError> {
    let tag = match raw.get("type").and_then(Value::as_str) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(ActionError::MissingType),
    };
    if !is_known_type(tag) {
        return Err(ActionError::Unsupported(tag.to_string()));
    }
    serde_json::from_value(raw.clone()).map_err(|e| ActionError::Structural(e.to_string()))
}

/// The dispatch table: one arm per action type, routing to a pure
/// translation function in the matching domain module.
fn translate(action: &Action, ctx: &PlanContext) -> Result<Translation, ActionError> {
    match action {
        Action::ProjectSetTitle { title } => Ok(project::set_title(title)),
        Action::ProjectSetMeta { meta } => project::set_meta(meta),
        Action::ProjectSave {} => Ok(project::save()),
        Action::ProjectOpen { path } => Ok(project::open(path)),

        Action::TransportPlay {} => Ok(transport::play()),
        Action::TransportStop {} => Ok(transport::stop()),
        Action::TransportSet { playing, position_beat } => {
            transport::set(*playing, *position_beat)
        }
        Action::LoopSet { start_beat, length_beats } => {
            transport::set_loop(*start_beat, *length_beats)
        }

        Action::TrackAdd { name, color } => Ok(track::add(name, color.as_deref())),
        Action::TrackRename { track_id, name } => Ok(track::rename(track_id, name)),
        Action::TrackSetGain { track_id, gain } => Ok(track::set_gain(track_id, *gain)),
        Action::TrackSetColor { track_id, color } => Ok(track::set_color(track_id, color)),
        Action::TrackToggleMute { track_id } => Ok(track::toggle_mute(track_id)),
        Action::TrackDelete { track_id } => Ok(track::delete(track_id)),
        Action::TracksSetActive { track_ids } => Ok(track::set_active(track_ids)),

        Action::ClipAddAudio { track_id, start_beat, path } => {
            clip::add_audio(track_id, *start_beat, path, ctx)
        }
        Action::ClipMove { clip_id, start_beat } => Ok(clip::mv(clip_id, *start_beat)),
        Action::ClipDelete { clip_id } => Ok(clip::delete(clip_id)),
        Action::ClipsDeleteMany { clip_ids } => clip::delete_many(clip_ids),
        Action::ClipDuplicate { clip_id, start_beat } => {
            Ok(clip::duplicate(clip_id, *start_beat))
        }
        Action::ClipSplitAtBeat { clip_id, beat } => clip::split_at_beat(clip_id, *beat),
        Action::ClipRename { clip_id, name } => Ok(clip::rename(clip_id, name)),
        Action::ClipSetLayer { clip_id, layer } => Ok(clip::set_layer(clip_id, *layer)),
        Action::ClipSetBounds { clip_id, start_beat, length_beats } => {
            clip::set_bounds(clip_id, *start_beat, *length_beats)
        }
        Action::ClipSetGainPan { clip_id, gain, pan } => {
            clip::set_gain_pan(clip_id, *gain, *pan)
        }

        Action::FxSetParam { target, value } => Ok(fx::set_param(target, *value)),
        Action::FxSetParams { target, params } => fx::set_params(target, params),
        Action::FxAddUnit { track_id, unit, slot } => Ok(fx::add_unit(track_id, unit, *slot)),
        Action::FxSetBypass { track_id, unit, bypass } => {
            Ok(fx::set_bypass(track_id, unit, *bypass))
        }
        Action::FxRemoveUnit { track_id, fx_id } => {
            Ok(fx::remove_unit(track_id, fx_id.as_deref()))
        }

        Action::EqBatchSet { track_id, changes } => fx::eq_batch_set(track_id, changes),
        Action::EqAddUnit { track_id, slot } => Ok(fx::eq_add_unit(track_id, *slot)),
        Action::EqSetParam { track_id, path, value } => {
            Ok(fx::eq_set_param(track_id, path, value))
        }

        Action::XfCreateOverlap { clip_a, clip_b, length_beats } => {
            crossfade::create_overlap(clip_a, clip_b, *length_beats)
        }
        Action::XfUpdate { xf_id, length_beats, curve } => {
            crossfade::update(xf_id, *length_beats, curve.as_deref())
        }
        Action::XfRemove { xf_id } => Ok(crossfade::remove(xf_id)),
    }
}
