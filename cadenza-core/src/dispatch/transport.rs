//! Transport and loop actions.

use cadenza_types::{ActionError, Diff};

use super::Translation;

pub(super) fn play() -> Translation {
    Translation::diffs(vec![Diff::replace("/transport/playing", true)])
}

pub(super) fn stop() -> Translation {
    Translation::diffs(vec![Diff::replace("/transport/playing", false)])
}

/// Fan-out over the supplied fields, in fixed order (playing, positionBeat).
pub(super) fn set(
    playing: Option<bool>,
    position_beat: Option<f64>,
) -> Result<Translation, ActionError> {
    let mut diffs = Vec::new();
    if let Some(p) = playing {
        diffs.push(Diff::replace("/transport/playing", p));
    }
    if let Some(beat) = position_beat {
        diffs.push(Diff::replace("/transport/positionBeat", beat));
    }
    if diffs.is_empty() {
        return Err(ActionError::Domain(
            "transport.set requires playing or positionBeat".into(),
        ));
    }
    Ok(Translation::diffs(diffs))
}

pub(super) fn set_loop(start_beat: f64, length_beats: f64) -> Result<Translation, ActionError> {
    if length_beats <= 0.0 {
        return Err(ActionError::Domain("lengthBeats must be > 0".into()));
    }
    Ok(Translation::diffs(vec![
        Diff::replace("/loop/startBeat", start_beat),
        Diff::replace("/loop/lengthBeats", length_beats),
    ]))
}
