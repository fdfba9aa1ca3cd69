//! The action vocabulary.
//!
//! Actions are the high-level edit commands a host (typically fed by a
//! language-model planner) submits against a project document. The wire form
//! is a tagged record — `{"type": "track.add", ...}` — and the tag selects
//! both the schema and the translation rule. The enum is closed: anything
//! outside this vocabulary is rejected with an unsupported-type error before
//! translation is attempted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Addressing triple for a single effect parameter:
/// `/fx/{trackId}/{unit}/{path}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxTarget {
    pub track_id: String,
    pub unit: String,
    pub path: String,
}

/// Addressing pair for a whole effect unit on a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxUnitRef {
    pub track_id: String,
    pub unit: String,
}

/// One entry of an ordered effect-parameter batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamChange {
    pub path: String,
    pub value: f64,
}

/// One entry of an equalizer batch edit. Values stay loose (`Value`) because
/// band fields mix numbers and flags (`freq`, `gain`, `q`, `on`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqChange {
    pub path: String,
    pub value: Value,
}

/// All supported action types, tagged by their wire `type` string.
///
/// Field names follow the external camelCase contract. Unknown extra fields
/// are ignored (serde internally-tagged enums cannot deny them); unknown
/// *types* are rejected upstream of deserialization via [`KNOWN_TYPES`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Action {
    #[serde(rename = "project.setTitle")]
    ProjectSetTitle { title: String },
    #[serde(rename = "project.setMeta")]
    ProjectSetMeta { meta: serde_json::Map<String, Value> },
    #[serde(rename = "project.save")]
    ProjectSave {},
    #[serde(rename = "project.open")]
    ProjectOpen { path: String },

    #[serde(rename = "transport.play")]
    TransportPlay {},
    #[serde(rename = "transport.stop")]
    TransportStop {},
    #[serde(rename = "transport.set")]
    TransportSet {
        #[serde(default)]
        playing: Option<bool>,
        #[serde(default)]
        position_beat: Option<f64>,
    },

    #[serde(rename = "loop.set")]
    LoopSet { start_beat: f64, length_beats: f64 },

    #[serde(rename = "track.add")]
    TrackAdd {
        name: String,
        #[serde(default)]
        color: Option<String>,
    },
    #[serde(rename = "track.rename")]
    TrackRename { track_id: String, name: String },
    #[serde(rename = "track.setGain")]
    TrackSetGain { track_id: String, gain: f64 },
    #[serde(rename = "track.setColor")]
    TrackSetColor { track_id: String, color: String },
    #[serde(rename = "track.toggleMute")]
    TrackToggleMute { track_id: String },
    #[serde(rename = "track.delete")]
    TrackDelete { track_id: String },
    #[serde(rename = "tracks.setActive")]
    TracksSetActive { track_ids: Vec<String> },

    #[serde(rename = "clip.addAudio")]
    ClipAddAudio {
        track_id: String,
        start_beat: f64,
        path: String,
    },
    #[serde(rename = "clip.move")]
    ClipMove { clip_id: String, start_beat: f64 },
    #[serde(rename = "clip.delete")]
    ClipDelete { clip_id: String },
    #[serde(rename = "clips.deleteMany")]
    ClipsDeleteMany { clip_ids: Vec<String> },
    #[serde(rename = "clip.duplicate")]
    ClipDuplicate {
        clip_id: String,
        #[serde(default)]
        start_beat: Option<f64>,
    },
    #[serde(rename = "clip.splitAtBeat")]
    ClipSplitAtBeat { clip_id: String, beat: f64 },
    #[serde(rename = "clip.rename")]
    ClipRename { clip_id: String, name: String },
    #[serde(rename = "clip.setLayer")]
    ClipSetLayer { clip_id: String, layer: i64 },
    #[serde(rename = "clip.setBounds")]
    ClipSetBounds {
        clip_id: String,
        #[serde(default)]
        start_beat: Option<f64>,
        #[serde(default)]
        length_beats: Option<f64>,
    },
    #[serde(rename = "clip.setGainPan")]
    ClipSetGainPan {
        clip_id: String,
        #[serde(default)]
        gain: Option<f64>,
        #[serde(default)]
        pan: Option<f64>,
    },

    #[serde(rename = "fx.setParam")]
    FxSetParam { target: FxTarget, value: f64 },
    #[serde(rename = "fx.setParams")]
    FxSetParams {
        target: FxUnitRef,
        params: Vec<ParamChange>,
    },
    #[serde(rename = "fx.addUnit")]
    FxAddUnit {
        track_id: String,
        unit: String,
        #[serde(default)]
        slot: Option<u32>,
    },
    #[serde(rename = "fx.setBypass")]
    FxSetBypass {
        track_id: String,
        unit: String,
        bypass: bool,
    },
    #[serde(rename = "fx.removeUnit")]
    FxRemoveUnit {
        track_id: String,
        #[serde(default)]
        fx_id: Option<String>,
    },

    #[serde(rename = "eq.batchSet")]
    EqBatchSet {
        track_id: String,
        changes: Vec<EqChange>,
    },
    #[serde(rename = "eq.addUnit")]
    EqAddUnit {
        track_id: String,
        #[serde(default)]
        slot: Option<u32>,
    },
    #[serde(rename = "eq.setParam")]
    EqSetParam {
        track_id: String,
        path: String,
        value: Value,
    },

    #[serde(rename = "xf.createOverlap")]
    XfCreateOverlap {
        clip_a: String,
        clip_b: String,
        length_beats: f64,
    },
    #[serde(rename = "xf.update")]
    XfUpdate {
        xf_id: String,
        #[serde(default)]
        length_beats: Option<f64>,
        #[serde(default)]
        curve: Option<String>,
    },
    #[serde(rename = "xf.remove")]
    XfRemove { xf_id: String },
}

/// The full wire vocabulary, in the order the external schema enumerates it.
/// Hosts can feed this straight into a tool schema; the dispatcher uses it to
/// distinguish unsupported types from structurally broken ones.
pub const KNOWN_TYPES: [&str; 36] = [
    "project.setTitle",
    "project.setMeta",
    "project.save",
    "project.open",
    "transport.play",
    "transport.stop",
    "transport.set",
    "loop.set",
    "track.add",
    "track.rename",
    "track.setGain",
    "track.setColor",
    "track.toggleMute",
    "track.delete",
    "tracks.setActive",
    "clip.addAudio",
    "clip.move",
    "clip.delete",
    "clips.deleteMany",
    "clip.duplicate",
    "clip.splitAtBeat",
    "clip.rename",
    "clip.setLayer",
    "clip.setBounds",
    "clip.setGainPan",
    "fx.setParam",
    "fx.setParams",
    "fx.addUnit",
    "fx.setBypass",
    "fx.removeUnit",
    "eq.batchSet",
    "eq.addUnit",
    "eq.setParam",
    "xf.createOverlap",
    "xf.update",
    "xf.remove",
];

/// True if `t` is in the supported vocabulary.
pub fn is_known_type(t: &str) -> bool {
    KNOWN_TYPES.contains(&t)
}

impl Action {
    /// The wire `type` string for this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::ProjectSetTitle { .. } => "project.setTitle",
            Action::ProjectSetMeta { .. } => "project.setMeta",
            Action::ProjectSave {} => "project.save",
            Action::ProjectOpen { .. } => "project.open",
            Action::TransportPlay {} => "transport.play",
            Action::TransportStop {} => "transport.stop",
            Action::TransportSet { .. } => "transport.set",
            Action::LoopSet { .. } => "loop.set",
            Action::TrackAdd { .. } => "track.add",
            Action::TrackRename { .. } => "track.rename",
            Action::TrackSetGain { .. } => "track.setGain",
            Action::TrackSetColor { .. } => "track.setColor",
            Action::TrackToggleMute { .. } => "track.toggleMute",
            Action::TrackDelete { .. } => "track.delete",
            Action::TracksSetActive { .. } => "tracks.setActive",
            Action::ClipAddAudio { .. } => "clip.addAudio",
            Action::ClipMove { .. } => "clip.move",
            Action::ClipDelete { .. } => "clip.delete",
            Action::ClipsDeleteMany { .. } => "clips.deleteMany",
            Action::ClipDuplicate { .. } => "clip.duplicate",
            Action::ClipSplitAtBeat { .. } => "clip.splitAtBeat",
            Action::ClipRename { .. } => "clip.rename",
            Action::ClipSetLayer { .. } => "clip.setLayer",
            Action::ClipSetBounds { .. } => "clip.setBounds",
            Action::ClipSetGainPan { .. } => "clip.setGainPan",
            Action::FxSetParam { .. } => "fx.setParam",
            Action::FxSetParams { .. } => "fx.setParams",
            Action::FxAddUnit { .. } => "fx.addUnit",
            Action::FxSetBypass { .. } => "fx.setBypass",
            Action::FxRemoveUnit { .. } => "fx.removeUnit",
            Action::EqBatchSet { .. } => "eq.batchSet",
            Action::EqAddUnit { .. } => "eq.addUnit",
            Action::EqSetParam { .. } => "eq.setParam",
            Action::XfCreateOverlap { .. } => "xf.createOverlap",
            Action::XfUpdate { .. } => "xf.update",
            Action::XfRemove { .. } => "xf.remove",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tagged_deserialization() {
        let a: Action = serde_json::from_value(json!({
            "type": "track.add", "name": "Lead Vox", "color": "#ff0000"
        }))
        .unwrap();
        assert_eq!(
            a,
            Action::TrackAdd { name: "Lead Vox".into(), color: Some("#ff0000".into()) }
        );
    }

    #[test]
    fn camel_case_fields() {
        let a: Action = serde_json::from_value(json!({
            "type": "loop.set", "startBeat": 4.0, "lengthBeats": 8.0
        }))
        .unwrap();
        assert_eq!(a, Action::LoopSet { start_beat: 4.0, length_beats: 8.0 });
    }

    #[test]
    fn nested_fx_target() {
        let a: Action = serde_json::from_value(json!({
            "type": "fx.setParam",
            "target": {"trackId": "t1", "unit": "comp", "path": "threshold"},
            "value": -18
        }))
        .unwrap();
        match a {
            Action::FxSetParam { target, value } => {
                assert_eq!(target.track_id, "t1");
                assert_eq!(target.unit, "comp");
                assert_eq!(target.path, "threshold");
                assert_eq!(value, -18.0);
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn kind_matches_wire_tag_for_every_variant() {
        // Serialize each known type back out and check the tag survives.
        let samples: Vec<Action> = vec![
            Action::ProjectSetTitle { title: "x".into() },
            Action::TransportPlay {},
            Action::LoopSet { start_beat: 0.0, length_beats: 4.0 },
            Action::TrackToggleMute { track_id: "t1".into() },
            Action::ClipsDeleteMany { clip_ids: vec!["c_1".into()] },
            Action::EqBatchSet { track_id: "t1".into(), changes: vec![] },
            Action::XfRemove { xf_id: "xf_a_b".into() },
        ];
        for a in samples {
            let v = serde_json::to_value(&a).unwrap();
            assert_eq!(v["type"], a.kind());
            assert!(is_known_type(a.kind()));
        }
    }

    #[test]
    fn vocabulary_is_closed() {
        assert_eq!(KNOWN_TYPES.len(), 36);
        assert!(is_known_type("clip.splitAtBeat"));
        assert!(!is_known_type("clip.explode"));
        assert!(!is_known_type(""));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let a: Action =
            serde_json::from_value(json!({"type": "fx.removeUnit", "trackId": "t1"})).unwrap();
        assert_eq!(a, Action::FxRemoveUnit { track_id: "t1".into(), fx_id: None });
    }
}
