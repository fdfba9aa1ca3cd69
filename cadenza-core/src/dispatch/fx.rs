//! Effect-unit and equalizer actions.

use cadenza_types::{ActionError, ActionMeta, Diff, EqChange, FxTarget, FxUnitRef, ParamChange};
use serde_json::{json, Value};

use crate::paths;

use super::Translation;

pub(super) fn set_param(target: &FxTarget, value: f64) -> Translation {
    let path = paths::fx_field_path(&target.track_id, &target.unit, &target.path);
    Translation::diffs(vec![Diff::replace(path, value)])
}

/// Ordered fan-out: one replace per supplied parameter.
pub(super) fn set_params(
    target: &FxUnitRef,
    params: &[ParamChange],
) -> Result<Translation, ActionError> {
    if params.is_empty() {
        return Err(ActionError::Domain("params must not be empty".into()));
    }
    let diffs = params
        .iter()
        .map(|p| {
            Diff::replace(
                paths::fx_field_path(&target.track_id, &target.unit, &p.path),
                p.value,
            )
        })
        .collect();
    Ok(Translation::diffs(diffs))
}

pub(super) fn add_unit(track_id: &str, unit: &str, slot: Option<u32>) -> Translation {
    let id = paths::fx_unit_id(track_id, unit);
    let value = json!({"id": id.clone(), "unit": unit});
    Translation::with_meta(
        ActionMeta::fx(id),
        vec![Diff::add(paths::fx_slot_path(track_id, slot), value)],
    )
}

pub(super) fn set_bypass(track_id: &str, unit: &str, bypass: bool) -> Translation {
    Translation::diffs(vec![Diff::replace(
        paths::fx_field_path(track_id, unit, "bypass"),
        bypass,
    )])
}

/// Removal with fallback: with a precise id we remove the unit; without one
/// we degrade to bypassing the conventionally-assumed reverb, so looser
/// commands from older planners keep working.
pub(super) fn remove_unit(track_id: &str, fx_id: Option<&str>) -> Translation {
    match fx_id {
        Some(id) => Translation::diffs(vec![Diff::remove(format!(
            "/fx/{}/units/{}",
            track_id, id
        ))]),
        None => Translation::diffs(vec![Diff::replace(
            format!("/fx/{}/reverb/bypass", track_id),
            true,
        )]),
    }
}

/// Equalizer batch edit. Short keys are prefixed into the track's eq unit;
/// keys that are already absolute paths pass through, letting callers
/// address arbitrary nested sub-fields.
pub(super) fn eq_batch_set(
    track_id: &str,
    changes: &[EqChange],
) -> Result<Translation, ActionError> {
    if changes.is_empty() {
        return Err(ActionError::Domain("changes must not be empty".into()));
    }
    let diffs = changes
        .iter()
        .map(|c| {
            Diff::replace(
                paths::fx_field_path(track_id, "eq", &c.path),
                c.value.clone(),
            )
        })
        .collect();
    Ok(Translation::diffs(diffs))
}

pub(super) fn eq_add_unit(track_id: &str, slot: Option<u32>) -> Translation {
    add_unit(track_id, "eq", slot)
}

pub(super) fn eq_set_param(track_id: &str, path: &str, value: &Value) -> Translation {
    Translation::diffs(vec![Diff::replace(
        paths::fx_field_path(track_id, "eq", path),
        value.clone(),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_param_builds_the_unit_path() {
        let target = FxTarget {
            track_id: "t1".into(),
            unit: "comp".into(),
            path: "threshold".into(),
        };
        let t = set_param(&target, -18.0);
        assert_eq!(t.diffs, vec![Diff::replace("/fx/t1/comp/threshold", -18.0)]);
    }

    #[test]
    fn set_params_preserves_input_order() {
        let target = FxUnitRef { track_id: "t1".into(), unit: "comp".into() };
        let params = vec![
            ParamChange { path: "ratio".into(), value: 4.0 },
            ParamChange { path: "attack".into(), value: 0.01 },
        ];
        let t = set_params(&target, &params).unwrap();
        assert_eq!(t.diffs[0].path, "/fx/t1/comp/ratio");
        assert_eq!(t.diffs[1].path, "/fx/t1/comp/attack");
        assert!(set_params(&target, &[]).is_err());
    }

    #[test]
    fn add_unit_appends_without_slot_and_indexes_with_one() {
        let t = add_unit("t1", "verb", None);
        assert_eq!(t.meta.unwrap().fx_id.as_deref(), Some("fx_t1_verb"));
        assert_eq!(t.diffs[0].path, "/fx/t1/units/-");
        assert_eq!(t.diffs[0].value, Some(json!({"id": "fx_t1_verb", "unit": "verb"})));

        let slotted = add_unit("t1", "verb", Some(1));
        assert_eq!(slotted.diffs[0].path, "/fx/t1/units/1");
    }

    #[test]
    fn set_bypass_is_a_boolean_replace() {
        let t = set_bypass("t1", "comp", true);
        assert_eq!(t.diffs, vec![Diff::replace("/fx/t1/comp/bypass", true)]);
    }

    #[test]
    fn remove_unit_with_id_removes() {
        let t = remove_unit("t1", Some("fx_t1_comp"));
        assert_eq!(t.diffs, vec![Diff::remove("/fx/t1/units/fx_t1_comp")]);
    }

    #[test]
    fn remove_unit_without_id_bypasses_the_default_reverb() {
        let t = remove_unit("t1", None);
        assert_eq!(t.diffs, vec![Diff::replace("/fx/t1/reverb/bypass", true)]);
    }

    #[test]
    fn eq_batch_prefixes_short_keys_and_passes_absolute_paths() {
        let changes = vec![
            EqChange { path: "bands/0/freq".into(), value: json!(200) },
            EqChange { path: "/fx/t1/custom/gain".into(), value: json!(3) },
        ];
        let t = eq_batch_set("t1", &changes).unwrap();
        assert_eq!(
            t.diffs,
            vec![
                Diff::replace("/fx/t1/eq/bands/0/freq", json!(200)),
                Diff::replace("/fx/t1/custom/gain", json!(3)),
            ]
        );
    }

    #[test]
    fn eq_add_unit_is_fixed_to_eq() {
        let t = eq_add_unit("t1", None);
        assert_eq!(t.meta.unwrap().fx_id.as_deref(), Some("fx_t1_eq"));
        assert_eq!(t.diffs[0].value, Some(json!({"id": "fx_t1_eq", "unit": "eq"})));
    }

    #[test]
    fn eq_set_param_uses_the_same_join_rule() {
        let t = eq_set_param("t1", "bands/2/q", &json!(0.7));
        assert_eq!(t.diffs, vec![Diff::replace("/fx/t1/eq/bands/2/q", json!(0.7))]);
    }
}
