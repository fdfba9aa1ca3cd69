//! Plan execution — fail-fast sequencing of actions through the dispatcher.

use cadenza_types::{ActionResult, Diff, Mode};
use serde_json::Value;

use crate::dispatch::dispatch;

/// Plan length bound enforced by the host's external schema. The executor
/// itself stays total and does not reject longer plans; this constant exists
/// so hosts and the engine agree on the number.
pub const MAX_PLAN_ACTIONS: usize = 32;

/// Per-call context for translation: the values a translation is allowed to
/// depend on besides the action itself. Always passed explicitly — there is
/// no ambient configuration inside the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanContext {
    /// Root directory audio source paths must live under. Empty disables
    /// the check.
    pub project_root: String,
    /// Project tempo in beats per minute.
    pub bpm: f64,
    /// Time-signature denominator (the "beat unit").
    pub beat_unit: u32,
}

impl Default for PlanContext {
    fn default() -> Self {
        Self { project_root: String::new(), bpm: 120.0, beat_unit: 4 }
    }
}

/// Execute a plan of raw action records in order.
///
/// Returns one [`ActionResult`] per action attempted and the flat,
/// order-preserving concatenation of diffs from successful actions. The
/// first failing action stops the plan: its result is included, later
/// actions are never attempted, and diffs emitted before the failure are
/// returned as-is (in dry-run nothing was mutated; in apply mode any
/// rollback belongs to the mutation layer). This function never fails
/// outright — failure is always per-action data inside the results.
pub fn execute_plan(
    plan: &[Value],
    ctx: &PlanContext,
    mode: Mode,
) -> (Vec<ActionResult>, Vec<Diff>) {
    let mut results: Vec<ActionResult> = Vec::with_capacity(plan.len());
    let mut diffs: Vec<Diff> = Vec::new();

    log::debug!(target: "plan", "executing {} actions mode={:?}", plan.len(), mode);

    for (i, raw) in plan.iter().enumerate() {
        let (result, ds) = dispatch(raw, ctx, mode);
        let failed = !result.ok;
        if failed {
            log::warn!(
                target: "plan",
                "action {} failed: {}",
                i,
                result.error.as_deref().unwrap_or("unknown")
            );
        } else {
            diffs.extend(ds);
        }
        results.push(result);
        if failed {
            break;
        }
    }

    (results, diffs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadenza_types::DiffOp;
    use serde_json::json;

    fn ctx() -> PlanContext {
        PlanContext::default()
    }

    #[test]
    fn empty_plan_yields_empty_output() {
        let (results, diffs) = execute_plan(&[], &ctx(), Mode::DryRun);
        assert!(results.is_empty());
        assert!(diffs.is_empty());
    }

    #[test]
    fn diffs_preserve_action_order() {
        let plan = vec![
            json!({"type": "track.add", "name": "Bass"}),
            json!({"type": "transport.play"}),
            json!({"type": "loop.set", "startBeat": 0.0, "lengthBeats": 8.0}),
        ];
        let (results, diffs) = execute_plan(&plan, &ctx(), Mode::DryRun);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.ok));
        assert_eq!(diffs.len(), 4);
        assert_eq!(diffs[0].path, "/tracks/-");
        assert_eq!(diffs[1].path, "/transport/playing");
        assert_eq!(diffs[2].path, "/loop/startBeat");
        assert_eq!(diffs[3].path, "/loop/lengthBeats");
    }

    #[test]
    fn first_failure_stops_the_plan() {
        let plan = vec![
            json!({"type": "transport.play"}),
            json!({"type": "loop.set", "startBeat": 0.0, "lengthBeats": 0.0}),
            json!({"type": "transport.stop"}),
        ];
        let (results, diffs) = execute_plan(&plan, &ctx(), Mode::Apply);
        // One result per attempted action: the failing one is included,
        // the one after it is never attempted.
        assert_eq!(results.len(), 2);
        assert!(results[0].ok);
        assert!(!results[1].ok);
        assert_eq!(results[1].error.as_deref(), Some("lengthBeats must be > 0"));
        // Only the diff from the action before the failure survives.
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].path, "/transport/playing");
    }

    #[test]
    fn failure_on_first_action_yields_no_diffs() {
        let plan = vec![
            json!({"type": "bogus.op"}),
            json!({"type": "transport.play"}),
        ];
        let (results, diffs) = execute_plan(&plan, &ctx(), Mode::DryRun);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].error.as_deref(), Some("unsupported: bogus.op"));
        assert!(diffs.is_empty());
    }

    #[test]
    fn dry_run_is_deterministic() {
        let plan = vec![
            json!({"type": "track.add", "name": "Lead Vox"}),
            json!({"type": "clip.addAudio", "trackId": "t_lead_vox",
                   "startBeat": 4.0, "path": "samples/vox.wav"}),
            json!({"type": "eq.batchSet", "trackId": "t_lead_vox",
                   "changes": [{"path": "bands/0/freq", "value": 200}]}),
        ];
        let (_, first) = execute_plan(&plan, &ctx(), Mode::DryRun);
        let (_, second) = execute_plan(&plan, &ctx(), Mode::DryRun);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn mode_does_not_change_translation() {
        let plan = vec![json!({"type": "track.setGain", "trackId": "t1", "gain": -6})];
        let (_, dry) = execute_plan(&plan, &ctx(), Mode::DryRun);
        let (_, applied) = execute_plan(&plan, &ctx(), Mode::Apply);
        assert_eq!(dry, applied);
        assert_eq!(dry[0].op, DiffOp::Replace);
    }

    #[test]
    fn meta_threads_derived_ids_back() {
        let plan = vec![json!({"type": "track.add", "name": "Drums"})];
        let (results, _) = execute_plan(&plan, &ctx(), Mode::DryRun);
        let meta = results[0].meta.as_ref().unwrap();
        assert_eq!(meta.track_id.as_deref(), Some("t_drums"));
    }
}
