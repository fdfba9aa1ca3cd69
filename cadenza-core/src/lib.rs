//! # cadenza-core
//!
//! Command-to-diff translation engine for a multi-track audio project.
//! An ordered plan of high-level edit actions is validated, translated into
//! primitive patch operations against the project document, and run either
//! as a non-mutating preview or as a committed sequence, stopping at the
//! first failure. The engine performs no mutation itself: the diffs it
//! returns are the contract with the external mutation layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadenza_core::{execute_plan, PlanContext};
//! use cadenza_types::Mode;
//! use serde_json::json;
//!
//! let ctx = PlanContext { project_root: String::new(), bpm: 120.0, beat_unit: 4 };
//! let plan = vec![
//!     json!({"type": "track.add", "name": "Lead Vox"}),
//!     json!({"type": "loop.set", "startBeat": 0.0, "lengthBeats": 8.0}),
//! ];
//!
//! let (results, diffs) = execute_plan(&plan, &ctx, Mode::DryRun);
//! assert!(results.iter().all(|r| r.ok));
//! assert_eq!(diffs.len(), 3);
//! ```
//!
//! ## Module Overview
//!
//! - [`plan`] — `execute_plan()`, the single entry point: fail-fast
//!   sequencing, one result per attempted action, order-preserving diffs;
//!   plus `PlanContext`, the explicit per-call context
//! - [`dispatch`] — `dispatch()` — validation and translation of one action
//!   through the closed, typed dispatch table
//! - [`paths`] — document paths and derived identifiers (track, clip,
//!   effect-unit, crossfade ids)
//! - [`units`] — beat to seconds conversion
//! - [`config`] — TOML configuration (embedded defaults + user override)
//!   for hosts that want configured context defaults

pub mod config;
pub mod dispatch;
pub mod paths;
pub mod plan;
pub mod units;

pub use dispatch::dispatch;
pub use plan::{execute_plan, PlanContext, MAX_PLAN_ACTIONS};
