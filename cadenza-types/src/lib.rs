//! # cadenza-types
//!
//! Shared type definitions for the cadenza plan engine.
//! This crate contains the action vocabulary, the diff wire format, and the
//! per-action outcome types used across cadenza-core and its hosts.

pub mod action;
pub mod diff;

pub use action::*;
pub use diff::{Diff, DiffOp};

use serde::{Deserialize, Serialize};

/// Execution mode for a plan.
///
/// `DryRun` computes diffs without any assumed external mutation; `Apply`
/// marks the diffs as intended for commitment by the mutation layer. The
/// engine translates identically in both modes — the flag changes what the
/// *caller* is allowed to do with the output, never the output itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "dryRun")]
    DryRun,
    #[serde(rename = "apply")]
    Apply,
}

/// Derived identifiers returned to the caller alongside a successful action.
///
/// Later actions in the same plan cannot see document state mutated by
/// earlier ones, so creation actions hand their minted ids back here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fx_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xf_id: Option<String>,
}

impl ActionMeta {
    pub fn track(id: impl Into<String>) -> Self {
        Self { track_id: Some(id.into()), ..Self::default() }
    }

    pub fn clip(id: impl Into<String>) -> Self {
        Self { clip_id: Some(id.into()), ..Self::default() }
    }

    pub fn fx(id: impl Into<String>) -> Self {
        Self { fx_id: Some(id.into()), ..Self::default() }
    }

    pub fn xf(id: impl Into<String>) -> Self {
        Self { xf_id: Some(id.into()), ..Self::default() }
    }
}

/// Per-action outcome. One of these is produced for every action attempted,
/// whether or not it translated successfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ActionMeta>,
}

impl ActionResult {
    pub fn ok() -> Self {
        Self { ok: true, error: None, meta: None }
    }

    pub fn ok_with(meta: ActionMeta) -> Self {
        Self { ok: true, error: None, meta: Some(meta) }
    }

    pub fn err(e: ActionError) -> Self {
        Self { ok: false, error: Some(e.to_string()), meta: None }
    }
}

/// Why an action failed to translate.
///
/// All variants are local, recoverable failures: they end the current action
/// (and, through fail-fast sequencing, the rest of the plan) but never
/// escape as a panic or an outer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The action record carries no `type` tag.
    MissingType,
    /// The `type` tag is not in the known vocabulary.
    Unsupported(String),
    /// A required field is missing or has the wrong shape.
    Structural(String),
    /// A field value violates a stated invariant.
    Domain(String),
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::MissingType => write!(f, "missing type"),
            ActionError::Unsupported(t) => write!(f, "unsupported: {}", t),
            ActionError::Structural(msg) => write!(f, "{}", msg),
            ActionError::Domain(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ActionError {}
