//! The diff wire format — a JSON-Patch-like primitive mutation.
//!
//! Diffs are the sole artifact the engine hands back to the host: either a
//! UI preview (dry run) or the input to the real mutation layer (apply).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive mutation kind. The vocabulary is deliberately restricted to the
/// three ops the mutation layer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffOp {
    Add,
    Replace,
    Remove,
}

impl DiffOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffOp::Add => "add",
            DiffOp::Replace => "replace",
            DiffOp::Remove => "remove",
        }
    }
}

/// One primitive mutation against the project document, addressed by a
/// slash-delimited path (`/tracks/-` means append).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diff {
    pub op: DiffOp,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Diff {
    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { op: DiffOp::Add, path: path.into(), value: Some(value.into()) }
    }

    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { op: DiffOp::Replace, path: path.into(), value: Some(value.into()) }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self { op: DiffOp::Remove, path: path.into(), value: None }
    }

    /// Well-formedness check: absolute, no empty segments.
    pub fn path_is_well_formed(&self) -> bool {
        self.path.starts_with('/') && !self.path[1..].split('/').any(str::is_empty)
    }
}
