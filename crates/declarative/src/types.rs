//! Core types for declarative resource management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Current or desired state of a resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceState {
    /// Resource exists/is configured
    #[default]
    Present,
    /// Resource does not exist/is not configured
    Absent,
}

impl ResourceState {
    /// Check if state represents presence
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }

    /// Check if state represents absence
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// State matching a presence check
    pub fn from_presence(present: bool) -> Self {
        if present { Self::Present } else { Self::Absent }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A state string that is neither `present` nor `absent`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid state '{0}': expected 'present' or 'absent'")]
pub struct ParseStateError(pub String);

impl FromStr for ResourceState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            other => Err(ParseStateError(other.to_string())),
        }
    }
}

/// Where a resource is in its decide-then-act lifecycle
///
/// `Checked -> Done` when already converged,
/// `Checked -> Acted -> Done | Failed` otherwise. A check-mode run leaves
/// the first pending resource in `Checked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Current state known, no action taken
    Checked,
    /// Action issued, result not yet classified
    Acted,
    /// Resource is in its desired state
    Done,
    /// Action failed; terminal for the whole run
    Failed,
}

/// Result of applying a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplyResult {
    /// No changes needed (already in desired state)
    NoChange,
    /// Resource was created
    Created,
    /// Resource was removed
    Removed,
    /// Apply failed; `reason` carries the raw tool output
    Failed { message: String, reason: String },
}

impl ApplyResult {
    /// Check if the result represents a change
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Created | Self::Removed)
    }
}

/// Options for a reconciliation run
#[derive(Debug, Clone, Default)]
pub struct ReconcileOptions {
    /// Report whether anything would change, without changing it
    pub check_mode: bool,
}

/// What happened to one resource during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceReport {
    pub resource_id: String,
    pub resource_type: String,
    pub current: Option<ResourceState>,
    pub desired: ResourceState,
    pub phase: Phase,
    pub result: Option<ApplyResult>,
}

/// Fatal failure that stopped a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileError {
    /// Raw identifier of the offending resource (empty for configuration errors)
    pub resource_id: String,
    pub resource_type: String,
    /// Human-readable summary naming the resource
    pub message: String,
    /// Raw captured command output
    pub reason: String,
}

/// Aggregate result of a reconciliation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileOutcome {
    /// True iff at least one resource actually transitioned
    /// (or, in check mode, would transition)
    pub changed: bool,
    pub check_mode: bool,
    pub results: Vec<ResourceReport>,
    pub error: Option<ReconcileError>,
}

impl ReconcileOutcome {
    /// Outcome for a run that failed before or while acting
    pub fn failed(error: ReconcileError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
