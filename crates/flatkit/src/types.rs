//! Core types for flatpak reconciliation.

use crate::error::{Error, Result};
use declarative::ResourceState;
use serde::{Deserialize, Serialize};

/// Classification of a mutating command's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The command changed host state
    Success,
    /// The tool reported nothing to do
    AlreadyInDesiredState,
    /// The tool reported a real failure
    Failure,
}

/// Parameters for one reconciliation.
///
/// Empty references are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileParams {
    /// Application reference (URL to a `.flatpakref` or reverse-DNS id)
    #[serde(default)]
    pub name: String,
    /// Remote reference (URL to a `.flatpakrepo` or bare alias)
    #[serde(default)]
    pub remote: String,
    /// Desired state for both references
    #[serde(default)]
    pub state: ResourceState,
    /// Report what would change without changing anything
    #[serde(default)]
    pub check_mode: bool,
}

impl ReconcileParams {
    /// Build parameters from raw strings, validating `state`.
    pub fn parse(name: &str, remote: &str, state: &str, check_mode: bool) -> Result<Self> {
        let state = state
            .parse::<ResourceState>()
            .map_err(|e| Error::config(e.to_string()))?;
        Ok(Self {
            name: name.to_string(),
            remote: remote.to_string(),
            state,
            check_mode,
        })
    }

    pub fn has_remote(&self) -> bool {
        !self.remote.is_empty()
    }

    pub fn has_app(&self) -> bool {
        !self.name.is_empty()
    }
}
