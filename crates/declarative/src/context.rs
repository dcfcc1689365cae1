//! Provider traits
//!
//! These traits allow the declarative crate to be used without
//! depending on a specific UI or orchestration framework.

use crate::types::{ReconcileOutcome, ResourceReport};
use anyhow::Result;

/// Progress callback for reconciliation
///
/// Implement this trait to receive progress updates during a run.
pub trait ProgressCallback {
    /// Called right before a resource's action is issued
    fn on_apply_start(&mut self, id: &str, description: &str);

    /// Called when a resource reaches the end of its evaluation
    fn on_resource_complete(&mut self, report: &ResourceReport);
}

/// Destination for the final outcome of a run
///
/// The orchestrating framework's result protocol sits behind this trait,
/// so the engine never writes to stdout or exits the process itself.
pub trait ResultSink {
    /// Emit the outcome. Called exactly once per run.
    fn report(&mut self, outcome: &ReconcileOutcome) -> Result<()>;
}

/// No-op progress callback
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_apply_start(&mut self, _id: &str, _description: &str) {}
    fn on_resource_complete(&mut self, _report: &ResourceReport) {}
}

/// Sink that keeps the last outcome in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub outcome: Option<ReconcileOutcome>,
}

impl ResultSink for MemorySink {
    fn report(&mut self, outcome: &ReconcileOutcome) -> Result<()> {
        self.outcome = Some(outcome.clone());
        Ok(())
    }
}
