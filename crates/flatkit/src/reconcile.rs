//! Decide-then-act for one remote and one application.

use crate::error::{Error, Result};
use crate::ident::app_key;
use crate::resource::{FlatpakApp, FlatpakRemote};
use crate::runner::{CommandRunner, ProcessRunner};
use crate::types::ReconcileParams;
use declarative::{
    ExecutionPlan, NoProgress, ProgressCallback, ReconcileOptions, ReconcileOutcome,
    ResourceDiff, ResultSink,
};
use log::info;
use std::sync::Arc;

/// Converges flatpak state through an injected command runner.
#[derive(Debug, Clone)]
pub struct Reconciler {
    runner: Arc<dyn CommandRunner>,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(Arc::new(ProcessRunner::default()))
    }
}

impl Reconciler {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Reject parameters that could only fail later, before any command runs.
    pub fn validate(params: &ReconcileParams) -> Result<()> {
        if params.has_app() {
            app_key(&params.name)?;
        }
        Ok(())
    }

    /// Build the ordered plan: the remote always precedes the application,
    /// for installs and removals alike. Empty references are left out.
    pub fn plan(&self, params: &ReconcileParams) -> Result<ExecutionPlan> {
        Self::validate(params)?;

        let mut plan = ExecutionPlan::new();
        if params.has_remote() {
            plan.push(Box::new(FlatpakRemote::new(
                &params.remote,
                params.state,
                Arc::clone(&self.runner),
            )));
        }
        if params.has_app() {
            plan.push(Box::new(FlatpakApp::new(
                &params.name,
                params.state,
                Arc::clone(&self.runner),
            )));
        }
        Ok(plan)
    }

    /// Run the reconciliation, reporting progress.
    ///
    /// `Err` is returned for invalid parameters only; an action failure is
    /// recorded in `ReconcileOutcome::error`.
    pub fn reconcile(
        &self,
        params: &ReconcileParams,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ReconcileOutcome> {
        let plan = self.plan(params)?;
        let outcome = declarative::reconcile(&plan, &options(params), progress)
            .map_err(Error::from_anyhow)?;
        info!(
            "reconciled {} resource(s), changed: {}",
            outcome.results.len(),
            outcome.changed
        );
        Ok(outcome)
    }

    /// Run the reconciliation and return whether anything changed.
    pub fn run(&self, params: &ReconcileParams) -> Result<bool> {
        let outcome = self.reconcile(params, &mut NoProgress)?;
        match &outcome.error {
            Some(failure) => Err(Error::from_failure(failure)),
            None => Ok(outcome.changed),
        }
    }

    /// Run the reconciliation and write exactly one outcome to `sink`,
    /// including configuration failures.
    pub fn run_into(
        &self,
        params: &ReconcileParams,
        progress: &mut dyn ProgressCallback,
        sink: &mut dyn ResultSink,
    ) -> anyhow::Result<ReconcileOutcome> {
        let plan = match self.plan(params) {
            Ok(plan) => plan,
            Err(e) => {
                let outcome = ReconcileOutcome::failed(e.to_failure());
                sink.report(&outcome)?;
                return Ok(outcome);
            }
        };
        declarative::reconcile_into(&plan, &options(params), progress, sink)
    }

    /// Current vs desired for every configured resource, without acting.
    pub fn status(&self, params: &ReconcileParams) -> Result<Vec<ResourceDiff>> {
        let plan = self.plan(params)?;
        declarative::compute_diffs(&plan).map_err(Error::from_anyhow)
    }
}

fn options(params: &ReconcileParams) -> ReconcileOptions {
    ReconcileOptions {
        check_mode: params.check_mode,
    }
}
