//! Execution engine - converges an ordered plan, one resource at a time
//!
//! Each resource walks `Checked -> (Done | Acted -> Done | Failed)`.
//! Two events end a run early:
//! - in check mode, the first resource that would change
//! - outside check mode, the first `ApplyResult::Failed`

use crate::context::{ProgressCallback, ResultSink};
use crate::planner::ExecutionPlan;
use crate::types::{
    ApplyResult, Phase, ReconcileError, ReconcileOptions, ReconcileOutcome, ResourceReport,
};
use anyhow::Result;
use log::{debug, info, warn};

/// Reconcile a plan with the given options
///
/// # Arguments
/// * `plan` - Resources in evaluation order
/// * `opts` - Run options (check mode)
/// * `progress` - Progress callback
///
/// # Returns
/// The aggregate outcome. Classified action failures are reported in
/// `ReconcileOutcome::error`; `Err` means a resource could not be
/// inspected or acted on at all.
pub fn reconcile(
    plan: &ExecutionPlan,
    opts: &ReconcileOptions,
    progress: &mut dyn ProgressCallback,
) -> Result<ReconcileOutcome> {
    let mut results = Vec::with_capacity(plan.len());
    let mut changed = false;

    for resource in plan.iter() {
        let id = resource.id();
        let resource_type = resource.resource_type();
        let desired = resource.desired_state();

        let current = resource.current_state()?;
        let mut report = ResourceReport {
            resource_id: id.clone(),
            resource_type: resource_type.to_string(),
            current: Some(current),
            desired,
            phase: Phase::Checked,
            result: None,
        };
        debug!("{id}: {current} (want {desired})");

        if current == desired {
            report.phase = Phase::Done;
            report.result = Some(ApplyResult::NoChange);
            progress.on_resource_complete(&report);
            results.push(report);
            continue;
        }

        if opts.check_mode {
            // A single pending change is enough to answer; later resources
            // are not evaluated.
            info!("{id}: would change from {current} to {desired}");
            progress.on_resource_complete(&report);
            results.push(report);
            return Ok(ReconcileOutcome {
                changed: true,
                check_mode: true,
                results,
                error: None,
            });
        }

        progress.on_apply_start(&id, &resource.description());
        let result = resource.apply()?;
        report.phase = Phase::Acted;

        if let ApplyResult::Failed { message, reason } = &result {
            warn!("{id}: {message}");
            let error = ReconcileError {
                resource_id: id,
                resource_type: resource_type.to_string(),
                message: message.clone(),
                reason: reason.clone(),
            };
            report.phase = Phase::Failed;
            report.result = Some(result);
            progress.on_resource_complete(&report);
            results.push(report);
            return Ok(ReconcileOutcome {
                changed,
                check_mode: false,
                results,
                error: Some(error),
            });
        }

        changed |= result.is_change();
        report.phase = Phase::Done;
        report.result = Some(result);
        progress.on_resource_complete(&report);
        results.push(report);
    }

    Ok(ReconcileOutcome {
        changed,
        check_mode: opts.check_mode,
        results,
        error: None,
    })
}

/// Reconcile a plan and hand the outcome to a sink
///
/// Inspection errors are reported to the sink as a failed outcome too,
/// so the sink always receives exactly one report.
pub fn reconcile_into(
    plan: &ExecutionPlan,
    opts: &ReconcileOptions,
    progress: &mut dyn ProgressCallback,
    sink: &mut dyn ResultSink,
) -> Result<ReconcileOutcome> {
    let outcome = match reconcile(plan, opts, progress) {
        Ok(outcome) => outcome,
        Err(e) => ReconcileOutcome::failed(ReconcileError {
            resource_id: String::new(),
            resource_type: String::new(),
            message: e.to_string(),
            reason: String::new(),
        }),
    };
    sink.report(&outcome)?;
    Ok(outcome)
}
