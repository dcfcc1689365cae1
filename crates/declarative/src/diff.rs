//! Diff computation for resources

use crate::planner::ExecutionPlan;
use crate::resource::Resource;
use crate::types::ResourceState;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Current vs desired state of a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDiff {
    /// Unique identifier of the resource
    pub resource_id: String,
    /// Type of the resource
    pub resource_type: String,
    /// Human-readable description
    pub description: String,
    /// Current state
    pub current: ResourceState,
    /// Desired state
    pub desired: ResourceState,
}

impl ResourceDiff {
    /// Query a resource's current state and pair it with the desired one
    pub fn from_resource(resource: &dyn Resource) -> Result<Self> {
        Ok(Self {
            resource_id: resource.id(),
            resource_type: resource.resource_type().to_string(),
            description: resource.description(),
            current: resource.current_state()?,
            desired: resource.desired_state(),
        })
    }

    /// Check if the resource is already converged
    pub fn in_sync(&self) -> bool {
        self.current == self.desired
    }

    /// Check if this diff represents an addition
    pub fn is_addition(&self) -> bool {
        self.current.is_absent() && self.desired.is_present()
    }
}

/// Compute the diff of every resource in a plan, in plan order
///
/// Unlike reconciliation this never stops early and never acts.
pub fn compute_diffs(plan: &ExecutionPlan) -> Result<Vec<ResourceDiff>> {
    plan.iter()
        .map(|r| ResourceDiff::from_resource(r.as_ref()))
        .collect()
}
