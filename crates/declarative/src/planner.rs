//! Execution planner - ordered list of resources to converge

use crate::resource::BoxedResource;

/// An ordered execution plan
///
/// Resources are evaluated strictly in insertion order; a resource that
/// another depends on must be pushed first.
#[derive(Default)]
pub struct ExecutionPlan {
    resources: Vec<BoxedResource>,
}

impl ExecutionPlan {
    /// Create a new empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resource after everything already planned
    pub fn push(&mut self, resource: BoxedResource) {
        self.resources.push(resource);
    }

    /// Resources in evaluation order
    pub fn iter(&self) -> std::slice::Iter<'_, BoxedResource> {
        self.resources.iter()
    }

    /// Total number of resources in the plan
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Check if plan is empty
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
