//! # Declarative
//!
//! A framework for declarative resource management.
//!
//! This crate provides the core abstractions for declaring desired state,
//! detecting current state, and converging systems to match the desired state.
//!
//! ## Core Concepts
//!
//! - **Resource**: Something with state that can be managed (packages, files, services)
//! - **ResourceState**: `Present` or `Absent`
//! - **Phase**: Where a resource is in the check/act lifecycle
//! - **ExecutionPlan**: Resources in the order they must be evaluated
//! - **Executor**: Converges a plan sequentially, stopping at the first failure
//!
//! ## Example
//!
//! ```ignore
//! use declarative::{
//!     Resource, ResourceState, ApplyResult,
//!     ExecutionPlan, ReconcileOptions, NoProgress, reconcile,
//! };
//!
//! #[derive(Debug)]
//! struct FileResource { path: String, content: String }
//!
//! impl Resource for FileResource {
//!     fn id(&self) -> String { self.path.clone() }
//!     fn description(&self) -> String { format!("File: {}", self.path) }
//!     fn resource_type(&self) -> &'static str { "file" }
//!
//!     fn current_state(&self) -> anyhow::Result<ResourceState> {
//!         Ok(ResourceState::from_presence(std::path::Path::new(&self.path).exists()))
//!     }
//!
//!     fn desired_state(&self) -> ResourceState {
//!         ResourceState::Present
//!     }
//!
//!     fn apply(&self) -> anyhow::Result<ApplyResult> {
//!         std::fs::write(&self.path, &self.content)?;
//!         Ok(ApplyResult::Created)
//!     }
//! }
//!
//! let mut plan = ExecutionPlan::new();
//! plan.push(Box::new(FileResource {
//!     path: "/tmp/test.txt".into(),
//!     content: "hello".into(),
//! }));
//!
//! let outcome = reconcile(&plan, &ReconcileOptions::default(), &mut NoProgress)?;
//! assert!(outcome.changed);
//! ```
//!
//! ## Provider Traits
//!
//! - [`ProgressCallback`]: Receives progress updates
//! - [`ResultSink`]: Receives the final outcome
//!
//! This allows the crate to be used without hard dependencies on
//! specific UI or orchestration frameworks.

pub mod context;
pub mod diff;
pub mod executor;
pub mod planner;
pub mod resource;
pub mod types;

// Re-export main types at crate root
pub use context::{MemorySink, NoProgress, ProgressCallback, ResultSink};
pub use diff::{ResourceDiff, compute_diffs};
pub use executor::{reconcile, reconcile_into};
pub use planner::ExecutionPlan;
pub use resource::{BoxedResource, Resource};
pub use types::{
    ApplyResult, ParseStateError, Phase, ReconcileError, ReconcileOptions, ReconcileOutcome,
    ResourceReport, ResourceState,
};
