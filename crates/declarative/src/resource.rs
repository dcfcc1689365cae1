//! Resource trait for declarative state management
//!
//! A Resource represents something that can be in a certain state,
//! and can be changed to reach a desired state.

use crate::types::{ApplyResult, ResourceState};
use anyhow::Result;
use std::fmt;

/// Core trait for declarative resources
///
/// Every resource in the system implements this trait, which provides:
/// - Identity (id, description, type)
/// - State detection (current vs desired)
/// - State convergence (apply)
///
/// # Example
///
/// ```ignore
/// use declarative::{Resource, ResourceState, ApplyResult};
///
/// #[derive(Debug)]
/// struct FileResource {
///     path: String,
///     content: String,
/// }
///
/// impl Resource for FileResource {
///     fn id(&self) -> String {
///         self.path.clone()
///     }
///
///     fn description(&self) -> String {
///         format!("Ensure file exists at {}", self.path)
///     }
///
///     fn resource_type(&self) -> &'static str {
///         "file"
///     }
///
///     fn current_state(&self) -> Result<ResourceState> {
///         Ok(ResourceState::from_presence(
///             std::path::Path::new(&self.path).exists(),
///         ))
///     }
///
///     fn desired_state(&self) -> ResourceState {
///         ResourceState::Present
///     }
///
///     fn apply(&self) -> Result<ApplyResult> {
///         std::fs::write(&self.path, &self.content)?;
///         Ok(ApplyResult::Created)
///     }
/// }
/// ```
pub trait Resource: Send + Sync + fmt::Debug {
    /// Unique identifier for this resource
    ///
    /// Used in reports and failure messages, e.g. "/etc/hosts" or "ripgrep".
    fn id(&self) -> String;

    /// Human-readable description of what this resource does
    fn description(&self) -> String;

    /// Resource type category, e.g. "file", "package"
    fn resource_type(&self) -> &'static str;

    /// Detect the current state of this resource
    ///
    /// Must query the system fresh on every call.
    fn current_state(&self) -> Result<ResourceState>;

    /// Get the desired state for this resource
    fn desired_state(&self) -> ResourceState;

    /// Apply changes to reach the desired state
    ///
    /// Only called once the caller knows current and desired differ.
    /// Classified tool failures are returned as `ApplyResult::Failed`,
    /// not as `Err`; `Err` is reserved for errors that prevent acting at all.
    fn apply(&self) -> Result<ApplyResult>;
}

/// A boxed resource for type-erased storage
pub type BoxedResource = Box<dyn Resource>;
