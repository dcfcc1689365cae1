//! Flatpak remote and application as declarative resources.

use crate::actions::{add_remote, install_app, remove_remote, uninstall_app};
use crate::ident::{app_key, remote_key};
use crate::inspect::{is_app_present, is_remote_present};
use crate::runner::{CommandOutput, CommandRunner};
use crate::types::Outcome;
use anyhow::Result;
use declarative::{ApplyResult, Resource, ResourceState};
use std::sync::Arc;

/// Resource type of [`FlatpakRemote`]
pub const REMOTE_TYPE: &str = "flatpak_remote";
/// Resource type of [`FlatpakApp`]
pub const APP_TYPE: &str = "flatpak_app";

/// Map a classified action to the engine's result.
fn to_apply_result(
    outcome: Outcome,
    output: CommandOutput,
    desired: ResourceState,
    failure_message: impl FnOnce() -> String,
) -> ApplyResult {
    match (outcome, desired) {
        (Outcome::Success, ResourceState::Present) => ApplyResult::Created,
        (Outcome::Success, ResourceState::Absent) => ApplyResult::Removed,
        (Outcome::AlreadyInDesiredState, _) => ApplyResult::NoChange,
        (Outcome::Failure, _) => ApplyResult::Failed {
            message: failure_message(),
            reason: output.output,
        },
    }
}

/// A flatpak remote (registered repository)
#[derive(Debug, Clone)]
pub struct FlatpakRemote {
    pub remote_ref: String,
    pub desired: ResourceState,
    runner: Arc<dyn CommandRunner>,
}

impl FlatpakRemote {
    pub fn new(remote_ref: &str, desired: ResourceState, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            remote_ref: remote_ref.to_string(),
            desired,
            runner,
        }
    }

    pub fn key(&self) -> String {
        remote_key(&self.remote_ref)
    }
}

impl Resource for FlatpakRemote {
    fn id(&self) -> String {
        self.remote_ref.clone()
    }

    fn description(&self) -> String {
        match self.desired {
            ResourceState::Present => format!("Add flatpak remote {}", self.key()),
            ResourceState::Absent => format!("Remove flatpak remote {}", self.key()),
        }
    }

    fn resource_type(&self) -> &'static str {
        REMOTE_TYPE
    }

    fn current_state(&self) -> Result<ResourceState> {
        Ok(ResourceState::from_presence(is_remote_present(
            self.runner.as_ref(),
            &self.remote_ref,
        )))
    }

    fn desired_state(&self) -> ResourceState {
        self.desired
    }

    fn apply(&self) -> Result<ApplyResult> {
        let runner = self.runner.as_ref();
        Ok(match self.desired {
            ResourceState::Present => {
                let (outcome, output) = add_remote(runner, &self.remote_ref);
                to_apply_result(outcome, output, self.desired, || {
                    format!("error while adding remote: {}", self.remote_ref)
                })
            }
            ResourceState::Absent => {
                let (outcome, output) = remove_remote(runner, &self.remote_ref);
                to_apply_result(outcome, output, self.desired, || {
                    format!("error while removing remote: {}", self.remote_ref)
                })
            }
        })
    }
}

/// An installed flatpak application
#[derive(Debug, Clone)]
pub struct FlatpakApp {
    pub app_ref: String,
    pub desired: ResourceState,
    runner: Arc<dyn CommandRunner>,
}

impl FlatpakApp {
    pub fn new(app_ref: &str, desired: ResourceState, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            app_ref: app_ref.to_string(),
            desired,
            runner,
        }
    }

    pub fn key(&self) -> crate::Result<String> {
        app_key(&self.app_ref)
    }
}

impl Resource for FlatpakApp {
    fn id(&self) -> String {
        self.app_ref.clone()
    }

    fn description(&self) -> String {
        let name = self.key().unwrap_or_else(|_| self.app_ref.clone());
        match self.desired {
            ResourceState::Present => format!("Install flatpak {name}"),
            ResourceState::Absent => format!("Uninstall flatpak {name}"),
        }
    }

    fn resource_type(&self) -> &'static str {
        APP_TYPE
    }

    fn current_state(&self) -> Result<ResourceState> {
        let present = is_app_present(self.runner.as_ref(), &self.app_ref)?;
        Ok(ResourceState::from_presence(present))
    }

    fn desired_state(&self) -> ResourceState {
        self.desired
    }

    fn apply(&self) -> Result<ApplyResult> {
        let runner = self.runner.as_ref();
        Ok(match self.desired {
            ResourceState::Present => {
                let (outcome, output) = install_app(runner, &self.app_ref);
                to_apply_result(outcome, output, self.desired, || {
                    format!("error while installing flatpak {}", self.app_ref)
                })
            }
            ResourceState::Absent => {
                let (outcome, output) = uninstall_app(runner, &self.app_ref)?;
                to_apply_result(outcome, output, self.desired, || {
                    format!("error while uninstalling flatpak: {}", self.app_ref)
                })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::MockRunner;

    #[test]
    fn test_remote_state_and_apply() {
        let mock = Arc::new(MockRunner::new());
        let remote = FlatpakRemote::new("myrepo", ResourceState::Present, mock.clone());

        assert_eq!(remote.current_state().unwrap(), ResourceState::Absent);
        assert_eq!(remote.description(), "Add flatpak remote myrepo");

        let result = remote.apply().unwrap();
        assert_eq!(result, ApplyResult::Created);
        assert_eq!(mock.verbs(), ["remote-list", "remote-add"]);
    }

    #[test]
    fn test_remote_remove_failure_message() {
        let mock = Arc::new(MockRunner::new());
        mock.respond("remote-delete", "error: could not write config");
        let remote = FlatpakRemote::new("myrepo", ResourceState::Absent, mock);

        let result = remote.apply().unwrap();
        assert_eq!(
            result,
            ApplyResult::Failed {
                message: "error while removing remote: myrepo".into(),
                reason: "error: could not write config".into(),
            }
        );
    }

    #[test]
    fn test_app_install_issues_only_install() {
        let mock = Arc::new(MockRunner::new());
        let app = FlatpakApp::new("org.gnome.gedit", ResourceState::Present, mock.clone());

        let result = app.apply().unwrap();
        assert_eq!(result, ApplyResult::Created);
        assert_eq!(mock.verbs(), ["install"]);
    }

    #[test]
    fn test_app_uninstall_removed() {
        let mock = Arc::new(MockRunner::new());
        let app = FlatpakApp::new("org.gnome.gedit", ResourceState::Absent, mock);
        let result = app.apply().unwrap();
        assert_eq!(result, ApplyResult::Removed);
    }

    #[test]
    fn test_app_description_falls_back_to_ref() {
        let mock = Arc::new(MockRunner::new());
        let app = FlatpakApp::new("https://localhost/x.flatpakref", ResourceState::Present, mock);
        assert_eq!(
            app.description(),
            "Install flatpak https://localhost/x.flatpakref"
        );
    }
}
