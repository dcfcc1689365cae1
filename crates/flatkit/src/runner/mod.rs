//! Command runner abstraction for flatpak invocations.
//!
//! The [`CommandRunner`] trait is the only way the rest of the crate reaches
//! the host package manager, allowing for different implementations (real
//! process, scripted mock for testing).
//!
//! # Testing
//!
//! Use [`MockRunner`] to script responses without flatpak installed:
//!
//! ```
//! use flatkit::runner::{CommandRunner, MockRunner};
//!
//! let mock = MockRunner::new();
//! mock.respond("remote-list", "flathub\tsystem\n");
//!
//! let out = mock.run(&["remote-list"]);
//! assert!(out.output.contains("flathub"));
//! assert_eq!(mock.verbs(), ["remote-list"]);
//! ```

pub mod process;

pub use process::ProcessRunner;

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

/// Captured result of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// stdout and stderr merged into one text stream
    pub output: String,
    /// Process exit code; informational only, classification uses the text
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn new(output: impl Into<String>, exit_code: i32) -> Self {
        Self {
            output: output.into(),
            exit_code,
        }
    }

    /// Check whether the text contains a marker token
    pub fn contains(&self, marker: &str) -> bool {
        self.output.contains(marker)
    }
}

/// Capability to run a package-manager sub-command.
///
/// Implementations run `args` as a single process, block until it exits and
/// return its merged output unchanged. They never interpret the text and
/// never fail: a process that cannot be started is reported as failing
/// output like any other.
pub trait CommandRunner: Send + Sync + fmt::Debug {
    /// Run one sub-command, e.g. `["remote-list"]`.
    fn run(&self, args: &[&str]) -> CommandOutput;
}

/// Scripted runner for tests.
///
/// Responses are keyed by the sub-command verb (first argument). Every
/// invocation is recorded, in order, with its full argument vector.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: Mutex<HashMap<String, CommandOutput>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockRunner {
    /// Create a runner that answers every verb with empty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `verb` with `output` and exit code 0.
    pub fn respond(&self, verb: &str, output: &str) {
        self.respond_with(verb, CommandOutput::new(output, 0));
    }

    /// Answer `verb` with a full command output.
    pub fn respond_with(&self, verb: &str, output: CommandOutput) {
        self.responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(verb.to_string(), output);
    }

    /// Every recorded argument vector, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// The verb of every recorded call, in call order.
    pub fn verbs(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|args| args.into_iter().next())
            .collect()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, args: &[&str]) -> CommandOutput {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(args.iter().map(ToString::to_string).collect());

        let verb = args.first().copied().unwrap_or_default();
        self.responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(verb)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_runner_default_is_empty() {
        let mock = MockRunner::new();
        let out = mock.run(&["list", "--app"]);
        assert_eq!(out, CommandOutput::default());
    }

    #[test]
    fn test_mock_runner_records_calls() {
        let mock = MockRunner::new();
        mock.respond("install", "Installing org.gnome.gedit");

        mock.run(&["install", "-y", "--from", "x"]);
        mock.run(&["list", "--app"]);

        assert_eq!(
            mock.calls(),
            vec![
                vec!["install", "-y", "--from", "x"],
                vec!["list", "--app"],
            ]
        );
        assert_eq!(mock.verbs(), ["install", "list"]);
    }

    #[test]
    fn test_command_output_contains() {
        let out = CommandOutput::new("error: already installed", 1);
        assert!(out.contains("already installed"));
        assert!(!out.contains("not found"));
    }
}
