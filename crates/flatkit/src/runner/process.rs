//! Real flatpak CLI runner using a child process.

use super::{CommandOutput, CommandRunner};
use log::debug;
use std::io::{self, Read};
use std::process::{Command, Stdio};

/// Default executable name.
pub const FLATPAK: &str = "flatpak";

/// Runner that executes the real `flatpak` binary.
///
/// There is no timeout: a child that never exits blocks the caller forever.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    /// Path or name of the flatpak executable
    executable: String,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(FLATPAK)
    }
}

impl ProcessRunner {
    /// Create a runner for the given executable, resolved by the OS at spawn time.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Create a runner, resolving the executable on `PATH` up front.
    ///
    /// A missing executable is not an error here; the spawn failure will
    /// surface later as failing command output.
    pub fn locate(executable: &str) -> Self {
        match which::which(executable) {
            Ok(path) => {
                debug!("using {}", path.display());
                Self::new(path.to_string_lossy())
            }
            Err(e) => {
                debug!("{executable} not found on PATH: {e}");
                Self::new(executable)
            }
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Spawn the child with stdout and stderr sharing one pipe and wait for it.
    fn spawn_merged(&self, args: &[&str]) -> io::Result<CommandOutput> {
        let (mut reader, writer) = io::pipe()?;
        let writer_err = writer.try_clone()?;

        let mut command = Command::new(&self.executable);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(writer_err);

        let mut child = command.spawn()?;
        // The command still owns our copies of the write end; the read below
        // only sees EOF once they are closed.
        drop(command);

        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        let status = child.wait()?;

        Ok(CommandOutput {
            output: String::from_utf8_lossy(&buf).into_owned(),
            exit_code: status.code().unwrap_or(-1),
        })
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, args: &[&str]) -> CommandOutput {
        debug!("$ {} {}", self.executable, args.join(" "));

        match self.spawn_merged(args) {
            Ok(output) => {
                debug!("exit code {}", output.exit_code);
                output
            }
            Err(e) => {
                log::warn!("failed to execute {}: {e}", self.executable);
                CommandOutput {
                    output: format!("error: failed to execute {}: {e}", self.executable),
                    exit_code: -1,
                }
            }
        }
    }
}
