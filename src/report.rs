//! Result sinks: where a finished reconciliation is reported.

use anyhow::Result;
use declarative::{ReconcileOutcome, ResultSink};
use serde::Serialize;
use std::io::Write;

use crate::ui;

/// Module result object, one per run
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JsonResult {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&ReconcileOutcome> for JsonResult {
    fn from(outcome: &ReconcileOutcome) -> Self {
        match &outcome.error {
            Some(error) => Self {
                changed: false,
                failed: Some(true),
                msg: Some(error.message.clone()),
                reason: Some(error.reason.clone()),
            },
            None => Self {
                changed: outcome.changed,
                failed: None,
                msg: None,
                reason: None,
            },
        }
    }
}

/// Writes exactly one JSON object
pub struct JsonSink<W: Write> {
    out: W,
}

impl JsonSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn report(&mut self, outcome: &ReconcileOutcome) -> Result<()> {
        serde_json::to_writer(&mut self.out, &JsonResult::from(outcome))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Human-readable summary
pub struct ConsoleSink {
    quiet: bool,
}

impl ConsoleSink {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ResultSink for ConsoleSink {
    fn report(&mut self, outcome: &ReconcileOutcome) -> Result<()> {
        if let Some(error) = &outcome.error {
            ui::error(&error.message);
            if !error.reason.is_empty() {
                eprintln!("{}", ui::indent_output(&error.reason));
            }
            return Ok(());
        }

        if self.quiet {
            return Ok(());
        }

        match (outcome.check_mode, outcome.changed) {
            (true, true) => ui::warn("Changes pending (check mode, nothing applied)"),
            (true, false) => ui::success("Nothing to change"),
            (false, true) => ui::success("Changed"),
            (false, false) => ui::success("Already in desired state"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use declarative::ReconcileError;

    fn render(outcome: &ReconcileOutcome) -> String {
        let mut sink = JsonSink::new(Vec::new());
        sink.report(outcome).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_json_changed() {
        let outcome = ReconcileOutcome {
            changed: true,
            ..Default::default()
        };
        assert_eq!(render(&outcome), "{\"changed\":true}\n");
    }

    #[test]
    fn test_json_failure() {
        let outcome = ReconcileOutcome::failed(ReconcileError {
            resource_id: "myrepo".into(),
            resource_type: "flatpak_remote".into(),
            message: "error while adding remote: myrepo".into(),
            reason: "error: Can't load uri".into(),
        });

        let value: serde_json::Value = serde_json::from_str(&render(&outcome)).unwrap();
        assert_eq!(value["changed"], false);
        assert_eq!(value["failed"], true);
        assert_eq!(value["msg"], "error while adding remote: myrepo");
        assert_eq!(value["reason"], "error: Can't load uri");
    }
}
