//! Progress indicators for flatctl.

use colored::Colorize;
use declarative::{ApplyResult, Phase, ProgressCallback, ResourceReport};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner with a message
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Spinner while a flatpak action runs, one line per resource afterwards
#[derive(Default)]
pub struct ConsoleProgress {
    active: Option<ProgressBar>,
    verbose: bool,
}

impl ConsoleProgress {
    pub fn new(verbose: bool) -> Self {
        Self {
            active: None,
            verbose,
        }
    }
}

impl ProgressCallback for ConsoleProgress {
    fn on_apply_start(&mut self, _id: &str, description: &str) {
        self.active = Some(spinner(&format!("{description}...")));
    }

    fn on_resource_complete(&mut self, report: &ResourceReport) {
        if let Some(pb) = self.active.take() {
            pb.finish_and_clear();
        }

        let id = &report.resource_id;
        let line = match (&report.phase, &report.result) {
            (Phase::Done, Some(ApplyResult::Created)) => {
                format!("{} {id} {}", "✓".green(), "added".green())
            }
            (Phase::Done, Some(ApplyResult::Removed)) => {
                format!("{} {id} {}", "✓".green(), "removed".green())
            }
            (Phase::Done, _) => {
                if !self.verbose {
                    return;
                }
                format!("{} {id} {}", "·".dimmed(), "already in desired state".dimmed())
            }
            (Phase::Checked, _) => format!(
                "{} {id} {}",
                "~".yellow(),
                format!("would become {}", report.desired).yellow()
            ),
            (Phase::Failed, _) => format!("{} {id} {}", "✗".red(), "failed".red()),
            _ => return,
        };
        println!("  {line}");
    }
}
