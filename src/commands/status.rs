//! `flatctl status`: current vs desired, read-only.

use anyhow::Result;
use colored::Colorize;
use declarative::ResourceDiff;
use std::process::ExitCode;

use crate::Context;
use crate::cli::TargetArgs;
use crate::config;
use crate::ui;

pub fn run(ctx: &Context, target: TargetArgs) -> Result<ExitCode> {
    let params = config::resolve(&target, true)?;
    let diffs = super::reconciler(ctx).status(&params)?;

    if diffs.is_empty() {
        ui::warn("Nothing configured: pass --name and/or --remote");
        return Ok(ExitCode::SUCCESS);
    }

    ui::header("Flatpak Status");
    for diff in &diffs {
        println!("  {}", format_diff(diff));
    }

    let pending = diffs.iter().filter(|d| !d.in_sync()).count();
    println!();
    if pending == 0 {
        ui::success("Everything is in the desired state");
    } else if !ctx.quiet {
        ui::info(&format!("{pending} change(s) pending, run 'flatctl apply'"));
    }
    Ok(ExitCode::SUCCESS)
}

fn format_diff(diff: &ResourceDiff) -> String {
    let marker = if diff.in_sync() {
        "✓".green()
    } else if diff.is_addition() {
        "+".green()
    } else {
        "-".red()
    };
    format!(
        "{marker} {} {} ({} → {})",
        diff.resource_type.dimmed(),
        diff.resource_id,
        diff.current,
        diff.desired
    )
}
