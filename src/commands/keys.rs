//! `flatctl keys`: show how references map to flatpak identifiers.

use anyhow::Result;
use std::process::ExitCode;

use crate::Context;
use crate::cli::KeysArgs;
use crate::ui;

pub fn run(ctx: &Context, args: KeysArgs) -> Result<ExitCode> {
    if args.name.is_none() && args.remote.is_none() {
        ui::warn("Nothing to show: pass --name and/or --remote");
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(remote) = args.remote.as_deref() {
        print_key(ctx, "remote", remote, flatkit::remote_key(remote));
    }
    if let Some(name) = args.name.as_deref() {
        print_key(ctx, "app", name, flatkit::app_key(name)?);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_key(ctx: &Context, kind: &str, reference: &str, key: String) {
    if ctx.quiet {
        println!("{key}");
        return;
    }
    ui::kv(kind, &key);
    if flatkit::is_url_ref(reference) {
        ui::dim(&format!("from {reference}"));
    }
}
