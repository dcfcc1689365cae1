pub mod apply;
pub mod keys;
pub mod status;

use flatkit::{ProcessRunner, Reconciler};
use std::sync::Arc;

use crate::Context;

/// Reconciler backed by the flatpak executable selected on the command line
pub fn reconciler(ctx: &Context) -> Reconciler {
    Reconciler::new(Arc::new(ProcessRunner::locate(&ctx.flatpak)))
}
