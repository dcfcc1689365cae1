//! Current-state queries against the flatpak CLI.
//!
//! Every call re-runs the list command; nothing is cached.

use crate::error::Result;
use crate::ident::{app_key, remote_key};
use crate::runner::CommandRunner;
use log::debug;

/// `flatpak remote-list`
pub const REMOTE_LIST: &[&str] = &["remote-list"];

/// `flatpak list --app`
pub const APP_LIST: &[&str] = &["list", "--app"];

/// Whether the remote's alias is registered.
///
/// The alias must be followed by a column delimiter so that `gnome` does not
/// match a listing that only has `gnome-apps`.
pub fn is_remote_present(runner: &dyn CommandRunner, remote_ref: &str) -> bool {
    let key = remote_key(remote_ref);
    let listing = runner.run(REMOTE_LIST);
    let present = [' ', '\t']
        .iter()
        .any(|delim| listing.contains(&format!("{key}{delim}")));
    debug!("remote {key} present: {present}");
    present
}

/// Whether the application id appears anywhere in the installed list.
pub fn is_app_present(runner: &dyn CommandRunner, app_ref: &str) -> Result<bool> {
    let key = app_key(app_ref)?;
    let listing = runner.run(APP_LIST);
    let present = listing.contains(&key);
    debug!("app {key} present: {present}");
    Ok(present)
}
