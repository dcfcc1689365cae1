//! Mutating flatpak commands and classification of their output.
//!
//! The flatpak CLI is not built for idempotent scripting, so each action
//! re-reads its own output to tell "nothing to do" apart from a real
//! failure. Classification is by substring only; the exit code is ignored.

use crate::error::Result;
use crate::ident::{app_key, remote_key};
use crate::runner::{CommandOutput, CommandRunner};
use crate::types::Outcome;
use log::info;

/// Any output containing this is a failure unless a benign marker applies.
pub const ERROR_MARKER: &str = "error";
/// Benign failure marker for `install`.
pub const ALREADY_INSTALLED_MARKER: &str = "already installed";
/// Benign failure marker for `uninstall`.
pub const NOT_INSTALLED_MARKER: &str = "not installed";
/// Benign failure marker for `remote-delete`.
pub const NOT_FOUND_MARKER: &str = "not found";

/// Classify output given the marker that downgrades an error to a no-op.
pub fn classify(output: &CommandOutput, benign: Option<&str>) -> Outcome {
    if !output.contains(ERROR_MARKER) {
        return Outcome::Success;
    }
    match benign {
        Some(marker) if output.contains(marker) => Outcome::AlreadyInDesiredState,
        _ => Outcome::Failure,
    }
}

fn run_classified(
    runner: &dyn CommandRunner,
    args: &[&str],
    benign: Option<&str>,
) -> (Outcome, CommandOutput) {
    let output = runner.run(args);
    let outcome = classify(&output, benign);
    info!("flatpak {}: {outcome:?}", args.first().copied().unwrap_or_default());
    (outcome, output)
}

/// `flatpak remote-add --if-not-exists <alias> <ref>`
///
/// An existing remote is not an error thanks to `--if-not-exists`, so this
/// never reports `AlreadyInDesiredState`.
pub fn add_remote(runner: &dyn CommandRunner, remote_ref: &str) -> (Outcome, CommandOutput) {
    let key = remote_key(remote_ref);
    run_classified(
        runner,
        &["remote-add", "--if-not-exists", key.as_str(), remote_ref],
        None,
    )
}

/// `flatpak remote-delete --force <alias>`
pub fn remove_remote(runner: &dyn CommandRunner, remote_ref: &str) -> (Outcome, CommandOutput) {
    let key = remote_key(remote_ref);
    run_classified(
        runner,
        &["remote-delete", "--force", key.as_str()],
        Some(NOT_FOUND_MARKER),
    )
}

/// `flatpak install -y --from <ref>`
///
/// The raw reference is passed through, not the derived id.
pub fn install_app(runner: &dyn CommandRunner, app_ref: &str) -> (Outcome, CommandOutput) {
    run_classified(
        runner,
        &["install", "-y", "--from", app_ref],
        Some(ALREADY_INSTALLED_MARKER),
    )
}

/// `flatpak uninstall <app id>`
pub fn uninstall_app(
    runner: &dyn CommandRunner,
    app_ref: &str,
) -> Result<(Outcome, CommandOutput)> {
    let key = app_key(app_ref)?;
    Ok(run_classified(
        runner,
        &["uninstall", key.as_str()],
        Some(NOT_INSTALLED_MARKER),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::MockRunner;

    const GNOME_REPO: &str = "https://sdk.gnome.org/gnome-apps.flatpakrepo";
    const GEDIT_REF: &str = "https://git.gnome.org/browse/gnome-apps-nightly/plain/gedit.flatpakref";

    #[test]
    fn test_classify_without_error_marker() {
        let out = CommandOutput::new("Installing: org.gnome.gedit", 0);
        assert_eq!(classify(&out, None), Outcome::Success);
        // Benign markers alone are not enough to downgrade anything
        let out = CommandOutput::new("remote not found", 1);
        assert_eq!(classify(&out, Some(NOT_FOUND_MARKER)), Outcome::Success);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        let out = CommandOutput::new("Error: something", 1);
        assert_eq!(classify(&out, None), Outcome::Success);
    }

    #[test]
    fn test_add_remote_args() {
        let mock = MockRunner::new();
        let (outcome, _) = add_remote(&mock, GNOME_REPO);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(
            mock.calls(),
            vec![vec!["remote-add", "--if-not-exists", "gnome-apps", GNOME_REPO]]
        );
    }

    #[test]
    fn test_add_remote_error_is_failure() {
        let mock = MockRunner::new();
        mock.respond("remote-add", "error: Can't load uri");
        let (outcome, output) = add_remote(&mock, GNOME_REPO);
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(output.output, "error: Can't load uri");
    }

    #[test]
    fn test_remove_remote_not_found_is_noop() {
        let mock = MockRunner::new();
        mock.respond("remote-delete", "error: Remote 'gnome-apps' not found");
        let (outcome, _) = remove_remote(&mock, GNOME_REPO);
        assert_eq!(outcome, Outcome::AlreadyInDesiredState);
        assert_eq!(
            mock.calls(),
            vec![vec!["remote-delete", "--force", "gnome-apps"]]
        );
    }

    #[test]
    fn test_remove_remote_bare_error_is_failure() {
        let mock = MockRunner::new();
        mock.respond("remote-delete", "error: permission denied");
        let (outcome, _) = remove_remote(&mock, GNOME_REPO);
        assert_eq!(outcome, Outcome::Failure);
    }

    #[test]
    fn test_install_passes_raw_ref() {
        let mock = MockRunner::new();
        install_app(&mock, GEDIT_REF);
        assert_eq!(mock.calls(), vec![vec!["install", "-y", "--from", GEDIT_REF]]);
    }

    #[test]
    fn test_install_already_installed_is_noop() {
        let mock = MockRunner::new();
        mock.respond("install", "error: org.gnome.gedit already installed");
        let (outcome, _) = install_app(&mock, GEDIT_REF);
        assert_eq!(outcome, Outcome::AlreadyInDesiredState);
    }

    #[test]
    fn test_uninstall_uses_derived_id() {
        let mock = MockRunner::new();
        let (outcome, _) = uninstall_app(&mock, GEDIT_REF).unwrap();
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(mock.calls(), vec![vec!["uninstall", "org.gnome.gedit"]]);
    }

    #[test]
    fn test_uninstall_not_installed_is_noop() {
        let mock = MockRunner::new();
        mock.respond("uninstall", "error: org.gnome.gedit/*unspecified*/* not installed");
        let (outcome, _) = uninstall_app(&mock, "org.gnome.gedit").unwrap();
        assert_eq!(outcome, Outcome::AlreadyInDesiredState);
    }

    #[test]
    fn test_uninstall_failure() {
        let mock = MockRunner::new();
        mock.respond("uninstall", "error: unable to lock");
        let (outcome, output) = uninstall_app(&mock, "org.gnome.gedit").unwrap();
        assert_eq!(outcome, Outcome::Failure);
        assert!(output.contains("unable to lock"));
    }
}
