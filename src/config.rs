//! Reconciliation parameters from flags and module arguments files.
//!
//! An arguments file is the JSON (or TOML) object an automation framework
//! hands to a module: `name`, `remote`, `state`, plus the framework's own
//! underscore-prefixed keys, of which only the check-mode flag is read.

use anyhow::{Context, Result};
use flatkit::ReconcileParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::TargetArgs;

/// Raw contents of an arguments file
#[derive(Debug, Default, Deserialize)]
pub struct ArgsFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub remote: Option<String>,
    /// Kept as a string so an invalid value is a configuration error with a
    /// clear message rather than a deserialization error.
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, rename = "_ansible_check_mode", alias = "check_mode")]
    pub check_mode: Option<bool>,
}

/// Supported arguments file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgsFormat {
    Json,
    Toml,
}

impl ArgsFormat {
    /// Detect format from the extension; anything but `.toml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl ArgsFile {
    /// Parse arguments from a string
    pub fn parse(content: &str, format: ArgsFormat) -> Result<Self> {
        match format {
            ArgsFormat::Json => serde_json::from_str(content).context("Invalid JSON arguments"),
            ArgsFormat::Toml => toml::from_str(content).context("Invalid TOML arguments"),
        }
    }

    /// Load arguments from a file, expanding `~`
    pub fn load(path: &Path) -> Result<Self> {
        let path = expand_path(path);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::parse(&content, ArgsFormat::from_path(&path))
            .with_context(|| format!("Could not parse {}", path.display()))
    }
}

fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&raw).as_ref())
}

/// Merge the arguments file (if any) with flags; flags win.
pub fn resolve(target: &TargetArgs, check: bool) -> Result<ReconcileParams> {
    let file = match &target.args_file {
        Some(path) => ArgsFile::load(path)?,
        None => ArgsFile::default(),
    };
    merge(target, file, check)
}

fn merge(target: &TargetArgs, file: ArgsFile, check: bool) -> Result<ReconcileParams> {
    let name = target.name.clone().or(file.name).unwrap_or_default();
    let remote = target.remote.clone().or(file.remote).unwrap_or_default();
    let state = match target.state {
        Some(state) => declarative::ResourceState::from(state).to_string(),
        None => file.state.unwrap_or_else(|| "present".to_string()),
    };
    let check_mode = check || file.check_mode.unwrap_or(false);

    let params = ReconcileParams::parse(&name, &remote, &state, check_mode)?;
    log::debug!("params: {params:?}");
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::StateArg;
    use declarative::ResourceState;
    use std::io::Write;

    #[test]
    fn test_parse_ansible_json() {
        let content = r#"{
            "name": "org.gnome.gedit",
            "remote": "https://sdk.gnome.org/gnome-apps.flatpakrepo",
            "state": "absent",
            "_ansible_check_mode": true,
            "_ansible_verbosity": 0
        }"#;
        let args = ArgsFile::parse(content, ArgsFormat::Json).unwrap();
        assert_eq!(args.name.as_deref(), Some("org.gnome.gedit"));
        assert_eq!(args.state.as_deref(), Some("absent"));
        assert_eq!(args.check_mode, Some(true));
    }

    #[test]
    fn test_parse_toml_with_plain_check_mode() {
        let content = r#"
name = "org.gnome.gedit"
check_mode = true
"#;
        let args = ArgsFile::parse(content, ArgsFormat::Toml).unwrap();
        assert_eq!(args.name.as_deref(), Some("org.gnome.gedit"));
        assert_eq!(args.remote, None);
        assert_eq!(args.check_mode, Some(true));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ArgsFormat::from_path(Path::new("a.toml")), ArgsFormat::Toml);
        assert_eq!(ArgsFormat::from_path(Path::new("a.json")), ArgsFormat::Json);
        assert_eq!(ArgsFormat::from_path(Path::new("args")), ArgsFormat::Json);
    }

    #[test]
    fn test_load_and_flags_override() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"name": "org.gnome.gedit", "remote": "myrepo", "state": "absent"}}"#
        )
        .unwrap();

        let target = TargetArgs {
            name: None,
            remote: Some("otherrepo".to_string()),
            state: Some(StateArg::Present),
            args_file: Some(file.path().to_path_buf()),
        };
        let params = resolve(&target, false).unwrap();

        assert_eq!(params.name, "org.gnome.gedit");
        assert_eq!(params.remote, "otherrepo");
        assert_eq!(params.state, ResourceState::Present);
        assert!(!params.check_mode);
    }

    #[test]
    fn test_defaults_without_file() {
        let params = resolve(&TargetArgs::default(), true).unwrap();
        assert_eq!(params.name, "");
        assert_eq!(params.remote, "");
        assert_eq!(params.state, ResourceState::Present);
        assert!(params.check_mode);
    }

    #[test]
    fn test_invalid_state_in_file_is_rejected() {
        let file = ArgsFile {
            state: Some("latest".to_string()),
            ..Default::default()
        };
        let err = merge(&TargetArgs::default(), file, false).unwrap_err();
        let err = err.downcast::<flatkit::Error>().unwrap();
        assert_eq!(err.category(), flatkit::ErrorCategory::Configuration);
    }

    #[test]
    fn test_missing_file_is_error() {
        let target = TargetArgs {
            args_file: Some(PathBuf::from("/nonexistent/args.json")),
            ..Default::default()
        };
        assert!(resolve(&target, false).is_err());
    }
}
