//! Error types for flatpak operations.
//!
//! Action errors carry the raw identifier the user supplied and the full
//! captured command output, since the CLI's free-form text is the only
//! diagnostic available.

use declarative::ReconcileError;
use thiserror::Error;

/// Categories of reconciliation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid parameters, rejected before any action
    Configuration,
    /// Adding or removing a remote failed
    RemoteAction,
    /// Installing or uninstalling an application failed
    AppAction,
    /// Other/unknown errors
    Other,
}

/// Errors that can occur while reconciling flatpak state.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameters (bad `state`, malformed application URL, ...)
    #[error("{message}")]
    Configuration {
        /// What was wrong with the input
        message: String,
    },

    /// A remote add/remove was classified as a failure
    #[error("{message}")]
    RemoteAction {
        /// Remote reference as supplied
        remote: String,
        /// Summary naming the remote
        message: String,
        /// Raw command output
        output: String,
    },

    /// An install/uninstall was classified as a failure
    #[error("{message}")]
    AppAction {
        /// Application reference as supplied
        app: String,
        /// Summary naming the application
        message: String,
        /// Raw command output
        output: String,
    },

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Configuration { .. } => ErrorCategory::Configuration,
            Error::RemoteAction { .. } => ErrorCategory::RemoteAction,
            Error::AppAction { .. } => ErrorCategory::AppAction,
            Error::Other(_) => ErrorCategory::Other,
        }
    }

    /// Raw command output behind an action error.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Error::RemoteAction { output, .. } | Error::AppAction { output, .. } => Some(output),
            _ => None,
        }
    }

    /// Rebuild a typed error from the engine's failure record.
    pub fn from_failure(failure: &ReconcileError) -> Self {
        match failure.resource_type.as_str() {
            crate::resource::REMOTE_TYPE => Error::RemoteAction {
                remote: failure.resource_id.clone(),
                message: failure.message.clone(),
                output: failure.reason.clone(),
            },
            crate::resource::APP_TYPE => Error::AppAction {
                app: failure.resource_id.clone(),
                message: failure.message.clone(),
                output: failure.reason.clone(),
            },
            _ => Error::Other(failure.message.clone()),
        }
    }

    /// Recover a typed error that crossed the `anyhow` boundary of the
    /// `Resource` trait.
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        match err.downcast::<Error>() {
            Ok(e) => e,
            Err(other) => Error::Other(other.to_string()),
        }
    }

    /// Failure record for the engine's result sink.
    pub fn to_failure(&self) -> ReconcileError {
        let (resource_id, resource_type) = match self {
            Error::RemoteAction { remote, .. } => (remote.clone(), crate::resource::REMOTE_TYPE),
            Error::AppAction { app, .. } => (app.clone(), crate::resource::APP_TYPE),
            _ => (String::new(), ""),
        };
        ReconcileError {
            resource_id,
            resource_type: resource_type.to_string(),
            message: self.to_string(),
            reason: self.reason().unwrap_or_default().to_string(),
        }
    }
}

/// Result type for flatpak operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        assert_eq!(
            Error::config("bad").category(),
            ErrorCategory::Configuration
        );
        let err = Error::RemoteAction {
            remote: "r".into(),
            message: "error while adding remote: r".into(),
            output: "error: boom".into(),
        };
        assert_eq!(err.category(), ErrorCategory::RemoteAction);
        assert_eq!(err.reason(), Some("error: boom"));
        assert_eq!(err.to_string(), "error while adding remote: r");
    }

    #[test]
    fn test_failure_roundtrip_keeps_kind() {
        let err = Error::AppAction {
            app: "org.gnome.gedit".into(),
            message: "error while installing flatpak org.gnome.gedit".into(),
            output: "error: no remote".into(),
        };
        let back = Error::from_failure(&err.to_failure());
        assert_eq!(back.category(), ErrorCategory::AppAction);
        assert_eq!(back.reason(), Some("error: no remote"));
    }

    #[test]
    fn test_from_anyhow_downcasts() {
        let wrapped = anyhow::Error::new(Error::config("invalid state"));
        let err = Error::from_anyhow(wrapped);
        assert_eq!(err.category(), ErrorCategory::Configuration);

        let other = Error::from_anyhow(anyhow::anyhow!("spawn"));
        assert_eq!(other.category(), ErrorCategory::Other);
    }
}
