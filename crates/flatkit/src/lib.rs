//! # flatkit
//!
//! Pure Rust library for converging flatpak remotes and applications.
//!
//! This crate provides functionality for:
//! - Deriving canonical keys from remote and application references
//! - Inspecting which remotes and applications are present
//! - Adding/removing remotes and installing/uninstalling applications,
//!   classifying the CLI's free-form output
//! - Reconciling both against a desired state, with check mode
//!
//! ## Example
//!
//! ```no_run
//! use flatkit::{Reconciler, ReconcileParams};
//!
//! let params = ReconcileParams::parse(
//!     "https://git.gnome.org/browse/gnome-apps-nightly/plain/gedit.flatpakref",
//!     "https://sdk.gnome.org/gnome-apps.flatpakrepo",
//!     "present",
//!     false,
//! )
//! .expect("valid params");
//!
//! let changed = Reconciler::default().run(&params).expect("reconcile failed");
//! println!("changed: {changed}");
//! ```
//!
//! ## Testing
//!
//! Every host interaction goes through [`runner::CommandRunner`]; inject a
//! [`runner::MockRunner`] to run the whole reconciliation without flatpak.

#![warn(clippy::all)]

pub mod actions;
pub mod error;
pub mod ident;
pub mod inspect;
pub mod reconcile;
pub mod resource;
pub mod runner;
pub mod types;

pub use error::{Error, ErrorCategory, Result};
pub use ident::{app_key, is_url_ref, remote_key};
pub use reconcile::Reconciler;
pub use resource::{FlatpakApp, FlatpakRemote};
pub use runner::{CommandOutput, CommandRunner, MockRunner, ProcessRunner};
pub use types::{Outcome, ReconcileParams};
