//! Canonical keys for remote and application references.
//!
//! Both functions are purely syntactic; nothing here touches the network
//! or the host.

use crate::error::{Error, Result};

/// Whether a reference looks like a URL rather than a canonical id.
pub fn is_url_ref(reference: &str) -> bool {
    reference.contains("http://") || reference.contains("https://")
}

/// Short local alias for a remote.
///
/// The last `/` segment, cut at its first `.`:
/// `https://sdk.gnome.org/gnome-apps.flatpakrepo` -> `gnome-apps`,
/// `myrepo` -> `myrepo`.
pub fn remote_key(remote_ref: &str) -> String {
    let name = remote_ref.rsplit('/').next().unwrap_or(remote_ref);
    match name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name.to_string(),
    }
}

/// Reverse-DNS application id for an application reference.
///
/// URL references become `<tld>.<domain>.<file stem>` built from the last
/// two host labels and the file name, e.g.
/// `https://git.gnome.org/browse/gnome-apps-nightly/plain/gedit.flatpakref`
/// -> `org.gnome.gedit`. Anything else is assumed canonical and returned as is.
///
/// A URL host needs at least two labels; anything shorter (including an
/// empty host) is a configuration error.
pub fn app_key(app_ref: &str) -> Result<String> {
    if !is_url_ref(app_ref) {
        return Ok(app_ref.to_string());
    }

    let segments: Vec<&str> = app_ref.split('/').collect();
    // A "://" always yields a third segment; an empty host fails the label check.
    let host = segments.get(2).copied().unwrap_or_default();

    let labels: Vec<&str> = host.split('.').collect();
    let [.., domain, tld] = labels.as_slice() else {
        return Err(Error::config(format!(
            "application URL host needs at least two labels: {app_ref}"
        )));
    };

    let file = segments.last().copied().unwrap_or_default();
    let leaf = file.split('.').next().unwrap_or_default();

    Ok(format!("{tld}.{domain}.{leaf}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_key_from_url() {
        assert_eq!(
            remote_key("https://sdk.gnome.org/gnome-apps.flatpakrepo"),
            "gnome-apps"
        );
        assert_eq!(
            remote_key("https://dl.flathub.org/repo/flathub.flatpakrepo"),
            "flathub"
        );
    }

    #[test]
    fn test_remote_key_bare_token() {
        assert_eq!(remote_key("myrepo"), "myrepo");
        assert_eq!(remote_key(""), "");
    }

    #[test]
    fn test_remote_key_cuts_at_first_dot() {
        assert_eq!(remote_key("repo.tar.gz"), "repo");
    }

    #[test]
    fn test_remote_key_is_pure() {
        let input = "https://sdk.gnome.org/gnome-apps.flatpakrepo";
        assert_eq!(remote_key(input), remote_key(input));
    }

    #[test]
    fn test_app_key_from_url() {
        assert_eq!(
            app_key("https://git.gnome.org/browse/gnome-apps-nightly/plain/gedit.flatpakref")
                .unwrap(),
            "org.gnome.gedit"
        );
        assert_eq!(
            app_key("http://s3.amazonaws.com/alexlarsson/spotify-repo/spotify.flatpakref")
                .unwrap(),
            "com.amazonaws.spotify"
        );
    }

    #[test]
    fn test_app_key_canonical_unchanged() {
        assert_eq!(app_key("org.gnome.gedit").unwrap(), "org.gnome.gedit");
        assert_eq!(app_key("gedit").unwrap(), "gedit");
    }

    #[test]
    fn test_app_key_rejects_single_label_host() {
        let err = app_key("https://localhost/gedit.flatpakref").unwrap_err();
        assert_eq!(
            err.category(),
            crate::error::ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_app_key_rejects_empty_host() {
        let err = app_key("https://").unwrap_err();
        assert_eq!(
            err.category(),
            crate::error::ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_app_key_malformed_scheme_is_not_a_url() {
        assert_eq!(app_key("https:/").unwrap(), "https:/");
    }

    #[test]
    fn test_is_url_ref() {
        assert!(is_url_ref("https://example.org/x.flatpakref"));
        assert!(is_url_ref("http://example.org/x.flatpakref"));
        assert!(!is_url_ref("org.gnome.gedit"));
    }
}
