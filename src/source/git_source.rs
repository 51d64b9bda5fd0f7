//! Git source handling
//!
//! This module provides the [`GitSource`] struct and the normalization of
//! raw declared-dependency options into it.

use std::path::PathBuf;

use serde::Deserialize;

/// A branch, tag, or explicit reference a source is pinned to.
///
/// Exactly one case can be active; a declaration that floats on the remote
/// default branch carries no pin at all (`Option<Pin>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pin {
    /// Follow a named branch
    Branch(String),
    /// Pin to a named tag
    Tag(String),
    /// Pin to an arbitrary reference, passed to git verbatim
    Ref(String),
}

/// Raw declared-dependency options, before normalization.
///
/// This is the shape the outer manifest layer hands over; several pin keys
/// may be present at once, and the shorthand/URL keys are mutually
/// exclusive by convention.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceOptions {
    /// Fully-qualified repository URL (HTTPS, SSH, or local path)
    #[serde(default)]
    pub repository: Option<String>,

    /// GitHub shorthand `owner/repo`, rewritten to an HTTPS URL
    #[serde(default)]
    pub github: Option<String>,

    /// Branch to follow
    #[serde(default)]
    pub branch: Option<String>,

    /// Arbitrary reference to pin to
    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,

    /// Tag to pin to
    #[serde(default)]
    pub tag: Option<String>,

    /// Whether to initialize submodules after checkout
    #[serde(default)]
    pub submodules: Option<bool>,

    /// Destination the working copy is materialized at
    pub destination: PathBuf,
}

/// Git repository source details, normalized from declared options.
///
/// Immutable for the duration of one checkout/update/status cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitSource {
    /// Repository URL (HTTPS, SSH, or local path)
    pub url: String,

    /// Pin to a branch, tag, or ref; `None` floats on the remote default
    pub pin: Option<Pin>,

    /// Whether submodules are initialized after checkout
    pub submodules: bool,

    /// Destination path of the working copy
    pub dest: PathBuf,
}

impl GitSource {
    /// Create a source with no pin and no submodules
    pub fn new(url: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            pin: None,
            submodules: false,
            dest: dest.into(),
        }
    }

    /// Set the pin
    #[must_use]
    pub fn with_pin(mut self, pin: Pin) -> Self {
        self.pin = Some(pin);
        self
    }

    /// Request submodule initialization
    #[must_use]
    pub fn with_submodules(mut self) -> Self {
        self.submodules = true;
        self
    }

    /// Normalize declared options into a git source.
    ///
    /// A `github` shorthand is rewritten to a fully-qualified HTTPS URL and
    /// the shorthand key dropped; an explicit `repository` passes through
    /// unchanged. Returns `None` when neither is present, signaling the
    /// outer resolver to try a different source adapter.
    ///
    /// When several pin keys are declared together, a single winner is
    /// chosen by precedence branch > ref > tag. Pure transform, no side
    /// effects.
    #[must_use]
    pub fn accepts(options: &SourceOptions) -> Option<Self> {
        let url = if let Some(shorthand) = &options.github {
            format!("https://github.com/{shorthand}.git")
        } else {
            options.repository.clone()?
        };

        let pin = if let Some(branch) = &options.branch {
            Some(Pin::Branch(branch.clone()))
        } else if let Some(git_ref) = &options.git_ref {
            Some(Pin::Ref(git_ref.clone()))
        } else if let Some(tag) = &options.tag {
            Some(Pin::Tag(tag.clone()))
        } else {
            None
        };

        Some(Self {
            url,
            pin,
            submodules: options.submodules.unwrap_or(false),
            dest: options.destination.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn options() -> SourceOptions {
        SourceOptions {
            destination: PathBuf::from("deps/example"),
            ..SourceOptions::default()
        }
    }

    #[test]
    fn test_accepts_github_shorthand_rewrites_url() {
        let mut shorthand = options();
        shorthand.github = Some("owner/repo".to_string());

        let mut explicit = options();
        explicit.repository = Some("https://github.com/owner/repo.git".to_string());

        let from_shorthand = GitSource::accepts(&shorthand).unwrap();
        let from_explicit = GitSource::accepts(&explicit).unwrap();
        assert_eq!(from_shorthand, from_explicit);
        assert_eq!(from_shorthand.url, "https://github.com/owner/repo.git");
    }

    #[test]
    fn test_accepts_explicit_repository_passes_through() {
        let mut opts = options();
        opts.repository = Some("git@example.com:team/dep.git".to_string());

        let source = GitSource::accepts(&opts).unwrap();
        assert_eq!(source.url, "git@example.com:team/dep.git");
        assert_eq!(source.pin, None);
        assert!(!source.submodules);
        assert_eq!(source.dest, PathBuf::from("deps/example"));
    }

    #[test]
    fn test_accepts_declines_unrecognized_options() {
        assert_eq!(GitSource::accepts(&options()), None);
    }

    #[test]
    fn test_pin_precedence_branch_beats_tag() {
        let mut opts = options();
        opts.repository = Some("https://example.com/repo.git".to_string());
        opts.branch = Some("main".to_string());
        opts.tag = Some("v1.0".to_string());

        let source = GitSource::accepts(&opts).unwrap();
        assert_eq!(source.pin, Some(Pin::Branch("main".to_string())));
    }

    #[test]
    fn test_pin_precedence_ref_beats_tag() {
        let mut opts = options();
        opts.repository = Some("https://example.com/repo.git".to_string());
        opts.git_ref = Some("refs/pull/1/head".to_string());
        opts.tag = Some("v1.0".to_string());

        let source = GitSource::accepts(&opts).unwrap();
        assert_eq!(source.pin, Some(Pin::Ref("refs/pull/1/head".to_string())));
    }

    #[test]
    fn test_options_deserialize_with_ref_key() {
        let json = r#"{
            "repository": "https://example.com/repo.git",
            "ref": "refs/heads/dev",
            "submodules": true,
            "destination": "deps/dep"
        }"#;
        let opts: SourceOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts.git_ref.as_deref(), Some("refs/heads/dev"));

        let source = GitSource::accepts(&opts).unwrap();
        assert_eq!(source.pin, Some(Pin::Ref("refs/heads/dev".to_string())));
        assert!(source.submodules);
    }
}
