//! Lock entry codec for git sources
//!
//! Converts between a declared [`GitSource`] and the canonical, persistable
//! lock representation, and renders the short human-readable form. The lock
//! file itself is owned by the outer store; this module only produces and
//! compares values. The `revision` of a [`LockEntry`] is written exclusively
//! by the checkout engine after a successful checkout.

use serde::{Deserialize, Serialize};

use crate::source::{GitSource, Pin};

/// Source kind tag recorded in a lock entry.
///
/// This adapter only ever produces [`SourceKind::Git`]; the other kinds
/// belong to sibling adapters and exist here so the classifier can detect a
/// dependency whose source type itself changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Git repository source
    Git,
    /// Local directory source
    Path,
    /// Package registry source
    Registry,
}

/// One element of the canonical pin-options list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum PinOption {
    /// Pinned to a branch
    Branch(String),
    /// Pinned to an arbitrary reference
    Ref(String),
    /// Pinned to a tag
    Tag(String),
    /// Submodules were requested at lock time
    Submodules(bool),
}

/// Persisted pin record for one dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEntry {
    /// Source kind; always [`SourceKind::Git`] when produced by this adapter
    #[serde(rename = "type")]
    pub kind: SourceKind,

    /// Repository URL as declared at lock time
    pub url: String,

    /// Resolved full commit SHA for reproducibility, never a symbolic name
    pub revision: String,

    /// Canonical pin options recorded at lock time
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PinOption>,
}

impl GitSource {
    /// Canonical pin options: a single winner by precedence branch > ref >
    /// tag, plus a `submodules` marker when requested.
    ///
    /// This one list drives both lock storage and the engine's symbolic
    /// checkout-target fallback, so the two can never diverge.
    #[must_use]
    pub fn lock_options(&self) -> Vec<PinOption> {
        let mut options = Vec::new();
        match &self.pin {
            Some(Pin::Branch(name)) => options.push(PinOption::Branch(name.clone())),
            Some(Pin::Ref(name)) => options.push(PinOption::Ref(name.clone())),
            Some(Pin::Tag(name)) => options.push(PinOption::Tag(name.clone())),
            None => {}
        }
        if self.submodules {
            options.push(PinOption::Submodules(true));
        }
        options
    }

    /// Whether two declarations denote the same dependency.
    ///
    /// Compares URL and canonical pin options only; the locked revision is
    /// deliberately ignored, so a dependency re-pinned to a newer commit is
    /// still "the same dependency".
    #[must_use]
    pub fn same_dependency(&self, other: &GitSource) -> bool {
        self.url == other.url && self.lock_options() == other.lock_options()
    }
}

impl LockEntry {
    /// Build a lock entry for a freshly checked-out source
    pub(crate) fn new(source: &GitSource, revision: String) -> Self {
        Self {
            kind: SourceKind::Git,
            url: source.url.clone(),
            revision,
            options: source.lock_options(),
        }
    }

    /// Short human-readable rendering: abbreviated revision plus the pin.
    ///
    /// `abcdef1`, `abcdef1 (tag: v1.0)`, `abcdef1 (ref)`. The submodules
    /// marker is never rendered.
    #[must_use]
    pub fn render_short(&self) -> String {
        let short = self.revision.get(..7).unwrap_or(&self.revision);
        for option in &self.options {
            match option {
                PinOption::Ref(_) => return format!("{short} (ref)"),
                PinOption::Branch(name) => return format!("{short} (branch: {name})"),
                PinOption::Tag(name) => return format!("{short} (tag: {name})"),
                PinOption::Submodules(_) => {}
            }
        }
        short.to_string()
    }
}
