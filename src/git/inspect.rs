//! Working-copy state inspection
//!
//! Reads the actual on-disk state of a destination: whether it is a git
//! working copy at all, which origin URL it is configured with, and which
//! revision HEAD currently resolves to. State is a snapshot recomputed on
//! every call, never cached.

use std::path::Path;

use super::exec;
use crate::error::Result;

/// Snapshot of a working copy's observable state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoState {
    /// Configured `remote.origin.url`, if any
    pub origin_url: Option<String>,
    /// Currently resolvable HEAD revision, if any
    pub head: Option<String>,
}

/// Whether `path` holds a git working copy.
///
/// A metadata-marker presence test only; no subprocess is spawned. The
/// marker may be a directory or, for worktrees and submodules, a file.
#[must_use]
pub fn is_checked_out(path: &Path) -> bool {
    path.join(".git").exists()
}

/// Read the current origin URL and HEAD revision inside `path`.
///
/// Either field is `None` when unset, e.g. a freshly cloned repository with
/// no checkout yet has no resolvable HEAD.
pub fn read_state(path: &Path) -> Result<RepoState> {
    let origin_url = exec::read(path, &exec::argv(&["config", "remote.origin.url"]))?;
    let head = exec::read(
        path,
        &exec::argv(&["rev-parse", "--verify", "--quiet", "HEAD"]),
    )?;
    Ok(RepoState { origin_url, head })
}
