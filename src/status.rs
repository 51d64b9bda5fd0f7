//! Drift classification between declaration, lock entry, and working copy
//!
//! The classifier never mutates anything; it reads on-disk state and tells
//! the caller which remediation applies: nothing, a cheap local checkout to
//! the locked revision, or a full re-resolve and re-fetch.

use crate::error::Result;
use crate::git::{Capabilities, inspect};
use crate::lockfile::{LockEntry, SourceKind};
use crate::source::GitSource;

/// Outcome of comparing a declaration, its lock entry, and the working copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftStatus {
    /// Declaration, lock, and working copy all agree
    Ok,
    /// The lock is still valid for the declaration, but the working copy has
    /// drifted from it; checking out the locked revision repairs it locally
    Mismatch,
    /// The declaration itself changed relative to what was locked;
    /// re-resolving and re-fetching is required
    Outdated,
}

/// Classify how `source` relates to its lock entry and on-disk state.
///
/// With no lock entry nothing is pinned yet, which is a plain [`Mismatch`]
/// (the caller should checkout). A lock entry recorded by a different source
/// adapter means the dependency's source type itself changed, which is
/// [`Outdated`] no matter what is on disk.
///
/// [`Mismatch`]: DriftStatus::Mismatch
/// [`Outdated`]: DriftStatus::Outdated
pub fn status(
    caps: &Capabilities,
    source: &GitSource,
    locked: Option<&LockEntry>,
) -> Result<DriftStatus> {
    caps.ensure_available()?;

    let Some(entry) = locked else {
        return Ok(DriftStatus::Mismatch);
    };
    if entry.kind != SourceKind::Git {
        return Ok(DriftStatus::Outdated);
    }
    if entry.url != source.url {
        return Ok(DriftStatus::Outdated);
    }
    if entry.options != source.lock_options() {
        return Ok(DriftStatus::Outdated);
    }

    // A missing or never-checked-out destination reads as all-null state;
    // the locked revision can't match a null HEAD.
    if !inspect::is_checked_out(&source.dest) {
        return Ok(DriftStatus::Mismatch);
    }

    let state = inspect::read_state(&source.dest)?;
    if state.head.as_deref() != Some(entry.revision.as_str()) {
        return Ok(DriftStatus::Mismatch);
    }
    if state.origin_url.as_deref() != Some(entry.url.as_str()) {
        return Ok(DriftStatus::Outdated);
    }
    Ok(DriftStatus::Ok)
}
