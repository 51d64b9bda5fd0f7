//! Checkout and update engine
//!
//! Orchestrates clone, fetch, checkout, and submodule initialization, and
//! produces the fresh lock entry for a materialized working copy. Any
//! non-zero subprocess exit aborts the whole call; there is no retry and no
//! partial lock entry.

use std::ffi::OsString;
use std::fs;

use crate::error::{GitpinError, Result};
use crate::lockfile::LockEntry;
use crate::source::{GitSource, Pin};

use super::capabilities::Capabilities;
use super::exec;
use super::inspect;

/// Clone `source` into its destination and pin it, wiping anything already
/// there.
///
/// Destructive but always safe to re-invoke: the destination is removed
/// before the clone, so a previously failed attempt never leaks into the
/// next one. The clone skips the automatic working-tree checkout; the shared
/// sequence points HEAD at the right revision immediately after, so a large
/// tree is only materialized once.
///
/// When `locked` is supplied, its revision takes precedence over the pin as
/// the checkout target.
pub fn checkout(
    caps: &Capabilities,
    source: &GitSource,
    locked: Option<&LockEntry>,
) -> Result<LockEntry> {
    caps.ensure_available()?;

    if source.dest.exists() {
        fs::remove_dir_all(&source.dest).map_err(|e| GitpinError::DirRemoveFailed {
            path: source.dest.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    let mut clone = exec::argv(&["clone", "--no-checkout", "--progress"]);
    clone.push(OsString::from(&source.url));
    clone.push(source.dest.clone().into_os_string());
    exec::run(None, &clone)?;

    resolve_and_checkout(source, locked)
}

/// Fetch and re-pin an existing working copy in place.
///
/// Rewrites `remote.origin.url` first, so a declaration whose URL changed
/// since the last checkout heals the working copy instead of fetching from a
/// stale remote. Never deletes the destination; untracked files survive.
pub fn update(
    caps: &Capabilities,
    source: &GitSource,
    locked: Option<&LockEntry>,
) -> Result<LockEntry> {
    caps.ensure_available()?;

    let mut config = exec::argv(&["config", "remote.origin.url"]);
    config.push(OsString::from(&source.url));
    exec::run(Some(&source.dest), &config)?;

    let mut fetch = exec::argv(&["fetch", "--force"]);
    if caps.supports_progress() {
        fetch.push(OsString::from("--progress"));
    }
    if matches!(source.pin, Some(Pin::Tag(_))) {
        fetch.push(OsString::from("--tags"));
    }
    exec::run(Some(&source.dest), &fetch)?;

    resolve_and_checkout(source, locked)
}

/// Shared tail of [`checkout`] and [`update`]: point the working copy at the
/// target revision and build the fresh lock entry.
///
/// The target is the locked revision when one was supplied, otherwise a
/// symbolic reference derived from the pin. The symbolic fallbacks use the
/// same precedence as [`GitSource::lock_options`], so the lock and the
/// checked-out tree can never disagree about which pin won.
fn resolve_and_checkout(source: &GitSource, locked: Option<&LockEntry>) -> Result<LockEntry> {
    let target = match locked {
        Some(entry) => entry.revision.clone(),
        None => match &source.pin {
            Some(Pin::Branch(branch)) => format!("origin/{branch}"),
            Some(Pin::Ref(git_ref)) => git_ref.clone(),
            Some(Pin::Tag(tag)) => tag.clone(),
            None => "origin/master".to_string(),
        },
    };

    let mut args = exec::argv(&["checkout", "--quiet"]);
    args.push(OsString::from(&target));
    exec::run(Some(&source.dest), &args)?;

    if source.submodules {
        exec::run(
            Some(&source.dest),
            &exec::argv(&["submodule", "update", "--init", "--recursive"]),
        )?;
    }

    let state = inspect::read_state(&source.dest)?;
    let revision = state.head.ok_or_else(|| GitpinError::RevisionUnresolved {
        path: source.dest.display().to_string(),
    })?;

    Ok(LockEntry::new(source, revision))
}
