//! gitpin - git-backed source adapter for pinned dependency checkouts
//!
//! Turns a declared dependency ("fetch this repository, pinned to this
//! branch, tag, or ref, optionally with submodules") into a materialized
//! working copy plus a reproducible lock entry, and classifies drift between
//! the declaration, the lock entry, and the actual on-disk state.
//!
//! The outer dependency resolver, lock-file store, and CLI are external
//! collaborators; this crate exposes the operations they compose:
//!
//! - [`GitSource::accepts`] normalizes raw declared options, rewriting a
//!   GitHub shorthand into a full URL or declining the dependency
//! - [`checkout()`] and [`update()`] materialize and pin a working copy,
//!   returning a fresh [`LockEntry`]
//! - [`status()`] reports whether a working copy is in sync, has drifted
//!   from its lock, or was declared differently since it was locked
//!
//! All repository operations shell out to the `git` executable as discrete
//! argument vectors; availability and version of the tool are probed once
//! through an explicitly passed [`Capabilities`] value.

pub mod error;
pub mod git;
pub mod lockfile;
pub mod source;
pub mod status;

pub use error::{GitpinError, Result};
pub use git::{Capabilities, RepoState, checkout, is_checked_out, read_state, update};
pub use lockfile::{LockEntry, PinOption, SourceKind};
pub use source::{GitSource, Pin, SourceOptions};
pub use status::{DriftStatus, status};
