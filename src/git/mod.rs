//! Git operations for materializing pinned working copies
//!
//! This module handles:
//! - Probing the external git executable (availability, version)
//! - Cloning and fetching repositories via argv subprocess calls
//! - Checking out pinned revisions and initializing submodules
//! - Inspecting on-disk working-copy state
//!
//! No git wire protocol is spoken in-process; every repository operation is
//! delegated to the `git` CLI, and authentication is delegated entirely to
//! git's native system (SSH keys, credential helpers, environment).
//!
//! All operations are synchronous and blocking, with no internal locking or
//! timeouts; callers own exclusivity of the destination directory.

pub mod capabilities;
pub mod checkout;
mod exec;
pub mod inspect;

pub use capabilities::Capabilities;
pub use checkout::{checkout, update};
pub use inspect::{RepoState, is_checked_out, read_state};
