//! Error types and handling for gitpin
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Two error kinds dominate: the git executable being unavailable, and a git
//! subprocess exiting non-zero. The latter always carries the literal command
//! line so a failure can be reproduced by hand. Drift classification is not
//! an error and lives in [`crate::status`].

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gitpin operations
#[derive(Error, Diagnostic, Debug)]
pub enum GitpinError {
    /// The git executable is not on the search path
    #[error("Git executable not found, install it or disable dependency checking")]
    #[diagnostic(
        code(gitpin::git::unavailable),
        help("Every repository operation is delegated to the `git` CLI")
    )]
    GitUnavailable,

    /// A git subprocess exited non-zero or could not be spawned
    #[error("Command `{command}` failed")]
    #[diagnostic(code(gitpin::git::command_failed), help("{stderr}"))]
    CommandFailed {
        /// The literal command line, for reproducibility
        command: String,
        /// Captured stderr (or the spawn error) from the subprocess
        stderr: String,
    },

    /// The destination could not be wiped before a fresh checkout
    #[error("Failed to remove directory: {path}: {reason}")]
    #[diagnostic(code(gitpin::fs::remove_failed))]
    DirRemoveFailed { path: String, reason: String },

    /// HEAD was unreadable after a checkout that reported success
    #[error("Failed to resolve HEAD revision in {path}")]
    #[diagnostic(
        code(gitpin::git::revision_unresolved),
        help("The working copy may be corrupt; re-run a clean checkout")
    )]
    RevisionUnresolved { path: String },
}

/// Result type alias for gitpin operations
pub type Result<T> = std::result::Result<T, GitpinError>;
