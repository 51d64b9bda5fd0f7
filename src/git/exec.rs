//! Subprocess plumbing for the git CLI
//!
//! Every git invocation goes through this module as a discrete argument
//! vector; nothing is ever interpolated into a shell string, so repository
//! URLs and ref names containing metacharacters are passed through verbatim.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Output};

use crate::error::{GitpinError, Result};

/// Program name of the external VCS tool
pub const GIT: &str = "git";

/// Build an argument vector from string literals
pub(crate) fn argv(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

/// Render an argument vector as the literal command line for error messages
pub(crate) fn render(args: &[OsString]) -> String {
    let mut rendered = String::from(GIT);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&arg.to_string_lossy());
    }
    rendered
}

fn spawn(cwd: Option<&Path>, args: &[OsString]) -> Result<Output> {
    let mut command = Command::new(GIT);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }
    command.output().map_err(|e| GitpinError::CommandFailed {
        command: render(args),
        stderr: e.to_string(),
    })
}

/// Run a git command that must exit zero
pub(crate) fn run(cwd: Option<&Path>, args: &[OsString]) -> Result<()> {
    let output = spawn(cwd, args)?;
    if output.status.success() {
        Ok(())
    } else {
        Err(GitpinError::CommandFailed {
            command: render(args),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Run a git read command whose output may legitimately be absent.
///
/// A non-zero exit or empty stdout maps to `None` (e.g. `remote.origin.url`
/// unset, or HEAD in a clone that was never checked out); only a failure to
/// spawn the subprocess is an error.
pub(crate) fn read(cwd: &Path, args: &[OsString]) -> Result<Option<String>> {
    let output = spawn(Some(cwd), args)?;
    if !output.status.success() {
        return Ok(None);
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value = stdout.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(value.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_joins_program_and_args() {
        let args = argv(&["clone", "--no-checkout", "--progress", "url", "dest"]);
        assert_eq!(render(&args), "git clone --no-checkout --progress url dest");
    }

    #[test]
    fn test_render_without_args() {
        assert_eq!(render(&[]), "git");
    }

    #[test]
    fn test_read_unset_config_is_none() {
        let temp = TempDir::new().unwrap();
        let value = read(temp.path(), &argv(&["config", "remote.origin.url"])).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_run_failure_reports_literal_command() {
        let temp = TempDir::new().unwrap();
        let err = run(Some(temp.path()), &argv(&["rev-parse", "HEAD"])).unwrap_err();
        match err {
            GitpinError::CommandFailed { command, .. } => {
                assert_eq!(command, "git rev-parse HEAD");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
