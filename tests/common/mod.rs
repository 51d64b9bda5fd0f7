//! Common test utilities for gitpin integration tests

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// A scratch area holding an upstream repository and checkout destinations
pub struct TestRemote {
    /// Temporary directory, kept alive for the test's duration
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path of the upstream ("remote") repository
    pub upstream: PathBuf,
}

impl TestRemote {
    /// Create a fresh upstream repository with `master` as default branch
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let upstream = temp.path().join("upstream");
        std::fs::create_dir_all(&upstream).expect("Failed to create upstream directory");
        git(&upstream, &["init", "--initial-branch", "master"]);
        git(&upstream, &["config", "user.email", "test@example.com"]);
        git(&upstream, &["config", "user.name", "Test"]);
        git(&upstream, &["config", "commit.gpgsign", "false"]);
        Self { temp, upstream }
    }

    /// Upstream URL as a declaration would carry it
    pub fn url(&self) -> String {
        self.upstream.display().to_string()
    }

    /// A destination path inside the scratch area (not created)
    pub fn dest(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    /// Commit a file upstream and return the new tip revision
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> String {
        std::fs::write(self.upstream.join(name), content).expect("Failed to write file");
        git(&self.upstream, &["add", "."]);
        git(&self.upstream, &["commit", "-m", message]);
        self.rev_parse("HEAD")
    }

    /// Tag the current upstream tip
    #[allow(dead_code)]
    pub fn tag(&self, name: &str) {
        git(&self.upstream, &["tag", name]);
    }

    /// Record another repository as a submodule at `path` and commit it.
    ///
    /// Modern git refuses file-transport submodules by default; the fixture
    /// relaxes the policy for the `submodule add` itself, and tests that
    /// later materialize the submodule must relax it for the engine's child
    /// processes too.
    #[allow(dead_code)]
    pub fn add_submodule(&self, sub: &TestRemote, path: &str) {
        git(
            &self.upstream,
            &[
                "-c",
                "protocol.file.allow=always",
                "submodule",
                "add",
                &sub.url(),
                path,
            ],
        );
        git(&self.upstream, &["commit", "-m", "add submodule"]);
    }

    /// Resolve a revision in the upstream repository
    pub fn rev_parse(&self, rev: &str) -> String {
        git_stdout(&self.upstream, &["rev-parse", rev])
    }
}

/// Run git in `dir`, panicking on failure (fixture setup only)
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {args:?} failed in {}", dir.display());
}

/// Run git in `dir` and return trimmed stdout, panicking on failure
pub fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed in {}",
        dir.display()
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
