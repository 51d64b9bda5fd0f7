//! Git capability probes
//!
//! Availability and version of the external git executable, probed by a
//! single memoized `git --version` spawn. Callers construct one
//! [`Capabilities`] value and pass it explicitly into the checkout engine
//! and the drift classifier; there is no ambient global state. Racing first
//! probes are safe because the computation is pure and deterministic.

use std::process::Command;
use std::sync::OnceLock;

use crate::error::{GitpinError, Result};

use super::exec::GIT;

/// Minimum git version whose clone/fetch understand `--progress`
const PROGRESS_SINCE: (u32, u32, u32) = (1, 7, 1);

/// Result of the single `git --version` probe.
///
/// A parseable banner implies availability; an available git with an
/// unparseable banner keeps `version` at `None` without losing `available`.
#[derive(Debug, Clone, Copy)]
struct Probe {
    available: bool,
    version: Option<(u32, u32, u32)>,
}

/// Memoized probes of the host git installation
#[derive(Debug, Default)]
pub struct Capabilities {
    probe: OnceLock<Probe>,
}

impl Capabilities {
    /// Create an unprobed capabilities service
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One `git --version` spawn feeds both fields
    fn probe(&self) -> Probe {
        *self.probe.get_or_init(|| match Command::new(GIT).arg("--version").output() {
            Ok(output) if output.status.success() => Probe {
                available: true,
                version: parse_version(&String::from_utf8_lossy(&output.stdout)),
            },
            _ => Probe {
                available: false,
                version: None,
            },
        })
    }

    /// Whether the git executable is on the search path
    pub fn available(&self) -> bool {
        self.probe().available
    }

    /// Fatal-error form of [`available`](Self::available), consulted before
    /// any operation that touches a repository
    pub fn ensure_available(&self) -> Result<()> {
        if self.available() {
            Ok(())
        } else {
            Err(GitpinError::GitUnavailable)
        }
    }

    /// The `(major, minor, patch)` of the installed git, if parseable
    pub fn version(&self) -> Option<(u32, u32, u32)> {
        self.probe().version
    }

    /// Whether clone/fetch may be given `--progress` (git >= 1.7.1)
    pub fn supports_progress(&self) -> bool {
        self.version().is_some_and(|version| version >= PROGRESS_SINCE)
    }
}

/// Parse the `git version X.Y.Z[...]` banner into a version triple.
///
/// Trailing non-numeric components (e.g. `2.39.2.windows.1`) are ignored;
/// missing minor/patch default to zero.
fn parse_version(banner: &str) -> Option<(u32, u32, u32)> {
    let numbers = banner
        .split_whitespace()
        .find(|token| token.chars().next().is_some_and(|c| c.is_ascii_digit()))?;

    let mut parts = numbers.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next().and_then(|part| part.parse().ok()).unwrap_or(0);
    let patch = parts
        .next()
        .map(|part| {
            part.chars()
                .take_while(char::is_ascii_digit)
                .collect::<String>()
        })
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0);

    Some((major, minor, patch))
}
