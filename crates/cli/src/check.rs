//! Check trait, context, and result types.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Context passed to all checks during execution.
pub struct CheckContext<'a> {
    /// Quest directory being graded (canonicalized).
    pub root: &'a Path,
}

impl CheckContext<'_> {
    /// Resolve a quest-relative path against the root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

/// The Check trait defines a single grading check.
///
/// Object-safe to allow dynamic dispatch via `Arc<dyn Check>`.
pub trait Check: Send + Sync {
    /// Position of this check in the quest, 1-based.
    fn ordinal(&self) -> u8;

    /// Short identifier (e.g., "header-text", "anthology").
    fn name(&self) -> &'static str;

    /// Human-readable description for help output.
    fn description(&self) -> &'static str;

    /// Run the check against the quest directory.
    ///
    /// `Err` is reserved for harness-level trouble (I/O the grader could
    /// not perform); a student defect is a `CheckResult` carrying a
    /// `Failure`.
    fn run(&self, ctx: &CheckContext) -> Result<CheckResult>;
}

/// A failed check's diagnosis. Every failure is terminal for its check.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Failure {
    /// A required file, directory, or corpus entry is absent.
    #[error("missing {what}")]
    Missing { what: String },

    /// Produced or hand-written content differs from what the quest expects.
    #[error("{path}: {what}")]
    Mismatch {
        path: PathBuf,
        what: String,
        /// Unified diff shown under the failure line, when line-diffable.
        diff: Option<String>,
    },

    /// The script lacks an execute permission bit.
    #[error("{path}: not executable (try chmod +x)")]
    NotExecutable { path: PathBuf },

    /// The second script run changed the output.
    #[error("{path}: running the script twice changed the output (overwrite, don't append)")]
    NotIdempotent { path: PathBuf, diff: String },
}

impl Failure {
    /// Diff block to print under the failure line, if any.
    pub fn diff(&self) -> Option<&str> {
        match self {
            Failure::Mismatch { diff, .. } => diff.as_deref(),
            Failure::NotIdempotent { diff, .. } => Some(diff.as_str()),
            _ => None,
        }
    }
}

/// Result of running a single check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Ordinal of the check that produced this result.
    pub ordinal: u8,

    /// Check identifier.
    pub name: String,

    /// The failure, if the check did not pass.
    pub failure: Option<Failure>,
}

impl CheckResult {
    /// Create a passing result for a check.
    pub fn passed(check: &dyn Check) -> Self {
        Self {
            ordinal: check.ordinal(),
            name: check.name().to_string(),
            failure: None,
        }
    }

    /// Create a failing result for a check.
    pub fn failed(check: &dyn Check, failure: Failure) -> Self {
        Self {
            ordinal: check.ordinal(),
            name: check.name().to_string(),
            failure: Some(failure),
        }
    }

    /// Whether the check passed.
    pub fn is_pass(&self) -> bool {
        self.failure.is_none()
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
