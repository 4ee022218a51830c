// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Anthology check: the script's artifact, verified twice.
//!
//! Runs the student's script two times back to back against a freshly
//! rebuilt expected artifact. The first run catches wrong assembly; the
//! second catches scripts that append instead of truncating. Whatever the
//! output path held before the check is restored on every exit path.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempPath;

use crate::check::{Check, CheckContext, CheckResult, Failure};
use crate::diff;
use crate::error::{Error, Result};
use crate::quest;

use super::script::is_executable;

/// Check 10: the anthology is assembled correctly and idempotently.
pub struct AnthologyCheck;

impl Check for AnthologyCheck {
    fn ordinal(&self) -> u8 {
        10
    }

    fn name(&self) -> &'static str {
        "anthology"
    }

    fn description(&self) -> &'static str {
        "anthology generation and idempotence"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        if !ctx.path(quest::HEADER_FILE).is_file() {
            return Ok(CheckResult::failed(
                self,
                Failure::Missing {
                    what: quest::HEADER_FILE.to_string(),
                },
            ));
        }

        let script = ctx.path(quest::SCRIPT_FILE);
        if !script.is_file() {
            return Ok(CheckResult::failed(
                self,
                Failure::Missing {
                    what: quest::SCRIPT_FILE.to_string(),
                },
            ));
        }
        if !is_executable(&script)? {
            return Ok(CheckResult::failed(
                self,
                Failure::NotExecutable {
                    path: quest::SCRIPT_FILE.into(),
                },
            ));
        }

        let mut guard = OutputGuard::acquire(ctx.root)?;
        let verdict = self.verify(ctx, &script);
        // Restore before surfacing anything. When verify itself errored,
        // that error wins and the guard's Drop already did the work.
        let restored = guard.restore();
        let verdict = verdict?;
        restored.map_err(|e| Error::io(ctx.path(quest::OUTPUT_FILE), e))?;
        Ok(verdict)
    }
}

impl AnthologyCheck {
    /// Run the script twice, comparing the artifact against a rebuilt
    /// expected anthology each time.
    fn verify(&self, ctx: &CheckContext, script: &Path) -> Result<CheckResult> {
        let output_path = ctx.path(quest::OUTPUT_FILE);

        for first_run in [true, false] {
            // Rebuilt per run: cheap, and deterministic by invariant.
            let expected = quest::expected_anthology(ctx.root)?;

            let attempt = if first_run { 1 } else { 2 };
            tracing::debug!(attempt, "invoking {}", quest::SCRIPT_FILE);
            // Blocking, no timeout: a hanging script hangs the grader.
            let output = Command::new(script)
                .current_dir(ctx.root)
                .output()
                .map_err(|e| Error::io(script, e))?;

            if !output.status.success() || !output_path.is_file() {
                // A script that exits non-zero or writes nothing has no
                // artifact to compare.
                return Ok(CheckResult::failed(
                    self,
                    Failure::Missing {
                        what: format!("{} (script produced no output)", quest::OUTPUT_FILE),
                    },
                ));
            }

            let actual =
                fs::read_to_string(&output_path).map_err(|e| Error::io(&output_path, e))?;
            if actual != expected {
                let failure = if first_run {
                    Failure::Mismatch {
                        path: quest::OUTPUT_FILE.into(),
                        what: "content differs from the expected anthology".to_string(),
                        diff: diff::unified(&expected, &actual),
                    }
                } else {
                    Failure::NotIdempotent {
                        path: quest::OUTPUT_FILE.into(),
                        diff: diff::unified(&expected, &actual).unwrap_or_default(),
                    }
                };
                return Ok(CheckResult::failed(self, failure));
            }
        }

        Ok(CheckResult::passed(self))
    }
}

/// Scoped snapshot of the output path.
///
/// Acquiring moves any pre-existing `anthology.txt` aside into a
/// dot-prefixed temporary file inside the quest directory (same
/// filesystem, so a rename suffices). Restoring deletes whatever the
/// script produced and moves the original back; `Drop` is the backstop so
/// restoration also happens on error paths.
struct OutputGuard {
    output: PathBuf,
    backup: Option<TempPath>,
    restored: bool,
}

impl OutputGuard {
    fn acquire(root: &Path) -> Result<Self> {
        let output = root.join(quest::OUTPUT_FILE);
        let backup = if output.is_file() {
            let tmp = tempfile::Builder::new()
                .prefix(".anthology-")
                .suffix(".orig")
                .tempfile_in(root)
                .map_err(|e| Error::io(root, e))?
                .into_temp_path();
            fs::rename(&output, &tmp).map_err(|e| Error::io(&output, e))?;
            tracing::debug!("moved existing {} aside", quest::OUTPUT_FILE);
            Some(tmp)
        } else {
            None
        };

        Ok(Self {
            output,
            backup,
            restored: false,
        })
    }

    fn restore(&mut self) -> std::io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        if self.output.is_file() {
            fs::remove_file(&self.output)?;
        }
        if let Some(backup) = self.backup.take() {
            backup.persist(&self.output)?;
        }
        Ok(())
    }
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!("failed to restore {}: {}", self.output.display(), e);
        }
    }
}

#[cfg(test)]
#[path = "anthology_tests.rs"]
mod tests;
