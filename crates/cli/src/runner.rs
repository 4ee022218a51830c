// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential check runner.
//!
//! Checks run strictly in ordinal order and the run stops at the first
//! failure: later checks depend on file-system state earlier ones verified,
//! so continuing past a failure would only cascade noise.

use std::path::Path;
use std::sync::Arc;

use crate::check::{Check, CheckContext};
use crate::error::{Error, Result};
use crate::output::TextFormatter;

/// Outcome of a run: how many checks passed and whether one failed.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Checks that passed before the run ended.
    pub passed: usize,
    /// Whether the run ended on a failing check.
    pub failed: bool,
}

impl RunSummary {
    /// Whether every executed check passed.
    pub fn all_passed(&self) -> bool {
        !self.failed
    }
}

/// The check runner executes checks one after another.
pub struct CheckRunner<'a> {
    root: &'a Path,
}

impl<'a> CheckRunner<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Run the given checks in order, streaming results to the formatter.
    ///
    /// Stops at the first failing check.
    pub fn run(
        &self,
        checks: Vec<Arc<dyn Check>>,
        formatter: &mut TextFormatter,
    ) -> Result<RunSummary> {
        let ctx = CheckContext { root: self.root };
        let mut passed = 0;

        for check in checks {
            tracing::debug!(check = check.name(), "running");
            let result = check.run(&ctx)?;
            formatter
                .write_check(&result)
                .map_err(|e| Error::io("stdout", e))?;

            if !result.is_pass() {
                return Ok(RunSummary {
                    passed,
                    failed: true,
                });
            }
            passed += 1;
        }

        Ok(RunSummary {
            passed,
            failed: false,
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
