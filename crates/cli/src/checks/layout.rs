// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Layout check: the anthology source directories exist.

use crate::check::{Check, CheckContext, CheckResult, Failure};
use crate::error::Result;
use crate::quest;

/// Check 1: `notes/` and `drafts/` exist and are directories.
pub struct LayoutCheck;

impl Check for LayoutCheck {
    fn ordinal(&self) -> u8 {
        1
    }

    fn name(&self) -> &'static str {
        "layout"
    }

    fn description(&self) -> &'static str {
        "notes/ and drafts/ directories"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        for dir in [quest::NOTES_DIR, quest::DRAFTS_DIR] {
            if !ctx.path(dir).is_dir() {
                return Ok(CheckResult::failed(
                    self,
                    Failure::Missing {
                        what: format!("{dir}/ directory"),
                    },
                ));
            }
        }
        Ok(CheckResult::passed(self))
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
